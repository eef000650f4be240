pub mod daily;
pub mod sms;

pub use daily::DailyVideoClient;
pub use sms::SmsClient;
