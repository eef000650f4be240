pub mod booking;
pub mod notify;

pub use booking::AppointmentBookingService;
pub use notify::MailClient;
