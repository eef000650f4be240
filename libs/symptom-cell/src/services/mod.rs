pub mod advice;

pub use advice::SymptomAdviceClient;
