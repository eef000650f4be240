pub mod prescription;

pub use prescription::PrescriptionService;
