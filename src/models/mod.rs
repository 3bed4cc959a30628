pub mod filters;
pub mod prescription;
pub mod seed;

pub use filters::{CategoryFilter, StatusFilter};
pub use prescription::{Prescription, PrescriptionPatch};
