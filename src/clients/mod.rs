pub mod patient_client;

pub use patient_client::*;
