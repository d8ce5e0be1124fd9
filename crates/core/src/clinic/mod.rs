//! Clinic service facade and its repository ports.

pub mod ports;
pub mod service;

pub use service::ClinicService;
