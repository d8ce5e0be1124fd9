//! # PetClinic Domain
//!
//! Business domain types and models for the clinic service.
//!
//! This crate contains:
//! - Entity types (Owner, Pet, PetType, Vet, Specialty, Visit)
//! - Field validation rules with silent-rejection setter semantics
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other petclinic crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
