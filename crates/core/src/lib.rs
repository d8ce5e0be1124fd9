//! # PetClinic Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for clinic persistence
//! - The clinic service facade
//!
//! ## Architecture Principles
//! - Only depends on `petclinic-domain`
//! - No database or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod clinic;

// Re-export specific items to avoid ambiguity
pub use clinic::ports::{OwnerRepository, PetRepository, VetRepository, VisitRepository};
pub use clinic::ClinicService;
