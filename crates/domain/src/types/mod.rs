//! Entity types for the clinic domain

pub mod owner;
pub mod pet;
pub mod vet;
pub mod visit;

pub use owner::Owner;
pub use pet::{Pet, PetType};
pub use vet::{Specialty, Vet};
pub use visit::Visit;
