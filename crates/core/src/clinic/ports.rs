//! Port interfaces for clinic persistence
//!
//! These traits define the boundaries between the clinic service and the
//! storage implementations. Lookups by id return `Option`; the service
//! facade maps misses to `ClinicError::NotFound`.

use async_trait::async_trait;
use petclinic_domain::{Owner, Pet, PetType, Result, Vet, Visit};

/// Owner persistence and retrieval
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Look up a single owner by id, pets included.
    async fn find_by_id(&self, id: i64) -> Result<Option<Owner>>;

    /// Find owners whose last name starts with the given value. An empty
    /// result is not an error.
    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Owner>>;

    /// Insert when the id is unset, update otherwise; cascades the save to
    /// the owner's pets. Returns the entity with generated ids filled in.
    async fn save(&self, owner: Owner) -> Result<Owner>;
}

/// Pet persistence and pet type reference data
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Look up a single pet by id, visits included (ordered by date).
    async fn find_by_id(&self, id: i64) -> Result<Option<Pet>>;

    /// All pet types, ordered by name.
    async fn find_pet_types(&self) -> Result<Vec<PetType>>;

    /// Insert when the id is unset, update otherwise; cascades the save to
    /// the pet's visits. Returns the entity with generated ids filled in.
    async fn save(&self, pet: Pet) -> Result<Pet>;
}

/// Vet retrieval
#[async_trait]
pub trait VetRepository: Send + Sync {
    /// All vets with their specialties (ordered by specialty name).
    async fn find_all(&self) -> Result<Vec<Vet>>;
}

/// Visit persistence and retrieval
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// All visits for a pet, ordered by date ascending.
    async fn find_by_pet_id(&self, pet_id: i64) -> Result<Vec<Visit>>;

    /// Insert when the id is unset, update otherwise. Returns the entity
    /// with the generated id filled in.
    async fn save(&self, visit: Visit) -> Result<Visit>;
}
