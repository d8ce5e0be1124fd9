//! Clinic service facade - core business logic

use std::sync::Arc;

use petclinic_domain::{ClinicError, Owner, Pet, PetType, Result, Vet, Visit};
use tracing::debug;

use super::ports::{OwnerRepository, PetRepository, VetRepository, VisitRepository};

/// Facade over the clinic repositories.
///
/// Every find/save operation of the clinic goes through this service. The
/// repositories are injected explicitly so tests can substitute in-memory
/// implementations for the SQLite-backed ones.
pub struct ClinicService {
    owners: Arc<dyn OwnerRepository>,
    pets: Arc<dyn PetRepository>,
    vets: Arc<dyn VetRepository>,
    visits: Arc<dyn VisitRepository>,
}

impl ClinicService {
    /// Create a new clinic service over the given repositories.
    pub fn new(
        owners: Arc<dyn OwnerRepository>,
        pets: Arc<dyn PetRepository>,
        vets: Arc<dyn VetRepository>,
        visits: Arc<dyn VisitRepository>,
    ) -> Self {
        Self { owners, pets, vets, visits }
    }

    /// Look up an owner by id, pets included.
    ///
    /// # Errors
    /// Returns `ClinicError::NotFound` when no owner has the given id.
    pub async fn find_owner_by_id(&self, id: i64) -> Result<Owner> {
        self.owners
            .find_by_id(id)
            .await?
            .ok_or_else(|| ClinicError::NotFound(format!("owner {id}")))
    }

    /// Find owners whose last name starts with the given value. Returns an
    /// empty vec (not an error) when none match.
    pub async fn find_owner_by_last_name(&self, last_name: &str) -> Result<Vec<Owner>> {
        self.owners.find_by_last_name(last_name).await
    }

    /// Save an owner, cascading to its pets. Inserts assign a generated id
    /// as an observable side effect on the returned entity.
    pub async fn save_owner(&self, owner: Owner) -> Result<Owner> {
        debug!(last_name = %owner.last_name, update = owner.id.is_some(), "saving owner");
        self.owners.save(owner).await
    }

    /// Look up a pet by id, visits included.
    ///
    /// # Errors
    /// Returns `ClinicError::NotFound` when no pet has the given id.
    pub async fn find_pet_by_id(&self, id: i64) -> Result<Pet> {
        self.pets
            .find_by_id(id)
            .await?
            .ok_or_else(|| ClinicError::NotFound(format!("pet {id}")))
    }

    /// All pet types, ordered by name.
    pub async fn find_pet_types(&self) -> Result<Vec<PetType>> {
        self.pets.find_pet_types().await
    }

    /// Save a pet, cascading to its visits. Same insert/update contract as
    /// [`ClinicService::save_owner`].
    pub async fn save_pet(&self, pet: Pet) -> Result<Pet> {
        debug!(name = %pet.name, update = pet.id.is_some(), "saving pet");
        self.pets.save(pet).await
    }

    /// All vets with their specialties.
    pub async fn find_vets(&self) -> Result<Vec<Vet>> {
        self.vets.find_all().await
    }

    /// All visits for a pet, ordered by date ascending.
    pub async fn find_visits_by_pet_id(&self, pet_id: i64) -> Result<Vec<Visit>> {
        self.visits.find_by_pet_id(pet_id).await
    }

    /// Save a visit.
    pub async fn save_visit(&self, visit: Visit) -> Result<Visit> {
        self.visits.save(visit).await
    }
}
