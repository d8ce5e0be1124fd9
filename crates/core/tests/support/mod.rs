//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for the clinic repository ports, enabling
//! deterministic service tests without database dependencies.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use petclinic_core::{OwnerRepository, PetRepository, VetRepository, VisitRepository};
use petclinic_domain::{Owner, Pet, PetType, Result as DomainResult, Vet, Visit};

fn next_id_after<I: Iterator<Item = Option<i64>>>(ids: I) -> i64 {
    ids.flatten().max().unwrap_or(0) + 1
}

/// In-memory mock for `OwnerRepository`.
///
/// Assigns sequential ids on save, mirroring the id-generation contract of
/// the SQLite implementation.
pub struct MockOwnerRepository {
    owners: Mutex<Vec<Owner>>,
    next_id: AtomicI64,
}

impl Default for MockOwnerRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl MockOwnerRepository {
    /// Create a new mock seeded with the provided owners.
    pub fn new(owners: Vec<Owner>) -> Self {
        let next_id = next_id_after(owners.iter().map(|o| o.id));
        Self { owners: Mutex::new(owners), next_id: AtomicI64::new(next_id) }
    }

    fn assign_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl OwnerRepository for MockOwnerRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Owner>> {
        let owners = self.owners.lock().expect("owner store lock");
        Ok(owners.iter().find(|o| o.id == Some(id)).cloned())
    }

    async fn find_by_last_name(&self, last_name: &str) -> DomainResult<Vec<Owner>> {
        let owners = self.owners.lock().expect("owner store lock");
        Ok(owners.iter().filter(|o| o.last_name.starts_with(last_name)).cloned().collect())
    }

    async fn save(&self, mut owner: Owner) -> DomainResult<Owner> {
        if owner.id.is_none() {
            owner.id = Some(self.assign_id());
        }
        for pet in &mut owner.pets {
            pet.owner_id = owner.id;
            if pet.id.is_none() {
                pet.id = Some(self.assign_id());
            }
        }

        let mut owners = self.owners.lock().expect("owner store lock");
        if let Some(existing) = owners.iter_mut().find(|o| o.id == owner.id) {
            *existing = owner.clone();
        } else {
            owners.push(owner.clone());
        }
        Ok(owner)
    }
}

/// In-memory mock for `PetRepository`.
pub struct MockPetRepository {
    pets: Mutex<Vec<Pet>>,
    types: Vec<PetType>,
    next_id: AtomicI64,
}

impl Default for MockPetRepository {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl MockPetRepository {
    /// Create a new mock seeded with the provided pets and type reference
    /// data.
    pub fn new(pets: Vec<Pet>, types: Vec<PetType>) -> Self {
        let next_id = next_id_after(pets.iter().map(|p| p.id));
        Self { pets: Mutex::new(pets), types, next_id: AtomicI64::new(next_id) }
    }
}

#[async_trait]
impl PetRepository for MockPetRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Pet>> {
        let pets = self.pets.lock().expect("pet store lock");
        Ok(pets.iter().find(|p| p.id == Some(id)).cloned())
    }

    async fn find_pet_types(&self) -> DomainResult<Vec<PetType>> {
        Ok(self.types.clone())
    }

    async fn save(&self, mut pet: Pet) -> DomainResult<Pet> {
        if pet.id.is_none() {
            pet.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst));
        }

        let mut pets = self.pets.lock().expect("pet store lock");
        if let Some(existing) = pets.iter_mut().find(|p| p.id == pet.id) {
            *existing = pet.clone();
        } else {
            pets.push(pet.clone());
        }
        Ok(pet)
    }
}

/// In-memory mock for `VetRepository`.
///
/// Stores a fixed set of vets; the clinic never mutates them.
#[derive(Default)]
pub struct MockVetRepository {
    vets: Vec<Vet>,
}

impl MockVetRepository {
    pub fn new(vets: Vec<Vet>) -> Self {
        Self { vets }
    }
}

#[async_trait]
impl VetRepository for MockVetRepository {
    async fn find_all(&self) -> DomainResult<Vec<Vet>> {
        Ok(self.vets.clone())
    }
}

/// In-memory mock for `VisitRepository`.
pub struct MockVisitRepository {
    visits: Mutex<Vec<Visit>>,
    next_id: AtomicI64,
}

impl Default for MockVisitRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl MockVisitRepository {
    pub fn new(visits: Vec<Visit>) -> Self {
        let next_id = next_id_after(visits.iter().map(|v| v.id));
        Self { visits: Mutex::new(visits), next_id: AtomicI64::new(next_id) }
    }
}

#[async_trait]
impl VisitRepository for MockVisitRepository {
    async fn find_by_pet_id(&self, pet_id: i64) -> DomainResult<Vec<Visit>> {
        let visits = self.visits.lock().expect("visit store lock");
        let mut matching: Vec<Visit> =
            visits.iter().filter(|v| v.pet_id == Some(pet_id)).cloned().collect();
        matching.sort_by_key(|v| v.date);
        Ok(matching)
    }

    async fn save(&self, mut visit: Visit) -> DomainResult<Visit> {
        if visit.id.is_none() {
            visit.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst));
        }

        let mut visits = self.visits.lock().expect("visit store lock");
        if let Some(existing) = visits.iter_mut().find(|v| v.id == visit.id) {
            *existing = visit.clone();
        } else {
            visits.push(visit.clone());
        }
        Ok(visit)
    }
}
