//! Pet repository implementation over SQLite.
//!
//! Pets are loaded joined with their type and with visits included; saves
//! cascade to the owned visits inside one transaction.

use std::sync::Arc;

use async_trait::async_trait;
use petclinic_core::PetRepository as PetRepositoryPort;
use petclinic_domain::{ClinicError, Pet, PetType, Result as DomainResult};
use rusqlite::{params, Connection, Row};
use tokio::task;

use super::manager::{map_join_error, map_sql_error, DbManager};
use super::rows;
use super::visit_repository::{load_visits_for_pet, save_visit};

const PET_SELECT: &str = "SELECT p.id, p.name, p.birth_date, p.owner_id, t.id, t.name
     FROM pets p JOIN types t ON t.id = p.type_id";

/// SQLite-backed implementation of `PetRepository`.
pub struct SqlitePetRepository {
    db: Arc<DbManager>,
}

impl SqlitePetRepository {
    /// Create a new repository instance.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PetRepositoryPort for SqlitePetRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Pet>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<Pet>> {
            let conn = db.get_connection()?;

            let result = conn.query_row(
                &format!("{PET_SELECT} WHERE p.id = ?1"),
                params![id],
                map_pet_row,
            );

            match result {
                Ok(mut pet) => {
                    pet.visits = load_visits_for_pet(&conn, id).map_err(map_sql_error)?;
                    Ok(Some(pet))
                }
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(err) => Err(map_sql_error(err)),
            }
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_pet_types(&self) -> DomainResult<Vec<PetType>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<PetType>> {
            let conn = db.get_connection()?;

            let mut stmt = conn
                .prepare("SELECT id, name FROM types ORDER BY name")
                .map_err(map_sql_error)?;
            let types = stmt
                .query_map([], |row| {
                    Ok(PetType { id: Some(row.get(0)?), name: row.get(1)? })
                })
                .map_err(map_sql_error)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(map_sql_error)?;

            Ok(types)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn save(&self, pet: Pet) -> DomainResult<Pet> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Pet> {
            db.with_transaction(|tx| save_pet(tx, pet))
        })
        .await
        .map_err(map_join_error)?
    }
}

/// Load all pets belonging to an owner, visits included.
pub(crate) fn load_pets_for_owner(
    conn: &Connection,
    owner_id: i64,
) -> rusqlite::Result<Vec<Pet>> {
    let mut stmt = conn.prepare(&format!("{PET_SELECT} WHERE p.owner_id = ?1 ORDER BY p.id"))?;
    let mut pets =
        stmt.query_map(params![owner_id], map_pet_row)?.collect::<rusqlite::Result<Vec<_>>>()?;

    for pet in &mut pets {
        if let Some(id) = pet.id {
            pet.visits = load_visits_for_pet(conn, id)?;
        }
    }

    Ok(pets)
}

/// Insert or update a single pet, cascading to its visits. Shared with the
/// owner repository's cascade save; the caller provides the transaction.
pub(crate) fn save_pet(conn: &Connection, mut pet: Pet) -> DomainResult<Pet> {
    let type_id = pet
        .pet_type
        .id
        .ok_or_else(|| ClinicError::InvalidInput("pet type must reference stored data".into()))?;
    let birth_date = pet.birth_date().map(rows::format_date);

    match pet.id {
        None => {
            conn.execute(
                "INSERT INTO pets (name, birth_date, type_id, owner_id) VALUES (?1, ?2, ?3, ?4)",
                params![pet.name, birth_date, type_id, pet.owner_id],
            )
            .map_err(map_sql_error)?;
            pet.id = Some(conn.last_insert_rowid());
        }
        Some(id) => {
            conn.execute(
                "UPDATE pets SET name = ?1, birth_date = ?2, type_id = ?3, owner_id = ?4
                 WHERE id = ?5",
                params![pet.name, birth_date, type_id, pet.owner_id, id],
            )
            .map_err(map_sql_error)?;
        }
    }

    let pet_id = pet.id;
    let visits = std::mem::take(&mut pet.visits);
    pet.visits = visits
        .into_iter()
        .map(|mut visit| {
            visit.pet_id = pet_id;
            save_visit(conn, visit)
        })
        .collect::<DomainResult<Vec<_>>>()?;

    Ok(pet)
}

fn map_pet_row(row: &Row<'_>) -> rusqlite::Result<Pet> {
    let pet_type = PetType { id: Some(row.get(4)?), name: row.get(5)? };
    Ok(Pet::from_parts(
        row.get(0)?,
        row.get::<_, String>(1)?,
        rows::opt_date_column(row, 2)?,
        pet_type,
        row.get(3)?,
    ))
}
