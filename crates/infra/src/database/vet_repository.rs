//! Vet repository implementation over SQLite.

use std::sync::Arc;

use async_trait::async_trait;
use petclinic_core::VetRepository as VetRepositoryPort;
use petclinic_domain::{Result as DomainResult, Specialty, Vet};
use rusqlite::{params, Connection};
use tokio::task;

use super::manager::{map_join_error, map_sql_error, DbManager};

/// SQLite-backed implementation of `VetRepository`.
pub struct SqliteVetRepository {
    db: Arc<DbManager>,
}

impl SqliteVetRepository {
    /// Create a new repository instance.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VetRepositoryPort for SqliteVetRepository {
    async fn find_all(&self) -> DomainResult<Vec<Vet>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Vet>> {
            let conn = db.get_connection()?;

            let mut stmt = conn
                .prepare("SELECT id, first_name, last_name FROM vets ORDER BY id")
                .map_err(map_sql_error)?;
            let mut vets = stmt
                .query_map([], |row| {
                    Ok(Vet {
                        id: Some(row.get(0)?),
                        first_name: row.get(1)?,
                        last_name: row.get(2)?,
                        specialties: Vec::new(),
                    })
                })
                .map_err(map_sql_error)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(map_sql_error)?;

            for vet in &mut vets {
                if let Some(id) = vet.id {
                    vet.specialties =
                        load_specialties_for_vet(&conn, id).map_err(map_sql_error)?;
                }
            }

            Ok(vets)
        })
        .await
        .map_err(map_join_error)?
    }
}

/// Load a vet's specialties, ordered by name.
fn load_specialties_for_vet(conn: &Connection, vet_id: i64) -> rusqlite::Result<Vec<Specialty>> {
    let mut stmt = conn.prepare(
        "SELECT s.id, s.name
         FROM specialties s
         JOIN vet_specialties vs ON vs.specialty_id = s.id
         WHERE vs.vet_id = ?1
         ORDER BY s.name",
    )?;
    let specialties = stmt
        .query_map(params![vet_id], |row| {
            Ok(Specialty { id: Some(row.get(0)?), name: row.get(1)? })
        })?
        .collect();
    specialties
}
