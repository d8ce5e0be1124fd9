//! Visit repository implementation over SQLite.

use std::sync::Arc;

use async_trait::async_trait;
use petclinic_core::VisitRepository as VisitRepositoryPort;
use petclinic_domain::{ClinicError, Result as DomainResult, Visit};
use rusqlite::{params, Connection, Row};
use tokio::task;

use super::manager::{map_join_error, map_sql_error, DbManager};
use super::rows;

/// SQLite-backed implementation of `VisitRepository`.
pub struct SqliteVisitRepository {
    db: Arc<DbManager>,
}

impl SqliteVisitRepository {
    /// Create a new repository instance.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VisitRepositoryPort for SqliteVisitRepository {
    async fn find_by_pet_id(&self, pet_id: i64) -> DomainResult<Vec<Visit>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Visit>> {
            let conn = db.get_connection()?;
            load_visits_for_pet(&conn, pet_id).map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn save(&self, visit: Visit) -> DomainResult<Visit> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Visit> {
            let conn = db.get_connection()?;
            save_visit(&conn, visit)
        })
        .await
        .map_err(map_join_error)?
    }
}

/// Load all visits for a pet, ordered by date ascending.
pub(crate) fn load_visits_for_pet(conn: &Connection, pet_id: i64) -> rusqlite::Result<Vec<Visit>> {
    let mut stmt = conn.prepare(
        "SELECT id, pet_id, visit_date, description
         FROM visits WHERE pet_id = ?1 ORDER BY visit_date ASC, id ASC",
    )?;
    let visits = stmt.query_map(params![pet_id], map_visit_row)?.collect();
    visits
}

/// Insert or update a single visit. Shared with the pet repository's
/// cascade save.
pub(crate) fn save_visit(conn: &Connection, mut visit: Visit) -> DomainResult<Visit> {
    let pet_id = visit
        .pet_id
        .ok_or_else(|| ClinicError::InvalidInput("visit must belong to a pet".into()))?;
    let date = rows::format_date(visit.date);

    match visit.id {
        None => {
            conn.execute(
                "INSERT INTO visits (pet_id, visit_date, description) VALUES (?1, ?2, ?3)",
                params![pet_id, date, visit.description],
            )
            .map_err(map_sql_error)?;
            visit.id = Some(conn.last_insert_rowid());
        }
        Some(id) => {
            conn.execute(
                "UPDATE visits SET pet_id = ?1, visit_date = ?2, description = ?3 WHERE id = ?4",
                params![pet_id, date, visit.description, id],
            )
            .map_err(map_sql_error)?;
        }
    }

    Ok(visit)
}

fn map_visit_row(row: &Row<'_>) -> rusqlite::Result<Visit> {
    Ok(Visit {
        id: Some(row.get(0)?),
        pet_id: Some(row.get(1)?),
        date: rows::date_column(row, 2)?,
        description: row.get(3)?,
    })
}
