//! Owner repository implementation over SQLite.
//!
//! Owners are loaded with their pets (types and visits included); saves
//! cascade to the owned pets inside one transaction.

use std::sync::Arc;

use async_trait::async_trait;
use petclinic_core::OwnerRepository as OwnerRepositoryPort;
use petclinic_domain::{Owner, Result as DomainResult};
use rusqlite::{params, Connection, Row};
use tokio::task;

use super::manager::{map_join_error, map_sql_error, DbManager};
use super::pet_repository::{load_pets_for_owner, save_pet};

const OWNER_SELECT: &str =
    "SELECT id, first_name, last_name, address, city, telephone FROM owners";

/// SQLite-backed implementation of `OwnerRepository`.
pub struct SqliteOwnerRepository {
    db: Arc<DbManager>,
}

impl SqliteOwnerRepository {
    /// Create a new repository instance.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OwnerRepositoryPort for SqliteOwnerRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Owner>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<Owner>> {
            let conn = db.get_connection()?;

            let result = conn.query_row(
                &format!("{OWNER_SELECT} WHERE id = ?1"),
                params![id],
                map_owner_row,
            );

            match result {
                Ok(mut owner) => {
                    owner.pets = load_pets_for_owner(&conn, id).map_err(map_sql_error)?;
                    Ok(Some(owner))
                }
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(err) => Err(map_sql_error(err)),
            }
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_by_last_name(&self, last_name: &str) -> DomainResult<Vec<Owner>> {
        let db = Arc::clone(&self.db);
        let last_name = last_name.to_string();

        task::spawn_blocking(move || -> DomainResult<Vec<Owner>> {
            let conn = db.get_connection()?;

            let mut stmt = conn
                .prepare(&format!(
                    "{OWNER_SELECT} WHERE last_name LIKE ?1 || '%' ORDER BY id"
                ))
                .map_err(map_sql_error)?;
            let mut owners = stmt
                .query_map(params![last_name], map_owner_row)
                .map_err(map_sql_error)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(map_sql_error)?;

            for owner in &mut owners {
                if let Some(id) = owner.id {
                    owner.pets = load_pets_for_owner(&conn, id).map_err(map_sql_error)?;
                }
            }

            Ok(owners)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn save(&self, owner: Owner) -> DomainResult<Owner> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Owner> {
            db.with_transaction(|tx| save_owner(tx, owner))
        })
        .await
        .map_err(map_join_error)?
    }
}

/// Insert or update an owner, cascading to its pets. The caller provides
/// the transaction.
fn save_owner(conn: &Connection, mut owner: Owner) -> DomainResult<Owner> {
    match owner.id {
        None => {
            conn.execute(
                "INSERT INTO owners (first_name, last_name, address, city, telephone)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    owner.first_name(),
                    owner.last_name,
                    owner.address,
                    owner.city,
                    owner.telephone()
                ],
            )
            .map_err(map_sql_error)?;
            owner.id = Some(conn.last_insert_rowid());
        }
        Some(id) => {
            conn.execute(
                "UPDATE owners SET first_name = ?1, last_name = ?2, address = ?3, city = ?4,
                 telephone = ?5 WHERE id = ?6",
                params![
                    owner.first_name(),
                    owner.last_name,
                    owner.address,
                    owner.city,
                    owner.telephone(),
                    id
                ],
            )
            .map_err(map_sql_error)?;
        }
    }

    let owner_id = owner.id;
    let pets = std::mem::take(&mut owner.pets);
    owner.pets = pets
        .into_iter()
        .map(|mut pet| {
            pet.owner_id = owner_id;
            save_pet(conn, pet)
        })
        .collect::<DomainResult<Vec<_>>>()?;

    Ok(owner)
}

fn map_owner_row(row: &Row<'_>) -> rusqlite::Result<Owner> {
    Ok(Owner::from_parts(
        row.get(0)?,
        row.get::<_, String>(1)?,
        row.get::<_, String>(2)?,
        row.get::<_, String>(3)?,
        row.get::<_, String>(4)?,
        row.get::<_, String>(5)?,
    ))
}

#[cfg(test)]
mod tests {
    use petclinic_core::OwnerRepository as _;
    use petclinic_domain::{Pet, PetType};
    use tempfile::TempDir;

    use super::*;

    fn setup_test_db() -> (Arc<DbManager>, TempDir) {
        let temp_dir = TempDir::new().expect("create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let manager = DbManager::new(db_path, 4).expect("create db manager");
        manager.run_migrations().expect("run migrations");
        manager.load_sample_data().expect("load sample data");
        (Arc::new(manager), temp_dir)
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn owner_one_loads_with_one_cat() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteOwnerRepository::new(db);

        let owner = repo.find_by_id(1).await.expect("query owner").expect("owner exists");
        assert!(owner.last_name.starts_with("Franklin"));
        assert_eq!(owner.pets.len(), 1);
        assert_eq!(owner.pets[0].pet_type.name, "cat");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn davis_prefix_matches_two_owners() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteOwnerRepository::new(db);

        let owners = repo.find_by_last_name("Davis").await.expect("query owners");
        assert_eq!(owners.len(), 2);

        let owners = repo.find_by_last_name("Daviss").await.expect("query owners");
        assert!(owners.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn inserting_an_owner_assigns_a_fresh_id() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteOwnerRepository::new(db);

        let mut owner = Owner::new();
        owner.set_first_name("Sam");
        owner.last_name = "Schultz".into();
        owner.address = "4, Evans Street".into();
        owner.city = "Wollongong".into();
        owner.set_telephone("4444444444");

        let saved = repo.save(owner).await.expect("save owner");
        let id = saved.id.expect("id assigned");
        assert!(id > 10, "generated id must follow the seeded rows");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn owner_save_cascades_new_pets() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteOwnerRepository::new(db);

        let mut owner = repo.find_by_id(6).await.expect("query owner").expect("owner exists");
        let pets_before = owner.pets.len();

        let mut pet = Pet::new();
        pet.name = "bowser".into();
        pet.pet_type = PetType { id: Some(2), name: "dog".into() };
        owner.add_pet(pet);

        let saved = repo.save(owner).await.expect("save owner");
        assert!(saved.pets.iter().all(|p| p.id.is_some()));

        let refetched = repo.find_by_id(6).await.expect("query owner").expect("owner exists");
        assert_eq!(refetched.pets.len(), pets_before + 1);
    }
}
