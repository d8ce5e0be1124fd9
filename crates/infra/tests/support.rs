use std::sync::Arc;

use petclinic_core::ClinicService;
use petclinic_infra::database::{
    DbManager, SqliteOwnerRepository, SqlitePetRepository, SqliteVetRepository,
    SqliteVisitRepository,
};
use tempfile::TempDir;

/// Temporary database wrapper that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    _temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a new temporary database with the schema and sample data
    /// applied.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let db_path = temp_dir.path().join("test.db");

        let manager = DbManager::new(&db_path, 4).expect("db manager should be created");
        manager.run_migrations().expect("migrations should succeed");
        manager.load_sample_data().expect("sample data should load");

        Self { manager: Arc::new(manager), _temp_dir: temp_dir }
    }

    /// Build a clinic service wired with SQLite repositories over this
    /// database.
    pub fn clinic_service(&self) -> ClinicService {
        ClinicService::new(
            Arc::new(SqliteOwnerRepository::new(Arc::clone(&self.manager))),
            Arc::new(SqlitePetRepository::new(Arc::clone(&self.manager))),
            Arc::new(SqliteVetRepository::new(Arc::clone(&self.manager))),
            Arc::new(SqliteVisitRepository::new(Arc::clone(&self.manager))),
        )
    }
}

impl Default for TestDatabase {
    fn default() -> Self {
        Self::new()
    }
}

/// Install a tracing subscriber for test output (idempotent).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_env_filter("debug").with_test_writer().try_init();
}
