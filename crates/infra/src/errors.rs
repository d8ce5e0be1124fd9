//! Infrastructure error types

use petclinic_domain::ClinicError;
use thiserror::Error;

/// Errors raised inside the infrastructure layer before they are mapped
/// into the domain error type.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(String),
}

impl From<InfraError> for ClinicError {
    fn from(err: InfraError) -> Self {
        match err {
            InfraError::Sqlite(e) => ClinicError::Database(format!("SQLite error: {e}")),
            InfraError::Pool(e) => ClinicError::Database(format!("Pool error: {e}")),
            InfraError::Io(e) => ClinicError::Database(format!("IO error: {e}")),
            InfraError::ConfigParse(msg) => ClinicError::Config(msg),
        }
    }
}
