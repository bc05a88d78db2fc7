//! Bootstrap error types
//!
//! Every variant carries the underlying database error as its source. All
//! of these are fatal: the bootstrap sequence stops at the step that failed.

use std::fmt;

use sea_orm::DbErr;

#[derive(Debug)]
pub enum BootstrapError {
    /// Connection could not be established or verified
    Connection(DbErr),
    /// DDL application failed for a table
    Schema { table: String, source: DbErr },
    /// A seed insert failed outside the row-already-present no-op path
    Seed { table: String, source: DbErr },
    /// Reading a table back after seeding failed
    Report(DbErr),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::Connection(e) => write!(f, "Connection failed: {}", e),
            BootstrapError::Schema { table, source } => {
                write!(f, "Schema creation failed for table '{}': {}", table, source)
            }
            BootstrapError::Seed { table, source } => {
                write!(f, "Seeding failed for table '{}': {}", table, source)
            }
            BootstrapError::Report(e) => write!(f, "Reading catalog failed: {}", e),
        }
    }
}

impl std::error::Error for BootstrapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BootstrapError::Connection(e) | BootstrapError::Report(e) => Some(e),
            BootstrapError::Schema { source, .. } | BootstrapError::Seed { source, .. } => {
                Some(source)
            }
        }
    }
}
