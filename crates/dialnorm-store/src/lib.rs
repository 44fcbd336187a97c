pub mod db;
pub mod error;
pub mod migrate;
pub mod paths;
pub mod reconcile;
pub mod repo;

use crate::error::{Result, StoreError};
use dialnorm_core::{ReconcilePlan, SeedList};
use rusqlite::Connection;
use std::path::Path;

pub use reconcile::{DeleteFailure, ReconcileReport, SeedOutcome, SkippedInsert};

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = db::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Round-trip a trivial query to prove the database is usable.
    pub fn ping(&self) -> Result<()> {
        self.conn
            .query_row("SELECT 1;", [], |row| row.get::<_, i64>(0))
            .map_err(StoreError::Connection)?;
        Ok(())
    }

    pub fn migrate(&self) -> Result<()> {
        migrate::run_migrations(&self.conn)
    }

    pub fn schema_version(&self) -> Result<i64> {
        migrate::schema_version(&self.conn)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn phone_numbers(&self) -> repo::PhoneNumbersRepo<'_> {
        repo::PhoneNumbersRepo::new(&self.conn)
    }

    pub fn reconcile(&self, seed: &SeedList) -> Result<ReconcileReport> {
        reconcile::reconcile(&self.phone_numbers(), seed)
    }

    pub fn plan(&self, seed: &SeedList) -> Result<ReconcilePlan> {
        reconcile::dry_run(&self.phone_numbers(), seed)
    }
}
