//! One reconciliation pass over the `phone_numbers` table.
//!
//! The pass is strictly linear: fetch, seed when the table is empty, derive
//! the canonical set, delete stale values, insert canonical values. Only a
//! failed fetch aborts it. Seed, delete and insert failures are recorded in
//! the returned [`ReconcileReport`] and logged.

use crate::error::{Result, StoreError};
use crate::repo::PhoneNumbersRepo;
use dialnorm_core::{plan, ReconcilePlan, ReconcileReportDto, SeedList, SkippedInsertDto};
use tracing::{debug, info, warn};

#[derive(Debug)]
pub enum SeedOutcome {
    /// The table already had rows.
    NotNeeded,
    /// The table was empty but no seed values were configured.
    Disabled,
    Seeded(usize),
    /// The seed transaction was rolled back.
    Failed(StoreError),
}

#[derive(Debug)]
pub struct DeleteFailure {
    pub value: String,
    pub error: StoreError,
}

#[derive(Debug)]
pub struct SkippedInsert {
    pub value: String,
    pub error: StoreError,
}

#[derive(Debug)]
pub struct ReconcileReport {
    pub fetched: usize,
    pub seed: SeedOutcome,
    pub deleted: Vec<String>,
    /// Set when the delete phase stopped early.
    pub delete_failure: Option<DeleteFailure>,
    pub inserted: Vec<String>,
    pub skipped: Vec<SkippedInsert>,
}

impl ReconcileReport {
    pub fn to_dto(&self) -> ReconcileReportDto {
        let (seeded, seed_error) = match &self.seed {
            SeedOutcome::Seeded(count) => (Some(*count), None),
            SeedOutcome::Failed(err) => (None, Some(err.to_string())),
            SeedOutcome::NotNeeded | SeedOutcome::Disabled => (None, None),
        };
        ReconcileReportDto {
            fetched: self.fetched,
            seeded,
            seed_error,
            deleted: self.deleted.clone(),
            delete_error: self
                .delete_failure
                .as_ref()
                .map(|failure| format!("{}: {}", failure.value, failure.error)),
            inserted: self.inserted.clone(),
            skipped: self
                .skipped
                .iter()
                .map(|skip| SkippedInsertDto {
                    value: skip.value.clone(),
                    reason: skip.error.to_string(),
                })
                .collect(),
        }
    }
}

pub fn reconcile(repo: &PhoneNumbersRepo<'_>, seed: &SeedList) -> Result<ReconcileReport> {
    let mut fetched = repo.list_all()?;
    info!(rows = fetched.len(), "fetched stored phone numbers");

    let seed_outcome = if !fetched.is_empty() {
        SeedOutcome::NotNeeded
    } else if seed.is_empty() {
        debug!("store is empty and seeding is disabled");
        SeedOutcome::Disabled
    } else {
        match repo.seed(seed) {
            Ok(count) => {
                info!(rows = count, "seeded empty store");
                fetched = repo.list_all()?;
                SeedOutcome::Seeded(count)
            }
            Err(err) => {
                warn!(error = %err, "seeding failed, transaction rolled back");
                SeedOutcome::Failed(err)
            }
        }
    };

    let plan = plan(fetched);
    info!(
        canonical = plan.normalized.len(),
        stale = plan.stale.len(),
        "derived canonical set"
    );

    let (deleted, delete_failure) = delete_stale(repo, &plan);
    let (inserted, skipped) = insert_canonical(repo, &plan);
    info!(
        deleted = deleted.len(),
        inserted = inserted.len(),
        skipped = skipped.len(),
        "reconcile finished"
    );

    Ok(ReconcileReport {
        fetched: plan.fetched.len(),
        seed: seed_outcome,
        deleted,
        delete_failure,
        inserted,
        skipped,
    })
}

/// Compute the plan a real run would execute, without writing anything.
pub fn dry_run(repo: &PhoneNumbersRepo<'_>, seed: &SeedList) -> Result<ReconcilePlan> {
    let fetched = repo.list_all()?;
    if fetched.is_empty() {
        return Ok(plan(seed.as_slice().to_vec()));
    }
    Ok(plan(fetched))
}

fn delete_stale(
    repo: &PhoneNumbersRepo<'_>,
    plan: &ReconcilePlan,
) -> (Vec<String>, Option<DeleteFailure>) {
    let mut deleted = Vec::with_capacity(plan.stale.len());
    for value in &plan.stale {
        match repo.delete_value(value) {
            Ok(rows) => {
                debug!(value = %value, rows, "deleted stale value");
                deleted.push(value.clone());
            }
            Err(error) => {
                warn!(value = %value, error = %error, "delete failed, skipping remaining deletes");
                return (
                    deleted,
                    Some(DeleteFailure {
                        value: value.clone(),
                        error,
                    }),
                );
            }
        }
    }
    (deleted, None)
}

fn insert_canonical(
    repo: &PhoneNumbersRepo<'_>,
    plan: &ReconcilePlan,
) -> (Vec<String>, Vec<SkippedInsert>) {
    let mut inserted = Vec::new();
    let mut skipped = Vec::new();
    for value in plan.inserts() {
        match repo.insert(value) {
            Ok(()) => {
                debug!(value, "inserted canonical value");
                inserted.push(value.to_string());
            }
            Err(error) => {
                info!(value, error = %error, "skipped writing canonical value");
                skipped.push(SkippedInsert {
                    value: value.to_string(),
                    error,
                });
            }
        }
    }
    (inserted, skipped)
}
