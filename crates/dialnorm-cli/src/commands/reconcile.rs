use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use dialnorm_core::ReconcilePlan;
use dialnorm_store::{ReconcileReport, SeedOutcome};

#[derive(Debug, Args)]
pub struct ReconcileArgs {
    /// Show what would change without writing
    #[arg(long)]
    pub dry_run: bool,
}

pub fn reconcile(ctx: &Context<'_>, args: ReconcileArgs) -> Result<()> {
    let seed = ctx.config.seed_list();

    if args.dry_run {
        let plan = ctx.store.plan(&seed).with_context(|| "plan reconcile")?;
        if ctx.json {
            return print_json(&plan);
        }
        print_plan(&plan);
        return Ok(());
    }

    let report = ctx
        .store
        .reconcile(&seed)
        .with_context(|| "fetch stored phone numbers")?;

    if ctx.json {
        return print_json(&report.to_dto());
    }
    print_report(&report);
    Ok(())
}

fn print_plan(plan: &ReconcilePlan) {
    println!(
        "{} value(s) fetched, {} canonical",
        plan.fetched.len(),
        plan.normalized.len()
    );
    for value in &plan.stale {
        println!("delete {}", value);
    }
    for value in plan.inserts() {
        println!("insert {}", value);
    }
}

fn print_report(report: &ReconcileReport) {
    match &report.seed {
        SeedOutcome::Seeded(count) => println!("Seeded {} phone number(s)", count),
        SeedOutcome::Failed(err) => println!("Seeding failed: {}", err),
        SeedOutcome::NotNeeded | SeedOutcome::Disabled => {}
    }
    println!("Fetched {} phone number(s)", report.fetched);
    println!("Deleted {} stale value(s)", report.deleted.len());
    if let Some(failure) = &report.delete_failure {
        println!("Delete stopped at {}: {}", failure.value, failure.error);
    }
    println!(
        "Inserted {} canonical value(s), {} already present",
        report.inserted.len(),
        report.skipped.len()
    );
}
