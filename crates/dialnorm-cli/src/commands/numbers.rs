use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct ListArgs {}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(required = true)]
    pub values: Vec<String>,
}

#[derive(Debug, Serialize)]
struct AddReport {
    added: Vec<String>,
}

pub fn list(ctx: &Context<'_>, _args: ListArgs) -> Result<()> {
    let values = ctx
        .store
        .phone_numbers()
        .list_all()
        .with_context(|| "list phone numbers")?;

    if ctx.json {
        return print_json(&values);
    }

    if values.is_empty() {
        println!("no phone numbers");
        return Ok(());
    }

    for value in values {
        println!("{}", value);
    }
    Ok(())
}

pub fn add(ctx: &Context<'_>, args: AddArgs) -> Result<()> {
    if args.values.iter().any(|value| value.trim().is_empty()) {
        return Err(invalid_input("phone number cannot be blank"));
    }

    let repo = ctx.store.phone_numbers();
    let mut added = Vec::with_capacity(args.values.len());
    for value in args.values {
        repo.insert(&value)
            .with_context(|| format!("add phone number {:?}", value))?;
        added.push(value);
    }

    if ctx.json {
        return print_json(&AddReport { added });
    }

    println!("Added {} phone number(s)", added.len());
    Ok(())
}
