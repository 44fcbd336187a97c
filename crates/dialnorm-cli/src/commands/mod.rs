use anyhow::Result;
use dialnorm_config::AppConfig;
use dialnorm_store::Store;
use serde::Serialize;
use std::io::{self, Write};

pub mod normalize;
pub mod numbers;
pub mod reconcile;

pub struct Context<'a> {
    pub store: &'a Store,
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
