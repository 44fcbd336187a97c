use crate::commands::print_json;
use anyhow::Result;
use clap::Args;
use dialnorm_core::{is_normalized, normalize_phone, NormalizedValueDto};

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    #[arg(required = true)]
    pub values: Vec<String>,
}

pub fn normalize(json: bool, args: NormalizeArgs) -> Result<()> {
    let items: Vec<NormalizedValueDto> = args
        .values
        .into_iter()
        .map(|raw| NormalizedValueDto {
            normalized: normalize_phone(&raw),
            already_normalized: is_normalized(&raw),
            raw,
        })
        .collect();

    if json {
        return print_json(&items);
    }

    for item in items {
        println!("{}", item.normalized);
    }
    Ok(())
}
