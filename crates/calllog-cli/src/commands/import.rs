use crate::commands::{print_json, Context};
use crate::util::open_input;
use anyhow::{Context as _, Result};
use calllog_store::import::parse_calls;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON array of calls, or a page object with `nodes`; `-` for stdin
    pub path: PathBuf,
}

#[derive(Debug, Serialize)]
struct ImportReport {
    imported: usize,
    total: u64,
}

pub fn import_calls(ctx: &Context<'_>, args: ImportArgs) -> Result<()> {
    let reader = open_input(&args.path)?;
    let calls =
        parse_calls(reader).with_context(|| format!("read calls from {}", args.path.display()))?;
    let imported = ctx.store.calls().import(&calls)?;
    let total = ctx.store.calls().count()?;

    if ctx.json {
        print_json(&ImportReport { imported, total })?;
    } else {
        println!("imported {imported} calls ({total} total)");
    }
    Ok(())
}
