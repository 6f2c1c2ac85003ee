use anyhow::Result;
use calllog_config::AppConfig;
use calllog_store::Store;
use serde::Serialize;
use std::io::{self, Write};

pub mod calls;
pub mod completions;
pub mod filters;
pub mod import;
pub mod state;

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
