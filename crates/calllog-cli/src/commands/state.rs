use crate::commands::{print_json, Context};
use anyhow::Result;
use calllog_core::port::QueryStore;
use calllog_core::state::{list_path, select_page};
use clap::{ArgAction, Args};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct PageArgs {
    pub page: u32,
}

#[derive(Debug, Args)]
pub struct StateArgs {
    /// Forget every filter and page selection
    #[arg(long, action = ArgAction::SetTrue)]
    pub reset: bool,
}

#[derive(Debug, Serialize)]
struct StateDto {
    query: String,
    path: String,
}

pub fn go_to_page(ctx: &Context<'_>, args: PageArgs) -> Result<()> {
    let mut params = ctx.store.view_params();
    let navigation = select_page(&mut params, args.page)?;
    tracing::debug!(path = %navigation.path(), "navigate");
    print_state(ctx)
}

pub fn show_state(ctx: &Context<'_>, args: StateArgs) -> Result<()> {
    if args.reset {
        ctx.store.view_params().clear()?;
    }
    print_state(ctx)
}

pub(crate) fn print_state(ctx: &Context<'_>) -> Result<()> {
    let query = ctx.store.view_params().query_string()?;
    let path = list_path(&query);

    if ctx.json {
        print_json(&StateDto { query, path })?;
    } else {
        println!("{path}");
    }
    Ok(())
}
