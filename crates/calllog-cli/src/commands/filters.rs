use crate::commands::state::print_state;
use crate::commands::Context;
use crate::error::invalid_input;
use anyhow::Result;
use calllog_core::filter::{parse_call_type, parse_category, parse_direction, FilterCategory};
use calllog_core::state::select_filter;
use clap::{ArgAction, Args};

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// direction or type
    pub category: String,
    pub value: Option<String>,
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "value")]
    pub clear: bool,
}

pub fn select(ctx: &Context<'_>, args: FilterArgs) -> Result<()> {
    let category = parse_category(&args.category)?;
    let value = if args.clear {
        None
    } else {
        let raw = args
            .value
            .ok_or_else(|| invalid_input("filter value is required (or pass --clear)"))?;
        Some(validate(category, &raw)?)
    };

    let mut params = ctx.store.view_params();
    select_filter(&mut params, category, value.as_deref())?;
    print_state(ctx)
}

fn validate(category: FilterCategory, raw: &str) -> Result<String> {
    let value = match category {
        FilterCategory::Direction => parse_direction(raw)?.to_string(),
        FilterCategory::CallType => parse_call_type(raw)?.to_string(),
    };
    Ok(value)
}
