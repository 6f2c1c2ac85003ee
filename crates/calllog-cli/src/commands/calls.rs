use crate::commands::{print_json, Context};
use crate::render;
use crate::util::{parse_call_id, parse_page_size};
use anyhow::{Context as _, Result};
use calllog_core::display::{call_detail, view_dto};
use calllog_core::filter::{parse_call_type, parse_direction, FilterCategory};
use calllog_core::state::{open_call, select_filter, select_page, select_page_size, ViewState};
use calllog_core::view::load_view;
use clap::Args;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Go to this page before listing
    #[arg(long)]
    pub page: Option<u32>,
    /// 25, 50, 100 or 200; not remembered between runs
    #[arg(long, value_name = "SIZE")]
    pub page_size: Option<String>,
    /// inbound or outbound; an empty value clears the filter
    #[arg(long)]
    pub direction: Option<String>,
    /// missed, answered or voicemail; an empty value clears the filter
    #[arg(long = "type", value_name = "TYPE")]
    pub call_type: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

pub fn list_calls(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    // Every flag is checked before the first write.
    if let Some(raw) = non_blank(args.direction.as_deref()) {
        parse_direction(raw)?;
    }
    if let Some(raw) = non_blank(args.call_type.as_deref()) {
        parse_call_type(raw)?;
    }
    let page_size = args.page_size.as_deref().map(parse_page_size).transpose()?;

    let mut params = ctx.store.view_params();
    if let Some(raw) = args.direction.as_deref() {
        select_filter(&mut params, FilterCategory::Direction, Some(raw))?;
    }
    if let Some(raw) = args.call_type.as_deref() {
        select_filter(&mut params, FilterCategory::CallType, Some(raw))?;
    }

    let mut state = ViewState::read(&params, ctx.config.default_page_size)?;

    // Size first: a size change drops the page, an explicit --page wins.
    if let Some(size) = page_size {
        state.pagination = select_page_size(&mut params, state.pagination, size)?;
    }
    if let Some(page) = args.page {
        let navigation = select_page(&mut params, page)?;
        debug!(path = %navigation.path(), "navigate");
        state.pagination = state.pagination.with_page(page);
    }

    let options = ctx.config.view_options();
    let view = load_view(&ctx.store.calls(), &state, options).context("fetch calls")?;
    let dto = view_dto(&view, options.zone);

    if ctx.json {
        print_json(&dto)?;
    } else {
        print!("{}", render::ViewText(&dto));
    }
    Ok(())
}

pub fn show_call(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id = parse_call_id(&args.id)?;
    debug!(path = %open_call(&id).path(), "navigate");
    let call = ctx.store.calls().get(&id)?;
    let detail = call_detail(&call, ctx.config.view_options().zone);

    if ctx.json {
        print_json(&detail)?;
    } else {
        print!("{}", render::DetailText(&detail));
    }
    Ok(())
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.trim().is_empty())
}
