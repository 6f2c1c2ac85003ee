use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use calllog_core::domain::CallId;
use calllog_core::rules::PageSize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

pub fn parse_call_id(raw: &str) -> Result<CallId> {
    CallId::from_str(raw).map_err(|_| invalid_input("call id cannot be empty"))
}

pub fn parse_page_size(raw: &str) -> Result<PageSize> {
    Ok(PageSize::from_str(raw)?)
}

/// `-` reads standard input.
pub fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}
