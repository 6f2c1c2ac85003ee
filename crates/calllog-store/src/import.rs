use crate::error::Result;
use calllog_core::domain::Call;
use calllog_core::port::CallPage;
use serde::Deserialize;
use std::io::Read;

/// Either a bare array of calls or a full page payload.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImportFile {
    Calls(Vec<Call>),
    Page(CallPage),
}

pub fn parse_calls<R: Read>(reader: R) -> Result<Vec<Call>> {
    let parsed: ImportFile = serde_json::from_reader(reader)?;
    Ok(match parsed {
        ImportFile::Calls(calls) => calls,
        ImportFile::Page(page) => page.nodes,
    })
}
