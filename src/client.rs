//! High-level check operations: query build → HTTP GET → response mapping.

use crate::error::EvatrError;
use crate::query::{build_qualified_query, build_simple_query};
use crate::response::{parse_qualified_response, parse_simple_response};
use crate::types::{QualifiedParams, QualifiedResult, SimpleParams, SimpleResult};

/// The fixed eVatR endpoint. No authentication — it is a free public service.
pub const EVATR_URL: &str = "https://evatr.bff-online.de/evatrRPC";

/// Run a simple confirmation request against the eVatR service.
///
/// This function is async and requires network access.
///
/// # Errors
///
/// Returns [`EvatrError::InvalidParams`] for blank VAT numbers,
/// [`EvatrError::Transport`] on connection issues or a non-2xx status,
/// [`EvatrError::MalformedResponse`] if the XML body cannot be mapped.
pub async fn check_simple(params: &SimpleParams) -> Result<SimpleResult, EvatrError> {
    let query = build_simple_query(params)?;
    let body = fetch(&query).await?;
    parse_simple_response(&body, params.include_raw_xml)
}

/// Run a qualified confirmation request against the eVatR service.
///
/// # Errors
///
/// Same conditions as [`check_simple`]; additionally rejects blank company
/// name or city.
pub async fn check_qualified(params: &QualifiedParams) -> Result<QualifiedResult, EvatrError> {
    let query = build_qualified_query(params)?;
    let body = fetch(&query).await?;
    parse_qualified_response(&body, params.include_raw_xml)
}

async fn fetch(query: &[(&'static str, String)]) -> Result<String, EvatrError> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| EvatrError::Transport(e.to_string()))?;

    let resp = client
        .get(EVATR_URL)
        .query(query)
        .send()
        .await
        .map_err(|e| EvatrError::Transport(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(EvatrError::Transport(format!("HTTP {status}")));
    }

    resp.text()
        .await
        .map_err(|e| EvatrError::Transport(e.to_string()))
}
