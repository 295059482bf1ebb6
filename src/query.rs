//! Query construction for the eVatR endpoint.
//!
//! Pure transformation from request parameters to the provider's query keys;
//! URL encoding and the HTTP GET itself are left to the transport.

use crate::error::EvatrError;
use crate::types::{QualifiedParams, SimpleParams};

fn require<'a>(value: &'a str, name: &str) -> Result<&'a str, EvatrError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(EvatrError::InvalidParams(format!("{name} is required")));
    }
    Ok(value)
}

/// Build the query pairs for a simple confirmation request.
///
/// # Errors
///
/// Returns [`EvatrError::InvalidParams`] if either VAT number is blank.
pub fn build_simple_query(params: &SimpleParams) -> Result<Vec<(&'static str, String)>, EvatrError> {
    Ok(vec![
        (
            "UstId_1",
            require(&params.own_vat_number, "own VAT number")?.to_string(),
        ),
        (
            "UstId_2",
            require(&params.validate_vat_number, "VAT number to validate")?.to_string(),
        ),
    ])
}

/// Build the query pairs for a qualified confirmation request.
///
/// Postal code and street are optional and omitted from the query when not
/// supplied.
///
/// # Errors
///
/// Returns [`EvatrError::InvalidParams`] if either VAT number, the company
/// name, or the city is blank.
pub fn build_qualified_query(
    params: &QualifiedParams,
) -> Result<Vec<(&'static str, String)>, EvatrError> {
    let mut query = vec![
        (
            "UstId_1",
            require(&params.own_vat_number, "own VAT number")?.to_string(),
        ),
        (
            "UstId_2",
            require(&params.validate_vat_number, "VAT number to validate")?.to_string(),
        ),
        (
            "Firmenname",
            require(&params.company_name, "company name")?.to_string(),
        ),
        ("Ort", require(&params.city, "city")?.to_string()),
    ];
    if let Some(zip) = &params.zip {
        query.push(("PLZ", zip.clone()));
    }
    if let Some(street) = &params.street {
        query.push(("Strasse", street.clone()));
    }
    Ok(query)
}
