//! Request parameters, result types, and the per-field match outcome.

use serde::{Deserialize, Serialize};

/// Parameters for a simple confirmation request (two VAT numbers only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleParams {
    /// The caller's own German USt-IdNr. (e.g. "DE123456789").
    pub own_vat_number: String,
    /// The foreign VAT-ID to confirm.
    pub validate_vat_number: String,
    /// Keep the provider's raw XML response on the result.
    pub include_raw_xml: bool,
}

/// Parameters for a qualified confirmation request.
///
/// A qualified check additionally asks the EU member state to compare
/// company name and address. Name and city are mandatory for the provider;
/// postal code and street are optional and simply omitted when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualifiedParams {
    pub own_vat_number: String,
    pub validate_vat_number: String,
    pub include_raw_xml: bool,
    pub company_name: String,
    pub city: String,
    pub zip: Option<String>,
    pub street: Option<String>,
}

/// Result of a simple confirmation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleResult {
    /// Whether the queried VAT-ID was confirmed valid (status code 200).
    pub valid: bool,
    /// Response date, in the provider's native format (DD.MM.YYYY).
    pub date: String,
    /// Response time, in the provider's native format (HH:MM:SS).
    pub time: String,
    /// Numeric status code returned by the provider.
    pub error_code: i32,
    /// Official German description of the status code.
    pub error_description: String,
    /// Echo of the caller's own USt-IdNr.
    pub own_vat_number: String,
    /// Echo of the VAT-ID that was checked.
    pub validated_vat_number: String,
    /// Start of the validity window, if the provider reported one.
    pub valid_from: Option<String>,
    /// End of the validity window, if the provider reported one.
    pub valid_until: Option<String>,
    /// The raw XML response body, present only when requested.
    pub raw_xml: Option<String>,
}

/// Result of a qualified confirmation request.
///
/// Extends [`SimpleResult`] with the echoed address data and one
/// [`ResultType`] per compared field, each with its German description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualifiedResult {
    #[serde(flatten)]
    pub base: SimpleResult,
    pub company_name: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub street: Option<String>,
    pub result_name: Option<ResultType>,
    pub result_city: Option<ResultType>,
    pub result_zip: Option<ResultType>,
    pub result_street: Option<ResultType>,
    pub result_name_description: Option<String>,
    pub result_city_description: Option<String>,
    pub result_zip_description: Option<String>,
    pub result_street_description: Option<String>,
}

/// Per-field comparison outcome of a qualified check.
///
/// The provider encodes these as single letters (`A`–`D`) in the
/// `Erg_Name`/`Erg_Ort`/`Erg_PLZ`/`Erg_Str` response fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultType {
    /// `A` — the field matches the member state's records.
    Match,
    /// `B` — the field does not match.
    NoMatch,
    /// `C` — the field was not part of the query.
    NotQueried,
    /// `D` — the member state did not report this field.
    NotReturned,
}

impl ResultType {
    /// Parse a provider result letter. Letters outside `A`–`D` yield `None`;
    /// they are never treated as an error.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" => Some(Self::Match),
            "B" => Some(Self::NoMatch),
            "C" => Some(Self::NotQueried),
            "D" => Some(Self::NotReturned),
            _ => None,
        }
    }

    /// The provider's wire letter for this outcome.
    pub fn code(self) -> &'static str {
        match self {
            Self::Match => "A",
            Self::NoMatch => "B",
            Self::NotQueried => "C",
            Self::NotReturned => "D",
        }
    }

    /// The official German description of this outcome.
    pub fn description(self) -> &'static str {
        match self {
            Self::Match => "stimmt überein",
            Self::NoMatch => "stimmt nicht überein",
            Self::NotQueried => "nicht angefragt",
            Self::NotReturned => "vom EU-Mitgliedsstaat nicht mitgeteilt",
        }
    }
}
