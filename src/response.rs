//! Response mapping for the eVatR XML payload.
//!
//! The service answers with an XML-RPC-flavoured bag of `<param>` elements.
//! Each param carries (at least) two `<string>` descendants; the first is the
//! field label, the second its value. The schema is not strictly enforced:
//! params with fewer than two strings are skipped.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::codes::error_description;
use crate::error::EvatrError;
use crate::types::{QualifiedResult, ResultType, SimpleResult};

/// Parse the XML body of a simple confirmation response.
///
/// The raw body is attached to the result only when `include_raw_xml` is set.
///
/// # Errors
///
/// Returns [`EvatrError::MalformedResponse`] if the body is not well-formed
/// XML, a required field is missing, or the status code is not numeric.
pub fn parse_simple_response(xml: &str, include_raw_xml: bool) -> Result<SimpleResult, EvatrError> {
    let fields = collect_fields(xml)?;
    map_simple(&fields, xml, include_raw_xml)
}

/// Parse the XML body of a qualified confirmation response.
///
/// On top of the simple mapping, the echoed address fields are copied over
/// and the four `Erg_*` letters are resolved to [`ResultType`] values with
/// their German descriptions. An `Erg_*` field the provider left out counts
/// as [`ResultType::NotQueried`]; a letter outside `A`–`D` resolves to no
/// outcome and no description rather than an error.
///
/// # Errors
///
/// Same conditions as [`parse_simple_response`].
pub fn parse_qualified_response(
    xml: &str,
    include_raw_xml: bool,
) -> Result<QualifiedResult, EvatrError> {
    let fields = collect_fields(xml)?;
    let base = map_simple(&fields, xml, include_raw_xml)?;

    let result_name = match_outcome(&fields, "Erg_Name");
    let result_city = match_outcome(&fields, "Erg_Ort");
    let result_zip = match_outcome(&fields, "Erg_PLZ");
    let result_street = match_outcome(&fields, "Erg_Str");

    Ok(QualifiedResult {
        base,
        company_name: optional(&fields, "Firmenname"),
        city: optional(&fields, "Ort"),
        zip: optional(&fields, "PLZ"),
        street: optional(&fields, "Strasse"),
        result_name,
        result_city,
        result_zip,
        result_street,
        result_name_description: result_name.map(|r| r.description().to_string()),
        result_city_description: result_city.map(|r| r.description().to_string()),
        result_zip_description: result_zip.map(|r| r.description().to_string()),
        result_street_description: result_street.map(|r| r.description().to_string()),
    })
}

/// Flatten the `<param>`/`<string>` bag into a label → value map.
fn collect_fields(xml: &str) -> Result<HashMap<String, String>, EvatrError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut fields = HashMap::new();
    let mut in_param = false;
    let mut in_string = false;
    let mut strings: Vec<String> = Vec::new();
    let mut current = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"param" => {
                    in_param = true;
                    strings.clear();
                }
                b"string" if in_param => {
                    in_string = true;
                    current.clear();
                }
                _ => {}
            },
            Ok(Event::Empty(ref e)) => {
                if in_param && e.name().as_ref() == b"string" {
                    strings.push(String::new());
                }
            }
            Ok(Event::Text(ref e)) => {
                if in_string {
                    current.push_str(&e.unescape().unwrap_or_default());
                }
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"string" if in_param => {
                    in_string = false;
                    strings.push(std::mem::take(&mut current));
                }
                b"param" => {
                    in_param = false;
                    if strings.len() >= 2 {
                        fields.insert(strings[0].clone(), strings[1].clone());
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(EvatrError::MalformedResponse(format!(
                    "XML parse error: {e}"
                )));
            }
            _ => {}
        }
    }

    Ok(fields)
}

fn map_simple(
    fields: &HashMap<String, String>,
    xml: &str,
    include_raw_xml: bool,
) -> Result<SimpleResult, EvatrError> {
    let code_str = required(fields, "ErrorCode")?;
    let error_code: i32 = code_str.parse().map_err(|_| {
        EvatrError::MalformedResponse(format!("non-numeric status code '{code_str}'"))
    })?;

    Ok(SimpleResult {
        valid: error_code == 200,
        date: required(fields, "Datum")?,
        time: required(fields, "Uhrzeit")?,
        error_code,
        error_description: error_description(error_code).to_string(),
        own_vat_number: required(fields, "UstId_1")?,
        validated_vat_number: required(fields, "UstId_2")?,
        valid_from: optional(fields, "Gueltig_ab"),
        valid_until: optional(fields, "Gueltig_bis"),
        raw_xml: include_raw_xml.then(|| xml.to_string()),
    })
}

fn required(fields: &HashMap<String, String>, key: &str) -> Result<String, EvatrError> {
    fields
        .get(key)
        .cloned()
        .ok_or_else(|| EvatrError::MalformedResponse(format!("missing field '{key}'")))
}

/// Optional fields: the provider reports absent values as empty strings.
fn optional(fields: &HashMap<String, String>, key: &str) -> Option<String> {
    fields.get(key).filter(|v| !v.is_empty()).cloned()
}

/// Absent or empty `Erg_*` fields count as not queried; unknown letters
/// resolve to no outcome.
fn match_outcome(fields: &HashMap<String, String>, key: &str) -> Option<ResultType> {
    match fields.get(key).filter(|v| !v.is_empty()) {
        None => Some(ResultType::NotQueried),
        Some(code) => ResultType::from_code(code),
    }
}
