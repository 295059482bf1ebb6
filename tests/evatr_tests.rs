use evatr::*;

// ---------------------------------------------------------------------------
// Helpers — synthetic provider responses
// ---------------------------------------------------------------------------

fn param(label: &str, value: &str) -> String {
    format!(
        "<param><value><array><data>\
         <value><string>{label}</string></value>\
         <value><string>{value}</string></value>\
         </data></array></value></param>"
    )
}

fn response(pairs: &[(&str, &str)]) -> String {
    let mut xml = String::from("<params>");
    for (label, value) in pairs {
        xml.push_str(&param(label, value));
    }
    xml.push_str("</params>");
    xml
}

fn valid_simple_response() -> String {
    response(&[
        ("UstId_1", "DE123456789"),
        ("ErrorCode", "200"),
        ("UstId_2", "IT08266280968"),
        ("Datum", "15.06.2024"),
        ("Uhrzeit", "14:32:01"),
        ("Gueltig_ab", ""),
        ("Gueltig_bis", ""),
    ])
}

// ---------------------------------------------------------------------------
// Status Code Table
// ---------------------------------------------------------------------------

#[test]
fn code_200_has_table_description() {
    assert_eq!(
        error_description(200),
        "Die angefragte USt-IdNr. ist gültig."
    );
}

#[test]
fn unknown_code_falls_back_to_sentinel() {
    assert_eq!(error_description(404), ERROR_DESCRIPTION_FALLBACK);
    assert_eq!(
        ERROR_DESCRIPTION_FALLBACK,
        "Beschreibung für diesen Code wurde nicht gefunden."
    );
}

// ---------------------------------------------------------------------------
// ResultType Descriptions
// ---------------------------------------------------------------------------

#[test]
fn all_four_outcomes_have_fixed_descriptions() {
    assert_eq!(ResultType::Match.description(), "stimmt überein");
    assert_eq!(ResultType::NoMatch.description(), "stimmt nicht überein");
    assert_eq!(ResultType::NotQueried.description(), "nicht angefragt");
    assert_eq!(
        ResultType::NotReturned.description(),
        "vom EU-Mitgliedsstaat nicht mitgeteilt"
    );
}

#[test]
fn unknown_outcome_letter_has_no_description() {
    assert!(ResultType::from_code("E").is_none());
    assert!(ResultType::from_code("X").is_none());
}

// ---------------------------------------------------------------------------
// Query Building
// ---------------------------------------------------------------------------

#[test]
fn simple_query_never_includes_address_keys() {
    let params = SimpleParams {
        own_vat_number: "DE123456789".into(),
        validate_vat_number: "ATU12345678".into(),
        include_raw_xml: false,
    };
    let query = build_simple_query(&params).unwrap();
    for key in ["Firmenname", "Ort", "PLZ", "Strasse"] {
        assert!(!query.iter().any(|(k, _)| *k == key));
    }
}

#[test]
fn qualified_query_always_includes_required_keys() {
    let params = QualifiedParams {
        own_vat_number: "DE123456789".into(),
        validate_vat_number: "ATU12345678".into(),
        include_raw_xml: false,
        company_name: "ACME GmbH".into(),
        city: "Wien".into(),
        zip: None,
        street: None,
    };
    let query = build_qualified_query(&params).unwrap();
    for key in ["UstId_1", "UstId_2", "Firmenname", "Ort"] {
        assert!(query.iter().any(|(k, _)| *k == key), "missing {key}");
    }
    assert!(!query.iter().any(|(k, _)| *k == "PLZ"));
    assert!(!query.iter().any(|(k, _)| *k == "Strasse"));
}

// ---------------------------------------------------------------------------
// Response Mapping — validity
// ---------------------------------------------------------------------------

#[test]
fn code_200_yields_valid() {
    let result = parse_simple_response(&valid_simple_response(), false).unwrap();
    assert!(result.valid);
    assert_eq!(result.error_code, 200);
    assert_eq!(
        result.error_description,
        "Die angefragte USt-IdNr. ist gültig."
    );
    assert_eq!(result.date, "15.06.2024");
    assert_eq!(result.time, "14:32:01");
    assert_eq!(result.own_vat_number, "DE123456789");
    assert_eq!(result.validated_vat_number, "IT08266280968");
}

#[test]
fn other_codes_yield_invalid() {
    for code in ["201", "205", "999"] {
        let xml = response(&[
            ("UstId_1", "DE123456789"),
            ("ErrorCode", code),
            ("UstId_2", "IT08266280968"),
            ("Datum", "15.06.2024"),
            ("Uhrzeit", "14:32:01"),
        ]);
        let result = parse_simple_response(&xml, false).unwrap();
        assert!(!result.valid, "code {code} must not be valid");
    }
}

#[test]
fn unlisted_code_still_maps_with_sentinel_description() {
    let xml = response(&[
        ("UstId_1", "DE123456789"),
        ("ErrorCode", "404"),
        ("UstId_2", "IT08266280968"),
        ("Datum", "15.06.2024"),
        ("Uhrzeit", "14:32:01"),
    ]);
    let result = parse_simple_response(&xml, false).unwrap();
    assert!(!result.valid);
    assert_eq!(result.error_description, ERROR_DESCRIPTION_FALLBACK);
}

// ---------------------------------------------------------------------------
// Response Mapping — raw XML retention
// ---------------------------------------------------------------------------

#[test]
fn raw_xml_omitted_by_default() {
    let result = parse_simple_response(&valid_simple_response(), false).unwrap();
    assert!(result.raw_xml.is_none());
}

#[test]
fn raw_xml_kept_verbatim_when_requested() {
    let xml = valid_simple_response();
    let result = parse_simple_response(&xml, true).unwrap();
    assert_eq!(result.raw_xml.as_deref(), Some(xml.as_str()));
}

// ---------------------------------------------------------------------------
// Response Mapping — qualified round trip
// ---------------------------------------------------------------------------

#[test]
fn qualified_round_trip_reproduces_all_supplied_fields() {
    let params = QualifiedParams {
        own_vat_number: "DE123456789".into(),
        validate_vat_number: "IT08266280968".into(),
        include_raw_xml: false,
        company_name: "I.G.M Resins Italia Srl".into(),
        city: "Milano".into(),
        zip: Some("20123".into()),
        street: Some("Corso Magenta 82".into()),
    };

    // Synthesize the provider response the query would produce on a full match.
    let query = build_qualified_query(&params).unwrap();
    let mut pairs: Vec<(&str, &str)> = query.iter().map(|(k, v)| (*k, v.as_str())).collect();
    pairs.extend([
        ("ErrorCode", "200"),
        ("Datum", "15.06.2024"),
        ("Uhrzeit", "14:32:01"),
        ("Erg_Name", "A"),
        ("Erg_Ort", "A"),
        ("Erg_PLZ", "A"),
        ("Erg_Str", "A"),
    ]);
    let xml = response(&pairs);

    let result = parse_qualified_response(&xml, false).unwrap();
    assert!(result.base.valid);
    assert_eq!(result.base.own_vat_number, params.own_vat_number);
    assert_eq!(result.base.validated_vat_number, params.validate_vat_number);
    assert_eq!(result.company_name.as_deref(), Some("I.G.M Resins Italia Srl"));
    assert_eq!(result.city.as_deref(), Some("Milano"));
    assert_eq!(result.zip.as_deref(), Some("20123"));
    assert_eq!(result.street.as_deref(), Some("Corso Magenta 82"));
    assert_eq!(result.result_name, Some(ResultType::Match));
    assert_eq!(result.result_city, Some(ResultType::Match));
    assert_eq!(result.result_zip, Some(ResultType::Match));
    assert_eq!(result.result_street, Some(ResultType::Match));
    assert_eq!(result.result_name_description.as_deref(), Some("stimmt überein"));
}

#[test]
fn qualified_mixed_outcomes() {
    let xml = response(&[
        ("UstId_1", "DE123456789"),
        ("ErrorCode", "200"),
        ("UstId_2", "IT08266280968"),
        ("Datum", "15.06.2024"),
        ("Uhrzeit", "14:32:01"),
        ("Firmenname", "I.G.M Resins Italia Srl"),
        ("Ort", "Milano"),
        ("PLZ", ""),
        ("Strasse", ""),
        ("Erg_Name", "A"),
        ("Erg_Ort", "B"),
        ("Erg_PLZ", "C"),
        ("Erg_Str", "D"),
    ]);
    let result = parse_qualified_response(&xml, false).unwrap();
    assert_eq!(result.result_name, Some(ResultType::Match));
    assert_eq!(result.result_city, Some(ResultType::NoMatch));
    assert_eq!(result.result_zip, Some(ResultType::NotQueried));
    assert_eq!(result.result_street, Some(ResultType::NotReturned));
    assert_eq!(
        result.result_city_description.as_deref(),
        Some("stimmt nicht überein")
    );
    assert_eq!(
        result.result_street_description.as_deref(),
        Some("vom EU-Mitgliedsstaat nicht mitgeteilt")
    );
    assert!(result.zip.is_none());
    assert!(result.street.is_none());
}

// ---------------------------------------------------------------------------
// Response Mapping — malformed payloads
// ---------------------------------------------------------------------------

#[test]
fn unparsable_xml_is_rejected() {
    let err = parse_simple_response("<params><param><value>", false).unwrap_err();
    assert!(matches!(err, EvatrError::MalformedResponse(_)));
}

#[test]
fn missing_error_code_is_rejected() {
    let xml = response(&[
        ("UstId_1", "DE123456789"),
        ("UstId_2", "IT08266280968"),
        ("Datum", "15.06.2024"),
        ("Uhrzeit", "14:32:01"),
    ]);
    let err = parse_simple_response(&xml, false).unwrap_err();
    assert!(matches!(err, EvatrError::MalformedResponse(_)));
}

#[test]
fn qualified_parse_of_malformed_xml_is_rejected() {
    let err = parse_qualified_response("no xml here", false).unwrap_err();
    assert!(matches!(err, EvatrError::MalformedResponse(_)));
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn qualified_result_serializes_flat() {
    let result = parse_qualified_response(&valid_simple_response(), false).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    // Base fields are flattened alongside the qualified ones.
    assert_eq!(json["valid"], true);
    assert_eq!(json["error_code"], 200);
    assert!(json.get("result_name").is_some());
}

// ---------------------------------------------------------------------------
// Live service (network) — run with `cargo test -- --ignored`
// ---------------------------------------------------------------------------

#[tokio::test]
#[ignore = "requires network access to the BZSt eVatR service"]
async fn live_simple_check() {
    let params = SimpleParams {
        own_vat_number: "DE123456789".into(),
        validate_vat_number: "IT08266280968".into(),
        include_raw_xml: true,
    };
    let result = check_simple(&params).await.unwrap();
    // The dummy own VAT-ID is rejected by the service, but the response
    // must still map into a complete result.
    assert!(!result.error_description.is_empty());
    assert!(result.raw_xml.is_some());
}
