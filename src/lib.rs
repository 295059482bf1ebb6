//! # evatr
//!
//! Client for the eVatR confirmation service of the German Bundeszentralamt
//! für Steuern (BZSt). German businesses use it to confirm the VAT-ID
//! (USt-IdNr.) of an EU trading partner, either as a *simple* check of the
//! two VAT numbers or as a *qualified* check that additionally compares
//! company name and address field by field.
//!
//! The service answers with an XML-RPC-flavoured bag of label/value pairs;
//! this crate maps that into typed results and resolves the numeric status
//! code and the per-field match letters into the official German
//! descriptions.
//!
//! ## Quick Start
//!
//! ```ignore
//! use evatr::{QualifiedParams, check_qualified};
//!
//! let params = QualifiedParams {
//!     own_vat_number: "DE123456789".into(),
//!     validate_vat_number: "IT08266280968".into(),
//!     include_raw_xml: false,
//!     company_name: "I.G.M Resins Italia Srl".into(),
//!     city: "Milano".into(),
//!     zip: Some("20123".into()),
//!     street: Some("Corso Magenta 82".into()),
//! };
//!
//! let result = check_qualified(&params).await?;
//! assert!(result.base.valid);
//! println!("{}", result.base.error_description);
//! ```
//!
//! The HTTP round trip lives entirely in [`check_simple`] / [`check_qualified`];
//! query building ([`build_simple_query`]) and response mapping
//! ([`parse_simple_response`]) are pure functions and can be used with any
//! transport.

mod client;
mod codes;
mod error;
mod query;
mod response;
mod types;

pub use client::{EVATR_URL, check_qualified, check_simple};
pub use codes::{ERROR_DESCRIPTION_FALLBACK, error_description};
pub use error::EvatrError;
pub use query::{build_qualified_query, build_simple_query};
pub use response::{parse_qualified_response, parse_simple_response};
pub use types::{QualifiedParams, QualifiedResult, ResultType, SimpleParams, SimpleResult};
