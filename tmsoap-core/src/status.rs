//! Response status extraction and the failure check.
//!
//! Every vendor response carries a `statusCode`/`statusMessage` pair next
//! to its payload, and transport-level problems arrive as SOAP faults.
//! Extraction is best-effort like the rest of decoding; the one place an
//! error surfaces is [`check_response`], which turns a fault or a
//! non-zero, non-`OK` status into a [`ServiceError`].

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::scalar::coerce;
use crate::scan::{find_first_tag, find_first_tag_block};
use crate::value::Scalar;

/// The status pair present on every response, independent of payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ResultBase {
    pub status_code: Option<i64>,
    pub status_message: Option<String>,
}

/// A decoded SOAP fault.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fault {
    pub code: Option<String>,
    pub message: Option<String>,
}

/// Failure signals a response can carry.
#[derive(Debug, Error, PartialEq)]
pub enum ServiceError {
    /// The response body contains a SOAP fault element.
    #[error("SOAP fault: {0}")]
    Fault(String),
    /// The status block reports a failing operation.
    #[error("status {code}: {message}")]
    Status { code: i64, message: String },
}

/// Extracts the status pair from a response body.
///
/// A missing or garbled status block yields `None` fields; it never
/// disturbs payload decoding.
pub fn extract_result_base(xml: &str) -> ResultBase {
    let status_code = find_first_tag(xml, "statusCode").and_then(|text| match coerce(text) {
        Scalar::Int(code) => Some(code),
        _ => None,
    });
    let status_message = find_first_tag(xml, "statusMessage")
        .map(|text| coerce(text).to_text())
        .filter(|text| !text.is_empty());
    ResultBase {
        status_code,
        status_message,
    }
}

/// Extracts the first SOAP fault in the body, if any.
///
/// Reads the SOAP 1.1 `faultcode`/`faultstring` children first and falls
/// back to the SOAP 1.2 `Code`/`Value` and `Reason`/`Text` shape.
pub fn extract_fault(xml: &str) -> Option<Fault> {
    let block = find_first_tag_block(xml, "Fault")?;
    let code = find_first_tag(block, "faultcode")
        .or_else(|| find_first_tag(block, "Value"))
        .map(|text| coerce(text).to_text())
        .filter(|text| !text.is_empty());
    let message = find_first_tag(block, "faultstring")
        .or_else(|| find_first_tag(block, "Text"))
        .map(|text| coerce(text).to_text())
        .filter(|text| !text.is_empty());
    Some(Fault { code, message })
}

/// Checks a response body for failure signals.
///
/// A SOAP fault, or a non-zero status code whose message is not `OK` in
/// any casing, is a failure. Everything else passes, including a response
/// with no status block at all, and the extracted pair is returned for
/// the caller to keep.
pub fn check_response(xml: &str) -> Result<ResultBase, ServiceError> {
    if let Some(fault) = extract_fault(xml) {
        debug!("response carries a SOAP fault: {fault:?}");
        return Err(ServiceError::Fault(fault_detail(&fault)));
    }
    let base = extract_result_base(xml);
    if let Some(code) = base.status_code
        && code != 0
    {
        let message_is_ok = base
            .status_message
            .as_deref()
            .is_some_and(|message| message.trim().eq_ignore_ascii_case("ok"));
        if !message_is_ok {
            return Err(ServiceError::Status {
                code,
                message: base.status_message.unwrap_or_default(),
            });
        }
    }
    Ok(base)
}

fn fault_detail(fault: &Fault) -> String {
    match (&fault.code, &fault.message) {
        (Some(code), Some(message)) => format!("{code}: {message}"),
        (None, Some(message)) => message.clone(),
        (Some(code), None) => code.clone(),
        (None, None) => "unspecified fault".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_status_pair_any_wrapping() {
        let base = extract_result_base(
            "<ns2:CustomerResult><statusMessage>OK</statusMessage>\
             <statusCode>0</statusCode></ns2:CustomerResult>",
        );
        assert_eq!(base.status_code, Some(0));
        assert_eq!(base.status_message.as_deref(), Some("OK"));
    }

    #[test]
    fn test_status_casing_priority() {
        // Both casings present: the scan is case-insensitive and the first
        // occurrence in document order wins.
        let base = extract_result_base(
            "<r><statusCode>0</statusCode><StatusCode>9</StatusCode></r>",
        );
        assert_eq!(base.status_code, Some(0));

        let base = extract_result_base("<r><StatusCode>9</StatusCode></r>");
        assert_eq!(base.status_code, Some(9));
    }

    #[test]
    fn test_missing_status_block_yields_none_fields() {
        let base = extract_result_base("<r><data>x</data></r>");
        assert_eq!(base, ResultBase::default());
    }

    #[test]
    fn test_non_numeric_status_code_is_ignored() {
        let base = extract_result_base("<r><statusCode>broken</statusCode></r>");
        assert_eq!(base.status_code, None);
    }

    #[test]
    fn test_check_passes_zero_code() {
        let base = check_response(
            "<r><statusCode>0</statusCode><statusMessage>OK</statusMessage></r>",
        )
        .unwrap();
        assert_eq!(base.status_code, Some(0));
    }

    #[test]
    fn test_check_passes_missing_status() {
        assert!(check_response("<r><data>1</data></r>").is_ok());
    }

    #[test]
    fn test_check_accepts_nonzero_code_with_ok_message() {
        let base = check_response(
            "<r><statusCode>25</statusCode><statusMessage>ok</statusMessage></r>",
        )
        .unwrap();
        assert_eq!(base.status_code, Some(25));
    }

    #[test]
    fn test_check_rejects_nonzero_code() {
        let err = check_response(
            "<r><statusCode>17</statusCode>\
             <statusMessage>Session invalid</statusMessage></r>",
        )
        .unwrap_err();
        assert_eq!(
            err,
            ServiceError::Status {
                code: 17,
                message: "Session invalid".to_string()
            }
        );
    }

    #[test]
    fn test_check_rejects_soap_fault() {
        let err = check_response(
            "<S:Envelope><S:Body><S:Fault>\
             <faultcode>S:Server</faultcode>\
             <faultstring>Invalid session token</faultstring>\
             </S:Fault></S:Body></S:Envelope>",
        )
        .unwrap_err();
        assert_eq!(
            err,
            ServiceError::Fault("S:Server: Invalid session token".to_string())
        );
    }

    #[test]
    fn test_fault_soap12_shape() {
        let fault = extract_fault(
            "<env:Fault><env:Code><env:Value>env:Sender</env:Value></env:Code>\
             <env:Reason><env:Text xml:lang=\"en\">bad request</env:Text></env:Reason>\
             </env:Fault>",
        )
        .unwrap();
        assert_eq!(fault.code.as_deref(), Some("env:Sender"));
        assert_eq!(fault.message.as_deref(), Some("bad request"));
    }

    #[test]
    fn test_fault_beats_status_check() {
        let err = check_response(
            "<r><statusCode>0</statusCode><Fault>\
             <faultstring>boom</faultstring></Fault></r>",
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::Fault(_)));
    }

    #[test]
    fn test_no_fault_in_clean_body() {
        assert!(extract_fault("<r><statusCode>0</statusCode></r>").is_none());
    }
}
