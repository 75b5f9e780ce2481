//! Command-line decoder for captured response bodies.
//!
//! `tmsoap-decode` reads one response body from a file or stdin and
//! prints the decoded result as JSON on stdout: the raw objectified tree
//! by default, a typed record with `--entity`, every instance with
//! `--list`, or the status/fault verdict with `--status`. Logs go to
//! stderr so the output stays pipeable.

use std::error::Error;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tmsoap_core::entities::{
    Address, Customer, Entity, Item, Job, JobMetric, JobTrackingTime, Order, PriceLine,
    PriceUnit, Pricelist, PricelistEntry, Resource, Workflow,
};
use tmsoap_core::{check_response, decode_list, decode_single, deep_objectify};
use tracing_subscriber::{EnvFilter, fmt};

pub struct Options {
    pub input: Option<PathBuf>,
    pub entity: Option<String>,
    pub list: bool,
    pub status: bool,
    pub compact: bool,
}

pub fn run(options: &Options) -> Result<(), Box<dyn Error>> {
    // Initialize logging
    fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into())
                .add_directive("tmsoap_core=debug".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let body = read_input(options.input.as_deref())?;

    let rendered = if options.status {
        status_json(&body)
    } else if let Some(entity) = &options.entity {
        decode_entity_json(entity, &body, options.list)
            .ok_or_else(|| format!("unknown entity {entity:?}"))?
    } else {
        serde_json::to_value(deep_objectify(&body))?
    };

    if options.compact {
        println!("{}", serde_json::to_string(&rendered)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String, Box<dyn Error>> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}

/// Runs the status/fault check and renders the verdict.
pub fn status_json(body: &str) -> serde_json::Value {
    match check_response(body) {
        Ok(base) => serde_json::json!({
            "ok": true,
            "statusCode": base.status_code,
            "statusMessage": base.status_message,
        }),
        Err(err) => serde_json::json!({
            "ok": false,
            "error": err.to_string(),
        }),
    }
}

/// Decodes `body` as the named entity; `None` for an unknown name.
///
/// Names match ignoring case, hyphens and underscores, so `price-line`,
/// `priceline` and `PriceLine` all select the same record type.
pub fn decode_entity_json(entity: &str, body: &str, list: bool) -> Option<serde_json::Value> {
    let normalized: String = entity
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .collect::<String>()
        .to_ascii_lowercase();
    let value = match normalized.as_str() {
        "customer" => render::<Customer>(body, list),
        "address" => render::<Address>(body, list),
        "resource" => render::<Resource>(body, list),
        "job" => render::<Job>(body, list),
        "jobmetric" => render::<JobMetric>(body, list),
        "jobtrackingtime" => render::<JobTrackingTime>(body, list),
        "priceline" => render::<PriceLine>(body, list),
        "priceunit" => render::<PriceUnit>(body, list),
        "pricelist" => render::<Pricelist>(body, list),
        "pricelistentry" => render::<PricelistEntry>(body, list),
        "order" => render::<Order>(body, list),
        "item" => render::<Item>(body, list),
        "workflow" => render::<Workflow>(body, list),
        _ => return None,
    };
    Some(value)
}

fn render<T: Entity + Serialize>(body: &str, list: bool) -> serde_json::Value {
    if list {
        serde_json::to_value(decode_list::<T>(body)).unwrap_or(serde_json::Value::Null)
    } else {
        decode_single::<T>(body)
            .and_then(|record| serde_json::to_value(record).ok())
            .unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "<CustomerResult><statusCode>0</statusCode>\
                        <data><customerID>7</customerID><fullName>Jane</fullName></data>\
                        </CustomerResult>";

    #[test]
    fn test_entity_names_normalize() {
        for name in ["customer", "Customer", "CUSTOMER"] {
            let json = decode_entity_json(name, BODY, false).unwrap();
            assert_eq!(json["customerID"], 7);
        }
        for name in ["price-line", "price_line", "PriceLine"] {
            assert!(decode_entity_json(name, "<x/>", false).is_some());
        }
    }

    #[test]
    fn test_unknown_entity_is_none() {
        assert!(decode_entity_json("invoice", BODY, false).is_none());
    }

    #[test]
    fn test_single_miss_renders_null() {
        let json = decode_entity_json("customer", "<r/>", false).unwrap();
        assert!(json.is_null());
    }

    #[test]
    fn test_list_renders_array() {
        let body = "<CustomerListResult>\
                    <data><customerID>1</customerID></data>\
                    <data><customerID>2</customerID></data>\
                    </CustomerListResult>";
        let json = decode_entity_json("customer", body, true).unwrap();
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["customerID"], 1);
    }

    #[test]
    fn test_status_json_verdicts() {
        let ok = status_json(BODY);
        assert_eq!(ok["ok"], true);
        assert_eq!(ok["statusCode"], 0);

        let failing = status_json(
            "<r><statusCode>17</statusCode><statusMessage>bad</statusMessage></r>",
        );
        assert_eq!(failing["ok"], false);
        assert!(failing["error"].as_str().unwrap().contains("17"));
    }
}
