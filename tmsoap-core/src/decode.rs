//! Typed decode entry points: response body in, records out.
//!
//! These tie the layers together the way the service callers do it:
//! scope the body down to the entity's result container when one is
//! present, objectify it, locate the entity nodes, coerce them. Scoping
//! uses the container's inner text so `data` and friends sit at the top
//! level of the tree; when the container tag is missing (older and newer
//! API versions rename them) the whole body is decoded and the finder's
//! descent does the work instead.

use tracing::debug;

use crate::entities::Entity;
use crate::find::{collect_entities, find_entity};
use crate::scan::find_first_tag;
use crate::tree::deep_objectify;

/// Decodes the single `T` carried by a response body.
///
/// Returns `None` when no node matching the entity is found anywhere;
/// malformed input is never an error.
///
/// # Examples
///
/// ```
/// use tmsoap_core::decode::decode_single;
/// use tmsoap_core::entities::Customer;
///
/// let body = "<ns2:CustomerResult><statusCode>0</statusCode>\
///             <data><customerID>7</customerID><fullName>Jane Doe</fullName></data>\
///             </ns2:CustomerResult>";
/// let customer = decode_single::<Customer>(body).unwrap();
/// assert_eq!(customer.customer_id, Some(7));
/// assert_eq!(customer.full_name.as_deref(), Some("Jane Doe"));
/// ```
pub fn decode_single<T: Entity>(xml: &str) -> Option<T> {
    let desc = T::descriptor();
    let scope = find_first_tag(xml, desc.result_tag).unwrap_or(xml);
    let tree = deep_objectify(scope);
    match find_entity(desc, &tree) {
        Some(node) => Some(T::from_tree(node)),
        None => {
            debug!("no {} node in response", desc.name);
            None
        }
    }
}

/// Decodes every `T` carried by a list response body.
///
/// An empty vec means nothing matched; a single-object response decodes
/// as a one-element list through the collection fallback.
pub fn decode_list<T: Entity>(xml: &str) -> Vec<T> {
    let desc = T::descriptor();
    let scope = find_first_tag(xml, desc.list_result_tag).unwrap_or(xml);
    let tree = deep_objectify(scope);
    collect_entities(desc, &tree)
        .into_iter()
        .map(T::from_tree)
        .collect()
}
