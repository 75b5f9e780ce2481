//! Entity location over decoded trees.
//!
//! Responses wrap their payload differently per service and per API
//! version: under a `return` child, under `data`, inside a `*Result`
//! container, keyed by the entity name, or bare. The finder runs a staged
//! descent that tries the strongest signals first and only falls back to
//! an exhaustive walk at the end, so a hit in a well-known spot never
//! loses to a stray deeper match.

use tracing::{debug, trace};

use crate::value::{Tree, Value};

/// Traversal parameters for one vendor entity.
///
/// The finder itself is entity-agnostic; everything entity-specific lives
/// here, so adding an entity means adding a descriptor, not another
/// traversal.
#[derive(Debug, Clone, Copy)]
pub struct EntityDescriptor {
    /// PascalCase entity name as the vendor nests it.
    pub name: &'static str,
    /// Pluralized child key used by list payloads.
    pub plural: &'static str,
    /// Fields whose presence marks an untyped node as this entity.
    pub hallmarks: &'static [&'static str],
    /// Container tag of single-object responses.
    pub result_tag: &'static str,
    /// Container tag of list responses.
    pub list_result_tag: &'static str,
}

/// Returns `name` with the casing of its first letter flipped.
///
/// The vendor emits both `Status` and `status` style keys depending on
/// deployment, so most lookups try a key and its toggled twin.
pub(crate) fn toggled_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            first.to_ascii_lowercase().to_string() + chars.as_str()
        }
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Locates the node representing a single `desc` instance inside `value`.
///
/// The descent is staged: a child keyed by the entity name wins first,
/// then a hallmark match on the node itself, then the vendor's known
/// wrapper children (`return`, any non-scalar key ending in `result`,
/// `data`) nearest first, and only after that every remaining non-scalar
/// child depth first. Lists are searched element-wise in order and the
/// first hit wins throughout.
///
/// # Examples
///
/// ```
/// use tmsoap_core::find::{EntityDescriptor, find_entity};
/// use tmsoap_core::tree::deep_objectify;
///
/// static CUSTOMER: EntityDescriptor = EntityDescriptor {
///     name: "Customer",
///     plural: "Customers",
///     hallmarks: &["customerID", "fullName"],
///     result_tag: "CustomerResult",
///     list_result_tag: "CustomerListResult",
/// };
///
/// let tree =
///     deep_objectify("<return><Customer><customerID>7</customerID></Customer></return>");
/// let found = find_entity(&CUSTOMER, &tree).unwrap();
/// assert_eq!(found["customerID"].as_int(), Some(7));
/// ```
pub fn find_entity<'a>(desc: &EntityDescriptor, value: &'a Value) -> Option<&'a Tree> {
    search(desc, value)
}

fn search<'a>(desc: &EntityDescriptor, value: &'a Value) -> Option<&'a Tree> {
    match value {
        Value::Node(tree) => search_node(desc, tree),
        Value::List(items) => items.iter().find_map(|item| search(desc, item)),
        Value::Scalar(_) => None,
    }
}

fn search_node<'a>(desc: &EntityDescriptor, tree: &'a Tree) -> Option<&'a Tree> {
    let camel = toggled_case(desc.name);
    let mut tried: Vec<&str> = Vec::new();

    // A child keyed by the entity name is the strongest signal.
    for key in [desc.name, camel.as_str()] {
        tried.push(key);
        match tree.get(key) {
            Some(Value::Node(node)) => {
                trace!("{} found under name key {key:?}", desc.name);
                return Some(node);
            }
            Some(list @ Value::List(_)) => {
                if let Some(hit) = search(desc, list) {
                    return Some(hit);
                }
            }
            _ => {}
        }
    }

    // The node itself may already be the entity.
    if has_hallmark(desc, tree) {
        trace!("{} matched by hallmark field", desc.name);
        return Some(tree);
    }

    // Unwrap the containers the vendor actually uses, nearest first.
    for key in ["return", "Return"] {
        tried.push(key);
        if let Some(child) = tree.get(key)
            && let Some(hit) = search(desc, child)
        {
            return Some(hit);
        }
    }
    for (key, child) in tree.iter() {
        if key.to_ascii_lowercase().ends_with("result") && !matches!(child, Value::Scalar(_)) {
            tried.push(key);
            if let Some(hit) = search(desc, child) {
                return Some(hit);
            }
        }
    }
    for key in ["data", "Data"] {
        tried.push(key);
        if let Some(child) = tree.get(key)
            && let Some(hit) = search(desc, child)
        {
            return Some(hit);
        }
    }

    // Last resort: every remaining non-scalar child, depth first.
    for (key, child) in tree.iter() {
        if tried.contains(&key) || matches!(child, Value::Scalar(_)) {
            continue;
        }
        if let Some(hit) = search(desc, child) {
            return Some(hit);
        }
    }
    None
}

fn has_hallmark(desc: &EntityDescriptor, tree: &Tree) -> bool {
    desc.hallmarks
        .iter()
        .any(|field| tree.contains_key(field) || tree.contains_key(&toggled_case(field)))
}

/// Collects every `desc` instance a list payload carries.
///
/// Two spots are checked independently on a top-level node: a `data`
/// child (each element of a sequence, or a lone node, through the
/// finder), and a pluralized child keyed by `desc.plural` when it is a
/// sequence. When neither yields anything the whole value goes through
/// the single finder as a last resort. Results keep document order.
///
/// An instance reachable under both `data` and the pluralized key is
/// deliberately reported twice; callers that care about identity must
/// dedup themselves.
pub fn collect_entities<'a>(desc: &EntityDescriptor, value: &'a Value) -> Vec<&'a Tree> {
    let mut found = Vec::new();
    if let Value::Node(tree) = value {
        for key in ["data", "Data"] {
            if let Some(child) = tree.get(key) {
                match child {
                    Value::List(items) => {
                        for item in items {
                            if let Some(hit) = search(desc, item) {
                                found.push(hit);
                            }
                        }
                    }
                    node @ Value::Node(_) => {
                        if let Some(hit) = search(desc, node) {
                            found.push(hit);
                        }
                    }
                    Value::Scalar(_) => {}
                }
                break;
            }
        }
        let plural_camel = toggled_case(desc.plural);
        for key in [desc.plural, plural_camel.as_str()] {
            if let Some(Value::List(items)) = tree.get(key) {
                for item in items {
                    if let Some(hit) = search(desc, item) {
                        found.push(hit);
                    }
                }
                break;
            }
        }
    }
    if found.is_empty()
        && let Some(hit) = search(desc, value)
    {
        found.push(hit);
    }
    debug!("collected {} {} node(s)", found.len(), desc.name);
    found
}
