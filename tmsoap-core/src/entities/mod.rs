//! Typed records for the vendor's domain objects.
//!
//! One file per service area, mirroring how the API groups its endpoints.
//! Every record is built by [`Entity::from_tree`] out of an untyped
//! decoded node: declared fields are read with the casing-priority rule
//! and coerced leniently, enum-coded fields get a derived `*Name` label,
//! and whatever the schema does not declare survives verbatim in the
//! record's `extra` tree. Nothing in here returns an error; a field that
//! cannot be read is simply `None`.

use std::collections::HashSet;

use crate::find::{EntityDescriptor, toggled_case};
use crate::value::{Scalar, Tree, Value};

mod customer;
mod item;
mod job;
mod order;
mod pricing;
mod resource;
mod workflow;

pub use customer::{Address, Customer};
pub use item::Item;
pub use job::{Job, JobMetric, JobTrackingTime};
pub use order::Order;
pub use pricing::{PriceLine, PriceUnit, Pricelist, PricelistEntry};
pub use resource::Resource;
pub use workflow::Workflow;

/// A typed record that can be located in and coerced out of a decoded
/// response tree.
pub trait Entity: Sized {
    /// Traversal parameters for locating this entity.
    fn descriptor() -> &'static EntityDescriptor;

    /// Coerces a located node into the typed record.
    ///
    /// Always succeeds: fields that are absent or unreadable come out as
    /// `None`, and undeclared keys land in the record's `extra` tree.
    fn from_tree(tree: &Tree) -> Self;
}

/// Field extraction over one node: casing-priority lookup, lenient
/// coercion, and claimed-key tracking for the catch-all.
pub(crate) struct FieldReader<'a> {
    tree: &'a Tree,
    claimed: HashSet<String>,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(tree: &'a Tree) -> Self {
        Self {
            tree,
            claimed: HashSet::new(),
        }
    }

    /// Resolves `tag` by the casing rule: the exact tag first, then its
    /// first-letter-toggled twin. Empty text counts as absent. Both
    /// variants are claimed either way so the catch-all skips them.
    fn lookup(&mut self, tag: &str) -> Option<&'a Value> {
        let toggled = toggled_case(tag);
        self.claimed.insert(tag.to_string());
        self.claimed.insert(toggled.clone());
        for key in [tag, toggled.as_str()] {
            if let Some(value) = self.tree.get(key)
                && !is_empty_text(value)
            {
                return Some(value);
            }
        }
        None
    }

    fn unclaim(&mut self, tag: &str) {
        self.claimed.remove(tag);
        self.claimed.remove(&toggled_case(tag));
    }

    fn scalar(&mut self, tag: &str) -> Option<&'a Scalar> {
        match self.lookup(tag) {
            Some(Value::Scalar(scalar)) => Some(scalar),
            Some(_) => {
                // A declared field with an unexpected nested shape flows
                // to the catch-all instead of vanishing.
                self.unclaim(tag);
                None
            }
            None => None,
        }
    }

    pub(crate) fn text(&mut self, tag: &str) -> Option<String> {
        self.scalar(tag).map(Scalar::to_text)
    }

    pub(crate) fn int(&mut self, tag: &str) -> Option<i64> {
        self.scalar(tag).and_then(Scalar::as_int)
    }

    pub(crate) fn float(&mut self, tag: &str) -> Option<f64> {
        self.scalar(tag).and_then(Scalar::as_f64)
    }

    pub(crate) fn boolean(&mut self, tag: &str) -> Option<bool> {
        self.scalar(tag).and_then(Scalar::as_bool)
    }

    /// Reads an enum-coded field as `(id, label)`.
    ///
    /// A numeric value resolves through `table`; an unmapped id keeps the
    /// id with no label, and a symbolic name from newer deployments passes
    /// through as the label with no id.
    pub(crate) fn code(
        &mut self,
        tag: &str,
        table: fn(i64) -> Option<&'static str>,
    ) -> (Option<i64>, Option<String>) {
        match self.scalar(tag) {
            Some(Scalar::Int(id)) => (Some(*id), table(*id).map(str::to_string)),
            Some(Scalar::Text(text)) => match text.trim().parse::<i64>() {
                Ok(id) => (Some(id), table(id).map(str::to_string)),
                Err(_) => (None, Some(text.clone())),
            },
            _ => (None, None),
        }
    }

    /// Copies through every key no declared field claimed.
    pub(crate) fn leftovers(self) -> Tree {
        let mut extra = Tree::new();
        for (key, value) in self.tree.iter() {
            if !self.claimed.contains(key) {
                extra.insert(key, value.clone());
            }
        }
        extra
    }
}

fn is_empty_text(value: &Value) -> bool {
    matches!(value, Value::Scalar(Scalar::Text(text)) if text.is_empty())
}
