//! Tree objectification: raw XML text into nested [`Value`] trees.
//!
//! This is the structural half of decoding. Child elements are found with
//! the same tolerant scanning rules as [`crate::scan`]: prefixes are
//! dropped from keys, casing is preserved, and anything that does not look
//! like a matched element with non-empty inner text is simply skipped.
//! Empty and self-closing elements are therefore invisible, which matches
//! how the services treat them.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::scalar::coerce;
use crate::scan::NS_PREFIX;
use crate::value::{Scalar, Tree, Value};

/// Opening tag (or self-closing element): optional prefix, captured local
/// name, optional attributes.
static OPEN_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)<{NS_PREFIX}([A-Za-z_][\w.-]*)(?:\s[^>]*?)?(/?)>")).unwrap()
});

static TAG_TEXT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// An immediate child element: local name plus raw inner text.
struct Child<'a> {
    name: &'a str,
    inner: &'a str,
}

/// Enumerates the immediate child elements of `fragment` in document
/// order.
///
/// A child only counts when its opening tag is followed by non-empty inner
/// text and a close tag with the same local name (first close wins, any
/// prefix, any casing). Unmatched opens and self-closing elements are
/// stepped over so the scan can keep going.
fn children(fragment: &str) -> Vec<Child<'_>> {
    let mut found = Vec::new();
    let mut pos = 0;
    while pos < fragment.len() {
        let Some(captures) = OPEN_ELEMENT.captures(&fragment[pos..]) else {
            break;
        };
        let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
            break;
        };
        let open_end = pos + whole.end();
        if whole.as_str().ends_with("/>") {
            pos = open_end;
            continue;
        }
        match find_close(&fragment[open_end..], name.as_str()) {
            Some((close_start, close_end)) if close_start > 0 => {
                found.push(Child {
                    name: name.as_str(),
                    inner: &fragment[open_end..open_end + close_start],
                });
                pos = open_end + close_end;
            }
            // Empty or unclosed: skip the open tag and keep scanning.
            _ => pos = open_end,
        }
    }
    found
}

/// Finds the first close tag for `name` in `text`, returning its byte
/// range.
fn find_close(text: &str, name: &str) -> Option<(usize, usize)> {
    let name = regex::escape(name);
    let pattern = Regex::new(&format!(r"(?i)</{NS_PREFIX}{name}\s*>")).ok()?;
    pattern.find(text).map(|found| (found.start(), found.end()))
}

/// One-level conversion of XML text into a tree.
///
/// Each immediate child becomes an entry keyed by its local name. Leaf
/// children are coerced with the scalar grammar; a child whose inner text
/// itself contains an element open tag keeps that inner XML verbatim as
/// text rather than being recursed into. Repeated names promote to lists.
/// Text with no matched children yields an empty tree.
pub fn objectify(fragment: &str) -> Tree {
    let mut tree = Tree::new();
    for child in children(fragment) {
        if OPEN_ELEMENT.is_match(child.inner) {
            tree.insert(child.name, Value::Scalar(Scalar::Text(child.inner.to_string())));
        } else {
            tree.insert(child.name, Value::Scalar(coerce(child.inner)));
        }
    }
    tree
}

/// Fully recursive conversion of XML text into a [`Value`].
///
/// Every matched element becomes a tree entry, depth first: children with
/// element children become nested nodes, leaves go through scalar
/// coercion, and repeated sibling names promote to lists in document
/// order. Text with no matched children at the top level falls back to
/// stripping all tags and coercing whatever text remains.
///
/// # Examples
///
/// ```
/// use tmsoap_core::tree::deep_objectify;
///
/// let value = deep_objectify("<a><b>1</b><b>2</b></a>");
/// let b = value.as_node().unwrap()["a"].as_node().unwrap()["b"]
///     .as_list()
///     .unwrap();
/// assert_eq!(b[0].as_int(), Some(1));
/// assert_eq!(b[1].as_int(), Some(2));
/// ```
pub fn deep_objectify(fragment: &str) -> Value {
    match build_node(fragment) {
        Some(node) => node,
        None => {
            trace!("no matched children, stripping tags");
            Value::Scalar(coerce(&strip_tags(fragment)))
        }
    }
}

/// Builds a node from the element children of `text`, or `None` when it
/// has none.
fn build_node(text: &str) -> Option<Value> {
    let kids = children(text);
    if kids.is_empty() {
        return None;
    }
    let mut tree = Tree::new();
    for child in kids {
        let value =
            build_node(child.inner).unwrap_or_else(|| Value::Scalar(coerce(child.inner)));
        tree.insert(child.name, value);
    }
    Some(Value::Node(tree))
}

/// Removes every tag, keeping only the text in between.
fn strip_tags(text: &str) -> String {
    TAG_TEXT.replace_all(text, "").into_owned()
}
