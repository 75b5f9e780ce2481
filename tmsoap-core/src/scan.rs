//! Namespace-agnostic tag scanning over raw XML text.
//!
//! The vendor mixes namespace prefixes and tag casing across API versions
//! and deployments, so these scans match an element by local name alone:
//! optional prefix, any attributes, case-insensitive. The inner capture is
//! non-greedy, meaning the first matching close tag wins and nested
//! same-named elements are not paired up. The payload shapes actually on
//! the wire are flat enough for that, and malformed input simply fails to
//! match instead of erroring.

use regex::Regex;

/// Optional namespace prefix in front of a local name, e.g. `ns2:`.
pub(crate) const NS_PREFIX: &str = r"(?:[\w.-]+:)?";

/// Builds the element pattern for one local name.
///
/// Matches `<tag ...>inner</tag>` or a self-closing `<tag .../>`,
/// tolerating a namespace prefix on either tag and any attributes on the
/// opening one. The name is escaped, so any tag text is safe to pass.
fn element_pattern(tag: &str) -> Regex {
    let tag = regex::escape(tag);
    let pattern = format!(
        r"(?is)<{NS_PREFIX}{tag}(?:\s[^>]*?)?(?:/>|>(.*?)</{NS_PREFIX}{tag}\s*>)"
    );
    Regex::new(&pattern).expect("escaped tag pattern is valid")
}

/// Returns the inner text of the first element whose local name matches
/// `tag`, ignoring namespace prefix and casing.
///
/// # Arguments
///
/// * `xml` - Raw XML text, well-formed or not
/// * `tag` - Element local name to look for
///
/// # Returns
///
/// The text between the opening and first matching closing tag, `Some("")`
/// for a self-closing or empty element, or `None` when no element matches.
///
/// # Examples
///
/// ```
/// use tmsoap_core::scan::find_first_tag;
///
/// let xml = r#"<ns2:statusMessage lang="en">OK</statusMessage>"#;
/// assert_eq!(find_first_tag(xml, "STATUSMESSAGE"), Some("OK"));
/// assert_eq!(find_first_tag(xml, "statusCode"), None);
/// ```
pub fn find_first_tag<'a>(xml: &'a str, tag: &str) -> Option<&'a str> {
    element_pattern(tag)
        .captures(xml)
        .map(|captures| captures.get(1).map_or("", |inner| inner.as_str()))
}

/// Returns the whole first matching element, opening tag through closing
/// tag, as a slice of the input.
///
/// Used to cut a response down to its result container before decoding.
pub fn find_first_tag_block<'a>(xml: &'a str, tag: &str) -> Option<&'a str> {
    element_pattern(tag).find(xml).map(|found| found.as_str())
}

/// Returns every non-overlapping matching element block in document order.
pub fn find_all_tag_blocks<'a>(xml: &'a str, tag: &str) -> Vec<&'a str> {
    element_pattern(tag)
        .find_iter(xml)
        .map(|found| found.as_str())
        .collect()
}
