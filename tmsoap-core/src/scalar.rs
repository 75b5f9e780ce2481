//! Leaf-text coercion: the fixed grammar applied to element text.
//!
//! Every leaf in a decoded tree goes through [`coerce`], so numbers,
//! booleans and the legacy `/Date(ms)/` wrapper come out typed while
//! everything else passes through verbatim. The grammar is deliberately
//! narrow: it never guesses, and unrecognized text is never an error.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::escape::unescape;
use regex::Regex;

use crate::value::Scalar;

static INT_TEXT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?\d+$").unwrap());
static DECIMAL_TEXT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?\d+\.\d+$").unwrap());
static EPOCH_WRAPPER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/Date\((-?\d+)\)/$").unwrap());

/// Coerces raw element text into a typed scalar.
///
/// The rules apply in priority order to the trimmed, entity-unescaped
/// text:
///
/// 1. empty text stays `Text("")`
/// 2. `true` / `false` in any casing become `Bool`
/// 3. a `/Date(ms)/` epoch wrapper becomes an ISO-8601 UTC `Text`
/// 4. an optional-minus digit run becomes `Int`
/// 5. a digit run with a single decimal point becomes `Float`
/// 6. anything else passes through as `Text`
///
/// A `/Date(ms)/` wrapper whose millisecond value cannot be represented
/// falls through to the later rules instead of failing. Integer text too
/// long for `i64` keeps its numeric meaning as a `Float` where that stays
/// finite. An invalid entity reference leaves the text as received.
///
/// # Examples
///
/// ```
/// use tmsoap_core::scalar::coerce;
/// use tmsoap_core::value::Scalar;
///
/// assert_eq!(coerce(" TRUE "), Scalar::Bool(true));
/// assert_eq!(coerce("42"), Scalar::Int(42));
/// assert_eq!(coerce("3.14"), Scalar::Float(3.14));
/// assert_eq!(coerce("2023-09-12"), Scalar::Text("2023-09-12".to_string()));
/// ```
pub fn coerce(text: &str) -> Scalar {
    let trimmed = text.trim();
    let unescaped = match unescape(trimmed) {
        Ok(resolved) => resolved,
        Err(_) => Cow::Borrowed(trimmed),
    };
    let text: &str = &unescaped;

    if text.is_empty() {
        return Scalar::Text(String::new());
    }
    if text.eq_ignore_ascii_case("true") {
        return Scalar::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return Scalar::Bool(false);
    }
    if let Some(captures) = EPOCH_WRAPPER.captures(text)
        && let Some(iso) = epoch_millis_to_iso(&captures[1])
    {
        return Scalar::Text(iso);
    }
    if INT_TEXT.is_match(text) {
        if let Ok(number) = text.parse::<i64>() {
            return Scalar::Int(number);
        }
        // Digit runs too long for i64 keep their numeric meaning.
        if let Ok(number) = text.parse::<f64>()
            && number.is_finite()
        {
            return Scalar::Float(number);
        }
    }
    if DECIMAL_TEXT.is_match(text)
        && let Ok(number) = text.parse::<f64>()
        && number.is_finite()
    {
        return Scalar::Float(number);
    }
    Scalar::Text(text.to_string())
}

/// Converts epoch milliseconds into `YYYY-MM-DDTHH:MM:SS.mmmZ`, or `None`
/// when the value is outside the representable range.
fn epoch_millis_to_iso(digits: &str) -> Option<String> {
    let millis: i64 = digits.parse().ok()?;
    let stamp = DateTime::<Utc>::from_timestamp_millis(millis)?;
    Some(stamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}
