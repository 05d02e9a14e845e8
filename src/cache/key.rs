//! Composite Key Module
//!
//! Builds deterministic cache keys from a base name plus named parameters,
//! so that the same parameter set always hits the same entry regardless of
//! the order the parameters were supplied in.

use std::collections::BTreeMap;
use std::fmt::Display;

// == Composite Key ==
/// Derives a cache key from a base name and a flat parameter mapping.
///
/// Parameter names are sorted lexicographically and joined as `name=value`
/// pairs with `&`, appended to the base key after a `?`. An empty mapping
/// yields the base key unchanged.
///
/// Values are rendered with their `Display` conversion; no validation is
/// performed.
///
/// # Example
/// ```
/// use memocache::cache::composite_key;
///
/// let key = composite_key("logs", [("service", "b"), ("level", "a")]);
/// assert_eq!(key, "logs?level=a&service=b");
/// ```
pub fn composite_key<I, K, V>(base: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    // BTreeMap sorts by name; later duplicates overwrite earlier ones
    let sorted: BTreeMap<String, String> = params
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    if sorted.is_empty() {
        return base.to_string();
    }

    let joined = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", base, joined)
}
