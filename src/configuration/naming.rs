//! Duplicate-name handling for configurations
//!
//! Copies are named `"<base> (N)"`. A new copy gets one more than the highest
//! `N` already used for the same base; an existing name without a suffix
//! counts as `N = 1`.

use regex::Regex;
use std::sync::LazyLock;

static DUPLICATE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*) \(([0-9]+)\)$").expect("duplicate suffix pattern is valid")
});

/// Split `"Foo (3)"` into `("Foo", Some(3))`
///
/// A missing suffix, or one that is not a positive integer, leaves the whole
/// name as the base.
pub fn split_duplicate_suffix(name: &str) -> (&str, Option<u32>) {
    let Some(captures) = DUPLICATE_SUFFIX.captures(name) else {
        return (name, None);
    };

    let number = captures
        .get(2)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|n| *n > 0);

    match (captures.get(1), number) {
        (Some(base), Some(number)) => (base.as_str(), Some(number)),
        _ => (name, None),
    }
}

/// Name for a configuration that must not collide with `existing`
///
/// Returns `requested` unchanged when no existing name shares its base.
pub fn make_configuration_name<'a, I>(existing: I, requested: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let (base, _) = split_duplicate_suffix(requested);

    let max_duplicate = existing
        .into_iter()
        .filter_map(|name| {
            let (existing_base, number) = split_duplicate_suffix(name);
            (existing_base == base).then_some(number.unwrap_or(1))
        })
        .max();

    match max_duplicate {
        Some(max) => format!("{base} ({})", max.saturating_add(1)),
        None => requested.to_string(),
    }
}
