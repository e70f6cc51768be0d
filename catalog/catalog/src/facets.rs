use std::collections::BTreeSet;

use crate::part::Part;

/// The distinct manufacturers of the given parts, sorted ascending.
pub fn manufacturers<'a>(parts: impl IntoIterator<Item = &'a Part>) -> Vec<String> {
    parts
        .into_iter()
        .map(|part| part.manufacturer.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
