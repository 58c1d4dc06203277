//! Console text normalization
//!
//! Registry values are stored trimmed and upper-cased so that searches can
//! compare them exactly. Display goes the other way.

/// Trim and upper-case a raw console value.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Split a comma-separated console value into normalized items.
///
/// Blank items are dropped, so `"rock, ,jazz"` yields two entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Capitalize the first letter of every word, lower-case the rest.
pub fn title_case(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
