//! Substring search helpers shared by the negeri and kamus listings.
//!
//! Filters are matched literally: `%`, `_` and `\` in the user's term are
//! escaped before the term is wrapped in `%...%` for a `LIKE` comparison.

/// Normalize an optional filter, treating an empty string as "no filter"
pub fn active_filter(filter: Option<&str>) -> Option<&str> {
    filter.filter(|term| !term.is_empty())
}

/// Build a `LIKE` pattern matching `term` anywhere in the column
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
