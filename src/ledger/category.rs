/// Label given to expenses entered without a category.
pub const UNCATEGORIZED: &str = "Sin categoría";

/// Canonical form of a user-typed category.
///
/// Surrounding whitespace is trimmed and the first character upper-cased; the
/// remainder is kept as typed. Blank input maps to [`UNCATEGORIZED`].
pub fn normalize_category(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        None => UNCATEGORIZED.to_string(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}
