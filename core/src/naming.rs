//! Identifier case conversion for table, entity, and file names.

/// Converts a `snake_case` (or `kebab-case`) table name to the PascalCase
/// entity name the generator defaults to.
///
/// # Examples
///
/// ```
/// use repogen_core::to_pascal_case;
///
/// assert_eq!(to_pascal_case("line_items"), "LineItems");
/// assert_eq!(to_pascal_case("orders"), "Orders");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| c == '_' || c == '-' || c == ' ')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Converts a PascalCase type name to the `snake_case` file name its
/// artifact is written to.
///
/// # Examples
///
/// ```
/// use repogen_core::to_snake_case;
///
/// assert_eq!(to_snake_case("BaseRepository"), "base_repository");
/// assert_eq!(to_snake_case("LineItemsKey"), "line_items_key");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
