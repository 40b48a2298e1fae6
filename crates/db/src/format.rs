//! Display-name formatting shared by the view models.

/// Uppercase the first character of `name`, leaving the rest untouched.
///
/// Names that already start with an uppercase letter, a digit or punctuation
/// come back unchanged.
pub fn capitalize_first_letter(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
