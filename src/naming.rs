//! Name normalization - turns free-form diagram names into Java identifiers

use convert_case::{Case, Casing};

/// Java reserved words that cannot be used as field names
const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "true", "false", "null",
];

/// Split on anything that is not a letter or digit and rejoin with single spaces,
/// so case conversion only has to deal with word boundaries inside words.
/// Letters outside ASCII are kept; Java identifiers accept them.
fn words(raw: &str) -> String {
    raw.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert a class name into a capitalized type identifier
pub fn to_entity_name(raw: &str) -> String {
    let words = words(raw);
    if words.is_empty() {
        return "Entity".to_string();
    }

    let name = words.to_case(Case::Pascal);
    if name.starts_with(char::is_numeric) {
        format!("Entity{}", name)
    } else {
        name
    }
}

/// Convert a name into a lowercase-leading field identifier
pub fn to_field_name(raw: &str) -> String {
    let words = words(raw);
    if words.is_empty() {
        return "field".to_string();
    }

    let name = words.to_case(Case::Camel);
    if name.starts_with(char::is_numeric) {
        format!("field{}", name)
    } else if RESERVED_WORDS.contains(&name.as_str()) {
        format!("{}Value", name)
    } else {
        name
    }
}

/// English plural of a field name, suitable for collection fields
pub fn pluralize(field_name: &str) -> String {
    let lower = field_name.to_ascii_lowercase();

    if lower.is_empty() {
        return String::new();
    }

    if lower.ends_with('y') && !ends_with_vowel_y(&lower) {
        return format!("{}ies", &field_name[..field_name.len() - 1]);
    }

    if ["s", "x", "z", "ch", "sh"].iter().any(|s| lower.ends_with(s)) {
        return format!("{}es", field_name);
    }

    format!("{}s", field_name)
}

fn ends_with_vowel_y(lower: &str) -> bool {
    let mut chars = lower.chars().rev();
    chars.next();
    matches!(chars.next(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

fn capitalize(field_name: &str) -> String {
    let mut chars = field_name.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

/// Setter name for a field (`id` -> `setId`)
pub fn setter_name(field_name: &str) -> String {
    format!("set{}", capitalize(field_name))
}

/// Getter name for a field (`title` -> `getTitle`)
pub fn getter_name(field_name: &str) -> String {
    format!("get{}", capitalize(field_name))
}
