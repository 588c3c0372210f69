//! Known types module - centralized list of UML type tags and their Java mappings
//!
//! This module provides a single source of truth for type recognition,
//! shared by the type mapper, the primary key inferencer and the method builder.

/// Source tags mapped to `int`
pub const INTEGER_TAGS: &[&str] = &["int", "integer", "short", "byte", "number"];

/// Source tags mapped to `long`
pub const LONG_TAGS: &[&str] = &["long", "bigint"];

/// Source tags mapped to `double`
pub const FLOAT_TAGS: &[&str] = &["float", "double", "real"];

/// Source tags mapped to `BigDecimal`
pub const DECIMAL_TAGS: &[&str] = &["decimal", "bigdecimal"];

/// Source tags mapped to `String`
pub const STRING_TAGS: &[&str] = &["string", "str", "text", "varchar"];

/// Source tags mapped to `char`
pub const CHAR_TAGS: &[&str] = &["char", "character"];

/// Source tags mapped to `boolean`
pub const BOOL_TAGS: &[&str] = &["bool", "boolean"];

/// Source tags meaning "no value"
pub const VOID_TAGS: &[&str] = &["void", "none", "unit"];

/// Java target type names
pub const JAVA_INT: &str = "int";
pub const JAVA_LONG: &str = "long";
pub const JAVA_DOUBLE: &str = "double";
pub const JAVA_DECIMAL: &str = "BigDecimal";
pub const JAVA_STRING: &str = "String";
pub const JAVA_CHAR: &str = "char";
pub const JAVA_BOOLEAN: &str = "boolean";
pub const JAVA_DATE: &str = "LocalDate";
pub const JAVA_DATE_TIME: &str = "LocalDateTime";
pub const JAVA_VOID: &str = "void";
pub const JAVA_OBJECT: &str = "Object";

/// Boxed key types
pub const JAVA_LONG_KEY: &str = "Long";
pub const JAVA_STRING_KEY: &str = "String";

/// Integer-like target types
pub const INTEGER_FAMILY: &[&str] = &[JAVA_INT, JAVA_LONG];

/// Floating point target types
pub const FLOAT_FAMILY: &[&str] = &[JAVA_DOUBLE];

/// Textual target types (string or single character)
pub const TEXTUAL_FAMILY: &[&str] = &[JAVA_STRING, JAVA_CHAR];

/// Target types that need an import in generated sources
pub const IMPORTED_TYPES: &[(&str, &str)] = &[
    (JAVA_DECIMAL, "java.math.BigDecimal"),
    (JAVA_DATE, "java.time.LocalDate"),
    (JAVA_DATE_TIME, "java.time.LocalDateTime"),
];

/// Get the Java type for a known source type tag
pub fn tag_to_java(tag: &str) -> Option<&'static str> {
    let tag = tag.trim().to_ascii_lowercase();
    let tag = tag.as_str();

    if INTEGER_TAGS.contains(&tag) {
        return Some(JAVA_INT);
    }
    if LONG_TAGS.contains(&tag) {
        return Some(JAVA_LONG);
    }
    if FLOAT_TAGS.contains(&tag) {
        return Some(JAVA_DOUBLE);
    }
    if DECIMAL_TAGS.contains(&tag) {
        return Some(JAVA_DECIMAL);
    }
    if STRING_TAGS.contains(&tag) {
        return Some(JAVA_STRING);
    }
    if CHAR_TAGS.contains(&tag) {
        return Some(JAVA_CHAR);
    }
    if BOOL_TAGS.contains(&tag) {
        return Some(JAVA_BOOLEAN);
    }
    if tag == "date" {
        return Some(JAVA_DATE);
    }
    if tag == "datetime" || tag == "timestamp" {
        return Some(JAVA_DATE_TIME);
    }
    if tag.is_empty() || VOID_TAGS.contains(&tag) {
        return Some(JAVA_VOID);
    }
    None
}

/// Check if a target type is integer-like
pub fn is_integer_type(java: &str) -> bool {
    INTEGER_FAMILY.contains(&java)
}

/// Check if a target type is floating point
pub fn is_float_type(java: &str) -> bool {
    FLOAT_FAMILY.contains(&java)
}

/// Check if a target type is textual
pub fn is_textual_type(java: &str) -> bool {
    TEXTUAL_FAMILY.contains(&java)
}

/// Import line needed for a target type, if any
pub fn import_for(java: &str) -> Option<&'static str> {
    IMPORTED_TYPES
        .iter()
        .find(|(name, _)| *name == java)
        .map(|(_, import)| *import)
}
