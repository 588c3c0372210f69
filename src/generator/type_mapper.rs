use crate::known_types;
use crate::naming::to_entity_name;

/// Convert a UML type tag to its Java equivalent.
///
/// Total: unrecognized tags become a reference type named after the tag,
/// blank tags become `void` and tags without any usable characters become `Object`.
pub fn map_type(source_type: &str) -> String {
    if let Some(java) = known_types::tag_to_java(source_type) {
        return java.to_string();
    }

    if source_type.chars().any(|c| c.is_alphanumeric()) {
        to_entity_name(source_type)
    } else {
        known_types::JAVA_OBJECT.to_string()
    }
}

/// Map a type tag against the classes of a schema.
///
/// Reference types survive only when `is_entity` knows them; anything else
/// becomes `Object` so the generated source still compiles.
pub fn map_schema_type(source_type: &str, is_entity: impl Fn(&str) -> bool) -> String {
    if let Some(java) = known_types::tag_to_java(source_type) {
        return java.to_string();
    }

    let name = map_type(source_type);
    if is_entity(&name) {
        name
    } else {
        known_types::JAVA_OBJECT.to_string()
    }
}

/// Field type for an attribute; fields cannot be `void`, blank tags become `String`
pub fn map_attribute_type(source_type: &str, is_entity: impl Fn(&str) -> bool) -> String {
    let java = map_schema_type(source_type, is_entity);
    if is_void(&java) {
        known_types::JAVA_STRING.to_string()
    } else {
        java
    }
}

/// Check whether a mapped type means "no value"
pub fn is_void(java_type: &str) -> bool {
    java_type == known_types::JAVA_VOID
}

/// Literal a stub method returns for a given Java type
pub fn default_return(java_type: &str) -> &'static str {
    if known_types::is_integer_type(java_type) {
        "0"
    } else if known_types::is_float_type(java_type) {
        "0.0"
    } else if java_type == known_types::JAVA_BOOLEAN {
        "false"
    } else if java_type == known_types::JAVA_CHAR {
        "'\\0'"
    } else {
        "null"
    }
}
