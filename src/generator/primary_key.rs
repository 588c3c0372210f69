use crate::known_types::{self, JAVA_LONG_KEY, JAVA_STRING_KEY};
use crate::models::AttributeContext;

/// Key chosen for a class
#[derive(Debug, Clone, PartialEq)]
pub struct InferredKey {
    /// Position in the attribute list
    pub index: usize,
    pub name: String,
    /// `Long` for surrogate keys, `String` for natural keys
    pub ty: String,
    pub generated: bool,
}

/// Pick the primary key of a class.
///
/// The first attribute with an integer-like type becomes a generated `Long`
/// key, the first textual one a natural `String` key, whichever comes first.
/// Other types are never keys.
pub fn infer_primary_key(attributes: &[AttributeContext]) -> Option<InferredKey> {
    attributes.iter().enumerate().find_map(|(index, attr)| {
        let (ty, generated) = if known_types::is_integer_type(&attr.ty) {
            (JAVA_LONG_KEY, true)
        } else if known_types::is_textual_type(&attr.ty) {
            (JAVA_STRING_KEY, false)
        } else {
            return None;
        };

        Some(InferredKey {
            index,
            name: attr.name.clone(),
            ty: ty.to_string(),
            generated,
        })
    })
}

/// Mark the inferred key on the attribute list, forcing its key type
pub fn apply_key(attributes: &mut [AttributeContext], key: &InferredKey) {
    if let Some(attr) = attributes.get_mut(key.index) {
        attr.is_id = true;
        attr.ty = key.ty.clone();
        attr.generated = Some(key.generated);
    }
}
