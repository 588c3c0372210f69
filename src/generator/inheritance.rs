use std::collections::HashSet;

use crate::models::AttributeContext;

/// Drop attributes the parent class already declares.
///
/// Both sides must already be normalized so names compare canonically.
/// Without a parent the list is returned unchanged.
pub fn flatten(
    attributes: Vec<AttributeContext>,
    parent_fields: Option<&HashSet<String>>,
) -> Vec<AttributeContext> {
    match parent_fields {
        Some(parent) => attributes
            .into_iter()
            .filter(|attr| !parent.contains(&attr.name))
            .collect(),
        None => attributes,
    }
}
