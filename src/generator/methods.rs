use crate::models::{Method, MethodContext};
use crate::naming::to_field_name;

use super::type_mapper::{default_return, is_void, map_schema_type};

/// Build the rendering data for one method.
///
/// `is_entity` tells which reference types exist in the schema.
pub fn build_method(method: &Method, is_entity: impl Fn(&str) -> bool) -> MethodContext {
    let return_type =
        map_schema_type(method.return_type.as_deref().unwrap_or_default(), is_entity);
    let default_return = if is_void(&return_type) {
        None
    } else {
        Some(default_return(&return_type).to_string())
    };

    MethodContext {
        name: to_field_name(&method.name),
        parameters: method.parameters.clone().unwrap_or_default(),
        return_type,
        default_return,
    }
}
