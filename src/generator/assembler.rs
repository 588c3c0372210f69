//! Context assembler - builds the per-class rendering contexts

use std::collections::HashSet;

use crate::models::{
    Attribute, AttributeContext, ControllerContext, EntityContext, PrimaryKeyContext,
    RepositoryContext, ServiceContext, UmlClass,
};
use crate::naming::{pluralize, setter_name, to_entity_name, to_field_name};
use crate::normalizer::SchemaIndex;
use crate::resolver::{resolve, resolve_parent};

use super::inheritance::flatten;
use super::methods::build_method;
use super::primary_key::{apply_key, infer_primary_key, InferredKey};
use super::type_mapper::map_attribute_type;

/// The four per-class contexts
#[derive(Debug, Clone, PartialEq)]
pub struct ClassContexts {
    pub entity: EntityContext,
    pub repository: RepositoryContext,
    pub service: ServiceContext,
    pub controller: ControllerContext,
}

/// Normalize attribute names and types, keeping declaration order.
///
/// Reference types must name a class of the schema, otherwise they become `Object`.
pub fn normalize_attributes(
    index: &SchemaIndex<'_>,
    attributes: &[Attribute],
) -> Vec<AttributeContext> {
    attributes
        .iter()
        .map(|attr| AttributeContext {
            name: to_field_name(&attr.name),
            ty: map_attribute_type(&attr.ty, |name| index.class_by_entity(name).is_some()),
            is_id: false,
            generated: None,
        })
        .collect()
}

/// Normalized attributes with the inferred key applied
fn keyed_attributes(
    index: &SchemaIndex<'_>,
    class: &UmlClass,
) -> (Vec<AttributeContext>, Option<InferredKey>) {
    let mut attributes = normalize_attributes(index, &class.attributes);
    let key = infer_primary_key(&attributes);
    if let Some(key) = &key {
        apply_key(&mut attributes, key);
    }
    (attributes, key)
}

fn key_context(key: &InferredKey, inherited: bool) -> PrimaryKeyContext {
    PrimaryKeyContext {
        name: key.name.clone(),
        ty: key.ty.clone(),
        setter: setter_name(&key.name),
        generated: key.generated,
        inherited,
    }
}

/// Top of the generalization chain above `class`, or `class` itself
fn root_class<'a>(index: &SchemaIndex<'a>, class: &'a UmlClass) -> &'a UmlClass {
    let mut current = class;
    let mut seen = HashSet::from([current.id.as_str()]);

    while let Some(parent) =
        resolve_parent(index, current).and_then(|name| index.class_by_entity(&name))
    {
        if !seen.insert(parent.id.as_str()) {
            break;
        }
        current = parent;
    }

    current
}

/// Pluralized, lowercased collection name for an entity (`OrderItem` -> `orderitems`)
pub fn collection_name(entity_name: &str) -> String {
    pluralize(&to_field_name(entity_name)).to_lowercase()
}

/// Build the entity context of one class.
///
/// Only reads the shared index, so classes can be assembled independently.
/// A class with a parent never declares a key of its own: the hierarchy
/// shares the key of its root class, reported as inherited.
pub fn assemble_entity(
    index: &SchemaIndex<'_>,
    class: &UmlClass,
    base_package: &str,
) -> EntityContext {
    let entity_name = to_entity_name(&class.name);
    let relations = resolve(index, class);

    let parent = relations
        .parent_class
        .as_deref()
        .and_then(|name| index.class_by_entity(name));

    let (attributes, primary_key) = match parent {
        Some(parent) => {
            let parent_fields: HashSet<String> = normalize_attributes(index, &parent.attributes)
                .into_iter()
                .map(|a| a.name)
                .collect();
            let attributes = flatten(
                normalize_attributes(index, &class.attributes),
                Some(&parent_fields),
            );
            let (_, root_key) = keyed_attributes(index, root_class(index, class));
            (attributes, root_key.map(|key| key_context(&key, true)))
        }
        None => {
            let (attributes, key) = keyed_attributes(index, class);
            (attributes, key.map(|key| key_context(&key, false)))
        }
    };

    let is_entity = |name: &str| index.class_by_entity(name).is_some();

    EntityContext {
        base_package: base_package.to_string(),
        collection_name: collection_name(&entity_name),
        entity_name,
        attributes,
        one_to_one: relations.one_to_one,
        one_to_many: relations.one_to_many,
        many_to_one: relations.many_to_one,
        many_to_many: relations.many_to_many,
        parent_class: relations.parent_class,
        methods: class
            .methods
            .iter()
            .map(|method| build_method(method, is_entity))
            .collect(),
        primary_key,
    }
}

/// Build all four contexts of one class
pub fn assemble_class(
    index: &SchemaIndex<'_>,
    class: &UmlClass,
    base_package: &str,
) -> ClassContexts {
    let entity = assemble_entity(index, class, base_package);
    let pk_type = entity.pk_type().map(str::to_string);

    ClassContexts {
        repository: RepositoryContext {
            base_package: base_package.to_string(),
            entity_name: entity.entity_name.clone(),
            pk_type: pk_type.clone(),
        },
        service: ServiceContext {
            base_package: base_package.to_string(),
            entity_name: entity.entity_name.clone(),
            pk_type: pk_type.clone(),
            pk_setter: entity.primary_key.as_ref().map(|pk| pk.setter.clone()),
        },
        controller: ControllerContext {
            base_package: base_package.to_string(),
            entity_name: entity.entity_name.clone(),
            collection_name: entity.collection_name.clone(),
            pk_type,
        },
        entity,
    }
}
