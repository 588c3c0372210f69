//! Schema normalizer - canonical form of a raw diagram plus id/name lookups

use anyhow::Result;
use std::collections::{HashMap, HashSet};

use crate::models::{Attribute, Method, Relationship, UmlClass, UmlSchema};
use crate::naming::to_entity_name;

/// Produce the canonical form of a schema.
///
/// Trims every identifier, name, type tag and label, and gives classes with a
/// blank id a stable one derived from their name. Idempotent.
pub fn normalize(schema: &UmlSchema) -> UmlSchema {
    let classes = schema.classes.iter().map(normalize_class).collect();
    let relationships = schema
        .relationships
        .iter()
        .map(normalize_relationship)
        .collect();

    UmlSchema {
        classes,
        relationships,
    }
}

fn normalize_class(class: &UmlClass) -> UmlClass {
    let name = class.name.trim().to_string();
    let id = match class.id.trim() {
        "" => to_entity_name(&name),
        id => id.to_string(),
    };

    UmlClass {
        id,
        name,
        attributes: class
            .attributes
            .iter()
            .map(|a| Attribute {
                name: a.name.trim().to_string(),
                ty: a.ty.trim().to_string(),
            })
            .collect(),
        methods: class
            .methods
            .iter()
            .map(|m| Method {
                name: m.name.trim().to_string(),
                return_type: m.return_type.as_deref().map(|t| t.trim().to_string()),
                parameters: m.parameters.clone(),
            })
            .collect(),
    }
}

fn normalize_relationship(rel: &Relationship) -> Relationship {
    Relationship {
        id: rel.id.as_deref().map(|id| id.trim().to_string()),
        kind: rel.kind.clone(),
        source_id: rel.source_id.trim().to_string(),
        target_id: rel.target_id.trim().to_string(),
        labels: rel.labels.iter().map(|l| l.trim().to_string()).collect(),
    }
}

/// Reject schemas the engine cannot generate deterministically.
///
/// Runs upstream of the engine; duplicate class ids would make relationship
/// resolution ambiguous.
pub fn validate(schema: &UmlSchema) -> Result<()> {
    let mut seen = HashSet::new();

    for class in &schema.classes {
        let id = class.id.trim();
        if !id.is_empty() && !seen.insert(id) {
            anyhow::bail!("Duplicate class id '{}' (class '{}')", id, class.name);
        }
    }

    Ok(())
}

/// Lookups over a normalized schema, built once per generation request
#[derive(Debug)]
pub struct SchemaIndex<'a> {
    schema: &'a UmlSchema,
    /// Class id -> class
    by_id: HashMap<&'a str, &'a UmlClass>,
    /// Entity name -> class (first declaration wins)
    by_entity: HashMap<String, &'a UmlClass>,
}

impl<'a> SchemaIndex<'a> {
    pub fn new(schema: &'a UmlSchema) -> Self {
        let mut by_id = HashMap::new();
        let mut by_entity = HashMap::new();

        for class in &schema.classes {
            by_id.entry(class.id.as_str()).or_insert(class);
            by_entity.entry(to_entity_name(&class.name)).or_insert(class);
        }

        Self {
            schema,
            by_id,
            by_entity,
        }
    }

    pub fn schema(&self) -> &'a UmlSchema {
        self.schema
    }

    /// Resolve a class id
    pub fn class(&self, id: &str) -> Option<&'a UmlClass> {
        self.by_id.get(id).copied()
    }

    /// Resolve a class by its entity name
    pub fn class_by_entity(&self, entity_name: &str) -> Option<&'a UmlClass> {
        self.by_entity.get(entity_name).copied()
    }

    /// Relationships whose source or target id does not resolve
    pub fn dangling_relationships(&self) -> impl Iterator<Item = &'a Relationship> + '_ {
        self.schema.relationships.iter().filter(|rel| {
            self.class(&rel.source_id).is_none() || self.class(&rel.target_id).is_none()
        })
    }
}
