//! Relationship resolver - turns UML edges into persistence relations for one class

use crate::models::{ManyToMany, ManyToOne, OneToMany, OneToOne, RelationshipKind, UmlClass};
use crate::naming::{pluralize, to_entity_name, to_field_name};
use crate::normalizer::SchemaIndex;

/// Marker that makes a multiplicity label "many" (`*`, `0..*`, `1..*`)
pub const MANY_MARKER: char = '*';

/// Relations of a single focal class
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResolvedRelations {
    /// Entity name of the generalization target, if any
    pub parent_class: Option<String>,
    pub one_to_one: Vec<OneToOne>,
    pub one_to_many: Vec<OneToMany>,
    pub many_to_one: Vec<ManyToOne>,
    pub many_to_many: Vec<ManyToMany>,
}

/// Multiplicity of both ends of a relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Multiplicity {
    pub source_is_many: bool,
    pub target_is_many: bool,
}

impl Multiplicity {
    /// A missing label means a single end
    pub fn from_labels(labels: &[String]) -> Self {
        let is_many = |label: Option<&String>| label.is_some_and(|l| l.contains(MANY_MARKER));

        Self {
            source_is_many: is_many(labels.first()),
            target_is_many: is_many(labels.get(1)),
        }
    }
}

/// Entity name of the class the focal class generalizes to; the last declared wins
pub fn resolve_parent(index: &SchemaIndex<'_>, focal: &UmlClass) -> Option<String> {
    index
        .schema()
        .relationships
        .iter()
        .filter(|rel| rel.kind == RelationshipKind::Generalization)
        .filter_map(|rel| Some((index.class(&rel.source_id)?, index.class(&rel.target_id)?)))
        .filter(|(source, _)| source.id == focal.id)
        .last()
        .map(|(_, target)| to_entity_name(&target.name))
}

/// Resolve every relationship the focal class takes part in.
///
/// Entries keep the declaration order of the relationships and are never
/// deduplicated. Relationships with an unresolvable end are skipped. When a
/// class has several generalizations the last one declared wins.
pub fn resolve(index: &SchemaIndex<'_>, focal: &UmlClass) -> ResolvedRelations {
    let mut resolved = ResolvedRelations {
        parent_class: resolve_parent(index, focal),
        ..Default::default()
    };

    for rel in &index.schema().relationships {
        let (Some(source), Some(target)) =
            (index.class(&rel.source_id), index.class(&rel.target_id))
        else {
            continue;
        };

        let focal_is_source = source.id == focal.id;
        let focal_is_target = target.id == focal.id;
        if !focal_is_source && !focal_is_target {
            continue;
        }

        if !rel.kind.is_structural() {
            continue;
        }

        let source_entity = to_entity_name(&source.name);
        let target_entity = to_entity_name(&target.name);

        let multiplicity = Multiplicity::from_labels(&rel.labels);

        if focal_is_source {
            resolve_source_side(&mut resolved, multiplicity, &source_entity, &target_entity);
        }

        if focal_is_target && multiplicity.target_is_many {
            resolved.many_to_one.push(ManyToOne {
                target_field: to_field_name(&source_entity),
                target_entity: source_entity,
            });
        }
    }

    resolved
}

fn resolve_source_side(
    resolved: &mut ResolvedRelations,
    multiplicity: Multiplicity,
    source_entity: &str,
    target_entity: &str,
) {
    match (multiplicity.source_is_many, multiplicity.target_is_many) {
        (false, true) => resolved.one_to_many.push(OneToMany {
            target_entity: target_entity.to_string(),
            collection_field: pluralize(&to_field_name(target_entity)),
            mapped_by: to_field_name(source_entity),
        }),
        (false, false) => resolved.one_to_one.push(OneToOne {
            target_entity: target_entity.to_string(),
            target_field: to_field_name(target_entity),
        }),
        (true, true) => {
            let this_table = source_entity.to_lowercase();
            let other_table = target_entity.to_lowercase();
            resolved.many_to_many.push(ManyToMany {
                target_entity: target_entity.to_string(),
                collection_field: pluralize(&to_field_name(target_entity)),
                join_table: format!("{}_{}", this_table, other_table),
                this_table,
                other_table,
            });
        }
        // Many source, single target is left unmapped
        (true, false) => {}
    }
}
