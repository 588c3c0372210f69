use serde::{Deserialize, Serialize};

/// A whole UML class diagram
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UmlSchema {
    /// Classes in declaration order
    #[serde(default)]
    pub classes: Vec<UmlClass>,
    /// Relationships in declaration order
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

/// A class box on the diagram
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UmlClass {
    /// Identifier referenced by relationships; blank ids are filled in by the normalizer
    #[serde(default)]
    pub id: String,
    /// Source name, arbitrary casing and spacing
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub methods: Vec<Method>,
}

/// A class attribute
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    /// Source-level type tag ("int", "string", ...)
    #[serde(rename = "type", default)]
    pub ty: String,
}

/// A class operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub name: String,
    /// Blank or absent means void
    #[serde(default)]
    pub return_type: Option<String>,
    /// Opaque signature text, passed through unchanged
    #[serde(default)]
    pub parameters: Option<String>,
}

/// An edge between two classes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: RelationshipKind,
    pub source_id: String,
    pub target_id: String,
    /// `labels[0]` is the source multiplicity, `labels[1]` the target multiplicity
    #[serde(default)]
    pub labels: Vec<String>,
}

/// UML relationship type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationshipKind {
    Generalization,
    Association,
    Aggregation,
    Composition,
    /// Any other edge type; never resolved
    Unsupported(String),
}

impl RelationshipKind {
    /// Association, aggregation and composition all become persistence relations
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            RelationshipKind::Association
                | RelationshipKind::Aggregation
                | RelationshipKind::Composition
        )
    }

    pub fn as_str(&self) -> &str {
        match self {
            RelationshipKind::Generalization => "generalization",
            RelationshipKind::Association => "association",
            RelationshipKind::Aggregation => "aggregation",
            RelationshipKind::Composition => "composition",
            RelationshipKind::Unsupported(other) => other,
        }
    }
}

impl From<String> for RelationshipKind {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "generalization" => RelationshipKind::Generalization,
            "association" => RelationshipKind::Association,
            "aggregation" => RelationshipKind::Aggregation,
            "composition" => RelationshipKind::Composition,
            _ => RelationshipKind::Unsupported(value),
        }
    }
}

impl From<RelationshipKind> for String {
    fn from(kind: RelationshipKind) -> Self {
        kind.as_str().to_string()
    }
}

impl UmlSchema {
    pub fn new(classes: Vec<UmlClass>, relationships: Vec<Relationship>) -> Self {
        Self {
            classes,
            relationships,
        }
    }
}

impl UmlClass {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Builder-style helper, mostly for tests and fixtures
    pub fn with_attribute(mut self, name: &str, ty: &str) -> Self {
        self.attributes.push(Attribute {
            name: name.to_string(),
            ty: ty.to_string(),
        });
        self
    }

    pub fn with_method(mut self, name: &str, return_type: Option<&str>, parameters: &str) -> Self {
        self.methods.push(Method {
            name: name.to_string(),
            return_type: return_type.map(str::to_string),
            parameters: Some(parameters.to_string()),
        });
        self
    }
}

impl Relationship {
    pub fn new(kind: RelationshipKind, source_id: &str, target_id: &str, labels: &[&str]) -> Self {
        Self {
            id: None,
            kind,
            source_id: source_id.to_string(),
            target_id: target_id.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }
}
