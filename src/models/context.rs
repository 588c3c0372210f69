use serde::Serialize;

/// Identifies which template a context is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    Entity,
    Repository,
    Service,
    Controller,
    BuildDescriptor,
    Bootstrap,
    Configuration,
}

impl TemplateId {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Entity => "entity",
            TemplateId::Repository => "repository",
            TemplateId::Service => "service",
            TemplateId::Controller => "controller",
            TemplateId::BuildDescriptor => "build_descriptor",
            TemplateId::Bootstrap => "bootstrap",
            TemplateId::Configuration => "configuration",
        }
    }
}

/// A normalized entity attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeContext {
    /// Field identifier
    pub name: String,
    /// Target type name
    pub ty: String,
    /// True for the inferred primary key
    pub is_id: bool,
    /// Only set on the key: `true` for surrogate keys, `false` for natural keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated: Option<bool>,
}

/// Primary key metadata for an entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimaryKeyContext {
    pub name: String,
    pub ty: String,
    pub setter: String,
    pub generated: bool,
    /// The key is declared by the parent class, not by this entity
    pub inherited: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OneToOne {
    pub target_entity: String,
    pub target_field: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OneToMany {
    pub target_entity: String,
    pub collection_field: String,
    /// Inverse-side field name on the target
    pub mapped_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManyToOne {
    pub target_entity: String,
    pub target_field: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManyToMany {
    pub target_entity: String,
    pub collection_field: String,
    pub join_table: String,
    pub this_table: String,
    pub other_table: String,
}

/// A method ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodContext {
    pub name: String,
    pub parameters: String,
    pub return_type: String,
    /// Literal returned by the generated stub; `None` for void methods
    pub default_return: Option<String>,
}

/// Everything the entity template needs for one class
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityContext {
    pub base_package: String,
    pub entity_name: String,
    pub attributes: Vec<AttributeContext>,
    pub one_to_one: Vec<OneToOne>,
    pub one_to_many: Vec<OneToMany>,
    pub many_to_one: Vec<ManyToOne>,
    pub many_to_many: Vec<ManyToMany>,
    pub parent_class: Option<String>,
    pub methods: Vec<MethodContext>,
    pub primary_key: Option<PrimaryKeyContext>,
    /// Pluralized, lowercased collection name (REST resource path)
    pub collection_name: String,
}

impl EntityContext {
    pub fn has_pk(&self) -> bool {
        self.primary_key.is_some()
    }

    pub fn pk_type(&self) -> Option<&str> {
        self.primary_key.as_ref().map(|pk| pk.ty.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryContext {
    pub base_package: String,
    pub entity_name: String,
    pub pk_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceContext {
    pub base_package: String,
    pub entity_name: String,
    pub pk_type: Option<String>,
    pub pk_setter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControllerContext {
    pub base_package: String,
    pub entity_name: String,
    pub collection_name: String,
    pub pk_type: Option<String>,
}

/// Build descriptor (pom.xml)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildContext {
    pub group_id: String,
    pub artifact_id: String,
    pub base_package: String,
    pub java_version: String,
    pub spring_boot_version: String,
}

/// Application entry point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BootstrapContext {
    pub base_package: String,
    pub application_class: String,
}

/// application.properties
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigurationContext {
    pub server_port: u16,
    pub db_url: String,
    pub db_username: String,
    pub db_password: String,
    pub db_driver: String,
    pub db_dialect: String,
    /// `spring.jpa.hibernate.ddl-auto`
    pub ddl_auto: String,
    pub show_sql: bool,
}

/// A context tagged with the artifact kind it renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "template", content = "context", rename_all = "snake_case")]
pub enum RenderContext {
    Entity(EntityContext),
    Repository(RepositoryContext),
    Service(ServiceContext),
    Controller(ControllerContext),
    BuildDescriptor(BuildContext),
    Bootstrap(BootstrapContext),
    Configuration(ConfigurationContext),
}

impl RenderContext {
    pub fn template_id(&self) -> TemplateId {
        match self {
            RenderContext::Entity(_) => TemplateId::Entity,
            RenderContext::Repository(_) => TemplateId::Repository,
            RenderContext::Service(_) => TemplateId::Service,
            RenderContext::Controller(_) => TemplateId::Controller,
            RenderContext::BuildDescriptor(_) => TemplateId::BuildDescriptor,
            RenderContext::Bootstrap(_) => TemplateId::Bootstrap,
            RenderContext::Configuration(_) => TemplateId::Configuration,
        }
    }
}
