mod context;
mod schema;

pub use context::{
    AttributeContext, BootstrapContext, BuildContext, ConfigurationContext, ControllerContext,
    EntityContext, ManyToMany, ManyToOne, MethodContext, OneToMany, OneToOne, PrimaryKeyContext,
    RenderContext, RepositoryContext, ServiceContext, TemplateId,
};
pub use schema::{Attribute, Method, Relationship, RelationshipKind, UmlClass, UmlSchema};
