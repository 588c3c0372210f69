pub mod assembler;
pub mod inheritance;
pub mod layout;
pub mod methods;
pub mod primary_key;
pub mod type_mapper;

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::{ApplicationConfig, Config};
use crate::models::{
    BootstrapContext, BuildContext, ConfigurationContext, RenderContext, UmlSchema,
};
use crate::naming::to_entity_name;
use crate::normalizer::{normalize, SchemaIndex};
use crate::packager::ProjectTree;
use crate::render::Renderer;

use assembler::assemble_class;
use layout::ProjectLayout;

/// Parameters of one generation request
#[derive(Debug, Clone)]
pub struct GenerationParams {
    /// Java base package (`com.example.demo`)
    pub base_package: String,
    /// Maven artifact id, also names the application class
    pub artifact_id: String,
    pub group_id: String,
    pub java_version: String,
    pub spring_boot_version: String,
    /// Settings for the generated application.properties
    pub application: ApplicationConfig,
}

impl GenerationParams {
    pub fn new(base_package: &str, artifact_id: &str) -> Self {
        Self {
            base_package: base_package.to_string(),
            artifact_id: artifact_id.to_string(),
            group_id: crate::config::DEFAULT_GROUP_ID.to_string(),
            java_version: crate::config::DEFAULT_JAVA_VERSION.to_string(),
            spring_boot_version: crate::config::DEFAULT_SPRING_BOOT_VERSION.to_string(),
            application: ApplicationConfig::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            base_package: config.project.base_package.clone(),
            artifact_id: config.project.artifact_id.clone(),
            group_id: config.project.group_id.clone(),
            java_version: config.project.java_version.clone(),
            spring_boot_version: config.project.spring_boot_version.clone(),
            application: config.application.clone(),
        }
    }

    /// Name of the generated `@SpringBootApplication` class
    pub fn application_class(&self) -> String {
        format!("{}Application", to_entity_name(&self.artifact_id))
    }
}

/// Contexts rendered once per project, independent of the classes
pub fn project_contexts(params: &GenerationParams) -> Vec<(PathBuf, RenderContext)> {
    let layout = ProjectLayout::new(&params.base_package);
    let application_class = params.application_class();
    let datasource = &params.application.datasource;

    vec![
        (
            layout.build_descriptor(),
            RenderContext::BuildDescriptor(BuildContext {
                group_id: params.group_id.clone(),
                artifact_id: params.artifact_id.clone(),
                base_package: params.base_package.clone(),
                java_version: params.java_version.clone(),
                spring_boot_version: params.spring_boot_version.clone(),
            }),
        ),
        (
            layout.bootstrap(&application_class),
            RenderContext::Bootstrap(BootstrapContext {
                base_package: params.base_package.clone(),
                application_class,
            }),
        ),
        (
            layout.configuration(),
            RenderContext::Configuration(ConfigurationContext {
                server_port: params.application.server_port,
                db_url: datasource.jdbc_url(),
                db_username: datasource.username.clone(),
                db_password: datasource.password.clone(),
                db_driver: datasource.driver.clone(),
                db_dialect: datasource.dialect.clone(),
                ddl_auto: params.application.ddl_auto.clone(),
                show_sql: params.application.show_sql,
            }),
        ),
    ]
}

/// Generate every file of the project in memory.
///
/// Classes are processed in schema order; each one renders its entity,
/// repository, service and controller. Any render failure aborts the whole
/// request and nothing is returned.
pub fn generate_project(
    schema: &UmlSchema,
    params: &GenerationParams,
    renderer: &dyn Renderer,
) -> Result<ProjectTree> {
    let schema = normalize(schema);
    let index = SchemaIndex::new(&schema);
    let layout = ProjectLayout::new(&params.base_package);
    let mut tree = ProjectTree::new();

    for (path, context) in project_contexts(params) {
        render_into(&mut tree, renderer, path, context)?;
    }

    for class in &schema.classes {
        let contexts = assemble_class(&index, class, &params.base_package);
        let entity_name = contexts.entity.entity_name.clone();

        if !contexts.entity.has_pk() && contexts.entity.parent_class.is_none() {
            eprintln!(
                "Warning: class '{}' has no numeric or textual attribute, no primary key inferred",
                class.name
            );
        }

        render_into(
            &mut tree,
            renderer,
            layout.entity(&entity_name),
            RenderContext::Entity(contexts.entity),
        )?;
        render_into(
            &mut tree,
            renderer,
            layout.repository(&entity_name),
            RenderContext::Repository(contexts.repository),
        )?;
        render_into(
            &mut tree,
            renderer,
            layout.service(&entity_name),
            RenderContext::Service(contexts.service),
        )?;
        render_into(
            &mut tree,
            renderer,
            layout.controller(&entity_name),
            RenderContext::Controller(contexts.controller),
        )?;
    }

    Ok(tree)
}

fn render_into(
    tree: &mut ProjectTree,
    renderer: &dyn Renderer,
    path: PathBuf,
    context: RenderContext,
) -> Result<()> {
    let template = context.template_id();
    let text = renderer.render(&context).with_context(|| {
        format!(
            "Failed to render {} template for {}",
            template.as_str(),
            path.display()
        )
    })?;

    tree.add(path, text)
}
