//! Rendering boundary - turns a typed context into source text

mod entity;
mod layers;
mod project;

use anyhow::Result;

use crate::models::RenderContext;

/// Turns one context into the text of one file
pub trait Renderer {
    fn render(&self, context: &RenderContext) -> Result<String>;
}

/// Key type used when an entity has no key metadata
pub const FALLBACK_KEY_TYPE: &str = "Long";

/// Built-in renderer producing a Spring Boot / JPA project
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaSpringRenderer;

impl Renderer for JavaSpringRenderer {
    fn render(&self, context: &RenderContext) -> Result<String> {
        match context {
            RenderContext::Entity(ctx) => entity::render_entity(ctx),
            RenderContext::Repository(ctx) => layers::render_repository(ctx),
            RenderContext::Service(ctx) => layers::render_service(ctx),
            RenderContext::Controller(ctx) => layers::render_controller(ctx),
            RenderContext::BuildDescriptor(ctx) => project::render_build_descriptor(ctx),
            RenderContext::Bootstrap(ctx) => project::render_bootstrap(ctx),
            RenderContext::Configuration(ctx) => project::render_configuration(ctx),
        }
    }
}
