//! Generation pipeline - load, validate, generate and package

use anyhow::{Context, Result};

use crate::config::Config;
use crate::generator::{generate_project, GenerationParams};
use crate::normalizer::{normalize, validate, SchemaIndex};
use crate::packager::{DirectoryPackager, ZipPackager};
use crate::parser::load_schema;
use crate::render::{JavaSpringRenderer, Renderer};

/// Runs one generation request end to end
pub struct Pipeline {
    verbose: bool,
}

impl Pipeline {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Generate with the built-in Spring Boot renderer
    pub fn run(&self, config: &Config) -> Result<()> {
        self.run_with(config, &JavaSpringRenderer)
    }

    /// Generate with a custom renderer
    pub fn run_with(&self, config: &Config, renderer: &dyn Renderer) -> Result<()> {
        let schema = load_schema(&config.input.schema_file)?;
        let schema = normalize(&schema);
        validate(&schema).with_context(|| {
            format!(
                "Invalid UML schema: {}",
                config.input.schema_file.display()
            )
        })?;

        if self.verbose {
            println!(
                "Loaded {} classes and {} relationships from {}",
                schema.classes.len(),
                schema.relationships.len(),
                config.input.schema_file.display()
            );
        }

        let index = SchemaIndex::new(&schema);
        for rel in index.dangling_relationships() {
            eprintln!(
                "Warning: {} relationship {} -> {} references an unknown class, skipping",
                rel.kind.as_str(),
                rel.source_id,
                rel.target_id
            );
        }

        let params = GenerationParams::from_config(config);
        let tree = generate_project(&schema, &params, renderer)?;

        if self.verbose {
            for file in tree.files() {
                println!("  {}", file.path.display());
            }
        }

        let destination = if config.output.archive {
            let archive = config.archive_path();
            ZipPackager::new(&config.project.artifact_id, config.output.overwrite)
                .write(&tree, &archive)?;
            archive
        } else {
            DirectoryPackager::new(config.output.overwrite).write(&tree, &config.output.dir)?;
            config.output.dir.clone()
        };

        if self.verbose {
            println!(
                "Generated {} files into {}",
                tree.len(),
                destination.display()
            );
        }

        Ok(())
    }
}
