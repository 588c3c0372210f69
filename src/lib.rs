//! # uml-codegen
//!
//! A CLI tool and library for generating Spring Boot backends from UML class diagrams.
//!
//! This crate reads a class diagram (classes, attributes, methods and relationships with
//! multiplicity labels) and generates a complete Maven project skeleton:
//! - **JPA entities** with keys, inheritance and relationship mappings.
//! - **Repositories, services and REST controllers** for every entity.
//! - **Project files**: `pom.xml`, the application entry point and `application.properties`.
//!
//! ## Features
//!
//! - **Relationship resolution**: association, aggregation and composition become
//!   one-to-one, one-to-many, many-to-one or many-to-many mappings from their multiplicities.
//! - **Key inference**: the first numeric attribute becomes a generated `Long` key,
//!   the first textual one a natural `String` key.
//! - **Inheritance flattening**: attributes declared by the parent class are not repeated.
//! - **Pluggable rendering**: contexts are typed records handed to a [`render::Renderer`].
//!
//! ## Usage
//!
//! Although primarily used as a CLI tool, you can also use it as a library:
//!
//! ```rust,no_run
//! use uml_codegen::config::Config;
//! use uml_codegen::pipeline::Pipeline;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default_config();
//!     let pipeline = Pipeline::new(false);
//!     pipeline.run(&config)?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod known_types;
pub mod models;
pub mod naming;
pub mod normalizer;
pub mod packager;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod resolver;
