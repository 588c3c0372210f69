mod schema_parser;

pub use schema_parser::{load_schema, parse_schema};
