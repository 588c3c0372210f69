use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_GROUP_ID: &str = "com.example";
pub const DEFAULT_JAVA_VERSION: &str = "17";
pub const DEFAULT_SPRING_BOOT_VERSION: &str = "3.3.4";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub project: ProjectConfig,
    #[serde(default)]
    pub application: ApplicationConfig,
}

/// Input configuration - where to find the UML model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// JSON file holding the class diagram
    pub schema_file: PathBuf,
}

/// Output configuration - where to write the generated project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root directory of the generated project
    pub dir: PathBuf,
    /// Replace the directory (or archive) if it already exists
    #[serde(default)]
    pub overwrite: bool,
    /// Write `<dir>/<artifact_id>.zip` instead of a project directory
    #[serde(default)]
    pub archive: bool,
}

/// Project identity - package and Maven coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Java base package (e.g. "com.example.library")
    pub base_package: String,
    /// Maven artifact id
    pub artifact_id: String,
    #[serde(default = "default_group_id")]
    pub group_id: String,
    #[serde(default = "default_java_version")]
    pub java_version: String,
    #[serde(default = "default_spring_boot_version")]
    pub spring_boot_version: String,
}

/// Settings written into the generated application.properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    pub server_port: u16,
    /// Hibernate schema strategy (`update`, `validate`, `create-drop`, ...)
    pub ddl_auto: String,
    pub show_sql: bool,
    pub datasource: DataSourceConfig,
}

/// Database connection of the generated application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSourceConfig {
    /// JDBC sub-protocol (`postgresql`, `mysql`, ...)
    pub vendor: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub username: String,
    pub password: String,
    pub driver: String,
    pub dialect: String,
}

fn default_group_id() -> String {
    DEFAULT_GROUP_ID.to_string()
}

fn default_java_version() -> String {
    DEFAULT_JAVA_VERSION.to_string()
}

fn default_spring_boot_version() -> String {
    DEFAULT_SPRING_BOOT_VERSION.to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            server_port: 9000,
            ddl_auto: "update".to_string(),
            show_sql: true,
            datasource: DataSourceConfig::default(),
        }
    }
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            vendor: "postgresql".to_string(),
            host: "localhost".to_string(),
            port: 5432,
            name: "app_db".to_string(),
            username: "postgres".to_string(),
            password: "postgres".to_string(),
            driver: "org.postgresql.Driver".to_string(),
            dialect: "org.hibernate.dialect.PostgreSQLDialect".to_string(),
        }
    }
}

impl DataSourceConfig {
    pub fn jdbc_url(&self) -> String {
        format!(
            "jdbc:{}://{}:{}/{}",
            self.vendor, self.host, self.port, self.name
        )
    }
}

/// Check that a string is a dotted sequence of Java identifiers
pub fn is_valid_package(package: &str) -> bool {
    !package.is_empty()
        && package.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}

impl Config {
    /// Path of the archive written when `output.archive` is set
    pub fn archive_path(&self) -> PathBuf {
        self.output
            .dir
            .join(format!("{}.zip", self.project.artifact_id))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if !self.input.schema_file.is_file() {
            anyhow::bail!(
                "Schema file does not exist: {}",
                self.input.schema_file.display()
            );
        }

        if !is_valid_package(&self.project.base_package) {
            anyhow::bail!(
                "Invalid base package: '{}'",
                self.project.base_package
            );
        }

        if self.project.artifact_id.trim().is_empty() {
            anyhow::bail!("Artifact id must not be empty");
        }

        Ok(())
    }

    /// Generate a default configuration
    pub fn default_config() -> Self {
        Config {
            input: InputConfig {
                schema_file: PathBuf::from("uml.json"),
            },
            output: OutputConfig {
                dir: PathBuf::from("generated"),
                overwrite: false,
                archive: false,
            },
            project: ProjectConfig {
                base_package: "com.example.demo".to_string(),
                artifact_id: "demo".to_string(),
                group_id: default_group_id(),
                java_version: default_java_version(),
                spring_boot_version: default_spring_boot_version(),
            },
            application: ApplicationConfig::default(),
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
