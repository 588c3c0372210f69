use std::path::PathBuf;

/// Relative paths of the generated Maven project
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    java_root: PathBuf,
}

impl ProjectLayout {
    pub fn new(base_package: &str) -> Self {
        let mut java_root = PathBuf::from("src/main/java");
        for segment in base_package.split('.').filter(|s| !s.is_empty()) {
            java_root.push(segment);
        }
        Self { java_root }
    }

    pub fn build_descriptor(&self) -> PathBuf {
        PathBuf::from("pom.xml")
    }

    pub fn bootstrap(&self, application_class: &str) -> PathBuf {
        self.java_root.join(format!("{}.java", application_class))
    }

    pub fn configuration(&self) -> PathBuf {
        PathBuf::from("src/main/resources/application.properties")
    }

    pub fn entity(&self, entity_name: &str) -> PathBuf {
        self.java_root.join("model").join(format!("{}.java", entity_name))
    }

    pub fn repository(&self, entity_name: &str) -> PathBuf {
        self.java_root
            .join("repository")
            .join(format!("{}Repository.java", entity_name))
    }

    pub fn service(&self, entity_name: &str) -> PathBuf {
        self.java_root
            .join("service")
            .join(format!("{}Service.java", entity_name))
    }

    pub fn controller(&self, entity_name: &str) -> PathBuf {
        self.java_root
            .join("controller")
            .join(format!("{}Controller.java", entity_name))
    }
}
