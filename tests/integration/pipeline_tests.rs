//! Integration tests for the full pipeline

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use uml_codegen::config::{
    ApplicationConfig, Config, InputConfig, OutputConfig, ProjectConfig,
};
use uml_codegen::pipeline::Pipeline;

/// Create a test config writing into `output_dir`
fn create_test_config(schema_file: PathBuf, output_dir: PathBuf) -> Config {
    Config {
        input: InputConfig { schema_file },
        output: OutputConfig {
            dir: output_dir,
            overwrite: false,
            archive: false,
        },
        project: ProjectConfig {
            base_package: "com.example.shop".to_string(),
            artifact_id: "shop".to_string(),
            group_id: "com.example".to_string(),
            java_version: "17".to_string(),
            spring_boot_version: "3.3.4".to_string(),
        },
        application: ApplicationConfig::default(),
    }
}

fn write_schema(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("uml.json");
    fs::write(&path, json).unwrap();
    path
}

const SHOP_SCHEMA: &str = r#"
{
  "classes": [
    {
      "id": "cust",
      "name": "customer",
      "attributes": [
        { "name": "id", "type": "long" },
        { "name": "email", "type": "string" }
      ]
    },
    {
      "id": "ord",
      "name": "order item",
      "attributes": [
        { "name": "sku", "type": "string" },
        { "name": "quantity", "type": "int" },
        { "name": "placed at", "type": "datetime" }
      ],
      "methods": [
        { "name": "total", "returnType": "double" },
        { "name": "is gift", "returnType": "boolean", "parameters": "" }
      ]
    }
  ],
  "relationships": [
    { "type": "composition", "sourceId": "cust", "targetId": "ord", "labels": ["1", "0..*"] }
  ]
}
"#;

#[test]
fn test_full_pipeline_writes_project() {
    let temp = tempdir().unwrap();
    let schema = write_schema(temp.path(), SHOP_SCHEMA);
    let output_dir = temp.path().join("shop");

    let config = create_test_config(schema, output_dir.clone());
    let pipeline = Pipeline::new(false);

    let result = pipeline.run(&config);
    assert!(result.is_ok(), "Pipeline should succeed: {:?}", result.err());

    let java = output_dir.join("src/main/java/com/example/shop");
    assert!(output_dir.join("pom.xml").exists());
    assert!(java.join("ShopApplication.java").exists());
    assert!(output_dir
        .join("src/main/resources/application.properties")
        .exists());

    for layer in [
        "model/Customer.java",
        "model/OrderItem.java",
        "repository/CustomerRepository.java",
        "repository/OrderItemRepository.java",
        "service/CustomerService.java",
        "service/OrderItemService.java",
        "controller/CustomerController.java",
        "controller/OrderItemController.java",
    ] {
        assert!(java.join(layer).exists(), "missing {}", layer);
    }

    let order = fs::read_to_string(java.join("model/OrderItem.java")).unwrap();
    // sku is the first eligible attribute, so it becomes a natural key
    assert!(order.contains("@Id\n    private String sku;"));
    assert!(order.contains("private int quantity;"));
    assert!(order.contains("private LocalDateTime placedAt;"));
    assert!(order.contains("@JoinColumn(name = \"customer_id\")"));
    assert!(order.contains("public double total() {\n        return 0.0;\n    }"));
    assert!(order.contains("public boolean isGift() {\n        return false;\n    }"));

    let customer = fs::read_to_string(java.join("model/Customer.java")).unwrap();
    assert!(customer.contains("private List<OrderItem> orderItems = new ArrayList<>();"));

    let controller =
        fs::read_to_string(java.join("controller/OrderItemController.java")).unwrap();
    assert!(controller.contains("@RequestMapping(\"/api/orderitems\")"));

    let props = fs::read_to_string(output_dir.join("src/main/resources/application.properties"))
        .unwrap();
    assert!(props.contains("server.port=9000"));
    assert!(props.contains("jdbc:postgresql://localhost:5432/app_db"));

    let pom = fs::read_to_string(output_dir.join("pom.xml")).unwrap();
    assert!(pom.contains("<artifactId>shop</artifactId>"));
}

#[test]
fn test_pipeline_refuses_existing_output() {
    let temp = tempdir().unwrap();
    let schema = write_schema(temp.path(), SHOP_SCHEMA);
    let output_dir = temp.path().join("shop");
    fs::create_dir_all(&output_dir).unwrap();
    fs::write(output_dir.join("notes.txt"), "mine").unwrap();

    let config = create_test_config(schema, output_dir.clone());
    let result = Pipeline::new(false).run(&config);

    assert!(result.is_err());
    assert_eq!(
        fs::read_to_string(output_dir.join("notes.txt")).unwrap(),
        "mine"
    );
    assert!(!output_dir.join("pom.xml").exists());
}

#[test]
fn test_pipeline_overwrite_replaces_output() {
    let temp = tempdir().unwrap();
    let schema = write_schema(temp.path(), SHOP_SCHEMA);
    let output_dir = temp.path().join("shop");
    fs::create_dir_all(&output_dir).unwrap();
    fs::write(output_dir.join("stale.txt"), "old").unwrap();

    let mut config = create_test_config(schema, output_dir.clone());
    config.output.overwrite = true;

    Pipeline::new(true).run(&config).unwrap();

    assert!(!output_dir.join("stale.txt").exists());
    assert!(output_dir.join("pom.xml").exists());
}

#[test]
fn test_pipeline_duplicate_ids_write_nothing() {
    let temp = tempdir().unwrap();
    let schema = write_schema(
        temp.path(),
        r#"{
            "classes": [
                { "id": "x", "name": "Book" },
                { "id": " x ", "name": "Magazine" }
            ]
        }"#,
    );
    let output_dir = temp.path().join("out");

    let config = create_test_config(schema, output_dir.clone());
    let err = Pipeline::new(false).run(&config).unwrap_err();

    assert!(format!("{:#}", err).contains("Duplicate class id 'x'"));
    assert!(!output_dir.exists());
}

#[test]
fn test_pipeline_malformed_schema() {
    let temp = tempdir().unwrap();
    let schema = write_schema(temp.path(), "{ \"classes\": [ { \"name\": ");
    let output_dir = temp.path().join("out");

    let config = create_test_config(schema, output_dir.clone());
    let err = Pipeline::new(false).run(&config).unwrap_err();

    assert!(err.to_string().contains("Failed to parse UML schema"));
    assert!(!output_dir.exists());
}

#[test]
fn test_pipeline_empty_schema() {
    let temp = tempdir().unwrap();
    let schema = write_schema(temp.path(), "{}");
    let output_dir = temp.path().join("empty");

    let config = create_test_config(schema, output_dir.clone());
    Pipeline::new(false).run(&config).unwrap();

    assert!(output_dir.join("pom.xml").exists());
    assert!(!output_dir.join("src/main/java/com/example/shop/model").exists());
}

#[test]
fn test_pipeline_from_saved_config() {
    let temp = tempdir().unwrap();
    let schema = write_schema(temp.path(), SHOP_SCHEMA);
    let output_dir = temp.path().join("from-config");

    let config = create_test_config(schema, output_dir.clone());
    let config_path = temp.path().join("uml-codegen.toml");
    config.save(&config_path).unwrap();

    let loaded = Config::load(&config_path).unwrap();
    Pipeline::new(false).run(&loaded).unwrap();

    assert!(output_dir
        .join("src/main/java/com/example/shop/model/Customer.java")
        .exists());
}

#[test]
fn test_pipeline_writes_archive() {
    let temp = tempdir().unwrap();
    let schema = write_schema(temp.path(), SHOP_SCHEMA);
    let output_dir = temp.path().join("dist");

    let mut config = create_test_config(schema, output_dir.clone());
    config.output.archive = true;

    Pipeline::new(false).run(&config).unwrap();

    let archive_path = output_dir.join("shop.zip");
    assert!(archive_path.exists());
    assert!(!output_dir.join("pom.xml").exists());

    let mut archive = zip::ZipArchive::new(fs::File::open(&archive_path).unwrap()).unwrap();
    let mut entity = String::new();
    archive
        .by_name("shop/src/main/java/com/example/shop/model/Customer.java")
        .unwrap()
        .read_to_string(&mut entity)
        .unwrap();
    assert!(entity.contains("public class Customer {"));
    assert!(archive.by_name("shop/pom.xml").is_ok());

    // A second run without overwrite refuses to replace the archive
    assert!(Pipeline::new(false).run(&config).is_err());
}
