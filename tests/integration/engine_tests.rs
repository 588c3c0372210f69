//! Integration tests for the generation engine, without touching the filesystem

use std::path::PathBuf;
use uml_codegen::generator::assembler::assemble_class;
use uml_codegen::generator::{generate_project, GenerationParams};
use uml_codegen::models::{Relationship, RelationshipKind, UmlClass, UmlSchema};
use uml_codegen::normalizer::{normalize, SchemaIndex};
use uml_codegen::parser::{load_schema, parse_schema};
use uml_codegen::render::JavaSpringRenderer;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_fixture(name: &str) -> UmlSchema {
    normalize(&load_schema(&fixture_path(name)).unwrap())
}

#[test]
fn test_library_author_side() {
    let schema = load_fixture("library.json");
    let index = SchemaIndex::new(&schema);

    let author = assemble_class(&index, &schema.classes[0], "com.example.library");
    let entity = &author.entity;

    assert_eq!(entity.entity_name, "Author");
    assert_eq!(entity.collection_name, "authors");

    let pk = entity.primary_key.as_ref().unwrap();
    assert_eq!(pk.name, "id");
    assert_eq!(pk.ty, "Long");
    assert!(pk.generated);
    assert_eq!(pk.setter, "setId");

    let names: Vec<_> = entity.attributes.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["id", "fullName", "born"]);
    assert_eq!(entity.attributes[2].ty, "LocalDate");

    assert_eq!(entity.one_to_many.len(), 1);
    assert_eq!(entity.one_to_many[0].target_entity, "Book");
    assert_eq!(entity.one_to_many[0].collection_field, "books");
    assert_eq!(entity.one_to_many[0].mapped_by, "author");

    assert_eq!(entity.methods[0].name, "countBooks");
    assert_eq!(entity.methods[0].default_return.as_deref(), Some("0"));
    assert_eq!(entity.methods[1].return_type, "void");
    assert_eq!(entity.methods[1].default_return, None);
    assert_eq!(entity.methods[1].parameters, "LocalDate when");

    assert_eq!(author.repository.pk_type.as_deref(), Some("Long"));
    assert_eq!(author.controller.collection_name, "authors");
}

#[test]
fn test_library_book_side() {
    let schema = load_fixture("library.json");
    let index = SchemaIndex::new(&schema);

    let book = assemble_class(&index, &schema.classes[1], "com.example.library");
    let entity = &book.entity;

    let pk = entity.primary_key.as_ref().unwrap();
    assert_eq!(pk.name, "title");
    assert_eq!(pk.ty, "String");
    assert!(!pk.generated);
    assert_eq!(book.service.pk_setter.as_deref(), Some("setTitle"));

    assert_eq!(entity.attributes[1].ty, "BigDecimal");

    // Inverse side of Author 1 -> * Book; the dangling r4 is ignored
    assert_eq!(entity.many_to_one.len(), 1);
    assert_eq!(entity.many_to_one[0].target_entity, "Author");
    assert_eq!(entity.many_to_one[0].target_field, "author");

    // Aggregation Book * -> * Tag, the dependency edge is ignored
    assert_eq!(entity.many_to_many.len(), 1);
    let m2m = &entity.many_to_many[0];
    assert_eq!(m2m.target_entity, "Tag");
    assert_eq!(m2m.collection_field, "tags");
    assert_eq!(m2m.join_table, "book_tag");
    assert!(entity.one_to_one.is_empty());
}

#[test]
fn test_library_tag_side() {
    let schema = load_fixture("library.json");
    let index = SchemaIndex::new(&schema);

    let tag = assemble_class(&index, &schema.classes[2], "com.example.library");

    // Target of a many-to-many only gets the many-to-one back-reference
    assert!(tag.entity.many_to_many.is_empty());
    assert_eq!(tag.entity.many_to_one.len(), 1);
    assert_eq!(tag.entity.many_to_one[0].target_entity, "Book");
}

#[test]
fn test_vehicle_inheritance() {
    let schema = load_fixture("vehicles.json");
    let index = SchemaIndex::new(&schema);

    let car = assemble_class(&index, &schema.classes[1], "com.example.fleet");
    let entity = &car.entity;

    assert_eq!(entity.parent_class.as_deref(), Some("Vehicle"));
    let names: Vec<_> = entity.attributes.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["doors"]);

    let pk = entity.primary_key.as_ref().unwrap();
    assert_eq!(pk.name, "id");
    assert!(pk.inherited);
    assert_eq!(car.repository.pk_type.as_deref(), Some("Long"));

    let vehicle = assemble_class(&index, &schema.classes[0], "com.example.fleet");
    assert_eq!(vehicle.entity.parent_class, None);
    assert_eq!(vehicle.entity.attributes.len(), 2);
}

#[test]
fn test_class_without_id_or_key() {
    let schema = load_fixture("vehicles.json");
    assert_eq!(schema.classes[2].id, "Sensor");

    let index = SchemaIndex::new(&schema);
    let sensor = assemble_class(&index, &schema.classes[2], "com.example.fleet");

    assert_eq!(sensor.entity.entity_name, "Sensor");
    assert!(!sensor.entity.has_pk());
    assert_eq!(sensor.repository.pk_type, None);
}

#[test]
fn test_normalize_is_idempotent() {
    let raw = load_schema(&fixture_path("library.json")).unwrap();
    let once = normalize(&raw);
    let twice = normalize(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_generate_library_project() {
    let schema = load_fixture("library.json");
    let params = GenerationParams::new("com.example.library", "library");

    let tree = generate_project(&schema, &params, &JavaSpringRenderer).unwrap();
    assert_eq!(tree.len(), 3 + 3 * 4);

    let base = "src/main/java/com/example/library";
    let author = tree.get(format!("{}/model/Author.java", base)).unwrap();
    assert!(author.contains("@Table(name = \"authors\")"));
    assert!(author.contains("@GeneratedValue(strategy = GenerationType.IDENTITY)"));
    assert!(author.contains("@OneToMany(mappedBy = \"author\", cascade = CascadeType.ALL)"));
    assert!(author.contains("private List<Book> books = new ArrayList<>();"));
    assert!(author.contains("import java.time.LocalDate;"));
    assert!(author.contains("public int countBooks() {"));
    assert!(author.contains("        return 0;"));

    let book = tree.get(format!("{}/model/Book.java", base)).unwrap();
    assert!(book.contains("@JoinColumn(name = \"author_id\")"));
    assert!(book.contains("@JoinTable(name = \"book_tag\""));
    assert!(book.contains("import java.math.BigDecimal;"));

    let repo = tree
        .get(format!("{}/repository/BookRepository.java", base))
        .unwrap();
    assert!(repo.contains("extends JpaRepository<Book, String>"));

    let controller = tree
        .get(format!("{}/controller/TagController.java", base))
        .unwrap();
    assert!(controller.contains("@RequestMapping(\"/api/tags\")"));

    assert!(tree.get("pom.xml").is_some());
    assert!(tree
        .get(format!("{}/LibraryApplication.java", base))
        .is_some());
    assert!(tree
        .get("src/main/resources/application.properties")
        .is_some());
}

#[test]
fn test_entity_without_key_gets_synthetic_id() {
    let schema = load_fixture("vehicles.json");
    let params = GenerationParams::new("com.example.fleet", "fleet");

    let tree = generate_project(&schema, &params, &JavaSpringRenderer).unwrap();

    let sensor = tree
        .get("src/main/java/com/example/fleet/model/Sensor.java")
        .unwrap();
    assert!(sensor.contains("private Long id;"));
    assert!(sensor.contains("private boolean active;"));

    let car = tree
        .get("src/main/java/com/example/fleet/model/Car.java")
        .unwrap();
    assert!(car.contains("public class Car extends Vehicle {"));
    assert!(!car.contains("@Table"));
    assert!(!car.contains("private Long id;"));
}

#[test]
fn test_unresolved_relationship_is_skipped() {
    let schema = UmlSchema::new(
        vec![UmlClass::new("b", "Book").with_attribute("title", "string")],
        vec![Relationship::new(
            RelationshipKind::Association,
            "missing",
            "b",
            &["1", "*"],
        )],
    );
    let index = SchemaIndex::new(&schema);

    assert_eq!(index.dangling_relationships().count(), 1);
    let book = assemble_class(&index, &schema.classes[0], "com.example");
    assert!(book.entity.many_to_one.is_empty());
}

#[test]
fn test_parse_rejects_malformed_json() {
    let result = parse_schema("{\"classes\": [", &fixture_path("broken.json"));
    assert!(result.is_err());
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_generate_hierarchy_has_single_key() {
    let schema = parse_schema(
        r#"{
            "classes": [
                { "id": "v", "name": "Vehicle", "attributes": [{ "name": "id", "type": "long" }] },
                { "id": "t", "name": "Truck", "attributes": [{ "name": "plate", "type": "string" }] },
                { "id": "s", "name": "Shape", "attributes": [{ "name": "filled", "type": "boolean" }] },
                { "id": "c", "name": "Circle", "attributes": [{ "name": "radius", "type": "double" }] }
            ],
            "relationships": [
                { "type": "generalization", "sourceId": "t", "targetId": "v" },
                { "type": "generalization", "sourceId": "c", "targetId": "s" }
            ]
        }"#,
        &fixture_path("hierarchy.json"),
    )
    .unwrap();
    let params = GenerationParams::new("com.example.fleet", "fleet");

    let tree = generate_project(&schema, &params, &JavaSpringRenderer).unwrap();
    let model = |name: &str| {
        tree.get(format!("src/main/java/com/example/fleet/model/{}.java", name))
            .unwrap()
            .to_string()
    };

    let truck = model("Truck");
    assert!(truck.contains("public class Truck extends Vehicle {"));
    assert_eq!(count(&truck, "@Id"), 0);
    assert!(truck.contains("private String plate;"));
    assert_eq!(count(&model("Vehicle"), "@Id"), 1);

    let circle = model("Circle");
    assert_eq!(count(&circle, "@Id"), 0);
    assert_eq!(count(&model("Shape"), "@Id"), 1);

    let repo = tree
        .get("src/main/java/com/example/fleet/repository/TruckRepository.java")
        .unwrap();
    assert!(repo.contains("extends JpaRepository<Truck, Long>"));
}

#[test]
fn test_generate_blank_and_unknown_attribute_types() {
    let schema = parse_schema(
        r#"{
            "classes": [
                {
                    "id": "i",
                    "name": "Invoice",
                    "attributes": [
                        { "name": "number", "type": "string" },
                        { "name": "note", "type": "" },
                        { "name": "total", "type": "Money" },
                        { "name": "lines", "type": "int[]" }
                    ]
                }
            ]
        }"#,
        &fixture_path("invoice.json"),
    )
    .unwrap();
    let params = GenerationParams::new("com.example.billing", "billing");

    let tree = generate_project(&schema, &params, &JavaSpringRenderer).unwrap();
    let invoice = tree
        .get("src/main/java/com/example/billing/model/Invoice.java")
        .unwrap();

    assert!(!invoice.contains("private void"));
    assert!(invoice.contains("private String note;"));
    assert!(invoice.contains("@Transient\n    private Object total;"));
    assert!(invoice.contains("@Transient\n    private Object lines;"));
    assert!(!invoice.contains("Money"));
    assert!(!invoice.contains("private Int "));
}

#[test]
fn test_generate_non_ascii_names() {
    let schema = parse_schema(
        r#"{
            "classes": [
                { "id": "a", "name": "Categoría", "attributes": [{ "name": "año", "type": "int" }] },
                { "id": "b", "name": "Λόγος" },
                { "id": "c", "name": "Σχήμα" }
            ]
        }"#,
        &fixture_path("unicode.json"),
    )
    .unwrap();
    let params = GenerationParams::new("com.example", "catalogo");

    let tree = generate_project(&schema, &params, &JavaSpringRenderer).unwrap();
    assert_eq!(tree.len(), 3 + 3 * 4);

    let categoria = tree
        .get("src/main/java/com/example/model/Categoría.java")
        .unwrap();
    assert!(categoria.contains("public class Categoría {"));
    assert!(categoria.contains("private Long año;"));
    assert!(categoria.contains("public void setAño(Long año)"));
}
