use anyhow::Result;
use std::collections::BTreeSet;
use std::fmt::Write;

use crate::known_types;
use crate::models::{EntityContext, MethodContext};
use crate::naming::{getter_name, setter_name};

use super::FALLBACK_KEY_TYPE;

/// A field declared on the generated class
struct Field {
    annotations: Vec<String>,
    ty: String,
    name: String,
    initializer: Option<&'static str>,
}

impl Field {
    fn plain(ty: &str, name: &str) -> Self {
        Self {
            annotations: Vec::new(),
            ty: ty.to_string(),
            name: name.to_string(),
            initializer: None,
        }
    }
}

pub(super) fn render_entity(ctx: &EntityContext) -> Result<String> {
    let fields = collect_fields(ctx);

    let mut out = String::new();
    writeln!(out, "package {}.model;", ctx.base_package)?;
    writeln!(out)?;
    for import in imports(ctx, &fields) {
        writeln!(out, "import {};", import)?;
    }
    writeln!(out)?;

    writeln!(out, "@Entity")?;
    match &ctx.parent_class {
        Some(parent) => {
            writeln!(out, "public class {} extends {} {{", ctx.entity_name, parent)?;
        }
        None => {
            writeln!(out, "@Table(name = \"{}\")", ctx.collection_name)?;
            writeln!(out, "public class {} {{", ctx.entity_name)?;
        }
    }

    for field in &fields {
        writeln!(out)?;
        for annotation in &field.annotations {
            writeln!(out, "    {}", annotation)?;
        }
        match field.initializer {
            Some(init) => writeln!(out, "    private {} {} = {};", field.ty, field.name, init)?,
            None => writeln!(out, "    private {} {};", field.ty, field.name)?,
        }
    }

    writeln!(out)?;
    writeln!(out, "    public {}() {{", ctx.entity_name)?;
    writeln!(out, "    }}")?;

    for field in &fields {
        writeln!(out)?;
        writeln!(
            out,
            "    public {} {}() {{",
            field.ty,
            getter_name(&field.name)
        )?;
        writeln!(out, "        return {};", field.name)?;
        writeln!(out, "    }}")?;
        writeln!(out)?;
        writeln!(
            out,
            "    public void {}({} {}) {{",
            setter_name(&field.name),
            field.ty,
            field.name
        )?;
        writeln!(out, "        this.{} = {};", field.name, field.name)?;
        writeln!(out, "    }}")?;
    }

    for method in &ctx.methods {
        writeln!(out)?;
        write_method(&mut out, method)?;
    }

    writeln!(out, "}}")?;
    Ok(out)
}

fn write_method(out: &mut String, method: &MethodContext) -> Result<()> {
    writeln!(
        out,
        "    public {} {}({}) {{",
        method.return_type, method.name, method.parameters
    )?;
    if let Some(value) = &method.default_return {
        writeln!(out, "        return {};", value)?;
    }
    writeln!(out, "    }}")?;
    Ok(())
}

fn collect_fields(ctx: &EntityContext) -> Vec<Field> {
    let mut fields = Vec::new();

    // Without key metadata a root entity still needs an identifier; subclasses share the root's
    let synthetic_key = ctx.primary_key.is_none() && ctx.parent_class.is_none();
    if synthetic_key {
        fields.push(Field {
            annotations: vec![
                "@Id".to_string(),
                "@GeneratedValue(strategy = GenerationType.IDENTITY)".to_string(),
            ],
            ..Field::plain(FALLBACK_KEY_TYPE, "id")
        });
    }

    for attr in &ctx.attributes {
        if synthetic_key && attr.name == "id" {
            continue;
        }

        let mut field = Field::plain(&attr.ty, &attr.name);
        if attr.ty == known_types::JAVA_OBJECT {
            field.annotations.push("@Transient".to_string());
        }
        if attr.is_id {
            field.annotations.push("@Id".to_string());
            if attr.generated == Some(true) {
                field
                    .annotations
                    .push("@GeneratedValue(strategy = GenerationType.IDENTITY)".to_string());
            }
        }
        fields.push(field);
    }

    for rel in &ctx.one_to_one {
        fields.push(Field {
            annotations: vec![
                "@OneToOne".to_string(),
                format!("@JoinColumn(name = \"{}_id\")", rel.target_field),
            ],
            ..Field::plain(&rel.target_entity, &rel.target_field)
        });
    }

    for rel in &ctx.one_to_many {
        fields.push(Field {
            annotations: vec![
                format!(
                    "@OneToMany(mappedBy = \"{}\", cascade = CascadeType.ALL)",
                    rel.mapped_by
                ),
                "@JsonIgnore".to_string(),
            ],
            initializer: Some("new ArrayList<>()"),
            ..Field::plain(&format!("List<{}>", rel.target_entity), &rel.collection_field)
        });
    }

    for rel in &ctx.many_to_one {
        fields.push(Field {
            annotations: vec![
                "@ManyToOne".to_string(),
                format!("@JoinColumn(name = \"{}_id\")", rel.target_field),
            ],
            ..Field::plain(&rel.target_entity, &rel.target_field)
        });
    }

    for rel in &ctx.many_to_many {
        fields.push(Field {
            annotations: vec![
                "@ManyToMany".to_string(),
                format!(
                    "@JoinTable(name = \"{}\", joinColumns = @JoinColumn(name = \"{}_id\"), inverseJoinColumns = @JoinColumn(name = \"{}_id\"))",
                    rel.join_table, rel.this_table, rel.other_table
                ),
                "@JsonIgnore".to_string(),
            ],
            initializer: Some("new ArrayList<>()"),
            ..Field::plain(&format!("List<{}>", rel.target_entity), &rel.collection_field)
        });
    }

    fields
}

fn imports(ctx: &EntityContext, fields: &[Field]) -> BTreeSet<&'static str> {
    let mut imports = BTreeSet::from(["jakarta.persistence.*"]);

    if !ctx.one_to_many.is_empty() || !ctx.many_to_many.is_empty() {
        imports.insert("com.fasterxml.jackson.annotation.JsonIgnore");
        imports.insert("java.util.ArrayList");
        imports.insert("java.util.List");
    }

    let types = fields
        .iter()
        .map(|f| f.ty.as_str())
        .chain(ctx.methods.iter().map(|m| m.return_type.as_str()));
    for ty in types {
        if let Some(import) = known_types::import_for(ty) {
            imports.insert(import);
        }
    }

    imports
}
