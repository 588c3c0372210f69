use anyhow::Result;
use std::fmt::Write;

use crate::models::{BootstrapContext, BuildContext, ConfigurationContext};

pub(super) fn render_build_descriptor(ctx: &BuildContext) -> Result<String> {
    let mut out = String::new();
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#
    )?;
    writeln!(
        out,
        r#"         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd">"#
    )?;
    writeln!(out, "    <modelVersion>4.0.0</modelVersion>")?;
    writeln!(out)?;
    writeln!(out, "    <parent>")?;
    writeln!(out, "        <groupId>org.springframework.boot</groupId>")?;
    writeln!(out, "        <artifactId>spring-boot-starter-parent</artifactId>")?;
    writeln!(out, "        <version>{}</version>", ctx.spring_boot_version)?;
    writeln!(out, "        <relativePath/>")?;
    writeln!(out, "    </parent>")?;
    writeln!(out)?;
    writeln!(out, "    <groupId>{}</groupId>", ctx.group_id)?;
    writeln!(out, "    <artifactId>{}</artifactId>", ctx.artifact_id)?;
    writeln!(out, "    <version>0.0.1-SNAPSHOT</version>")?;
    writeln!(out, "    <name>{}</name>", ctx.artifact_id)?;
    writeln!(out)?;
    writeln!(out, "    <properties>")?;
    writeln!(out, "        <java.version>{}</java.version>", ctx.java_version)?;
    writeln!(out, "    </properties>")?;
    writeln!(out)?;
    writeln!(out, "    <dependencies>")?;
    for (artifact, scope) in [
        ("spring-boot-starter-web", None),
        ("spring-boot-starter-data-jpa", None),
        ("spring-boot-starter-test", Some("test")),
    ] {
        write_dependency(&mut out, "org.springframework.boot", artifact, scope)?;
    }
    write_dependency(&mut out, "org.postgresql", "postgresql", Some("runtime"))?;
    writeln!(out, "    </dependencies>")?;
    writeln!(out)?;
    writeln!(out, "    <build>")?;
    writeln!(out, "        <plugins>")?;
    writeln!(out, "            <plugin>")?;
    writeln!(out, "                <groupId>org.springframework.boot</groupId>")?;
    writeln!(out, "                <artifactId>spring-boot-maven-plugin</artifactId>")?;
    writeln!(out, "            </plugin>")?;
    writeln!(out, "        </plugins>")?;
    writeln!(out, "    </build>")?;
    writeln!(out, "</project>")?;
    Ok(out)
}

fn write_dependency(
    out: &mut String,
    group: &str,
    artifact: &str,
    scope: Option<&str>,
) -> Result<()> {
    writeln!(out, "        <dependency>")?;
    writeln!(out, "            <groupId>{}</groupId>", group)?;
    writeln!(out, "            <artifactId>{}</artifactId>", artifact)?;
    if let Some(scope) = scope {
        writeln!(out, "            <scope>{}</scope>", scope)?;
    }
    writeln!(out, "        </dependency>")?;
    Ok(())
}

pub(super) fn render_bootstrap(ctx: &BootstrapContext) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "package {};", ctx.base_package)?;
    writeln!(out)?;
    writeln!(out, "import org.springframework.boot.SpringApplication;")?;
    writeln!(out, "import org.springframework.boot.autoconfigure.SpringBootApplication;")?;
    writeln!(out)?;
    writeln!(out, "@SpringBootApplication")?;
    writeln!(out, "public class {} {{", ctx.application_class)?;
    writeln!(out)?;
    writeln!(out, "    public static void main(String[] args) {{")?;
    writeln!(
        out,
        "        SpringApplication.run({}.class, args);",
        ctx.application_class
    )?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    Ok(out)
}

pub(super) fn render_configuration(ctx: &ConfigurationContext) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "server.port={}", ctx.server_port)?;
    writeln!(out)?;
    writeln!(out, "spring.datasource.url={}", ctx.db_url)?;
    writeln!(out, "spring.datasource.username={}", ctx.db_username)?;
    writeln!(out, "spring.datasource.password={}", ctx.db_password)?;
    writeln!(out, "spring.datasource.driver-class-name={}", ctx.db_driver)?;
    writeln!(out)?;
    writeln!(out, "spring.jpa.hibernate.ddl-auto={}", ctx.ddl_auto)?;
    writeln!(out, "spring.jpa.show-sql={}", ctx.show_sql)?;
    writeln!(
        out,
        "spring.jpa.properties.hibernate.dialect={}",
        ctx.db_dialect
    )?;
    Ok(out)
}
