use anyhow::Result;
use std::fmt::Write;

use crate::models::{ControllerContext, RepositoryContext, ServiceContext};

use super::FALLBACK_KEY_TYPE;

fn key_type(pk_type: Option<&str>) -> &str {
    pk_type.unwrap_or(FALLBACK_KEY_TYPE)
}

pub(super) fn render_repository(ctx: &RepositoryContext) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "package {}.repository;", ctx.base_package)?;
    writeln!(out)?;
    writeln!(out, "import {}.model.{};", ctx.base_package, ctx.entity_name)?;
    writeln!(out, "import org.springframework.data.jpa.repository.JpaRepository;")?;
    writeln!(out, "import org.springframework.stereotype.Repository;")?;
    writeln!(out)?;
    writeln!(out, "@Repository")?;
    writeln!(
        out,
        "public interface {}Repository extends JpaRepository<{}, {}> {{",
        ctx.entity_name,
        ctx.entity_name,
        key_type(ctx.pk_type.as_deref())
    )?;
    writeln!(out, "}}")?;
    Ok(out)
}

pub(super) fn render_service(ctx: &ServiceContext) -> Result<String> {
    let entity = &ctx.entity_name;
    let key = key_type(ctx.pk_type.as_deref());
    let setter = ctx.pk_setter.as_deref().unwrap_or("setId");

    let mut out = String::new();
    writeln!(out, "package {}.service;", ctx.base_package)?;
    writeln!(out)?;
    writeln!(out, "import {}.model.{};", ctx.base_package, entity)?;
    writeln!(out, "import {}.repository.{}Repository;", ctx.base_package, entity)?;
    writeln!(out, "import org.springframework.stereotype.Service;")?;
    writeln!(out)?;
    writeln!(out, "import java.util.List;")?;
    writeln!(out, "import java.util.Optional;")?;
    writeln!(out)?;
    writeln!(out, "@Service")?;
    writeln!(out, "public class {}Service {{", entity)?;
    writeln!(out)?;
    writeln!(out, "    private final {}Repository repository;", entity)?;
    writeln!(out)?;
    writeln!(out, "    public {}Service({}Repository repository) {{", entity, entity)?;
    writeln!(out, "        this.repository = repository;")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    public List<{}> findAll() {{", entity)?;
    writeln!(out, "        return repository.findAll();")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    public Optional<{}> findById({} id) {{", entity, key)?;
    writeln!(out, "        return repository.findById(id);")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    public {} save({} entity) {{", entity, entity)?;
    writeln!(out, "        return repository.save(entity);")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    public Optional<{}> update({} id, {} entity) {{", entity, key, entity)?;
    writeln!(out, "        if (!repository.existsById(id)) {{")?;
    writeln!(out, "            return Optional.empty();")?;
    writeln!(out, "        }}")?;
    writeln!(out, "        entity.{}(id);", setter)?;
    writeln!(out, "        return Optional.of(repository.save(entity));")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    public boolean deleteById({} id) {{", key)?;
    writeln!(out, "        if (!repository.existsById(id)) {{")?;
    writeln!(out, "            return false;")?;
    writeln!(out, "        }}")?;
    writeln!(out, "        repository.deleteById(id);")?;
    writeln!(out, "        return true;")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    Ok(out)
}

pub(super) fn render_controller(ctx: &ControllerContext) -> Result<String> {
    let entity = &ctx.entity_name;
    let key = key_type(ctx.pk_type.as_deref());

    let mut out = String::new();
    writeln!(out, "package {}.controller;", ctx.base_package)?;
    writeln!(out)?;
    writeln!(out, "import {}.model.{};", ctx.base_package, entity)?;
    writeln!(out, "import {}.service.{}Service;", ctx.base_package, entity)?;
    writeln!(out, "import org.springframework.http.HttpStatus;")?;
    writeln!(out, "import org.springframework.http.ResponseEntity;")?;
    writeln!(out, "import org.springframework.web.bind.annotation.*;")?;
    writeln!(out)?;
    writeln!(out, "import java.util.List;")?;
    writeln!(out)?;
    writeln!(out, "@RestController")?;
    writeln!(out, "@RequestMapping(\"/api/{}\")", ctx.collection_name)?;
    writeln!(out, "public class {}Controller {{", entity)?;
    writeln!(out)?;
    writeln!(out, "    private final {}Service service;", entity)?;
    writeln!(out)?;
    writeln!(out, "    public {}Controller({}Service service) {{", entity, entity)?;
    writeln!(out, "        this.service = service;")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    @GetMapping")?;
    writeln!(out, "    public List<{}> findAll() {{", entity)?;
    writeln!(out, "        return service.findAll();")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    @GetMapping(\"/{{id}}\")")?;
    writeln!(
        out,
        "    public ResponseEntity<{}> findById(@PathVariable {} id) {{",
        entity, key
    )?;
    writeln!(out, "        return service.findById(id)")?;
    writeln!(out, "                .map(ResponseEntity::ok)")?;
    writeln!(out, "                .orElse(ResponseEntity.notFound().build());")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    @PostMapping")?;
    writeln!(
        out,
        "    public ResponseEntity<{}> create(@RequestBody {} entity) {{",
        entity, entity
    )?;
    writeln!(
        out,
        "        return ResponseEntity.status(HttpStatus.CREATED).body(service.save(entity));"
    )?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    @PutMapping(\"/{{id}}\")")?;
    writeln!(
        out,
        "    public ResponseEntity<{}> update(@PathVariable {} id, @RequestBody {} entity) {{",
        entity, key, entity
    )?;
    writeln!(out, "        return service.update(id, entity)")?;
    writeln!(out, "                .map(ResponseEntity::ok)")?;
    writeln!(out, "                .orElse(ResponseEntity.notFound().build());")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    @DeleteMapping(\"/{{id}}\")")?;
    writeln!(
        out,
        "    public ResponseEntity<Void> delete(@PathVariable {} id) {{",
        key
    )?;
    writeln!(out, "        return service.deleteById(id)")?;
    writeln!(out, "                ? ResponseEntity.noContent().build()")?;
    writeln!(out, "                : ResponseEntity.notFound().build();")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    Ok(out)
}
