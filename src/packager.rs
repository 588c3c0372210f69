//! Packager - materializes a generated project tree on disk

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// One generated file
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    /// Path relative to the project root
    pub path: PathBuf,
    pub content: String,
}

/// Generated files in generation order
#[derive(Debug, Default)]
pub struct ProjectTree {
    files: Vec<GeneratedFile>,
    paths: HashSet<PathBuf>,
}

impl ProjectTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file; paths must be relative, stay inside the root and be unique
    pub fn add(&mut self, path: PathBuf, content: String) -> Result<()> {
        let inside_root = path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !inside_root || path.as_os_str().is_empty() {
            anyhow::bail!("Invalid generated file path: {}", path.display());
        }

        if !self.paths.insert(path.clone()) {
            anyhow::bail!("Duplicate generated file: {}", path.display());
        }

        self.files.push(GeneratedFile { path, content });
        Ok(())
    }

    pub fn files(&self) -> &[GeneratedFile] {
        &self.files
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.files
            .iter()
            .find(|f| f.path.as_path() == path)
            .map(|f| f.content.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Writes a project tree into a directory, all or nothing
#[derive(Debug, Clone)]
pub struct DirectoryPackager {
    /// Replace an existing output directory
    overwrite: bool,
}

impl DirectoryPackager {
    pub fn new(overwrite: bool) -> Self {
        Self { overwrite }
    }

    /// Write every file of the tree under `out_dir`.
    ///
    /// Files go to a staging directory next to `out_dir` that is renamed into
    /// place once complete; on failure the staging directory is removed and
    /// `out_dir` is left as it was.
    pub fn write(&self, tree: &ProjectTree, out_dir: &Path) -> Result<()> {
        if out_dir.exists() && !self.overwrite {
            anyhow::bail!(
                "Output directory already exists: {}. Set output.overwrite to replace it.",
                out_dir.display()
            );
        }

        let staging = staging_path(out_dir)?;
        if staging.exists() {
            fs::remove_dir_all(&staging).with_context(|| {
                format!("Failed to remove stale staging directory: {}", staging.display())
            })?;
        }

        if let Err(err) = write_files(tree, &staging) {
            discard(&staging);
            return Err(err);
        }

        if out_dir.exists() {
            fs::remove_dir_all(out_dir).with_context(|| {
                format!("Failed to remove output directory: {}", out_dir.display())
            })?;
        }

        fs::rename(&staging, out_dir).with_context(|| {
            format!(
                "Failed to move {} into {}",
                staging.display(),
                out_dir.display()
            )
        })?;

        Ok(())
    }
}

/// Writes a project tree as a single zip archive, all or nothing
#[derive(Debug, Clone)]
pub struct ZipPackager {
    /// Replace an existing archive
    overwrite: bool,
    /// Top-level folder every entry is placed under
    root_folder: String,
}

impl ZipPackager {
    pub fn new(root_folder: &str, overwrite: bool) -> Self {
        Self {
            overwrite,
            root_folder: root_folder.to_string(),
        }
    }

    /// Write every file of the tree into the archive at `destination`.
    ///
    /// The archive is built next to `destination` and renamed into place once
    /// complete.
    pub fn write(&self, tree: &ProjectTree, destination: &Path) -> Result<()> {
        if destination.exists() && !self.overwrite {
            anyhow::bail!(
                "Output archive already exists: {}. Set output.overwrite to replace it.",
                destination.display()
            );
        }

        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let staging = staging_path(destination)?;
        if let Err(err) = write_archive(tree, &staging, &self.root_folder) {
            discard(&staging);
            return Err(err);
        }

        if destination.exists() {
            fs::remove_file(destination).with_context(|| {
                format!("Failed to remove output archive: {}", destination.display())
            })?;
        }

        fs::rename(&staging, destination).with_context(|| {
            format!(
                "Failed to move {} into {}",
                staging.display(),
                destination.display()
            )
        })?;

        Ok(())
    }
}

/// Hidden sibling of `target` used while writing (`out` -> `.out.partial`)
fn staging_path(target: &Path) -> Result<PathBuf> {
    let name = target
        .file_name()
        .with_context(|| format!("Invalid output path: {}", target.display()))?;

    let mut staging_name = std::ffi::OsString::from(".");
    staging_name.push(name);
    staging_name.push(".partial");

    Ok(target.with_file_name(staging_name))
}

/// Remove a failed staging output, reporting rather than failing
fn discard(staging: &Path) {
    let result = if staging.is_dir() {
        fs::remove_dir_all(staging)
    } else if staging.exists() {
        fs::remove_file(staging)
    } else {
        Ok(())
    };

    if let Err(err) = result {
        eprintln!(
            "Warning: failed to remove staging output {}: {}",
            staging.display(),
            err
        );
    }
}

fn write_archive(tree: &ProjectTree, path: &Path, root_folder: &str) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create archive: {}", path.display()))?;
    let mut writer = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    writer
        .add_directory(format!("{}/", root_folder), options)
        .context("Failed to add root folder to archive")?;

    for file in tree.files() {
        let entry = format!(
            "{}/{}",
            root_folder,
            file.path.to_string_lossy().replace('\\', "/")
        );
        writer
            .start_file(entry.as_str(), options)
            .with_context(|| format!("Failed to add {} to archive", entry))?;
        writer
            .write_all(file.content.as_bytes())
            .with_context(|| format!("Failed to write {} to archive", entry))?;
    }

    writer.finish().context("Failed to finish archive")?;
    Ok(())
}

fn write_files(tree: &ProjectTree, root: &Path) -> Result<()> {
    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory: {}", root.display()))?;

    for file in tree.files() {
        let target = root.join(&file.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&target, &file.content)
            .with_context(|| format!("Failed to write file: {}", target.display()))?;
    }

    Ok(())
}
