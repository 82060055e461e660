use anyhow::Context;
use libgqlx::Schema;
use libgqlx::SchemaBuilder;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

const SCHEMA_FILE_EXTS: [&str; 2] = ["graphql", "graphqls"];

/// Loads the schema at `path`: either a single schema file or a directory
/// searched recursively for `.graphql` / `.graphqls` files.
pub(crate) fn load_schema(path: &Path) -> anyhow::Result<Schema> {
    let file_paths =
        if path.is_dir() {
            find_schema_files(path)?
        } else {
            vec![path.to_path_buf()]
        };

    log::debug!("Loading schema from {} file(s)...", file_paths.len());
    let schema = SchemaBuilder::new()
        .load_files(file_paths)?
        .build()?;

    Ok(schema)
}

fn find_schema_files(dir_path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut file_paths = vec![];
    for entry in WalkDir::new(dir_path).follow_links(true).sort_by_file_name() {
        let entry = entry.with_context(|| format!(
            "failed to scan schema directory {}",
            dir_path.display(),
        ))?;
        let path = entry.path();
        if !entry.file_type().is_file() {
            log::trace!("Skipping non-file: {path:#?}.");
            continue;
        }

        let has_schema_ext = path.extension()
            .map(|ext| ext.to_string_lossy())
            .is_some_and(|ext| SCHEMA_FILE_EXTS.iter().any(|schema_ext| *schema_ext == ext));
        if has_schema_ext {
            log::trace!("Found schema file at {path:#?}.");
            file_paths.push(path.to_path_buf());
        }
    }

    if file_paths.is_empty() {
        anyhow::bail!(
            "no schema files (*.graphql, *.graphqls) found under {}",
            dir_path.display(),
        );
    }

    Ok(file_paths)
}
