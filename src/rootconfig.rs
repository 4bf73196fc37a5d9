//! Root configuration materialization.
//! Copies the singleton project configuration files into the project root
//! (never overwriting) and rewrites the entry-point files for the newly
//! created context: placeholder substitution over names and contents,
//! followed by an import-path rewrite that points the template namespace
//! at the context's namespace.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use log::debug;
use regex::{Captures, Regex};

use crate::constants::{CONFIG_FILES, CONTEXTS_DIR, ENTRY_POINT_FILES};
use crate::error::{Error, Result};
use crate::template::{capitalize, substitute};

/// Matches `import { names } from './template/relative/path'` with either
/// quote style. The directory literal is the lowercase template namespace,
/// untouched by the capitalized placeholder substitution that runs first.
fn import_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"import\s+\{(.+?)\}\s+from\s+['"]\./template/(.+?)['"]"#)
            .expect("import pattern is a valid regex")
    })
}

/// Rewrites template-namespace imports to the context's namespace. The
/// directory segment gets the raw lowercase context identifier; trailing
/// path segments keep whatever the earlier substitution pass produced.
fn rewrite_imports(content: &str, context_name: &str) -> String {
    import_pattern()
        .replace_all(content, |caps: &Captures| {
            format!(
                "import {{{}}} from './{}/{}'",
                caps[1].trim(),
                context_name,
                caps[2].trim()
            )
        })
        .into_owned()
}

/// Materializes the root configuration for a newly created context:
/// first the singleton copy phase, then the entry-point rewrite phase.
/// The two phases are independent; a failure in one file never aborts
/// the remaining files.
pub fn materialize_root_config(template_root: &Path, project_root: &Path, context_name: &str) {
    copy_singleton_files(template_root, project_root);
    rewrite_entry_points(template_root, project_root, context_name);
}

/// Copies each singleton configuration file from the template root into
/// the project root. A file already present at the destination is skipped
/// with a notice and never overwritten; a file missing at the source is
/// reported and the remaining files still run.
fn copy_singleton_files(template_root: &Path, project_root: &Path) {
    for file in CONFIG_FILES {
        let src = template_root.join(file);
        let dest = project_root.join(file);

        if !src.exists() {
            println!("The source file does not exist: {}", src.display());
            continue;
        }
        if dest.exists() {
            println!("The file already exists at the destination: {}", dest.display());
            continue;
        }
        if let Err(e) = fs::copy(&src, &dest) {
            eprintln!("Error copying '{}' to '{}': {}", src.display(), dest.display(), e);
        }
    }
}

/// Rewrites every entry-point file for the context. Per-file errors are
/// reported with the context name and file name and do not abort the
/// remaining files.
fn rewrite_entry_points(template_root: &Path, project_root: &Path, context_name: &str) {
    let replacement = capitalize(context_name);

    for file in ENTRY_POINT_FILES {
        let src = template_root.join(CONTEXTS_DIR).join(file);
        if !src.exists() {
            println!("File not found: {}", src.display());
            continue;
        }
        if let Err(e) = rewrite_entry_point(&src, project_root, file, context_name, &replacement) {
            eprintln!(
                "Error processing entry-point file '{}' for \"{}\": {}",
                file, context_name, e
            );
        }
    }
}

/// Processes one entry-point file: placeholder substitution over the whole
/// content and the destination name, then the import rewrite, then the
/// write into `projectRoot/contexts/`.
fn rewrite_entry_point(
    src: &Path,
    project_root: &Path,
    file: &str,
    context_name: &str,
    replacement: &str,
) -> Result<()> {
    let content = fs::read_to_string(src).map_err(Error::Io)?;
    let content = substitute(&content, replacement);
    let content = rewrite_imports(&content, context_name);

    let dest = project_root.join(CONTEXTS_DIR).join(substitute(file, replacement));
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(Error::Io)?;
    }
    debug!("Writing entry point: {}", dest.display());
    fs::write(&dest, content).map_err(Error::Io)
}
