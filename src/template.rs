//! Placeholder substitution and templated tree instantiation.
//! The substitution primitive replaces the fixed placeholder literal in
//! any text; the instantiator mirrors a template directory into a
//! destination, rewriting the placeholder in entry names and file contents.

use std::fs;
use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::constants::PLACEHOLDER;
use crate::error::{Error, Result};

/// Replaces every occurrence of the placeholder literal in `text` with
/// `replacement`. Pure and total; all occurrences are replaced, including
/// substring matches inside larger identifiers.
pub fn substitute(text: &str, replacement: &str) -> String {
    text.replace(PLACEHOLDER, replacement)
}

/// Upper-cases the first character of `s`, leaving the remainder unchanged.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Instantiates the template tree at `src_dir` into `dest_dir` for the
/// given context.
///
/// Every entry name and every file content has the placeholder replaced
/// with the capitalized context name. Missing destination directories are
/// created as needed.
///
/// # Returns
/// * `Ok(true)` if the tree was instantiated
/// * `Ok(false)` if `dest_dir` already existed and the whole walk was
///   skipped (an existence notice is printed; no partial re-sync)
///
/// # Errors
/// * `Error::Template` if an entry cannot be walked or its path is not
///   valid UTF-8
/// * `Error::Io` on any read, create or write failure
pub fn instantiate_template(src_dir: &Path, dest_dir: &Path, context_name: &str) -> Result<bool> {
    if dest_dir.exists() {
        println!("Folder structure already exists for context \"{}\".", context_name);
        return Ok(false);
    }

    let replacement = capitalize(context_name);

    for entry in WalkDir::new(src_dir) {
        let entry = entry.map_err(|e| Error::Template(e.to_string()))?;
        let relative = entry
            .path()
            .strip_prefix(src_dir)
            .map_err(|e| Error::Template(e.to_string()))?;
        let relative = relative.to_str().ok_or_else(|| {
            Error::Template(format!("invalid path name: {}", entry.path().display()))
        })?;

        // The placeholder never spans a path separator, so substituting the
        // joined relative path rewrites exactly the entry names.
        let target = dest_dir.join(substitute(relative, &replacement));

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(Error::Io)?;
        } else {
            debug!("Instantiating file: {}", target.display());
            let content = fs::read_to_string(entry.path()).map_err(Error::Io)?;
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(Error::Io)?;
            }
            fs::write(&target, substitute(&content, &replacement)).map_err(Error::Io)?;
        }
    }

    Ok(true)
}
