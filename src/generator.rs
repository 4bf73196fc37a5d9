//! Structure policy for the generator.
//! Decides, per command, which generation steps run, in what order, and
//! under which existence-check guards. Steps report outcomes as terminal
//! output; a failed step never aborts its sibling steps.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::{
    CONTEXTS_DIR, SHARED_DIR, TEMPLATE_CONTEXT_DIR, TEMPLATE_SHARED_DIR, TEST_DIR, TEST_STRUCTURE,
};
use crate::copier::copy_tree;
use crate::error::{Error, Result};
use crate::rootconfig::materialize_root_config;
use crate::template::instantiate_template;

/// Project generator bound to a template tree and a project root.
///
/// The template root is the bundled, read-only source of truth; the
/// project root is the directory the generated layout is written under
/// (normally the invocation working directory).
pub struct Generator {
    template_root: PathBuf,
    project_root: PathBuf,
}

impl Generator {
    pub fn new(template_root: PathBuf, project_root: PathBuf) -> Self {
        Self { template_root, project_root }
    }

    fn contexts_dir(&self) -> PathBuf {
        self.project_root.join(CONTEXTS_DIR)
    }

    fn shared_dir(&self) -> PathBuf {
        self.contexts_dir().join(SHARED_DIR)
    }

    fn test_dir(&self) -> PathBuf {
        self.project_root.join(TEST_DIR)
    }

    /// Creates the full project layout for a context: the instantiated
    /// context tree, the root configuration, the shared layer and the
    /// test skeleton, in that order.
    ///
    /// # Returns
    /// * `true` if the guards passed and generation ran
    /// * `false` if a precondition or existence guard rejected the
    ///   command before any write
    pub fn create_project(&self, context_name: &str) -> bool {
        if context_name.is_empty() {
            eprintln!("Invalid context name provided.");
            return false;
        }

        let context_path = self.contexts_dir().join(context_name);
        if context_path.exists() {
            println!("Project \"{}\" already exists.", context_name);
            return false;
        }
        // An existing shared layer means some project was already
        // bootstrapped in this root, whatever its context name.
        if self.shared_dir().exists() {
            println!("A project already exists, try creating a context.");
            return false;
        }

        self.generate_context_structure(context_name);
        materialize_root_config(&self.template_root, &self.project_root, context_name);
        self.generate_shared_structure();
        self.generate_test_structure(context_name);
        true
    }

    /// Creates a context inside an existing project: the instantiated
    /// context tree and the test skeleton only — no shared layer, no root
    /// configuration.
    ///
    /// Exposed as a library capability; the command dispatcher currently
    /// refuses to reach it.
    pub fn create_context(&self, context_name: &str) {
        if context_name.is_empty() {
            eprintln!("Invalid context name provided.");
            return;
        }

        let context_path = self.contexts_dir().join(context_name);
        if context_path.exists() {
            println!("Context \"{}\" already exists.", context_name);
            return;
        }

        self.generate_context_structure(context_name);
        self.generate_test_structure(context_name);
    }

    /// Reports the file that would be created for a context and type.
    /// Stub: no filesystem effect.
    pub fn create_file(&self, name: &str, context_name: &str, kind: &str) {
        println!("File created at {} {} {}", name, context_name, kind);
    }

    /// Instantiates the per-context template tree into `contexts/<name>`.
    fn generate_context_structure(&self, context_name: &str) {
        let src = self.template_root.join(TEMPLATE_CONTEXT_DIR);
        if !src.exists() {
            debug!("Per-context template {} does not exist", src.display());
            return;
        }
        let dest = self.contexts_dir().join(context_name);
        match instantiate_template(&src, &dest, context_name) {
            Ok(true) => println!("Project created for \"{}\" context.", context_name),
            Ok(false) => {}
            Err(e) => eprintln!(
                "Error generating context structure for \"{}\": {}",
                context_name, e
            ),
        }
    }

    /// Copies the shared tree verbatim into `contexts/shared`, at most once.
    fn generate_shared_structure(&self) {
        let dest = self.shared_dir();
        if dest.exists() {
            println!("Folder structure already exists for the shared layer.");
            return;
        }
        let src = self.template_root.join(TEMPLATE_SHARED_DIR);
        if !src.exists() {
            debug!("Shared template {} does not exist", src.display());
            return;
        }
        if let Err(e) = copy_tree(&src, &dest) {
            eprintln!("Error copying shared structure: {}", e);
        }
    }

    /// Creates the empty test-layer skeleton under `test/<name>`, skipped
    /// entirely if the context's test directory already exists.
    fn generate_test_structure(&self, context_name: &str) {
        let dest = self.test_dir().join(context_name);
        if dest.exists() {
            println!(
                "Folder test structure already exists for context \"{}\".",
                context_name
            );
            return;
        }

        match create_test_layers(&dest) {
            Ok(()) => println!("Test structure initialized for context \"{}\".", context_name),
            Err(e) => eprintln!(
                "Error generating folder test structure for \"{}\": {}",
                context_name, e
            ),
        }
    }
}

fn create_test_layers(context_test_dir: &Path) -> Result<()> {
    for (layer, _sublayers) in TEST_STRUCTURE {
        fs::create_dir_all(context_test_dir.join(layer)).map_err(Error::Io)?;
    }
    Ok(())
}
