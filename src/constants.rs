//! Common constants used throughout the ddd-skeleton application.

/// Placeholder literal replaced in template file names and contents.
/// Case-sensitive; substring matches are replaced too.
pub const PLACEHOLDER: &str = "Template";

/// Directory, relative to the project root, that holds generated contexts
pub const CONTEXTS_DIR: &str = "contexts";

/// Name of the shared layer directory under the contexts directory
pub const SHARED_DIR: &str = "shared";

/// Directory, relative to the project root, that holds test skeletons
pub const TEST_DIR: &str = "test";

/// Per-context template location, relative to the template root
pub const TEMPLATE_CONTEXT_DIR: &str = "contexts/template";

/// Shared tree location, relative to the template root
pub const TEMPLATE_SHARED_DIR: &str = "contexts/shared";

/// Singleton configuration files copied to the project root, never overwritten
pub const CONFIG_FILES: [&str; 4] = ["package.json", "README.md", "tsconfig.json", ".env"];

/// Entry-point files under `contexts/` in the template root that receive
/// placeholder substitution and import-path rewriting
pub const ENTRY_POINT_FILES: [&str; 3] =
    ["main.ts", "ApplicationCore.ts", "ControllerDependencyInjector.ts"];

/// Test layers created per context, with the sub-layer names each layer
/// documents. Only the layer directories themselves are created; the
/// sub-layer names are carried for the file-creation command.
pub const TEST_STRUCTURE: [(&str, &[&str]); 5] = [
    ("application", &["useCaseCreate", "useCaseFind"]),
    ("domain", &["entities", "valueObjects", "repositories"]),
    ("infrastructure", &["http", "persistence"]),
    ("presentation", &[]),
    ("utils", &[]),
];

/// Name of the persisted state file kept beside the installed tool
pub const STATE_FILE: &str = "state.json";

/// Name of the bundled template directory kept beside the installed tool
pub const TEMPLATES_DIR: &str = "templates";
