//! ddd-skeleton is a project scaffolding generator for DDD-style service
//! skeletons. It instantiates a bundled template tree for a named bounded
//! context, replacing a placeholder token in file names and contents, and
//! materializes the surrounding project layout (shared layer, root
//! configuration files, test skeleton).

/// Command-line interface module for the ddd-skeleton application
pub mod cli;

/// Common constants: placeholder literal, file lists, layout names
pub mod constants;

/// Recursive verbatim directory copying
pub mod copier;

/// Error types and handling for the ddd-skeleton application
pub mod error;

/// Structure policy: decides which generation steps run for a command
/// and under which existence-check guards
pub mod generator;

/// Root configuration materialization
/// Copies singleton config files and rewrites entry-point files
pub mod rootconfig;

/// The persisted project-created flag
pub mod state;

/// Placeholder substitution and templated tree instantiation
pub mod template;
