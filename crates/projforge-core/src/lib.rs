//! Core library for the projforge scaffolding tool.
//!
//! A run is a straight pipeline:
//!
//! 1. [`resolve::resolve`] merges command-line values with interactive answers
//!    into one immutable [`project_spec::ProjectSpec`].
//! 2. [`render::render_project`] turns that record into an ordered
//!    [`render::RenderedTree`] of relative paths and file contents.
//! 3. [`project::write_project`] materializes the tree on disk, asking before it
//!    replaces an existing directory.
//! 4. [`provision::create_venv`] optionally creates a Python virtual environment
//!    inside the project.
//!
//! Nothing here is concurrent or persistent; every step blocks until done.

pub mod defaults;
pub mod error;
pub mod manifest;
pub mod project;
pub mod project_spec;
pub mod prompt;
pub mod provision;
pub mod render;
pub mod resolve;
pub mod templates;
pub mod version;
