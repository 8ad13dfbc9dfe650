//! riotgen scaffolds boilerplate for RIOT source trees: applications, external
//! packages, boards, drivers and tests. Parameters come from an INI config file
//! or interactive prompts, are validated and enriched with common project
//! metadata, and are substituted into per-kind templates.

/// Command-line interface module for riotgen
pub mod cli;

/// INI-style configuration files with a `[common]` section
pub mod config;

pub mod constants;

/// Common metadata, RIOT base directory validation and derived fields
pub mod enricher;

/// Error types and handling for riotgen
pub mod error;

/// Per-kind pipeline: collect, enrich, render
pub mod generator;

/// Configured user identity lookup
pub mod identity;

pub mod logger;

/// Resolved parameter values
pub mod params;

/// User input and interaction handling
pub mod prompt;

/// Template rendering and output writing
pub mod renderer;

/// Validation and normalization of raw parameters
pub mod resolver;

/// Field schemas and template targets per artifact kind
pub mod schema;

/// Built-in and on-disk template sources
pub mod templates;
