//! Trait implementor index for generated documentation.
//!
//! A documentation build emits, per trait, a table mapping each crate to the
//! rendered `impl` lines for that trait. This crate holds such a table, hands
//! it to a consumer, and indexes it for lookups.
//!
//! # Modules
//!
//! - [`map`] - Ordered crate -> descriptor mapping
//! - [`descriptor`] - Opaque markup descriptors and their link extraction
//! - [`builtins`] - The literal `core::default::Default` implementor table
//! - [`pending`] - Single-item buffer for mappings nobody has picked up yet
//! - [`loader`] - Builds a table and hands it off exactly once
//! - [`registry`] - Consumer that merges mappings and drains the pending slot
//! - [`config`] - TOML configuration for the registry

#[cfg(test)]
use keystone_digest as _;

pub mod builtins;
pub mod config;
pub mod descriptor;
pub mod loader;
pub mod map;
pub mod pending;
pub mod registry;

pub use config::{ConfigError, ConfigLoadReport, DocsConfig, load_config_from_dir};
pub use descriptor::{Descriptor, DescriptorError, DocLink, ImplRelation};
pub use loader::{ImplementorLoader, Registrar};
pub use map::ImplementorMap;
pub use pending::{PENDING_IMPLEMENTORS, PendingSlot};
pub use registry::{DuplicatePolicy, ImplementorRegistry, RegisterError};
