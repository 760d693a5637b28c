//! Implementor registry.
//!
//! # Role
//!
//! Consumer side of the loader hand-off. Receives tables through
//! [`Registrar`], drains a parked table on [`ImplementorRegistry::init`],
//! and serves lock-free lookups from an atomically swapped snapshot.
//!
//! # Invariants
//!
//! - Concurrent registrations must not lose updates (CAS loop shared by
//!   [`ImplementorRegistry::register`] and
//!   [`ImplementorRegistry::try_register`]).
//! - A rejected [`ImplementorRegistry::try_register`] publishes nothing, even
//!   when it races another registration.
//! - A snapshot handed to a reader never changes; writers publish a new one.

use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::Deserialize;

use crate::config::DocsConfig;
use crate::descriptor::{Descriptor, ImplRelation};
use crate::loader::Registrar;
use crate::map::ImplementorMap;
use crate::pending::PendingSlot;

/// How a crate that is already indexed is treated when registered again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
	/// Keep the descriptors registered first.
	FirstWins,
	/// Replace the crate's descriptors with the newest ones.
	#[default]
	LastWins,
}

/// Registration rejected by [`DuplicatePolicy::FirstWins`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
	#[error("{label}: crate {krate:?} is already indexed")]
	AlreadyIndexed { label: String, krate: String },
}

/// Index of implementors for one trait.
pub struct ImplementorRegistry {
	config: DocsConfig,
	snap: ArcSwap<ImplementorMap>,
}

impl ImplementorRegistry {
	pub fn new(config: DocsConfig) -> Self {
		Self {
			config,
			snap: ArcSwap::from_pointee(ImplementorMap::new()),
		}
	}

	/// Creates a registry and picks up any table parked before it existed.
	pub fn init(config: DocsConfig, pending: &PendingSlot) -> Self {
		let registry = Self::new(config);
		if let Some(map) = pending.take() {
			tracing::debug!(label = %registry.config.label, crates = map.len(), "draining pending implementors");
			registry.register(map);
		}
		registry
	}

	pub fn config(&self) -> &DocsConfig {
		&self.config
	}

	/// Merges `map` into the index under the configured duplicate policy.
	pub fn register(&self, map: ImplementorMap) {
		let kept = self.publish(&map, false).unwrap_or_default();
		if !kept.is_empty() {
			tracing::debug!(label = %self.config.label, ?kept, "keeping first registration");
		}
		tracing::debug!(label = %self.config.label, crates = map.len(), total = self.len(), "registered implementors");
	}

	/// Like [`Self::register`], but fails without applying anything if
	/// [`DuplicatePolicy::FirstWins`] would drop a crate.
	pub fn try_register(&self, map: ImplementorMap) -> Result<(), RegisterError> {
		self.publish(&map, true)?;
		tracing::debug!(label = %self.config.label, crates = map.len(), total = self.len(), "registered implementors");
		Ok(())
	}

	/// Merges `map` into the current snapshot and publishes it with CAS,
	/// retrying on contention.
	///
	/// Returns the crates a [`DuplicatePolicy::FirstWins`] merge left
	/// untouched. With `reject_duplicates`, the first such crate aborts the
	/// merge before anything is published.
	fn publish(&self, map: &ImplementorMap, reject_duplicates: bool) -> Result<Vec<String>, RegisterError> {
		loop {
			let old = self.snap.load_full();
			let mut next = ImplementorMap::clone(&old);
			let mut kept = Vec::new();

			for (krate, descriptors) in map.iter() {
				match self.config.duplicate_policy {
					DuplicatePolicy::LastWins => {
						next.insert(krate, descriptors.iter().cloned());
					}
					DuplicatePolicy::FirstWins => {
						if next.insert_if_absent(krate, descriptors.to_vec()) {
							continue;
						}
						if reject_duplicates {
							return Err(RegisterError::AlreadyIndexed {
								label: self.config.label.clone(),
								krate: krate.to_string(),
							});
						}
						kept.push(krate.to_string());
					}
				}
			}

			let prev = self.snap.compare_and_swap(&old, Arc::new(next));
			if Arc::ptr_eq(&prev, &old) {
				return Ok(kept);
			}
		}
	}

	/// Current index contents.
	pub fn snapshot(&self) -> Arc<ImplementorMap> {
		self.snap.load_full()
	}

	/// Descriptors registered for `krate`.
	pub fn implementors(&self, krate: &str) -> Option<Vec<Descriptor>> {
		self.snap.load().get(krate).map(<[Descriptor]>::to_vec)
	}

	pub fn crate_names(&self) -> Vec<String> {
		self.snap.load().crate_names().map(str::to_string).collect()
	}

	/// Finds the descriptor whose implementor has the full path `path`.
	///
	/// Descriptors that do not parse are skipped.
	pub fn find_implementor(&self, path: &str) -> Option<(String, ImplRelation)> {
		let snap = self.snap.load();
		snap.iter().find_map(|(krate, descriptors)| {
			descriptors
				.iter()
				.filter_map(|d| d.parse().ok())
				.find(|relation| relation.implementor_path() == path)
				.map(|relation| (krate.to_string(), relation))
		})
	}

	/// Number of indexed crates.
	pub fn len(&self) -> usize {
		self.snap.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for ImplementorRegistry {
	fn default() -> Self {
		Self::new(DocsConfig::default())
	}
}

impl Registrar for ImplementorRegistry {
	fn register_implementors(&self, map: ImplementorMap) {
		self.register(map);
	}
}

#[cfg(test)]
mod tests;
