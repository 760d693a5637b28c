//! Implementor table loader.
//!
//! # Purpose
//!
//! Builds an implementor table and hands it to whoever indexes it. The
//! consumer may not exist yet when the loader runs, so the loader is given
//! both an optional [`Registrar`] and a [`PendingSlot`] up front:
//!
//! 1. Registrar present: it is called once, synchronously, with the table.
//! 2. Registrar absent: the table is parked in the pending slot, and the
//!    consumer drains it when it comes up (see
//!    [`crate::registry::ImplementorRegistry::init`]).
//!
//! # Invariants
//!
//! - After [`ImplementorLoader::load`] exactly one of {registrar received the
//!   table, pending slot holds the table} is true.
//!   - Tested by: `loader::tests::absent_registrar_parks_table`,
//!     `loader::tests::present_registrar_receives_table_once`,
//!     `loader::tests::present_registrar_leaves_parked_table_alone`.
//! - Loading is not idempotent: every call builds and hands off a new table.
//!   - Tested by: `loader::tests::each_load_hands_off_again`.

use crate::builtins::default_implementors;
use crate::map::ImplementorMap;
use crate::pending::{PENDING_IMPLEMENTORS, PendingSlot};

/// Receives implementor tables.
pub trait Registrar {
	fn register_implementors(&self, map: ImplementorMap);
}

impl<F> Registrar for F
where
	F: Fn(ImplementorMap),
{
	fn register_implementors(&self, map: ImplementorMap) {
		self(map)
	}
}

/// Hands an implementor table to a registrar, or parks it for later.
pub struct ImplementorLoader<'a> {
	registrar: Option<&'a dyn Registrar>,
	pending: &'a PendingSlot,
	table: fn() -> ImplementorMap,
}

impl<'a> ImplementorLoader<'a> {
	/// Creates a loader for the built-in `Default` implementor table.
	pub fn new(registrar: Option<&'a dyn Registrar>, pending: &'a PendingSlot) -> Self {
		Self {
			registrar,
			pending,
			table: default_implementors,
		}
	}

	/// Loader that parks into [`PENDING_IMPLEMENTORS`] when no registrar is given.
	pub fn process_wide(registrar: Option<&'a dyn Registrar>) -> Self {
		Self::new(registrar, &PENDING_IMPLEMENTORS)
	}

	/// Replaces the table source.
	pub fn with_table(mut self, table: fn() -> ImplementorMap) -> Self {
		self.table = table;
		self
	}

	/// Builds the table and hands it off.
	pub fn load(&self) {
		let map = (self.table)();
		match self.registrar {
			Some(registrar) => {
				tracing::debug!(crates = map.len(), "registering implementors");
				registrar.register_implementors(map);
			}
			None => {
				tracing::debug!(crates = map.len(), "no registrar yet, parking implementors");
				self.pending.store(map);
			}
		}
	}
}
