//! Single-item buffer for mappings loaded before their consumer.
//!
//! When a loader runs with no registrar available it parks its mapping here.
//! The consumer drains the slot with [`PendingSlot::take`] when it initializes.

use parking_lot::Mutex;

use crate::map::ImplementorMap;

/// Process-wide pending slot for consumers that come up after the loader.
pub static PENDING_IMPLEMENTORS: PendingSlot = PendingSlot::new();

/// Holds at most one un-consumed [`ImplementorMap`].
#[derive(Debug, Default)]
pub struct PendingSlot {
	slot: Mutex<Option<ImplementorMap>>,
}

impl PendingSlot {
	pub const fn new() -> Self {
		Self {
			slot: parking_lot::const_mutex(None),
		}
	}

	/// Parks `map`, returning any mapping that was still waiting.
	pub fn store(&self, map: ImplementorMap) -> Option<ImplementorMap> {
		let replaced = self.slot.lock().replace(map);
		if let Some(old) = &replaced {
			tracing::warn!(crates = old.len(), "replaced un-consumed pending implementors");
		}
		replaced
	}

	/// Removes and returns the waiting mapping.
	pub fn take(&self) -> Option<ImplementorMap> {
		self.slot.lock().take()
	}

	/// Clones the waiting mapping without consuming it.
	pub fn peek(&self) -> Option<ImplementorMap> {
		self.slot.lock().clone()
	}

	pub fn is_occupied(&self) -> bool {
		self.slot.lock().is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn one(krate: &str) -> ImplementorMap {
		[(krate, vec!["d"])].into_iter().collect()
	}

	#[test]
	fn take_drains_the_slot() {
		let slot = PendingSlot::new();
		assert!(!slot.is_occupied());

		assert_eq!(slot.store(one("a")), None);
		assert!(slot.is_occupied());
		assert_eq!(slot.peek(), Some(one("a")));

		assert_eq!(slot.take(), Some(one("a")));
		assert!(!slot.is_occupied());
		assert_eq!(slot.take(), None);
	}

	#[test]
	fn store_replaces_waiting_map() {
		let slot = PendingSlot::new();
		slot.store(one("a"));

		assert_eq!(slot.store(one("b")), Some(one("a")));
		assert_eq!(slot.take(), Some(one("b")));
	}
}
