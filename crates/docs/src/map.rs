//! Ordered mapping from crate name to implementor descriptors.

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};

use crate::descriptor::Descriptor;

/// Crate name -> ordered implementor descriptors.
///
/// Both the crate order and the per-crate descriptor order are insertion
/// order; renderers display them as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImplementorMap {
	crates: IndexMap<String, Vec<Descriptor>>,
}

impl ImplementorMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the descriptor list for `krate`, replacing any previous list.
	///
	/// A replaced crate keeps its original position.
	pub fn insert<I, D>(&mut self, krate: impl Into<String>, descriptors: I) -> Option<Vec<Descriptor>>
	where
		I: IntoIterator<Item = D>,
		D: Into<Descriptor>,
	{
		self.crates.insert(krate.into(), descriptors.into_iter().map(Into::into).collect())
	}

	/// Inserts `descriptors` for `krate` only if the crate is not present yet.
	///
	/// Returns `false` when the crate already had an entry.
	pub fn insert_if_absent(&mut self, krate: impl Into<String>, descriptors: Vec<Descriptor>) -> bool {
		match self.crates.entry(krate.into()) {
			Entry::Occupied(_) => false,
			Entry::Vacant(slot) => {
				slot.insert(descriptors);
				true
			}
		}
	}

	pub fn get(&self, krate: &str) -> Option<&[Descriptor]> {
		self.crates.get(krate).map(Vec::as_slice)
	}

	pub fn contains_crate(&self, krate: &str) -> bool {
		self.crates.contains_key(krate)
	}

	/// Crate names in insertion order.
	pub fn crate_names(&self) -> impl Iterator<Item = &str> {
		self.crates.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &[Descriptor])> {
		self.crates.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
	}

	/// Number of crates, including crates with no descriptors.
	pub fn len(&self) -> usize {
		self.crates.len()
	}

	pub fn is_empty(&self) -> bool {
		self.crates.is_empty()
	}

	/// Total number of descriptors across all crates.
	pub fn descriptor_count(&self) -> usize {
		self.crates.values().map(Vec::len).sum()
	}
}

impl IntoIterator for ImplementorMap {
	type Item = (String, Vec<Descriptor>);
	type IntoIter = indexmap::map::IntoIter<String, Vec<Descriptor>>;

	fn into_iter(self) -> Self::IntoIter {
		self.crates.into_iter()
	}
}

impl<K, D> FromIterator<(K, Vec<D>)> for ImplementorMap
where
	K: Into<String>,
	D: Into<Descriptor>,
{
	fn from_iter<T: IntoIterator<Item = (K, Vec<D>)>>(iter: T) -> Self {
		let mut map = Self::new();
		for (krate, descriptors) in iter {
			map.insert(krate, descriptors);
		}
		map
	}
}
