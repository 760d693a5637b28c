//! Implementor descriptors.
//!
//! A descriptor is one rendered `impl Trait for Type` line with embedded
//! anchors, e.g.
//!
//! ```text
//! impl <a class='trait' href='...' title='core::default::Default'>Default</a> for <a class='struct' href='...' title='rand::reseeding::ReseedWithDefault'>ReseedWithDefault</a>
//! ```
//!
//! The string is handed to renderers verbatim. [`Descriptor::parse`] only
//! reads it to support lookups by path.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"<a class='([a-z]+)' href='([^']*)' title='([^']*)'>([^<]*)</a>").expect("anchor pattern is valid")
});

/// Errors from [`Descriptor::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
	#[error("descriptor has no trait link: {0:?}")]
	MissingTrait(String),
	#[error("descriptor has no implementor link after the trait: {0:?}")]
	MissingImplementor(String),
}

/// One opaque implementor markup string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Descriptor(String);

impl Descriptor {
	pub fn new(markup: impl Into<String>) -> Self {
		Self(markup.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}

	/// Extracts the trait and implementor links.
	///
	/// The trait link is the first anchor with class `trait`; the implementor
	/// is the first anchor after it. Anchors inside generic arguments of the
	/// implementor are ignored.
	pub fn parse(&self) -> Result<ImplRelation, DescriptorError> {
		let mut anchors = ANCHOR.captures_iter(&self.0).map(|caps| DocLink {
			kind: caps[1].to_string(),
			href: caps[2].to_string(),
			title: caps[3].to_string(),
			name: caps[4].to_string(),
		});

		let trait_link = anchors
			.by_ref()
			.find(|link| link.kind == "trait")
			.ok_or_else(|| DescriptorError::MissingTrait(self.0.clone()))?;
		let implementor = anchors
			.next()
			.ok_or_else(|| DescriptorError::MissingImplementor(self.0.clone()))?;

		Ok(ImplRelation {
			trait_link,
			implementor,
		})
	}
}

impl fmt::Display for Descriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for Descriptor {
	fn from(markup: &str) -> Self {
		Self(markup.to_string())
	}
}

impl From<String> for Descriptor {
	fn from(markup: String) -> Self {
		Self(markup)
	}
}

impl AsRef<str> for Descriptor {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

/// One anchor of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLink {
	/// Item kind from the anchor class (`trait`, `struct`, `enum`, ...).
	pub kind: String,
	pub href: String,
	/// Fully qualified path.
	pub title: String,
	/// Display name.
	pub name: String,
}

/// Trait and implementor extracted from a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplRelation {
	pub trait_link: DocLink,
	pub implementor: DocLink,
}

impl ImplRelation {
	pub fn trait_path(&self) -> &str {
		&self.trait_link.title
	}

	pub fn implementor_path(&self) -> &str {
		&self.implementor.title
	}
}
