//! Streaming message digests.
//!
//! Every algorithm implements [`Digest`] plus `Default` (a fresh state) and
//! `Clone` (fork a running state, e.g. to hash a common prefix once).

mod buffer;
pub mod md4;
pub mod ripemd;
pub mod sha2;

pub use md4::Md4;
pub use ripemd::Ripemd160;
pub use sha2::{Sha224, Sha256, Sha384, Sha512, Sha512224, Sha512256};

/// Output buffer passed to [`Digest::finalize_into`] is too small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("output buffer holds {got} bytes, digest needs {needed}")]
pub struct OutputTooShort {
	pub needed: usize,
	pub got: usize,
}

/// A streaming hash function.
pub trait Digest: Default + Clone {
	/// Digest size in bytes.
	const OUTPUT_BYTES: usize;
	/// Compression block size in bytes.
	const BLOCK_BYTES: usize;

	/// Feeds more input.
	fn update(&mut self, data: impl AsRef<[u8]>);

	/// Pads, runs the final compression and returns `OUTPUT_BYTES` bytes.
	fn finalize(self) -> Vec<u8>;

	fn output_bits() -> usize {
		Self::OUTPUT_BYTES * 8
	}

	/// Writes the digest to the front of `out`.
	fn finalize_into(self, out: &mut [u8]) -> Result<(), OutputTooShort> {
		if out.len() < Self::OUTPUT_BYTES {
			return Err(OutputTooShort {
				needed: Self::OUTPUT_BYTES,
				got: out.len(),
			});
		}
		out[..Self::OUTPUT_BYTES].copy_from_slice(&self.finalize());
		Ok(())
	}

	/// One-shot hash of `data`.
	fn digest(data: impl AsRef<[u8]>) -> Vec<u8> {
		let mut state = Self::default();
		state.update(data);
		state.finalize()
	}
}

/// Lowercase hex rendering of a digest.
pub fn to_hex(bytes: &[u8]) -> String {
	use std::fmt::Write;

	bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
		let _ = write!(out, "{b:02x}");
		out
	})
}

#[cfg(test)]
use criterion as _;
#[cfg(test)]
pub(crate) mod test_support;
