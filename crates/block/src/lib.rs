//! Block ciphers.
//!
//! A cipher maps one fixed-size block to another under a key schedule
//! computed once at construction. Both directions take `&self`, so a keyed
//! cipher can be shared freely.

#[cfg(test)]
use criterion as _;

pub mod blowfish;

pub use blowfish::Blowfish;

/// A key whose length the cipher does not accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid key length {got}, expected {min}..={max} bytes")]
pub struct InvalidKeyLength {
	pub got: usize,
	pub min: usize,
	pub max: usize,
}

/// Encryption of `N`-byte blocks.
pub trait BlockEncrypt<const N: usize> {
	/// Block size in bytes.
	const BLOCK_BYTES: usize = N;

	fn encrypt_block(&self, input: &[u8; N], output: &mut [u8; N]);

	fn encrypt_in_place(&self, block: &mut [u8; N]) {
		let input = *block;
		self.encrypt_block(&input, block);
	}
}

/// Decryption of `N`-byte blocks.
pub trait BlockDecrypt<const N: usize> {
	/// Block size in bytes.
	const BLOCK_BYTES: usize = N;

	fn decrypt_block(&self, input: &[u8; N], output: &mut [u8; N]);

	fn decrypt_in_place(&self, block: &mut [u8; N]) {
		let input = *block;
		self.decrypt_block(&input, block);
	}
}
