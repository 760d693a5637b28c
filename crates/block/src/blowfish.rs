//! Blowfish: a 16-round Feistel cipher over 64-bit blocks.
//!
//! # Invariants
//!
//! - Blocks are two big-endian 32-bit halves.
//! - [`Blowfish::init`] uses the pi-derived tables as they are; only
//!   [`Blowfish::new`] runs the key schedule.
//! - Decryption applies the subkeys in reverse order.
//!
//! # Tested by
//!
//! - `blowfish::tests::reference_vectors`
//! - `blowfish::tests::round_trip_under_any_key`

use crate::{BlockDecrypt, BlockEncrypt, InvalidKeyLength};

mod tables;


const ROUNDS: usize = 16;

/// Blowfish with a fully expanded key schedule.
#[derive(Clone)]
pub struct Blowfish {
	p: [u32; ROUNDS + 2],
	s: [[u32; 256]; 4],
}

impl Blowfish {
	/// Shortest accepted key, in bytes.
	pub const MIN_KEY_BYTES: usize = 4;
	/// Longest accepted key, in bytes.
	pub const MAX_KEY_BYTES: usize = 56;

	/// Cipher over the unkeyed initial tables.
	pub const fn init() -> Self {
		Self {
			p: tables::P,
			s: tables::S,
		}
	}

	/// Runs the key schedule for `key`.
	pub fn new(key: impl AsRef<[u8]>) -> Result<Self, InvalidKeyLength> {
		let key = key.as_ref();
		if !(Self::MIN_KEY_BYTES..=Self::MAX_KEY_BYTES).contains(&key.len()) {
			return Err(InvalidKeyLength {
				got: key.len(),
				min: Self::MIN_KEY_BYTES,
				max: Self::MAX_KEY_BYTES,
			});
		}

		let mut cipher = Self::init();
		let mut bytes = key.iter().copied().cycle();
		for subkey in &mut cipher.p {
			let word = std::array::from_fn(|_| bytes.next().unwrap_or_default());
			*subkey ^= u32::from_be_bytes(word);
		}

		let mut block = (0, 0);
		for i in (0..cipher.p.len()).step_by(2) {
			block = cipher.encrypt_words(block.0, block.1);
			(cipher.p[i], cipher.p[i + 1]) = block;
		}
		for sbox in 0..cipher.s.len() {
			for i in (0..256).step_by(2) {
				block = cipher.encrypt_words(block.0, block.1);
				(cipher.s[sbox][i], cipher.s[sbox][i + 1]) = block;
			}
		}

		Ok(cipher)
	}

	fn feistel(&self, x: u32) -> u32 {
		let [a, b, c, d] = x.to_be_bytes().map(usize::from);
		(self.s[0][a].wrapping_add(self.s[1][b]) ^ self.s[2][c]).wrapping_add(self.s[3][d])
	}

	fn encrypt_words(&self, mut left: u32, mut right: u32) -> (u32, u32) {
		for &subkey in &self.p[..ROUNDS] {
			left ^= subkey;
			right ^= self.feistel(left);
			std::mem::swap(&mut left, &mut right);
		}
		(right ^ self.p[ROUNDS + 1], left ^ self.p[ROUNDS])
	}

	fn decrypt_words(&self, mut left: u32, mut right: u32) -> (u32, u32) {
		for &subkey in self.p[2..].iter().rev() {
			left ^= subkey;
			right ^= self.feistel(left);
			std::mem::swap(&mut left, &mut right);
		}
		(right ^ self.p[0], left ^ self.p[1])
	}
}

impl Default for Blowfish {
	fn default() -> Self {
		Self::init()
	}
}

impl std::fmt::Debug for Blowfish {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Blowfish").finish_non_exhaustive()
	}
}

fn split(block: &[u8; 8]) -> (u32, u32) {
	let (halves, _) = block.as_chunks::<4>();
	(u32::from_be_bytes(halves[0]), u32::from_be_bytes(halves[1]))
}

fn join((left, right): (u32, u32), out: &mut [u8; 8]) {
	out[..4].copy_from_slice(&left.to_be_bytes());
	out[4..].copy_from_slice(&right.to_be_bytes());
}

impl BlockEncrypt<8> for Blowfish {
	fn encrypt_block(&self, input: &[u8; 8], output: &mut [u8; 8]) {
		let (left, right) = split(input);
		join(self.encrypt_words(left, right), output);
	}
}

impl BlockDecrypt<8> for Blowfish {
	fn decrypt_block(&self, input: &[u8; 8], output: &mut [u8; 8]) {
		let (left, right) = split(input);
		join(self.decrypt_words(left, right), output);
	}
}
