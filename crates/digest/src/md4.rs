//! MD4 (RFC 1320).
//!
//! Broken; provided for interoperability with legacy formats only.

use crate::Digest;
use crate::buffer::BlockBuffer;

const INIT: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

const ROUND2: u32 = 0x5a827999;
const ROUND3: u32 = 0x6ed9eba1;

fn compress(state: &mut [u32; 4], block: &[u8; 64]) {
	let mut x = [0u32; 16];
	for (word, bytes) in x.iter_mut().zip(block.as_chunks::<4>().0) {
		*word = u32::from_le_bytes(*bytes);
	}

	let [mut a, mut b, mut c, mut d] = *state;

	let ff = |a: u32, b: u32, c: u32, d: u32, k: usize, s: u32| {
		a.wrapping_add((b & c) | (!b & d)).wrapping_add(x[k]).rotate_left(s)
	};
	for &k in &[0, 4, 8, 12] {
		a = ff(a, b, c, d, k, 3);
		d = ff(d, a, b, c, k + 1, 7);
		c = ff(c, d, a, b, k + 2, 11);
		b = ff(b, c, d, a, k + 3, 19);
	}

	let gg = |a: u32, b: u32, c: u32, d: u32, k: usize, s: u32| {
		a.wrapping_add((b & c) | (b & d) | (c & d))
			.wrapping_add(x[k])
			.wrapping_add(ROUND2)
			.rotate_left(s)
	};
	for k in 0..4 {
		a = gg(a, b, c, d, k, 3);
		d = gg(d, a, b, c, k + 4, 5);
		c = gg(c, d, a, b, k + 8, 9);
		b = gg(b, c, d, a, k + 12, 13);
	}

	let hh = |a: u32, b: u32, c: u32, d: u32, k: usize, s: u32| {
		a.wrapping_add(b ^ c ^ d).wrapping_add(x[k]).wrapping_add(ROUND3).rotate_left(s)
	};
	for &k in &[0, 2, 1, 3] {
		a = hh(a, b, c, d, k, 3);
		d = hh(d, a, b, c, k + 8, 9);
		c = hh(c, d, a, b, k + 4, 11);
		b = hh(b, c, d, a, k + 12, 15);
	}

	for (s, v) in state.iter_mut().zip([a, b, c, d]) {
		*s = s.wrapping_add(v);
	}
}

/// MD4.
#[derive(Clone)]
pub struct Md4 {
	state: [u32; 4],
	buffer: BlockBuffer<64>,
	length: u64,
}

impl Default for Md4 {
	fn default() -> Self {
		Self {
			state: INIT,
			buffer: BlockBuffer::new(),
			length: 0,
		}
	}
}

impl std::fmt::Debug for Md4 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Md4").field("length", &self.length).finish_non_exhaustive()
	}
}

impl Digest for Md4 {
	const OUTPUT_BYTES: usize = 16;
	const BLOCK_BYTES: usize = 64;

	fn update(&mut self, data: impl AsRef<[u8]>) {
		let data = data.as_ref();
		self.length = self.length.wrapping_add(data.len() as u64);
		let state = &mut self.state;
		self.buffer.input(data, |block| compress(state, block));
	}

	fn finalize(mut self) -> Vec<u8> {
		let bits = self.length.wrapping_shl(3);
		let state = &mut self.state;
		self.buffer.finish(&bits.to_le_bytes(), |block| compress(state, block));
		self.state.iter().flat_map(|w| w.to_le_bytes()).collect()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;
	use crate::test_support::{hash_in_pieces, hex_digest};

	#[rstest]
	#[case(b"", "31d6cfe0d16ae931b73c59d7e0c089c0")]
	#[case(b"a", "bde52cb31de33e46245e05fbdbd6fb24")]
	#[case(b"abc", "a448017aaf21d8525fc10ae87aa6729d")]
	#[case(b"message digest", "d9130a8164549fe818874806e1c7014b")]
	#[case(b"abcdefghijklmnopqrstuvwxyz", "d79e1c308aa5bbcdeea8ed63df412da9")]
	#[case(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789", "043f8582f241db351ce627e153e7f0e4")]
	#[case(
		b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
		"e33b4ddc9c38f2199c3e7b164fcc0536"
	)]
	fn rfc1320_vectors(#[case] input: &[u8], #[case] expected: &str) {
		assert_eq!(hex_digest::<Md4>(input), expected);
	}

	#[test]
	fn byte_at_a_time() {
		let data = b"12345678901234567890123456789012345678901234567890123456789012345678901234567890";
		let cuts: Vec<usize> = (1..data.len()).collect();
		assert_eq!(hash_in_pieces::<Md4>(data, &cuts), Md4::digest(data));
	}
}
