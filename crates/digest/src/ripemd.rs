//! RIPEMD-160.
//!
//! Two parallel five-round lines over the same 16 little-endian words, each
//! with its own word order, rotations and constants, combined at the end of
//! every block.

use crate::Digest;
use crate::buffer::BlockBuffer;

const INIT: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

#[rustfmt::skip]
const LEFT_WORD: [usize; 80] = [
	0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
	7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8,
	3, 10, 14, 4, 9, 15, 8, 1, 2, 7, 0, 6, 13, 11, 5, 12,
	1, 9, 11, 10, 0, 8, 12, 4, 13, 3, 7, 15, 14, 5, 6, 2,
	4, 0, 5, 9, 7, 12, 2, 10, 14, 1, 3, 8, 11, 6, 15, 13,
];
#[rustfmt::skip]
const RIGHT_WORD: [usize; 80] = [
	5, 14, 7, 0, 9, 2, 11, 4, 13, 6, 15, 8, 1, 10, 3, 12,
	6, 11, 3, 7, 0, 13, 5, 10, 14, 15, 8, 12, 4, 9, 1, 2,
	15, 5, 1, 3, 7, 14, 6, 9, 11, 8, 12, 2, 10, 0, 4, 13,
	8, 6, 4, 1, 3, 11, 15, 0, 5, 12, 2, 13, 9, 7, 10, 14,
	12, 15, 10, 4, 1, 5, 8, 7, 6, 2, 13, 14, 0, 3, 9, 11,
];
#[rustfmt::skip]
const LEFT_ROTATE: [u32; 80] = [
	11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8,
	7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 11, 7, 13, 12,
	11, 13, 6, 7, 14, 9, 13, 15, 14, 8, 13, 6, 5, 12, 7, 5,
	11, 12, 14, 15, 14, 15, 9, 8, 9, 14, 5, 6, 8, 6, 5, 12,
	9, 15, 5, 11, 6, 8, 13, 12, 5, 12, 13, 14, 11, 8, 5, 6,
];
#[rustfmt::skip]
const RIGHT_ROTATE: [u32; 80] = [
	8, 9, 9, 11, 13, 15, 15, 5, 7, 7, 8, 11, 14, 14, 12, 6,
	9, 13, 15, 7, 12, 8, 9, 11, 7, 7, 12, 7, 6, 15, 13, 11,
	9, 7, 15, 11, 8, 6, 6, 14, 12, 13, 5, 14, 13, 13, 7, 5,
	15, 5, 8, 11, 14, 14, 6, 14, 6, 9, 12, 9, 12, 5, 15, 8,
	8, 5, 12, 9, 12, 5, 14, 6, 8, 13, 6, 5, 15, 13, 11, 11,
];
const LEFT_CONST: [u32; 5] = [0x00000000, 0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xa953fd4e];
const RIGHT_CONST: [u32; 5] = [0x50a28be6, 0x5c4dd124, 0x6d703ef3, 0x7a6d76e9, 0x00000000];

/// Boolean function of round `round` (0..5).
fn f(round: usize, x: u32, y: u32, z: u32) -> u32 {
	match round {
		0 => x ^ y ^ z,
		1 => (x & y) | (!x & z),
		2 => (x | !y) ^ z,
		3 => (x & z) | (y & !z),
		_ => x ^ (y | !z),
	}
}

/// One step on a line `[a, b, c, d, e]`.
fn step(line: &mut [u32; 5], round: usize, word: u32, rotate: u32, k: u32) {
	let [a, b, c, d, e] = *line;
	let t = a
		.wrapping_add(f(round, b, c, d))
		.wrapping_add(word)
		.wrapping_add(k)
		.rotate_left(rotate)
		.wrapping_add(e);
	*line = [e, t, b, c.rotate_left(10), d];
}

fn compress(state: &mut [u32; 5], block: &[u8; 64]) {
	let mut x = [0u32; 16];
	for (word, bytes) in x.iter_mut().zip(block.as_chunks::<4>().0) {
		*word = u32::from_le_bytes(*bytes);
	}

	let mut left = *state;
	let mut right = *state;
	for i in 0..80 {
		let round = i / 16;
		step(&mut left, round, x[LEFT_WORD[i]], LEFT_ROTATE[i], LEFT_CONST[round]);
		step(&mut right, 4 - round, x[RIGHT_WORD[i]], RIGHT_ROTATE[i], RIGHT_CONST[round]);
	}

	let t = state[1].wrapping_add(left[2]).wrapping_add(right[3]);
	state[1] = state[2].wrapping_add(left[3]).wrapping_add(right[4]);
	state[2] = state[3].wrapping_add(left[4]).wrapping_add(right[0]);
	state[3] = state[4].wrapping_add(left[0]).wrapping_add(right[1]);
	state[4] = state[0].wrapping_add(left[1]).wrapping_add(right[2]);
	state[0] = t;
}

/// RIPEMD-160.
#[derive(Clone)]
pub struct Ripemd160 {
	state: [u32; 5],
	buffer: BlockBuffer<64>,
	length: u64,
}

impl Default for Ripemd160 {
	fn default() -> Self {
		Self {
			state: INIT,
			buffer: BlockBuffer::new(),
			length: 0,
		}
	}
}

impl std::fmt::Debug for Ripemd160 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Ripemd160").field("length", &self.length).finish_non_exhaustive()
	}
}

impl Digest for Ripemd160 {
	const OUTPUT_BYTES: usize = 20;
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
	use proptest::prelude::*;
	use rstest::rstest;

	use super::*;
	use crate::test_support::{hash_in_pieces, hex_digest};

	#[rstest]
	#[case(b"", "9c1185a5c5e9fc54612808977ee8f548b2258d31")]
	#[case(b"a", "0bdc9d2d256b3ee9daae347be6f4dc835a467ffe")]
	#[case(b"abc", "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc")]
	#[case(b"message digest", "5d0689ef49d2fae572b881b123a85ffa21595f36")]
	#[case(b"abcdefghijklmnopqrstuvwxyz", "f71c27109c692c1b56bbdceb5b9d2865b3708dbc")]
	#[case(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq", "12a053384a9c0c88e405a06c27dcf49ada62eb2b")]
	#[case(&[b'x'; 56], "af13b5ead9b74a9a6b97c4a612ddfd0baf61ff11")]
	fn vectors(#[case] input: &[u8], #[case] expected: &str) {
		assert_eq!(hex_digest::<Ripemd160>(input), expected);
	}

	#[test]
	fn million_a() {
		assert_eq!(
			hex_digest::<Ripemd160>(&vec![b'a'; 1_000_000]),
			"52783243c1697bdbe16d37f97f68f08325dc1528"
		);
	}

	proptest! {
		#[test]
		fn streaming_matches_one_shot(data in proptest::collection::vec(any::<u8>(), 0..300), cuts in proptest::collection::vec(0usize..300, 0..6)) {
			prop_assert_eq!(hash_in_pieces::<Ripemd160>(&data, &cuts), Ripemd160::digest(&data));
		}
	}
}
