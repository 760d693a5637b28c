use crate::{Digest, to_hex};

/// Hashes `data` fed in pieces cut at `cuts` (positions, any order).
pub(crate) fn hash_in_pieces<D: Digest>(data: &[u8], cuts: &[usize]) -> Vec<u8> {
	let mut cuts: Vec<usize> = cuts.iter().map(|&c| c.min(data.len())).collect();
	cuts.sort_unstable();

	let mut state = D::default();
	let mut start = 0;
	for cut in cuts {
		state.update(&data[start..cut]);
		start = cut;
	}
	state.update(&data[start..]);
	state.finalize()
}

pub(crate) fn hex_digest<D: Digest>(data: &[u8]) -> String {
	to_hex(&D::digest(data))
}
