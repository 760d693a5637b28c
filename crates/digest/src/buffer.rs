//! Block accumulation and Merkle-Damgard padding shared by all digests.

/// Collects input into `N`-byte blocks for a compression function.
#[derive(Clone)]
pub(crate) struct BlockBuffer<const N: usize> {
	buf: [u8; N],
	pos: usize,
}

impl<const N: usize> BlockBuffer<N> {
	pub(crate) const fn new() -> Self {
		Self { buf: [0; N], pos: 0 }
	}

	/// Feeds `data`, calling `compress` for every completed block.
	pub(crate) fn input(&mut self, mut data: &[u8], mut compress: impl FnMut(&[u8; N])) {
		if self.pos > 0 {
			let take = (N - self.pos).min(data.len());
			self.buf[self.pos..self.pos + take].copy_from_slice(&data[..take]);
			self.pos += take;
			data = &data[take..];
			if self.pos < N {
				return;
			}
			compress(&self.buf);
			self.pos = 0;
		}

		let (blocks, rest) = data.as_chunks::<N>();
		for block in blocks {
			compress(block);
		}
		self.buf[..rest.len()].copy_from_slice(rest);
		self.pos = rest.len();
	}

	/// Appends the `0x80` terminator, zero fill and the encoded message
	/// `length`, then compresses the final block(s).
	///
	/// An extra block is emitted when the length field does not fit behind
	/// the terminator.
	pub(crate) fn finish(&mut self, length: &[u8], mut compress: impl FnMut(&[u8; N])) {
		debug_assert!(length.len() < N);

		self.buf[self.pos] = 0x80;
		self.pos += 1;

		if N - self.pos < length.len() {
			self.buf[self.pos..].fill(0);
			compress(&self.buf);
			self.pos = 0;
		}

		let length_at = N - length.len();
		self.buf[self.pos..length_at].fill(0);
		self.buf[length_at..].copy_from_slice(length);
		compress(&self.buf);
		self.pos = 0;
	}
}
