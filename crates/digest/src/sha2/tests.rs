use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;
use crate::test_support::{hash_in_pieces, hex_digest};

const TWO_BLOCK_256: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
const TWO_BLOCK_512: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

#[rstest]
#[case(b"", "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f")]
#[case(b"abc", "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7")]
#[case(TWO_BLOCK_256, "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525")]
fn sha224_vectors(#[case] input: &[u8], #[case] expected: &str) {
	assert_eq!(hex_digest::<Sha224>(input), expected);
}

#[rstest]
#[case(b"", "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")]
#[case(b"abc", "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")]
#[case(TWO_BLOCK_256, "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1")]
#[case(&[b'x'; 55], "d5e285683cd4efc02d021a5c62014694958901005d6f71e89e0989fac77e4072")]
#[case(&[b'x'; 56], "04c26261370ee7541549d16dee320c723e3fd14671e66a099afe0a377c16888e")]
fn sha256_vectors(#[case] input: &[u8], #[case] expected: &str) {
	assert_eq!(hex_digest::<Sha256>(input), expected);
}

#[rstest]
#[case(b"", "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b")]
#[case(b"abc", "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7")]
#[case(TWO_BLOCK_512, "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712fcc7c71a557e2db966c3e9fa91746039")]
fn sha384_vectors(#[case] input: &[u8], #[case] expected: &str) {
	assert_eq!(hex_digest::<Sha384>(input), expected);
}

#[rstest]
#[case(b"", "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e")]
#[case(b"abc", "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f")]
#[case(TWO_BLOCK_512, "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909")]
// Terminator fits, 128-bit length does not: needs a second block.
#[case(&[b'x'; 117], "d08c1501e4e375cb1c01ab37133df0c8f288975d45286de817068d8678d1452614ab2342d2f5a846dac63b90dcc0d1f06c71d61609ba78d5e10fa49d6c1d3f08")]
fn sha512_vectors(#[case] input: &[u8], #[case] expected: &str) {
	assert_eq!(hex_digest::<Sha512>(input), expected);
}

#[rstest]
#[case(b"", "6ed0dd02806fa89e25de060c19d3ac86cabb87d6a0ddd05c333b84f4")]
#[case(b"abc", "4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa")]
#[case(TWO_BLOCK_512, "23fec5bb94d60b23308192640b0c453335d664734fe40e7268674af9")]
fn sha512_224_vectors(#[case] input: &[u8], #[case] expected: &str) {
	assert_eq!(hex_digest::<Sha512224>(input), expected);
}

#[rstest]
#[case(b"", "c672b8d1ef56ed28ab87c3622c5114069bdd3ad7b8f9737498d0c01ecef0967a")]
#[case(b"abc", "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23")]
#[case(TWO_BLOCK_512, "3928e184fb8690f840da3988121d31be65cb9d3ef83ee6146feac861e19b563a")]
fn sha512_256_vectors(#[case] input: &[u8], #[case] expected: &str) {
	assert_eq!(hex_digest::<Sha512256>(input), expected);
}

#[test]
fn million_a() {
	let data = vec![b'a'; 1_000_000];
	assert_eq!(
		hex_digest::<Sha256>(&data),
		"cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
	);
	assert_eq!(
		hex_digest::<Sha384>(&data),
		"9d0e1809716474cb086e834e310a4a1ced149e9c00f248527972cec5704c2a5b07b8b3dc38ecc4ebae97ddd87f3d8985"
	);
}

#[test]
fn output_sizes() {
	assert_eq!((Sha224::OUTPUT_BYTES, Sha224::BLOCK_BYTES), (28, 64));
	assert_eq!((Sha256::OUTPUT_BYTES, Sha256::BLOCK_BYTES), (32, 64));
	assert_eq!((Sha384::OUTPUT_BYTES, Sha384::BLOCK_BYTES), (48, 128));
	assert_eq!((Sha512::OUTPUT_BYTES, Sha512::BLOCK_BYTES), (64, 128));
	assert_eq!(Sha512224::output_bits(), 224);
	assert_eq!(Sha512256::output_bits(), 256);
}

#[test]
fn finalize_into_checks_length() {
	let mut short = [0u8; 31];
	assert_eq!(
		Sha256::default().finalize_into(&mut short),
		Err(crate::OutputTooShort { needed: 32, got: 31 })
	);

	let mut long = [0xffu8; 40];
	Sha256::default().finalize_into(&mut long).unwrap();
	assert_eq!(&long[..32], &Sha256::digest(b"")[..]);
	assert_eq!(&long[32..], &[0xff; 8]);
}

#[test]
fn clone_forks_running_state() {
	let mut prefix = Sha512::default();
	prefix.update(b"shared prefix ");

	let mut left = prefix.clone();
	left.update(b"left");
	let mut right = prefix;
	right.update(b"right");

	assert_eq!(left.finalize(), Sha512::digest(b"shared prefix left"));
	assert_eq!(right.finalize(), Sha512::digest(b"shared prefix right"));
}

proptest! {
	#[test]
	fn sha256_streaming_matches_one_shot(data in proptest::collection::vec(any::<u8>(), 0..300), cuts in proptest::collection::vec(0usize..300, 0..6)) {
		prop_assert_eq!(hash_in_pieces::<Sha256>(&data, &cuts), Sha256::digest(&data));
	}

	#[test]
	fn sha512_streaming_matches_one_shot(data in proptest::collection::vec(any::<u8>(), 0..600), cuts in proptest::collection::vec(0usize..600, 0..6)) {
		prop_assert_eq!(hash_in_pieces::<Sha512>(&data, &cuts), Sha512::digest(&data));
	}
}
