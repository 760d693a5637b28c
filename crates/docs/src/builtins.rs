//! The `core::default::Default` implementor table.
//!
//! Each row is expanded at compile time into the exact descriptor markup the
//! renderer expects, so the table below stays readable while the strings stay
//! byte-for-byte stable.

use crate::map::ImplementorMap;

/// Path of the trait this table documents.
pub const DEFAULT_TRAIT: &str = "core::default::Default";

macro_rules! default_implementors {
	(
		$(
			$krate:literal => [
				$( ($kind:literal, $href:literal, $title:literal, $name:literal) ),* $(,)?
			]
		),* $(,)?
	) => {
		&[
			$(
				(
					$krate,
					&[
						$(
							concat!(
								"impl <a class='trait' href='https://doc.rust-lang.org/nightly/core/default/trait.Default.html' title='core::default::Default'>Default</a> for <a class='",
								$kind, "' href='", $href, "' title='", $title, "'>", $name, "</a>"
							)
						),*
					],
				)
			),*
		]
	};
}

/// Crate name -> rendered `impl Default for ...` lines, in display order.
pub static DEFAULT_IMPLEMENTORS: &[(&str, &[&str])] = default_implementors! {
	"typenum" => [
		("enum", "typenum/bit/enum.B0.html", "typenum::bit::B0", "B0"),
		("enum", "typenum/bit/enum.B1.html", "typenum::bit::B1", "B1"),
		("enum", "typenum/uint/enum.UTerm.html", "typenum::uint::UTerm", "UTerm"),
		("enum", "typenum/int/enum.Z0.html", "typenum::int::Z0", "Z0"),
		("enum", "typenum/enum.Greater.html", "typenum::Greater", "Greater"),
		("enum", "typenum/enum.Less.html", "typenum::Less", "Less"),
		("enum", "typenum/enum.Equal.html", "typenum::Equal", "Equal"),
	],
	"libc" => [],
	"rand" => [
		("struct", "rand/reseeding/struct.ReseedWithDefault.html", "rand::reseeding::ReseedWithDefault", "ReseedWithDefault"),
	],
	"octavo_digest" => [
		("struct", "octavo_digest/md5/struct.Md5.html", "octavo_digest::md5::Md5", "Md5"),
		("struct", "octavo_digest/ripemd/struct.Ripemd160.html", "octavo_digest::ripemd::Ripemd160", "Ripemd160"),
		("struct", "octavo_digest/sha1/struct.Sha1.html", "octavo_digest::sha1::Sha1", "Sha1"),
		("struct", "octavo_digest/sha2/struct.Sha224.html", "octavo_digest::sha2::Sha224", "Sha224"),
		("struct", "octavo_digest/sha2/struct.Sha256.html", "octavo_digest::sha2::Sha256", "Sha256"),
		("struct", "octavo_digest/sha2/struct.Sha384.html", "octavo_digest::sha2::Sha384", "Sha384"),
		("struct", "octavo_digest/sha2/struct.Sha512.html", "octavo_digest::sha2::Sha512", "Sha512"),
		("struct", "octavo_digest/sha2/struct.Sha512224.html", "octavo_digest::sha2::Sha512224", "Sha512224"),
		("struct", "octavo_digest/sha2/struct.Sha512256.html", "octavo_digest::sha2::Sha512256", "Sha512256"),
		("struct", "octavo_digest/sha3/struct.Sha224.html", "octavo_digest::sha3::Sha224", "Sha224"),
		("struct", "octavo_digest/sha3/struct.Sha256.html", "octavo_digest::sha3::Sha256", "Sha256"),
		("struct", "octavo_digest/sha3/struct.Sha384.html", "octavo_digest::sha3::Sha384", "Sha384"),
		("struct", "octavo_digest/sha3/struct.Sha512.html", "octavo_digest::sha3::Sha512", "Sha512"),
		("struct", "octavo_digest/tiger/struct.Tiger.html", "octavo_digest::tiger::Tiger", "Tiger"),
		("struct", "octavo_digest/tiger/struct.Tiger2.html", "octavo_digest::tiger::Tiger2", "Tiger2"),
		("struct", "octavo_digest/whirlpool/struct.Whirlpool.html", "octavo_digest::whirlpool::Whirlpool", "Whirlpool"),
	],
	"num_bigint" => [
		("struct", "num_bigint/struct.BigUint.html", "num_bigint::BigUint", "BigUint"),
		("struct", "num_bigint/struct.BigInt.html", "num_bigint::BigInt", "BigInt"),
	],
	"octavo" => [
		("struct", "octavo/digest/sha2/struct.Sha224.html", "octavo::digest::sha2::Sha224", "Sha224"),
		("struct", "octavo/digest/sha2/struct.Sha256.html", "octavo::digest::sha2::Sha256", "Sha256"),
		("struct", "octavo/digest/sha2/struct.Sha384.html", "octavo::digest::sha2::Sha384", "Sha384"),
		("struct", "octavo/digest/sha2/struct.Sha512.html", "octavo::digest::sha2::Sha512", "Sha512"),
		("struct", "octavo/digest/sha2/struct.Sha512224.html", "octavo::digest::sha2::Sha512224", "Sha512224"),
		("struct", "octavo/digest/sha2/struct.Sha512256.html", "octavo::digest::sha2::Sha512256", "Sha512256"),
		("struct", "octavo/digest/tiger/struct.Tiger.html", "octavo::digest::tiger::Tiger", "Tiger"),
		("struct", "octavo/digest/tiger/struct.Tiger2.html", "octavo::digest::tiger::Tiger2", "Tiger2"),
		("struct", "octavo/digest/sha3/struct.Sha224.html", "octavo::digest::sha3::Sha224", "Sha224"),
		("struct", "octavo/digest/sha3/struct.Sha256.html", "octavo::digest::sha3::Sha256", "Sha256"),
		("struct", "octavo/digest/sha3/struct.Sha384.html", "octavo::digest::sha3::Sha384", "Sha384"),
		("struct", "octavo/digest/sha3/struct.Sha512.html", "octavo::digest::sha3::Sha512", "Sha512"),
		("struct", "octavo/digest/md5/struct.Md5.html", "octavo::digest::md5::Md5", "Md5"),
		("struct", "octavo/digest/ripemd/struct.Ripemd160.html", "octavo::digest::ripemd::Ripemd160", "Ripemd160"),
		("struct", "octavo/digest/sha1/struct.Sha1.html", "octavo::digest::sha1::Sha1", "Sha1"),
		("struct", "octavo/digest/whirlpool/struct.Whirlpool.html", "octavo::digest::whirlpool::Whirlpool", "Whirlpool"),
	],
};

/// Builds a fresh [`ImplementorMap`] from [`DEFAULT_IMPLEMENTORS`].
pub fn default_implementors() -> ImplementorMap {
	DEFAULT_IMPLEMENTORS.iter().map(|&(krate, descriptors)| (krate, descriptors.to_vec())).collect()
}
