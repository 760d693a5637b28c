use std::io;
use std::sync::{Arc, Barrier};
use std::thread;

use parking_lot::Mutex;

use pretty_assertions::assert_eq;

use super::*;
use crate::builtins::default_implementors;
use crate::loader::ImplementorLoader;

fn map(entries: &[(&str, &[&str])]) -> ImplementorMap {
	entries.iter().map(|&(k, ds)| (k, ds.to_vec())).collect()
}

fn first_wins() -> DocsConfig {
	DocsConfig {
		duplicate_policy: DuplicatePolicy::FirstWins,
		..DocsConfig::default()
	}
}

fn strings(ds: Option<Vec<Descriptor>>) -> Vec<String> {
	ds.unwrap().into_iter().map(Descriptor::into_string).collect()
}

#[test]
fn init_drains_parked_table() {
	let pending = PendingSlot::new();
	ImplementorLoader::new(None, &pending).load();

	let registry = ImplementorRegistry::init(DocsConfig::default(), &pending);

	assert!(!pending.is_occupied());
	assert_eq!(*registry.snapshot(), default_implementors());
}

#[test]
fn init_with_empty_slot_is_empty() {
	let registry = ImplementorRegistry::init(DocsConfig::default(), &PendingSlot::new());
	assert!(registry.is_empty());
}

#[test]
fn loader_registers_directly_when_registry_exists() {
	let pending = PendingSlot::new();
	let registry = ImplementorRegistry::default();

	ImplementorLoader::new(Some(&registry), &pending).load();

	assert!(!pending.is_occupied());
	assert_eq!(registry.len(), 6);
	assert_eq!(registry.implementors("rand").map(|d| d.len()), Some(1));
}

#[test]
fn last_wins_replaces_crate_list() {
	let registry = ImplementorRegistry::default();
	registry.register(map(&[("a", &["1"]), ("b", &["2"])]));
	registry.register(map(&[("a", &["3", "4"]), ("c", &[])]));

	assert_eq!(registry.crate_names(), ["a", "b", "c"]);
	assert_eq!(strings(registry.implementors("a")), ["3", "4"]);
}

#[test]
fn first_wins_keeps_crate_list() {
	let registry = ImplementorRegistry::new(first_wins());
	registry.register(map(&[("a", &["1"])]));
	registry.register(map(&[("a", &["3"]), ("b", &["2"])]));

	assert_eq!(strings(registry.implementors("a")), ["1"]);
	assert_eq!(strings(registry.implementors("b")), ["2"]);
}

#[test]
fn try_register_rejects_without_applying() {
	let registry = ImplementorRegistry::new(first_wins());
	registry.register(map(&[("a", &["1"])]));

	let err = registry.try_register(map(&[("b", &["2"]), ("a", &["3"])])).unwrap_err();

	assert_eq!(
		err,
		RegisterError::AlreadyIndexed {
			label: "core::default::Default".to_string(),
			krate: "a".to_string(),
		}
	);
	assert_eq!(registry.crate_names(), ["a"]);
	assert!(registry.try_register(map(&[("b", &["2"])])).is_ok());
	assert_eq!(registry.len(), 2);
}

#[test]
fn try_register_under_last_wins_always_applies() {
	let registry = ImplementorRegistry::default();
	registry.register(map(&[("a", &["1"])]));

	assert!(registry.try_register(map(&[("a", &["2"])])).is_ok());
	assert_eq!(strings(registry.implementors("a")), ["2"]);
}

#[test]
fn find_implementor_by_path() {
	let registry = ImplementorRegistry::default();
	registry.register(default_implementors());

	let (krate, relation) = registry.find_implementor("octavo::digest::sha2::Sha512256").unwrap();
	assert_eq!(krate, "octavo");
	assert_eq!(relation.implementor.href, "octavo/digest/sha2/struct.Sha512256.html");

	let (krate, _) = registry.find_implementor("octavo_digest::sha3::Sha224").unwrap();
	assert_eq!(krate, "octavo_digest");

	assert!(registry.find_implementor("octavo_digest::sha2::Sha1").is_none());
}

#[test]
fn snapshot_is_stable_across_writes() {
	let registry = ImplementorRegistry::default();
	registry.register(map(&[("a", &["1"])]));
	let before = registry.snapshot();

	registry.register(map(&[("b", &["2"])]));

	assert_eq!(before.len(), 1);
	assert_eq!(registry.snapshot().len(), 2);
	assert!(!Arc::ptr_eq(&before, &registry.snapshot()));
}

#[test]
fn concurrent_registrations_are_not_lost() {
	let registry = Arc::new(ImplementorRegistry::default());

	let handles: Vec<_> = (0..8)
		.map(|i| {
			let registry = Arc::clone(&registry);
			thread::spawn(move || {
				for j in 0..16 {
					registry.register(map(&[(&format!("crate{i}_{j}"), &["d"])]));
				}
			})
		})
		.collect();
	for handle in handles {
		handle.join().unwrap();
	}

	assert_eq!(registry.len(), 8 * 16);
}

#[test]
fn racing_try_register_admits_exactly_one() {
	for _ in 0..500 {
		let registry = ImplementorRegistry::new(first_wins());
		let barrier = Barrier::new(2);

		let results: Vec<_> = thread::scope(|scope| {
			let handles: Vec<_> = ["left", "right"]
				.map(|side| {
					let (registry, barrier) = (&registry, &barrier);
					scope.spawn(move || {
						barrier.wait();
						(side, registry.try_register(map(&[("a", &[side])])))
					})
				})
				.into_iter()
				.collect();
			handles.into_iter().map(|h| h.join().unwrap()).collect()
		});

		let winners: Vec<&str> = results.iter().filter(|(_, r)| r.is_ok()).map(|(side, _)| *side).collect();
		assert_eq!(winners.len(), 1, "{results:?}");
		assert_eq!(strings(registry.implementors("a")), [winners[0]]);
	}
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.lock().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

fn capture_logs(f: impl FnOnce()) -> String {
	let out = Captured::default();
	let writer = out.clone();
	let subscriber = tracing_subscriber::fmt()
		.with_max_level(tracing::Level::DEBUG)
		.with_ansi(false)
		.with_writer(move || writer.clone())
		.finish();
	tracing::subscriber::with_default(subscriber, f);
	let bytes = out.0.lock().clone();
	String::from_utf8(bytes).unwrap()
}

#[test]
fn kept_crates_are_logged_once_per_registration() {
	let registry = ImplementorRegistry::new(first_wins());
	registry.register(map(&[("a", &["1"]), ("b", &["2"])]));

	let logs = capture_logs(|| registry.register(map(&[("a", &["3"]), ("b", &["4"]), ("c", &["5"])])));

	let kept: Vec<&str> = logs.lines().filter(|l| l.contains("keeping first registration")).collect();
	assert_eq!(kept.len(), 1, "{logs}");
	assert!(kept[0].contains(r#"kept=["a", "b"]"#), "{logs}");
	assert_eq!(strings(registry.implementors("c")), ["5"]);
}
