use std::collections::{BTreeMap, VecDeque};

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::tokenizer::join;

/// Chain database mapping fixed-length prefixes to observed successors.
///
/// Keys are windows of `prefix_length` consecutive tokens rendered with the
/// joiner; values are every token seen right after that window, in corpus
/// order and with duplicates retained. The duplicates are what make a
/// position-uniform pick over a successor list frequency-weighted.
///
/// # Responsibilities
/// - Build the mapping in a single pass over the token sequence
/// - Answer successor lookups during generation
/// - Draw uniformly random prefixes and successors from a caller-supplied RNG
///
/// # Invariants
/// - Every successor list holds at least one entry
/// - Keys iterate in a stable sorted order (`BTreeMap`), so drawing a key by
///   offset is uniform over distinct prefixes regardless of how the map is
///   stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainDatabase {
	/// Window length the database was built with.
	prefix_length: usize,
	/// Prefix key to successor tokens, insertion order preserved per key.
	entries: BTreeMap<String, Vec<String>>,
}

impl ChainDatabase {
	/// Builds the database from a token sequence in one linear pass.
	///
	/// The sliding window starts as `prefix_length` empty placeholders, so
	/// the first windows produce keys with empty components; those keys are
	/// kept verbatim and are valid start prefixes. For every token that has
	/// a successor, that successor is appended to the entry keyed by the
	/// joined window.
	///
	/// # Notes
	/// - A `prefix_length` of 0 keeps the window empty; every successor then
	///   accumulates under the empty-string key. Degenerate, but accepted.
	/// - Sequences with fewer than two tokens produce an empty database.
	pub fn build(tokens: &[String], prefix_length: usize) -> Self {
		let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
		let mut window: VecDeque<String> = VecDeque::from(vec![String::new(); prefix_length]);

		for (i, token) in tokens.iter().enumerate() {
			// Slide: push the newest token, evict the oldest, so the window
			// size stays at prefix_length.
			window.push_back(token.clone());
			if window.len() > prefix_length {
				window.pop_front();
			}

			if i + 1 < tokens.len() {
				let prefix = join(&window);
				entries.entry(prefix).or_default().push(tokens[i + 1].clone());
			}
		}

		debug!(
			"chain database: {} prefixes from {} tokens (prefix length {})",
			entries.len(),
			tokens.len(),
			prefix_length
		);

		Self { prefix_length, entries }
	}

	/// Window length the database was built with.
	pub fn prefix_length(&self) -> usize {
		self.prefix_length
	}

	/// Number of distinct prefixes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Checks whether the database holds no prefixes at all.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the successor list recorded for `prefix`, if any.
	pub fn successors(&self, prefix: &str) -> Option<&[String]> {
		self.entries.get(prefix).map(Vec::as_slice)
	}

	/// Iterates over all prefix keys in their stable sorted order.
	pub fn prefixes(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Picks a random prefix, uniform over the distinct keys rather than
	/// weighted by successor counts.
	///
	/// Returns `None` if the database is empty.
	pub fn random_prefix<R: Rng>(&self, rng: &mut R) -> Option<&str> {
		if self.entries.is_empty() {
			return None;
		}

		// Advance the ordered key iterator by a random offset; iteration
		// order is stable, so every key is equally likely.
		let offset = rng.random_range(0..self.entries.len());
		self.entries.keys().nth(offset).map(String::as_str)
	}

	/// Picks a random successor of `prefix`, uniform over list positions so
	/// that repeated successors carry their observed frequency.
	///
	/// Returns `None` if the prefix is unknown.
	pub fn random_successor<R: Rng>(&self, prefix: &str, rng: &mut R) -> Option<&str> {
		self.entries
			.get(prefix)
			.and_then(|successors| successors.choose(rng))
			.map(String::as_str)
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn words(raw: &[&str]) -> Vec<String> {
		raw.iter().map(|w| w.to_string()).collect()
	}

	#[test]
	fn records_successors_in_corpus_order() {
		let tokens = words(&["a", "b", "a", "b", "a", "c"]);
		let db = ChainDatabase::build(&tokens, 1);

		assert_eq!(db.prefix_length(), 1);
		assert_eq!(db.len(), 2);
		assert_eq!(db.successors("a").unwrap(), &["b", "b", "c"]);
		assert_eq!(db.successors("b").unwrap(), &["a", "a"]);
	}

	#[test]
	fn last_token_contributes_no_successor() {
		let tokens = words(&["a", "b", "c"]);
		let db = ChainDatabase::build(&tokens, 1);

		assert_eq!(db.successors("c"), None);
	}

	#[test]
	fn initial_windows_keep_placeholders() {
		let tokens = words(&["The", "cat"]);
		let db = ChainDatabase::build(&tokens, 2);

		// The very first window still contains one empty placeholder.
		assert_eq!(db.len(), 1);
		assert_eq!(db.successors(" The").unwrap(), &["cat"]);
	}

	#[test]
	fn punctuation_joins_into_keys_without_spaces() {
		let tokens = words(&["cat", ".", "The"]);
		let db = ChainDatabase::build(&tokens, 2);

		assert_eq!(db.successors("cat.").unwrap(), &["The"]);
	}

	#[test]
	fn short_sequences_build_nothing() {
		assert!(ChainDatabase::build(&[], 2).is_empty());
		assert!(ChainDatabase::build(&words(&["only"]), 2).is_empty());
	}

	#[test]
	fn zero_prefix_length_keys_everything_on_the_empty_string() {
		let tokens = words(&["a", "b", "c"]);
		let db = ChainDatabase::build(&tokens, 0);

		assert_eq!(db.len(), 1);
		assert_eq!(db.successors("").unwrap(), &["b", "c"]);
	}

	#[test]
	fn random_prefix_is_none_on_empty() {
		let db = ChainDatabase::build(&[], 3);
		let mut rng = StdRng::seed_from_u64(1);

		assert_eq!(db.random_prefix(&mut rng), None);
	}

	#[test]
	fn random_successor_is_none_for_unknown_prefix() {
		let tokens = words(&["a", "b"]);
		let db = ChainDatabase::build(&tokens, 1);
		let mut rng = StdRng::seed_from_u64(3);

		assert_eq!(db.random_successor("missing", &mut rng), None);
	}

	#[test]
	fn random_picks_stay_inside_observed_data() {
		let tokens = words(&["a", "b", "a", "c", "a", "b"]);
		let db = ChainDatabase::build(&tokens, 1);
		let mut rng = StdRng::seed_from_u64(7);

		for _ in 0..64 {
			let prefix = db.random_prefix(&mut rng).unwrap().to_owned();
			let successors = db.successors(&prefix).unwrap();

			let successor = db.random_successor(&prefix, &mut rng).unwrap();
			assert!(successors.iter().any(|s| s == successor));
		}
	}
}
