use std::collections::VecDeque;

use log::debug;
use rand::Rng;

use crate::error::MarkovError;
use super::chain::ChainDatabase;
use super::tokenizer::{is_punctuation, join, tokenize};

/// Random-walk text generator over a read-only chain database.
///
/// The generator borrows the database and owns the random source it draws
/// from, so the caller decides whether a run is entropy-seeded (the CLI
/// passes `rand::rng()`) or reproducible (tests pass a seeded `StdRng`).
///
/// # Responsibilities
/// - Pick the starting prefix, uniform over the distinct keys
/// - Walk the chain one successor at a time, sliding the prefix window
/// - Render the output with the canonical joiner spacing
///
/// # Invariants
/// - The database is never mutated; only the RNG and the per-run walk state
///   change
/// - A walk takes exactly `num_iterations` counted steps; only the choices
///   are random
#[derive(Debug)]
pub struct Generator<'a, R> {
	database: &'a ChainDatabase,
	rng: R,
}

impl<'a, R: Rng> Generator<'a, R> {
	/// Creates a generator over `database` drawing from `rng`.
	pub fn new(database: &'a ChainDatabase, rng: R) -> Self {
		Self { database, rng }
	}

	/// Generates text by walking the chain for `num_iterations` steps.
	///
	/// The first iteration appends a uniformly chosen start prefix verbatim;
	/// each following iteration draws a successor of the current prefix,
	/// slides the prefix window forward by one token, and appends the
	/// successor with a separating space unless it is punctuation. Values of
	/// 0 and 1 both yield just the start prefix.
	///
	/// # Errors
	/// - [`MarkovError::EmptyDatabase`] if the database has no entries,
	///   checked before the first draw.
	/// - [`MarkovError::MissingPrefix`] if the walk reaches a prefix with no
	///   entry; see the error's notes on padded start prefixes.
	pub fn generate(&mut self, num_iterations: usize) -> Result<String, MarkovError> {
		let mut prefix = self
			.database
			.random_prefix(&mut self.rng)
			.ok_or(MarkovError::EmptyDatabase)?
			.to_owned();

		debug!("starting walk at prefix {prefix:?}");

		let mut output = prefix.clone();

		for _ in 1..num_iterations {
			let word = self
				.database
				.random_successor(&prefix, &mut self.rng)
				.ok_or_else(|| MarkovError::MissingPrefix(prefix.clone()))?
				.to_owned();

			// Slide the window: re-split the prefix with the tokenizer
			// rule, drop the oldest token, append the new word. Using the
			// same split and join keeps the walk consistent with how the
			// database keys were formed.
			let mut window: VecDeque<String> = tokenize(&prefix).into();
			window.pop_front();
			window.push_back(word.clone());
			prefix = join(&window);

			if !is_punctuation(&word) {
				output.push(' ');
			}
			output.push_str(&word);
		}

		Ok(output)
	}
}
