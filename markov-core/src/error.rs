use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the Markov pipeline.
///
/// Every failure is fatal for the current run; nothing is retried and
/// nothing is swallowed. The variants stay distinguishable so callers and
/// tests can match on the failure kind instead of parsing messages.
#[derive(Debug, Error)]
pub enum MarkovError {
	/// The corpus file could not be opened or read.
	#[error("cannot read corpus {path:?}: {source}")]
	Corpus {
		/// Path the read was attempted on.
		path: PathBuf,
		/// Underlying I/O failure.
		source: io::Error,
	},

	/// The chain database holds no prefixes, so there is nothing to start
	/// a walk from. Happens when the corpus has fewer than two tokens.
	#[error("chain database is empty, no prefix to start from")]
	EmptyDatabase,

	/// A walk step looked up a prefix that is not in the database.
	///
	/// Padded start prefixes lose their placeholder components once the
	/// window is re-split, so short corpora can reach this legitimately;
	/// any other occurrence points at a window bookkeeping bug.
	#[error("prefix {0:?} is not in the chain database")]
	MissingPrefix(String),
}
