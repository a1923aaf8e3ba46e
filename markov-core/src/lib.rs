//! Prefix-based Markov chain text generation.
//!
//! This crate implements a complete one-shot pipeline for training and
//! sampling a word-level Markov chain:
//! - Tokenization of raw text into word and punctuation tokens, with
//!   whitespace-normalizing round-trips
//! - Chain database construction mapping fixed-length token prefixes to the
//!   words observed to follow them
//! - Random-walk generation over the database with a caller-supplied random
//!   source
//! - Corpus loading helpers
//!
//! The corpus is read once, the database is built once, and generation only
//! ever reads it; nothing is persisted across runs.

/// Core pipeline: tokenizer, chain database and generator.
pub mod model;

/// Corpus I/O (whole-file reads).
pub mod io;

/// Error type shared by the pipeline.
pub mod error;

pub use error::MarkovError;
