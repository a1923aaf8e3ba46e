//! Top-level module for the Markov chain pipeline.
//!
//! The pipeline flows strictly forward:
//! raw text -> [`tokenizer`] -> token sequence -> [`chain`] -> database ->
//! [`generator`] -> output text. The joiner in [`tokenizer`] is shared by
//! the last two stages so that prefix keys and rendered output follow the
//! same spacing rule.

/// Tokenizer and joiner for word/punctuation sequences.
///
/// Splitting strips a single trailing punctuation character off longer
/// words; joining is the canonical rendering that never puts a space in
/// front of punctuation.
pub mod tokenizer;

/// Prefix-to-successor chain database.
///
/// Single-pass construction over a token sequence with a fixed-size sliding
/// window, plus uniform random selection helpers used during generation.
pub mod chain;

/// Random-walk text generator.
///
/// Borrows a read-only database together with a caller-supplied random
/// source and renders the generated text.
pub mod generator;
