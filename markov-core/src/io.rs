use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::MarkovError;

/// Reads a whole corpus file into memory as one string.
///
/// Line breaks carry no meaning for the pipeline, the tokenizer treats
/// them as ordinary whitespace, so the text is returned unsplit.
///
/// # Errors
/// Returns [`MarkovError::Corpus`] naming the path if the file cannot be
/// opened or read.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<String, MarkovError> {
	let path = path.as_ref();
	let mut contents = String::new();

	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|source| MarkovError::Corpus { path: path.to_path_buf(), source })?;

	Ok(contents)
}
