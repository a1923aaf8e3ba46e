/// Punctuation characters that form tokens of their own.
///
/// A token counts as punctuation when it is exactly one character long and
/// that character appears in this set.
pub const PUNCTUATION: &str = ",;:.!?";

/// Checks whether a token is a punctuation token.
///
/// Longer tokens are always words, even when they end with a punctuation
/// character.
pub fn is_punctuation(token: &str) -> bool {
	let mut chars = token.chars();
	match (chars.next(), chars.next()) {
		(Some(c), None) => PUNCTUATION.contains(c),
		_ => false,
	}
}

/// Splits text into its sequence of word and punctuation tokens.
///
/// The input is first split on whitespace (newlines count as ordinary
/// whitespace). A raw word longer than one character that ends with a
/// punctuation character is emitted as two tokens: the word without its
/// final character, then that character on its own.
///
/// # Notes
/// - Only the last character is inspected, so chapter numbers like "1.2"
///   and inner abbreviation dots stay untouched.
/// - Any input, including the empty string, yields a (possibly empty)
///   sequence; there is no error case.
/// - The generator re-splits prefix keys with this same function, which
///   keeps the walk consistent with how the keys were built.
pub fn tokenize(text: &str) -> Vec<String> {
	let mut tokens = Vec::new();

	for raw in text.split_whitespace() {
		match raw.char_indices().last() {
			// Split off the final character when it is trailing punctuation
			// on a longer word.
			Some((index, last)) if index > 0 && PUNCTUATION.contains(last) => {
				tokens.push(raw[..index].to_owned());
				tokens.push(raw[index..].to_owned());
			}
			_ => tokens.push(raw.to_owned()),
		}
	}

	tokens
}

/// Joins a sequence of tokens back into a readable string.
///
/// Word tokens are separated by single spaces; punctuation tokens are
/// appended directly so no space ever precedes them. The first token never
/// gets a leading space. This is the canonical rendering used both for
/// chain database keys and for generated output, so its spacing rule must
/// stay the exact inverse of [`tokenize`].
pub fn join<I, S>(tokens: I) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut result = String::new();

	for (i, token) in tokens.into_iter().enumerate() {
		let token = token.as_ref();
		if is_punctuation(token) {
			// No whitespace in front of punctuation.
			result.push_str(token);
		} else {
			if i > 0 {
				result.push(' ');
			}
			result.push_str(token);
		}
	}

	result
}
