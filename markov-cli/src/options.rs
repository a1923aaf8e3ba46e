use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors surfaced by typed option retrieval.
#[derive(Debug, Error)]
pub enum OptionError {
    /// The named option did not appear on the command line.
    #[error("option {0:?} was not supplied")]
    NotFound(String),

    /// The named option appeared but carried no value.
    #[error("option {0:?} has no value")]
    NoValue(String),

    /// The value could not be parsed as the requested type.
    #[error("option {name:?}: cannot parse {value:?}: {reason}")]
    Invalid {
        name: String,
        value: String,
        reason: String,
    },
}

/// A named `--option`, possibly with the argument that followed it.
#[derive(Debug)]
struct NamedOption {
    name: String,
    value: Option<String>,
}

/// Generic command-line argument splitter.
///
/// Arguments starting with `--` are named options; when the token right
/// after an option is not itself an option it is consumed as that option's
/// value, except that an empty token counts as no value. Every other token
/// is positional, in order. The splitter is purely syntactic and knows
/// nothing about which options the pipeline uses.
#[derive(Debug)]
pub struct ProgramOptions {
    named: Vec<NamedOption>,
    positional: Vec<String>,
}

impl ProgramOptions {
    /// Splits raw arguments into named options and positionals.
    ///
    /// Pass the arguments without the program name, e.g.
    /// `ProgramOptions::parse(env::args().skip(1))`.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let arguments: Vec<String> = args.into_iter().map(Into::into).collect();

        let mut named = Vec::new();
        let mut positional = Vec::new();

        let mut i = 0;
        while i < arguments.len() {
            let argument = &arguments[i];
            if is_option(argument) {
                // Consume the next token as the value unless it is an
                // option itself. An empty token is consumed too, but
                // counts as no value.
                let mut value = None;
                if let Some(next) = arguments.get(i + 1) {
                    if !is_option(next) {
                        if !next.is_empty() {
                            value = Some(next.clone());
                        }
                        i += 1;
                    }
                }
                named.push(NamedOption { name: argument.clone(), value });
            } else {
                positional.push(argument.clone());
            }
            i += 1;
        }

        Self { named, positional }
    }

    /// Checks whether a named option is present, optionally requiring it
    /// to carry a non-empty value.
    pub fn has(&self, name: &str, require_value: bool) -> bool {
        match self.find(name) {
            Some(option) => !require_value || option.value.is_some(),
            None => false,
        }
    }

    /// Parses the value of a named option into `T`.
    ///
    /// # Errors
    /// - [`OptionError::NotFound`] when the option is absent
    /// - [`OptionError::NoValue`] when it was given without a value
    /// - [`OptionError::Invalid`] when the value does not parse as `T`,
    ///   carrying the parse failure as the reason
    pub fn get<T>(&self, name: &str) -> Result<T, OptionError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let option = self
            .find(name)
            .ok_or_else(|| OptionError::NotFound(name.to_owned()))?;
        let value = option
            .value
            .as_ref()
            .ok_or_else(|| OptionError::NoValue(name.to_owned()))?;

        value.parse::<T>().map_err(|error| OptionError::Invalid {
            name: name.to_owned(),
            value: value.clone(),
            reason: error.to_string(),
        })
    }

    /// Positional arguments in the order they appeared.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// First stored option matching `name`; earlier occurrences shadow
    /// later ones.
    fn find(&self, name: &str) -> Option<&NamedOption> {
        self.named.iter().find(|option| option.name == name)
    }
}

/// Checks whether an argument token introduces a named option.
fn is_option(argument: &str) -> bool {
    argument.starts_with("--")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_follows_its_option() {
        let options = ProgramOptions::parse(["--len", "3", "corpus.txt"]);

        assert!(options.has("--len", true));
        assert_eq!(options.get::<usize>("--len").unwrap(), 3);
        assert_eq!(options.positional(), &["corpus.txt"]);
    }

    #[test]
    fn adjacent_options_leave_no_value() {
        let options = ProgramOptions::parse(["--flag", "--other"]);

        assert!(options.has("--flag", false));
        assert!(!options.has("--flag", true));
        assert!(options.has("--other", false));
        assert!(options.positional().is_empty());
    }

    #[test]
    fn positionals_keep_their_order() {
        let options = ProgramOptions::parse(["first", "--len", "3", "second", "third"]);

        assert_eq!(options.positional(), &["first", "second", "third"]);
    }

    #[test]
    fn missing_option_is_not_found() {
        let options = ProgramOptions::parse(["corpus.txt"]);

        assert!(!options.has("--len", false));
        assert!(matches!(
            options.get::<usize>("--len"),
            Err(OptionError::NotFound(_))
        ));
    }

    #[test]
    fn valueless_option_cannot_convert() {
        let options = ProgramOptions::parse(["--len", "--other"]);

        assert!(matches!(
            options.get::<usize>("--len"),
            Err(OptionError::NoValue(_))
        ));
    }

    #[test]
    fn empty_value_counts_as_no_value() {
        let options = ProgramOptions::parse(["--len", "", "corpus.txt"]);

        assert!(options.has("--len", false));
        assert!(!options.has("--len", true));
        assert!(matches!(
            options.get::<usize>("--len"),
            Err(OptionError::NoValue(_))
        ));
        // The empty token was still consumed, not left positional.
        assert_eq!(options.positional(), &["corpus.txt"]);
    }

    #[test]
    fn unparseable_value_reports_the_reason() {
        let options = ProgramOptions::parse(["--len", "three"]);

        match options.get::<usize>("--len") {
            Err(OptionError::Invalid { name, value, reason }) => {
                assert_eq!(name, "--len");
                assert_eq!(value, "three");
                assert!(!reason.is_empty());
            }
            other => panic!("expected a conversion error, got {other:?}"),
        }
    }

    #[test]
    fn first_occurrence_wins_for_lookups() {
        let options = ProgramOptions::parse(["--len", "3", "--len", "4"]);

        assert_eq!(options.get::<usize>("--len").unwrap(), 3);
    }

    #[test]
    fn typed_values_beyond_integers_parse_too() {
        let options = ProgramOptions::parse(["--ratio", "0.5"]);

        assert_eq!(options.get::<f64>("--ratio").unwrap(), 0.5);
    }
}
