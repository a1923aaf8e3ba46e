mod options;

use std::env;
use std::error::Error;

use log::info;
use markov_core::io::read_corpus;
use markov_core::model::chain::ChainDatabase;
use markov_core::model::generator::Generator;
use markov_core::model::tokenizer::tokenize;

use crate::options::ProgramOptions;

/// Prefix length used when --len is not given.
const DEFAULT_PREFIX_LENGTH: usize = 2;

/// Walk length used when --iterations is not given.
const DEFAULT_ITERATIONS: usize = 100;

const USAGE: &str = "Usage: markov-cli [--len N] [--iterations N] <corpus>

Builds a Markov chain from the corpus file and prints generated text.

  --len N         prefix length in tokens (default 2)
  --iterations N  number of generation steps (default 100)
  --help          show this message";

/// Pipeline parameters resolved from the parsed command line.
#[derive(Debug)]
struct Parameters {
    prefix_length: usize,
    num_iterations: usize,
}

impl Parameters {
    /// Resolves the numeric options, falling back to the defaults when an
    /// option is absent.
    ///
    /// # Errors
    /// Fails when a supplied value does not parse as `usize`, or when
    /// `--iterations` is 0 (the walk needs at least one step).
    fn resolve(options: &ProgramOptions) -> Result<Self, Box<dyn Error>> {
        let prefix_length = if options.has("--len", false) {
            options.get::<usize>("--len")?
        } else {
            DEFAULT_PREFIX_LENGTH
        };

        let num_iterations = if options.has("--iterations", false) {
            options.get::<usize>("--iterations")?
        } else {
            DEFAULT_ITERATIONS
        };
        if num_iterations == 0 {
            return Err("--iterations must be at least 1".into());
        }

        Ok(Self { prefix_length, num_iterations })
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let options = ProgramOptions::parse(env::args().skip(1));

    if options.has("--help", false) {
        println!("{USAGE}");
        return Ok(());
    }

    let Some(corpus_path) = options.positional().first() else {
        eprintln!("{USAGE}");
        return Err("missing corpus file argument".into());
    };
    let parameters = Parameters::resolve(&options)?;

    let text = read_corpus(corpus_path)?;
    let tokens = tokenize(&text);
    info!("corpus {corpus_path:?}: {} tokens", tokens.len());

    let database = ChainDatabase::build(&tokens, parameters.prefix_length);
    info!(
        "chain database: {} prefixes (prefix length {})",
        database.len(),
        database.prefix_length()
    );

    let mut generator = Generator::new(&database, rand::rng());
    let output = generator.generate(parameters.num_iterations)?;
    info!(
        "generated {} characters over {} iterations",
        output.len(),
        parameters.num_iterations
    );

    println!("{output}");

    Ok(())
}
