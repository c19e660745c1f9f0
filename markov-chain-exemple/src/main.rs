use std::path::PathBuf;

use clap::Parser;
use markov_chain_core::io::read_text;
use markov_chain_core::{ChainModel, GenerationInput};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(author, version, about = "Generate text from a character-level Markov chain")]
struct Cli {
    /// Training text file
    #[arg(required_unless_present = "text")]
    input: Option<PathBuf>,

    /// Inline training text (instead of a file)
    #[arg(long, conflicts_with = "input")]
    text: Option<String>,

    /// Chain order (values <= 0 are treated as 1)
    #[arg(short, long, default_value_t = 3, allow_negative_numbers = true)]
    order: isize,

    /// Number of sequences to generate
    #[arg(short, long, default_value_t = 5)]
    count: usize,

    /// Maximum characters per sequence (0 = unbounded)
    #[arg(long, default_value_t = 0)]
    max_len: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Print the transition table as JSON and exit
    #[arg(long)]
    dump_chain: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    // Either the inline text or the file content
    let text = match (&cli.text, &cli.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => read_text(path)?,
        (None, None) => return Err("No training text given".into()),
    };

    let model = ChainModel::new(&text, cli.order);
    log::info!("Model ready: order {}, {} windows", model.order(), model.chain().len());

    if cli.dump_chain {
        println!("{}", serde_json::to_string_pretty(model.chain())?);
        return Ok(());
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let input = GenerationInput::default().with_max_len(cli.max_len);

    for i in 0..cli.count {
        let mut generation = model.generate_with(&mut rng, input);
        let output: String = generation.by_ref().collect();
        let truncated = generation.truncated();
        generation.finish()?;
        println!("Generated {}{}: {}", i + 1, if truncated { " (truncated)" } else { "" }, output);
    }

    Ok(())
}
