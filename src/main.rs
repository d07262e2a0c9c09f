use bombe::config::SearchParams;
use bombe::consts::index_letter;
use bombe::error::{BombeError, BombeResult};
use bombe::scorer::TrigramModel;
use bombe::search::{CancelToken, KeySpace};
use clap::Parser;
use std::process;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the ciphertext resource (letters A-Z only, no separators).
    ciphertext: String,

    /// Path to the trigram frequency corpus.
    #[arg(short, long, default_value = "english_trigrams.txt")]
    trigrams: String,

    #[command(flatten)]
    params: SearchParams,
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> BombeResult<()> {
    let ciphertext = load_ciphertext(&cli.ciphertext)?;
    info!("loaded {} letters of ciphertext", ciphertext.len());

    let model = TrigramModel::from_path(&cli.trigrams)?;
    info!("trigram corpus holds {} entries", model.len());

    let space = KeySpace::new(cli.params.base_config()?, cli.params.pool.clone());
    info!("searching {} candidate configurations", space.candidate_count());

    let result = space.run(&ciphertext, &model, &CancelToken::new())?;
    let config = &result.best.config;

    println!("Plain Text:");
    println!("{}", String::from_utf8_lossy(&result.plaintext));
    println!(
        "{}",
        config
            .slots
            .iter()
            .map(|s| s.rotor.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
    println!(
        "{}",
        config
            .slots
            .iter()
            .map(|s| (index_letter(s.start) as char).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
    println!("{}", config.plugboard);
    Ok(())
}

fn load_ciphertext(path: &str) -> BombeResult<Vec<u8>> {
    let raw = std::fs::read_to_string(path)?;
    let text = raw.trim();
    if let Some(bad) = text.bytes().find(|b| !b.is_ascii_uppercase()) {
        return Err(BombeError::Validation(format!(
            "ciphertext may only contain letters A-Z, found '{}'",
            bad as char
        )));
    }
    Ok(text.as_bytes().to_vec())
}
