use cipherlens::cipher::Cipher;
use cipherlens::cli::{
    run_decrypt, run_gematria, run_keylen, run_ngrams, run_stats, run_translit, DecryptOptions,
    GematriaOptions, KeylenOptions, NgramOptions, StatsOptions, TranslitOptions,
};
use cipherlens::gematria::Schema;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Version info from build.rs
const VERSION: &str = env!("CIPHERLENS_VERSION");
const BUILD: &str = env!("CIPHERLENS_BUILD");
const PROFILE: &str = env!("CIPHERLENS_PROFILE");
const GIT_HASH: &str = env!("CIPHERLENS_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "cipherlens")]
#[command(author, about = "Classical-cryptanalysis toolkit", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decrypt a ciphertext file with a classical cipher
    #[command(alias = "d")]
    Decrypt {
        /// Ciphertext file
        file: PathBuf,

        /// Cipher family
        #[arg(long, default_value = "vigenere", value_parser = parse_cipher)]
        cipher: Cipher,

        /// Vigenère key (non-letters are stripped)
        #[arg(long)]
        key: Option<String>,

        /// Caesar shift
        #[arg(long)]
        shift: Option<u32>,
    },

    /// Letter frequencies and index of coincidence
    #[command(alias = "s")]
    Stats {
        /// Text file to analyze
        file: PathBuf,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate polyalphabetic key length (Kasiski + column IoC)
    #[command(alias = "k")]
    Keylen {
        /// Ciphertext file
        file: PathBuf,

        /// Shortest repeated sequence considered
        #[arg(long, default_value_t = 3)]
        min_len: usize,

        /// Longest repeated sequence considered
        #[arg(long, default_value_t = 6)]
        max_len: usize,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Most frequent n-grams
    Ngrams {
        /// Text file to analyze
        file: PathBuf,

        /// Window size
        #[arg(short, default_value_t = 3)]
        n: usize,

        /// Number of n-grams to report
        #[arg(long, default_value_t = 10)]
        limit: usize,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Gematria value of a text
    #[command(alias = "g")]
    Gematria {
        /// Text file to evaluate
        file: PathBuf,

        /// Schema (default: all six)
        #[arg(long, value_parser = parse_schema)]
        schema: Option<Schema>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Transliterate a name into uniliteral hieroglyphs
    Translit {
        /// Text file to transliterate
        file: PathBuf,

        /// Print glyphs with sign names and sounds
        #[arg(long)]
        annotate: bool,
    },
}

fn parse_cipher(s: &str) -> Result<Cipher, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn parse_schema(s: &str) -> Result<Schema, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("cipherlens {}", get_version());
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("No command given. Try --help.");
    };

    let report = match command {
        Commands::Decrypt {
            file,
            cipher,
            key,
            shift,
        } => {
            let options = DecryptOptions { cipher, key, shift };
            run_decrypt(&file, &options)?
        }
        Commands::Stats { file, json } => run_stats(&file, &StatsOptions { json })?,
        Commands::Keylen {
            file,
            min_len,
            max_len,
            json,
        } => {
            let options = KeylenOptions {
                min_len,
                max_len,
                json,
            };
            run_keylen(&file, &options)?
        }
        Commands::Ngrams {
            file,
            n,
            limit,
            json,
        } => run_ngrams(&file, &NgramOptions { n, limit, json })?,
        Commands::Gematria { file, schema, json } => {
            run_gematria(&file, &GematriaOptions { schema, json })?
        }
        Commands::Translit { file, annotate } => run_translit(&file, &TranslitOptions { annotate })?,
    };

    print!("{}", report);
    if !report.ends_with('\n') {
        println!();
    }
    Ok(())
}
