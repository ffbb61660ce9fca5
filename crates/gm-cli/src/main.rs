//! Command-line interface for `guomi`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gm_core::sm3;
use gm_core::sm4::{Block, Sm4Key};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// SM3/SM4 CLI.
#[derive(Parser)]
#[command(
    name = "guomi",
    version,
    author,
    about = "SM3 hashing and SM4-CBC encryption CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the SM3 digest of a file as hex.
    Hash {
        /// Input file to hash.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
    },
    /// Encrypt a file with SM4 in CBC mode.
    Enc {
        /// SM4 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Initialization vector as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        iv_hex: String,
        /// Input plaintext path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt a file encrypted with SM4 in CBC mode.
    Dec {
        /// SM4 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Initialization vector as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        iv_hex: String,
        /// Input ciphertext path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Run a local demo: hash a sample, encrypt random data, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Hash { input } => cmd_hash(&input),
        Commands::Enc {
            key_hex,
            iv_hex,
            input,
            output,
        } => cmd_enc(&key_hex, &iv_hex, &input, &output),
        Commands::Dec {
            key_hex,
            iv_hex,
            input,
            output,
        } => cmd_dec(&key_hex, &iv_hex, &input, &output),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_hash(input: &PathBuf) -> Result<()> {
    let data = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    println!("{}", hex::encode(sm3::digest(&data)));
    Ok(())
}

fn cmd_enc(key_hex: &str, iv_hex: &str, input: &PathBuf, output: &PathBuf) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let iv = parse_iv_hex(iv_hex)?;
    let data = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    let ciphertext = gm_modes::encrypt(&data, &key, &iv);
    fs::write(output, ciphertext).with_context(|| format!("write {}", output.display()))?;
    Ok(())
}

fn cmd_dec(key_hex: &str, iv_hex: &str, input: &PathBuf, output: &PathBuf) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let iv = parse_iv_hex(iv_hex)?;
    let data = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    let plaintext =
        gm_modes::decrypt(&data, &key, &iv).with_context(|| format!("decrypt {}", input.display()))?;
    fs::write(output, plaintext).with_context(|| format!("write {}", output.display()))?;
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    println!("sm3(\"abc\"): {}", hex::encode(sm3::digest(b"abc")));

    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    let mut iv = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    rng.fill_bytes(&mut iv);
    let key = Sm4Key::from(key_bytes);

    let mut message = vec![0u8; 48];
    rng.fill_bytes(&mut message);
    let plaintext_hex = hex::encode(&message);

    let ciphertext = gm_modes::encrypt(&message, &key, &iv);
    let ciphertext_hex = hex::encode(&ciphertext);

    let decrypted = gm_modes::decrypt(&ciphertext, &key, &iv).context("demo decrypt")?;
    let decrypted_hex = hex::encode(&decrypted);

    println!("demo key: {}", hex::encode(key_bytes));
    println!("demo iv: {}", hex::encode(iv));
    println!("plaintext: {}", plaintext_hex);
    println!("ciphertext: {}", ciphertext_hex);
    println!("decrypted: {}", decrypted_hex);
    if decrypted_hex != plaintext_hex {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Sm4Key> {
    Ok(Sm4Key::from(parse_hex16(hex_str, "key")?))
}

fn parse_iv_hex(hex_str: &str) -> Result<Block> {
    parse_hex16(hex_str, "IV")
}

fn parse_hex16(hex_str: &str, what: &str) -> Result<[u8; 16]> {
    let bytes = hex::decode(hex_str.trim()).with_context(|| format!("decode {} hex", what))?;
    if bytes.len() != 16 {
        bail!("SM4 {} must be 16 bytes (32 hex characters)", what);
    }
    let mut out = [0u8; 16];
    out.copy_from_slice(&bytes);
    Ok(out)
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
