//! Converts an Ed25519 public key from a PEM container to its multibase
//! multikey form, decodes it back, and verifies the round-trip.

use anyhow::{Context, Result};
use clap::Parser;
use multikey_encoding::{decode_public_key_pem, ed25519, encode_multikey};
use std::{fs, path::PathBuf};
use tracing::debug;
use tracing_subscriber::filter;

/// Convert a PEM public key to and from multibase encoding
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the PEM file containing the public key
    pem_file: PathBuf,

    /// Also print the key as a did:key identifier
    #[arg(long)]
    did: bool,
}

fn main() -> Result<()> {
    // construct a subscriber that prints formatted traces to stdout
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter::EnvFilter::from_default_env())
        .finish();
    // use that subscriber to process traces emitted after this point
    tracing::subscriber::set_global_default(subscriber).expect("Logging failed, exiting...");

    let args = Args::parse();

    let pem = fs::read_to_string(&args.pem_file)
        .with_context(|| format!("Couldn't read PEM file: {}", args.pem_file.display()))?;
    println!("Loaded PEM public key from: {}", args.pem_file.display());

    let original = decode_public_key_pem(&pem)?;
    debug!("extracted {} raw key bytes from container", original.len());

    let multibase = encode_multikey(&original)?;
    println!("Multibase: {multibase}");
    if args.did {
        println!("DID: {}", ["did:key:", &multibase].concat());
    }

    let recovered = ed25519::verifying_key_from_multikey(&multibase)?.to_bytes();
    println!("Raw key length: {}", recovered.len());
    println!("Raw key hex: {}", hex::encode(recovered));
    println!("Original key length: {}", original.len());
    println!("Original key hex: {}", hex::encode(original));
    println!("Keys match: {}", recovered == original);

    Ok(())
}
