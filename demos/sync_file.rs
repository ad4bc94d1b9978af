//! File digest example.
//!
//! Prints every supported digest of a file, in full and partial mode.
//!
//! Run with:
//!     RUST_LOG=filedigest=debug cargo run --example sync_file -- /path/to/file

use std::env;

use filedigest::{DigestAlgorithm, DigestOptions, Encoding, hash_file_sync};
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());
    let encoding = env::args()
        .nth(2)
        .map(|name| Encoding::parse(&name))
        .transpose()?
        .unwrap_or_default();

    println!("Hashing file: {path} ({encoding})\n");

    let full = DigestOptions::default().with_encoding(encoding);
    let partial = full.with_partial(true);

    for algorithm in DigestAlgorithm::iter() {
        println!("{:>7} full:    {}", algorithm, hash_file_sync(&path, algorithm, &full)?);
        println!("{:>7} partial: {}", algorithm, hash_file_sync(&path, algorithm, &partial)?);
    }

    Ok(())
}
