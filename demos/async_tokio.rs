//! Concurrent async hashing example.
//!
//! Hashes several files at once on the tokio runtime. Each call owns its
//! own digest state, so one `Digester` can be shared by every task.
//!
//! Run with:
//!     cargo run --example async_tokio -- FILE...

use std::env;

use filedigest::{DigestAlgorithm, DigestOptions, Digester, Encoding};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        paths = vec!["Cargo.toml".into(), "README.md".into()];
    }

    let digester = Digester::new(DigestAlgorithm::Sha512)
        .with_options(DigestOptions::default().with_encoding(Encoding::Base64Url));

    let handles: Vec<_> = paths
        .into_iter()
        .map(move |path| {
            tokio::spawn(async move {
                let digest = digester.hash_file(&path).await;
                (path, digest)
            })
        })
        .collect();

    for handle in handles {
        let (path, digest) = handle.await?;
        match digest {
            Ok(digest) => println!("{digest}  {path}"),
            Err(e) => eprintln!("{path}: {e}"),
        }
    }

    Ok(())
}
