//! Async block stream example.
//!
//! Drives the partial-read stream by hand and feeds each block into an
//! accumulator, printing where every sampled block came from.
//!
//! Run with:
//!     cargo run --example async_stream -- /path/to/file

use std::env;

use futures_util::StreamExt;
use tokio_util::compat::TokioAsyncReadCompatExt;

use filedigest::{Chunk, DigestAccumulator, DigestAlgorithm, ReadCursor, chunk_async};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    let file = tokio::fs::File::open(&path).await?;
    let mut stream = chunk_async(file.compat(), ReadCursor::partial(1024, 1.0));
    let mut acc = DigestAccumulator::new(DigestAlgorithm::Md5);

    let mut previous: Option<Chunk> = None;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        let gap = previous.as_ref().map_or(0, |p| chunk.gap_after(p));
        println!("{chunk} (skipped {gap})");
        acc.update(&chunk.data);
        previous = Some(chunk);
    }

    let sampled = acc.bytes_hashed();
    println!("\n{sampled} bytes sampled, md5 {}", acc.finalize());

    Ok(())
}
