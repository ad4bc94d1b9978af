//! Text-mode example.
//!
//! Writes the same lines with LF and CRLF terminators and shows that text
//! mode hashes both alike while binary mode does not.
//!
//! Run with:
//!     cargo run --example text_mode

use std::io::Write;

use filedigest::{DigestAlgorithm, DigestOptions, hash_file_sync};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let lf = dir.path().join("lf.txt");
    let crlf = dir.path().join("crlf.txt");

    std::fs::File::create(&lf)?.write_all(b"first\nsecond\n\nlast")?;
    std::fs::File::create(&crlf)?.write_all(b"first\r\nsecond\r\n\r\nlast")?;

    let binary = DigestOptions::default();
    let text = binary.with_text_mode(true);

    for (label, options) in [("binary", binary), ("text", text)] {
        let a = hash_file_sync(&lf, DigestAlgorithm::Sha256, &options)?;
        let b = hash_file_sync(&crlf, DigestAlgorithm::Sha256, &options)?;
        println!("{label:>6}: lf={a}");
        println!("{label:>6}: crlf={b}");
        println!("{label:>6}: equal={}\n", a == b);
    }

    Ok(())
}
