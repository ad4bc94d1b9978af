//! Blocking digest paths over `std::io`.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use tracing::debug;

use super::{Digester, absorb_line, access::check_access, require_sequential};
use crate::config::ReadMode;
use crate::error::{DigestError, Result};
use crate::hash::{DigestAccumulator, DigestOutput};
use crate::lines::LineSplitter;
use crate::reader::{ChunkReader, ReadCursor};

impl Digester {
    /// Hashes everything `reader` yields under the configured read mode.
    ///
    /// The reader is consumed from its current position; partial reads seek
    /// relative to that position. Full and text reads never seek or query
    /// the position.
    ///
    /// # Errors
    ///
    /// [`DigestError::InvalidOption`] for invalid options and
    /// [`DigestError::Io`] for read or seek failures.
    pub fn digest_reader<R: Read + Seek>(&self, mut reader: R) -> Result<DigestOutput> {
        let mode = self.prepare()?;
        let block_size = self.options.block_size();

        let chunks = match mode {
            ReadMode::Partial { .. } => {
                let start = reader.stream_position()?;
                let cursor = ReadCursor::for_mode(block_size, mode).starting_at(start);
                ChunkReader::new(reader, cursor)
            }
            ReadMode::Full | ReadMode::Text => ChunkReader::sequential(reader, block_size),
        };
        self.absorb_chunks(chunks, mode)
    }

    /// Hashes a source that cannot seek, such as a pipe or stdin.
    ///
    /// # Errors
    ///
    /// As [`Digester::digest_reader`], plus [`DigestError::InvalidOption`]
    /// when partial reads are requested without text mode.
    pub fn digest_sequential<R: Read>(&self, reader: R) -> Result<DigestOutput> {
        let mode = self.prepare()?;
        require_sequential(mode)?;
        let chunks = ChunkReader::sequential(reader, self.options.block_size());
        self.absorb_chunks(chunks, mode)
    }

    fn absorb_chunks<R: Read>(
        &self,
        chunks: ChunkReader<R>,
        mode: ReadMode,
    ) -> Result<DigestOutput> {
        let mut acc = DigestAccumulator::new(self.algorithm);

        match mode {
            ReadMode::Text => {
                let mut splitter = LineSplitter::with_capacity(self.options.block_size());
                for chunk in chunks {
                    let chunk = chunk?;
                    splitter.push_with(&chunk.data, |line| absorb_line(&mut acc, line));
                }
                if let Some(tail) = splitter.finish() {
                    absorb_line(&mut acc, tail);
                }
                debug!(lines = splitter.lines_emitted(), "text digest complete");
            }
            ReadMode::Full | ReadMode::Partial { .. } => {
                for chunk in chunks {
                    acc.update(&chunk?.data);
                }
            }
        }

        debug!(
            algorithm = %self.algorithm,
            bytes = acc.bytes_hashed(),
            "digest complete"
        );
        Ok(acc.finalize())
    }

    /// Hashes the file at `path` and renders the digest.
    ///
    /// # Errors
    ///
    /// [`DigestError::FileAccess`] if the path is missing, a directory, or
    /// fails to open or read. [`DigestError::InvalidOption`] for invalid
    /// options.
    pub fn hash_file_sync(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        self.options.validate()?;
        check_access(path)?;
        debug!(path = %path.display(), mode = ?self.options.read_mode(), "hashing file");

        let file = File::open(path).map_err(|e| DigestError::Io(e).at_path(path))?;
        let output = self.digest_reader(file).map_err(|e| e.at_path(path))?;
        Ok(self.render(&output))
    }
}
