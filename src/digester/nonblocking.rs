//! Non-blocking digest paths over `futures-io`, plus the tokio file entry.

use std::io::SeekFrom;

use futures_io::{AsyncRead, AsyncSeek};
use futures_util::StreamExt;
use futures_util::io::AsyncSeekExt;
use tracing::debug;

use super::{Digester, absorb_line, require_sequential};
use crate::async_stream::{ChunkStream, chunk_async};
use crate::config::ReadMode;
use crate::error::Result;
use crate::hash::{DigestAccumulator, DigestOutput};
use crate::lines::LineSplitter;
use crate::reader::ReadCursor;

impl Digester {
    /// Async counterpart of [`Digester::digest_reader`].
    ///
    /// Yields to the executor between reads and produces the same digest as
    /// the blocking path for the same bytes and options. Only partial reads
    /// seek.
    pub async fn digest_async_reader<R>(&self, mut reader: R) -> Result<DigestOutput>
    where
        R: AsyncRead + AsyncSeek + Unpin,
    {
        let mode = self.prepare()?;
        let block_size = self.options.block_size();

        let chunks = match mode {
            ReadMode::Partial { .. } => {
                let start = reader.seek(SeekFrom::Current(0)).await?;
                let cursor = ReadCursor::for_mode(block_size, mode).starting_at(start);
                chunk_async(reader, cursor)
            }
            ReadMode::Full | ReadMode::Text => ChunkStream::sequential(reader, block_size),
        };
        self.absorb_stream(chunks, mode).await
    }

    /// Async counterpart of [`Digester::digest_sequential`].
    pub async fn digest_async_sequential<R>(&self, reader: R) -> Result<DigestOutput>
    where
        R: AsyncRead + Unpin,
    {
        let mode = self.prepare()?;
        require_sequential(mode)?;
        let chunks = ChunkStream::sequential(reader, self.options.block_size());
        self.absorb_stream(chunks, mode).await
    }

    async fn absorb_stream<R>(
        &self,
        mut chunks: ChunkStream<R>,
        mode: ReadMode,
    ) -> Result<DigestOutput>
    where
        R: AsyncRead + Unpin,
    {
        let mut acc = DigestAccumulator::new(self.algorithm);

        if mode == ReadMode::Text {
            let mut splitter = LineSplitter::with_capacity(self.options.block_size());
            while let Some(chunk) = chunks.next().await {
                let chunk = chunk?;
                splitter.push_with(&chunk.data, |line| absorb_line(&mut acc, line));
            }
            if let Some(tail) = splitter.finish() {
                absorb_line(&mut acc, tail);
            }
        } else {
            while let Some(chunk) = chunks.next().await {
                acc.update(&chunk?.data);
            }
        }

        debug!(
            algorithm = %self.algorithm,
            bytes = acc.bytes_hashed(),
            "async digest complete"
        );
        Ok(acc.finalize())
    }
}

#[cfg(feature = "tokio")]
mod file {
    use std::path::Path;

    use tokio_util::compat::TokioAsyncReadCompatExt;
    use tracing::debug;

    use super::Digester;
    use crate::digester::access::check_access_async;
    use crate::error::{DigestError, Result};

    impl Digester {
        /// Hashes the file at `path` using tokio's non-blocking file I/O.
        ///
        /// # Errors
        ///
        /// Same as [`Digester::hash_file_sync`].
        pub async fn hash_file(&self, path: impl AsRef<Path>) -> Result<String> {
            let path = path.as_ref();
            self.options.validate()?;
            check_access_async(path).await?;
            debug!(path = %path.display(), mode = ?self.options.read_mode(), "hashing file (async)");

            let file = tokio::fs::File::open(path)
                .await
                .map_err(|e| DigestError::Io(e).at_path(path))?;
            let output = self
                .digest_async_reader(file.compat())
                .await
                .map_err(|e| e.at_path(path))?;
            Ok(self.render(&output))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DigestOptions;
    use crate::hash::DigestAlgorithm;
    use futures_util::io::Cursor;
    use strum::IntoEnumIterator;

    fn sample() -> Vec<u8> {
        let mut data = Vec::new();
        for i in 0..2_000u32 {
            data.extend_from_slice(format!("row {i}\r\n").as_bytes());
            if i % 7 == 0 {
                data.extend_from_slice(b"\n");
            }
        }
        data
    }

    #[tokio::test]
    async fn test_async_matches_sync_all_modes() {
        let data = sample();
        let modes = [
            DigestOptions::default(),
            DigestOptions::default().with_partial(true),
            DigestOptions::default()
                .with_partial(true)
                .with_partial_multiplier(0.25),
            DigestOptions::default().with_text_mode(true),
        ];

        for algorithm in DigestAlgorithm::iter() {
            for options in modes {
                let d = Digester::new(algorithm).with_options(options.with_block_size(512));
                let sync = d.digest_reader(std::io::Cursor::new(&data)).unwrap();
                let not_sync = d.digest_async_reader(Cursor::new(&data)).await.unwrap();
                assert_eq!(sync, not_sync, "{algorithm} {options:?}");
            }
        }
    }

    #[tokio::test]
    async fn test_async_invalid_options() {
        let d = Digester::new(DigestAlgorithm::Md5)
            .with_options(DigestOptions::default().with_partial_multiplier(f64::NAN));
        assert!(d.digest_async_reader(Cursor::new(b"abc")).await.is_err());
    }

    /// Hides `AsyncSeek` from the wrapped reader.
    struct ReadOnly<R>(R);

    impl<R: AsyncRead + Unpin> AsyncRead for ReadOnly<R> {
        fn poll_read(
            mut self: std::pin::Pin<&mut Self>,
            cx: &mut std::task::Context<'_>,
            buf: &mut [u8],
        ) -> std::task::Poll<std::io::Result<usize>> {
            std::pin::Pin::new(&mut self.0).poll_read(cx, buf)
        }
    }

    #[tokio::test]
    async fn test_async_sequential_source() {
        let data = sample();
        for options in [
            DigestOptions::default(),
            DigestOptions::default().with_text_mode(true),
        ] {
            let d = Digester::new(DigestAlgorithm::Sha1).with_options(options.with_block_size(100));
            let expected = d.digest_reader(std::io::Cursor::new(&data)).unwrap();
            let actual = d
                .digest_async_sequential(ReadOnly(Cursor::new(&data)))
                .await
                .unwrap();
            assert_eq!(actual, expected, "{options:?}");
        }

        let d = Digester::new(DigestAlgorithm::Sha1)
            .with_options(DigestOptions::default().with_partial(true));
        assert!(d.digest_async_sequential(ReadOnly(Cursor::new(&data))).await.is_err());
    }
}
