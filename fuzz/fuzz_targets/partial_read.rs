#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use filedigest::{ChunkReader, DigestAlgorithm, DigestOptions, Digester};

fuzz_target!(|input: (u8, u8, Vec<u8>)| {
    let (block, tenths, data) = input;
    let block_size = usize::from(block.max(1));
    let multiplier = f64::from(tenths % 40) / 10.0;

    let chunks: Vec<_> = ChunkReader::partial(Cursor::new(&data), block_size, multiplier)
        .collect::<Result<_, _>>()
        .unwrap();

    // Verify: blocks are in order, in bounds, and only the last is short
    let mut previous_end = 0u64;
    for (i, chunk) in chunks.iter().enumerate() {
        assert!(chunk.offset >= previous_end);
        assert!(chunk.end() <= data.len() as u64);
        assert_eq!(&data[chunk.offset as usize..chunk.end() as usize], &chunk.data[..]);
        assert!(!chunk.is_empty());
        if i + 1 < chunks.len() {
            assert_eq!(chunk.len(), block_size);
        }
        previous_end = chunk.end();
    }

    // Verify: a zero multiplier covers every byte
    if multiplier == 0.0 {
        let total: usize = chunks.iter().map(|c| c.len()).sum();
        assert_eq!(total, data.len());
    }

    // Verify: the digest equals a one-shot digest of the sampled bytes
    let sampled: Vec<u8> = chunks.iter().flat_map(|c| c.data.iter().copied()).collect();
    let digester = Digester::new(DigestAlgorithm::Sha1).with_options(
        DigestOptions::default()
            .with_partial(true)
            .with_partial_multiplier(multiplier)
            .with_block_size(block_size),
    );
    assert_eq!(
        digester.digest_reader(Cursor::new(&data)).unwrap(),
        digester.digest_bytes(&sampled)
    );
});
