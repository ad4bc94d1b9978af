#![no_main]

use libfuzzer_sys::fuzz_target;
use filedigest::LineSplitter;

/// Splits `data` in one push and returns every line.
fn split_whole(data: &[u8]) -> Vec<Vec<u8>> {
    let mut splitter = LineSplitter::new();
    let mut lines = Vec::new();
    splitter.push_with(data, |line| lines.push(line.to_vec()));
    if let Some(tail) = splitter.finish() {
        lines.push(tail.to_vec());
    }
    lines
}

fuzz_target!(|input: (u8, Vec<u8>)| {
    let (step, data) = input;
    let step = usize::from(step.max(1));

    let expected = split_whole(&data);

    // Verify: chunk boundaries do not change the lines
    let mut splitter = LineSplitter::new();
    let mut lines = Vec::new();
    for piece in data.chunks(step) {
        splitter.push_with(piece, |line| lines.push(line.to_vec()));
    }
    if let Some(tail) = splitter.finish() {
        lines.push(tail.to_vec());
    }
    assert_eq!(lines, expected);
    assert_eq!(splitter.lines_emitted(), expected.len() as u64);

    // Verify: no line contains a line feed
    for line in &expected {
        assert!(!line.contains(&b'\n'));
    }

    // Verify: rejoining with LF reproduces the input minus CRs before LFs
    let mut rejoined = Vec::new();
    for line in &expected {
        rejoined.extend_from_slice(line);
        rejoined.push(b'\n');
    }
    let mut normalized = Vec::new();
    let mut i = 0;
    while i < data.len() {
        if data[i] == b'\r' && data.get(i + 1) == Some(&b'\n') {
            i += 1;
            continue;
        }
        normalized.push(data[i]);
        i += 1;
    }
    if !normalized.is_empty() && normalized.last() != Some(&b'\n') {
        normalized.push(b'\n');
    }
    assert_eq!(rejoined, normalized);
});
