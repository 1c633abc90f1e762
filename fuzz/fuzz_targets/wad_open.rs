//! Fuzz target for WadFile::open with arbitrary byte input.
//!
//! This target exercises the container header and directory parsing with
//! potentially malformed or adversarial input. The goal is to find
//! panics, hangs, or unbounded allocations in the parsing logic.
//!
//! Run with: cargo +nightly fuzz run wad_open

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    if let Ok(mut wad) = textmap::WadFile::open(Cursor::new(data)) {
        // Reading any lump must fail cleanly or return its bytes.
        for index in 0..wad.entries().len() {
            let _ = wad.read(index);
        }
    }
});
