//! Fuzz target for the UDMF parser with arbitrary text input.
//!
//! This target exercises the lexer, parser, and semantic actions with
//! potentially malformed input. The goal is to find panics or hangs in
//! the parsing logic; every failure must surface as a typed error.
//!
//! Run with: cargo +nightly fuzz run parse_udmf

#![no_main]

use libfuzzer_sys::fuzz_target;
use textmap::Scalar;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        // Errors are fine; panics are not.
        if let Ok(doc) = textmap::udmf::parse_document(source) {
            let text = doc.to_udmf();

            // The serializer does not re-escape strings, so only documents
            // without quote/backslash string content are guaranteed to
            // round-trip.
            let unescaped_only = doc
                .blocks()
                .iter()
                .flat_map(|b| b.attributes().map(|(_, v)| v))
                .chain(doc.metadata_iter().map(|(_, v)| v))
                .all(|v| match v {
                    Scalar::String(s) => !s.contains(['"', '\\']),
                    _ => true,
                });
            if unescaped_only {
                let reparsed = textmap::udmf::parse_document(&text)
                    .expect("serialized document must reparse");
                assert_eq!(reparsed, doc);
            }
        }
    }
});
