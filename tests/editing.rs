//! Integration tests for the load/edit/save cycle over whole WAD files.
//!
//! These tests verify that the editor:
//! - Locates maps by header/`TEXTMAP` pairing, first match wins
//! - Produces the documented error kinds for missing or malformed maps
//! - Replaces exactly one lump on save, leaving every other record
//!   byte-identical

use std::io::Cursor;

use textmap::udmf::parse_document;
use textmap::{Error, Scalar, UdmfEditor, WadFile, WadWriter};

/// Builds an in-memory WAD from (name, data) pairs.
fn build_wad(lumps: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = WadWriter::new(Cursor::new(Vec::new()));
    for (name, data) in lumps {
        writer.insert(name, data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn editor_for(lumps: &[(&str, &[u8])]) -> UdmfEditor {
    let bytes = build_wad(lumps);
    let mut wad = WadFile::open(Cursor::new(bytes)).unwrap();
    UdmfEditor::from_wad(&mut wad).unwrap()
}

const MAP01_TEXT: &[u8] = b"namespace = \"doom\";\nthing { x = 32.0; y = 32.0; type = 1; }\n";

// ============================================================================
// Locating maps
// ============================================================================

#[test]
fn test_load_yields_metadata_and_typed_blocks() {
    let mut editor = editor_for(&[("MAP01", b""), ("TEXTMAP", MAP01_TEXT), ("ENDMAP", b"")]);
    let doc = editor.load("MAP01").unwrap();

    assert_eq!(doc.metadata("namespace"), Some(&Scalar::from("doom")));
    let things: Vec<_> = doc.things().collect();
    assert_eq!(things.len(), 1);
    assert_eq!(things[0].get_float("x"), Some(32.0));
    assert_eq!(things[0].get_float("y"), Some(32.0));
    assert_eq!(things[0].get_integer("type"), Some(1));
}

#[test]
fn test_first_matching_map_is_selected() {
    let mut editor = editor_for(&[
        ("MAP01", b""),
        ("TEXTMAP", b"tag = 1;"),
        ("ENDMAP", b""),
        ("MAP01", b""),
        ("TEXTMAP", b"tag = 2;"),
        ("ENDMAP", b""),
    ]);
    let doc = editor.load("MAP01").unwrap();
    assert_eq!(doc.metadata("tag"), Some(&Scalar::Integer(1)));
}

#[test]
fn test_missing_map_is_not_found() {
    let mut editor = editor_for(&[("MAP01", b""), ("TEXTMAP", b"a = 1;"), ("ENDMAP", b"")]);
    assert!(matches!(
        editor.load("E1M1"),
        Err(Error::MapNotFound { .. })
    ));
}

#[test]
fn test_binary_map_is_not_found() {
    // A classic binary map has THINGS/LINEDEFS etc. and no TEXTMAP.
    let mut editor = editor_for(&[
        ("MAP01", b""),
        ("THINGS", b"\x01\x02\x03"),
        ("LINEDEFS", b"\x04\x05"),
    ]);
    assert!(matches!(
        editor.load("MAP01"),
        Err(Error::MapNotFound { .. })
    ));
}

#[test]
fn test_keyword_value_fails_load() {
    let mut editor = editor_for(&[
        ("MAP01", b""),
        ("TEXTMAP", b"thing { arg = SOMEVALUE; }"),
        ("ENDMAP", b""),
    ]);
    match editor.load("MAP01").unwrap_err() {
        Error::UnsupportedValue { token, .. } => assert_eq!(token, "SOMEVALUE"),
        other => panic!("expected UnsupportedValue, got {:?}", other),
    }
}

// ============================================================================
// Saving
// ============================================================================

#[test]
fn test_save_replaces_only_the_text_lump() {
    let lumps: &[(&str, &[u8])] = &[
        ("CREDITS", b"unrelated bytes"),
        ("MAP01", b"header payload"),
        ("TEXTMAP", MAP01_TEXT),
        ("BEHAVIOR", b"\x00\x01\x02\x03"),
        ("ENDMAP", b""),
        ("MAP02", b""),
        ("TEXTMAP", b"tag = 2;"),
        ("ENDMAP", b""),
        ("PLAYPAL", b"\xff\xfe\xfd"),
    ];
    let mut editor = editor_for(lumps);
    let original = editor.lumps().to_vec();

    let doc = editor.load("MAP01").unwrap();
    doc.blocks_mut()[0].set("type", 2i64);

    let saved = editor.save_to(Cursor::new(Vec::new())).unwrap().into_inner();
    let mut reopened = WadFile::open(Cursor::new(saved)).unwrap();
    let rewritten = reopened.lumps().unwrap();

    assert_eq!(rewritten.len(), original.len());
    for (index, (before, after)) in original.iter().zip(&rewritten).enumerate() {
        assert_eq!(before.name, after.name, "name changed at index {}", index);
        if index == 2 {
            // The edited TEXTMAP: must reparse with the edit applied.
            let text = std::str::from_utf8(&after.data).unwrap();
            let doc = parse_document(text).unwrap();
            assert_eq!(doc.things().next().unwrap().get_integer("type"), Some(2));
        } else {
            assert_eq!(before.data, after.data, "bytes changed at index {}", index);
        }
    }
}

#[test]
fn test_serialize_reparses_to_same_document() {
    let mut editor = editor_for(&[("MAP01", b""), ("TEXTMAP", MAP01_TEXT), ("ENDMAP", b"")]);
    editor.load("MAP01").unwrap();

    let text = editor.serialize().unwrap();
    let reparsed = parse_document(&text).unwrap();
    assert_eq!(&reparsed, editor.document().unwrap());
}

#[test]
fn test_save_to_disk_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.wad");
    let output = dir.path().join("output.wad");
    std::fs::write(
        &input,
        build_wad(&[("MAP01", b""), ("TEXTMAP", MAP01_TEXT), ("ENDMAP", b"")]),
    )
    .unwrap();

    let mut editor = UdmfEditor::open_path(&input).unwrap();
    let doc = editor.load("MAP01").unwrap();
    doc.set_metadata("comment", "edited");
    editor.save(&output).unwrap();

    let mut reloaded = UdmfEditor::open_path(&output).unwrap();
    let doc = reloaded.load("MAP01").unwrap();
    assert_eq!(doc.metadata("comment"), Some(&Scalar::from("edited")));
    assert_eq!(doc.metadata("namespace"), Some(&Scalar::from("doom")));
    assert_eq!(doc.things().count(), 1);
}

#[test]
fn test_save_rejects_non_ascii_edit() {
    let mut editor = editor_for(&[("MAP01", b""), ("TEXTMAP", MAP01_TEXT), ("ENDMAP", b"")]);
    let doc = editor.load("MAP01").unwrap();
    doc.set_metadata("comment", "caf\u{e9}");
    assert!(matches!(
        editor.save_to(Vec::new()),
        Err(Error::Encoding { .. })
    ));
}
