// File: crates/chart-core/tests/font.rs
// Purpose: Font loading failures surface as RenderError instead of panicking.

use chart_core::{FontResource, RenderError};

#[test]
fn garbage_bytes_are_not_a_typeface() {
    let err = FontResource::from_bytes(b"definitely not a font", "upload").unwrap_err();
    match err {
        RenderError::FontLoad { origin } => assert_eq!(origin, "upload"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_font_file_reports_path() {
    let path = std::path::Path::new("target/test_out/no-such-font.ttf");
    let err = FontResource::from_file(path).unwrap_err();
    assert!(matches!(err, RenderError::FontRead { .. }));
    assert!(err.to_string().contains("no-such-font.ttf"));
}

#[test]
fn system_font_covers_ascii_digits() {
    let Some(font) = FontResource::system_default() else {
        eprintln!("[font] no system typeface available; skipping");
        return;
    };
    assert!(font.covers("0123456789"));
    assert_eq!(font.origin(), "system default");
}
