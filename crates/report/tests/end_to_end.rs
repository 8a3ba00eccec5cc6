// File: crates/report/tests/end_to_end.rs
// Purpose: Full run with the Skia renderer: CSV in, ZIP of decodable PNGs out.

use std::io::{Cursor, Read};

use chart_core::{FontResource, RenderOptions};
use rank_report::{generate_report_with_font, ReportConfig, ScoreTable, Silent};

const CSV: &str = "seat,name,e1,e2,e3\n1,A,5,3,4\n2,B,,7,absent\n3,C,250,120,60\n";

#[test]
fn csv_to_zip_of_pngs() {
    let Some(font) = FontResource::system_default() else {
        eprintln!("[e2e] no system typeface available; skipping");
        return;
    };
    let table = ScoreTable::from_csv_reader(CSV.as_bytes()).expect("csv");
    let config = ReportConfig::defaults_for(table.headers(), 300).expect("defaults");
    assert_eq!(config.exam_columns, vec!["e1", "e2", "e3"]);

    let report = generate_report_with_font(&table, &config, font, RenderOptions::default(), &mut Silent)
        .expect("run succeeds");
    assert_eq!(report.rows, 3);

    let mut zip = zip::ZipArchive::new(Cursor::new(report.archive)).expect("zip");
    assert_eq!(zip.len(), 3);
    for name in ["A_校排名.png", "B_校排名.png", "C_校排名.png"] {
        let mut bytes = Vec::new();
        zip.by_name(name).expect(name).read_to_end(&mut bytes).unwrap();
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "{name} should be a PNG");
    }
}

#[test]
fn unloadable_font_never_reaches_the_pipeline() {
    let err = FontResource::from_bytes(b"not a font at all", "upload.ttf").unwrap_err();
    assert!(err.to_string().contains("upload.ttf"));
}
