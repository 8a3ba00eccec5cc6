// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test producing PNG bytes and a file.

use chart_core::{ChartSpec, FontResource, RankChartRenderer, RenderOptions};

fn spec() -> ChartSpec {
    ChartSpec {
        title: "A - 校排名趨勢圖".to_string(),
        x_caption: "考試次別".to_string(),
        y_caption: "校排名".to_string(),
        x_labels: vec!["e1".into(), "e2".into(), "e3".into()],
        y_values: vec![Some(5.0), None, Some(3.0)],
        y_axis_upper_bound: 300,
    }
}

#[test]
fn render_smoke_png() {
    let Some(font) = FontResource::system_default() else {
        eprintln!("[smoke] no system typeface available; skipping");
        return;
    };
    let renderer = RankChartRenderer::new(font);

    let bytes = renderer.render(&spec()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    let opts = RenderOptions::default();
    assert_eq!(img.width() as i32, opts.width);
    assert_eq!(img.height() as i32, opts.height);
    assert_eq!(img.width(), img.height() * 2, "charts are 2:1");
}

#[test]
fn render_to_png_writes_file() {
    let Some(font) = FontResource::system_default() else {
        eprintln!("[smoke] no system typeface available; skipping");
        return;
    };
    let chart = chart_core::Chart::from_spec(&spec()).expect("valid spec");
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart
        .render_to_png(&RenderOptions::default(), &font, &out)
        .expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn repeated_renders_are_independent() {
    let Some(font) = FontResource::system_default() else {
        eprintln!("[smoke] no system typeface available; skipping");
        return;
    };
    let renderer = RankChartRenderer::new(font);
    let first = renderer.render(&spec()).expect("first render");
    for _ in 0..5 {
        let again = renderer.render(&spec()).expect("render again");
        let a = image::load_from_memory(&first).expect("decode first").to_rgba8();
        let b = image::load_from_memory(&again).expect("decode again").to_rgba8();
        assert_eq!(a.as_raw(), b.as_raw(), "shared font must not drift between rows");
    }
}
