//! Integration tests for exporting artifacts.

use infostep::{
    export, parse, Color, Error, ExportFormat, ExportOptions, Infostep, Layout, RenderOptions,
};

#[test]
fn test_export_each_format() {
    let doc = parse("Title: Deploy\nBuild -> Test -> Release").unwrap();

    for format in ExportFormat::ALL {
        let options = ExportOptions::new().with_format(format).with_pixel_ratio(1.0);
        let artifact = export(&doc, &options).unwrap();
        assert_eq!(artifact.format, format);
        assert_eq!(artifact.file_name, format!("deploy.{}", format.extension()));
        assert!(!artifact.is_empty());
    }
}

#[test]
fn test_background_override_is_per_export() {
    let doc = parse("A -> B").unwrap();
    let render = RenderOptions::new().with_layout(Layout::TimelineFlow);
    let options = ExportOptions::new()
        .with_render_options(render.clone())
        .with_background(Color::rgb(0xFF, 0xFF, 0xFF));

    let artifact = export(&doc, &options).unwrap();
    let svg = String::from_utf8(artifact.data).unwrap();
    assert!(svg.contains("height=\"100%\" fill=\"#FFFFFF\""));

    // The render options themselves are untouched.
    assert_eq!(render.style.background, Color::rgb(0xEE, 0xED, 0xE9));
    assert_eq!(options.render.style.background, Color::rgb(0xEE, 0xED, 0xE9));
}

#[test]
fn test_json_export_reads_back() {
    let doc = parse("1. Plan: Define scope\n2. Build").unwrap();
    let artifact = export(&doc, &ExportOptions::new().with_format(ExportFormat::Json)).unwrap();
    assert_eq!(artifact.mime_type(), "application/json");

    let back: infostep::ParsedDocument = serde_json::from_slice(&artifact.data).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_raster_exports() {
    let doc = parse("Title: Deploy\nBuild -> Test -> Release").unwrap();
    let options = ExportOptions::new()
        .with_render_options(RenderOptions::new().with_canvas_width(600))
        .with_pixel_ratio(2.0);

    let png = export(&doc, &options.clone().with_format(ExportFormat::Png)).unwrap();
    assert_eq!(png.mime_type(), "image/png");
    assert!(png.data.starts_with(b"\x89PNG\r\n\x1a\n"));
    // IHDR width, big-endian, right after the signature and chunk header.
    let width = u32::from_be_bytes([png.data[16], png.data[17], png.data[18], png.data[19]]);
    assert_eq!(width, 1200);

    let jpeg = export(&doc, &options.with_format(ExportFormat::Jpeg)).unwrap();
    assert_eq!(jpeg.file_name, "deploy.jpg");
    assert_eq!(jpeg.mime_type(), "image/jpeg");
    assert!(jpeg.data.starts_with(&[0xFF, 0xD8, 0xFF]));
}

#[test]
fn test_export_errors_are_not_parse_errors() {
    let err = "gif".parse::<ExportFormat>().unwrap_err();
    assert!(matches!(err, Error::Export(_)));
    assert!(!err.is_parse_error());
}

#[test]
fn test_builder_export_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let result = Infostep::new()
        .with_layout(Layout::HorizontalSteps)
        .parse("Ideas\nCollect\nRank\nPick")
        .unwrap();

    let artifact = result.export(ExportFormat::Svg).unwrap();
    let path = dir.path().join(&artifact.file_name);
    artifact.write_to(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("<title>Ideas</title>"));
    assert_eq!(artifact.file_name, "ideas.svg");
}
