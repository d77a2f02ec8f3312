// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests over the extraction pipeline: in-memory CBZ archives
//! flow through the ZIP source into the page registry and renderer the
//! same way the application tasks drive them.

use comiced::archive::{ArchiveSource, ZipSource};
use comiced::config::{self, Config, ViewerSettings};
use comiced::media::{self, RenderedPage};
use comiced::navigation::{PageState, ReaderCursor};
use comiced::registry::{PageRegistry, SubmitOutcome};
use comiced::transform::{FitMode, FlipState, ReadingDirection, Rotation, ScrollReset};
use std::io::{Cursor, Write};
use tempfile::tempdir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

fn build_cbz(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, data) in entries {
        writer
            .start_file(name.to_string(), options)
            .expect("failed to start entry");
        writer.write_all(data).expect("failed to write entry");
    }
    writer
        .finish()
        .expect("failed to finish archive")
        .into_inner()
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("failed to encode png");
    bytes
}

/// Drains every file entry of the archive into the registry, simulating
/// the per-entry tasks completing in container order.
fn load_all(source: &mut ZipSource, registry: &mut PageRegistry) {
    for index in 0..source.entries().len() {
        if !source.entries()[index].is_file {
            continue;
        }
        let name = source.entries()[index].name.clone();
        match source.read_entry(index) {
            Ok(bytes) => {
                registry.submit(&name, bytes);
            }
            Err(_) => registry.reject_unreadable(&name),
        }
    }
}

#[test]
fn archive_with_mixed_entries_yields_filtered_sorted_pages() {
    let png = png_bytes(2, 2);
    let bytes = build_cbz(&[
        ("p2.jpg", png.as_slice()),
        ("p1.jpg", png.as_slice()),
        ("__MACOSX/p3.jpg", png.as_slice()),
        ("readme.txt", b"notes"),
    ]);

    let mut source = ZipSource::open(bytes).expect("open should succeed");
    let mut registry = PageRegistry::from_listing(source.entries());
    load_all(&mut source, &mut registry);

    let names: Vec<&str> = registry.ready_pages().map(|(_, page)| page.name()).collect();
    assert_eq!(names, vec!["p1.jpg", "p2.jpg"]);
    assert_eq!(registry.accepted_count(), 2);
    assert_eq!(registry.expected_total(), 2);
}

#[test]
fn numeric_names_sort_naturally_not_lexically() {
    let png = png_bytes(2, 2);
    let bytes = build_cbz(&[
        ("page10.png", png.as_slice()),
        ("page2.png", png.as_slice()),
        ("page1.png", png.as_slice()),
    ]);

    let mut source = ZipSource::open(bytes).expect("open should succeed");
    let mut registry = PageRegistry::from_listing(source.entries());
    load_all(&mut source, &mut registry);

    let names: Vec<&str> = registry.ready_pages().map(|(_, page)| page.name()).collect();
    assert_eq!(names, vec!["page1.png", "page2.png", "page10.png"]);
}

#[test]
fn arrival_order_does_not_affect_display_order() {
    let png = png_bytes(2, 2);
    let entries = [
        ("c.png", png.as_slice()),
        ("a.png", png.as_slice()),
        ("b.png", png.as_slice()),
    ];
    let bytes = build_cbz(&entries);

    let source = ZipSource::open(bytes.clone()).expect("open should succeed");
    let listing = source.entries().to_vec();

    // Resolve entries in two different orders against identical listings.
    for order in [[0usize, 1, 2], [2, 0, 1]] {
        let mut source = ZipSource::open(bytes.clone()).expect("open should succeed");
        let mut registry = PageRegistry::from_listing(&listing);
        for index in order {
            let name = source.entries()[index].name.clone();
            let data = source.read_entry(index).expect("read should succeed");
            assert!(matches!(
                registry.submit(&name, data),
                SubmitOutcome::Accepted { .. }
            ));
        }
        let names: Vec<&str> = registry.ready_pages().map(|(_, page)| page.name()).collect();
        assert_eq!(names, vec!["a.png", "b.png", "c.png"]);
    }
}

#[test]
fn cursor_navigates_extracted_archive_and_freezes_at_bounds() {
    let png = png_bytes(2, 2);
    let bytes = build_cbz(&[("a.png", png.as_slice()), ("b.png", png.as_slice())]);

    let mut source = ZipSource::open(bytes).expect("open should succeed");
    let mut registry = PageRegistry::from_listing(source.entries());
    load_all(&mut source, &mut registry);

    let mut cursor = ReaderCursor::new();
    assert_eq!(cursor.page_state(&registry), PageState::Ready);

    assert!(cursor.show_next(&registry));
    assert!(!cursor.show_next(&registry));
    assert_eq!(cursor.current(), 1);

    assert!(cursor.show_left(&registry, ReadingDirection::LeftToRight));
    assert_eq!(cursor.current(), 0);
}

#[test]
fn extracted_page_renders_with_baked_rotation() {
    let png = png_bytes(4, 2);
    let bytes = build_cbz(&[("wide.png", png.as_slice())]);

    let mut source = ZipSource::open(bytes).expect("open should succeed");
    let mut registry = PageRegistry::from_listing(source.entries());
    load_all(&mut source, &mut registry);

    let page = registry.page(0).expect("page should be ready");
    let rendered = media::render_page(
        page.name(),
        page.handle().bytes(),
        Rotation::Deg90,
        false,
        false,
    )
    .expect("render should succeed");

    match rendered {
        RenderedPage::Bitmap { width, height, .. } => {
            assert_eq!((width, height), (2, 4));
        }
        RenderedPage::Text(_) => panic!("expected a bitmap"),
    }
}

#[test]
fn undecodable_page_reports_error_and_navigation_continues() {
    let png = png_bytes(2, 2);
    let bytes = build_cbz(&[
        ("a.png", png.as_slice()),
        // Classified as a page by extension but not decodable as an image,
        // and too large for the text fallback.
        ("b.png", vec![0u8; 20 * 1024].as_slice()),
    ]);

    let mut source = ZipSource::open(bytes).expect("open should succeed");
    let mut registry = PageRegistry::from_listing(source.entries());
    load_all(&mut source, &mut registry);

    let mut cursor = ReaderCursor::new();
    cursor.show_next(&registry);
    let page = registry.page(1).expect("page should be ready");
    let result = media::render_page(page.name(), page.handle().bytes(), Rotation::Deg0, false, false);
    assert!(result.is_err());
    cursor.mark_decode_failed(page.name());
    assert_eq!(cursor.page_state(&registry), PageState::Error);

    // The neighboring page is unaffected.
    cursor.show_prev(&registry);
    assert_eq!(cursor.page_state(&registry), PageState::Ready);
}

#[test]
fn settings_round_trip_through_config_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let settings = ViewerSettings {
        flip: FlipState::Vertical,
        rotation: Rotation::Deg180,
        fit_mode: FitMode::Width,
        direction: ReadingDirection::RightToLeft,
        scroll_reset: ScrollReset::Preserve,
        show_scrollbar: false,
    };

    config::save_to_path(&Config::from_settings(&settings), &path)
        .expect("failed to save settings");
    let loaded = config::load_from_path(&path)
        .expect("failed to load settings")
        .merge_over_defaults();

    assert_eq!(loaded, settings);
}
