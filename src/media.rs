// SPDX-License-Identifier: MPL-2.0
//! Page classification and rendering.
//!
//! Classification decides, from the entry name alone, whether an archive
//! entry is a displayable page and which mime type it carries. Rendering
//! decodes the raw bytes and bakes the current view transform (rotation and
//! flips) into an RGBA frame for the display surface.

use crate::error::DecodeError;
use crate::transform::Rotation;
use image::DynamicImage;
use resvg::usvg;

/// Marker for the resource-fork folder that some archives carry. Entries
/// under it may have image extensions but are not actual images.
pub const RESOURCE_FORK_MARKER: &str = "__MACOSX";

/// Payload size limit for the plain-text fallback on decode failure.
pub const TEXT_FALLBACK_MAX_BYTES: usize = 10 * 1024;

/// Maps an entry name to the mime type of a supported page image.
///
/// Returns `None` for unsupported extensions and for anything under the
/// resource-fork folder, regardless of extension.
pub fn classify_page(name: &str) -> Option<&'static str> {
    if name.contains(RESOURCE_FORK_MARKER) {
        return None;
    }

    let extension = name.rsplit('.').next()?.to_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "svg" => Some("image/svg+xml"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Checks whether the extension is one the raster decoder can handle.
/// Used to gate the text fallback: raster formats never fall back.
fn has_raster_extension(name: &str) -> bool {
    let extension = name
        .rsplit('.')
        .next()
        .map(str::to_lowercase)
        .unwrap_or_default();
    matches!(extension.as_str(), "jpg" | "jpeg" | "png" | "gif" | "webp")
}

/// A page rendered for display.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedPage {
    /// Decoded raster frame with the view transform already applied.
    Bitmap {
        width: u32,
        height: u32,
        rgba: Vec<u8>,
    },
    /// Plain-text rendition of a small non-raster payload.
    Text(String),
}

/// Decodes page bytes and applies the flip/rotation part of the view
/// transform.
///
/// SVG pages are rasterized at their intrinsic size; everything else goes
/// through the raster decoder. Flips are applied in source-image space
/// first, then the quarter-turn rotation, matching how the original canvas
/// transform composes.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the payload cannot be decoded as an image
/// and does not qualify for the text fallback. The caller treats this as
/// sticky for the page.
pub fn render_page(
    name: &str,
    bytes: &[u8],
    rotation: Rotation,
    hflip: bool,
    vflip: bool,
) -> Result<RenderedPage, DecodeError> {
    let decoded = if has_svg_extension(name) {
        rasterize_svg(bytes)
    } else {
        image::load_from_memory(bytes).map_err(|err| err.to_string())
    };

    match decoded {
        Ok(decoded) => {
            let transformed = apply_transform(decoded, rotation, hflip, vflip);
            let frame = transformed.to_rgba8();
            let (width, height) = frame.dimensions();
            Ok(RenderedPage::Bitmap {
                width,
                height,
                rgba: frame.into_raw(),
            })
        }
        Err(reason) => text_fallback(name, bytes).ok_or_else(|| DecodeError {
            name: name.to_string(),
            reason,
        }),
    }
}

fn has_svg_extension(name: &str) -> bool {
    name.rsplit('.')
        .next()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Rasterizes an SVG payload at its intrinsic size.
fn rasterize_svg(bytes: &[u8]) -> Result<DynamicImage, String> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|err| err.to_string())?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    if width == 0 || height == 0 {
        return Err("SVG has empty dimensions".into());
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| "Failed to allocate SVG pixmap".to_string())?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let frame = image::RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or_else(|| "SVG pixmap has unexpected length".to_string())?;
    Ok(DynamicImage::ImageRgba8(frame))
}

/// Attempts the plain-text rendition for payloads that failed raster decode.
///
/// Markup files always qualify; other non-raster payloads qualify only when
/// small enough to plausibly be text.
fn text_fallback(name: &str, bytes: &[u8]) -> Option<RenderedPage> {
    let lowered = name.to_lowercase();
    let is_markup = lowered.ends_with(".html") || lowered.ends_with(".htm");

    if is_markup || (!has_raster_extension(name) && bytes.len() < TEXT_FALLBACK_MAX_BYTES) {
        Some(RenderedPage::Text(
            String::from_utf8_lossy(bytes).into_owned(),
        ))
    } else {
        None
    }
}

fn apply_transform(image: DynamicImage, rotation: Rotation, hflip: bool, vflip: bool) -> DynamicImage {
    let mut image = image;
    if hflip {
        image = image.fliph();
    }
    if vflip {
        image = image.flipv();
    }
    match rotation {
        Rotation::Deg0 => image,
        Rotation::Deg90 => image.rotate90(),
        Rotation::Deg180 => image.rotate180(),
        Rotation::Deg270 => image.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn encode_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x % 256) as u8, (y % 256) as u8, 0, 255])
        });
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("failed to encode test png");
        bytes
    }

    #[test]
    fn classify_page_maps_known_extensions() {
        assert_eq!(classify_page("p1.jpg"), Some("image/jpeg"));
        assert_eq!(classify_page("p1.JPEG"), Some("image/jpeg"));
        assert_eq!(classify_page("cover.png"), Some("image/png"));
        assert_eq!(classify_page("anim.gif"), Some("image/gif"));
        assert_eq!(classify_page("art.svg"), Some("image/svg+xml"));
        assert_eq!(classify_page("page.webp"), Some("image/webp"));
    }

    #[test]
    fn classify_page_rejects_unknown_extensions() {
        assert_eq!(classify_page("readme.txt"), None);
        assert_eq!(classify_page("info.nfo"), None);
        assert_eq!(classify_page("noextension"), None);
    }

    #[test]
    fn classify_page_rejects_resource_fork_paths() {
        assert_eq!(classify_page("__MACOSX/p3.jpg"), None);
        assert_eq!(classify_page("book/__MACOSX/._cover.png"), None);
    }

    #[test]
    fn render_page_decodes_png() {
        let bytes = encode_png(4, 2);
        let page = render_page("p.png", &bytes, Rotation::Deg0, false, false)
            .expect("decode should succeed");
        match page {
            RenderedPage::Bitmap { width, height, .. } => {
                assert_eq!((width, height), (4, 2));
            }
            RenderedPage::Text(_) => panic!("expected bitmap"),
        }
    }

    #[test]
    fn render_page_quarter_turn_swaps_dimensions() {
        let bytes = encode_png(4, 2);
        let page = render_page("p.png", &bytes, Rotation::Deg90, false, false)
            .expect("decode should succeed");
        match page {
            RenderedPage::Bitmap { width, height, .. } => {
                assert_eq!((width, height), (2, 4));
            }
            RenderedPage::Text(_) => panic!("expected bitmap"),
        }
    }

    #[test]
    fn render_page_half_turn_keeps_dimensions() {
        let bytes = encode_png(4, 2);
        let page = render_page("p.png", &bytes, Rotation::Deg180, true, true)
            .expect("decode should succeed");
        match page {
            RenderedPage::Bitmap { width, height, .. } => {
                assert_eq!((width, height), (4, 2));
            }
            RenderedPage::Text(_) => panic!("expected bitmap"),
        }
    }

    #[test]
    fn render_page_rasterizes_svg_at_intrinsic_size() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
            <rect width="6" height="3" fill="red"/>
        </svg>"#;
        let page = render_page("art.svg", svg, Rotation::Deg0, false, false)
            .expect("svg should rasterize");
        match page {
            RenderedPage::Bitmap { width, height, .. } => {
                assert_eq!((width, height), (6, 3));
            }
            RenderedPage::Text(_) => panic!("expected bitmap"),
        }
    }

    #[test]
    fn render_page_applies_transform_to_svg_pages() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="6" height="3"/>"#;
        let page = render_page("art.SVG", svg, Rotation::Deg90, false, false)
            .expect("svg should rasterize");
        match page {
            RenderedPage::Bitmap { width, height, .. } => {
                assert_eq!((width, height), (3, 6));
            }
            RenderedPage::Text(_) => panic!("expected bitmap"),
        }
    }

    #[test]
    fn render_page_small_text_payload_falls_back() {
        let page = render_page("notes.svg", b"hello world", Rotation::Deg0, false, false)
            .expect("fallback should apply");
        assert_eq!(page, RenderedPage::Text("hello world".to_string()));
    }

    #[test]
    fn render_page_corrupt_raster_is_an_error() {
        let err = render_page("p.jpg", b"not a jpeg", Rotation::Deg0, false, false)
            .expect_err("raster formats never fall back");
        assert_eq!(err.name, "p.jpg");
    }

    #[test]
    fn render_page_large_non_raster_payload_is_an_error() {
        let big = vec![0u8; TEXT_FALLBACK_MAX_BYTES];
        let result = render_page("blob.svg", &big, Rotation::Deg0, false, false);
        assert!(result.is_err());
    }
}
