//! SVG document wrapping
//!
//! Each exported region becomes a standalone SVG whose canvas has exactly
//! the region's pixel size and holds a single `<image>` at the origin with
//! the encoded pixels inlined as a base64 data URI.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use log::debug;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::raster::errors::{SliceError, SliceResult};
use crate::raster::{RasterEncoder, RasterImage};
use crate::segment::Rectangle;

/// SVG namespace declared on the root element
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Wrap PNG bytes in an SVG document of `width` x `height`
pub fn wrap_as_document(bytes: &[u8], width: u32, height: u32) -> SliceResult<String> {
    wrap_encoded(bytes, "image/png", width, height)
}

/// Wrap encoded bytes of the given MIME type in an SVG document
///
/// Both the `<svg>` canvas and the embedded `<image>` get the same
/// `width` and `height`; the image is placed at (0, 0).
pub fn wrap_encoded(bytes: &[u8], mime_type: &str, width: u32, height: u32) -> SliceResult<String> {
    let width = width.to_string();
    let height = height.to_string();
    let href = format!("data:{};base64,{}", mime_type, BASE64.encode(bytes));

    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    let mut root = BytesStart::new("svg");
    root.push_attribute(("xmlns", SVG_NAMESPACE));
    root.push_attribute(("width", width.as_str()));
    root.push_attribute(("height", height.as_str()));

    let mut image = BytesStart::new("image");
    image.push_attribute(("href", href.as_str()));
    image.push_attribute(("x", "0"));
    image.push_attribute(("y", "0"));
    image.push_attribute(("width", width.as_str()));
    image.push_attribute(("height", height.as_str()));

    writer.write_event(Event::Start(root)).map_err(xml_error)?;
    writer.write_event(Event::Empty(image)).map_err(xml_error)?;
    writer.write_event(Event::End(BytesEnd::new("svg"))).map_err(xml_error)?;

    let document = String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| SliceError::EncodeError(format!("SVG is not valid UTF-8: {}", e)))?;
    debug!("Wrapped {} bytes into {}x{} SVG ({} chars)", bytes.len(), width, height, document.len());
    Ok(document)
}

fn xml_error<E: std::fmt::Display>(e: E) -> SliceError {
    SliceError::EncodeError(format!("Failed to write SVG: {}", e))
}

/// Encodes regions and wraps them as SVG documents
pub struct DocumentExporter {
    encoder: Box<dyn RasterEncoder>,
}

impl DocumentExporter {
    /// Create an exporter around a region encoder
    pub fn new(encoder: Box<dyn RasterEncoder>) -> Self {
        DocumentExporter { encoder }
    }

    /// Encode `region` of `image` and wrap it as an SVG document
    pub fn export(&self, image: &RasterImage, region: &Rectangle) -> SliceResult<String> {
        let bytes = self.encoder.encode_region(image, region)?;
        wrap_encoded(&bytes, self.encoder.mime_type(), region.width(), region.height())
    }
}

impl Default for DocumentExporter {
    fn default() -> Self {
        DocumentExporter::new(Box::new(crate::raster::PngRegionEncoder::new()))
    }
}

/// What an SVG document declares about its canvas and embedded image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    /// `width`/`height` of the `<svg>` element
    pub canvas: (u32, u32),
    /// `width`/`height` of the `<image>` element
    pub image: (u32, u32),
    /// Offset of the `<image>` element
    pub origin: (u32, u32),
    /// MIME type from the data URI
    pub mime_type: String,
    /// Decoded bytes from the data URI
    pub payload: Vec<u8>,
}

/// Read back the canvas size and embedded image of a wrapped document
///
/// Returns `None` if the document is not a single-image SVG as produced by
/// `wrap_encoded`.
pub fn inspect_document(document: &str) -> Option<DocumentInfo> {
    let mut reader = Reader::from_str(document);
    let mut canvas = None;
    let mut embedded = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) | Ok(Event::Empty(element)) => {
                match element.name().as_ref() {
                    b"svg" => {
                        canvas = Some((
                            attribute_u32(&element, "width")?,
                            attribute_u32(&element, "height")?,
                        ));
                    },
                    b"image" => {
                        let href = attribute_string(&element, "href")?;
                        embedded = Some((
                            (attribute_u32(&element, "width")?, attribute_u32(&element, "height")?),
                            (attribute_u32(&element, "x")?, attribute_u32(&element, "y")?),
                            href,
                        ));
                    },
                    _ => {},
                }
            },
            Ok(Event::Eof) => break,
            Err(_) => return None,
            _ => {},
        }
    }

    let canvas = canvas?;
    let (image, origin, href) = embedded?;
    let (mime_type, payload) = parse_data_uri(&href)?;

    Some(DocumentInfo { canvas, image, origin, mime_type, payload })
}

fn attribute_string(element: &BytesStart, name: &str) -> Option<String> {
    let attribute = element.try_get_attribute(name).ok()??;
    std::str::from_utf8(&attribute.value).ok().map(str::to_string)
}

fn attribute_u32(element: &BytesStart, name: &str) -> Option<u32> {
    attribute_string(element, name)?.trim().parse().ok()
}

/// Split `data:<mime>;base64,<payload>` into MIME type and decoded bytes
fn parse_data_uri(href: &str) -> Option<(String, Vec<u8>)> {
    let rest = href.strip_prefix("data:")?;
    let (mime_type, encoded) = rest.split_once(";base64,")?;
    let payload = BASE64.decode(encoded).ok()?;
    Some((mime_type.to_string(), payload))
}
