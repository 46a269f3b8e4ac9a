//! Region segmentation over an alpha mask
//!
//! Two operations share one `AlphaMask`:
//! - `bounding_box` finds the tight rectangle around every non-transparent pixel
//! - `grid_regions` splits the canvas into the cells formed by runs of
//!   non-blank rows and runs of non-blank columns
//!
//! The grid split is an axis-aligned approximation of connected components.
//! Content that cannot be separated by a fully blank row or column stays in
//! one cell. When the separators do not line up, some cells of the raw grid
//! hold no content; `grid_cells` keeps them, `grid_regions` drops them.

use log::debug;

use super::alpha_mask::AlphaMask;
use super::interval::{extract_intervals, Interval};
use super::rectangle::Rectangle;

/// How an image is cut into output regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentMode {
    /// One region: the bounding box of all content
    #[default]
    Crop,
    /// One region per grid cell
    Split,
}

/// Smallest rectangle enclosing all pixels with alpha > 0
///
/// # Returns
/// The bounding box, or `None` when the image is fully transparent
pub fn bounding_box(mask: &AlphaMask) -> Option<Rectangle> {
    // The first and last non-blank row/column bound the content exactly.
    let (y0, y1) = content_span(mask.blank_rows())?;
    let (x0, x1) = content_span(mask.blank_cols())?;

    let rect = Rectangle::new(x0 as u32, y0 as u32, x1 as u32, y1 as u32);
    debug!("Bounding box: {:?}", rect);
    rect
}

/// Non-blank row intervals followed by non-blank column intervals
pub fn grid_intervals(mask: &AlphaMask) -> (Vec<Interval>, Vec<Interval>) {
    (extract_intervals(mask.blank_rows()), extract_intervals(mask.blank_cols()))
}

/// Every cell of the row-run x column-run grid, in row-major order
pub fn grid_cells(mask: &AlphaMask) -> Vec<Rectangle> {
    let (y_intervals, x_intervals) = grid_intervals(mask);
    debug!("Grid: {} row runs x {} column runs", y_intervals.len(), x_intervals.len());
    grid_from_intervals(&y_intervals, &x_intervals)
}

/// Grid cells that contain at least one non-transparent pixel
///
/// Order is row-major; region number `n` (1-based) is the `n`-th element.
/// Returns an empty vector when every row or every column is blank.
pub fn grid_regions(mask: &AlphaMask) -> Vec<Rectangle> {
    let cells = grid_cells(mask);
    let total = cells.len();
    let regions: Vec<Rectangle> = cells.into_iter().filter(|cell| mask.has_content(cell)).collect();
    if regions.len() < total {
        debug!("Dropped {} grid cells without content", total - regions.len());
    }
    regions
}

/// Cartesian product of row runs (outer) and column runs (inner)
pub fn grid_from_intervals(y_intervals: &[Interval], x_intervals: &[Interval]) -> Vec<Rectangle> {
    y_intervals
        .iter()
        .flat_map(|&y_span| {
            x_intervals
                .iter()
                .map(move |&x_span| Rectangle::from_intervals(x_span, y_span))
        })
        .collect()
}

/// Regions for the given mode
pub fn segment(mask: &AlphaMask, mode: SegmentMode) -> Vec<Rectangle> {
    match mode {
        SegmentMode::Crop => bounding_box(mask).into_iter().collect(),
        SegmentMode::Split => grid_regions(mask),
    }
}

/// Index range from the first to one past the last `false` flag
fn content_span(blank_flags: &[bool]) -> Option<(usize, usize)> {
    let first = blank_flags.iter().position(|&b| !b)?;
    let last = blank_flags.iter().rposition(|&b| !b)?;
    Some((first, last + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::RasterImage;
    use image::{imageops, Rgba, RgbaImage};

    const INK: Rgba<u8> = Rgba([20, 40, 60, 255]);

    fn fill(pixels: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32) {
        for y in y0..y1 {
            for x in x0..x1 {
                pixels.put_pixel(x, y, INK);
            }
        }
    }

    fn mask_of(pixels: &RgbaImage) -> AlphaMask {
        AlphaMask::compute(&RasterImage::from_rgba(pixels.clone()).unwrap())
    }

    fn tuples(rects: &[Rectangle]) -> Vec<(u32, u32, u32, u32)> {
        rects.iter().map(Rectangle::as_tuple).collect()
    }

    #[test]
    fn test_bounding_box_of_centered_block() {
        let mut pixels = RgbaImage::new(10, 10);
        fill(&mut pixels, 2, 2, 5, 5);
        let bbox = bounding_box(&mask_of(&pixels)).unwrap();
        assert_eq!(bbox.as_tuple(), (2, 2, 5, 5));
    }

    #[test]
    fn test_bounding_box_of_blank_image() {
        let pixels = RgbaImage::new(8, 4);
        assert!(bounding_box(&mask_of(&pixels)).is_none());
    }

    #[test]
    fn test_bounding_box_spans_scattered_pixels() {
        let mut pixels = RgbaImage::new(9, 7);
        pixels.put_pixel(1, 5, INK);
        pixels.put_pixel(6, 2, Rgba([0, 0, 0, 1]));
        let bbox = bounding_box(&mask_of(&pixels)).unwrap();
        assert_eq!(bbox.as_tuple(), (1, 2, 7, 6));
    }

    #[test]
    fn test_bounding_box_is_idempotent() {
        let mut pixels = RgbaImage::new(12, 9);
        fill(&mut pixels, 3, 1, 6, 4);
        pixels.put_pixel(10, 7, INK);
        let bbox = bounding_box(&mask_of(&pixels)).unwrap();

        let cropped = imageops::crop_imm(&pixels, bbox.x0(), bbox.y0(), bbox.width(), bbox.height())
            .to_image();
        let again = bounding_box(&mask_of(&cropped)).unwrap();
        assert_eq!(again.as_tuple(), (0, 0, bbox.width(), bbox.height()));
    }

    #[test]
    fn test_grid_of_opaque_image_is_full_canvas() {
        let pixels = RgbaImage::from_pixel(5, 3, INK);
        let regions = grid_regions(&mask_of(&pixels));
        assert_eq!(tuples(&regions), vec![(0, 0, 5, 3)]);
    }

    #[test]
    fn test_grid_of_blank_image_is_empty() {
        let pixels = RgbaImage::new(5, 3);
        assert!(grid_regions(&mask_of(&pixels)).is_empty());
    }

    #[test]
    fn test_grid_of_two_diagonal_blocks() {
        let mut pixels = RgbaImage::new(6, 6);
        fill(&mut pixels, 0, 0, 2, 2);
        fill(&mut pixels, 4, 4, 6, 6);
        let mask = mask_of(&pixels);

        let (y_intervals, x_intervals) = grid_intervals(&mask);
        assert_eq!(y_intervals.len(), 2);
        assert_eq!(x_intervals.len(), 2);

        assert_eq!(
            tuples(&grid_cells(&mask)),
            vec![(0, 0, 2, 2), (4, 0, 6, 2), (0, 4, 2, 6), (4, 4, 6, 6)]
        );
        assert_eq!(tuples(&grid_regions(&mask)), vec![(0, 0, 2, 2), (4, 4, 6, 6)]);
    }

    #[test]
    fn test_grid_ordering_is_row_major() {
        let y_intervals = [Interval::new(0, 2).unwrap(), Interval::new(3, 5).unwrap()];
        let x_intervals = [Interval::new(0, 4).unwrap(), Interval::new(5, 8).unwrap()];
        let regions = grid_from_intervals(&y_intervals, &x_intervals);
        assert_eq!(
            tuples(&regions),
            vec![(0, 0, 4, 2), (5, 0, 8, 2), (0, 3, 4, 5), (5, 3, 8, 5)]
        );
    }

    #[test]
    fn test_grid_with_one_empty_axis() {
        let y_intervals = [Interval::new(0, 2).unwrap()];
        assert!(grid_from_intervals(&y_intervals, &[]).is_empty());
        assert!(grid_from_intervals(&[], &y_intervals).is_empty());
    }

    #[test]
    fn test_every_region_is_valid() {
        let mut pixels = RgbaImage::new(20, 11);
        fill(&mut pixels, 0, 0, 3, 2);
        fill(&mut pixels, 5, 4, 9, 5);
        fill(&mut pixels, 12, 7, 20, 11);
        pixels.put_pixel(15, 0, INK);
        let mask = mask_of(&pixels);

        let regions = grid_regions(&mask);
        assert!(!regions.is_empty());
        for rect in regions.iter().chain(grid_cells(&mask).iter()).chain(bounding_box(&mask).iter()) {
            assert!(rect.x1() > rect.x0());
            assert!(rect.y1() > rect.y0());
            assert!(rect.fits_within(20, 11));
        }
    }

    #[test]
    fn test_grid_cell_with_partial_content_is_kept() {
        // L-shaped content: the bottom-right cell is empty.
        let mut pixels = RgbaImage::new(5, 5);
        fill(&mut pixels, 0, 0, 2, 2);
        fill(&mut pixels, 3, 0, 5, 2);
        fill(&mut pixels, 0, 3, 2, 5);
        let regions = grid_regions(&mask_of(&pixels));
        assert_eq!(tuples(&regions), vec![(0, 0, 2, 2), (3, 0, 5, 2), (0, 3, 2, 5)]);
    }

    #[test]
    fn test_segment_modes() {
        let mut pixels = RgbaImage::new(7, 3);
        fill(&mut pixels, 0, 0, 2, 3);
        fill(&mut pixels, 4, 0, 7, 3);
        let mask = mask_of(&pixels);

        assert_eq!(tuples(&segment(&mask, SegmentMode::Crop)), vec![(0, 0, 7, 3)]);
        assert_eq!(
            tuples(&segment(&mask, SegmentMode::Split)),
            vec![(0, 0, 2, 3), (4, 0, 7, 3)]
        );
        assert!(segment(&mask_of(&RgbaImage::new(2, 2)), SegmentMode::Crop).is_empty());
    }
}
