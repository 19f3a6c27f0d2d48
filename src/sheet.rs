//! Sheet composition.
//!
//! Labels are tiled onto copies of the sheet template, 20 per sheet,
//! two per die-cut sticker. Labels alternate orientation so a pair sits
//! back to back across a sticker: even-indexed labels rotate
//! counter-clockwise into the left column, odd-indexed labels rotate
//! clockwise into the right column.

use image::imageops;
use image::RgbaImage;
use log::info;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::layout::Layout;
use crate::LABELS_PER_SHEET;

/// Which way a label is rotated before pasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// Placement of the label at `index` in the batch: rotation direction
/// and adjusted paste anchor on its sheet.
///
/// Pure function of the index. The grid slot is `(index / 2) % 10`
/// into the reference-point table; unflipped labels shift left by the
/// full generation width to land in the left column, and every label
/// shifts up by the generation height because rotation moves the
/// effective anchor corner. The shifts deliberately use the generation
/// shape, not the trimmed result shape; the template registration is
/// calibrated against that math.
pub fn placement(index: usize, layout: &Layout) -> (Rotation, (i64, i64)) {
    let flipped = index % 2 == 1;
    let (gw, gh) = layout.generation_shape;
    let slot = (index / 2) % layout.reference_points.len();
    let (rx, ry) = layout.reference_points[slot];

    let x = if flipped { rx } else { rx - gw as i64 };
    let y = ry - gh as i64;

    let rotation = if flipped {
        Rotation::Clockwise
    } else {
        Rotation::CounterClockwise
    };

    (rotation, (x, y))
}

/// Tile `labels` onto fresh copies of `template`, producing
/// `ceil(n / 20)` sheets. Zero labels produce zero sheets.
pub fn compose(labels: &[RgbaImage], template: &RgbaImage, layout: &Layout) -> Vec<RgbaImage> {
    let sheet_count = (labels.len() + LABELS_PER_SHEET - 1) / LABELS_PER_SHEET;
    let mut sheets: Vec<RgbaImage> = (0..sheet_count).map(|_| template.clone()).collect();

    for (i, label) in labels.iter().enumerate() {
        let (rotation, (x, y)) = placement(i, layout);
        let rotated = match rotation {
            Rotation::Clockwise => imageops::rotate90(label),
            Rotation::CounterClockwise => imageops::rotate270(label),
        };
        imageops::overlay(&mut sheets[i / LABELS_PER_SHEET], &rotated, x, y);
    }

    sheets
}

/// Write sheets into `output_dir` as `list_0.png`, `list_1.png`, ...
///
/// The directory is not created here; a missing or unwritable directory
/// fails on the first sheet.
pub fn save(sheets: &[RgbaImage], output_dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut written = Vec::with_capacity(sheets.len());

    for (i, sheet) in sheets.iter().enumerate() {
        let path = output_dir.join(format!("list_{}.png", i));
        sheet
            .save(&path)
            .map_err(|source| Error::SheetWrite {
                path: path.clone(),
                source,
            })?;
        info!("wrote {:?}", path);
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::default()
    }

    #[test]
    fn first_label_goes_left_unflipped() {
        let (rotation, anchor) = placement(0, &layout());
        assert_eq!(rotation, Rotation::CounterClockwise);
        // reference point 0 is (655, 747); left column shifts by the
        // 600 px generation width, both columns shift up by 600
        assert_eq!(anchor, (55, 147));
    }

    #[test]
    fn second_label_shares_the_sticker_flipped() {
        let (rotation, anchor) = placement(1, &layout());
        assert_eq!(rotation, Rotation::Clockwise);
        assert_eq!(anchor, (655, 147));
    }

    #[test]
    fn third_label_moves_to_the_next_sticker() {
        let (rotation, anchor) = placement(2, &layout());
        assert_eq!(rotation, Rotation::CounterClockwise);
        assert_eq!(anchor, (1296, 147));
    }

    #[test]
    fn grid_wraps_after_ten_stickers() {
        let l = layout();
        assert_eq!(placement(20, &l), placement(0, &l));
        assert_eq!(placement(21, &l), placement(1, &l));
    }

    #[test]
    fn parity_alternates_down_the_batch() {
        let l = layout();
        for i in 0..40 {
            let (rotation, _) = placement(i, &l);
            if i % 2 == 0 {
                assert_eq!(rotation, Rotation::CounterClockwise);
            } else {
                assert_eq!(rotation, Rotation::Clockwise);
            }
        }
    }

    fn blank_label() -> RgbaImage {
        RgbaImage::new(590, 590)
    }

    fn blank_template() -> RgbaImage {
        RgbaImage::new(2551, 3751)
    }

    #[test]
    fn sheet_count_rounds_up() {
        let l = layout();
        let template = blank_template();

        let labels: Vec<_> = (0..20).map(|_| blank_label()).collect();
        assert_eq!(compose(&labels, &template, &l).len(), 1);

        let labels: Vec<_> = (0..21).map(|_| blank_label()).collect();
        assert_eq!(compose(&labels, &template, &l).len(), 2);
    }

    #[test]
    fn no_labels_no_sheets() {
        let sheets = compose(&[], &blank_template(), &layout());
        assert!(sheets.is_empty());
    }

    #[test]
    fn labels_land_on_their_sheet_in_order() {
        let l = layout();
        let template = blank_template();

        // opaque red labels; sheet 0 must stay untouched where sheet 1
        // gets its 21st label
        let label = RgbaImage::from_pixel(590, 590, image::Rgba([255, 0, 0, 255]));
        let labels: Vec<_> = (0..21).map(|_| label.clone()).collect();
        let sheets = compose(&labels, &template, &l);

        // index 20 reuses slot 0 on sheet 1
        let (_, (x, y)) = placement(20, &l);
        let probe = (x as u32 + 10, y as u32 + 10);
        assert_eq!(sheets[1].get_pixel(probe.0, probe.1).0, [255, 0, 0, 255]);

        // the matching right-column slot of sheet 1 is still blank
        let (_, (rx, ry)) = placement(21, &l);
        assert_eq!(sheets[1].get_pixel(rx as u32 + 10, ry as u32 + 10).0[3], 0);
    }
}
