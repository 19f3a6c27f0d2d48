//! PINOT Label Generator
//!
//! This crate renders printable adhesive labels for PINOT testbed devices
//! and tiles them onto TownStix US-10 sheet templates for batch printing.
//! Each label carries a QR code pointing at the device page, the device
//! identifier as text, the project name and the site URL.
//!
//! # Example
//!
//! ```rust,no_run
//! use pinot_labels::{compose, save, LabelRenderer, Layout, Resources};
//!
//! let layout = Layout::default();
//! let resources = Resources::load(&layout).unwrap();
//! let renderer = LabelRenderer::new(layout.clone(), resources.font, resources.icon);
//!
//! let labels = ["AB12", "AB13"]
//!     .iter()
//!     .map(|id| renderer.render(id))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let sheets = compose(&labels, &resources.template, &layout);
//! save(&sheets, "output".as_ref()).unwrap();
//! ```

mod error;
mod label;
mod layout;
mod qr;
mod resources;
mod sheet;
mod text;

pub use crate::{
    error::Error,
    label::LabelRenderer,
    layout::Layout,
    resources::Resources,
    sheet::{compose, placement, save, Rotation},
};

/// Number of labels packed onto one US-10 sheet.
///
/// The TownStix US-10 paper has ten die-cut stickers per page and each
/// sticker takes a pair of labels (one straight, one flipped beside it),
/// so a full sheet holds 20 labels.
pub const LABELS_PER_SHEET: usize = 20;

/// Parse a device identifier list: one identifier per line, trimmed,
/// blank lines discarded. No uniqueness or format validation.
pub fn parse_device_ids(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_drops_blanks() {
        let ids = parse_device_ids("AB12\n\n  AB13  \n\t\nAB14\n");
        assert_eq!(ids, vec!["AB12", "AB13", "AB14"]);
    }

    #[test]
    fn parse_preserves_input_order() {
        let ids = parse_device_ids("z\na\nm\n");
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn parse_empty_input_yields_no_ids() {
        assert!(parse_device_ids("").is_empty());
        assert!(parse_device_ids("\n \n\t\n").is_empty());
    }
}
