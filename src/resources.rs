//! Constant resource loading.
//!
//! The font, icon and sheet template are read once at startup, before
//! any label is rendered. A missing or broken file aborts the run with
//! the path in the message; there is nothing sensible to fall back to.

use image::RgbaImage;
use rusttype::Font;
use std::fs;

use crate::error::Error;
use crate::layout::Layout;

/// The three read-only resource files behind a [`Layout`].
pub struct Resources {
    pub font: Font<'static>,
    pub icon: RgbaImage,
    pub template: RgbaImage,
}

impl Resources {
    /// Load the font, icon and template named by `layout`.
    pub fn load(layout: &Layout) -> Result<Self, Error> {
        let font_data = fs::read(&layout.font_path).map_err(|source| Error::FontUnreadable {
            path: layout.font_path.clone(),
            source,
        })?;
        let font = Font::try_from_vec(font_data).ok_or_else(|| Error::FontInvalid {
            path: layout.font_path.clone(),
        })?;

        let icon = load_rgba(&layout.icon_path)?;
        let template = load_rgba(&layout.template_path)?;

        Ok(Resources {
            font,
            icon,
            template,
        })
    }
}

fn load_rgba(path: &std::path::Path) -> Result<RgbaImage, Error> {
    let img = image::open(path).map_err(|source| Error::ResourceImage {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}
