//! Label rendering.
//!
//! One label is a fixed 600x600 transparent canvas with five elements
//! pasted at hardcoded coordinates: the QR code, the rotated project
//! name, the site URL, the device identifier (once or twice) and the
//! project icon. There is no dynamic layout; everything is driven by
//! the [`Layout`] tables.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::debug;
use rusttype::Font;

use crate::error::Error;
use crate::layout::Layout;
use crate::{qr, text};

/// Renders one label per device identifier.
///
/// Owns the parsed font and the icon bitmap so resource files are
/// touched once, before the first label, and a missing file aborts the
/// run up front.
pub struct LabelRenderer {
    layout: Layout,
    font: Font<'static>,
    icon: RgbaImage,
}

impl LabelRenderer {
    pub fn new(layout: Layout, font: Font<'static>, icon: RgbaImage) -> Self {
        LabelRenderer { layout, font, icon }
    }

    /// Render the label for one device identifier.
    ///
    /// The only failure mode is an identifier so long its URL exceeds
    /// QR capacity; overlong identifier *text* clips silently instead
    /// (the text box is fixed, matching the printed layout).
    pub fn render(&self, device_id: &str) -> Result<RgbaImage, Error> {
        let layout = &self.layout;
        let (width, height) = layout.generation_shape;
        let mut canvas = RgbaImage::from_pixel(width, height, layout.fill_color);

        // QR code, scaled to its footprint with hard module edges so it
        // stays decodable after printing
        let url = layout.device_url(device_id);
        debug!("rendering label for {} ({})", device_id, url);
        let symbol = qr::encode(&url, layout.qr_module_scale, layout.main_color)?;
        let symbol = imageops::resize(
            &symbol,
            layout.qr_shape.0,
            layout.qr_shape.1,
            FilterType::Nearest,
        );
        imageops::overlay(&mut canvas, &symbol, layout.qr_coords.0, layout.qr_coords.1);

        // project name, reading top-to-bottom along the left edge
        let name = text::render(
            &self.font,
            &layout.project_name,
            layout.project_font_size,
            layout.project_name_shape,
            layout.main_color,
        );
        let name = imageops::rotate90(&name);
        imageops::overlay(
            &mut canvas,
            &name,
            layout.project_name_coords.0,
            layout.project_name_coords.1,
        );

        // site URL caption
        let caption = text::render(
            &self.font,
            &layout.web_url,
            layout.web_url_font_size,
            layout.web_url_shape,
            layout.main_color,
        );
        imageops::overlay(
            &mut canvas,
            &caption,
            layout.web_url_coords.0,
            layout.web_url_coords.1,
        );

        // device identifier, pasted twice when the sticker gets cut
        // into a cap half and a device half
        let id_text = text::render(
            &self.font,
            device_id,
            layout.device_id_font_size,
            layout.device_id_shape,
            layout.main_color,
        );
        imageops::overlay(
            &mut canvas,
            &id_text,
            layout.device_id_coords.0,
            layout.device_id_coords.1,
        );
        if let Some((x, y)) = layout.device_id_alt_coords {
            imageops::overlay(&mut canvas, &id_text, x, y);
        }

        // icon, rotated the same way as the project name
        let icon = imageops::resize(
            &self.icon,
            layout.icon_shape.0,
            layout.icon_shape.1,
            FilterType::CatmullRom,
        );
        let icon = imageops::rotate90(&icon);
        imageops::overlay(&mut canvas, &icon, layout.icon_coords.0, layout.icon_coords.1);

        // registration trim for the die-cut border of the template
        let label = match layout.result_shape {
            Some((w, h)) => imageops::resize(&canvas, w, h, FilterType::CatmullRom),
            None => canvas,
        };

        Ok(label)
    }
}
