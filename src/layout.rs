//! Layout configuration.
//!
//! Every shape, coordinate and color that determines where label
//! elements land is collected into one immutable [`Layout`] value that
//! gets injected into the renderer and the compositor. The defaults
//! reproduce the TownStix US-10 layout; nothing here changes at
//! runtime.

use image::Rgba;
use std::path::PathBuf;

/// Complete placement configuration for label rendering and sheet
/// composition.
///
/// Coordinates are paste anchors in pixels. Shapes are `(width,
/// height)`. The sheet reference points mark where each sticker column
/// begins on the template; the compositor adjusts them for rotation
/// before pasting (see [`crate::placement`]).
#[derive(Debug, Clone)]
pub struct Layout {
    /// Canvas size labels are composed at.
    pub generation_shape: (u32, u32),
    /// Final label size after the registration trim, if any.
    ///
    /// The US-10 layout trims 10 px per side so labels sit inside the
    /// die-cut border of the template.
    pub result_shape: Option<(u32, u32)>,

    /// URL prefix the device identifier is appended to for the QR code.
    pub device_url_base: String,
    /// Edge length of one QR module in pixels before the footprint
    /// resize.
    pub qr_module_scale: u32,
    pub qr_shape: (u32, u32),
    pub qr_coords: (i64, i64),

    /// Branding text rotated onto the left edge of the label.
    pub project_name: String,
    pub project_font_size: f32,
    pub project_name_shape: (u32, u32),
    pub project_name_coords: (i64, i64),

    /// Human-readable site URL printed under the QR code.
    pub web_url: String,
    pub web_url_font_size: f32,
    pub web_url_shape: (u32, u32),
    pub web_url_coords: (i64, i64),

    pub device_id_font_size: f32,
    pub device_id_shape: (u32, u32),
    /// First paste position of the identifier text (on the cap half).
    pub device_id_coords: (i64, i64),
    /// Second paste position (on the device half), for layouts that cut
    /// one sticker into two. `None` renders the identifier once.
    pub device_id_alt_coords: Option<(i64, i64)>,

    pub icon_shape: (u32, u32),
    pub icon_coords: (i64, i64),

    /// Canvas background. Transparent so sheet pasting keeps the
    /// template visible between elements.
    pub fill_color: Rgba<u8>,
    /// Ink for QR modules and text.
    pub main_color: Rgba<u8>,

    /// Paste anchors on the sheet template, one per sticker, two
    /// columns by five rows. Fixed by the physical paper product.
    pub reference_points: [(i64, i64); 10],

    pub font_path: PathBuf,
    pub icon_path: PathBuf,
    pub template_path: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            generation_shape: (600, 600),
            result_shape: Some((590, 590)),

            device_url_base: "https://pinot.cs.ucsb.edu/devices/".to_string(),
            qr_module_scale: 10,
            qr_shape: (380, 380),
            qr_coords: (174, 25),

            project_name: "PINOT".to_string(),
            project_font_size: 120.0,
            project_name_shape: (300, 126),
            project_name_coords: (20, 20),

            web_url: "pinot.cs.ucsb.edu".to_string(),
            web_url_font_size: 62.0,
            web_url_shape: (541, 90),
            web_url_coords: (39, 411),

            device_id_font_size: 62.0,
            device_id_shape: (541, 90),
            device_id_coords: (39, 473),
            device_id_alt_coords: Some((39, 543)),

            icon_shape: (80, 116),
            icon_coords: (37, 327),

            fill_color: Rgba([0, 0, 0, 0]),
            main_color: Rgba([0, 0, 0, 255]),

            reference_points: [
                (655, 747),
                (1896, 747),
                (655, 1348),
                (1896, 1348),
                (655, 1949),
                (1896, 1949),
                (655, 2550),
                (1896, 2550),
                (655, 3151),
                (1896, 3151),
            ],

            font_path: PathBuf::from("resources/DejaVuSansMono.ttf"),
            icon_path: PathBuf::from("resources/pinot_ico.png"),
            template_path: PathBuf::from("resources/US-10.png"),
        }
    }
}

impl Layout {
    /// URL encoded into the QR code for one device.
    pub fn device_url(&self, device_id: &str) -> String {
        format!("{}{}", self.device_url_base, device_id)
    }
}
