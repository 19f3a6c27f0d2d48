//! QR symbol rendering.

use image::{Rgba, RgbaImage};
use qrcode::{EcLevel, QrCode};

use crate::error::Error;

/// Encode `data` as a QR symbol and rasterize it onto a transparent
/// canvas.
///
/// Error correction level M, minimum version that fits the data, square
/// modules of `module_scale` pixels, no quiet-zone border. Dark modules
/// are drawn in `ink`; light modules stay transparent so the symbol can
/// be pasted with its own alpha as the mask.
pub fn encode(data: &str, module_scale: u32, ink: Rgba<u8>) -> Result<RgbaImage, Error> {
    let code = QrCode::with_error_correction_level(data, EcLevel::M)?;
    let modules = code.to_colors();
    let width = code.width() as u32;

    let size = width * module_scale;
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));

    for (i, color) in modules.iter().enumerate() {
        if *color != qrcode::Color::Dark {
            continue;
        }
        let mx = (i as u32 % width) * module_scale;
        let my = (i as u32 / width) * module_scale;
        for dy in 0..module_scale {
            for dx in 0..module_scale {
                img.put_pixel(mx + dx, my + dy, ink);
            }
        }
    }

    Ok(img)
}
