//! Label rendering checks against the bundled resources (font, icon,
//! sheet template under `resources/`).

use image::{GrayImage, Luma, RgbaImage};
use pinot_labels::{compose, LabelRenderer, Layout, Resources};

fn renderer() -> (Layout, LabelRenderer, RgbaImage) {
    let layout = Layout::default();
    let resources = Resources::load(&layout).expect("bundled resources should load");
    let renderer = LabelRenderer::new(layout.clone(), resources.font, resources.icon);
    (layout, renderer, resources.template)
}

#[test]
fn label_has_the_result_shape() {
    let (layout, renderer, _) = renderer();
    let label = renderer.render("AB12").unwrap();
    assert_eq!(
        (label.width(), label.height()),
        layout.result_shape.unwrap()
    );
}

#[test]
fn rendering_the_same_identifier_twice_is_pixel_identical() {
    let (_, renderer, _) = renderer();
    let first = renderer.render("AB12").unwrap();
    let second = renderer.render("AB12").unwrap();
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn overlong_identifier_clips_without_error() {
    let (layout, renderer, _) = renderer();
    let long_id = "X".repeat(100);
    let label = renderer.render(&long_id).unwrap();
    // the text box is fixed; extra glyphs fall off the edge instead of
    // growing the label
    assert_eq!(
        (label.width(), label.height()),
        layout.result_shape.unwrap()
    );
}

#[test]
fn label_qr_region_decodes_to_the_device_url() {
    let (layout, renderer, _) = renderer();
    let label = renderer.render("AB12").unwrap();

    // flatten onto white the way the label reads once printed
    let mut gray = GrayImage::from_pixel(label.width(), label.height(), Luma([255]));
    for (x, y, px) in label.enumerate_pixels() {
        if px.0[3] > 127 {
            gray.put_pixel(x, y, Luma([0]));
        }
    }

    let mut prepared = rqrr::PreparedImage::prepare(gray);
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one QR symbol on the label");
    let (_, content) = grids[0].decode().unwrap();
    assert_eq!(content, layout.device_url("AB12"));
}

#[test]
fn rendered_labels_compose_onto_the_bundled_template() {
    let (layout, renderer, template) = renderer();
    let labels = vec![
        renderer.render("AB12").unwrap(),
        renderer.render("AB13").unwrap(),
        renderer.render("AB14").unwrap(),
    ];

    let sheets = compose(&labels, &template, &layout);
    assert_eq!(sheets.len(), 1);
    assert_eq!(
        (sheets[0].width(), sheets[0].height()),
        (template.width(), template.height())
    );
}
