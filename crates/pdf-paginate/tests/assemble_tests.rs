use image::{DynamicImage, Rgb, RgbImage};
use lopdf::Document;
use pdf_paginate::*;

fn test_image(width: u32, height: u32) -> SourceImage {
    let image = RgbImage::from_fn(width, height, |x, y| {
        if (x / 20 + y / 20) % 2 == 0 {
            Rgb([255, 255, 255])
        } else {
            Rgb([30, 60, 90])
        }
    });
    SourceImage::new(DynamicImage::ImageRgb8(image)).unwrap()
}

fn options(scaling: ScalingPolicy) -> PrintOptions {
    PrintOptions {
        scaling,
        ..Default::default()
    }
}

#[test]
fn test_build_single_page() {
    let request = PrintRequest::new(options(ScalingPolicy::FitToPage), test_image(300, 200));
    let bytes = request.build_pdf().unwrap();
    assert!(bytes.starts_with(b"%PDF"));

    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn test_build_multi_page_matches_plan() {
    let request = PrintRequest::new(
        options(ScalingPolicy::ScaleToMultiplePages),
        test_image(200, 4000),
    );
    let layout = request.layout().unwrap();
    assert!(layout.plan.page_count() > 1);

    let bytes = request.build_pdf().unwrap();
    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), layout.plan.page_count());
}

#[test]
fn test_build_without_title() {
    let mut options = options(ScalingPolicy::OriginalSize);
    options.title = None;
    let request = PrintRequest::new(options, test_image(50, 50));
    let bytes = request.build_pdf().unwrap();
    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn test_assemble_plan_directly() {
    let image = test_image(100, 1000);
    let geometry = PageGeometry::from_dimensions(200.0, 300.0, 10.0).unwrap();
    let plan = plan(
        geometry.content_width,
        geometry.content_height,
        image.pixel_width(),
        image.pixel_height(),
        ScalingPolicy::ScaleToMultiplePages,
    )
    .unwrap();
    assert_eq!(plan.page_count(), 4);

    let bytes = assemble(&image, &plan, &geometry, None).unwrap();
    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 4);
}

#[test]
fn test_decode_png_bytes() {
    let mut png = Vec::new();
    DynamicImage::new_rgb8(64, 32)
        .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .unwrap();
    let image = SourceImage::from_bytes(&png).unwrap();
    assert_eq!((image.pixel_width(), image.pixel_height()), (64, 32));
}

#[test]
fn test_decode_garbage_is_image_error() {
    let result = SourceImage::from_bytes(b"definitely not a png");
    assert!(matches!(result, Err(PaginateError::Image(_))));
}

#[tokio::test]
async fn test_generate_pdf_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diagram.pdf");

    let request = PrintRequest::new(
        options(ScalingPolicy::ScaleToMultiplePages),
        test_image(200, 4000),
    );
    let layout = request.generate_pdf(&path).await.unwrap();

    let doc = Document::load(&path).unwrap();
    assert_eq!(doc.get_pages().len(), layout.plan.page_count());
}

#[tokio::test]
async fn test_failed_plan_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diagram.pdf");

    let mut options = options(ScalingPolicy::FitToPage);
    options.margin_mm = 80.0;
    let request = PrintRequest::new(options, test_image(10, 10));

    let result = request.generate_pdf(&path).await;
    assert!(matches!(result, Err(PaginateError::Config(_))));
    assert!(!path.exists());
}
