use super::*;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::new(width, height);
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
    buf.into_inner()
}

#[test]
fn decodes_png_header_dimensions() {
    let meta = dimensions_from_bytes(&png_bytes(3, 2)).unwrap();
    assert_eq!(meta, ImageMetadata { natural_width: 3, natural_height: 2 });
    assert!(meta.is_positive());
}

#[test]
fn rejects_non_image_payloads() {
    let err = dimensions_from_bytes(b"<html>not an image</html>").unwrap_err();
    assert!(matches!(err, MediaError::Decode(_)), "{err}");
}

#[test]
fn zero_dimension_metadata_is_not_positive() {
    assert!(!ImageMetadata { natural_width: 0, natural_height: 10 }.is_positive());
    assert!(!ImageMetadata { natural_width: 10, natural_height: 0 }.is_positive());
}

#[test]
fn http_probe_builds_with_timeouts() {
    assert!(HttpMediaProbe::new(30, 5, 1024 * 1024).is_ok());
}
