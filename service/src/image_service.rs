use crate::domain::error::ErrorResponse;
use crate::domain::error::ErrorResponse::{ImageDecodeError, ImageEncodeError, ImageResizeError};
use fast_image_resize::{FilterType, ResizeAlg, ResizeOptions, Resizer, SrcCropping};
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use std::io::Cursor;
use tracing::{debug, error};

pub const THUMB_MAX_WIDTH: u32 = 300;
pub const THUMB_MAX_HEIGHT: u32 = 300;
pub const THUMB_JPEG_QUALITY: u8 = 80;

pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

const RESIZE_OPTS: ResizeOptions = ResizeOptions {
    algorithm: ResizeAlg::Convolution(FilterType::Lanczos3),
    cropping: SrcCropping::None,
    mul_div_alpha: true,
};

pub fn is_supported_image(extension: &str) -> bool {
    SUPPORTED_IMAGE_EXTENSIONS.contains(&extension)
}

/// Decode, fit inside the bounding box and re-encode as JPEG.
pub fn make_thumbnail(bytes: &[u8], key: &str) -> Result<Vec<u8>, ErrorResponse> {
    let image = image::load_from_memory(bytes).map_err(|_| {
        error!("Could not decode image at {key}");
        ImageDecodeError { key: key.to_string() }
    })?;

    let resized = resize_to_fit(image, THUMB_MAX_WIDTH, THUMB_MAX_HEIGHT, key)?;
    encode_jpeg(resized, key)
}

/// Fit-inside target dimensions: aspect ratio preserved, never upscaled,
/// never below one pixel a side.
pub fn fit_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }
    let width_ratio = max_width as f64 / width as f64;
    let height_ratio = max_height as f64 / height as f64;
    let ratio = width_ratio.min(height_ratio);
    let new_width = ((width as f64 * ratio).round() as u32).max(1);
    let new_height = ((height as f64 * ratio).round() as u32).max(1);
    (new_width, new_height)
}

fn resize_to_fit(
    image: DynamicImage,
    max_width: u32,
    max_height: u32,
    key: &str,
) -> Result<DynamicImage, ErrorResponse> {
    // JPEG output has no alpha, so flatten the source up front. Source and
    // destination are both Rgb8 from here on.
    let src_image = DynamicImage::ImageRgb8(image.to_rgb8());

    let (new_width, new_height) = fit_dimensions(src_image.width(), src_image.height(), max_width, max_height);
    if (new_width, new_height) == (src_image.width(), src_image.height()) {
        debug!("Image already fits within {max_width}x{max_height}");
        return Ok(src_image);
    }

    let mut dst_image = DynamicImage::new(new_width, new_height, src_image.color());
    let mut resizer: Resizer = Resizer::new();
    resizer.resize(&src_image, &mut dst_image, &RESIZE_OPTS).map_err(|_| {
        error!("Could not resize image at {key}");
        ImageResizeError { key: key.to_string() }
    })?;
    Ok(dst_image)
}

fn encode_jpeg(image: DynamicImage, key: &str) -> Result<Vec<u8>, ErrorResponse> {
    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, THUMB_JPEG_QUALITY);
    image.to_rgb8().write_with_encoder(encoder).map_err(|_| {
        error!("Could not encode thumbnail for {key}");
        ImageEncodeError { key: key.to_string() }
    })?;
    Ok(buffer.into_inner())
}
