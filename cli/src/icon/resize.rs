use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Resamples the image to the target dimensions.
///
/// Lanczos3 keeps downscaled frames free of aliasing; sources smaller than
/// the target are scaled up with the same filter.
pub fn resize_rgba(image: &RgbaImage, target_width: u32, target_height: u32) -> RgbaImage {
    imageops::resize(image, target_width, target_height, FilterType::Lanczos3)
}
