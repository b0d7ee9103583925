use crate::icon::{resize, IconGeneratorError};
use image::{ImageFormat, RgbaImage};
use std::path::Path;

/// File name of the touch icon inside the output directory.
pub const FILE_NAME: &str = "apple-touch-icon.png";

/// Edge length of the touch icon in pixels.
pub const SIZE: u32 = 180;

pub fn process_png_target(
    image: &RgbaImage,
    output_path: &Path,
) -> Result<(), IconGeneratorError> {
    let resized = resize::resize_rgba(image, SIZE, SIZE);

    // Write the PNG to the output
    resized.save_with_format(output_path, ImageFormat::Png)?;

    Ok(())
}
