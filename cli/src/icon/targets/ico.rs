use crate::icon::{resize, IconGeneratorError};
use image::RgbaImage;
use std::fs::File;
use std::path::Path;

/// File name of the icon bundle inside the output directory.
pub const FILE_NAME: &str = "favicon.ico";

/// Frame sizes embedded in the bundle, smallest first.
pub const FRAME_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

pub fn process_ico_target(
    image: &RgbaImage,
    output_path: &Path,
) -> Result<(), IconGeneratorError> {
    // Generate a new ICO directory
    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);

    for size in FRAME_SIZES {
        let frame = resize::resize_rgba(image, size, size);
        let icon_image = ico::IconImage::from_rgba_data(size, size, frame.into_raw());

        // Add the frame to the ICO directory
        icon_dir.add_entry(ico::IconDirEntry::encode(&icon_image)?);
    }

    // Write the ICO directory to the output
    let mut writer = File::create(output_path)?;
    icon_dir.write(&mut writer)?;

    Ok(())
}
