pub(crate) mod resize;
pub(crate) mod targets;

use image::RgbaImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the required source image inside the output directory.
pub const SOURCE_FILE: &str = "logo.png";

/// Directory the source is read from and both artifacts are written to.
pub const OUTPUT_DIR: &str = "dist";

/// The artifacts this tool can produce from a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconTarget {
    /// Multi-resolution icon bundle
    Bundle,

    /// Fixed-size touch icon
    TouchIcon,
}

impl IconTarget {
    /// The file name of this artifact inside the output directory
    pub fn file_name(self) -> &'static str {
        match self {
            IconTarget::Bundle => targets::ico::FILE_NAME,
            IconTarget::TouchIcon => targets::png::FILE_NAME,
        }
    }
}

pub struct IconGenerator {
    image: RgbaImage,
}

impl IconGenerator {
    /// Loads the source image, normalizing it to RGBA regardless of its
    /// original encoding.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, IconGeneratorError> {
        let image = image::open(path)?.into_rgba8();
        Ok(Self { image })
    }

    /// Generates a single target into the output directory.
    ///
    /// Returns the path of the written artifact.
    pub fn process(
        &self,
        target: IconTarget,
        output_dir: &Path,
    ) -> Result<PathBuf, IconGeneratorError> {
        let output_path = output_dir.join(target.file_name());

        // Check the processor to use
        match target {
            IconTarget::Bundle => targets::process_ico_target(&self.image, &output_path),
            IconTarget::TouchIcon => targets::process_png_target(&self.image, &output_path),
        }?;

        Ok(output_path)
    }
}

#[derive(Error, Debug)]
pub enum IconGeneratorError {
    #[error("the source image was not found at {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("an I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("an error occurred while decoding or encoding an image: {0}")]
    Image(#[from] image::ImageError),
}
