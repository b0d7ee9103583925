use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::icon::{IconGenerator, IconGeneratorError, IconTarget, OUTPUT_DIR, SOURCE_FILE};

mod icon;

fn main() -> Result<ExitCode, IconGeneratorError> {
    // Set up logging using tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!(
        "{} version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    match run(Path::new(OUTPUT_DIR)) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(IconGeneratorError::SourceNotFound(path)) => {
            tracing::error!("Source image not found: {}", path.display());
            Ok(ExitCode::FAILURE)
        }
        // A corrupt source invalidates the entire run
        Err(err) => Err(err),
    }
}

fn run(output_dir: &Path) -> Result<(), IconGeneratorError> {
    let source = output_dir.join(SOURCE_FILE);
    if !source.exists() {
        return Err(IconGeneratorError::SourceNotFound(source));
    }

    let generator = IconGenerator::from_file(&source)?;

    // The two artifacts are independent, a failed write of one must not
    // prevent the other from being attempted.
    for target in [IconTarget::Bundle, IconTarget::TouchIcon] {
        match generator.process(target, output_dir) {
            Ok(path) => tracing::info!("Wrote {}", path.display()),
            Err(err) => tracing::error!("Failed to write {}: {}", target.file_name(), err),
        }
    }

    Ok(())
}
