pub mod ico;
pub mod png;

pub use ico::process_ico_target;
pub use png::process_png_target;
