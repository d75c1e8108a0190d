//! Filesystem naming module.
//!
//! Provides:
//! - Destination directory naming
//! - Output filename generation and sanitizing

pub mod naming;
pub mod paths;

pub use naming::{
    infer_extension, output_filename, sanitize_filename, sanitize_path_component,
};
pub use paths::{destination_dir, folder_name};
