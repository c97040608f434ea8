//! Shared constants and derived defaults.

use crate::spec::SpecImageCopyOptions;

/// Source directory scanned for image files, relative to the working directory.
pub const C_DIR_SOURCE: &str = "images/2x";

/// Destination directory receiving the copies, relative to the working directory.
pub const C_DIR_DESTINATION: &str = "downloaded_images";

/// Recognized image filename suffixes. Matching is case-sensitive.
pub const TUP_SUFFIXES_IMAGE: [&str; 3] = [".jpg", ".png", ".gif"];

/// Build the recognized suffix list as owned strings.
pub fn derive_default_suffixes() -> Vec<String> {
    TUP_SUFFIXES_IMAGE.iter().map(|s| s.to_string()).collect()
}

/// Build the default option set used by the `imagekit` binary.
pub fn derive_default_copy_options() -> SpecImageCopyOptions {
    SpecImageCopyOptions::default()
}
