//! `imagekit_io_fs` v1:
//! Image copy engine for the `imagekit` tool.
//!
//! Module map:
//! - `conf`   : fixed paths, suffixes, default presets
//! - `copy`   : source listing and copy orchestration
//! - `spec`   : enums/options/errors
//! - `report` : run-time report model
//! - `util`   : shared helper functions

pub mod conf;
pub mod copy;
pub mod report;
pub mod spec;
mod util;

pub use conf::{
    C_DIR_DESTINATION, C_DIR_SOURCE, TUP_SUFFIXES_IMAGE, derive_default_copy_options,
    derive_default_suffixes,
};
pub use copy::copy_images;
pub use report::{ReportImageCopy, ReportImageCopyBuilder};
pub use spec::{
    CopyImagesError, EnumConflictRule, EnumPatternMode, EnumSymlinkRule, SpecCopyFailure,
    SpecImageCopyOptions,
};
