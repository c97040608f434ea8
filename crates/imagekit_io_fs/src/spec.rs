//! Copy specification models and top-level error types.

use std::fmt;
use std::path::PathBuf;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Symlink handling policy for source entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumSymlinkRule {
    /// Follow the link and copy the target bytes.
    Follow,
    /// Re-create the symbolic link at destination (do not copy target bytes).
    Preserve,
    /// Ignore symlink entries.
    Skip,
}

/// Existing destination file conflict policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumConflictRule {
    /// Replace destination file with source file.
    Overwrite,
    /// Keep destination file and skip current source file.
    Keep,
    /// Record a failure and skip this file.
    Error,
}

/// Pattern matching mode for the exclusion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumPatternMode {
    /// Shell-like wildcards (`*`, `?`, character classes).
    Glob,
    /// Regular expression pattern.
    Regex,
    /// Exact substring match.
    Literal,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Input options for `copy_images`.
#[derive(Debug, Clone)]
pub struct SpecImageCopyOptions {
    /// Recognized filename suffixes; `None` selects `conf::TUP_SUFFIXES_IMAGE`.
    pub suffixes_include: Option<Vec<String>>,
    /// Exclude patterns applied to file basename.
    pub patterns_exclude: Option<Vec<String>>,
    /// Pattern interpretation mode.
    pub rule_pattern: EnumPatternMode,
    /// Conflict behavior for destination files.
    pub rule_conflict: EnumConflictRule,
    /// Symlink handling behavior.
    pub rule_symlink: EnumSymlinkRule,
    /// Do not mutate filesystem; record what would happen.
    pub if_dry_run: bool,
}

impl Default for SpecImageCopyOptions {
    fn default() -> Self {
        Self {
            suffixes_include: None,
            patterns_exclude: None,
            rule_pattern: EnumPatternMode::Glob,
            rule_conflict: EnumConflictRule::Overwrite,
            rule_symlink: EnumSymlinkRule::Follow,
            if_dry_run: false,
        }
    }
}

/// One copy failure item with entry name + error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecCopyFailure {
    /// Basename of the source entry that failed.
    pub name: String,
    /// User-facing error text.
    pub exception: String,
}

/// "Top-level call failed" errors (input validation / setup stage).
#[derive(Debug)]
pub enum CopyImagesError {
    /// Invalid exclude pattern.
    InvalidPattern(String),
    /// Source and destination overlap (`src` contains `dst` or vice versa).
    SourceDestinationOverlap {
        /// Normalized source directory.
        source: PathBuf,
        /// Normalized destination directory.
        destination: PathBuf,
    },
    /// Source directory listing failed.
    SourceListFailed {
        /// Source path that could not be listed.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Destination directory initialization failed.
    DestinationInitFailed {
        /// Destination path that failed initialization.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
}

impl fmt::Display for CopyImagesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern(msg) => write!(f, "{msg}"),
            Self::SourceDestinationOverlap {
                source,
                destination,
            } => write!(
                f,
                "Source and destination directories overlap: {} <-> {}",
                source.display(),
                destination.display()
            ),
            Self::SourceListFailed { path, message } => {
                write!(f, "Failed to list source {}: {message}", path.display())
            }
            Self::DestinationInitFailed { path, message } => {
                write!(
                    f,
                    "Failed to initialize destination {}: {message}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CopyImagesError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
