use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use regex::Regex;

use crate::report::ReportImageCopyBuilder;
use crate::spec::{CopyImagesError, EnumConflictRule, EnumPatternMode, EnumSymlinkRule};

////////////////////////////////////////////////////////////////////////////////
// #region PatternMatching

#[derive(Debug, Clone)]
pub(crate) enum TypePatternSeq {
    Literal(Vec<String>),
    Glob(Vec<GlobMatcher>),
    Regex(Vec<Regex>),
}

pub(crate) fn compile_exclude_patterns(
    patterns: Option<&[String]>,
    rule_pattern: EnumPatternMode,
) -> Result<Option<TypePatternSeq>, CopyImagesError> {
    let Some(patterns) = patterns else {
        return Ok(None);
    };
    if patterns.is_empty() {
        return Ok(None);
    }

    match rule_pattern {
        EnumPatternMode::Literal => Ok(Some(TypePatternSeq::Literal(patterns.to_vec()))),
        EnumPatternMode::Glob => {
            let mut l_glob = Vec::with_capacity(patterns.len());
            for pattern in patterns {
                let matcher = Glob::new(pattern)
                    .map_err(|e| {
                        CopyImagesError::InvalidPattern(format!("Invalid exclude pattern: {e}"))
                    })?
                    .compile_matcher();
                l_glob.push(matcher);
            }
            Ok(Some(TypePatternSeq::Glob(l_glob)))
        }
        EnumPatternMode::Regex => {
            let mut l_regex = Vec::with_capacity(patterns.len());
            for pattern in patterns {
                let regex = Regex::new(pattern).map_err(|e| {
                    CopyImagesError::InvalidPattern(format!("Invalid exclude pattern: {e}"))
                })?;
                l_regex.push(regex);
            }
            Ok(Some(TypePatternSeq::Regex(l_regex)))
        }
    }
}

pub(crate) fn is_excluded_by_patterns(value: &str, patterns: Option<&TypePatternSeq>) -> bool {
    let Some(patterns) = patterns else {
        return false;
    };

    match patterns {
        TypePatternSeq::Literal(v) => v.iter().any(|p| value.contains(p)),
        TypePatternSeq::Glob(v) => v.iter().any(|p| p.is_match(value)),
        TypePatternSeq::Regex(v) => v.iter().any(|p| p.is_match(value)),
    }
}

/// Case-sensitive suffix match against the recognized suffix list.
pub(crate) fn is_suffix_match(value: &str, l_suffixes: &[String]) -> bool {
    l_suffixes.iter().any(|suffix| value.ends_with(suffix))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PathUtilities

fn _is_relative_to_base(path: &Path, base: &Path) -> bool {
    path.starts_with(base)
}

fn _normalize_path(path: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(path)
}

pub(crate) fn is_overlap(src: &Path, dst: &Path) -> bool {
    let src_resolved = _normalize_path(src);
    let dst_resolved = _normalize_path(dst);
    _is_relative_to_base(&dst_resolved, &src_resolved)
        || _is_relative_to_base(&src_resolved, &dst_resolved)
}

pub(crate) fn should_error_broken_symlink(
    path_symlink: &Path,
    rule_symlink: EnumSymlinkRule,
) -> bool {
    rule_symlink == EnumSymlinkRule::Follow && !path_symlink.exists()
}

pub(crate) fn should_skip_file_conflict(
    name_file: &str,
    path_dst: &Path,
    rule_conflict: EnumConflictRule,
    builder_report: &mut ReportImageCopyBuilder,
) -> bool {
    if !path_dst.exists() {
        return false;
    }
    if path_dst.is_dir() {
        builder_report.add_failure(
            name_file.to_string(),
            format!("Destination is a directory: {}", path_dst.display()),
        );
        return true;
    }

    match rule_conflict {
        EnumConflictRule::Keep => {
            builder_report.add_skipped();
            true
        }
        EnumConflictRule::Error => {
            builder_report.add_failure(
                name_file.to_string(),
                format!("Destination exists: {}", path_dst.display()),
            );
            true
        }
        EnumConflictRule::Overwrite => false,
    }
}

pub(crate) fn create_symbolic_link(
    name_file: &str,
    path_src: &Path,
    path_dst: &Path,
    builder_report: &mut ReportImageCopyBuilder,
) {
    let target = match fs::read_link(path_src) {
        Ok(v) => v,
        Err(e) => {
            builder_report.add_failure(name_file.to_string(), e.to_string());
            return;
        }
    };

    // Conflict gate already passed; an existing destination means Overwrite.
    if fs::symlink_metadata(path_dst).is_ok()
        && let Err(e) = fs::remove_file(path_dst)
    {
        builder_report.add_failure(name_file.to_string(), e.to_string());
        return;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::symlink;
        match symlink(&target, path_dst) {
            Ok(_) => builder_report.add_copied(name_file.to_string()),
            Err(e) => builder_report.add_failure(name_file.to_string(), e.to_string()),
        }
    }
    #[cfg(windows)]
    {
        use std::os::windows::fs::{symlink_dir, symlink_file};
        let res = if path_src.is_dir() {
            symlink_dir(&target, path_dst)
        } else {
            symlink_file(&target, path_dst)
        };
        match res {
            Ok(_) => builder_report.add_copied(name_file.to_string()),
            Err(e) => builder_report.add_failure(name_file.to_string(), e.to_string()),
        }
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = target;
        builder_report.add_failure(
            name_file.to_string(),
            "Symbolic links are unsupported on this platform".to_string(),
        );
    }
}

pub(crate) fn copy_file_with_metadata(
    path_file_src: &Path,
    path_file_dst: &Path,
) -> Result<(), io::Error> {
    fs::copy(path_file_src, path_file_dst)?;
    _apply_metadata(path_file_src, path_file_dst)?;
    Ok(())
}

fn _apply_metadata(path_file_src: &Path, path_file_dst: &Path) -> Result<(), io::Error> {
    use filetime::{FileTime, set_file_times};

    let stat_src = fs::metadata(path_file_src)?;
    fs::set_permissions(path_file_dst, stat_src.permissions())?;

    let file_time_access = FileTime::from_last_access_time(&stat_src);
    let file_time_modify = FileTime::from_last_modification_time(&stat_src);
    set_file_times(path_file_dst, file_time_access, file_time_modify)?;

    #[cfg(target_os = "linux")]
    copy_xattrs_linux(path_file_src, path_file_dst);
    Ok(())
}

#[cfg(target_os = "linux")]
fn copy_xattrs_linux(path_file_src: &Path, path_file_dst: &Path) {
    let iter_xattr_names = match xattr::list(path_file_src) {
        Ok(v) => v,
        Err(_) => return,
    };

    for name in iter_xattr_names {
        let Some(raw_value) = xattr::get(path_file_src, &name).ok().flatten() else {
            continue;
        };
        let _ = xattr::set(path_file_dst, &name, &raw_value);
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
