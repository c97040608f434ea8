//! Source directory listing and image copy orchestration.

use std::fs;
use std::path::{Path, PathBuf};

use crate::conf::derive_default_suffixes;
use crate::report::{ReportImageCopy, ReportImageCopyBuilder};
use crate::spec::{CopyImagesError, EnumSymlinkRule, SpecImageCopyOptions};
use crate::util::{
    TypePatternSeq, compile_exclude_patterns, copy_file_with_metadata, create_symbolic_link,
    is_excluded_by_patterns, is_overlap, is_suffix_match, should_error_broken_symlink,
    should_skip_file_conflict,
};

#[derive(Debug, Clone)]
struct SpecSourceEntry {
    path_entry: PathBuf,
    name_entry: String,
    cfg_file_type: fs::FileType,
}

#[derive(Debug)]
struct SpecCopyContext {
    path_dir_dst: PathBuf,
    spec_options: SpecImageCopyOptions,
    l_suffixes: Vec<String>,
    patterns_exclude: Option<TypePatternSeq>,
    builder_report: ReportImageCopyBuilder,
}

/// Copy recognized image files from `dir_source` into `dir_destination`.
///
/// Behavior is controlled by [`SpecImageCopyOptions`], including:
/// - the recognized suffix list (`conf::TUP_SUFFIXES_IMAGE` when unset),
/// - exclude pattern rules for file basenames,
/// - conflict policy for existing destination files,
/// - symlink handling strategy,
/// - dry-run.
///
/// This function performs:
/// 1. Input validation and destination initialization.
/// 2. Non-recursive source listing, sorted by basename.
/// 3. Per-entry filtering and copy with metadata preservation.
/// 4. Report aggregation.
///
/// The destination directory is initialized before the source directory is
/// inspected; an absent source yields an empty report, not an error. Per-entry
/// copy failures are recorded in the report and never abort the batch.
///
/// Returns [`ReportImageCopy`] when the run completes (with possible per-entry
/// failures stored in the report). Returns [`CopyImagesError`] only for
/// top-level setup and validation failures.
pub fn copy_images<P, Q>(
    dir_source: P,
    dir_destination: Q,
    spec_options: SpecImageCopyOptions,
) -> Result<ReportImageCopy, CopyImagesError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let path_dir_src = dir_source.as_ref().to_path_buf();
    let path_dir_dst = dir_destination.as_ref().to_path_buf();

    let patterns_exclude = compile_exclude_patterns(
        spec_options.patterns_exclude.as_deref(),
        spec_options.rule_pattern,
    )?;
    if is_overlap(&path_dir_src, &path_dir_dst) {
        return Err(CopyImagesError::SourceDestinationOverlap {
            source: path_dir_src,
            destination: path_dir_dst,
        });
    }

    fs::create_dir_all(&path_dir_dst).map_err(|e| CopyImagesError::DestinationInitFailed {
        path: path_dir_dst.clone(),
        message: e.to_string(),
    })?;

    let l_suffixes = spec_options
        .suffixes_include
        .clone()
        .unwrap_or_else(derive_default_suffixes);
    let mut spec_ctx = SpecCopyContext {
        path_dir_dst,
        spec_options,
        l_suffixes,
        patterns_exclude,
        builder_report: ReportImageCopyBuilder::default(),
    };

    // An absent or non-directory source is tolerated: the destination stays
    // initialized and the run completes with an empty report.
    if !path_dir_src.is_dir() {
        return Ok(spec_ctx.builder_report.build());
    }

    let l_entries = list_source_entries(&path_dir_src, &mut spec_ctx.builder_report)?;
    for _source_entry in l_entries {
        handle_source_entry(_source_entry, &mut spec_ctx);
    }
    Ok(spec_ctx.builder_report.build())
}

fn list_source_entries(
    path_dir_src: &Path,
    builder_report: &mut ReportImageCopyBuilder,
) -> Result<Vec<SpecSourceEntry>, CopyImagesError> {
    let iter_entries =
        fs::read_dir(path_dir_src).map_err(|e| CopyImagesError::SourceListFailed {
            path: path_dir_src.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut l_entries: Vec<SpecSourceEntry> = Vec::new();
    for _entry_res in iter_entries {
        let entry = match _entry_res {
            Ok(v) => v,
            Err(e) => {
                builder_report.add_warning(format!(
                    "Failed to read directory entry under {} ({e})",
                    path_dir_src.display()
                ));
                continue;
            }
        };

        let path_entry = entry.path();
        let c_name = entry.file_name().to_string_lossy().to_string();
        let cfg_file_type = match entry.file_type() {
            Ok(v) => v,
            Err(e) => {
                builder_report
                    .add_warning(format!("Failed to inspect {} ({e})", path_entry.display()));
                continue;
            }
        };

        l_entries.push(SpecSourceEntry {
            path_entry,
            name_entry: c_name,
            cfg_file_type,
        });
    }

    l_entries.sort_by(|a, b| a.name_entry.cmp(&b.name_entry));
    Ok(l_entries)
}

fn handle_source_entry(spec_source_entry: SpecSourceEntry, spec_ctx: &mut SpecCopyContext) {
    spec_ctx.builder_report.add_scanned();

    if !is_suffix_match(&spec_source_entry.name_entry, &spec_ctx.l_suffixes) {
        return;
    }
    if is_excluded_by_patterns(
        &spec_source_entry.name_entry,
        spec_ctx.patterns_exclude.as_ref(),
    ) {
        return;
    }
    spec_ctx.builder_report.add_matched();

    let enum_rule_symlink = spec_ctx.spec_options.rule_symlink;
    let b_is_symlink = spec_source_entry.cfg_file_type.is_symlink();
    if b_is_symlink {
        if enum_rule_symlink == EnumSymlinkRule::Skip {
            spec_ctx.builder_report.add_skipped();
            return;
        }

        if should_error_broken_symlink(&spec_source_entry.path_entry, enum_rule_symlink) {
            spec_ctx.builder_report.add_failure(
                spec_source_entry.name_entry,
                format!("Broken symlink: {}", spec_source_entry.path_entry.display()),
            );
            return;
        }
    }

    // Suffix-matched entries that are not regular files fail per entry; the
    // batch continues.
    if !b_is_symlink {
        if spec_source_entry.cfg_file_type.is_dir() {
            spec_ctx.builder_report.add_failure(
                spec_source_entry.name_entry,
                format!(
                    "Source entry is a directory: {}",
                    spec_source_entry.path_entry.display()
                ),
            );
            return;
        }
        if !spec_source_entry.cfg_file_type.is_file() {
            spec_ctx.builder_report.add_failure(
                spec_source_entry.name_entry,
                format!(
                    "Source entry is not a regular file: {}",
                    spec_source_entry.path_entry.display()
                ),
            );
            return;
        }
    } else if enum_rule_symlink == EnumSymlinkRule::Follow {
        let meta_target = match fs::metadata(&spec_source_entry.path_entry) {
            Ok(v) => v,
            Err(e) => {
                spec_ctx
                    .builder_report
                    .add_failure(spec_source_entry.name_entry, e.to_string());
                return;
            }
        };
        if meta_target.file_type().is_dir() {
            spec_ctx.builder_report.add_failure(
                spec_source_entry.name_entry,
                format!(
                    "Source entry is a directory: {}",
                    spec_source_entry.path_entry.display()
                ),
            );
            return;
        }
        if !meta_target.file_type().is_file() {
            spec_ctx.builder_report.add_failure(
                spec_source_entry.name_entry,
                format!(
                    "Source entry is not a regular file: {}",
                    spec_source_entry.path_entry.display()
                ),
            );
            return;
        }
    }

    let path_file_dst = spec_ctx.path_dir_dst.join(&spec_source_entry.name_entry);
    let enum_rule_conflict = spec_ctx.spec_options.rule_conflict;
    if should_skip_file_conflict(
        &spec_source_entry.name_entry,
        &path_file_dst,
        enum_rule_conflict,
        &mut spec_ctx.builder_report,
    ) {
        return;
    }

    if spec_ctx.spec_options.if_dry_run {
        spec_ctx.builder_report.add_skipped();
        return;
    }

    if b_is_symlink && enum_rule_symlink == EnumSymlinkRule::Preserve {
        create_symbolic_link(
            &spec_source_entry.name_entry,
            &spec_source_entry.path_entry,
            &path_file_dst,
            &mut spec_ctx.builder_report,
        );
        return;
    }

    match copy_file_with_metadata(&spec_source_entry.path_entry, &path_file_dst) {
        Ok(_) => spec_ctx
            .builder_report
            .add_copied(spec_source_entry.name_entry),
        Err(e) => spec_ctx
            .builder_report
            .add_failure(spec_source_entry.name_entry, e.to_string()),
    }
}
