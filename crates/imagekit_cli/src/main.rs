//! Fixed-path image copy command.
//!
//! Copies recognized image files from `images/2x` into `downloaded_images`,
//! then prints one line per copied or failed file.

use std::process::ExitCode;

use log::{error, info, warn};

use imagekit_io_fs::{
    C_DIR_DESTINATION, C_DIR_SOURCE, CopyImagesError, ReportImageCopy, copy_images,
    derive_default_copy_options,
};

fn execute() -> Result<ReportImageCopy, CopyImagesError> {
    copy_images(
        C_DIR_SOURCE,
        C_DIR_DESTINATION,
        derive_default_copy_options(),
    )
}

fn log_report(report: &ReportImageCopy) {
    for name_file in &report.l_names_copied {
        info!("Copied: {name_file}");
    }
    for failure in &report.failures {
        error!("Error copying {}: {}", failure.name, failure.exception);
    }
    for warning in &report.warnings {
        warn!("{warning}");
    }
    info!("{report}");
}

fn main() -> ExitCode {
    const LOG_FILTER_VAR: &str = "IMAGEKIT_LOG_FILTER";
    const LOG_WRITE_STYLE_VAR: &str = "IMAGEKIT_WRITE_STYLE";
    env_logger::Builder::from_env(
        env_logger::Env::new()
            .filter_or(LOG_FILTER_VAR, "info")
            .write_style(LOG_WRITE_STYLE_VAR),
    )
    .init();
    match execute() {
        Ok(report) => {
            log_report(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Execution failed.");
            error!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
