// src/export/logic.rs

use crate::config::Config;
use crate::core::store::AttendanceStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::write_csv;
use crate::export::fs_utils::{ensure_parent, ensure_writable};
use crate::export::json::write_json;
use crate::export::naming::export_file_name;
use crate::export::text::ExportStyle;
use crate::utils::path::expand_tilde;
use chrono::{DateTime, Local};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Where the export goes.
#[derive(Debug, Clone)]
pub enum ExportTarget {
    Stdout,
    /// Explicit path; `None` derives the name from the task number and date
    /// inside the configured export directory.
    File(Option<String>),
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export the merged view. Returns the written path, or `None` for
    /// stdout.
    pub fn export(
        store: &AttendanceStore,
        cfg: &Config,
        format: ExportFormat,
        target: &ExportTarget,
        force: bool,
        generated_at: DateTime<Local>,
    ) -> AppResult<Option<PathBuf>> {
        match target {
            ExportTarget::Stdout => {
                let stdout = io::stdout();
                Self::write(store, cfg, format, stdout.lock(), generated_at)?;
                Ok(None)
            }
            ExportTarget::File(file) => {
                let path = match file {
                    Some(f) => expand_tilde(f),
                    None => expand_tilde(&cfg.export_dir).join(export_file_name(
                        store.task_number(),
                        generated_at.date_naive(),
                        format,
                    )),
                };

                ensure_writable(&path, force)?;
                ensure_parent(&path)?;

                let file = File::create(&path)?;
                Self::write(store, cfg, format, BufWriter::new(file), generated_at)?;
                tracing::debug!(path = %path.display(), format = format.as_str(), "export written");
                Ok(Some(path))
            }
        }
    }

    pub fn write<W: Write>(
        store: &AttendanceStore,
        cfg: &Config,
        format: ExportFormat,
        mut out: W,
        generated_at: DateTime<Local>,
    ) -> AppResult<()> {
        let records = store.merged_view();

        match format {
            ExportFormat::Text => {
                let style = ExportStyle::from(cfg);
                let text = store.format_export(store.task_number(), generated_at, &style);
                out.write_all(text.as_bytes())?;
                out.flush()?;
            }
            ExportFormat::Csv => write_csv(out, &records)?,
            ExportFormat::Json => write_json(
                out,
                &cfg.organization,
                store.task_number(),
                generated_at,
                &records,
            )?,
        }

        Ok(())
    }
}
