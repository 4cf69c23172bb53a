use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportTarget, notify_export_success};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        stdout,
        force,
    } = cmd
    {
        let state = AppState::open(cfg);

        let target = if *stdout {
            ExportTarget::Stdout
        } else {
            ExportTarget::File(file.clone())
        };

        if let Some(path) =
            ExportLogic::export(&state.store, cfg, *format, &target, *force, Local::now())?
        {
            state.journal("export", format.as_str(), &path.display().to_string());
            notify_export_success(format.as_str(), &path);
        }
    }
    Ok(())
}
