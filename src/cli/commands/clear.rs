use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Clear { yes } = cmd else {
        return Ok(());
    };

    let mut state = AppState::open(cfg);

    if !state.store.has_session_data() {
        info("Nothing to clear.");
        return Ok(());
    }

    if !confirm(
        "Clear all open sessions and the attendance log? This action is irreversible.",
        *yes,
    ) {
        info("Operation cancelled.");
        return Ok(());
    }

    if state.store.clear_log() {
        state.commit("clear_log", "", "Open sessions and attendance log cleared");
        success("Attendance log cleared.");
    }

    Ok(())
}
