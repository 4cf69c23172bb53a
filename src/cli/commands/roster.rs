use crate::cli::parser::{Commands, RosterAction};
use crate::config::Config;
use crate::core::roster::default_roster;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;
use crate::utils::path::expand_tilde;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Roster { action } = cmd else {
        return Ok(());
    };

    let (names, yes, source): (Vec<String>, bool, String) = match action {
        RosterAction::Replace { file, yes } => {
            let content = fs::read_to_string(expand_tilde(file))?;
            let names = content.lines().map(str::to_string).collect();
            (names, *yes, file.clone())
        }
        RosterAction::Reset { yes } => (
            default_roster().iter().map(|n| n.to_string()).collect(),
            *yes,
            "default roster".to_string(),
        ),
    };

    let prompt = "Replace the whole roster? Open sessions and the attendance log will be cleared.";
    if !confirm(prompt, yes) {
        info("Operation cancelled.");
        return Ok(());
    }

    let mut state = AppState::open(cfg);
    state.store.replace_roster(&names);

    let count = state.store.members().len();
    state.commit(
        "replace_roster",
        &source,
        &format!("Roster replaced with {} members", count),
    );
    success(format!("Roster replaced: {} members.", count));
    Ok(())
}
