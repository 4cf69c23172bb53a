use crate::cli::parser::{Commands, join_name};
use crate::config::Config;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::duration2readable;
use crate::utils::time::format_timestamp;

/// Handle `in` / `out`. Both are silent no-ops on stale input; the user
/// only gets an informational line.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (raw, signing_in) = match cmd {
        Commands::In { name } => (join_name(name), true),
        Commands::Out { name } => (join_name(name), false),
        _ => return Ok(()),
    };

    let mut state = AppState::open(cfg);

    let Some(name) = state.store.find_member(&raw).map(|m| m.name.clone()) else {
        warning(format!("No member named '{}' on the roster.", raw.trim()));
        return Ok(());
    };

    if signing_in {
        if !state.store.sign_in(&name) {
            info(format!("{} is already signed in.", name));
            return Ok(());
        }
        state.commit("sign_in", &name, "Signed in");
        success(format!("{} signed in.", name));
    } else {
        let Some(entry) = state.store.sign_out(&name).cloned() else {
            info(format!("{} is not signed in.", name));
            return Ok(());
        };
        state.commit("sign_out", &name, "Signed out");
        success(format!(
            "{} signed out at {} ({}).",
            name,
            format_timestamp(&entry.sign_out, &cfg.timestamp_format),
            duration2readable(entry.duration())
        ));
    }

    Ok(())
}
