use crate::cli::parser::{Commands, MemberAction};
use crate::config::Config;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Member { action } = cmd else {
        return Ok(());
    };

    let mut state = AppState::open(cfg);

    match action {
        MemberAction::Add { name } => {
            state.store.add_member(name)?;
            let name = name.trim();
            state.commit("add_member", name, "Member added to roster");
            success(format!("{} added to the roster.", name));
        }

        MemberAction::Rename { old, new } => {
            let Some(current) = state.store.find_member(old).map(|m| m.name.clone()) else {
                return Err(crate::errors::ValidationError::UnknownMember(old.clone()).into());
            };
            state.store.rename_member(&current, new)?;
            let new = new.trim();
            state.commit(
                "rename_member",
                &current,
                &format!("Renamed '{}' to '{}'", current, new),
            );
            success(format!("{} renamed to {}.", current, new));
        }

        MemberAction::Del { name, yes } => {
            let Some(current) = state.store.find_member(name).map(|m| m.name.clone()) else {
                warning(format!("No member named '{}' on the roster.", name.trim()));
                return Ok(());
            };

            let prompt = format!(
                "Delete {} and all of their attendance records? This action is irreversible.",
                current
            );
            if !confirm(&prompt, *yes) {
                info("Operation cancelled.");
                return Ok(());
            }

            if state.store.delete_member(&current) {
                state.commit("delete_member", &current, "Member and records deleted");
                success(format!("{} has been removed.", current));
            }
        }

        MemberAction::List { available } => {
            let names: Vec<&str> = if *available {
                state
                    .store
                    .sign_in_candidates()
                    .into_iter()
                    .map(|m| m.name.as_str())
                    .collect()
            } else {
                state.store.members().iter().map(|m| m.name.as_str()).collect()
            };

            header(if *available {
                "Available to sign in"
            } else {
                "Roster"
            });
            if names.is_empty() {
                info("No members.");
            }
            for n in &names {
                println!("  {}", n);
            }
            println!("\n{} member(s)", names.len());
        }
    }

    Ok(())
}
