use crate::cli::parser::{Commands, TaskAction};
use crate::config::Config;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Task { action } = cmd else {
        return Ok(());
    };

    let mut state = AppState::open(cfg);

    match action {
        TaskAction::Show => match state.store.task_number() {
            Some(task) => info(format!("Current task: {}", task)),
            None => info("No task has been started."),
        },

        TaskAction::New { number, yes } => {
            let number = number.trim();
            if number.is_empty() {
                warning("Task number cannot be empty.");
                return Ok(());
            }

            if state.store.has_session_data() {
                let prompt = format!(
                    "Start task {}? {} open session(s) and {} log entries will be cleared.",
                    number,
                    state.store.active_sessions().len(),
                    state.store.attendance_log().len()
                );
                if !confirm(&prompt, *yes) {
                    info("Operation cancelled.");
                    return Ok(());
                }
            }

            if state.store.start_new_task(number) {
                state.commit("new_task", number, "New task started");
                success(format!("Task {} started.", number));
            }
        }
    }

    Ok(())
}
