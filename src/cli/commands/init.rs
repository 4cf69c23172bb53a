use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with its schema
///  - the default roster, when nothing has been saved yet
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing rAttendance…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", cfg.database);

    let state = AppState::open(&cfg);
    state.pool()?;

    if state.save() {
        state.journal(
            "init",
            "",
            &format!(
                "Database initialized with {} members",
                state.store.members().len()
            ),
        );
    }

    info(format!("Roster: {} members", state.store.members().len()));
    success("rAttendance initialization completed!");
    Ok(())
}
