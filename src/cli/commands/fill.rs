use crate::cli::commands::preview_week;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::fill::{FillLogic, FillPolicy};
use crate::core::preview::PreviewLogic;
use crate::errors::AppResult;
use crate::ui::messages;
use std::io::{self, Write};

/// Handle the `fill` command: preview first, then — after explicit
/// confirmation — create one filler entry per gap.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fill { date, yes } = cmd {
        let (outcome, client, tz) = preview_week(cfg, date.as_deref())?;
        PreviewLogic::print_report(&outcome);

        if outcome.report.total_gap_minutes() == 0 {
            return Ok(());
        }

        if !*yes && !confirm("Create filler entries for shown gaps? (y/N): ")? {
            println!("No entries created.");
            return Ok(());
        }

        let policy = FillPolicy {
            description: cfg.filler_description.clone(),
            default_project_id: cfg.default_project_id.clone(),
            default_task_id: cfg.default_task_id.clone(),
        };
        let fillers = FillLogic::plan(&outcome.report, &outcome.grouped, tz, &policy)?;
        if fillers.is_empty() {
            messages::warning("Nothing to submit (all gap days were skipped).");
            return Ok(());
        }

        let (created, failed) = FillLogic::execute(&client, &fillers, tz);
        if failed == 0 {
            messages::success(format!("Created {} filler entries.", created));
        } else {
            messages::warning(format!(
                "Created {} filler entries, {} failed.",
                created, failed
            ));
        }
    }

    Ok(())
}

fn confirm(prompt: &str) -> AppResult<bool> {
    print!("\n{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
