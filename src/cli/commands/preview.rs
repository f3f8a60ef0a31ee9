use crate::cli::commands::preview_week;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::preview::PreviewLogic;
use crate::errors::AppResult;

/// Handle the `preview` command: render the week's gap report.
/// Strictly read-only; the sink side of the client is never touched.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Preview { date } = cmd {
        let (outcome, _client, _tz) = preview_week(cfg, date.as_deref())?;
        PreviewLogic::print_report(&outcome);
    }

    Ok(())
}
