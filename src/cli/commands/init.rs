use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// Creates the config directory (if missing) and a configuration file
/// skeleton. Credentials still have to be filled in by the user.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let custom = cli.config.as_deref().map(expand_tilde);
    let path = Config::init_all(custom.as_deref())?;

    messages::success(format!("Config file: {}", path.display()));
    println!();
    println!("Next steps:");
    println!("  1. set api_key and workspace_id in the file above");
    println!("     (or export CLOCKIFY_KEY and CLOCKIFY_WORKSPACE_ID)");
    println!("  2. adjust timezone and work/lunch windows if needed");
    println!("  3. run `gapfill preview` to see this week's gaps");

    Ok(())
}
