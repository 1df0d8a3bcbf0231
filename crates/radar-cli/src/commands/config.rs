//! Configuration command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;
use tracing::info;

/// Apply a configuration action and describe the result.
///
/// `init` and `set` write the file at `path`.
pub fn render_config(args: &ConfigArgs, config: &mut Config, path: &Path, formatter: &Formatter) -> Result<String> {
    match &args.action {
        ConfigAction::Show => Ok(format!(
            "{}\n{}",
            formatter.info(&format!("Config file: {}", path.display())),
            config.to_toml()?
        )),
        ConfigAction::Init => {
            if path.exists() {
                return Ok(formatter.warning(&format!("Config already exists at {}", path.display())));
            }
            *config = Config::default();
            config.save_to(path)?;
            info!(path = %path.display(), "config initialized");
            Ok(formatter.success(&format!("Wrote default config to {}", path.display())))
        }
        ConfigAction::Set { key, value } => {
            config.set(key, value)?;
            config.save_to(path)?;
            info!(key = %key, "config updated");
            Ok(formatter.success(&format!("{} = {}", key, value)))
        }
    }
}

/// Execute the config command.
pub fn execute_config(args: ConfigArgs, config: &mut Config, path: &Path, formatter: &Formatter) -> Result<()> {
    println!("{}", render_config(&args, config, path, formatter)?);
    Ok(())
}
