use dirs::home_dir;
use std::{env, fs, path::Path, path::PathBuf};

use crate::errors::BudgetError;

const DEFAULT_DIR_NAME: &str = ".budget_planner";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

/// Returns the application-specific data directory, defaulting to `~/.budget_planner`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("BUDGET_PLANNER_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding `config.json` under the given base.
pub fn config_dir_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR)
}

/// Canonical configuration file under the given base.
pub fn config_file_in(base: &Path) -> PathBuf {
    config_dir_in(base).join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> Result<(), BudgetError> {
    fs::create_dir_all(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_lives_under_config_dir() {
        let base = PathBuf::from("/tmp/planner");
        assert_eq!(
            config_file_in(&base),
            PathBuf::from("/tmp/planner/config/config.json")
        );
    }
}
