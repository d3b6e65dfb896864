use std::{fmt, io::IsTerminal};

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::cli::core::CommandError;
use crate::cli::output::{self, OutputPreferences};
use crate::config::Config;

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// Pushes the display-related parts of `config` into the output preferences.
pub fn apply_config(config: &Config) {
    let stdout_tty = std::io::stdout().is_terminal();
    let no_color = std::env::var_os("NO_COLOR").is_some();
    output::set_preferences(OutputPreferences {
        plain_mode: config.accessibility.plain_output,
        high_contrast_mode: config.accessibility.high_contrast,
        color_enabled: config.ui_color_enabled && stdout_tty && !no_color,
        use_icons: config.theme.use_icons(),
    });
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Prompt for free-form text; an empty answer is allowed and returned as is.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CommandError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(CommandError::from)
}

/// Prompt for an amount, re-asking until the input parses as a finite number.
pub fn prompt_amount(
    theme: &ColorfulTheme,
    prompt: &str,
    initial: f64,
) -> Result<f64, CommandError> {
    let raw = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(format!("{:.2}", initial))
        .validate_with(|input: &String| -> Result<(), String> {
            parse_amount(input).map(|_| ()).map_err(|err| err.to_string())
        })
        .interact_text()?;
    parse_amount(&raw)
}

/// Parses a user-typed amount. Accepts an optional leading `$`.
pub fn parse_amount(value: &str) -> Result<f64, CommandError> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let amount: f64 = digits.parse().map_err(|_| {
        CommandError::InvalidArguments(format!("`{}` is not a valid amount", value))
    })?;
    if !amount.is_finite() {
        return Err(CommandError::InvalidArguments(format!(
            "`{}` is not a finite amount",
            value
        )));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_accepts_dollar_prefix() {
        assert_eq!(parse_amount("$12.50").unwrap(), 12.5);
        assert_eq!(parse_amount(" 7 ").unwrap(), 7.0);
        assert_eq!(parse_amount("-3").unwrap(), -3.0);
    }

    #[test]
    fn parse_amount_rejects_garbage_and_infinity() {
        assert!(parse_amount("ten").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("").is_err());
    }
}
