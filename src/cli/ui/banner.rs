use crate::config::Config;

pub const HEADING: &str = "Personal Budget Planner";

pub struct Banner;

impl Banner {
    /// Heading line, e.g. `💸 Personal Budget Planner`.
    pub fn title(config: &Config) -> String {
        if config.theme.use_icons() && !config.accessibility.plain_output {
            format!("{} {}", config.page_icon, HEADING)
        } else {
            HEADING.to_string()
        }
    }

    /// Terminal window title; follows `page_title` on its own.
    pub fn window_title(config: &Config) -> &str {
        config.page_title.as_str()
    }

    pub fn welcome(config: &Config) -> Option<String> {
        config.show_welcome.then(|| {
            "Welcome! Fill in a category, a budgeted amount and what you spent, then `submit`. \
             Type `help` for all commands."
                .to_string()
        })
    }

    pub fn prompt(config: &Config, records: usize) -> String {
        let arrow = if config.accessibility.plain_output {
            ">"
        } else {
            "⮞"
        };
        format!("budget [{records}] {arrow} ")
    }
}
