//! Terminal stand-in for a pie chart: one line per slice with its share of the
//! positive total and a proportional bar.

use crate::cli::output::current_preferences;
use crate::cli::ui::table_renderer::truncate_text;
use crate::presentation::format::format_currency;
use crate::presentation::PieChartSpec;

const LABEL_WIDTH: usize = 16;
const MIN_BAR_WIDTH: usize = 10;

pub struct ChartRenderer {
    bar_width: usize,
    plain: bool,
}

impl ChartRenderer {
    pub fn new(bar_width: usize) -> Self {
        Self {
            bar_width: bar_width.max(MIN_BAR_WIDTH),
            plain: current_preferences().plain_mode,
        }
    }

    /// Caps `preferred` so label, value and bar fit the current terminal.
    pub fn fitted_to_terminal(preferred: usize) -> Self {
        let available = crossterm::terminal::size()
            .map(|(cols, _)| usize::from(cols).saturating_sub(LABEL_WIDTH + 30))
            .unwrap_or(preferred);
        Self::new(preferred.min(available))
    }

    pub fn render(&self, chart: &PieChartSpec) -> String {
        let mut lines = vec![chart.title.clone()];
        if chart.slices.is_empty() {
            lines.push("(no data yet)".to_string());
            return lines.join("\n");
        }

        let total = chart.positive_total();
        for slice in &chart.slices {
            let label = truncate_text(&slice.label, LABEL_WIDTH);
            let value = format_currency(slice.value);
            let detail = if slice.value < 0.0 {
                "over budget".to_string()
            } else if total > 0.0 {
                let share = slice.value / total;
                format!("{:>5.1}% {}", share * 100.0, self.bar(share))
            } else {
                format!("{:>5.1}%", 0.0)
            };
            lines.push(format!(
                "{label:<width$} {value:>12}  {detail}",
                width = LABEL_WIDTH
            ));
        }
        lines.join("\n")
    }

    fn bar(&self, share: f64) -> String {
        let filled = (share * self.bar_width as f64).round() as usize;
        let ch = if self.plain { "#" } else { "█" };
        ch.repeat(filled.min(self.bar_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;

    fn chart(entries: &[(&str, f64, f64)]) -> PieChartSpec {
        let mut ledger = Ledger::new();
        for (category, budgeted, spent) in entries {
            ledger.append(*category, *budgeted, *spent);
        }
        PieChartSpec::project(&ledger)
    }

    #[test]
    fn shares_are_relative_to_positive_total() {
        let rendered = ChartRenderer::new(10).render(&chart(&[
            ("Food", 100.0, 25.0),
            ("Rent", 100.0, 75.0),
        ]));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Remaining Budget by Category");
        assert!(lines[1].contains("75.0%"), "{}", lines[1]);
        assert!(lines[2].contains("25.0%"), "{}", lines[2]);
    }

    #[test]
    fn negative_slices_are_marked_not_drawn() {
        let rendered = ChartRenderer::new(10).render(&chart(&[("Food", 100.0, 150.0)]));
        assert!(rendered.contains("-$50.00"));
        assert!(rendered.contains("over budget"));
    }

    #[test]
    fn empty_chart_says_so() {
        let rendered = ChartRenderer::new(10).render(&chart(&[]));
        assert!(rendered.ends_with("(no data yet)"));
    }
}
