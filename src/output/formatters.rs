//! Formatting utilities for terminal output

use crate::core::{Combination, Score};
use colored::{ColoredString, Colorize};

/// Format a score as black and white key pegs, e.g. `●●○·` for (2, 1)
/// with four pegs
#[must_use]
pub fn score_to_pegs(score: Score, pegs: usize) -> String {
    let exact = usize::from(score.exact());
    let color_only = usize::from(score.color_only());
    let empty = pegs.saturating_sub(exact + color_only);

    format!(
        "{}{}{}",
        "●".repeat(exact),
        "○".repeat(color_only),
        "·".repeat(empty)
    )
}

/// Paint one digit per peg in a distinct terminal color
#[must_use]
pub fn colorize_combination(combination: &Combination) -> String {
    combination
        .pegs()
        .iter()
        .map(|&color| paint(color).to_string())
        .collect()
}

fn paint(color: u8) -> ColoredString {
    let digit = color.to_string();
    match color {
        0 => digit.red(),
        1 => digit.green(),
        2 => digit.yellow(),
        3 => digit.blue(),
        4 => digit.magenta(),
        5 => digit.cyan(),
        6 => digit.bright_red(),
        7 => digit.bright_green(),
        8 => digit.bright_yellow(),
        _ => digit.bright_blue(),
    }
    .bold()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_pegs_partial() {
        assert_eq!(score_to_pegs(Score::new(2, 1), 4), "●●○·");
    }

    #[test]
    fn score_pegs_win() {
        assert_eq!(score_to_pegs(Score::new(4, 0), 4), "●●●●");
    }

    #[test]
    fn score_pegs_nothing() {
        assert_eq!(score_to_pegs(Score::new(0, 0), 3), "···");
    }

    #[test]
    fn colorized_combination_keeps_digits() {
        colored::control::set_override(false);
        assert_eq!(colorize_combination(&Combination::from([3, 2, 1, 1])), "3211");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }
}
