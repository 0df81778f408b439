//! Formatting utilities for terminal output

use crate::core::{Anchor, PlacedWord};
use colored::{ColoredString, Colorize};
use std::time::Duration;

/// Short label for how a word was anchored
#[must_use]
pub const fn anchor_label(anchor: Anchor) -> &'static str {
    match anchor {
        Anchor::Start => "start",
        Anchor::Intersection => "intersection",
        Anchor::Cross => "cross",
    }
}

/// One table row for a committed word
#[must_use]
pub fn record_row(index: usize, record: &PlacedWord) -> String {
    format!(
        "{:>2}. {:<12} {:<10} {} -> {}  {:>4} pts  ({})",
        index + 1,
        record.word,
        record.orientation.to_string(),
        record.start,
        record.end,
        record.score,
        anchor_label(record.anchor)
    )
}

/// Color one board symbol: letters stand out, bonus squares are tinted
#[must_use]
pub fn color_symbol(symbol: char) -> ColoredString {
    let text = symbol.to_string();
    match symbol {
        'a'..='z' => text.bright_yellow().bold(),
        '*' => text.green().bold(),
        'D' => text.magenta(),
        'T' => text.red(),
        '1'..='9' => text.cyan(),
        _ => text.bright_black(),
    }
}

/// Human-readable elapsed time
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs >= 1.0 {
        format!("{secs:.2}s")
    } else {
        format!("{:.1}ms", secs * 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, Orientation, Span};

    #[test]
    fn record_row_layout() {
        let span = Span::new(Coord::new(3, 1), Orientation::Horizontal, 3);
        let record = PlacedWord::new("cat", &span, 10, Anchor::Start);

        let row = record_row(0, &record);
        assert!(row.starts_with(" 1. cat"));
        assert!(row.contains("(3, 1) -> (3, 3)"));
        assert!(row.contains("  10 pts"));
        assert!(row.ends_with("(start)"));
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
        assert_eq!(format_duration(Duration::from_micros(2500)), "2.5ms");
    }

    #[test]
    fn symbols_keep_their_text() {
        colored::control::set_override(false);
        assert_eq!(color_symbol('q').to_string(), "q");
        assert_eq!(color_symbol('.').to_string(), ".");
        colored::control::unset_override();
    }
}
