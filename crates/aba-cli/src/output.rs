//! Terminal output formatting.

use aba_core::analyze::AnalysisResponse;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

/// Print the four analysis sections.
pub fn print_analysis(analysis: &AnalysisResponse) {
    let width = term_width().saturating_sub(2).max(20);

    print_section("Summary", analysis.summary_text(), width);
    print_section("Data Issues", analysis.data_issues_text(), width);
    print_section("Trends", analysis.trends_text(), width);
    print_section("Answer", analysis.answer_text(), width);
}

fn print_section(title: &str, body: &str, width: usize) {
    println!("{}", title.cyan().bold());
    for line in wrap(body, width) {
        println!("  {}", line);
    }
    println!();
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Wrap text to a visual width, preserving existing line breaks.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for raw in text.lines() {
        if UnicodeWidthStr::width(raw) <= width {
            lines.push(raw.to_string());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0;
        for word in raw.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);
            if current_width > 0 && current_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_line_unchanged() {
        assert_eq!(wrap("revenue dipped in Q3", 40), vec!["revenue dipped in Q3"]);
    }

    #[test]
    fn test_wrap_splits_on_word_boundaries() {
        let lines = wrap("one two three four five six seven", 12);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(UnicodeWidthStr::width(line.as_str()) <= 12);
        }
        assert_eq!(lines.join(" "), "one two three four five six seven");
    }

    #[test]
    fn test_wrap_preserves_existing_breaks() {
        let lines = wrap("- missing values\n- constant columns", 40);
        assert_eq!(lines, vec!["- missing values", "- constant columns"]);
    }

    #[test]
    fn test_wrap_empty_text_yields_one_line() {
        assert_eq!(wrap("", 40), vec![String::new()]);
    }
}
