//! Bordered, word-wrapped response box.
//!
//! [`render`] is pure: it turns a response body and a terminal width into
//! the exact lines to print, without colors. [`print_framed`] probes the
//! terminal and prints those lines with the border palette applied.

use console::Term;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::Style;

/// Upper bound for the text area inside the box.
pub const MAX_CONTENT_WIDTH: usize = 80;

/// Terminal width assumed when stdout is not a terminal.
pub const FALLBACK_TERMINAL_WIDTH: usize = 80;

/// Columns taken by the frame: `│ ` on the left and ` │` on the right.
const FRAME_OVERHEAD: usize = 4;

const TAB_STOP: &str = "    ";

/// Width of the text area for a terminal `terminal_width` columns wide.
///
/// Never less than one column, so degenerate terminals still make progress.
pub fn content_width(terminal_width: usize) -> usize {
    terminal_width
        .saturating_sub(FRAME_OVERHEAD)
        .min(MAX_CONTENT_WIDTH)
        .max(1)
}

/// Current terminal width in columns, or [`FALLBACK_TERMINAL_WIDTH`].
pub fn terminal_width() -> usize {
    Term::stdout()
        .size_checked()
        .map_or(FALLBACK_TERMINAL_WIDTH, |(_, cols)| usize::from(cols))
}

/// Splits `text` on newlines and greedily word-wraps each line to `width`.
///
/// Lines that already fit are kept as-is. Longer lines break at whitespace;
/// a single word wider than `width` is split across lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    text.split('\n')
        .map(|line| line.trim_end_matches('\r').replace('\t', TAB_STOP))
        .flat_map(|line| wrap_line(&line, width))
        .collect()
}

fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if line.width() <= width {
        return vec![line.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split_whitespace() {
        let word_width = word.width();

        if current_width > 0 && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width > 0 && current_width + ch_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Renders `text` as a box: top border, one padded line per wrapped line,
/// bottom border.
pub fn render(text: &str, terminal_width: usize) -> Vec<String> {
    let width = content_width(terminal_width);
    let rule = "─".repeat(width + 2);

    let mut lines = Vec::new();
    lines.push(format!("┌{rule}┐"));
    for line in wrap_text(text, width) {
        let padding = " ".repeat(width.saturating_sub(line.width()));
        lines.push(format!("│ {line}{padding} │"));
    }
    lines.push(format!("└{rule}┘"));
    lines
}

/// Prints `text` in a box sized to the current terminal.
pub fn print_framed(text: &str) {
    let lines = render(text, terminal_width());
    let last = lines.len().saturating_sub(1);

    for (index, line) in lines.iter().enumerate() {
        if index == 0 || index == last {
            println!("{}", Style::border(line));
        } else {
            println!("{}", Style::body(line));
        }
    }
}
