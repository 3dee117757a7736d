//! Line breaking and truncation against Helvetica metrics.

use chart::text_width;

const ELLIPSIS: &str = "...";

/// Greedy word wrap of `text` into lines no wider than `max_width`.
///
/// Whitespace runs collapse to single spaces. A word wider than the line
/// on its own is broken between characters.
pub fn wrap(text: &str, size: f32, bold: bool, max_width: f32) -> Vec<String> {
    let space = text_width(" ", size, bold);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0.0_f32;

    for word in text.split_whitespace() {
        let word_width = text_width(word, size, bold);

        if !line.is_empty() && line_width + space + word_width <= max_width {
            line.push(' ');
            line.push_str(word);
            line_width += space + word_width;
            continue;
        }
        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }

        if word_width <= max_width {
            line.push_str(word);
            line_width = word_width;
            continue;
        }
        for ch in word.chars() {
            let ch_width = text_width(ch.encode_utf8(&mut [0; 4]), size, bold);
            if !line.is_empty() && line_width + ch_width > max_width {
                lines.push(std::mem::take(&mut line));
                line_width = 0.0;
            }
            line.push(ch);
            line_width += ch_width;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Shortens `text` with a trailing ellipsis until it fits `max_width`.
pub fn fit(text: &str, size: f32, bold: bool, max_width: f32) -> String {
    if text_width(text, size, bold) <= max_width {
        return text.to_owned();
    }
    let mut kept: String = text.to_owned();
    while !kept.is_empty() {
        kept.pop();
        let candidate = format!("{kept}{ELLIPSIS}");
        if text_width(&candidate, size, bold) <= max_width {
            return candidate;
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        let text = "bacon ipsum dolor amet pork belly jowl";
        let lines = wrap(text, 10.0, false, 80.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), text);
        for line in &lines {
            assert!(text_width(line, 10.0, false) <= 80.0, "{line} overflows");
        }
    }

    #[test]
    fn collapses_whitespace_and_skips_blank_input() {
        assert_eq!(wrap("  ham \n\t hock ", 10.0, false, 500.0), vec!["ham hock"]);
        assert!(wrap("   ", 10.0, false, 500.0).is_empty());
    }

    #[test]
    fn breaks_words_longer_than_a_line() {
        let lines = wrap("mmmmmmmmmm", 10.0, false, 30.0);
        // 'm' is 8.33 pt wide at 10 pt, so three fit per line.
        assert_eq!(lines, vec!["mmm", "mmm", "mmm", "m"]);
    }

    #[test]
    fn fit_truncates_with_ellipsis() {
        assert_eq!(fit("ham", 10.0, false, 100.0), "ham");
        let cut = fit("('andouille', 'tenderloin', 'shoulder')", 9.0, false, 80.0);
        assert!(cut.ends_with("..."));
        assert!(text_width(&cut, 9.0, false) <= 80.0);
        assert_eq!(fit("ham", 10.0, false, 1.0), "");
    }
}
