//! Standard-14 Helvetica metrics and WinAnsi text encoding.
//!
//! Both the chart backend and the report layout draw text with the PDF
//! base fonts, which need no embedding. Widths come from the Helvetica AFM
//! and are expressed in 1/1000 em.

/// Advance widths for the printable ASCII range `' '..='~'`.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

const FALLBACK_WIDTH: u16 = 556;

/// Helvetica-Bold runs a little wider than the regular face.
const BOLD_FACTOR: f32 = 1.06;

/// Width in points of `text` set in Helvetica at `size` points.
pub fn text_width(text: &str, size: f32, bold: bool) -> f32 {
    let units: u32 = text.chars().map(|ch| u32::from(char_width(ch))).sum();
    let width = units as f32 * size / 1000.0;
    if bold {
        width * BOLD_FACTOR
    } else {
        width
    }
}

fn char_width(ch: char) -> u16 {
    match ch {
        ' '..='~' => HELVETICA_WIDTHS[ch as usize - 32],
        _ => FALLBACK_WIDTH,
    }
}

/// Encodes `text` for a PDF string drawn with `/WinAnsiEncoding`.
///
/// Latin-1 characters map directly; the common typographic punctuation
/// maps to its WinAnsi slot; anything else becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            ' '..='~' => ch as u8,
            '\u{a0}'..='\u{ff}' => ch as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_widths() {
        assert_eq!(char_width(' '), 278);
        assert_eq!(char_width('0'), 556);
        assert_eq!(char_width('W'), 944);
        assert_eq!(char_width('i'), 222);
        assert_eq!(char_width('~'), 584);
        assert_eq!(char_width('é'), FALLBACK_WIDTH);
    }

    #[test]
    fn width_scales_with_size() {
        let ten = text_width("bacon", 10.0, false);
        let twenty = text_width("bacon", 20.0, false);
        assert!((twenty - 2.0 * ten).abs() < 1e-3);
        assert!(text_width("bacon", 10.0, true) > ten);
        assert_eq!(text_width("", 12.0, false), 0.0);
    }

    #[test]
    fn win_ansi_mapping() {
        assert_eq!(encode_win_ansi("ham"), b"ham".to_vec());
        assert_eq!(encode_win_ansi("“jalapeño”"), vec![0x93, b'j', b'a', b'l', b'a', b'p', b'e', 0xf1, b'o', 0x94]);
        assert_eq!(encode_win_ansi("豚"), b"?".to_vec());
    }
}
