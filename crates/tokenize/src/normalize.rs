//! Text normalization applied before word splitting.

use crate::config::TokenizeConfig;

/// The fixed, locale-independent punctuation set that gets stripped.
///
/// Matches [`char::is_ascii_punctuation`] exactly; the constant exists so
/// callers can display or test against it.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Lowercases `text` and removes every character of [`PUNCTUATION`],
/// according to `cfg`.
///
/// Whitespace is preserved as-is, so word boundaries survive the strip:
/// `"pork, beef"` becomes `"pork beef"` and `"t-bone"` becomes `"tbone"`.
pub fn normalize(text: &str, cfg: &TokenizeConfig) -> String {
    let lowered;
    let source = if cfg.lowercase {
        lowered = text.to_lowercase();
        lowered.as_str()
    } else {
        text
    };

    if !cfg.strip_punctuation {
        return source.to_owned();
    }

    source
        .chars()
        .filter(|ch| !ch.is_ascii_punctuation())
        .collect()
}
