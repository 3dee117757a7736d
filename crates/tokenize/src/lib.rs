//! lexreport tokenizer.
//!
//! Turns raw paragraphs into the flat word stream every frequency
//! distribution is computed from.
//!
//! ## What we do
//!
//! - Unicode lowercasing
//! - Removal of the 32 ASCII punctuation characters (no locale tables)
//! - Whitespace splitting with treebank handling of fused forms
//!   (`cannot` → `can` `not`) and typographic quotes
//!
//! ## Pure function guarantee
//!
//! No I/O and no locale dependence. The same paragraphs and config always
//! produce the same tokens in the same order, which downstream n-gram
//! counting relies on.
//!
//! ```rust
//! use tokenize::{tokenize_paragraphs, TokenizeConfig};
//!
//! let tokens = tokenize_paragraphs(&["Bacon bacon pork."], &TokenizeConfig::default());
//! assert_eq!(tokens, vec!["bacon", "bacon", "pork"]);
//! ```

mod config;
mod normalize;
mod token;

pub use crate::config::TokenizeConfig;
pub use crate::normalize::{normalize, PUNCTUATION};
pub use crate::token::{tokenize, tokenize_paragraphs};

#[cfg(test)]
mod tests {
    use super::*;

    fn default_tokens(text: &str) -> Vec<String> {
        tokenize(text, &TokenizeConfig::default())
    }

    #[test]
    fn basic_sentence() {
        assert_eq!(
            default_tokens("Bacon ipsum dolor amet, pork loin!"),
            vec!["bacon", "ipsum", "dolor", "amet", "pork", "loin"]
        );
    }

    #[test]
    fn intra_word_punctuation_is_removed_not_split() {
        assert_eq!(
            default_tokens("T-bone isn't short-loin."),
            vec!["tbone", "isnt", "shortloin"]
        );
    }

    #[test]
    fn fused_forms_are_split() {
        assert_eq!(
            default_tokens("I cannot, you Gonna? wanna"),
            vec!["i", "can", "not", "you", "gon", "na", "wan", "na"]
        );
    }

    #[test]
    fn fused_forms_kept_when_disabled() {
        let cfg = TokenizeConfig {
            split_contractions: false,
            ..Default::default()
        };
        assert_eq!(tokenize("cannot gotta", &cfg), vec!["cannot", "gotta"]);
    }

    #[test]
    fn typographic_quotes_become_tokens() {
        assert_eq!(
            default_tokens("“Ham” hock"),
            vec!["“", "ham", "”", "hock"]
        );
    }

    #[test]
    fn empty_and_punctuation_only_input() {
        assert!(default_tokens("").is_empty());
        assert!(default_tokens("   \n\t").is_empty());
        assert!(default_tokens("... !!! ---").is_empty());
        let none: [&str; 0] = [];
        assert!(tokenize_paragraphs(&none, &TokenizeConfig::default()).is_empty());
    }

    #[test]
    fn paragraphs_keep_order_and_do_not_merge() {
        let paragraphs = ["Pork belly.", "Beef ribs"];
        assert_eq!(
            tokenize_paragraphs(&paragraphs, &TokenizeConfig::default()),
            vec!["pork", "belly", "beef", "ribs"]
        );
    }

    #[test]
    fn tokenization_is_deterministic() {
        let paragraphs = vec![
            "Spare ribs jowl, cannot brisket.".to_string(),
            "Kielbasa “andouille” pastrami!".to_string(),
        ];
        let cfg = TokenizeConfig::default();
        let first = tokenize_paragraphs(&paragraphs, &cfg);
        for _ in 0..5 {
            assert_eq!(tokenize_paragraphs(&paragraphs, &cfg), first);
        }
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let cfg: TokenizeConfig =
            serde_json::from_str(r#"{"split_contractions": false}"#).expect("valid config");
        assert!(cfg.lowercase);
        assert!(cfg.strip_punctuation);
        assert!(!cfg.split_contractions);
    }
}
