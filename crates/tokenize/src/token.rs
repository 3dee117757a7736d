use crate::config::TokenizeConfig;
use crate::normalize::normalize;

/// Typographic quotes that the treebank rules always split off as tokens.
const QUOTES: [char; 7] = ['«', '»', '“', '”', '‘', '’', '„'];

/// Fused forms split by the treebank contraction rules, with the byte
/// offset of the split. Only the forms that survive punctuation stripping
/// are listed; `d'ye`, `more'n`, `'tis` and `'twas` need an apostrophe.
const CONTRACTIONS: [(&str, usize); 6] = [
    ("cannot", 3),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("wanna", 3),
];

/// Normalizes `text` and splits it into word tokens.
///
/// Tokens come out in order of appearance. Empty or whitespace-only input
/// yields an empty vector.
pub fn tokenize(text: &str, cfg: &TokenizeConfig) -> Vec<String> {
    let normalized = normalize(text, cfg);
    let mut tokens = Vec::with_capacity(normalized.len() / 5 + 1);

    for word in normalized.split_whitespace() {
        split_quotes(word, |piece| push_word(piece, cfg, &mut tokens));
    }

    tokens
}

/// Tokenizes each paragraph on its own and flattens the result, keeping
/// paragraph order.
pub fn tokenize_paragraphs<S: AsRef<str>>(paragraphs: &[S], cfg: &TokenizeConfig) -> Vec<String> {
    paragraphs
        .iter()
        .flat_map(|paragraph| tokenize(paragraph.as_ref(), cfg))
        .collect()
}

fn split_quotes(word: &str, mut emit: impl FnMut(&str)) {
    let mut start = 0;
    for (idx, ch) in word.char_indices() {
        if QUOTES.contains(&ch) {
            if start < idx {
                emit(&word[start..idx]);
            }
            let end = idx + ch.len_utf8();
            emit(&word[idx..end]);
            start = end;
        }
    }
    if start < word.len() {
        emit(&word[start..]);
    }
}

fn push_word(word: &str, cfg: &TokenizeConfig, tokens: &mut Vec<String>) {
    if cfg.split_contractions {
        for (form, at) in CONTRACTIONS {
            if word.eq_ignore_ascii_case(form) {
                tokens.push(word[..at].to_owned());
                tokens.push(word[at..].to_owned());
                return;
            }
        }
    }
    tokens.push(word.to_owned());
}
