use crate::dist::FreqDist;

pub type Bigram = [String; 2];
pub type Trigram = [String; 3];

/// The four distributions computed for one token stream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Distributions {
    pub words: FreqDist<String>,
    /// Token length in characters (Unicode scalar values).
    pub lengths: FreqDist<usize>,
    pub bigrams: FreqDist<Bigram>,
    pub trigrams: FreqDist<Trigram>,
}

impl Distributions {
    /// Number of tokens the distributions were computed from.
    pub fn token_count(&self) -> u64 {
        self.words.total()
    }
}

/// Counts words, lengths, bigrams and trigrams in a single pass over
/// `tokens`.
///
/// For `N` tokens the bigram distribution sums to `N - 1` and the trigram
/// distribution to `N - 2`; both are empty when there are too few tokens.
pub fn analyze<S: AsRef<str>>(tokens: &[S]) -> Distributions {
    let mut dists = Distributions::default();

    for (idx, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        dists.words.add(token.to_owned());
        dists.lengths.add(token.chars().count());

        if idx >= 1 {
            dists.bigrams.add(window::<2, S>(&tokens[idx - 1..=idx]));
        }
        if idx >= 2 {
            dists.trigrams.add(window::<3, S>(&tokens[idx - 2..=idx]));
        }
    }

    dists
}

fn window<const N: usize, S: AsRef<str>>(slice: &[S]) -> [String; N] {
    std::array::from_fn(|i| slice[i].as_ref().to_owned())
}
