/// How a distribution key is shown to readers.
///
/// Charts print n-grams as their words joined by a space; tables print them
/// as a tuple, e.g. `('bacon', 'pork')`.
pub trait KeyLabel {
    /// Label for chart axes.
    fn axis_label(&self) -> String;

    /// Label for summary tables.
    fn table_label(&self) -> String {
        self.axis_label()
    }
}

impl KeyLabel for String {
    fn axis_label(&self) -> String {
        self.clone()
    }
}

impl KeyLabel for usize {
    fn axis_label(&self) -> String {
        self.to_string()
    }
}

impl<const N: usize> KeyLabel for [String; N] {
    fn axis_label(&self) -> String {
        self.join(" ")
    }

    fn table_label(&self) -> String {
        tuple_repr(self)
    }
}

/// Formats words the way a tuple of strings is conventionally printed:
/// `('a', 'b')`, with a trailing comma for a single element.
pub fn tuple_repr(words: &[String]) -> String {
    let inner: Vec<String> = words.iter().map(|w| quote(w)).collect();
    match inner.len() {
        1 => format!("({},)", inner[0]),
        _ => format!("({})", inner.join(", ")),
    }
}

fn quote(word: &str) -> String {
    if word.contains('\'') && !word.contains('"') {
        return format!("\"{}\"", word.replace('\\', "\\\\"));
    }
    let escaped = word.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn ngram_labels() {
        let bigram = ["bacon".to_string(), "pork".to_string()];
        assert_eq!(bigram.axis_label(), "bacon pork");
        assert_eq!(bigram.table_label(), "('bacon', 'pork')");
    }

    #[test]
    fn scalar_labels() {
        assert_eq!("jowl".to_string().table_label(), "jowl");
        assert_eq!(7usize.axis_label(), "7");
    }

    #[test]
    fn tuple_repr_quoting() {
        assert_eq!(tuple_repr(&words(&["ham"])), "('ham',)");
        assert_eq!(tuple_repr(&words(&["isn't", "ham"])), "(\"isn't\", 'ham')");
        assert_eq!(tuple_repr(&words(&["a\\b"])), "('a\\\\b',)");
    }
}
