/// In-progress sentence on the sentence-builder screen: the words tapped from
/// the word bank, plus a free-typed buffer. The two are independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    words: Vec<String>,
    typed: String,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a word. Blank words are ignored.
    pub fn add_word(&mut self, word: &str) {
        let word = word.trim();
        if !word.is_empty() {
            self.words.push(word.to_owned());
        }
    }

    #[inline]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Tapped words joined by single spaces.
    pub fn sentence(&self) -> String {
        self.words.join(" ")
    }

    pub fn set_typed(&mut self, text: impl Into<String>) {
        self.typed = text.into();
    }

    #[inline]
    pub fn typed(&self) -> &str {
        &self.typed
    }

    #[inline]
    pub fn typed_trimmed(&self) -> &str {
        self.typed.trim()
    }

    pub fn clear_words(&mut self) {
        self.words.clear();
    }

    pub fn clear_typed(&mut self) {
        self.typed.clear();
    }

    pub fn clear(&mut self) {
        self.clear_words();
        self.clear_typed();
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.typed.is_empty()
    }
}
