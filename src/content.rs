//! Per-language communication items and word banks.
//!
//! The catalog is built once from the compiled language tables and is
//! read-only afterwards. It only accepts [`Lang`] values, so an unknown code
//! has to be mapped to a language (see [`Lang::from_code_or_default`]) before
//! it gets here.

use crate::lang::{Lang, all_langs};
use std::fmt;

/// The three communication-intent groups shown on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Need,
    Want,
    Feeling,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Need, Category::Want, Category::Feeling];

    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Category::Need => 0,
            Category::Want => 1,
            Category::Feeling => 2,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Category::Need => "need",
            Category::Want => "want",
            Category::Feeling => "feeling",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Stable identity of an item: language plus position in that language's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId {
    lang: &'static str,
    ordinal: u16,
}

impl ItemId {
    pub fn lang(&self) -> &'static str {
        self.lang
    }

    pub fn ordinal(&self) -> u16 {
        self.ordinal
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.lang, self.ordinal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommunicationItem {
    pub id: ItemId,
    /// Key into the host's image set.
    pub pictogram: &'static str,
    pub text: &'static str,
    pub category: Category,
}

#[derive(Debug)]
struct LanguageContent {
    lang: Lang,
    items: Vec<CommunicationItem>,
}

#[derive(Debug)]
pub struct ContentCatalog {
    content: Vec<LanguageContent>,
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::load()
    }
}

impl ContentCatalog {
    /// Build items for every supported language, assigning ids in table order.
    pub fn load() -> Self {
        let content = all_langs()
            .iter()
            .map(|&lang| {
                let items = lang
                    .entry()
                    .items
                    .iter()
                    .enumerate()
                    .map(|(ordinal, spec)| CommunicationItem {
                        id: ItemId {
                            lang: lang.code(),
                            ordinal: ordinal as u16,
                        },
                        pictogram: spec.pictogram,
                        text: spec.text,
                        category: spec.category,
                    })
                    .collect();
                LanguageContent { lang, items }
            })
            .collect::<Vec<_>>();
        tracing::debug!(languages = content.len(), "content catalog loaded");
        Self { content }
    }

    /// Languages in picker order.
    pub fn languages(&self) -> &'static [Lang] {
        all_langs()
    }

    /// All items for `lang`, needs first, then wants, then feelings.
    pub fn items(&self, lang: Lang) -> &[CommunicationItem] {
        self.content
            .iter()
            .find(|c| c.lang == lang)
            .map(|c| c.items.as_slice())
            .unwrap_or_default()
    }

    pub fn items_in(
        &self,
        lang: Lang,
        category: Category,
    ) -> impl Iterator<Item = &CommunicationItem> + '_ {
        self.items(lang)
            .iter()
            .filter(move |item| item.category == category)
    }

    pub fn item(&self, id: ItemId) -> Option<&CommunicationItem> {
        let lang = Lang::from_code(id.lang)?;
        self.items(lang).get(id.ordinal as usize)
    }

    #[inline]
    pub fn word_bank(&self, lang: Lang) -> &'static [&'static str] {
        lang.entry().word_bank
    }

    #[inline]
    pub fn category_label(&self, lang: Lang, category: Category) -> &'static str {
        lang.entry().category_label(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{ENG, POR, SPA, ZHO};
    use std::collections::HashSet;

    #[test]
    fn categories_are_balanced_in_every_language() {
        let catalog = ContentCatalog::load();
        for &lang in catalog.languages() {
            let counts = Category::ALL.map(|c| catalog.items_in(lang, c).count());
            assert_eq!(counts, [10, 10, 10], "{}", lang.code());
        }
    }

    #[test]
    fn ids_are_unique_across_languages() {
        let catalog = ContentCatalog::load();
        let mut seen = HashSet::new();
        for &lang in catalog.languages() {
            for item in catalog.items(lang) {
                assert!(seen.insert(item.id), "duplicate id {}", item.id);
            }
        }
        assert_eq!(seen.len(), 6 * 30);
    }

    #[test]
    fn ids_are_stable_between_loads() {
        let a = ContentCatalog::load();
        let b = ContentCatalog::load();
        assert_eq!(a.items(POR), b.items(POR));
    }

    #[test]
    fn item_lookup_by_id() {
        let catalog = ContentCatalog::load();
        let first = catalog.items(SPA)[0];
        assert_eq!(first.id.to_string(), "es:0");
        assert_eq!(catalog.item(first.id), Some(&first));
    }

    #[test]
    fn items_are_grouped_by_category() {
        let catalog = ContentCatalog::load();
        let cats: Vec<_> = catalog.items(ENG).iter().map(|i| i.category).collect();
        let mut sorted = cats.clone();
        sorted.sort();
        assert_eq!(cats, sorted);
    }

    #[test]
    fn category_labels() {
        let catalog = ContentCatalog::load();
        assert_eq!(catalog.category_label(POR, Category::Need), "Necessidades");
        assert_eq!(catalog.category_label(POR, Category::Want), "Desejos");
        assert_eq!(catalog.category_label(POR, Category::Feeling), "Sentimentos");
        assert_eq!(catalog.category_label(ZHO, Category::Feeling), "感受");
    }

    #[test]
    fn spoken_text_is_never_empty() {
        let catalog = ContentCatalog::load();
        for &lang in catalog.languages() {
            assert!(catalog.items(lang).iter().all(|i| !i.text.trim().is_empty()));
        }
    }

    #[test]
    fn portuguese_word_bank_has_basics() {
        let catalog = ContentCatalog::load();
        let bank = catalog.word_bank(POR);
        for word in ["eu", "água", "ajuda", "por favor"] {
            assert!(bank.contains(&word), "{word}");
        }
    }
}
