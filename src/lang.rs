pub mod data;
pub mod strings;

use crate::content::Category;
use crate::lang::data::{ALL_LANGS, LANG_ENTRIES, LANG_TABLE};
use phf::Map;

pub use data::{ENG, FRA, HIN, POR, SPA, ZHO};

/// A supported board language.
///
/// Values only exist as the constants generated in [`data`], so every `Lang`
/// is backed by a complete [`LangEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    code: &'static str,
    name: &'static str,
    slot: usize,
}

impl Lang {
    /// Short ISO 639-1 code (`"pt"`).
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Native display name (`"Português"`).
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub fn entry(&self) -> &'static LangEntry {
        &LANG_ENTRIES[self.slot]
    }

    /// Look up a language by code. Region-tagged codes reduce to their prefix
    /// and matching ignores ASCII case, so `"pt-BR"` and `"PT"` both give [`POR`].
    pub fn from_code(code: &str) -> Option<Lang> {
        let short = short_code(code.trim());
        if let Some(lang) = LANG_TABLE.get(short) {
            return Some(*lang);
        }
        ALL_LANGS
            .iter()
            .find(|l| l.code.eq_ignore_ascii_case(short))
            .copied()
    }

    /// Caller-boundary substitution: unknown or empty codes become [`DEFAULT_LANG`].
    pub fn from_code_or_default(code: &str) -> Lang {
        Self::from_code(code).unwrap_or(DEFAULT_LANG)
    }

    /// Closed per-language key announcing that this language was selected.
    #[inline]
    pub fn confirmation_key(&self) -> &'static str {
        self.entry().confirmation_key
    }

    #[inline]
    pub fn preferred_voices(&self) -> &'static [&'static str] {
        self.entry().voices
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

pub const DEFAULT_LANG: Lang = ENG;

/// Every supported language, in picker order.
#[inline]
pub fn all_langs() -> &'static [Lang] {
    ALL_LANGS
}

/// Reduce a language code to the part before the first `-` (`"zh-Hans-CN"` → `"zh"`).
///
/// Idempotent and allocation-free.
#[inline]
pub fn short_code(code: &str) -> &str {
    match memchr::memchr(b'-', code.as_bytes()) {
        Some(pos) => &code[..pos],
        None => code,
    }
}

/// One communication item as authored in the language tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpec {
    pub category: Category,
    pub pictogram: &'static str,
    pub text: &'static str,
}

pub type StringMap = Map<&'static str, &'static str>;

/// Everything the board knows about one language.
#[derive(Debug, Clone, Copy)]
pub struct LangEntry {
    pub voices: &'static [&'static str],
    pub category_labels: [&'static str; 3],
    pub word_bank: &'static [&'static str],
    pub items: &'static [ItemSpec],
    pub strings: &'static StringMap,
    pub confirmation_key: &'static str,
}

impl LangEntry {
    #[inline]
    pub fn category_label(&self, category: Category) -> &'static str {
        self.category_labels[category.index()]
    }

    #[inline]
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.strings.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_code_strips_region() {
        assert_eq!(short_code("pt-BR"), "pt");
        assert_eq!(short_code("zh-Hans-CN"), "zh");
        assert_eq!(short_code("en"), "en");
        assert_eq!(short_code(""), "");
        assert_eq!(short_code("-x"), "");
    }

    #[test]
    fn short_code_is_idempotent() {
        for code in ["pt-BR", "zh-Hans-CN", "en", "", "fr-CA"] {
            let once = short_code(code);
            assert_eq!(short_code(once), once);
        }
    }

    #[test]
    fn from_code_accepts_regions_and_case() {
        assert_eq!(Lang::from_code("pt-BR"), Some(POR));
        assert_eq!(Lang::from_code("PT"), Some(POR));
        assert_eq!(Lang::from_code(" hi-IN "), Some(HIN));
        assert_eq!(Lang::from_code("zh-Hans"), Some(ZHO));
        assert_eq!(Lang::from_code("de"), None);
        assert_eq!(Lang::from_code(""), None);
    }

    #[test]
    fn unknown_code_falls_back_to_default() {
        assert_eq!(Lang::from_code_or_default("xx"), ENG);
        assert_eq!(Lang::from_code_or_default(""), DEFAULT_LANG);
        assert_eq!(Lang::from_code_or_default("es-MX"), SPA);
    }

    #[test]
    fn confirmation_keys_are_per_language() {
        assert_eq!(POR.confirmation_key(), "confirm_language_selected_pt");
        assert_eq!(HIN.confirmation_key(), "confirm_language_selected_hi");
        for lang in all_langs() {
            assert!(lang.confirmation_key().ends_with(lang.code()));
        }
    }

    #[test]
    fn picker_order_is_stable() {
        let codes: Vec<_> = all_langs().iter().map(|l| l.code()).collect();
        assert_eq!(codes, ["en", "hi", "es", "zh", "fr", "pt"]);
    }
}
