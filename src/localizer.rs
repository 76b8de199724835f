//! Runtime string lookup with a fixed fallback chain.
//!
//! Resolution order, first hit wins:
//!
//! 1. the requested language (full code, then short code)
//! 2. the same, with a recognized prefix (`prompt_`, `label_`, ...) stripped
//! 3. the inline table for the requested short code
//! 4. the base bundle
//! 5. the English bundle
//! 6. the system bundle
//! 7. the humanized key (`"xyz_unknown_key"` → `"Xyz unknown key"`)
//!
//! Tiers 3–6 try the original key before the stripped one. Resolution never
//! fails and never yields an empty string for a non-empty key.

use crate::lang::strings::EN_STRINGS;
use crate::lang::{ENG, Lang, StringMap, all_langs, short_code};
use phf::phf_map;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

const RECOGNIZED_PREFIXES: [&str; 5] = ["prompt_", "label_", "title_", "button_", "menu_"];

/// A single key → string table.
pub trait StringTable: Send + Sync {
    fn lookup(&self, key: &str) -> Option<&str>;
}

impl StringTable for StringMap {
    #[inline]
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).copied()
    }
}

impl StringTable for HashMap<String, String> {
    #[inline]
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Where localized tables come from.
///
/// `bundle` is asked with the code exactly as given; the resolver handles the
/// full-then-short retry itself.
pub trait BundleSource: Send + Sync {
    fn bundle(&self, code: &str) -> Option<&dyn StringTable>;

    fn base(&self) -> Option<&dyn StringTable> {
        None
    }

    fn english(&self) -> Option<&dyn StringTable> {
        self.bundle("en")
    }

    fn system(&self) -> Option<&dyn StringTable> {
        None
    }
}

/// Serves the catalogs compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticBundles {
    base: Option<Lang>,
    system: Option<Lang>,
}

impl StaticBundles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a compiled catalog as the base (development-language) bundle.
    pub fn with_base(mut self, lang: Lang) -> Self {
        self.base = Some(lang);
        self
    }

    /// Use the device language's catalog as the system bundle. Unsupported
    /// codes leave the system tier empty.
    pub fn with_system_language(mut self, code: &str) -> Self {
        self.system = Lang::from_code(code);
        self
    }
}

impl BundleSource for StaticBundles {
    fn bundle(&self, code: &str) -> Option<&dyn StringTable> {
        all_langs()
            .iter()
            .find(|l| l.code().eq_ignore_ascii_case(code))
            .map(|l| l.entry().strings as &dyn StringTable)
    }

    fn base(&self) -> Option<&dyn StringTable> {
        self.base.map(|l| l.entry().strings as &dyn StringTable)
    }

    fn english(&self) -> Option<&dyn StringTable> {
        Some(&EN_STRINGS)
    }

    fn system(&self) -> Option<&dyn StringTable> {
        self.system.map(|l| l.entry().strings as &dyn StringTable)
    }
}

/// Owned, runtime-built bundles, e.g. loaded by the host from its own files.
#[derive(Debug, Clone, Default)]
pub struct MapBundles {
    bundles: HashMap<String, HashMap<String, String>>,
    base: Option<HashMap<String, String>>,
    system: Option<HashMap<String, String>>,
}

fn owned_table<I, K, V>(entries: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

impl MapBundles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bundle<I, K, V>(mut self, code: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.bundles
            .insert(code.to_ascii_lowercase(), owned_table(entries));
        self
    }

    pub fn with_base<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.base = Some(owned_table(entries));
        self
    }

    pub fn with_system<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.system = Some(owned_table(entries));
        self
    }
}

impl BundleSource for MapBundles {
    fn bundle(&self, code: &str) -> Option<&dyn StringTable> {
        self.bundles
            .get(&code.to_ascii_lowercase())
            .map(|t| t as &dyn StringTable)
    }

    fn base(&self) -> Option<&dyn StringTable> {
        self.base.as_ref().map(|t| t as &dyn StringTable)
    }

    fn system(&self) -> Option<&dyn StringTable> {
        self.system.as_ref().map(|t| t as &dyn StringTable)
    }
}

// Last stop before the shared bundles for languages whose catalogs lag behind.
static EN_INLINE: StringMap = phf_map! {
    "choose_category" => "Choose Category",
    "sentence_builder" => "Sentence Builder",
    "back" => "Back",
    "info" => "Info",
    "change_language" => "Change Language",
    "choose_language_title" => "Choose Language",
    "hear_prompt" => "Hear Prompt",
    "prompt_select_language" => "Please select a language",
    "confirm_language_selected_en" => "English selected",
    "confirm_language_selected_hi" => "Hindi selected",
    "start_using_board" => "Start Using the Board",
    "hear_quick_summary" => "Hear a Quick Summary",
    "quick_summary_text" => "This app helps people communicate their needs, wants, feelings, and custom sentences by tapping pictures, choosing words, or typing.",
    "prompt_choose_category" => "Please choose a category",
    "prompt_sentence_builder" => "Tap words to build a sentence or type your own sentence",
    "prompt_back_to_menu" => "Returning to main menu",
    "prompt_info" => "Opening information page",
    "prompt_choose_words" => "Please choose words",
    "prompt_type_sentence" => "Please type a sentence",
    "title_word_bank_sentence" => "Tap words to build a sentence",
    "speak_word_bank" => "Speak Word Bank",
    "clear_words" => "Clear Words",
    "type_your_sentence" => "Type Your Sentence",
    "type_here" => "Type here",
    "speak_typed_sentence" => "Speak Typed Sentence",
    "clear" => "Clear",
    "word_bank" => "Word Bank",
};

static HI_INLINE: StringMap = phf_map! {
    "choose_category" => "श्रेणी चुनें",
    "sentence_builder" => "वाक्य बनाएं",
    "back" => "वापस",
    "info" => "जानकारी",
    "change_language" => "भाषा बदलें",
    "choose_language_title" => "भाषा चुनें",
    "hear_prompt" => "संकेत सुनें",
    "prompt_select_language" => "कृपया एक भाषा चुनें",
    "confirm_language_selected_en" => "अंग्रेज़ी चुनी गई है",
    "confirm_language_selected_hi" => "हिन्दी चुनी गई है",
    "start_using_board" => "बोर्ड का उपयोग शुरू करें",
    "hear_quick_summary" => "त्वरित सारांश सुनें",
    "quick_summary_text" => "यह ऐप लोगों को चित्रों पर टैप करके, शब्द चुनकर या टाइप करके उनकी आवश्यकताओं, इच्छाओं, भावनाओं और कस्टम वाक्यों को संप्रेषित करने में मदद करता है।",
    "prompt_choose_category" => "कृपया एक श्रेणी चुनें",
    "prompt_sentence_builder" => "वाक्य बनाने के लिए शब्दों पर टैप करें या अपना वाक्य टाइप करें",
    "prompt_back_to_menu" => "मुख्य मेनू पर वापस जा रहे हैं",
    "prompt_info" => "जानकारी पृष्ठ खोल रहे हैं",
    "prompt_choose_words" => "कृपया शब्द चुनें",
    "prompt_type_sentence" => "कृपया एक वाक्य टाइप करें",
    "title_word_bank_sentence" => "वाक्य बनाने के लिए शब्दों पर टैप करें",
    "speak_word_bank" => "शब्द बैंक बोलें",
    "clear_words" => "शब्द साफ़ करें",
    "type_your_sentence" => "अपना वाक्य टाइप करें",
    "type_here" => "यहाँ टाइप करें",
    "speak_typed_sentence" => "टाइप किया वाक्य बोलें",
    "clear" => "साफ़ करें",
    "word_bank" => "शब्द बैंक",
};

fn inline_table(code: &str) -> Option<&'static StringMap> {
    let short = short_code(code);
    if short.eq_ignore_ascii_case("en") {
        Some(&EN_INLINE)
    } else if short.eq_ignore_ascii_case("hi") {
        Some(&HI_INLINE)
    } else {
        None
    }
}

/// Remove the first recognized prefix. A key that is nothing but a prefix
/// is left alone.
pub fn strip_recognized_prefix(key: &str) -> Option<&str> {
    RECOGNIZED_PREFIXES
        .iter()
        .find_map(|p| key.strip_prefix(p))
        .filter(|rest| !rest.is_empty())
}

/// `"back_to_menu"` → `"Back to menu"`.
pub fn humanize(key: &str) -> String {
    let base = strip_recognized_prefix(key).unwrap_or(key);
    let mut chars = base.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(base.len());
    out.extend(first.to_uppercase());
    out.extend(chars.map(|c| if c == '_' { ' ' } else { c }));
    if first == '_' {
        out.replace_range(..1, " ");
    }
    out
}

/// Which step of the chain answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Requested,
    Stripped,
    Inline,
    Base,
    English,
    System,
    Humanized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub text: Cow<'a, str>,
    pub tier: Tier,
}

/// Closed set of spoken prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prompt {
    SelectLanguage,
    ChooseCategory,
    SentenceBuilder,
    BackToMenu,
    Info,
    ChooseWords,
    TypeSentence,
    QuickSummary,
    TutorialCompletion,
    /// Tutorial word-bank demo spoken with nothing tapped.
    EmptySentence,
    TypeSomethingFirst,
}

impl Prompt {
    pub const fn key(self) -> &'static str {
        match self {
            Prompt::SelectLanguage => "prompt_select_language",
            Prompt::ChooseCategory => "prompt_choose_category",
            Prompt::SentenceBuilder => "prompt_sentence_builder",
            Prompt::BackToMenu => "prompt_back_to_menu",
            Prompt::Info => "prompt_info",
            Prompt::ChooseWords => "prompt_choose_words",
            Prompt::TypeSentence => "prompt_type_sentence",
            Prompt::QuickSummary => "quick_summary_text",
            Prompt::TutorialCompletion => "tutorial_completion_message",
            Prompt::EmptySentence => "tutorial_empty_sentence",
            Prompt::TypeSomethingFirst => "tutorial_type_something_first",
        }
    }
}

#[derive(Clone)]
pub struct Localizer {
    bundles: Arc<dyn BundleSource>,
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new(StaticBundles::new().with_base(ENG))
    }
}

impl std::fmt::Debug for Localizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localizer").finish_non_exhaustive()
    }
}

impl Localizer {
    pub fn new<B: BundleSource + 'static>(bundles: B) -> Self {
        Self {
            bundles: Arc::new(bundles),
        }
    }

    pub fn from_arc(bundles: Arc<dyn BundleSource>) -> Self {
        Self { bundles }
    }

    /// Resolve `key` for `lang`. Never fails.
    #[inline]
    pub fn resolve<'a>(&'a self, key: &str, lang: Option<&str>) -> Cow<'a, str> {
        self.resolve_traced(key, lang).text
    }

    pub fn prompt<'a>(&'a self, prompt: Prompt, lang: Lang) -> Cow<'a, str> {
        self.resolve(prompt.key(), Some(lang.code()))
    }

    /// Resolve and substitute each `%@` with the next argument, in order.
    pub fn format(&self, key: &str, lang: Option<&str>, args: &[&str]) -> String {
        let template = self.resolve(key, lang);
        let mut out = String::with_capacity(template.len() + 8);
        let mut rest: &str = &template;
        let mut args = args.iter();
        while let Some(pos) = rest.find("%@") {
            let Some(arg) = args.next() else { break };
            out.push_str(&rest[..pos]);
            out.push_str(arg);
            rest = &rest[pos + 2..];
        }
        out.push_str(rest);
        out
    }

    pub fn resolve_traced<'a>(&'a self, key: &str, lang: Option<&str>) -> Resolution<'a> {
        let code = lang.map(str::trim).filter(|c| !c.is_empty());
        let stripped = strip_recognized_prefix(key);

        if let Some(code) = code {
            if let Some(v) = self.in_language(key, code) {
                return hit(v, Tier::Requested);
            }
            if let Some(v) = stripped.and_then(|s| self.in_language(s, code)) {
                return self.fallback(key, code, v, Tier::Stripped);
            }
            if let Some(table) = inline_table(code)
                && let Some(v) = lookup_either(table, key, stripped)
            {
                return self.fallback(key, code, v, Tier::Inline);
            }
        }
        let code = code.unwrap_or("");

        if let Some(v) = self.bundles.base().and_then(|t| lookup_either(t, key, stripped)) {
            return self.fallback(key, code, v, Tier::Base);
        }
        if let Some(v) = self.bundles.english().and_then(|t| lookup_either(t, key, stripped)) {
            return self.fallback(key, code, v, Tier::English);
        }
        if let Some(v) = self.bundles.system().and_then(|t| lookup_either(t, key, stripped)) {
            return self.fallback(key, code, v, Tier::System);
        }

        warn!(key, lang = code, "no translation found, humanizing key");
        Resolution {
            text: Cow::Owned(humanize(key)),
            tier: Tier::Humanized,
        }
    }

    fn in_language<'a>(&'a self, key: &str, code: &str) -> Option<&'a str> {
        if let Some(v) = self.bundles.bundle(code).and_then(|t| non_empty(t.lookup(key))) {
            return Some(v);
        }
        let short = short_code(code);
        if short != code {
            return self.bundles.bundle(short).and_then(|t| non_empty(t.lookup(key)));
        }
        None
    }

    #[inline]
    fn fallback<'a>(&self, key: &str, code: &str, v: &'a str, tier: Tier) -> Resolution<'a> {
        debug!(key, lang = code, ?tier, "resolved through fallback");
        hit(v, tier)
    }
}

#[inline]
fn hit(v: &str, tier: Tier) -> Resolution<'_> {
    Resolution {
        text: Cow::Borrowed(v),
        tier,
    }
}

#[inline]
fn non_empty(v: Option<&str>) -> Option<&str> {
    v.filter(|s| !s.is_empty())
}

fn lookup_either<'t, T: StringTable + ?Sized>(
    table: &'t T,
    key: &str,
    stripped: Option<&str>,
) -> Option<&'t str> {
    non_empty(table.lookup(key)).or_else(|| stripped.and_then(|s| non_empty(table.lookup(s))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse() -> Localizer {
        Localizer::new(
            MapBundles::new()
                .with_bundle("pt", [("choose_category", "Escolher Categoria")])
                .with_bundle("pt-br", [("back", "Voltar (BR)")])
                .with_bundle("en", [("english_only", "From English")])
                .with_base([("base_only", "From Base"), ("shared", "Base wins")])
                .with_system([("system_only", "From System"), ("shared", "System loses")]),
        )
    }

    #[test]
    fn strip_recognized_prefix_only_once() {
        assert_eq!(strip_recognized_prefix("prompt_choose_category"), Some("choose_category"));
        assert_eq!(strip_recognized_prefix("menu_label_x"), Some("label_x"));
        assert_eq!(strip_recognized_prefix("choose_category"), None);
        assert_eq!(strip_recognized_prefix("prompt_"), None);
    }

    #[test]
    fn humanize_key() {
        assert_eq!(humanize("xyz_unknown_key"), "Xyz unknown key");
        assert_eq!(humanize("prompt_back_to_menu"), "Back to menu");
        assert_eq!(humanize("émoji_set"), "Émoji set");
        assert_eq!(humanize(""), "");
        assert_eq!(humanize("_lead"), " lead");
    }

    #[test]
    fn full_code_before_short_code() {
        let l = sparse();
        let r = l.resolve_traced("back", Some("pt-BR"));
        assert_eq!(r.text, "Voltar (BR)");
        assert_eq!(r.tier, Tier::Requested);
        let r = l.resolve_traced("choose_category", Some("pt-BR"));
        assert_eq!(r.text, "Escolher Categoria");
        assert_eq!(r.tier, Tier::Requested);
    }

    #[test]
    fn stripped_key_in_requested_language() {
        let l = sparse();
        let r = l.resolve_traced("prompt_choose_category", Some("pt"));
        assert_eq!(r.text, "Escolher Categoria");
        assert_eq!(r.tier, Tier::Stripped);
    }

    #[test]
    fn inline_table_for_hindi() {
        let l = sparse();
        let r = l.resolve_traced("label_back", Some("hi-IN"));
        assert_eq!(r.text, "वापस");
        assert_eq!(r.tier, Tier::Inline);
    }

    #[test]
    fn base_then_english_then_system() {
        let l = sparse();
        assert_eq!(l.resolve_traced("base_only", Some("pt")).tier, Tier::Base);
        assert_eq!(l.resolve_traced("shared", Some("pt")).text, "Base wins");
        let r = l.resolve_traced("title_english_only", Some("pt"));
        assert_eq!((r.text.as_ref(), r.tier), ("From English", Tier::English));
        let r = l.resolve_traced("system_only", None);
        assert_eq!((r.text.as_ref(), r.tier), ("From System", Tier::System));
    }

    #[test]
    fn missing_everywhere_is_humanized() {
        let l = sparse();
        let r = l.resolve_traced("button_go_home", Some("pt"));
        assert_eq!(r.text, "Go home");
        assert_eq!(r.tier, Tier::Humanized);
    }

    #[test]
    fn blank_code_is_no_code() {
        let l = sparse();
        assert_eq!(l.resolve_traced("choose_category", Some("   ")).tier, Tier::Humanized);
        assert_eq!(l.resolve_traced("english_only", Some("")).tier, Tier::English);
    }

    #[test]
    fn empty_values_count_as_missing() {
        let l = Localizer::new(
            MapBundles::new()
                .with_bundle("es", [("back", "")])
                .with_bundle("en", [("back", "Back")]),
        );
        assert_eq!(l.resolve("back", Some("es")), "Back");
    }

    #[test]
    fn format_fills_placeholders_in_order() {
        let l = Localizer::default();
        assert_eq!(l.format("tutorial_step_indicator", Some("en"), &["2", "7"]), "Step 2 of 7");
        assert_eq!(l.format("tutorial_step_indicator", Some("pt"), &["1"]), "Passo 1 de %@");
    }

    #[test]
    fn system_bundle_uses_device_language() {
        let l = Localizer::new(StaticBundles::new().with_system_language("pt-BR"));
        assert_eq!(l.resolve_traced("back", None).tier, Tier::English);
        // English has no bare `select_language`; the Portuguese catalog does
        let r = l.resolve_traced("select_language", Some("de"));
        assert_eq!(r.text, "Por favor, escolha um idioma");
        assert_eq!(r.tier, Tier::System);
    }

    #[test]
    fn prompts_resolve_in_language() {
        let l = Localizer::default();
        assert_eq!(l.prompt(Prompt::ChooseCategory, crate::lang::SPA), "Por favor, elige una categoría");
        assert_eq!(l.prompt(Prompt::ChooseCategory, crate::lang::POR), "Escolher Categoria");
    }
}
