//! Optional pictogram decoration for word-bank buttons.
//!
//! Lookup folds case, trims surrounding whitespace and composes to NFC, then
//! checks the language's override table before the shared base table. A
//! missing mapping is a normal outcome.

use crate::lang::short_code;
use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use phf::phf_map;
use std::borrow::Cow;
use std::sync::LazyLock;

type EmojiMap = phf::Map<&'static str, &'static str>;

static NFC: LazyLock<ComposingNormalizerBorrowed> = LazyLock::new(ComposingNormalizer::new_nfc);

// Keys are lowercase NFC.
static BASE: EmojiMap = phf_map! {
    // pronouns / people
    "i" => "🙋", "me" => "🙋", "yo" => "🙋", "मैं" => "🙋", "我" => "🙋", "you" => "👉", "tú" => "👉",
    "usted" => "👉", "आप" => "👉", "你" => "👉", "we" => "👥", "nosotros" => "👥", "nosotras" => "👥",
    "हम" => "👥", "我们" => "👥", "they" => "👥", "ellos" => "👥", "ellas" => "👥", "वे" => "👥",
    "他们" => "👥", "he" => "👨", "él" => "👨", "वह" => "👨", "他" => "👨", "she" => "👩",
    "ella" => "👩", "她" => "👩", "mom" => "👩‍🍼", "mother" => "👩‍🍼", "mamá" => "👩‍🍼",
    "madre" => "👩‍🍼", "माँ" => "👩‍🍼", "妈妈" => "👩‍🍼", "dad" => "👨‍🍼", "father" => "👨‍🍼",
    "papá" => "👨‍🍼", "padre" => "👨‍🍼", "पापा" => "👨‍🍼", "爸爸" => "👨‍🍼", "brother" => "👦",
    "hermano" => "👦", "भाई" => "👦", "哥哥" => "👦", "sister" => "👧", "hermana" => "👧",
    "बहन" => "👧", "姐姐" => "👧", "teacher" => "👩‍🏫", "maestro" => "👨‍🏫", "maestra" => "👩‍🏫",
    "老师" => "👩‍🏫",

    // core actions
    "want" => "✨", "quiero" => "✨", "quieres" => "✨", "चाहता हूँ" => "✨", "想要" => "✨",
    "need" => "❗️", "necesito" => "❗️", "ज़रूरत" => "❗️", "需要" => "❗️", "go" => "➡️",
    "ir" => "➡️", "जाना" => "➡️", "去" => "➡️", "come" => "⬅️", "venir" => "⬅️", "आना" => "⬅️",
    "来" => "⬅️", "help" => "🆘", "ayuda" => "🆘", "मदद" => "🆘", "帮助" => "🆘", "more" => "➕",
    "más" => "➕", "और" => "➕", "更多" => "➕", "stop" => "⛔️", "alto" => "⛔️", "रुको" => "⛔️",
    "停" => "⛔️", "yes" => "✅", "sí" => "✅", "हाँ" => "✅", "是" => "✅", "no" => "❌",
    "नहीं" => "❌", "不是" => "❌", "please" => "🙏", "por favor" => "🙏", "कृपया" => "🙏",
    "请" => "🙏", "thank you" => "🤝", "gracias" => "🤝", "धन्यवाद" => "🤝", "谢谢" => "🤝",

    // feelings
    "happy" => "😊", "feliz" => "😊", "खुश" => "😊", "开心" => "😊", "sad" => "😢", "triste" => "😢",
    "उदास" => "😢", "难过" => "😢", "angry" => "😠", "enojado" => "😠", "enojada" => "😠",
    "गुस्सा" => "😠", "生气" => "😠", "scared" => "😨", "asustado" => "😨", "asustada" => "😨",
    "डर" => "😨", "害怕" => "😨", "tired" => "😴", "cansado" => "😴", "cansada" => "😴", "थका" => "😴",
    "累" => "😴", "sick" => "🤒", "enfermo" => "🤒", "enferma" => "🤒", "बीमार" => "🤒", "生病" => "🤒",
    "hurt" => "🤕", "duele" => "🤕", "痛" => "🤕",

    // food & drink
    "water" => "💧", "agua" => "💧", "पानी" => "💧", "水" => "💧", "food" => "🍽️", "comida" => "🍽️",
    "खाना" => "🍽️", "食物" => "🍽️", "eat" => "🍽️", "comer" => "🍽️", "吃" => "🍽️", "drink" => "🥤",
    "beber" => "🥤", "喝" => "🥤", "milk" => "🥛", "leche" => "🥛", "दूध" => "🥛", "牛奶" => "🥛",
    "juice" => "🧃", "jugo" => "🧃", "रस" => "🧃", "果汁" => "🧃", "pizza" => "🍕", "披萨" => "🍕",
    "rice" => "🍚", "arroz" => "🍚", "चावल" => "🍚", "米饭" => "🍚", "bread" => "🍞", "pan" => "🍞",
    "रोटी" => "🍞", "面包" => "🍞", "apple" => "🍎", "manzana" => "🍎", "सेब" => "🍎", "苹果" => "🍎",

    // places
    "home" => "🏠", "house" => "🏠", "casa" => "🏠", "घर" => "🏠", "家" => "🏠", "school" => "🏫",
    "escuela" => "🏫", "स्कूल" => "🏫", "学校" => "🏫", "bathroom" => "🚻", "baño" => "🚻",
    "toilet" => "🚻", "बाथरूम" => "🚻", "厕所" => "🚻", "park" => "🏞️", "parque" => "🏞️",
    "पार्क" => "🏞️", "公园" => "🏞️", "hospital" => "🏥", "अस्पताल" => "🏥", "医院" => "🏥",

    // activities
    "play" => "🧩", "jugar" => "🧩", "खेलना" => "🧩", "玩" => "🧩", "sleep" => "🛌", "dormir" => "🛌",
    "सोना" => "🛌", "睡觉" => "🛌", "read" => "📖", "leer" => "📖", "पढ़ना" => "📖", "阅读" => "📖",
    "write" => "✍️", "escribir" => "✍️", "लिखना" => "✍️", "写" => "✍️", "music" => "🎵",
    "música" => "🎵", "संगीत" => "🎵", "音乐" => "🎵", "phone" => "📱", "teléfono" => "📱",
    "电话" => "📱",

    // descriptors / helpers
    "big" => "🟦", "grande" => "🟦", "बड़ा" => "🟦", "大" => "🟦", "small" => "🟩", "pequeño" => "🟩",
    "छोटा" => "🟩", "小" => "🟩", "hot" => "🔥", "caliente" => "🔥", "गरम" => "🔥", "热" => "🔥",
    "cold" => "🧊", "frío" => "🧊", "ठंडा" => "🧊", "冷" => "🧊", "clean" => "🧼", "limpio" => "🧼",
    "साफ" => "🧼", "干净" => "🧼", "dirty" => "🧹", "sucio" => "🧹", "गंदा" => "🧹", "脏" => "🧹",
};

static EN_OVERRIDES: EmojiMap = phf_map! {
    "hurt" => "🤕", "sick" => "🤒", "bathroom" => "🚻", "toilet" => "🚻", "play" => "🧩",
};

static ES_OVERRIDES: EmojiMap = phf_map! {
    "baño" => "🚻", "jugar" => "🧩", "hospital" => "🏥",
};

static PT_OVERRIDES: EmojiMap = phf_map! {
    "água" => "💧", "comida" => "🍽️", "casa" => "🏠", "banheiro" => "🚻", "feliz" => "😊",
    "triste" => "😢", "ajuda" => "🆘", "por favor" => "🙏",
};

fn overrides(code: &str) -> Option<&'static EmojiMap> {
    match short_code(code.trim()) {
        "en" => Some(&EN_OVERRIDES),
        "es" => Some(&ES_OVERRIDES),
        "pt" => Some(&PT_OVERRIDES),
        _ => None,
    }
}

/// Lookup form of a word: trimmed, lowercased, NFC.
pub fn normalize_word(word: &str) -> Cow<'_, str> {
    let trimmed = word.trim();
    let lowered: Cow<'_, str> = if trimmed.chars().any(char::is_uppercase) {
        Cow::Owned(trimmed.to_lowercase())
    } else {
        Cow::Borrowed(trimmed)
    };
    if NFC.is_normalized(&lowered) {
        return lowered;
    }
    Cow::Owned(NFC.normalize(&lowered).into_owned())
}

/// Pictogram for `word` in the language `lang_code` (full or short code).
pub fn emoji(word: &str, lang_code: &str) -> Option<&'static str> {
    let key = normalize_word(word);
    if key.is_empty() {
        return None;
    }
    overrides(lang_code)
        .and_then(|table| table.get(&*key))
        .or_else(|| BASE.get(&*key))
        .copied()
}

/// A word-bank word paired with its optional pictogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotated<'a> {
    pub word: &'a str,
    pub emoji: Option<&'static str>,
}

impl Annotated<'_> {
    /// `"💧 água"`, or the bare word when there is no pictogram.
    pub fn label(&self) -> String {
        match self.emoji {
            Some(e) => format!("{e} {}", self.word),
            None => self.word.to_owned(),
        }
    }
}

pub fn annotate<'a>(word: &'a str, lang_code: &str) -> Annotated<'a> {
    Annotated {
        word,
        emoji: emoji(word, lang_code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_base() {
        assert_eq!(emoji("água", "pt"), Some("💧"));
        assert_eq!(emoji("hurt", "en"), Some("🤕"));
        assert_eq!(emoji("banheiro", "pt-BR"), Some("🚻"));
    }

    #[test]
    fn base_table_serves_every_language() {
        assert_eq!(emoji("agua", "es"), Some("💧"));
        assert_eq!(emoji("水", "zh"), Some("💧"));
        assert_eq!(emoji("पानी", "hi"), Some("💧"));
        assert_eq!(emoji("water", "fr"), Some("💧"));
    }

    #[test]
    fn override_tables_are_language_scoped() {
        assert_eq!(emoji("água", "es"), None);
        assert_eq!(emoji("banheiro", "en"), None);
    }

    #[test]
    fn case_and_whitespace_are_folded() {
        assert_eq!(emoji("  Water\n", "en"), Some("💧"));
        assert_eq!(emoji("ÁGUA", "pt"), Some("💧"));
        assert_eq!(emoji("Por Favor", "pt"), Some("🙏"));
    }

    #[test]
    fn decomposed_input_matches_precomposed_key() {
        assert_eq!(emoji("a\u{301}gua", "pt"), Some("💧"));
        assert_eq!(emoji("ban\u{303}o", "es"), Some("🚻"));
        // precomposed nukta letters decompose under NFC
        assert_eq!(emoji("\u{095B}रूरत", "hi"), Some("❗️"));
    }

    #[test]
    fn unknown_words_have_no_pictogram() {
        assert_eq!(emoji("xyzzy", "en"), None);
        assert_eq!(emoji("", "en"), None);
        assert_eq!(emoji("   ", "pt"), None);
        assert_eq!(emoji("waters", "en"), None);
    }

    #[test]
    fn annotate_labels() {
        assert_eq!(annotate("água", "pt").label(), "💧 água");
        assert_eq!(annotate("obrigado", "pt").label(), "obrigado");
    }

    #[test]
    fn normalize_word_borrows_when_already_folded() {
        assert!(matches!(normalize_word("water"), Cow::Borrowed("water")));
        assert!(matches!(normalize_word(" water "), Cow::Borrowed("water")));
        assert!(matches!(normalize_word("Water"), Cow::Owned(_)));
    }
}
