use crate::content::Category;
use crate::lang::strings::{EN_STRINGS, ES_STRINGS, FR_STRINGS, HI_STRINGS, PT_STRINGS, ZH_STRINGS};
use crate::lang::{ItemSpec, Lang, LangEntry};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates every per-language table from a single definition
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
($(
        $code:ident, $code_str:literal, $name:literal,
        voices: [ $($voice:literal),* $(,)? ],
        labels: [ $need:literal, $want:literal, $feeling:literal ],
        strings: $strings:ident,
        words: [ $($word:literal),* $(,)? ],
        items: [ $( $cat:ident $pict:literal => $text:literal ),* $(,)? ]
    ),* $(,)?) => {
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Clone, Copy)]
        enum Slot {
            $($code),*
        }

        // Public `Lang` constants
        $(
            pub const $code: Lang = Lang { code: $code_str, name: $name, slot: Slot::$code as usize };
        )*

        // Per-language static data modules
        $(
            paste! {
                mod [<$code:lower _data>] {
                    use super::*;

                    pub static VOICES: &[&str] = &[$($voice),*];

                    pub static WORDS: &[&str] = &[$($word),*];

                    pub static ITEMS: &[ItemSpec] = &[
                        $(ItemSpec { category: Category::$cat, pictogram: $pict, text: $text }),*
                    ];

                    pub const CONFIRM: &str = concat!("confirm_language_selected_", $code_str);
                }
            }
        )*

        // Entries indexed by `Lang::slot`
        paste! {
            pub(crate) static LANG_ENTRIES: &[LangEntry] = &[
                $(
                    LangEntry {
                        voices: [<$code:lower _data>]::VOICES,
                        category_labels: [$need, $want, $feeling],
                        word_bank: [<$code:lower _data>]::WORDS,
                        items: [<$code:lower _data>]::ITEMS,
                        strings: &$strings,
                        confirmation_key: [<$code:lower _data>]::CONFIRM,
                    }
                ),*
            ];
        }

        // Code lookup table (public)
        pub static LANG_TABLE: Map<&'static str, Lang> = phf_map! {
            $(
                $code_str => $code,
            )*
        };

        pub static ALL_LANGS: &[Lang] = &[$($code),*];
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    Item pictograms appear in the same order in every language so the board
//    grid keeps its layout when the language changes.
// ---------------------------------------------------------------------------
define_languages! {
    ENG, "en", "English",
        voices: ["en-US", "en-GB", "en-IN"],
        labels: ["Needs", "Wants", "Feelings"],
        strings: EN_STRINGS,
        words: [
            // pronouns / helpers
            "I", "you", "we", "they", "he", "she",
            "want", "need", "feel", "am", "is", "are",
            "to", "go", "play", "eat", "drink", "see", "find", "help",
            "please", "now", "later", "more", "less", "stop",
            // people
            "mom", "dad", "brother", "sister",
            "teacher", "friend", "doctor", "nurse",
            "grandma", "grandpa", "baby", "family",
            // feelings
            "happy", "sad", "mad", "tired", "scared",
            "hurt", "excited", "nervous", "worried", "calm",
            // food & drinks
            "water", "juice", "milk", "ice cream", "pizza", "sandwich",
            "rice", "pasta", "noodles", "apple", "banana", "cookie",
            "bread", "chips", "soup", "cereal", "egg",
            // places
            "home", "school", "outside", "inside", "bathroom",
            "kitchen", "park", "car", "bed", "table",
            // body
            "head", "arm", "leg", "hand", "foot",
            "stomach", "back", "eye", "ear", "mouth",
            // sensations
            "pain", "itchy", "hot", "cold",
            "bleeding", "cut", "bruise", "sick", "dizzy",
            "cramp", "sprain",
            // actions
            "sit", "stand", "walk", "run",
            "jump", "sleep", "rest",
            "open", "close", "look", "touch",
            "listen", "wait", "wash", "clean",
            // extras
            "yes", "no", "maybe",
            "this", "that", "there", "here",
            "mine", "yours",
            // describing
            "big", "small", "loud", "quiet",
            "fast", "slow", "good", "bad",
            "cold", "hot", "warm",
        ],
        items: [
            Need "water" => "I want water",
            Need "food" => "I want food",
            Need "bed" => "I want to sleep",
            Need "toilet" => "I want to go to the bathroom",
            Need "help" => "I need help",
            Need "medicine" => "I need medicine",
            Need "break" => "I need a break",
            Need "quiet" => "I need quiet",
            Need "hug" => "I need a hug",
            Need "space" => "I need space",
            Want "walk" => "I want to go for a walk",
            Want "play" => "I want to play",
            Want "mom" => "I want mom",
            Want "dad" => "I want dad",
            Want "brother" => "I want my brother",
            Want "sister" => "I want my sister",
            Want "friend" => "I want to see my friend",
            Want "outside" => "I want to go outside",
            Want "watch" => "I want to watch something",
            Want "music" => "I want to listen to music",
            Feeling "mad" => "I feel mad",
            Feeling "sad" => "I feel sad",
            Feeling "happy" => "I feel happy",
            Feeling "anxious" => "I feel anxious",
            Feeling "scared" => "I feel scared",
            Feeling "jealous" => "I feel jealous",
            Feeling "tired" => "I feel tired",
            Feeling "excited" => "I feel excited",
            Feeling "confused" => "I feel confused",
            Feeling "sick" => "I feel sick",
        ],

    HIN, "hi", "हिन्दी",
        voices: ["hi-IN"],
        labels: ["ज़रूरतें", "इच्छाएँ", "भावनाएँ"],
        strings: HI_STRINGS,
        words: [
            "मैं", "आप", "हम", "वे", "वह",
            "चाहता हूँ", "ज़रूरत", "महसूस", "हूँ", "है", "हैं",
            "जाना", "खेलना", "खाना", "पीना", "देखना", "ढूँढना", "मदद",
            "कृपया", "अभी", "बाद में", "और", "कम", "रुको",
            "माँ", "पापा", "भाई", "बहन",
            "शिक्षक", "दोस्त", "डॉक्टर", "नर्स",
            "दादी", "दादा", "बच्चा", "परिवार",
            "खुश", "उदास", "गुस्सा", "थका", "डर",
            "दर्द", "उत्साहित", "घबराया", "चिंतित", "शांत",
            "पानी", "रस", "दूध", "आइसक्रीम", "पिज़्ज़ा", "सैंडविच",
            "चावल", "पास्ता", "नूडल्स", "सेब", "केला", "बिस्कुट",
            "रोटी", "चिप्स", "सूप", "अंडा",
            "घर", "स्कूल", "बाहर", "अंदर", "बाथरूम",
            "रसोई", "पार्क", "गाड़ी", "बिस्तर", "मेज़",
            "सिर", "हाथ", "पैर", "पेट", "पीठ", "आँख", "कान", "मुँह",
            "खुजली", "गरम", "ठंडा", "खून", "चोट", "बीमार", "चक्कर",
            "बैठना", "खड़ा होना", "चलना", "दौड़ना",
            "कूदना", "सोना", "आराम",
            "खोलना", "बंद करना", "सुनना", "इंतज़ार", "धोना", "साफ़ करना",
            "हाँ", "नहीं", "शायद",
            "यह", "वह", "यहाँ", "वहाँ",
            "मेरा", "तुम्हारा",
            "बड़ा", "छोटा", "तेज़", "धीमा", "अच्छा", "बुरा", "गुनगुना",
        ],
        items: [
            Need "water" => "मुझे पानी चाहिए",
            Need "food" => "मुझे खाना चाहिए",
            Need "bed" => "मुझे सोना है",
            Need "toilet" => "मुझे बाथरूम जाना है",
            Need "help" => "मुझे मदद चाहिए",
            Need "medicine" => "मुझे दवा चाहिए",
            Need "break" => "मुझे आराम चाहिए",
            Need "quiet" => "मुझे शांति चाहिए",
            Need "hug" => "मुझे गले लगाने की ज़रूरत है",
            Need "space" => "मुझे जगह चाहिए",
            Want "walk" => "मुझे टहलने जाना है",
            Want "play" => "मुझे खेलना है",
            Want "mom" => "मुझे माँ चाहिए",
            Want "dad" => "मुझे पापा चाहिए",
            Want "brother" => "मुझे भाई चाहिए",
            Want "sister" => "मुझे बहन चाहिए",
            Want "friend" => "मुझे अपने दोस्त से मिलना है",
            Want "outside" => "मुझे बाहर जाना है",
            Want "watch" => "मुझे कुछ देखना है",
            Want "music" => "मुझे संगीत सुनना है",
            Feeling "mad" => "मैं गुस्सा महसूस करता/करती हूँ",
            Feeling "sad" => "मैं उदास महसूस करता/करती हूँ",
            Feeling "happy" => "मैं खुश महसूस करता/करती हूँ",
            Feeling "anxious" => "मैं चिंतित महसूस करता/करती हूँ",
            Feeling "scared" => "मैं डरा/डरी महसूस करता/करती हूँ",
            Feeling "jealous" => "मैं जलन महसूस करता/करती हूँ",
            Feeling "tired" => "मैं थका/थकी हुआ/हुई महसूस करता/करती हूँ",
            Feeling "excited" => "मैं उत्साहित महसूस करता/करती हूँ",
            Feeling "confused" => "मैं भ्रमित महसूस करता/करती हूँ",
            Feeling "sick" => "मैं बीमार महसूस करता/करती हूँ",
        ],

    SPA, "es", "Español",
        voices: ["es-ES", "es-MX", "es-US", "es"],
        labels: ["Necesidades", "Deseos", "Sentimientos"],
        strings: ES_STRINGS,
        words: [
            "yo", "tú", "nosotros", "ellos", "él", "ella",
            "quiero", "necesito", "siento", "soy", "es", "son",
            "a", "ir", "jugar", "comer", "beber", "ver", "encontrar", "ayudar",
            "por favor", "ahora", "después", "más", "menos", "parar",
            "mamá", "papá", "hermano", "hermana",
            "maestro", "amigo", "doctor", "enfermera",
            "abuela", "abuelo", "bebé", "familia",
            "feliz", "triste", "enojado", "cansado", "asustado",
            "herido", "emocionado", "nervioso", "preocupado", "tranquilo",
            "agua", "jugo", "leche", "helado", "pizza", "sándwich",
            "arroz", "pasta", "fideos", "manzana", "plátano", "galleta",
            "pan", "papas fritas", "sopa", "cereal", "huevo",
            "casa", "escuela", "afuera", "adentro", "baño",
            "cocina", "parque", "carro", "cama", "mesa",
            "cabeza", "brazo", "pierna", "mano", "pie",
            "estómago", "espalda", "ojo", "oreja", "boca",
            "dolor", "picazón", "caliente", "frío",
            "sangrado", "corte", "moretón", "enfermo", "mareado",
            "calambre", "torcedura",
            "sentar", "parar", "caminar", "correr",
            "saltar", "dormir", "descansar",
            "abrir", "cerrar", "mirar", "tocar",
            "escuchar", "esperar", "lavar", "limpiar",
            "sí", "no", "tal vez",
            "esto", "eso", "allí", "aquí",
            "mío", "tuyo",
            "grande", "pequeño", "fuerte", "suave",
            "rápido", "lento", "bueno", "malo",
            "frío", "caliente", "tibio",
        ],
        items: [
            Need "water" => "Quiero agua",
            Need "food" => "Quiero comida",
            Need "bed" => "Quiero dormir",
            Need "toilet" => "Quiero ir al baño",
            Need "help" => "Necesito ayuda",
            Need "medicine" => "Necesito medicina",
            Need "break" => "Necesito un descanso",
            Need "quiet" => "Necesito silencio",
            Need "hug" => "Necesito un abrazo",
            Need "space" => "Necesito espacio",
            Want "walk" => "Quiero caminar",
            Want "play" => "Quiero jugar",
            Want "mom" => "Quiero a mamá",
            Want "dad" => "Quiero a papá",
            Want "brother" => "Quiero a mi hermano",
            Want "sister" => "Quiero a mi hermana",
            Want "friend" => "Quiero ver a mi amigo/a",
            Want "outside" => "Quiero salir afuera",
            Want "watch" => "Quiero ver algo",
            Want "music" => "Quiero escuchar música",
            Feeling "mad" => "Me siento enojado/a",
            Feeling "sad" => "Me siento triste",
            Feeling "happy" => "Me siento feliz",
            Feeling "anxious" => "Me siento ansioso/a",
            Feeling "scared" => "Me siento asustado/a",
            Feeling "jealous" => "Me siento celoso/a",
            Feeling "tired" => "Me siento cansado/a",
            Feeling "excited" => "Me siento emocionado/a",
            Feeling "confused" => "Me siento confundido/a",
            Feeling "sick" => "Me siento enfermo/a",
        ],

    ZHO, "zh", "中文",
        voices: ["zh-CN", "zh-Hans", "zh-Hans-CN", "zh"],
        labels: ["需求", "想要", "感受"],
        strings: ZH_STRINGS,
        words: [
            "我", "你", "我们", "他们", "他", "她",
            "想要", "需要", "感到", "是", "在", "有",
            "去", "玩", "吃", "喝", "看", "找", "帮助",
            "请", "现在", "以后", "更多", "更少", "停",
            "妈妈", "爸爸", "哥哥", "姐姐", "弟弟", "妹妹",
            "老师", "朋友", "医生", "护士",
            "奶奶", "爷爷", "宝宝", "家人",
            "开心", "难过", "生气", "累", "害怕",
            "疼", "兴奋", "紧张", "担心", "平静",
            "水", "果汁", "牛奶", "冰淇淋", "披萨", "三明治",
            "米饭", "意大利面", "面条", "苹果", "香蕉", "饼干",
            "面包", "薯片", "汤", "麦片", "鸡蛋",
            "家", "学校", "外面", "里面", "厕所",
            "厨房", "公园", "车", "床", "桌子",
            "头", "胳膊", "腿", "手", "脚",
            "肚子", "背", "眼睛", "耳朵", "嘴",
            "疼痛", "痒", "热", "冷",
            "流血", "伤口", "淤青", "生病", "头晕",
            "抽筋", "扭伤",
            "坐", "站", "走", "跑",
            "跳", "睡", "休息",
            "打开", "关", "看", "摸",
            "听", "等", "洗", "打扫",
            "是", "不是", "也许",
            "这个", "那个", "那里", "这里",
            "我的", "你的",
            "大", "小", "响", "安静",
            "快", "慢", "好", "坏",
            "冷", "热", "温暖",
        ],
        items: [
            Need "water" => "我需要喝水",
            Need "food" => "我需要吃东西",
            Need "bed" => "我需要睡觉",
            Need "toilet" => "我需要上厕所",
            Need "help" => "我需要帮助",
            Need "medicine" => "我需要药",
            Need "break" => "我需要休息",
            Need "quiet" => "我需要安静",
            Need "hug" => "我需要拥抱",
            Need "space" => "我需要空间",
            Want "walk" => "我想去散步",
            Want "play" => "我想玩",
            Want "mom" => "我想要妈妈",
            Want "dad" => "我想要爸爸",
            Want "brother" => "我想要哥哥/弟弟",
            Want "sister" => "我想要姐姐/妹妹",
            Want "friend" => "我想见朋友",
            Want "outside" => "我想出去",
            Want "watch" => "我想看东西",
            Want "music" => "我想听音乐",
            Feeling "mad" => "我感到生气",
            Feeling "sad" => "我感到难过",
            Feeling "happy" => "我感到开心",
            Feeling "anxious" => "我感到焦虑",
            Feeling "scared" => "我感到害怕",
            Feeling "jealous" => "我感到嫉妒",
            Feeling "tired" => "我感到疲倦",
            Feeling "excited" => "我感到兴奋",
            Feeling "confused" => "我感到困惑",
            Feeling "sick" => "我感到不舒服",
        ],

    FRA, "fr", "Français",
        voices: ["fr-FR", "fr-CA", "fr-CH", "fr"],
        labels: ["Besoins", "Envies", "Émotions"],
        strings: FR_STRINGS,
        words: [
            "je", "tu", "nous", "ils", "elles", "il", "elle",
            "veux", "ai besoin", "ressens", "suis", "est", "sont",
            "à", "aller", "jouer", "manger", "boire", "voir", "trouver", "aider",
            "s'il vous plaît", "maintenant", "plus tard", "plus", "moins", "arrêter",
            "maman", "papa", "frère", "sœur",
            "professeur", "ami", "amie", "docteur", "infirmière",
            "grand-mère", "grand-père", "bébé", "famille",
            "heureux", "heureuse", "triste", "en colère", "fatigué", "fatiguée",
            "effrayé", "effrayée", "blessé", "blessée", "excité", "excitée",
            "nerveux", "nerveuse", "inquiet", "inquiète", "calme",
            "eau", "jus", "lait", "glace", "pizza", "sandwich",
            "riz", "pâtes", "nouilles", "pomme", "banane", "biscuit",
            "pain", "chips", "soupe", "céréales", "œuf",
            "maison", "école", "dehors", "dedans", "toilettes",
            "cuisine", "parc", "voiture", "lit", "table",
            "tête", "bras", "jambe", "main", "pied",
            "estomac", "dos", "œil", "oreille", "bouche",
            "douleur", "démangeaison", "chaud", "froid",
            "saignement", "coupure", "bleu", "malade", "étourdi", "étourdie",
            "crampe", "entorse",
            "asseoir", "se lever", "marcher", "courir",
            "sauter", "dormir", "se reposer",
            "ouvrir", "fermer", "regarder", "toucher",
            "écouter", "attendre", "laver", "nettoyer",
            "oui", "non", "peut-être",
            "ceci", "cela", "là-bas", "ici",
            "le mien", "la mienne", "le tien", "la tienne",
            "grand", "grande", "petit", "petite", "fort", "forte", "doux", "douce",
            "rapide", "lent", "lente", "bon", "bonne", "mauvais", "mauvaise",
            "froid", "froide", "chaud", "chaude", "tiède",
        ],
        items: [
            Need "water" => "J'ai besoin d'eau",
            Need "food" => "J'ai besoin de manger",
            Need "bed" => "J'ai besoin de dormir",
            Need "toilet" => "J'ai besoin d'aller aux toilettes",
            Need "help" => "J'ai besoin d'aide",
            Need "medicine" => "J'ai besoin de médicaments",
            Need "break" => "J'ai besoin d'une pause",
            Need "quiet" => "J'ai besoin de calme",
            Need "hug" => "J'ai besoin d'un câlin",
            Need "space" => "J'ai besoin d'espace",
            Want "walk" => "Je veux me promener",
            Want "play" => "Je veux jouer",
            Want "mom" => "Je veux maman",
            Want "dad" => "Je veux papa",
            Want "brother" => "Je veux mon frère",
            Want "sister" => "Je veux ma sœur",
            Want "friend" => "Je veux voir mon ami/amie",
            Want "outside" => "Je veux sortir dehors",
            Want "watch" => "Je veux regarder quelque chose",
            Want "music" => "Je veux écouter de la musique",
            Feeling "mad" => "Je me sens en colère",
            Feeling "sad" => "Je me sens triste",
            Feeling "happy" => "Je me sens heureux/heureuse",
            Feeling "anxious" => "Je me sens anxieux/anxieuse",
            Feeling "scared" => "Je me sens effrayé/effrayée",
            Feeling "jealous" => "Je me sens jaloux/jalouse",
            Feeling "tired" => "Je me sens fatigué/fatiguée",
            Feeling "excited" => "Je me sens excité/excitée",
            Feeling "confused" => "Je me sens confus/confuse",
            Feeling "sick" => "Je me sens malade",
        ],

    POR, "pt", "Português",
        voices: ["pt-PT", "pt-BR", "pt"],
        labels: ["Necessidades", "Desejos", "Sentimentos"],
        strings: PT_STRINGS,
        words: [
            "eu", "você", "nós", "eles", "ele", "ela",
            "quero", "preciso", "sinto", "sou", "é", "são",
            "a", "ir", "brincar", "comer", "beber", "ver", "achar", "ajudar", "ajuda",
            "por favor", "agora", "depois", "mais", "menos", "parar",
            "mamãe", "papai", "irmão", "irmã",
            "professor", "amigo", "amiga", "médico", "enfermeira",
            "avó", "avô", "bebê", "família",
            "feliz", "triste", "zangado", "cansado", "assustado",
            "machucado", "animado", "nervoso", "preocupado", "calmo",
            "água", "comida", "suco", "leite", "sorvete", "pizza", "sanduíche",
            "arroz", "massa", "macarrão", "maçã", "banana", "biscoito",
            "pão", "batata frita", "sopa", "cereal", "ovo",
            "casa", "escola", "fora", "dentro", "banheiro",
            "cozinha", "parque", "carro", "cama", "mesa",
            "cabeça", "braço", "perna", "mão", "pé",
            "estômago", "costas", "olho", "orelha", "boca",
            "dor", "coceira", "quente", "frio",
            "sangramento", "corte", "roxo", "doente", "tonto",
            "cãibra", "torção",
            "sentar", "levantar", "andar", "correr",
            "pular", "dormir", "descansar",
            "abrir", "fechar", "olhar", "tocar",
            "ouvir", "esperar", "lavar", "limpar",
            "sim", "não", "talvez",
            "isso", "aquilo", "lá", "aqui",
            "meu", "seu",
            "grande", "pequeno", "forte", "suave",
            "rápido", "lento", "bom", "mau",
            "frio", "quente", "morno",
        ],
        items: [
            Need "water" => "Preciso de água",
            Need "food" => "Preciso de comida",
            Need "bed" => "Preciso dormir",
            Need "toilet" => "Preciso ir ao banheiro",
            Need "help" => "Preciso de ajuda",
            Need "medicine" => "Preciso de remédio",
            Need "break" => "Preciso de uma pausa",
            Need "quiet" => "Preciso de silêncio",
            Need "hug" => "Preciso de um abraço",
            Need "space" => "Preciso de espaço",
            Want "walk" => "Quero passear",
            Want "play" => "Quero brincar",
            Want "mom" => "Quero a mamãe",
            Want "dad" => "Quero o papai",
            Want "brother" => "Quero meu irmão",
            Want "sister" => "Quero minha irmã",
            Want "friend" => "Quero ver meu/minha amigo/a",
            Want "outside" => "Quero ir lá fora",
            Want "watch" => "Quero assistir a algo",
            Want "music" => "Quero ouvir música",
            Feeling "mad" => "Eu me sinto com raiva",
            Feeling "sad" => "Eu me sinto triste",
            Feeling "happy" => "Eu me sinto feliz",
            Feeling "anxious" => "Eu me sinto ansioso/ansiosa",
            Feeling "scared" => "Eu me sinto com medo",
            Feeling "jealous" => "Eu me sinto com ciúmes",
            Feeling "tired" => "Eu me sinto cansado/cansada",
            Feeling "excited" => "Eu me sinto animado/animada",
            Feeling "confused" => "Eu me sinto confuso/confusa",
            Feeling "sick" => "Eu me sinto doente",
        ],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::all_langs;

    #[test]
    fn every_language_has_thirty_items() {
        for lang in all_langs() {
            assert_eq!(lang.entry().items.len(), 30, "{}", lang.code());
        }
    }

    #[test]
    fn pictogram_order_matches_english() {
        let reference: Vec<_> = ENG.entry().items.iter().map(|i| i.pictogram).collect();
        for lang in all_langs() {
            let got: Vec<_> = lang.entry().items.iter().map(|i| i.pictogram).collect();
            assert_eq!(got, reference, "{}", lang.code());
        }
    }

    #[test]
    fn table_maps_codes_to_langs() {
        assert_eq!(LANG_TABLE.get("fr"), Some(&FRA));
        assert_eq!(LANG_TABLE.len(), ALL_LANGS.len());
    }

    #[test]
    fn word_banks_are_substantial() {
        for lang in all_langs() {
            assert!(lang.entry().word_bank.len() > 50, "{}", lang.code());
            assert!(lang.entry().word_bank.iter().all(|w| !w.trim().is_empty()));
        }
    }

    #[test]
    fn every_voice_matches_its_language() {
        for lang in all_langs() {
            for voice in lang.preferred_voices() {
                assert!(voice.starts_with(lang.code()), "{voice}");
            }
        }
    }
}
