mod prop_tests {
    use crate::lang::strings::EN_STRINGS;
    use crate::{
        Action, Board, Category, Localizer, POR, RecordingEngine, Screen, all_langs, emoji,
        short_code,
    };
    use proptest::prelude::*;
    use proptest::sample::select;

    fn english_keys() -> Vec<&'static str> {
        let mut keys: Vec<_> = EN_STRINGS.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    fn any_lang_code() -> impl Strategy<Value = &'static str> {
        select(all_langs().iter().map(|l| l.code()).collect::<Vec<_>>())
    }

    proptest! {
        #[test]
        fn recognized_keys_never_resolve_empty(
            key in select(english_keys()),
            code in any_lang_code(),
        ) {
            let l = Localizer::default();
            prop_assert!(!l.resolve(key, Some(code)).is_empty());
        }

        #[test]
        fn resolve_is_idempotent(key in "[a-z_]{1,40}", code in "[a-zA-Z-]{0,8}") {
            let l = Localizer::default();
            let once = l.resolve(&key, Some(code.as_str())).into_owned();
            let twice = l.resolve(&key, Some(code.as_str())).into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn unknown_keys_still_say_something(key in "[a-z]{1,10}_zz[a-z_]{0,20}") {
            let l = Localizer::default();
            prop_assert!(!l.resolve(&key, Some("pt")).trim().is_empty());
        }

        #[test]
        fn short_code_idempotent(s in "\\PC{0,16}") {
            let once = short_code(&s);
            prop_assert_eq!(short_code(once), once);
            prop_assert!(!once.contains('-'));
        }

        #[test]
        fn emoji_ignores_case_and_padding(
            word in select(vec!["water", "help", "happy", "school", "thank you"]),
            upper in any::<bool>(),
            pad in "[ \t\n]{0,3}",
        ) {
            let base = emoji(word, "en");
            let word = if upper { word.to_uppercase() } else { word.to_owned() };
            let noisy = format!("{pad}{word}{pad}");
            prop_assert!(base.is_some());
            prop_assert_eq!(emoji(&noisy, "en"), base);
        }

        #[test]
        fn leaving_the_builder_clears_everything(
            words in prop::collection::vec("[a-zà-ú]{1,8}", 0..6),
            typed in "\\PC{0,30}",
            via_back in any::<bool>(),
        ) {
            let mut board = Board::builder()
                .engine(RecordingEngine::new(["pt-BR"]))
                .build()
                .unwrap();
            board.apply(Action::SelectLanguage(POR)).unwrap();
            board.apply(Action::Start).unwrap();
            board.apply(Action::OpenSentenceBuilder).unwrap();
            for w in &words {
                board.add_word(w).unwrap();
            }
            board.set_typed(typed).unwrap();

            if via_back {
                board.apply(Action::Back).unwrap();
            } else {
                board.apply(Action::OpenInfo).unwrap();
                board.apply(Action::Start).unwrap();
            }
            prop_assert_eq!(board.screen(), Screen::MainMenu);
            prop_assert!(board.composition().is_empty());

            board.apply(Action::OpenSentenceBuilder).unwrap();
            prop_assert!(board.composition().is_empty());
        }

        #[test]
        fn categories_stay_balanced(code in any_lang_code()) {
            let catalog = crate::ContentCatalog::load();
            let lang = crate::Lang::from_code_or_default(code);
            let counts = Category::ALL.map(|c| catalog.items_in(lang, c).count());
            prop_assert!(counts.iter().all(|&n| n == counts[0]));
        }
    }
}
