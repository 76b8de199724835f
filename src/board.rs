use crate::composition::Composition;
use crate::content::{CommunicationItem, ContentCatalog};
use crate::emoji::{Annotated, annotate};
use crate::lang::{DEFAULT_LANG, Lang};
use crate::localizer::{BundleSource, Localizer, Prompt, StaticBundles};
use crate::nav::{
    Action, DemoPhrase, Effect, Effects, NavError, Navigator, Screen, TutorialStep, Utterance,
};
use crate::settings::{MemoryStore, Settings, SettingsStore, StoreError};
use crate::speech::{DEFAULT_RATE, SpeechDispatcher, SpeechEngine, SpeechError};
use std::borrow::Cow;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Nav(#[from] NavError),
    #[error(transparent)]
    Speech(#[from] SpeechError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("not available on the {0}")]
    Unavailable(Screen),
    #[error("no speech engine configured")]
    MissingEngine,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardConfig {
    /// Language used for rendering before one is selected.
    pub default_lang: Lang,
    pub speech_rate: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_lang: DEFAULT_LANG,
            speech_rate: DEFAULT_RATE,
        }
    }
}

/// The communication board: navigation, content, speech and persisted
/// settings behind one handle.
pub struct Board {
    config: BoardConfig,
    catalog: Arc<ContentCatalog>,
    localizer: Localizer,
    nav: Navigator,
    composition: Composition,
    speech: SpeechDispatcher<Box<dyn SpeechEngine>>,
    store: Box<dyn SettingsStore>,
    settings: Settings,
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("config", &self.config)
            .field("nav", &self.nav)
            .field("composition", &self.composition)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Board {
    pub fn builder() -> BoardBuilder {
        BoardBuilder::default()
    }

    /// Run `action` through the navigator and carry out its effects.
    ///
    /// Speech for navigation is best effort and only logged on failure. Every
    /// effect runs even when a save fails; the first save error is returned
    /// afterwards, with the screen change already committed.
    pub fn apply(&mut self, action: Action) -> Result<Effects, BoardError> {
        let effects = self.nav.apply(action)?;
        let mut save_error = None;
        for effect in &effects {
            match *effect {
                Effect::Speak(u) => {
                    let text = self.render(u);
                    if let Err(e) = self.say(&text) {
                        warn!(error = %e, ?u, "navigation speech failed");
                    }
                }
                Effect::PersistLanguage(lang) => {
                    self.settings.set_language(lang);
                    self.persist(&mut save_error);
                }
                Effect::ClearComposition => self.composition.clear(),
                Effect::MarkTutorialCompleted => {
                    self.settings.has_completed_tutorial = true;
                    self.persist(&mut save_error);
                }
            }
        }
        match save_error {
            Some(e) => Err(e.into()),
            None => Ok(effects),
        }
    }

    fn persist(&self, first_error: &mut Option<StoreError>) {
        if let Err(e) = self.store.save(&self.settings) {
            warn!(error = %e, "saving settings failed");
            if first_error.is_none() {
                *first_error = Some(e);
            }
        }
    }

    /// Text for an utterance in the active language.
    pub fn render(&self, utterance: Utterance) -> String {
        let lang = self.current_language();
        match utterance {
            Utterance::Prompt(p) => self.localizer.prompt(p, lang).into_owned(),
            Utterance::Confirmation(l) => self
                .localizer
                .resolve(l.confirmation_key(), Some(l.code()))
                .into_owned(),
            Utterance::CategoryLabel(c) => self.catalog.category_label(lang, c).to_owned(),
            Utterance::Tutorial(step) => {
                let code = Some(lang.code());
                format!(
                    "{}. {}",
                    self.localizer.resolve(step.title_key(), code),
                    self.localizer.resolve(step.description_key(), code)
                )
            }
        }
    }

    #[inline]
    pub fn current_language(&self) -> Lang {
        self.nav.lang().unwrap_or(self.config.default_lang)
    }

    #[inline]
    pub fn screen(&self) -> Screen {
        self.nav.screen()
    }

    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    #[inline]
    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    #[inline]
    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    /// UI label for `key` in the active language.
    pub fn label(&self, key: &str) -> Cow<'_, str> {
        self.localizer.resolve(key, Some(self.current_language().code()))
    }

    /// `"Step 3 of 7"` while in the tutorial.
    pub fn tutorial_progress(&self) -> Option<String> {
        let Screen::Tutorial(step) = self.screen() else {
            return None;
        };
        let current = (step.index() + 1).to_string();
        let total = TutorialStep::ALL.len().to_string();
        Some(self.localizer.format(
            "tutorial_step_indicator",
            Some(self.current_language().code()),
            &[current.as_str(), total.as_str()],
        ))
    }

    /// Items on the current category screen, empty elsewhere.
    pub fn visible_items(&self) -> Vec<&CommunicationItem> {
        match self.screen() {
            Screen::Category(c) => self.catalog.items_in(self.current_language(), c).collect(),
            _ => Vec::new(),
        }
    }

    /// The active language's word bank with pictograms.
    pub fn word_bank(&self) -> Vec<Annotated<'static>> {
        let lang = self.current_language();
        self.catalog
            .word_bank(lang)
            .iter()
            .map(|&w| annotate(w, lang.code()))
            .collect()
    }

    pub fn speak_item(&self, item: &CommunicationItem) -> Result<String, BoardError> {
        self.say(item.text)?;
        Ok(item.text.to_owned())
    }

    /// Speak one of the needs-demo phrases. Only on that tutorial step.
    pub fn speak_demo(&self, phrase: DemoPhrase) -> Result<String, BoardError> {
        match self.screen() {
            Screen::Tutorial(TutorialStep::NeedsDemo) => {
                let text = self.label(phrase.key()).into_owned();
                self.say(&text)?;
                Ok(text)
            }
            other => Err(BoardError::Unavailable(other)),
        }
    }

    pub fn add_word(&mut self, word: &str) -> Result<(), BoardError> {
        self.words_prompt()?;
        self.composition.add_word(word);
        Ok(())
    }

    /// Speak the tapped words, or ask for some when there are none.
    pub fn speak_composed(&self) -> Result<String, BoardError> {
        let empty = self.words_prompt()?;
        let text = if self.composition.words().is_empty() {
            self.localizer
                .prompt(empty, self.current_language())
                .into_owned()
        } else {
            self.composition.sentence()
        };
        self.say(&text)?;
        Ok(text)
    }

    pub fn set_typed(&mut self, text: impl Into<String>) -> Result<(), BoardError> {
        self.typing_prompt()?;
        self.composition.set_typed(text);
        Ok(())
    }

    /// Speak the typed buffer, or ask for a sentence when it is blank.
    pub fn speak_typed(&self) -> Result<String, BoardError> {
        let empty = self.typing_prompt()?;
        let typed = self.composition.typed_trimmed();
        let text = if typed.is_empty() {
            self.localizer
                .prompt(empty, self.current_language())
                .into_owned()
        } else {
            typed.to_owned()
        };
        self.say(&text)?;
        Ok(text)
    }

    pub fn clear_words(&mut self) -> Result<(), BoardError> {
        self.words_prompt()?;
        self.composition.clear_words();
        Ok(())
    }

    pub fn clear_typed(&mut self) -> Result<(), BoardError> {
        self.typing_prompt()?;
        self.composition.clear_typed();
        Ok(())
    }

    /// Word operations run in the sentence builder and on the word-bank
    /// tutorial step. Returns what to say when no words are tapped.
    fn words_prompt(&self) -> Result<Prompt, BoardError> {
        match self.screen() {
            Screen::SentenceBuilder => Ok(Prompt::ChooseWords),
            Screen::Tutorial(TutorialStep::WordBank) => Ok(Prompt::EmptySentence),
            other => Err(BoardError::Unavailable(other)),
        }
    }

    fn typing_prompt(&self) -> Result<Prompt, BoardError> {
        match self.screen() {
            Screen::SentenceBuilder => Ok(Prompt::TypeSentence),
            Screen::Tutorial(TutorialStep::Typing) => Ok(Prompt::TypeSomethingFirst),
            other => Err(BoardError::Unavailable(other)),
        }
    }

    fn say(&self, text: &str) -> Result<String, SpeechError> {
        let lang = self.current_language();
        debug!(lang = lang.code(), text, "speaking");
        self.speech.speak(text, lang)
    }
}

pub struct BoardBuilder {
    config: BoardConfig,
    catalog: Option<Arc<ContentCatalog>>,
    bundles: Option<Arc<dyn BundleSource>>,
    store: Option<Box<dyn SettingsStore>>,
    engine: Option<Box<dyn SpeechEngine>>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self {
            config: BoardConfig::default(),
            catalog: None,
            bundles: None,
            store: None,
            engine: None,
        }
    }
}

impl BoardBuilder {
    pub fn config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    pub fn default_lang(mut self, lang: Lang) -> Self {
        self.config.default_lang = lang;
        self
    }

    pub fn speech_rate(mut self, rate: f32) -> Self {
        self.config.speech_rate = rate;
        self
    }

    /// Share one catalog between boards.
    pub fn catalog(mut self, catalog: Arc<ContentCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn bundles<B: BundleSource + 'static>(mut self, bundles: B) -> Self {
        self.bundles = Some(Arc::new(bundles));
        self
    }

    pub fn store<S: SettingsStore + 'static>(mut self, store: S) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn engine<E: SpeechEngine + 'static>(mut self, engine: E) -> Self {
        self.engine = Some(Box::new(engine));
        self
    }

    /// Load persisted settings and pick the starting screen.
    ///
    /// Without explicit bundles the compiled catalogs are used, with the
    /// default language as base and the engine's system language as system
    /// bundle. Without a store, settings live in memory.
    pub fn build(self) -> Result<Board, BoardError> {
        let engine = self.engine.ok_or(BoardError::MissingEngine)?;
        let store: Box<dyn SettingsStore> = match self.store {
            Some(store) => store,
            None => Box::new(MemoryStore::default()),
        };
        let settings = store.load()?;

        let localizer = match self.bundles {
            Some(bundles) => Localizer::from_arc(bundles),
            None => {
                let mut bundles = StaticBundles::new().with_base(self.config.default_lang);
                if let Some(system) = engine.system_language() {
                    bundles = bundles.with_system_language(&system);
                }
                Localizer::new(bundles)
            }
        };

        let nav = Navigator::new(settings.language(), settings.has_completed_tutorial);
        Ok(Board {
            config: self.config,
            catalog: self.catalog.unwrap_or_default(),
            localizer,
            nav,
            composition: Composition::new(),
            speech: SpeechDispatcher::new(engine, self.config.speech_rate),
            store,
            settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;
    use crate::lang::{ENG, POR, SPA};
    use crate::speech::RecordingEngine;

    fn board_at_menu(lang: Lang) -> (Board, RecordingEngine) {
        let engine = RecordingEngine::new(["en-US", "es-ES", "pt-BR"]);
        let store = MemoryStore::new(Settings {
            selected_language_code: lang.code().into(),
            has_completed_tutorial: true,
        });
        let board = Board::builder()
            .engine(engine.clone())
            .store(store)
            .build()
            .unwrap();
        assert_eq!(board.screen(), Screen::MainMenu);
        (board, engine)
    }

    #[test]
    fn build_requires_an_engine() {
        assert!(matches!(
            Board::builder().build(),
            Err(BoardError::MissingEngine)
        ));
    }

    #[test]
    fn fresh_board_starts_at_picker_in_default_language() {
        let board = Board::builder()
            .engine(RecordingEngine::new(["en-US"]))
            .default_lang(SPA)
            .build()
            .unwrap();
        assert_eq!(board.screen(), Screen::LanguagePicker);
        assert_eq!(board.current_language(), SPA);
        assert_eq!(board.label("back"), "Atrás");
    }

    #[test]
    fn category_label_is_spoken_in_language() {
        let (mut board, engine) = board_at_menu(POR);
        board.apply(Action::SelectCategory(Category::Need)).unwrap();
        assert_eq!(engine.last_spoken().as_deref(), Some("Necessidades"));
        assert_eq!(board.visible_items().len(), 10);
    }

    #[test]
    fn word_ops_need_the_builder() {
        let (mut board, _) = board_at_menu(ENG);
        assert!(matches!(
            board.add_word("I"),
            Err(BoardError::Unavailable(Screen::MainMenu))
        ));
        assert!(board.speak_typed().is_err());
    }

    #[test]
    fn empty_composition_speaks_a_prompt() {
        let (mut board, engine) = board_at_menu(ENG);
        board.apply(Action::OpenSentenceBuilder).unwrap();
        assert_eq!(board.speak_composed().unwrap(), "Please choose words");
        board.set_typed("   ").unwrap();
        assert_eq!(board.speak_typed().unwrap(), "Please type a sentence");
        assert_eq!(engine.last_spoken().as_deref(), Some("Please type a sentence"));
    }

    #[test]
    fn tutorial_demos_use_their_own_prompts() {
        let (mut board, engine) = board_at_menu(ENG);
        board.apply(Action::OpenTutorial).unwrap();
        assert!(matches!(
            board.speak_demo(DemoPhrase::Water),
            Err(BoardError::Unavailable(Screen::Tutorial(TutorialStep::Welcome)))
        ));
        board.apply(Action::TutorialNext).unwrap();
        board.apply(Action::TutorialNext).unwrap();
        assert_eq!(board.screen(), Screen::Tutorial(TutorialStep::NeedsDemo));
        assert_eq!(board.speak_demo(DemoPhrase::Water).unwrap(), "I want water");
        assert_eq!(board.speak_demo(DemoPhrase::Help).unwrap(), "I need help");
        assert_eq!(engine.last_spoken().as_deref(), Some("I need help"));
        assert!(matches!(
            board.add_word("I"),
            Err(BoardError::Unavailable(Screen::Tutorial(TutorialStep::NeedsDemo)))
        ));

        board.apply(Action::TutorialNext).unwrap();
        board.apply(Action::TutorialNext).unwrap();
        assert_eq!(board.screen(), Screen::Tutorial(TutorialStep::WordBank));
        assert_eq!(board.speak_composed().unwrap(), "Your sentence is empty");
        board.add_word("I").unwrap();
        board.add_word("want").unwrap();
        assert_eq!(board.speak_composed().unwrap(), "I want");
        assert!(board.set_typed("hello").is_err());

        board.apply(Action::TutorialNext).unwrap();
        assert!(board.composition().is_empty());
        assert_eq!(board.speak_typed().unwrap(), "Please type something first");
        board.set_typed("hello").unwrap();
        assert_eq!(board.speak_typed().unwrap(), "hello");
        assert!(board.add_word("I").is_err());

        board.apply(Action::TutorialPrevious).unwrap();
        assert!(board.composition().is_empty());
        board.add_word("water").unwrap();
        board.apply(Action::Back).unwrap();
        assert_eq!(board.screen(), Screen::MainMenu);
        assert!(board.composition().is_empty());
    }

    #[test]
    fn corrupt_settings_file_still_starts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"selected_language_code": "#).unwrap();
        let board = Board::builder()
            .engine(RecordingEngine::new(["en-US"]))
            .store(crate::settings::JsonFileStore::new(&path))
            .build()
            .unwrap();
        assert_eq!(board.screen(), Screen::LanguagePicker);
    }

    struct ReadOnlyStore;

    impl SettingsStore for ReadOnlyStore {
        fn load(&self) -> Result<Settings, StoreError> {
            Ok(Settings::default())
        }

        fn save(&self, _: &Settings) -> Result<(), StoreError> {
            Err(StoreError::Io {
                path: "settings.json".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    #[test]
    fn failed_save_still_confirms_the_language() {
        let engine = RecordingEngine::new(["pt-BR", "en-US"]);
        let mut board = Board::builder()
            .engine(engine.clone())
            .store(ReadOnlyStore)
            .build()
            .unwrap();
        let err = board.apply(Action::SelectLanguage(POR)).unwrap_err();
        assert!(matches!(err, BoardError::Store(StoreError::Io { .. })));
        assert_eq!(board.screen(), Screen::Intro);
        assert_eq!(board.settings().language(), Some(POR));
        assert_eq!(engine.last_spoken().as_deref(), Some("Português selecionado"));
    }

    #[test]
    fn tutorial_progress_label() {
        let (mut board, _) = board_at_menu(SPA);
        assert_eq!(board.tutorial_progress(), None);
        board.apply(Action::OpenTutorial).unwrap();
        board.apply(Action::TutorialNext).unwrap();
        assert_eq!(board.tutorial_progress().as_deref(), Some("Paso 2 de 7"));
    }

    #[test]
    fn navigation_speech_failure_does_not_block() {
        let mut board = Board::builder()
            .engine(RecordingEngine::default())
            .build()
            .unwrap();
        board.apply(Action::SelectLanguage(POR)).unwrap();
        assert_eq!(board.screen(), Screen::Intro);
        assert!(matches!(
            board.speak_item(&board.catalog().items(POR)[0]),
            Err(BoardError::Speech(SpeechError::NoVoices))
        ));
    }
}
