//! Screen-level navigation.
//!
//! The navigator is a pure state machine: it owns the current [`Screen`] and
//! the session's language, and answers each [`Action`] with the effects the
//! host must carry out. Nothing here talks to speech or storage directly.

use crate::content::Category;
use crate::lang::Lang;
use crate::localizer::Prompt;
use smallvec::{SmallVec, smallvec};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

/// Steps of the guided tutorial, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TutorialStep {
    Welcome,
    Categories,
    NeedsDemo,
    SentenceBuilder,
    WordBank,
    Typing,
    Completion,
}

impl TutorialStep {
    pub const ALL: [TutorialStep; 7] = [
        TutorialStep::Welcome,
        TutorialStep::Categories,
        TutorialStep::NeedsDemo,
        TutorialStep::SentenceBuilder,
        TutorialStep::WordBank,
        TutorialStep::Typing,
        TutorialStep::Completion,
    ];

    pub const FIRST: TutorialStep = TutorialStep::Welcome;

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<TutorialStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<TutorialStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    #[inline]
    pub fn is_last(self) -> bool {
        self == TutorialStep::Completion
    }

    pub const fn title_key(self) -> &'static str {
        match self {
            TutorialStep::Welcome => "tutorial_welcome_title",
            TutorialStep::Categories => "tutorial_categories_title",
            TutorialStep::NeedsDemo => "tutorial_needs_demo_title",
            TutorialStep::SentenceBuilder => "tutorial_sentence_builder_title",
            TutorialStep::WordBank => "tutorial_word_bank_title",
            TutorialStep::Typing => "tutorial_typing_title",
            TutorialStep::Completion => "tutorial_completion_title",
        }
    }

    pub const fn description_key(self) -> &'static str {
        match self {
            TutorialStep::Welcome => "tutorial_welcome_description",
            TutorialStep::Categories => "tutorial_categories_description",
            TutorialStep::NeedsDemo => "tutorial_needs_demo_description",
            TutorialStep::SentenceBuilder => "tutorial_sentence_builder_description",
            TutorialStep::WordBank => "tutorial_word_bank_description",
            TutorialStep::Typing => "tutorial_typing_description",
            TutorialStep::Completion => "tutorial_completion_description",
        }
    }
}

/// Tappable phrases on the needs-demo step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoPhrase {
    Water,
    Food,
    Help,
}

impl DemoPhrase {
    pub const ALL: [DemoPhrase; 3] = [DemoPhrase::Water, DemoPhrase::Food, DemoPhrase::Help];

    pub const fn key(self) -> &'static str {
        match self {
            DemoPhrase::Water => "tutorial_demo_water",
            DemoPhrase::Food => "tutorial_demo_food",
            DemoPhrase::Help => "tutorial_demo_help",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    LanguagePicker,
    Intro,
    Tutorial(TutorialStep),
    MainMenu,
    Category(Category),
    SentenceBuilder,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::LanguagePicker => f.write_str("language picker"),
            Screen::Intro => f.write_str("intro"),
            Screen::Tutorial(step) => write!(f, "tutorial step {}", step.index() + 1),
            Screen::MainMenu => f.write_str("main menu"),
            Screen::Category(c) => write!(f, "{c} category"),
            Screen::SentenceBuilder => f.write_str("sentence builder"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    SelectLanguage(Lang),
    /// Repeat the current screen's prompt.
    HearPrompt,
    Start,
    HearQuickSummary,
    StartTutorial,
    OpenTutorial,
    OpenInfo,
    SelectCategory(Category),
    OpenSentenceBuilder,
    Back,
    ChangeLanguage,
    TutorialNext,
    TutorialPrevious,
    TutorialFinish,
    TutorialExit,
}

/// Something to say, before it is rendered in the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Utterance {
    Prompt(Prompt),
    /// Selected-language confirmation for this language.
    Confirmation(Lang),
    CategoryLabel(Category),
    /// Step title and description, read together.
    Tutorial(TutorialStep),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    Speak(Utterance),
    PersistLanguage(Lang),
    ClearComposition,
    MarkTutorialCompleted,
}

pub type Effects = SmallVec<[Effect; 3]>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("{action:?} is not available on the {screen}")]
    InvalidAction { screen: Screen, action: Action },
}

#[derive(Debug, Clone)]
pub struct Navigator {
    screen: Screen,
    lang: Option<Lang>,
    tutorial_completed: bool,
}

impl Navigator {
    /// Start from persisted session state.
    ///
    /// No language means the picker. A language plus a finished tutorial goes
    /// straight to the main menu; a language alone shows the intro.
    ///
    /// The composition doubles as the tutorial's demo buffers, so entering,
    /// leaving and changing tutorial steps all clear it. `Back` inside the
    /// tutorial leaves it like `TutorialExit`.
    pub fn new(lang: Option<Lang>, tutorial_completed: bool) -> Self {
        let screen = match (lang, tutorial_completed) {
            (None, _) => Screen::LanguagePicker,
            (Some(_), true) => Screen::MainMenu,
            (Some(_), false) => Screen::Intro,
        };
        debug!(%screen, ?lang, tutorial_completed, "navigator initialized");
        Self {
            screen,
            lang,
            tutorial_completed,
        }
    }

    #[inline]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[inline]
    pub fn lang(&self) -> Option<Lang> {
        self.lang
    }

    #[inline]
    pub fn tutorial_completed(&self) -> bool {
        self.tutorial_completed
    }

    /// Apply `action`. On error nothing changes.
    pub fn apply(&mut self, action: Action) -> Result<Effects, NavError> {
        let (next, effects) = self.transition(action)?;
        if let Action::SelectLanguage(lang) = action {
            self.lang = Some(lang);
        }
        if effects.contains(&Effect::MarkTutorialCompleted) {
            self.tutorial_completed = true;
        }
        if next != self.screen {
            info!(from = %self.screen, to = %next, ?action, "screen transition");
        }
        self.screen = next;
        Ok(effects)
    }

    fn transition(&self, action: Action) -> Result<(Screen, Effects), NavError> {
        use Action as A;
        use Screen as S;

        let speak = Effect::Speak;
        let prompt = |p: Prompt| Effect::Speak(Utterance::Prompt(p));

        let out = match (self.screen, action) {
            (S::LanguagePicker, A::SelectLanguage(lang)) => (
                S::Intro,
                smallvec![
                    Effect::PersistLanguage(lang),
                    speak(Utterance::Confirmation(lang))
                ],
            ),
            (S::LanguagePicker, A::HearPrompt) => {
                (S::LanguagePicker, smallvec![prompt(Prompt::SelectLanguage)])
            }
            (S::LanguagePicker, A::ChangeLanguage) => (S::LanguagePicker, Effects::new()),

            (S::Intro, A::Start) => (S::MainMenu, smallvec![prompt(Prompt::ChooseCategory)]),
            (S::Intro, A::HearQuickSummary) => (S::Intro, smallvec![prompt(Prompt::QuickSummary)]),
            (S::Intro, A::StartTutorial) | (S::MainMenu, A::OpenTutorial) => (
                S::Tutorial(TutorialStep::FIRST),
                smallvec![
                    Effect::ClearComposition,
                    speak(Utterance::Tutorial(TutorialStep::FIRST))
                ],
            ),

            (S::MainMenu, A::SelectCategory(c)) => {
                (S::Category(c), smallvec![speak(Utterance::CategoryLabel(c))])
            }
            (S::MainMenu, A::OpenSentenceBuilder) => (
                S::SentenceBuilder,
                smallvec![Effect::ClearComposition, prompt(Prompt::SentenceBuilder)],
            ),
            (S::MainMenu | S::Category(_), A::OpenInfo) => {
                (S::Intro, smallvec![prompt(Prompt::Info)])
            }

            (S::Category(_), A::Back) => (S::MainMenu, smallvec![prompt(Prompt::BackToMenu)]),

            // Leaving the builder always drops the composition.
            (S::SentenceBuilder, A::Back) => (
                S::MainMenu,
                smallvec![Effect::ClearComposition, prompt(Prompt::BackToMenu)],
            ),
            (S::SentenceBuilder, A::OpenInfo) => (
                S::Intro,
                smallvec![Effect::ClearComposition, prompt(Prompt::Info)],
            ),
            (S::SentenceBuilder, A::ChangeLanguage) => {
                (S::LanguagePicker, smallvec![Effect::ClearComposition])
            }

            (S::Tutorial(step), A::HearPrompt) => {
                (S::Tutorial(step), smallvec![speak(Utterance::Tutorial(step))])
            }
            (S::Tutorial(step), A::TutorialNext) if !step.is_last() => {
                let next = step.next().unwrap_or(step);
                (
                    S::Tutorial(next),
                    smallvec![Effect::ClearComposition, speak(Utterance::Tutorial(next))],
                )
            }
            (S::Tutorial(step), A::TutorialPrevious) if step != TutorialStep::FIRST => {
                let prev = step.previous().unwrap_or(step);
                (
                    S::Tutorial(prev),
                    smallvec![Effect::ClearComposition, speak(Utterance::Tutorial(prev))],
                )
            }
            (S::Tutorial(TutorialStep::Completion), A::TutorialFinish) => (
                S::MainMenu,
                smallvec![
                    Effect::ClearComposition,
                    prompt(Prompt::TutorialCompletion),
                    Effect::MarkTutorialCompleted
                ],
            ),
            (S::Tutorial(_), A::TutorialExit | A::Back) => {
                (S::MainMenu, smallvec![Effect::ClearComposition])
            }
            (S::Tutorial(_), A::ChangeLanguage) => {
                (S::LanguagePicker, smallvec![Effect::ClearComposition])
            }

            (S::Intro | S::MainMenu | S::Category(_), A::ChangeLanguage) => {
                (S::LanguagePicker, Effects::new())
            }

            (screen, action) => return Err(NavError::InvalidAction { screen, action }),
        };
        Ok(out)
    }
}
