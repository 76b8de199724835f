pub mod board;
pub mod composition;
pub mod content;
pub mod emoji;
pub mod lang;
pub mod localizer;
pub mod nav;
pub mod settings;
pub mod speech;

pub use board::{Board, BoardBuilder, BoardConfig, BoardError};
pub use composition::Composition;
pub use content::{Category, CommunicationItem, ContentCatalog, ItemId};
pub use emoji::{Annotated, annotate, emoji};
pub use lang::{DEFAULT_LANG, ENG, FRA, HIN, Lang, POR, SPA, ZHO, all_langs, short_code};
pub use localizer::{BundleSource, Localizer, MapBundles, Prompt, StaticBundles, StringTable, Tier};
pub use nav::{Action, DemoPhrase, Effect, Effects, NavError, Navigator, Screen, TutorialStep, Utterance};
pub use settings::{JsonFileStore, MemoryStore, Settings, SettingsStore, StoreError};
pub use speech::{RecordingEngine, SpeechDispatcher, SpeechEngine, SpeechError, select_voice};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
