//! Text-to-speech dispatch.
//!
//! Every utterance stops whatever is playing before it starts, on every path.
//! The engine itself is an external collaborator behind [`SpeechEngine`].

use crate::lang::Lang;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::debug;

/// Voice of last resort before picking arbitrarily.
pub const DEFAULT_VOICE: &str = "en-US";

/// Normalized rate used when none is configured (0.0 slowest, 1.0 fastest).
pub const DEFAULT_RATE: f32 = 0.5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpeechError {
    #[error("refusing to speak empty text")]
    EmptyText,
    #[error("the speech engine reports no voices")]
    NoVoices,
    #[error("speech engine failure: {0}")]
    Engine(String),
}

/// Platform text-to-speech. Voices are identified by language tag (`"pt-BR"`).
pub trait SpeechEngine: Send + Sync {
    fn voices(&self) -> Vec<String>;

    fn system_language(&self) -> Option<String>;

    /// Start playing `text`. Returns without waiting for playback.
    fn speak(&self, text: &str, voice: &str, rate: f32) -> Result<(), SpeechError>;

    /// Stop the current utterance immediately.
    fn stop(&self);
}

impl<E: SpeechEngine + ?Sized> SpeechEngine for Box<E> {
    fn voices(&self) -> Vec<String> {
        (**self).voices()
    }
    fn system_language(&self) -> Option<String> {
        (**self).system_language()
    }
    fn speak(&self, text: &str, voice: &str, rate: f32) -> Result<(), SpeechError> {
        (**self).speak(text, voice, rate)
    }
    fn stop(&self) {
        (**self).stop()
    }
}

impl<E: SpeechEngine + ?Sized> SpeechEngine for Arc<E> {
    fn voices(&self) -> Vec<String> {
        (**self).voices()
    }
    fn system_language(&self) -> Option<String> {
        (**self).system_language()
    }
    fn speak(&self, text: &str, voice: &str, rate: f32) -> Result<(), SpeechError> {
        (**self).speak(text, voice, rate)
    }
    fn stop(&self) {
        (**self).stop()
    }
}

/// Pick a voice deterministically.
///
/// Order: each preferred voice, the system language, [`DEFAULT_VOICE`], then
/// the lexicographically smallest available voice. `None` only when
/// `available` is empty.
pub fn select_voice<S: AsRef<str>>(
    preferred: &[&str],
    available: &[S],
    system: Option<&str>,
) -> Option<String> {
    let has = |v: &str| available.iter().any(|a| a.as_ref() == v);

    if let Some(v) = preferred.iter().find(|v| has(**v)) {
        return Some((*v).to_owned());
    }
    if let Some(sys) = system.filter(|s| has(*s)) {
        return Some(sys.to_owned());
    }
    if has(DEFAULT_VOICE) {
        return Some(DEFAULT_VOICE.to_owned());
    }
    available
        .iter()
        .map(AsRef::as_ref)
        .min()
        .map(str::to_owned)
}

/// Drives a [`SpeechEngine`] at a fixed rate.
#[derive(Debug)]
pub struct SpeechDispatcher<E> {
    engine: E,
    rate: f32,
}

impl<E: SpeechEngine> SpeechDispatcher<E> {
    pub fn new(engine: E, rate: f32) -> Self {
        Self {
            engine,
            rate: rate.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn rate(&self) -> f32 {
        self.rate
    }

    #[inline]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn voice_for(&self, lang: Lang) -> Option<String> {
        let available = self.engine.voices();
        let system = self.engine.system_language();
        let voice = select_voice(lang.preferred_voices(), available.as_slice(), system.as_deref());
        debug!(lang = lang.code(), ?voice, "voice selected");
        voice
    }

    /// Stop the current utterance, then speak `text` in `lang`'s best voice.
    /// Returns the voice used.
    pub fn speak(&self, text: &str, lang: Lang) -> Result<String, SpeechError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SpeechError::EmptyText);
        }
        let voice = self.voice_for(lang).ok_or(SpeechError::NoVoices)?;
        self.engine.stop();
        self.engine.speak(text, &voice, self.rate)?;
        Ok(voice)
    }

    #[inline]
    pub fn stop(&self) {
        self.engine.stop();
    }
}

/// One call observed by a [`RecordingEngine`].
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechCall {
    Stop,
    Speak {
        text: String,
        voice: String,
        rate: f32,
    },
}

#[derive(Debug, Default)]
struct Recording {
    voices: Vec<String>,
    system: Option<String>,
    calls: Vec<SpeechCall>,
}

/// In-memory engine that records every call. Clones share one log.
#[derive(Debug, Clone, Default)]
pub struct RecordingEngine {
    inner: Arc<Mutex<Recording>>,
}

impl RecordingEngine {
    pub fn new<I, S>(voices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let engine = Self::default();
        engine.lock().voices = voices.into_iter().map(Into::into).collect();
        engine
    }

    pub fn with_system_language(self, code: &str) -> Self {
        self.lock().system = Some(code.to_owned());
        self
    }

    pub fn calls(&self) -> Vec<SpeechCall> {
        self.lock().calls.clone()
    }

    /// Spoken texts, in order.
    pub fn spoken(&self) -> Vec<String> {
        self.lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                SpeechCall::Speak { text, .. } => Some(text.clone()),
                SpeechCall::Stop => None,
            })
            .collect()
    }

    pub fn last_spoken(&self) -> Option<String> {
        self.spoken().pop()
    }

    pub fn clear(&self) {
        self.lock().calls.clear();
    }

    fn lock(&self) -> MutexGuard<'_, Recording> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SpeechEngine for RecordingEngine {
    fn voices(&self) -> Vec<String> {
        self.lock().voices.clone()
    }

    fn system_language(&self) -> Option<String> {
        self.lock().system.clone()
    }

    fn speak(&self, text: &str, voice: &str, rate: f32) -> Result<(), SpeechError> {
        self.lock().calls.push(SpeechCall::Speak {
            text: text.to_owned(),
            voice: voice.to_owned(),
            rate,
        });
        Ok(())
    }

    fn stop(&self) {
        self.lock().calls.push(SpeechCall::Stop);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{HIN, POR, ZHO};

    #[test]
    fn portuguese_without_portuguese_voices_uses_en_us() {
        let v = select_voice(POR.preferred_voices(), &["en-US", "es-ES"], None);
        assert_eq!(v.as_deref(), Some("en-US"));
    }

    #[test]
    fn preferred_order_is_respected() {
        let v = select_voice(POR.preferred_voices(), &["pt", "pt-BR", "en-US"], None);
        assert_eq!(v.as_deref(), Some("pt-BR"));
    }

    #[test]
    fn system_language_before_default() {
        let v = select_voice(ZHO.preferred_voices(), &["en-US", "fr-FR"], Some("fr-FR"));
        assert_eq!(v.as_deref(), Some("fr-FR"));
        // unavailable system voice is skipped
        let v = select_voice(ZHO.preferred_voices(), &["en-US"], Some("fr-FR"));
        assert_eq!(v.as_deref(), Some("en-US"));
    }

    #[test]
    fn arbitrary_choice_is_deterministic() {
        let a = select_voice(HIN.preferred_voices(), &["ja-JP", "de-DE", "ko-KR"], None);
        let b = select_voice(HIN.preferred_voices(), &["ko-KR", "ja-JP", "de-DE"], None);
        assert_eq!(a.as_deref(), Some("de-DE"));
        assert_eq!(a, b);
    }

    #[test]
    fn no_voices() {
        let none: [&str; 0] = [];
        assert_eq!(select_voice(POR.preferred_voices(), &none, Some("pt-BR")), None);
    }

    #[test]
    fn dispatcher_stops_before_speaking() {
        let engine = RecordingEngine::new(["pt-BR"]);
        let d = SpeechDispatcher::new(engine.clone(), 0.4);
        assert_eq!(d.speak("  Olá ", POR).as_deref(), Ok("pt-BR"));
        assert_eq!(
            engine.calls(),
            vec![
                SpeechCall::Stop,
                SpeechCall::Speak {
                    text: "Olá".into(),
                    voice: "pt-BR".into(),
                    rate: 0.4
                }
            ]
        );
    }

    #[test]
    fn empty_text_touches_nothing() {
        let engine = RecordingEngine::new(["en-US"]);
        let d = SpeechDispatcher::new(engine.clone(), DEFAULT_RATE);
        assert_eq!(d.speak(" \n", POR), Err(SpeechError::EmptyText));
        assert!(engine.calls().is_empty());
    }

    #[test]
    fn engine_without_voices_is_an_error() {
        let engine = RecordingEngine::default();
        let d = SpeechDispatcher::new(engine.clone(), DEFAULT_RATE);
        assert_eq!(d.speak("hello", POR), Err(SpeechError::NoVoices));
        assert!(engine.calls().is_empty());
    }

    #[test]
    fn rate_is_clamped() {
        let d = SpeechDispatcher::new(RecordingEngine::default(), 3.0);
        assert_eq!(d.rate(), 1.0);
    }
}
