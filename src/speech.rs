//! Speech Bindings
//!
//! Thin wrappers over the Web Speech API: speech capture construction
//! and the announcer that speaks server responses back to the user.

use web_sys::{
    SpeechRecognition, SpeechRecognitionErrorCode, SpeechRecognitionEvent, SpeechSynthesis,
    SpeechSynthesisUtterance,
};

/// Language tag for both capture and synthesis.
pub const LANG: &str = "en-US";

fn synthesis() -> Option<SpeechSynthesis> {
    web_sys::window()?.speech_synthesis().ok()
}

/// Speak `text` aloud. At most one utterance is audible at a time: any
/// in-flight utterance is cancelled first, the newest request wins.
pub fn announce(text: &str) {
    let Some(synth) = synthesis() else {
        return;
    };
    if synth.speaking() {
        synth.cancel();
    }
    let Ok(utterance) = SpeechSynthesisUtterance::new_with_text(text) else {
        return;
    };
    utterance.set_lang(LANG);
    utterance.set_volume(1.0);
    utterance.set_rate(1.0);
    utterance.set_pitch(1.0);
    synth.speak(&utterance);
}

/// Cancel any in-flight announcement without starting a new one.
pub fn cancel_announcement() {
    if let Some(synth) = synthesis() {
        if synth.speaking() {
            synth.cancel();
        }
    }
}

/// Build a single-shot speech capture session, or `None` when the
/// platform has no speech recognition capability.
pub fn new_recognition() -> Option<SpeechRecognition> {
    let recognition = SpeechRecognition::new().ok()?;
    recognition.set_continuous(false);
    recognition.set_interim_results(false);
    recognition.set_lang(LANG);
    Some(recognition)
}

/// The final transcript of a capture session, if the event carries one.
pub fn first_transcript(ev: &SpeechRecognitionEvent) -> Option<String> {
    let result = ev.results()?.get(0)?;
    let alternative = result.get(0)?;
    Some(alternative.transcript())
}

/// Platform error codes as the DOM error strings users see in status text.
pub fn error_code_name(code: SpeechRecognitionErrorCode) -> &'static str {
    match code {
        SpeechRecognitionErrorCode::NoSpeech => "no-speech",
        SpeechRecognitionErrorCode::Aborted => "aborted",
        SpeechRecognitionErrorCode::AudioCapture => "audio-capture",
        SpeechRecognitionErrorCode::Network => "network",
        SpeechRecognitionErrorCode::NotAllowed => "not-allowed",
        SpeechRecognitionErrorCode::ServiceNotAllowed => "service-not-allowed",
        SpeechRecognitionErrorCode::BadGrammar => "bad-grammar",
        SpeechRecognitionErrorCode::LanguageNotSupported => "language-not-supported",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_use_dom_strings() {
        assert_eq!(
            error_code_name(SpeechRecognitionErrorCode::NotAllowed),
            "not-allowed"
        );
        assert_eq!(
            error_code_name(SpeechRecognitionErrorCode::NoSpeech),
            "no-speech"
        );
        assert_eq!(error_code_name(SpeechRecognitionErrorCode::Network), "network");
    }
}
