//! Voice Control Component
//!
//! Wraps the platform speech capture in a session lifecycle:
//! idle -> listening -> processing -> idle, with error and
//! ended-without-result both falling back to idle. When the platform has
//! no speech capability the start control is permanently disabled and a
//! fixed explanatory message shown.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    SpeechRecognition, SpeechRecognitionError as SpeechRecognitionErrorEvent,
    SpeechRecognitionEvent,
};

use crate::api;
use crate::context::AppContext;
use crate::models::StatusKind;
use crate::speech;

#[component]
pub fn VoiceControl() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (transcript, set_transcript) =
        signal(String::from("Press the button and say a command."));

    // SpeechRecognition is a JS handle, kept out of Send storage.
    let recognition = StoredValue::new_local(speech::new_recognition());
    let supported = recognition.with_value(|r| r.is_some());

    if let Some(rec) = recognition.with_value(|r| r.clone()) {
        wire_session(&rec, ctx, set_transcript);
    } else {
        set_transcript.set("Speech Recognition not supported in this browser.".to_string());
        ctx.set_status(
            "Please use a Chrome-based browser (e.g., Chrome, Edge) for voice input.",
            StatusKind::Info,
        );
    }

    let start = move |_: web_sys::MouseEvent| {
        // The audio channel is shared with the announcer; stop any
        // in-flight utterance before opening the microphone.
        speech::cancel_announcement();
        recognition.with_value(|rec| {
            if let Some(rec) = rec {
                if let Err(err) = rec.start() {
                    web_sys::console::error_1(&err);
                }
            }
        });
    };

    view! {
        <div class="voice-panel">
            <button
                class="start-btn"
                disabled=move || !supported || ctx.listening.get()
                on:click=start
            >
                "Start Speaking"
            </button>
            <p class="transcript">{move || transcript.get()}</p>
        </div>
    }
}

/// Attach the session lifecycle callbacks to a capture handle.
fn wire_session(
    recognition: &SpeechRecognition,
    ctx: AppContext,
    set_transcript: WriteSignal<String>,
) {
    let on_start = Closure::<dyn FnMut()>::new(move || {
        set_transcript.set("Listening... Speak now.".to_string());
        ctx.set_status("Recording audio...", StatusKind::Info);
        ctx.set_listening(true);
        ctx.set_busy(false);
    });
    recognition.set_onstart(Some(on_start.as_ref().unchecked_ref()));
    on_start.forget();

    let on_result =
        Closure::<dyn FnMut(SpeechRecognitionEvent)>::new(move |ev: SpeechRecognitionEvent| {
            let Some(transcript) = speech::first_transcript(&ev) else {
                return;
            };
            set_transcript.set(format!("You said: \"{transcript}\""));
            ctx.set_status("Processing command...", StatusKind::Info);
            ctx.set_busy(true);
            spawn_local(async move {
                send_voice_command(ctx, transcript).await;
            });
        });
    recognition.set_onresult(Some(on_result.as_ref().unchecked_ref()));
    on_result.forget();

    let on_error = Closure::<dyn FnMut(SpeechRecognitionErrorEvent)>::new(
        move |ev: SpeechRecognitionErrorEvent| {
            let reason = speech::error_code_name(ev.error());
            set_transcript.set("Error during speech recognition. Try again.".to_string());
            ctx.set_status(
                format!("Error: {reason}. Please ensure microphone access is granted."),
                StatusKind::Error,
            );
            ctx.set_listening(false);
            ctx.set_busy(false);
        },
    );
    recognition.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();

    let on_end = Closure::<dyn FnMut()>::new(move || {
        ctx.set_listening(false);
        // onend also fires after a successful result; the processing
        // status set there must not be overwritten.
        if !ctx.busy.get_untracked() {
            ctx.set_status("Recognition ended.", StatusKind::Info);
        }
    });
    recognition.set_onend(Some(on_end.as_ref().unchecked_ref()));
    on_end.forget();
}

/// Forward a transcript to the command processor and report the outcome.
async fn send_voice_command(ctx: AppContext, command: String) {
    match api::process_voice_command(&command).await {
        Ok(response) => {
            ctx.set_status(response.message.clone(), response.status.voice_style());
            speech::announce(&response.message);
            ctx.reload();
        }
        Err(err) => {
            web_sys::console::error_1(
                &format!("[API] process_voice_command failed: {err}").into(),
            );
            ctx.set_status(
                "Error communicating with server. Please check the browser console for details.",
                StatusKind::Error,
            );
            speech::announce(
                "Error communicating with the server. Please check your internet connection.",
            );
        }
    }
    ctx.set_busy(false);
}
