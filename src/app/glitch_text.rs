use leptos::prelude::*;

use crate::glitch::{GlitchCycle, GlitchPhase, GlitchTiming};

#[cfg(feature = "hydrate")]
fn seed() -> u64 {
    js_sys::Date::now() as u64
}

/// Cycles through `words`, scrambling between each one.
///
/// The server and the first client render show the first word; animation
/// starts once hydrated.
#[component]
pub fn GlitchTextCycle(
    #[prop(into)] words: Vec<String>,
    #[prop(optional)] timing: GlitchTiming,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let (text, set_text) = signal(words.first().cloned().unwrap_or_default());
    let (phase, set_phase) = signal(GlitchPhase::Idle);

    #[cfg(feature = "hydrate")]
    match GlitchCycle::new(&words, timing, seed()) {
        Ok(cycle) => {
            use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};
            let elapsed = StoredValue::new(0.0_f64);
            let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
                elapsed.update_value(|e| *e += args.delta);
                let frame = cycle.frame_at(elapsed.get_value() as u64);
                if frame.phase != phase.get_untracked() {
                    set_phase.set(frame.phase);
                }
                if frame.text != text.get_untracked() {
                    set_text.set(frame.text);
                }
            });
        }
        Err(e) => log::warn!("glitch text is static: {e}"),
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (set_text, set_phase);
        if let Err(e) = GlitchCycle::new(&words, timing, 0) {
            tracing::warn!("glitch text is static: {e}");
        }
    }

    view! {
        <div
            class=move || {
                let state = match phase.get() {
                    GlitchPhase::Idle => "glitch-idle",
                    GlitchPhase::Scrambling => "glitch-scrambling",
                    GlitchPhase::Settled => "glitch-settled",
                };
                format!("whitespace-pre font-mono {state} {class}")
            }
            aria-live="off"
        >
            {text}
        </div>
    }
}
