use leptos::{either::Either, prelude::*};
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
use crate::theme::{ResolvedTheme, ThemePreference};

use super::icons::{MoonIcon, SunIcon};

#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub preference: Signal<ThemePreference>,
    /// What is actually painted. Stays at the default until mounted so the
    /// first client render matches the server's.
    pub resolved: Signal<ResolvedTheme>,
    set_preference: WriteSignal<ThemePreference>,
}

impl ThemeContext {
    pub fn set(&self, preference: ThemePreference) {
        self.set_preference.set(preference);
    }

    pub fn toggle(&self) {
        self.set(self.resolved.get_untracked().toggle_preference());
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let (preference, set_preference, _) =
        use_local_storage::<ThemePreference, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (preference, set_preference) = signal(ThemePreference::default());
    let preference: Signal<ThemePreference> = preference.into();

    let system_dark = use_preferred_dark();
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));

    let resolved = Signal::derive(move || {
        if mounted.get() {
            preference.get().resolve(system_dark.get())
        } else {
            ResolvedTheme::default()
        }
    });

    provide_context(ThemeContext {
        preference,
        resolved,
        set_preference,
    });

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let theme = resolved.get();
        let Some(root) = document().document_element() else {
            return;
        };
        let classes = root.class_list();
        if classes.toggle_with_force("dark", theme.is_dark()).is_err()
            || classes.toggle_with_force("light", !theme.is_dark()).is_err()
        {
            log::warn!("couldn't apply {theme} theme to document");
        } else {
            log::debug!("theme is now {theme} ({})", preference.get_untracked());
        }
    });

    children()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            type="button"
            aria-label="Toggle theme"
            class="rounded-full p-2 text-foreground hover:bg-foreground/10 transition-colors duration-200"
            on:click=move |_| theme.toggle()
        >
            {move || {
                if theme.resolved.get().is_dark() {
                    Either::Left(view! { <MoonIcon /> })
                } else {
                    Either::Right(view! { <SunIcon /> })
                }
            }}
        </button>
    }
}
