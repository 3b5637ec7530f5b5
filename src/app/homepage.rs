use leptos::prelude::*;
use leptos_router::components::*;

use crate::motion::ScrollTimeline;

use super::glass::{GlassIntensity, LiquidGlassCard};
use super::glitch_text::GlitchTextCycle;
use super::scene::{SceneKind, ShaderCanvas};
use super::scroll::ScrollMotion;
use super::PageMetadata;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageMetadata path="/" />
        <div class="relative w-full">
            // the ocean sits behind the hero and takes its clicks
            <div class="absolute left-0 top-0 h-screen w-full">
                <ShaderCanvas kind=SceneKind::Ocean />
                <div class="pointer-events-none absolute bottom-0 left-0 h-32 w-full bg-gradient-to-t from-background to-transparent"></div>
            </div>
            <ScrollMotion
                timeline=ScrollTimeline::hero_exit()
                class="pointer-events-none relative z-10"
                inner_class="flex min-h-screen flex-col items-center justify-center gap-8 px-6 text-center"
                let:_hero
            >
                <h1 class="text-4xl font-bold tracking-wide text-lush-700 dark:text-lush-300 sm:text-6xl">
                    "Hey! I'm Kyle"
                </h1>
                <GlitchTextCycle
                    words=vec![
                        "Programmer".to_string(),
                        "Innovator".to_string(),
                        "Developer".to_string(),
                    ]
                    class="text-2xl text-breeze-600 dark:text-breeze-300 sm:text-4xl"
                />
                <div class="pointer-events-auto flex flex-col items-center gap-4 sm:flex-row">
                    <A
                        href="/projects"
                        attr:class="flex h-12 items-center justify-center rounded-full border border-lush-200 px-5 text-foreground transition-colors hover:bg-lush-400 active:bg-lush-500"
                    >
                        "Check out my projects"
                    </A>
                    <A
                        href="/contact"
                        attr:class="flex h-12 min-w-44 items-center justify-center rounded-full border border-breeze-700 bg-breeze-200 px-5 text-breeze-950 transition-colors hover:bg-breeze-300 active:bg-breeze-400"
                    >
                        "Contact me"
                    </A>
                    <A
                        href="/about-me"
                        attr:class="flex h-12 min-w-44 items-center justify-center rounded-full border border-nebula-700 bg-nebula-200 px-5 text-nebula-950 transition-colors hover:bg-nebula-300 active:bg-nebula-400"
                    >
                        "Read about me"
                    </A>
                </div>
            </ScrollMotion>
            <Highlights />
        </div>
    }
}

const HIGHLIGHTS: &[(&str, &str)] = &[
    (
        "Full-stack web",
        "From booking systems used across a faculty to this site, I enjoy owning a feature from the database to the pixels.",
    ),
    (
        "Games and simulations",
        "Chess variants, island generators and a pocket-monster catcher: small worlds with rules are my favourite playground.",
    ),
    (
        "Always learning",
        "Software engineering student at McMaster who would rather build the thing than read about it.",
    ),
];

#[component]
fn Highlights() -> impl IntoView {
    view! {
        <section class="relative z-10 mx-auto flex max-w-4xl flex-col gap-16 px-6 py-24">
            <h2 class="text-center text-3xl font-bold">
                "Deep dive into my skills, passion and experience"
            </h2>
            {HIGHLIGHTS
                .iter()
                .map(|(title, body)| view! { <RevealCard title=*title body=*body /> })
                .collect_view()}
        </section>
    }
}

/// A glass card that fades in as it scrolls into view.
#[component]
pub fn RevealCard(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <ScrollMotion timeline=ScrollTimeline::card_reveal() let:motion>
            <LiquidGlassCard
                intensity=GlassIntensity::Md
                alpha=Signal::derive(move || motion.get().opacity)
            >
                <h3 class="mb-3 text-xl font-semibold text-lush-600 dark:text-lush-300">{title}</h3>
                <p class="leading-relaxed text-foreground/80">{body}</p>
            </LiquidGlassCard>
        </ScrollMotion>
    }
}
