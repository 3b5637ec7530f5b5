use leptos::prelude::*;

use super::homepage::RevealCard;
use super::hover::{GradientTextHover, HaloRingHover};
use super::PageMetadata;

const SKILLS: &[&str] = &[
    "Rust", "TypeScript", "React", "Java", "Python", "SQL", "Git", "WebGL",
];

const STORY: &[(&str, &str)] = &[
    (
        "Background",
        "I'm a software engineering student at McMaster University. I got hooked on programming writing small games, and I still reach for a game whenever I want to learn something new.",
    ),
    (
        "What I build",
        "Mostly web applications and the tools behind them. I like work where the details matter: a booking flow that never double books, an animation that holds 60 frames a second.",
    ),
    (
        "Outside of code",
        "Board games, the occasional hackathon and far too many side projects that start with \"how hard could it be?\"",
    ),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageMetadata path="/about-me" />
        <div class="mx-auto flex w-full max-w-4xl flex-col gap-16 px-6 py-20">
            <div class="flex flex-col items-center gap-6 text-center">
                <HaloRingHover size="180%">
                    <div class="flex h-32 w-32 items-center justify-center rounded-full bg-gradient-to-br from-lush-500 to-breeze-500 text-4xl font-bold text-white">
                        "KH"
                    </div>
                </HaloRingHover>
                <h1 class="text-4xl font-bold">
                    <GradientTextHover>"About Me"</GradientTextHover>
                </h1>
                <p class="max-w-2xl text-lg text-muted">
                    "A deep dive into my background, skills, and passion."
                </p>
            </div>
            {STORY
                .iter()
                .map(|(title, body)| view! { <RevealCard title=*title body=*body /> })
                .collect_view()}
            <section class="flex flex-col items-center gap-6">
                <h2 class="text-2xl font-semibold">
                    <GradientTextHover>"Things I work with"</GradientTextHover>
                </h2>
                <ul class="flex flex-wrap justify-center gap-3">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <li>
                                    <HaloRingHover size="140%" transition_duration="0.3s">
                                        <span class="block rounded-full border border-lush-500/30 bg-background/60 px-4 py-2 text-sm">
                                            {*skill}
                                        </span>
                                    </HaloRingHover>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
