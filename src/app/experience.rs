use leptos::prelude::*;

use crate::motion::ScrollTimeline;

use super::glass::{GlassIntensity, LiquidGlassCard};
use super::scroll::ScrollMotion;
use super::PageMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub title: &'static str,
    pub organisation: &'static str,
    pub period: &'static str,
    pub technical: bool,
    pub highlights: &'static [&'static str],
}

pub const ROLES: &[Role] = &[
    Role {
        title: "Software Developer",
        organisation: "McMaster Engineering Society",
        period: "2023 - Present",
        technical: true,
        highlights: &[
            "Built and maintain the Hatch booking system used to reserve engineering study rooms",
            "Designed the availability rules that stop double bookings across overlapping rooms",
            "Ship features alongside a small volunteer team with code review on every change",
        ],
    },
    Role {
        title: "Teaching Assistant",
        organisation: "McMaster University",
        period: "2024 - Present",
        technical: true,
        highlights: &[
            "Ran weekly labs for first-year programming students",
            "Marked assignments and wrote feedback on code structure and testing",
        ],
    },
    Role {
        title: "Team Lead",
        organisation: "Campus Events Committee",
        period: "2022 - 2023",
        technical: false,
        highlights: &[
            "Coordinated a team of volunteers for orientation week events",
            "Managed schedules and budgets across several student groups",
        ],
    },
];

#[component]
pub fn ExperiencePage() -> impl IntoView {
    view! {
        <PageMetadata path="/experience" />
        <div class="mx-auto flex w-full max-w-4xl flex-col gap-12 px-6 py-20">
            <div class="text-center">
                <h1 class="mb-4 text-4xl font-bold">"Experience"</h1>
                <p class="text-lg text-muted">
                    "My work and volunteering experience, both technical and non-technical."
                </p>
            </div>
            <ol class="relative flex flex-col gap-10 border-l border-lush-500/30 pl-8">
                {ROLES.iter().map(|role| view! { <RoleCard role=*role /> }).collect_view()}
            </ol>
        </div>
    }
}

#[component]
fn RoleCard(role: Role) -> impl IntoView {
    view! {
        <li class="relative">
            <span class="absolute -left-[2.4rem] top-8 h-3 w-3 rounded-full bg-lush-500"></span>
            <ScrollMotion timeline=ScrollTimeline::card_reveal() let:motion>
                <LiquidGlassCard
                    intensity=GlassIntensity::Sm
                    alpha=Signal::derive(move || motion.get().opacity)
                >
                    <div class="flex flex-wrap items-baseline justify-between gap-2">
                        <h2 class="text-xl font-semibold">{role.title}</h2>
                        <span class="text-sm text-muted">{role.period}</span>
                    </div>
                    <div class="mb-4 flex items-center gap-2 text-breeze-600 dark:text-breeze-300">
                        {role.organisation}
                        <span class="rounded-full bg-foreground/10 px-2 py-0.5 text-xs text-foreground/70">
                            {if role.technical { "Technical" } else { "Non-technical" }}
                        </span>
                    </div>
                    <ul class="list-disc space-y-1 pl-5 text-foreground/80">
                        {role.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                    </ul>
                </LiquidGlassCard>
            </ScrollMotion>
        </li>
    }
}
