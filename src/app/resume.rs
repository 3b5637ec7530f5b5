use leptos::prelude::*;

use crate::nav::PROJECT_ITEMS;

use super::experience::ROLES;
use super::footer::{GITHUB_URL, LINKEDIN_URL};
use super::glass::{GlassIntensity, LiquidGlassCard};
use super::icons::{GithubIcon, LinkedInIcon};
use super::PageMetadata;

const SKILLS: &[(&str, &str)] = &[
    ("Languages", "Rust, TypeScript, JavaScript, Java, Python, SQL, C"),
    ("Frontend", "React, Next.js, Tailwind CSS, Three.js, WebGL, Leptos"),
    ("Backend", "Node.js, Axum, PostgreSQL, REST APIs"),
    ("Tooling", "Git, GitHub Actions, Docker, Linux, Vercel"),
];

#[component]
pub fn ResumePage() -> impl IntoView {
    view! {
        <PageMetadata path="/resume" />
        <div class="mx-auto grid w-full max-w-5xl gap-8 px-6 py-16">
            <div class="text-center">
                <h1 class="mb-2 text-3xl font-bold">"Resume"</h1>
                <p class="text-muted">
                    "This website should be enough, but you can ask politely for a PDF."
                </p>
            </div>
            <LiquidGlassCard intensity=GlassIntensity::Lg content_class="grid grid-cols-1 gap-8 p-6 md:grid-cols-3 md:p-10">
                <Sidebar />
                <Experience />
            </LiquidGlassCard>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="space-y-3 text-center md:text-left">
                <h2 class="text-2xl font-bold">"Kyle Hagerman"</h2>
                <div>"Software Engineering, McMaster University"</div>
                <div class="flex justify-center gap-3 md:justify-start">
                    <a href=GITHUB_URL target="_blank" rel="noreferrer" aria-label="GitHub">
                        <GithubIcon class="h-5 w-5" />
                    </a>
                    <a href=LINKEDIN_URL target="_blank" rel="noreferrer" aria-label="LinkedIn">
                        <LinkedInIcon class="h-5 w-5" />
                    </a>
                </div>
            </div>
            <section id="skills" class="grid gap-3">
                <h3 class="border-b border-foreground/20 pb-0.5 font-bold">"Skills"</h3>
                {SKILLS
                    .iter()
                    .map(|(group, list)| {
                        view! {
                            <div class="space-y-1">
                                <h4 class="font-semibold">{*group}</h4>
                                <p class="text-sm text-foreground/80">{*list}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <section id="education" class="grid gap-1">
                <h3 class="border-b border-foreground/20 pb-0.5 font-bold">"Education"</h3>
                <strong>"McMaster University"</strong>
                <div>"B.Eng. Software Engineering"</div>
                <div class="font-bold">"2021 - Present"</div>
            </section>
        </div>
    }
}

#[component]
fn Experience() -> impl IntoView {
    view! {
        <div class="space-y-6 md:col-span-2">
            <section id="experience" class="grid gap-4">
                <h3 class="border-b border-foreground/20 pb-0.5 font-bold">"Experience"</h3>
                {ROLES
                    .iter()
                    .map(|role| {
                        view! {
                            <div class="space-y-1">
                                <div class="flex items-start justify-between gap-4">
                                    <div>
                                        <strong>{role.title}</strong>
                                        <div class="text-foreground/80">{role.organisation}</div>
                                    </div>
                                    <div class="shrink-0 font-bold">{role.period}</div>
                                </div>
                                <ul class="list-disc pl-5 text-sm">
                                    {role
                                        .highlights
                                        .iter()
                                        .map(|h| view! { <li>{*h}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <section id="projects" class="grid gap-3">
                <h3 class="border-b border-foreground/20 pb-0.5 font-bold">"Projects"</h3>
                {PROJECT_ITEMS
                    .iter()
                    .map(|p| {
                        view! {
                            <div>
                                <a href=p.link class="font-bold hover:text-lush-500">
                                    {p.title}
                                </a>
                                <p class="text-sm text-foreground/80">{p.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
