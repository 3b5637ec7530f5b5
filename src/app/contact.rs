use leptos::prelude::*;

use super::footer::{GITHUB_URL, LINKEDIN_URL};
use super::glass::{GlassIntensity, LiquidGlassCard};
use super::hover::HaloRingHover;
use super::icons::{GithubIcon, LinkedInIcon};
use super::scene::{SceneKind, ShaderCanvas};
use super::PageMetadata;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <PageMetadata path="/contact" />
        <div class="fixed inset-0 -z-10">
            <ShaderCanvas kind=SceneKind::Electric />
        </div>
        <div class="flex flex-grow items-center justify-center px-6 py-24">
            <LiquidGlassCard
                intensity=GlassIntensity::Lg
                class="w-full max-w-lg"
                content_class="flex flex-col items-center gap-6 text-center text-white"
            >
                <h1 class="text-4xl font-bold">"Let's chat"</h1>
                <p class="text-white/80">
                    "Contact me if you'd like to chat! I'm always happy to talk about projects, internships or anything on this site."
                </p>
                <div class="flex gap-8">
                    <HaloRingHover halo_colour="breeze-400">
                        <a
                            href=LINKEDIN_URL
                            target="_blank"
                            rel="noreferrer"
                            aria-label="LinkedIn"
                            class="flex flex-col items-center gap-2 p-3"
                        >
                            <LinkedInIcon class="h-10 w-10" />
                            <span class="text-sm">"LinkedIn"</span>
                        </a>
                    </HaloRingHover>
                    <HaloRingHover halo_colour="lush-400">
                        <a
                            href=GITHUB_URL
                            target="_blank"
                            rel="noreferrer"
                            aria-label="GitHub"
                            class="flex flex-col items-center gap-2 p-3"
                        >
                            <GithubIcon class="h-10 w-10" />
                            <span class="text-sm">"GitHub"</span>
                        </a>
                    </HaloRingHover>
                </div>
            </LiquidGlassCard>
        </div>
    }
}
