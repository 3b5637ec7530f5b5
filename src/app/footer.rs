use chrono::DateTime;
use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

use crate::nav::{footer_visible, NAV_ITEMS, SITE_TITLE};

use super::hover::HaloRingHover;
use super::icons::{GithubIcon, LinkedInIcon};

pub const GITHUB_URL: &str = "https://github.com/hagorman";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/kyle-hagerman-se";

const BUILD_TIME: &str = env!("BUILD_TIME");

/// "Oct 2026" style stamp of when the site was built.
fn build_stamp(rfc3339: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(rfc3339)
        .ok()
        .map(|t| t.format("%b %Y").to_string())
}

#[component]
pub fn Footer() -> impl IntoView {
    let pathname = use_location().pathname;
    view! {
        <Show when=move || footer_visible(&pathname.get())>
            <footer class="mt-16 w-full border-t border-foreground/10 bg-background/80">
                <div class="mx-auto flex max-w-7xl flex-col gap-8 px-6 py-10 md:flex-row md:items-start md:justify-between">
                    <div class="space-y-3">
                        <div class="text-lg font-bold">{SITE_TITLE}</div>
                        <div class="flex gap-4">
                            <HaloRingHover>
                                <a
                                    href=GITHUB_URL
                                    target="_blank"
                                    rel="noreferrer"
                                    aria-label="GitHub"
                                    class="block p-2"
                                >
                                    <GithubIcon />
                                </a>
                            </HaloRingHover>
                            <HaloRingHover>
                                <a
                                    href=LINKEDIN_URL
                                    target="_blank"
                                    rel="noreferrer"
                                    aria-label="LinkedIn"
                                    class="block p-2"
                                >
                                    <LinkedInIcon />
                                </a>
                            </HaloRingHover>
                        </div>
                    </div>
                    <ul class="grid grid-cols-2 gap-x-10 gap-y-2 text-sm">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <li>
                                        <A
                                            href=item.link
                                            attr:class="text-foreground/70 hover:text-lush-500 transition-colors duration-200"
                                        >
                                            {item.title}
                                        </A>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="border-t border-foreground/10 py-4 text-center text-xs text-muted">
                    {format!("© {SITE_TITLE}")}
                    {build_stamp(BUILD_TIME).map(|s| format!(" · Last built {s}"))}
                </div>
            </footer>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_stamp() {
        assert_eq!(
            build_stamp("2026-10-18T09:30:00+00:00").as_deref(),
            Some("Oct 2026")
        );
        assert_eq!(build_stamp("yesterday"), None);
        // build.rs always stamps something parseable
        assert!(build_stamp(BUILD_TIME).is_some());
    }
}
