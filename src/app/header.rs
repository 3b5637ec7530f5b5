use leptos::{either::Either, prelude::*};
use leptos_router::{components::*, hooks::use_location};

use crate::nav::{NavItem, NAV_ITEMS, SITE_TITLE};

use super::icons::{ChevronIcon, CloseIcon, MenuIcon};
use super::theme::ThemeToggle;

fn link_class(active: bool) -> &'static str {
    if active {
        "rounded-md px-3 py-2 text-sm font-semibold text-lush-500 bg-lush-500/10"
    } else {
        "rounded-md px-3 py-2 text-sm font-medium text-foreground/80 hover:text-foreground hover:bg-foreground/5 transition-colors duration-200"
    }
}

/// Desktop navigation bar. Items with sub-pages open a dropdown on hover.
#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let (open, set_open) = signal(None::<&'static str>);

    let entry = move |item: &'static NavItem| {
        let active = move || item.is_active(&pathname.get());
        if !item.has_dropdown() {
            return Either::Left(view! {
                <li>
                    <A href=item.link attr:class=move || link_class(active())>
                        {item.title}
                    </A>
                </li>
            });
        }
        let is_open = Signal::derive(move || open.get() == Some(item.title));
        Either::Right(view! {
            <li
                class="relative"
                on:mouseenter=move |_| set_open.set(Some(item.title))
                on:mouseleave=move |_| set_open.set(None)
            >
                <div class="flex items-center">
                    <A href=item.link attr:class=move || link_class(active())>
                        {item.title}
                    </A>
                    <button
                        type="button"
                        class="p-1 text-foreground/70 hover:text-foreground"
                        aria-label=format!("Toggle {} menu", item.title)
                        aria-expanded=move || is_open.get().to_string()
                        on:click=move |_| {
                            set_open.update(|o| {
                                *o = if *o == Some(item.title) { None } else { Some(item.title) };
                            })
                        }
                    >
                        <ChevronIcon open=is_open />
                    </button>
                </div>
                <Show when=move || is_open.get()>
                    <div class="absolute left-0 top-full pt-2">
                        <ul class="grid w-[28rem] grid-cols-2 gap-2 rounded-xl border border-foreground/10 bg-background/95 p-3 shadow-xl backdrop-blur">
                            {item
                                .dropdown
                                .iter()
                                .map(|sub| {
                                    view! {
                                        <li>
                                            <A
                                                href=sub.link
                                                attr:class="block rounded-lg p-3 hover:bg-lush-500/10 transition-colors duration-200"
                                                on:click=move |_| set_open.set(None)
                                            >
                                                <div class="text-sm font-semibold">{sub.title}</div>
                                                <p class="mt-1 text-xs leading-snug text-muted">
                                                    {sub.description}
                                                </p>
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </Show>
            </li>
        })
    };

    view! {
        <header class="sticky top-0 z-50 hidden w-full border-b border-foreground/10 bg-background/70 backdrop-blur-md md:block">
            <nav class="mx-auto flex max-w-7xl items-center justify-between px-6 py-3">
                <A href="/" attr:class="text-lg font-bold tracking-tight">
                    {SITE_TITLE}
                </A>
                <ul class="flex items-center gap-1">
                    {NAV_ITEMS.iter().map(entry).collect_view()}
                </ul>
                <ThemeToggle />
            </nav>
        </header>
    }
}

/// Mobile navigation: a slide-in drawer with collapsible sub-menus.
#[component]
pub fn HamburgerMenu() -> impl IntoView {
    let pathname = use_location().pathname;
    let (open, set_open) = signal(false);

    // close after navigating
    Effect::watch(
        move || pathname.get(),
        move |_, _, _| set_open.set(false),
        false,
    );

    let entry = move |item: &'static NavItem| {
        let active = move || item.is_active(&pathname.get());
        let (expanded, set_expanded) = signal(false);
        view! {
            <li class="border-b border-foreground/10 py-1">
                <div class="flex items-center justify-between">
                    <A href=item.link attr:class=move || link_class(active())>
                        {item.title}
                    </A>
                    <Show when=move || item.has_dropdown()>
                        <button
                            type="button"
                            class="p-2 text-foreground/70"
                            aria-label=format!("Expand {}", item.title)
                            aria-expanded=move || expanded.get().to_string()
                            on:click=move |_| set_expanded.update(|e| *e = !*e)
                        >
                            <ChevronIcon open=expanded />
                        </button>
                    </Show>
                </div>
                <Show when=move || expanded.get()>
                    <ul class="ml-3 flex flex-col border-l border-lush-500/30 pl-3">
                        {item
                            .dropdown
                            .iter()
                            .map(|sub| {
                                view! {
                                    <li>
                                        <A href=sub.link attr:class="block py-2 text-sm text-foreground/80">
                                            {sub.title}
                                        </A>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </Show>
            </li>
        }
    };

    view! {
        <header class="sticky top-0 z-50 flex w-full items-center justify-between border-b border-foreground/10 bg-background/70 px-4 py-3 backdrop-blur-md md:hidden">
            <button
                type="button"
                class="p-1"
                aria-label="Open menu"
                on:click=move |_| set_open.set(true)
            >
                <MenuIcon />
            </button>
            <A href="/" attr:class="font-bold tracking-tight">
                {SITE_TITLE}
            </A>
            <ThemeToggle />
        </header>
        <div
            class=move || {
                if open.get() {
                    "fixed inset-0 z-50 bg-black/50 transition-opacity duration-300 md:hidden"
                } else {
                    "pointer-events-none fixed inset-0 z-50 bg-black/50 opacity-0 transition-opacity duration-300 md:hidden"
                }
            }
            on:click=move |_| set_open.set(false)
        ></div>
        <aside class=move || {
            let base = "fixed inset-y-0 left-0 z-50 w-72 overflow-y-auto bg-background p-4 shadow-2xl transition-transform duration-300 md:hidden";
            if open.get() {
                format!("{base} translate-x-0")
            } else {
                format!("{base} -translate-x-full")
            }
        }>
            <div class="mb-4 flex items-center justify-between">
                <span class="font-bold">{SITE_TITLE}</span>
                <button
                    type="button"
                    class="p-1"
                    aria-label="Close menu"
                    on:click=move |_| set_open.set(false)
                >
                    <CloseIcon />
                </button>
            </div>
            <ul class="flex flex-col">{NAV_ITEMS.iter().map(entry).collect_view()}</ul>
        </aside>
    }
}
