use leptos::{html::Input, prelude::*, server_fn::codec::GetUrl};
use leptos_router::{components::*, hooks::*};

#[cfg(feature = "ssr")]
use crate::projects::{get_meta, get_project};
use crate::projects::{Project, ProjectMeta, GLOBAL_META_CACHE, GLOBAL_PROJECT_CACHE};

use super::glass::{GlassIntensity, LiquidGlassCard};
use super::hover::GradientTextHover;
use super::PageMetadata;

#[component]
pub fn ProjectsWrapper() -> impl IntoView {
    let clicked = ArcTrigger::new();
    provide_context(clicked.clone());
    view! {
        <div class="mx-auto w-full max-w-5xl px-6 py-16">
            <div class="mb-10 text-center">
                <h1 class="mb-4 text-3xl font-bold lg:text-4xl">
                    <a href="/projects" on:click=move |_| clicked.notify()>
                        <GradientTextHover>"Projects"</GradientTextHover>
                    </a>
                </h1>
                <p class="mx-auto max-w-2xl text-lg text-muted">
                    "See all the cool projects I've worked on!"
                </p>
            </div>
            <Outlet />
        </div>
    }
}

#[server(input = GetUrl)]
pub async fn get_meta_server(pattern: String) -> Result<Vec<ProjectMeta>, ServerFnError> {
    get_meta(pattern).await.map_err(|e| {
        tracing::warn!("project search failed: {e}");
        ServerFnError::new(e)
    })
}

#[component]
pub fn ProjectsHome() -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();
    let projects = Resource::new(search, move |search| async move {
        let cache = &*GLOBAL_META_CACHE;
        if let Some(s) = cache.get(&search) {
            return (*s).clone();
        }
        let meta = get_meta_server(search.clone()).await.unwrap_or_default();
        // only cache all searches on the browser
        #[cfg(feature = "hydrate")]
        cache.insert(search, meta.clone());
        meta
    });

    let header_clicked = expect_context::<ArcTrigger>();
    Effect::watch(
        move || header_clicked.track(),
        move |_, _, _| {
            let Some(el) = input_ref.get_untracked() else {
                return;
            };
            set_search(String::new());
            el.set_value("");
        },
        false,
    );

    view! {
        <PageMetadata path="/projects" />
        <form
            class="mb-8 flex flex-col items-start gap-3 sm:flex-row sm:items-center"
            on:submit=move |ev| {
                ev.prevent_default();
                let Some(el) = input_ref.get_untracked() else {
                    return;
                };
                set_search(el.value());
            }
        >
            <label for="project_search" class="whitespace-nowrap font-medium text-lush-600 dark:text-lush-300">
                "Search projects:"
            </label>
            <input
                id="project_search"
                class="w-full flex-grow rounded-full border border-foreground/20 bg-background/60 px-4 py-2 placeholder-muted transition-all duration-200 focus:border-lush-500 focus:outline-none focus:ring-2 focus:ring-lush-500 sm:max-w-md"
                node_ref=input_ref
                placeholder="java, booking, pygame..."
            />
            <button
                type="submit"
                class="whitespace-nowrap rounded-full border border-lush-500/30 bg-lush-500/10 px-5 py-2 text-lush-700 transition-all duration-200 hover:bg-lush-500/20 dark:text-lush-300"
            >
                "Search"
            </button>
        </form>
        <Transition fallback=move || {
            view! {
                <div class="grid gap-6 md:grid-cols-2">
                    <div class="loading-skeleton h-40 rounded-3xl"></div>
                    <div class="loading-skeleton h-40 rounded-3xl"></div>
                    <div class="loading-skeleton h-40 rounded-3xl"></div>
                    <div class="loading-skeleton h-40 rounded-3xl"></div>
                </div>
            }
        }>
            {move || Suspend::new(async move {
                let projects = projects.await;
                if projects.is_empty() {
                    return view! {
                        <p class="text-center text-muted">"No projects match that search."</p>
                    }
                        .into_any();
                }
                view! {
                    <div class="grid gap-6 md:grid-cols-2">
                        {projects
                            .into_iter()
                            .map(|project| view! { <ProjectCard project=project /> })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            })}
        </Transition>
    }
}

#[component]
fn ProjectCard(project: ProjectMeta) -> impl IntoView {
    view! {
        <A href=project.slug attr:class="block h-full transition-transform duration-200 hover:-translate-y-1">
            <LiquidGlassCard intensity=GlassIntensity::Sm class="h-full" content_class="flex h-full flex-col gap-3">
                <div class="flex items-baseline justify-between gap-2">
                    <h2 class="text-xl font-semibold">{project.title}</h2>
                    <span class="text-sm text-muted">
                        {project.date.format("%b %Y").to_string()}
                    </span>
                </div>
                <p class="flex-grow text-foreground/80">{project.description}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class="rounded-full bg-breeze-500/15 px-2 py-1 text-xs text-breeze-700 dark:text-breeze-300">
                                    {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </LiquidGlassCard>
        </A>
    }
}

#[server(input = GetUrl)]
pub async fn get_project_server(slug: String) -> Result<Project, ServerFnError> {
    get_project(slug).await.map_err(ServerFnError::new)
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();
    let project = Resource::new(slug, move |slug| async move {
        let cache = &*GLOBAL_PROJECT_CACHE;
        if let Some(s) = cache.get(&slug) {
            return (*s)
                .clone()
                .ok_or(ServerFnError::new("Couldn't get project"));
        }
        let project = get_project_server(slug.clone()).await;
        // misses stay uncached, and only the browser keeps a copy
        #[cfg(feature = "hydrate")]
        if let Ok(p) = &project {
            cache.insert(slug, Some(p.clone()));
        }
        project
    });

    view! {
        {move || view! { <PageMetadata path=format!("/projects/{}", slug()) /> }}
        <A href="/projects" attr:class="mb-6 inline-block text-sm text-muted hover:text-lush-500">
            "← All projects"
        </A>
        <Suspense>
            {move || Suspend::new(async move {
                match project.await {
                    Ok(p) => {
                        view! {
                            <LiquidGlassCard intensity=GlassIntensity::Lg content_class="p-6 sm:p-10">
                                <div class="mb-6 flex flex-wrap items-center gap-4 text-sm">
                                    <span class="font-medium text-lush-600 dark:text-lush-300">
                                        {p.meta.date.format("%B %Y").to_string()}
                                    </span>
                                    {p
                                        .meta
                                        .repo
                                        .map(|repo| {
                                            view! {
                                                <a
                                                    href=repo
                                                    target="_blank"
                                                    rel="noreferrer"
                                                    class="text-breeze-600 underline dark:text-breeze-300"
                                                >
                                                    "Source"
                                                </a>
                                            }
                                        })}
                                    <div class="flex flex-wrap gap-1">
                                        {p
                                            .meta
                                            .tags
                                            .into_iter()
                                            .map(|tag| {
                                                view! {
                                                    <span class="rounded bg-lush-500/15 px-2 py-1 text-xs">
                                                        {tag}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                                <article class="prose max-w-none dark:prose-invert">
                                    <div inner_html=p.content></div>
                                </article>
                            </LiquidGlassCard>
                        }
                            .into_any()
                    }
                    Err(_) => {
                        view! {
                            <p class="py-16 text-center text-muted">
                                "That project doesn't exist (yet)."
                            </p>
                        }
                            .into_any()
                    }
                }
            })}
        </Suspense>
    }
}
