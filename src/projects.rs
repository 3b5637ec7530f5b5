use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};
#[cfg(feature = "ssr")]
use regex::RegexBuilder;

#[cfg(feature = "ssr")]
use crate::highlight::highlight;

pub static GLOBAL_PROJECT_CACHE: LazyLock<DashMap<String, Option<Project>>> =
    LazyLock::new(DashMap::new);
pub static GLOBAL_META_CACHE: LazyLock<DashMap<String, Vec<ProjectMeta>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "projects"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    description: String,
    date: DateTime<Utc>,
    tags: Vec<String>,
    repo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub repo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMeta,
    pub content: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Project not found")]
    NotFound,
    #[error("Couldn't parse project {0}")]
    Parse(String),
    #[error("Invalid search pattern")]
    InvalidPattern,
}

/// Slugs of every embedded project write-up, sorted.
pub fn project_slugs() -> Vec<String> {
    let mut slugs = Assets::iter()
        .filter_map(|s| s.strip_suffix(".md").map(str::to_string))
        .collect::<Vec<_>>();
    slugs.sort();
    slugs
}

#[cfg(feature = "ssr")]
fn read_source(file: &str) -> Result<String, ProjectError> {
    let content = Assets::get(file).ok_or(ProjectError::NotFound)?;
    String::from_utf8(content.data.into()).map_err(|_| ProjectError::Parse(file.to_string()))
}

#[cfg(feature = "ssr")]
fn parse_meta(slug: &str, source: &str) -> Result<ProjectMeta, ProjectError> {
    let matter = Matter::<YAML>::new();
    let fm = matter
        .parse_with_struct::<FrontMatter>(source)
        .ok_or_else(|| ProjectError::Parse(slug.to_string()))?;
    Ok(ProjectMeta {
        slug: slug.to_string(),
        title: fm.data.title,
        description: fm.data.description,
        date: fm.data.date,
        tags: fm.data.tags,
        repo: fm.data.repo,
    })
}

/// Metadata of every project whose source matches `pattern` (a
/// case-insensitive regex), newest first. The unfiltered list is cached.
#[cfg(feature = "ssr")]
pub async fn get_meta(pattern: String) -> Result<Vec<ProjectMeta>, ProjectError> {
    let cache = &*GLOBAL_META_CACHE;
    let is_base = pattern.trim().is_empty();
    if is_base {
        if let Some(r) = cache.get("") {
            return Ok(r.clone());
        }
    }
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .map_err(|_| ProjectError::InvalidPattern)?;

    let mut projects = Vec::new();
    for slug in project_slugs() {
        let source = read_source(&format!("{slug}.md"))?;
        if is_base || re.is_match(&source) {
            projects.push(parse_meta(&slug, &source)?);
        }
    }
    projects.sort_by(|a, b| b.date.cmp(&a.date));

    if is_base {
        cache.insert(String::new(), projects.clone());
    }
    Ok(projects)
}

#[cfg(feature = "ssr")]
fn render(slug: &str) -> Result<Project, ProjectError> {
    let source = read_source(&format!("{slug}.md"))?;
    let meta = parse_meta(slug, &source)?;
    let body = Matter::<YAML>::new().parse(&source).content;

    let parser = Parser::new_ext(&body, Options::all());
    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, highlight(parser));

    Ok(Project {
        meta,
        content: html_output,
    })
}

/// Rendered project for `slug`. Only embedded write-ups are cached, so
/// lookups of unknown slugs never grow the cache.
#[cfg(feature = "ssr")]
pub async fn get_project(slug: String) -> Result<Project, ProjectError> {
    let cache = &*GLOBAL_PROJECT_CACHE;
    if let Some(hit) = cache.get(&slug) {
        return hit.clone().ok_or(ProjectError::NotFound);
    }
    if Assets::get(&format!("{slug}.md")).is_none() {
        return Err(ProjectError::NotFound);
    }
    let project = render(&slug)?;
    cache.insert(slug, Some(project.clone()));
    Ok(project)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn block_on<F: std::future::Future>(f: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime")
            .block_on(f)
    }

    #[test]
    fn test_slugs_match_nav() {
        let slugs = project_slugs();
        for item in crate::nav::PROJECT_ITEMS {
            let slug = item.link.trim_start_matches("/projects/");
            assert!(slugs.iter().any(|s| s == slug), "missing {slug}");
        }
    }

    #[test]
    fn test_meta_sorted_newest_first() {
        let meta = block_on(get_meta(String::new())).unwrap();
        assert_eq!(meta.len(), project_slugs().len());
        assert!(meta.windows(2).all(|w| w[0].date >= w[1].date));
        assert!(GLOBAL_META_CACHE.contains_key(""));
    }

    #[test]
    fn test_meta_search() {
        let java = block_on(get_meta("java".to_string())).unwrap();
        assert!(java.iter().any(|p| p.slug == "island-builder"));
        assert!(java.iter().all(|p| p.slug != "medisafe"));

        assert_eq!(
            block_on(get_meta("(".to_string())),
            Err(ProjectError::InvalidPattern)
        );
    }

    #[test]
    fn test_render_project() {
        let project = block_on(get_project("infinity-chess".to_string())).unwrap();
        assert_eq!(project.meta.title, "Infinity Chess");
        assert!(project.content.contains("<p>"));
        // front matter is not rendered into the page
        assert!(!project.content.contains("description:"));
        // fenced code went through the highlighter
        assert!(project.content.contains("<pre"));
    }

    #[test]
    fn test_missing_projects_are_not_cached() {
        let before = GLOBAL_PROJECT_CACHE.len();
        for i in 0..500 {
            let err = block_on(get_project(format!("no-such-project-{i}"))).unwrap_err();
            assert_eq!(err, ProjectError::NotFound);
        }
        assert!(!GLOBAL_PROJECT_CACHE.contains_key("no-such-project-0"));
        // other tests may render real projects concurrently
        assert!(GLOBAL_PROJECT_CACHE.len() <= before + project_slugs().len());
    }
}
