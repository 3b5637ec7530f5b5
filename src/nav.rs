//! Site navigation and per-route page metadata.

pub const SITE_TITLE: &str = "Kyle's Corner";
pub const SITE_DESCRIPTION: &str = "A personal portfolio website, showcasing... me!";

/// Routes that render without the footer.
const FOOTERLESS: &[&str] = &["/contact"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownItem {
    pub title: &'static str,
    pub link: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub link: &'static str,
    pub dropdown: &'static [DropdownItem],
}

impl NavItem {
    pub fn has_dropdown(&self) -> bool {
        !self.dropdown.is_empty()
    }

    /// `/` only matches itself; every other item also owns its sub-paths.
    pub fn is_active(&self, path: &str) -> bool {
        let path = normalize(path);
        if self.link == "/" {
            return path == "/";
        }
        path == self.link
            || path
                .strip_prefix(self.link)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

pub const PROJECT_ITEMS: &[DropdownItem] = &[
    DropdownItem {
        title: "Hatch Booking System",
        link: "/projects/hatch-booking-system",
        description: "Custom booking system used by McMaster Engineering!",
    },
    DropdownItem {
        title: "Island Builder",
        link: "/projects/island-builder",
        description: "Create islands with different biomes and connected cities!",
    },
    DropdownItem {
        title: "MediSafe",
        link: "/projects/medisafe",
        description: "Never take conflicting prescriptions again with Medisafe!",
    },
    DropdownItem {
        title: "MonPoke",
        link: "/projects/monpoke",
        description: "Catch your favourite MonPokes using python and pygame",
    },
    DropdownItem {
        title: "Piraten Kapern",
        link: "/projects/piraten-kapern",
        description: "A fun implementation of a game with the same name using Java",
    },
    DropdownItem {
        title: "Infinity Chess",
        link: "/projects/infinity-chess",
        description: "A Chess variant where pieces can wrap around the walls",
    },
];

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        title: "Home",
        link: "/",
        dropdown: &[],
    },
    NavItem {
        title: "Projects",
        link: "/projects",
        dropdown: PROJECT_ITEMS,
    },
    NavItem {
        title: "Experience",
        link: "/experience",
        dropdown: &[],
    },
    NavItem {
        title: "About Me",
        link: "/about-me",
        dropdown: &[],
    },
    NavItem {
        title: "Resume",
        link: "/resume",
        dropdown: &[],
    },
    NavItem {
        title: "Contact",
        link: "/contact",
        dropdown: &[],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

const PAGES: &[(&str, PageMeta)] = &[
    (
        "/",
        PageMeta {
            title: "Home",
            description: SITE_DESCRIPTION,
        },
    ),
    (
        "/about-me",
        PageMeta {
            title: "About Me",
            description: "A deep dive into my background, skills, and passion.",
        },
    ),
    (
        "/contact",
        PageMeta {
            title: "Contact",
            description: "Contact me if you'd like to chat!",
        },
    ),
    (
        "/experience",
        PageMeta {
            title: "Experience",
            description: "My work and volunteering experience, both technical and non-technical.",
        },
    ),
    (
        "/projects",
        PageMeta {
            title: "Projects",
            description: "See all the cool projects I've worked on!",
        },
    ),
    (
        "/resume",
        PageMeta {
            title: "Resume",
            description: "Want to see my resume? This website should be enough, but you can ask politely for it",
        },
    ),
    (
        "/projects/hatch-booking-system",
        PageMeta {
            title: "Projects - Hatch Booking System",
            description: "A booking system built in the McMaster Engineering Society to book Engineering study rooms.",
        },
    ),
    (
        "/projects/infinity-chess",
        PageMeta {
            title: "Projects - Infinity Chess",
            description: "A Chess variant where pieces can wrap around walls, going through one side and coming out the other.",
        },
    ),
    (
        "/projects/island-builder",
        PageMeta {
            title: "Projects - Island Builder",
            description: "A Java project which generated islands and cities on those islands.",
        },
    ),
    (
        "/projects/medisafe",
        PageMeta {
            title: "Projects - MediSafe",
            description: "An medication tracker app for warning users of negative drug interactions in their medications.",
        },
    ),
    (
        "/projects/monpoke",
        PageMeta {
            title: "Projects - MonPoke",
            description: "A fun game of catching MonPokes made with pygame.",
        },
    ),
    (
        "/projects/piraten-kapern",
        PageMeta {
            title: "Projects - Piraten Kapern",
            description: "A Java game based on the game with the same name.",
        },
    ),
];

pub const NOT_FOUND: PageMeta = PageMeta {
    title: "Page not found",
    description: SITE_DESCRIPTION,
};

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

pub fn page_meta(path: &str) -> PageMeta {
    let path = normalize(path);
    PAGES
        .iter()
        .find_map(|(p, meta)| (*p == path).then_some(*meta))
        .unwrap_or(NOT_FOUND)
}

pub fn footer_visible(path: &str) -> bool {
    !FOOTERLESS.contains(&normalize(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> &'static NavItem {
        NAV_ITEMS.iter().find(|i| i.title == title).unwrap()
    }

    #[test]
    fn test_home_only_matches_root() {
        let home = item("Home");
        assert!(home.is_active("/"));
        assert!(home.is_active(""));
        assert!(!home.is_active("/projects"));
    }

    #[test]
    fn test_section_owns_subpaths() {
        let projects = item("Projects");
        assert!(projects.is_active("/projects"));
        assert!(projects.is_active("/projects/"));
        assert!(projects.is_active("/projects/medisafe"));
        assert!(projects.is_active("/projects?tag=java"));
        assert!(!projects.is_active("/projectsx"));
        assert!(!projects.is_active("/"));
    }

    #[test]
    fn test_only_projects_has_dropdown() {
        let with_dropdown = NAV_ITEMS
            .iter()
            .filter(|i| i.has_dropdown())
            .map(|i| i.title)
            .collect::<Vec<_>>();
        assert_eq!(with_dropdown, vec!["Projects"]);
        assert_eq!(item("Projects").dropdown.len(), 6);
    }

    #[test]
    fn test_every_link_has_metadata() {
        for nav in NAV_ITEMS {
            assert_ne!(page_meta(nav.link), NOT_FOUND, "{}", nav.link);
            for sub in nav.dropdown {
                assert_ne!(page_meta(sub.link), NOT_FOUND, "{}", sub.link);
            }
        }
    }

    #[test]
    fn test_page_meta_lookup() {
        assert_eq!(page_meta("/contact/").title, "Contact");
        assert_eq!(page_meta("/projects/monpoke#top").title, "Projects - MonPoke");
        assert_eq!(page_meta("/nowhere"), NOT_FOUND);
    }

    #[test]
    fn test_footer_hidden_on_contact() {
        assert!(!footer_visible("/contact"));
        assert!(!footer_visible("/contact/"));
        assert!(footer_visible("/"));
        assert!(footer_visible("/projects"));
    }
}
