//! Section navigation model for the graduate detail pages.

/// Glyphs used by the section navigator, drawn as 24x24 stroked SVG paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    User,
    GraduationCap,
    Shield,
    BookOpen,
    Briefcase,
    HeartHandshake,
    ChevronRight,
}

impl Icon {
    /// SVG path data, one entry per `<path>` element.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M12 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z",
            ],
            Icon::GraduationCap => &[
                "M22 10 12 5 2 10l10 5 10-5z",
                "M6 12v5c3 3 9 3 12 0v-5",
            ],
            Icon::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            Icon::BookOpen => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            ],
            Icon::Briefcase => &[
                "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z",
                "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
            ],
            Icon::HeartHandshake => &[
                "M19 14c1.5-1.5 3-3.2 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.8 0-3 .5-4.5 2-1.5-1.5-2.7-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4 3 5.5l7 7z",
                "M12 5 9 8a2 2 0 0 0 3 3l2-2 4 4",
            ],
            Icon::ChevronRight => &["m9 18 6-6-6-6"],
        }
    }

    /// Accessible name for screen readers.
    pub fn title(self) -> &'static str {
        match self {
            Icon::User => "user",
            Icon::GraduationCap => "graduation-cap",
            Icon::Shield => "shield",
            Icon::BookOpen => "book-open",
            Icon::Briefcase => "briefcase",
            Icon::HeartHandshake => "heart-handshake",
            Icon::ChevronRight => "chevron-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub name: &'static str,
    pub page: &'static str,
    pub icon: Icon,
}

/// Detail pages reachable from the section navigator, in display order.
pub const SECTION_PAGES: [NavEntry; 6] = [
    NavEntry {
        name: "פרטים אישיים",
        page: "PersonalDetails",
        icon: Icon::User,
    },
    NavEntry {
        name: "בגרות ופסיכומטרי",
        page: "Bagrut",
        icon: Icon::GraduationCap,
    },
    NavEntry {
        name: "שירות צבאי ולאומי",
        page: "Service",
        icon: Icon::Shield,
    },
    NavEntry {
        name: "לימודים אקדמיים",
        page: "Studies",
        icon: Icon::BookOpen,
    },
    NavEntry {
        name: "תעסוקה",
        page: "Employment",
        icon: Icon::Briefcase,
    },
    NavEntry {
        name: "התנדבות",
        page: "Volunteering",
        icon: Icon::HeartHandshake,
    },
];

pub const OVERVIEW_PAGE: &str = "Overview";
pub const OVERVIEW_LABEL: &str = "חזרה לסקירה כללית";

/// Resolves a page identifier to a URL.
pub trait PageResolver {
    fn page_url(&self, page: &str) -> String;
}

/// Maps `Some Page` to `{base}/Some-Page`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathResolver {
    base: String,
}

impl PathResolver {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl PageResolver for PathResolver {
    fn page_url(&self, page: &str) -> String {
        format!(
            "{}/{}",
            self.base.trim_end_matches('/'),
            page.trim().replace(' ', "-")
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Active,
    Secondary,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Active => "nav-button nav-button--active",
            ButtonVariant::Secondary => "nav-button nav-button--secondary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
    pub entry: NavEntry,
    pub href: String,
    pub variant: ButtonVariant,
}

/// One button per section page; only the page equal to `current_page` is active.
pub fn nav_buttons(current_page: &str, resolver: &impl PageResolver) -> Vec<NavButton> {
    SECTION_PAGES
        .iter()
        .map(|entry| NavButton {
            entry: *entry,
            href: resolver.page_url(entry.page),
            variant: if entry.page == current_page {
                ButtonVariant::Active
            } else {
                ButtonVariant::Secondary
            },
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewLink {
    pub label: &'static str,
    pub href: String,
    pub icon: Icon,
}

/// Link back to the overview page, present on every section page.
pub fn overview_link(resolver: &impl PageResolver) -> OverviewLink {
    OverviewLink {
        label: OVERVIEW_LABEL,
        href: resolver.page_url(OVERVIEW_PAGE),
        icon: Icon::ChevronRight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bagrut_is_the_only_active_button() {
        let buttons = nav_buttons("Bagrut", &PathResolver::default());
        assert_eq!(buttons.len(), 6);
        let active: Vec<&NavButton> = buttons
            .iter()
            .filter(|b| b.variant == ButtonVariant::Active)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].entry.name, "בגרות ופסיכומטרי");
        assert_eq!(
            buttons
                .iter()
                .filter(|b| b.variant == ButtonVariant::Secondary)
                .count(),
            5
        );
    }

    #[test]
    fn test_unknown_page_has_no_active_button() {
        let buttons = nav_buttons("Overview", &PathResolver::default());
        assert!(buttons.iter().all(|b| b.variant == ButtonVariant::Secondary));
    }

    #[test]
    fn test_path_resolver() {
        let root = PathResolver::default();
        assert_eq!(root.page_url("Bagrut"), "/Bagrut");
        assert_eq!(root.page_url("Graduate Details"), "/Graduate-Details");

        let nested = PathResolver::new("/alumni/");
        assert_eq!(nested.page_url("Studies"), "/alumni/Studies");
    }

    #[test]
    fn test_overview_link_always_present() {
        let link = overview_link(&PathResolver::new("/alumni"));
        assert_eq!(link.href, "/alumni/Overview");
        assert_eq!(link.icon, Icon::ChevronRight);
        assert_eq!(link.label, OVERVIEW_LABEL);
    }

    #[test]
    fn test_custom_resolver() {
        struct QueryResolver;
        impl PageResolver for QueryResolver {
            fn page_url(&self, page: &str) -> String {
                format!("/index.html?page={}", page)
            }
        }
        let buttons = nav_buttons("Studies", &QueryResolver);
        assert_eq!(buttons[3].href, "/index.html?page=Studies");
        assert_eq!(buttons[3].variant, ButtonVariant::Active);
    }

    #[test]
    fn test_section_pages_have_distinct_icons() {
        for (i, a) in SECTION_PAGES.iter().enumerate() {
            assert_ne!(a.icon, Icon::ChevronRight);
            for b in &SECTION_PAGES[i + 1..] {
                assert_ne!(a.icon, b.icon);
                assert_ne!(a.page, b.page);
            }
        }
    }
}
