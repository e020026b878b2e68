//! Row of links between the graduate detail pages.

use dioxus::prelude::*;
use grad_survey::nav::{nav_buttons, overview_link, ButtonVariant, PathResolver};

use super::NavIcon;

#[derive(Props, Clone, PartialEq)]
pub struct SectionNavProps {
    /// Page identifier of the page being shown
    pub current_page: String,
    /// Prefix for resolved page URLs
    #[props(default = String::new())]
    pub base_path: String,
}

/// Section buttons with the current page highlighted, followed by a link back
/// to the overview.
#[component]
pub fn SectionNav(props: SectionNavProps) -> Element {
    let resolver = PathResolver::new(props.base_path.clone());
    let buttons = nav_buttons(&props.current_page, &resolver);
    let overview = overview_link(&resolver);

    rsx! {
        nav {
            class: "section-nav",
            dir: "rtl",
            style: "display: flex; flex-wrap: wrap; gap: 8px; align-items: center; margin: 8px 0 16px 0;",
            for button in buttons.iter() {
                a {
                    key: "{button.entry.page}",
                    href: "{button.href}",
                    class: button.variant.class(),
                    "aria-current": aria_current(button.variant),
                    style: format!("{} {}", BUTTON_STYLE, variant_style(button.variant)),
                    NavIcon { icon: button.entry.icon }
                    "{button.entry.name}"
                }
            }
            a {
                class: "nav-overview-link",
                href: "{overview.href}",
                style: "display: inline-flex; align-items: center; gap: 4px; margin-inline-start: auto; font-size: 14px; color: #1565C0; text-decoration: none;",
                NavIcon { icon: overview.icon }
                "{overview.label}"
            }
        }
    }
}

const BUTTON_STYLE: &str = "display: inline-flex; align-items: center; gap: 6px; padding: 6px 12px; border-radius: 6px; text-decoration: none; font-size: 14px;";

fn variant_style(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Active => "background: #1565C0; color: #fff; border: 1px solid #1565C0;",
        ButtonVariant::Secondary => "background: #fff; color: #333; border: 1px solid #ccc;",
    }
}

fn aria_current(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Active => "page",
        ButtonVariant::Secondary => "false",
    }
}
