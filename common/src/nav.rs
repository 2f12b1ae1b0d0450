use serde::{Deserialize, Serialize};

/// A single entry of the navigation bar, pointing at a section of the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,

    // css selector of the section, e.g. "#hero"
    pub anchor: String,

    #[serde(default)]
    pub icon: Option<String>,
}

impl NavItem {
    pub fn new(name: &str, anchor: &str, icon: Option<&str>) -> Self {
        NavItem {
            name: name.to_owned(),
            anchor: anchor.to_owned(),
            icon: icon.map(str::to_owned),
        }
    }

    // the element id the anchor refers to
    pub fn section_id(&self) -> &str {
        self.anchor.trim_start_matches('#')
    }

    pub fn is_active(&self, active_anchor: &str) -> bool {
        self.anchor == active_anchor
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,

    #[serde(default)]
    pub icon: Option<String>,
}

/// Where a link opens, derived from its href.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkTarget {
    pub target: &'static str,
    pub rel: &'static str,
}

impl LinkTarget {
    pub fn for_href(href: &str) -> Self {
        if href.starts_with("http") {
            LinkTarget {
                target: "_blank",
                rel: "noopener noreferrer",
            }
        } else {
            LinkTarget {
                target: "_self",
                rel: "",
            }
        }
    }
}

pub fn default_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "#hero", Some("home")),
        NavItem::new("About", "#about", Some("user")),
        NavItem::new("Skills", "#skills", Some("code")),
        NavItem::new("Projects", "#projects", Some("briefcase")),
        NavItem::new("Testimonials", "#testimonials", Some("message-square")),
        NavItem::new("Contact", "#contact", Some("mail")),
    ]
}
