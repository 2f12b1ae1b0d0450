use std::collections::HashSet;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::{
    nav::{NavItem, SocialLink, default_items},
    theme::Theme,
};

// the configuration shipped with the web app
pub const DEFAULT_CONFIG: &str = include_str!("../portfolio.toml");

// navigation bar configuration
//
// every table has defaults, so a document only needs to mention what it changes.  the nav list
// is ordered, and that order is the tie-break used when section ranges overlap
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NavConfig {
    pub brand: String,
    pub scroll: ScrollConfig,
    pub theme: ThemeConfig,
    pub music: MusicConfig,
    pub nav: Vec<NavItem>,
    pub social: Vec<SocialLink>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ScrollConfig {
    // viewports narrower than this get the hiding bottom bar
    pub mobile_breakpoint: f64,

    // the bottom bar only hides once scrolled past this offset
    pub hide_threshold: f64,

    // added to the scroll offset before matching sections, so the highlight
    // switches slightly before a section reaches the top of the viewport
    pub lookahead: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    // the web app prefixes this with "portfolio_" and stores the theme as json,
    // so the browser sees e.g. portfolio_theme = "\"dark\""
    pub storage_key: String,
    pub default: Theme,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct MusicConfig {
    pub url: String,
    pub volume: f64,
    pub looped: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            brand: String::from("Portfolio"),
            scroll: ScrollConfig::default(),
            theme: ThemeConfig::default(),
            music: MusicConfig::default(),
            nav: default_items(),
            social: Vec::new(),
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            mobile_breakpoint: 768.0,
            hide_threshold: 100.0,
            lookahead: 100.0,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            storage_key: String::from("theme"),
            default: Theme::Light,
        }
    }
}

impl Default for MusicConfig {
    fn default() -> Self {
        MusicConfig {
            url: String::from("/music.mp3"),
            volume: 0.5,
            looped: true,
        }
    }
}

impl NavConfig {
    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_toml(doc: &str) -> Result<Self> {
        debug!("parsing navigation config");

        let config: NavConfig = toml::from_str(doc)?;
        config.validate()?;

        debug!(items = config.nav.len(), "successfully parsed navigation config");
        Ok(config)
    }

    pub fn embedded() -> Result<Self> {
        NavConfig::from_toml(DEFAULT_CONFIG)
    }

    pub fn validate(&self) -> Result<()> {
        if self.nav.is_empty() {
            bail!("navigation needs at least one item");
        }

        let mut names = HashSet::new();
        let mut anchors = HashSet::new();

        for item in &self.nav {
            if !names.insert(item.name.as_str()) {
                bail!("duplicate navigation name {}", item.name);
            }

            if !anchors.insert(item.anchor.as_str()) {
                bail!("duplicate navigation anchor {}", item.anchor);
            }

            if !item.anchor.starts_with('#') || item.anchor.len() < 2 {
                bail!("navigation anchor {} must look like #section", item.anchor);
            }
        }

        for link in &self.social {
            if !link.url.starts_with("http") {
                bail!("social link {} must be an absolute url", link.name);
            }
        }

        let scroll = &self.scroll;
        if !(scroll.mobile_breakpoint.is_finite() && scroll.mobile_breakpoint > 0.0) {
            bail!("mobile_breakpoint must be positive");
        }

        if !(scroll.hide_threshold.is_finite() && scroll.hide_threshold >= 0.0) {
            bail!("hide_threshold must not be negative");
        }

        if !(scroll.lookahead.is_finite() && scroll.lookahead >= 0.0) {
            bail!("lookahead must not be negative");
        }

        if self.theme.storage_key.is_empty() {
            bail!("theme storage_key must not be empty");
        }

        if !(0.0..=1.0).contains(&self.music.volume) {
            bail!("music volume must be between 0 and 1");
        }

        Ok(())
    }
}
