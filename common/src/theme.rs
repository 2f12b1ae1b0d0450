use std::{fmt, str::FromStr};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    // class applied to the themed root, if any
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Light => "",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(anyhow::Error::msg(format!("unknown theme {other}"))),
        }
    }
}

/// Durable storage for the theme preference.
///
/// `load` returns `Ok(None)` when nothing has been stored yet.
pub trait ThemeStore {
    fn load(&self) -> Result<Option<Theme>>;

    fn save(&mut self, theme: Theme) -> Result<()>;
}

// current theme plus the store it persists into
//
// storage failures are never fatal: a failed load falls back to the default and a failed save
// keeps the new theme in memory for the rest of the session
#[derive(Clone, Debug)]
pub struct ThemeController<S: ThemeStore> {
    current: Theme,
    store: S,
}

impl<S: ThemeStore> ThemeController<S> {
    pub fn mount(store: S, default: Theme) -> Self {
        let current = match store.load() {
            Ok(Some(theme)) => theme,
            Ok(None) => default,
            Err(err) => {
                warn!(error = %err, "failed to load theme preference, using {default}");
                default
            }
        };

        ThemeController { current, store }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;

        if let Err(err) = self.store.save(theme) {
            warn!(error = %err, "failed to persist theme preference");
        }
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        next
    }
}
