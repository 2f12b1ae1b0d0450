use dioxus::prelude::*;

use portfolio_common::{Theme, ThemeController, config::ThemeConfig};

use super::icons::Icon;
use crate::common::storage::LocalThemeStore;

// injected theme state
//
// provided once by the app root and read through use_context, so nothing outside the component
// tree touches the document to switch themes
#[derive(Clone, Copy)]
pub struct ThemeContext {
    controller: Signal<ThemeController<LocalThemeStore>>,
}

impl ThemeContext {
    pub fn mount(config: &ThemeConfig) -> Self {
        let store = LocalThemeStore::new(&config.storage_key);

        ThemeContext {
            controller: Signal::new(ThemeController::mount(store, config.default)),
        }
    }

    pub fn current(&self) -> Theme {
        self.controller.read().current()
    }

    pub fn set(&mut self, theme: Theme) {
        self.controller.write().set(theme);
    }

    pub fn toggle(&mut self) -> Theme {
        self.controller.write().toggle()
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<ThemeContext>();

    let icon = match theme.current() {
        Theme::Dark => "sun",
        Theme::Light => "moon",
    };

    rsx! {
        button {
            class: "icon-button",
            title: "Toggle theme",
            "aria-label": "Toggle theme",
            onclick: move |_| {
                theme.toggle();
            },
            Icon { name: icon.to_owned() }
        }
    }
}
