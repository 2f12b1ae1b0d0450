#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use portfolio_common::NavConfig;
use tracing::{Level, error};

mod common;

mod components;
use components::{navigation::NavBar, theme_toggle::ThemeContext};

mod home;
use home::Portfolio;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// single page, the navbar links are in-page anchors
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Portfolio {},
}

fn load_config() -> NavConfig {
    NavConfig::embedded().unwrap_or_else(|err| {
        error!(error = %err, "embedded navigation config is invalid, using defaults");
        NavConfig::default()
    })
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(|| Rc::new(load_config()));
    let theme = use_context_provider(|| ThemeContext::mount(&config.theme));
    let theme_class = theme.current().css_class();

    rsx! {
        style { "{common::style::PORTFOLIO_STYLES}" }
        div { class: "themed-root {theme_class}",
            Router::<Route> {}
        }
    }
}
