use std::{cell::RefCell, rc::Rc};

use anyhow::Result;
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::error;

use portfolio_common::{LinkTarget, NavConfig, NavItem, ScrollState, ScrollTracker, Unsubscribe};

use super::{icons::Icon, music::MusicButton, theme_toggle::ThemeToggle};
use crate::{
    Route,
    common::dom::{BrowserViewport, DomLayout, on_scroll},
};

// feed every scroll event through the tracker and publish the result
//
// the tracker lives inside the listener, so it is dropped together with the subscription
fn track_scroll(config: &NavConfig, mut published: Signal<ScrollState>) -> Result<Unsubscribe> {
    let mut tracker = ScrollTracker::new(&config.nav, config.scroll)?;
    let viewport = BrowserViewport::new()?;
    let layout = DomLayout::new()?;

    on_scroll(move || {
        let state = tracker.observe(&viewport, &layout);

        if *published.peek() != *state {
            published.set(state.clone());
        }
    })
}

#[derive(Clone, PartialEq, Props)]
struct NavLinkProps {
    item: NavItem,
    active: bool,
    show_label: bool,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let item = props.item;
    let target = LinkTarget::for_href(&item.anchor);

    rsx! {
        a {
            class: if props.active { "nav-link active" } else { "nav-link" },
            href: "{item.anchor}",
            target: target.target,
            rel: target.rel,
            "aria-label": "{item.name}",
            if let Some(icon) = item.icon.clone() {
                Icon { name: icon }
            }
            if props.show_label {
                span { "{item.name}" }
            } else {
                span { class: "nav-label", "{item.name}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct DesktopNavProps {
    active_anchor: String,
}

#[component]
fn DesktopNav(props: DesktopNavProps) -> Element {
    let config = use_context::<Rc<NavConfig>>();

    rsx! {
        nav { class: "desktop-nav",
            div { class: "nav-container",
                div { class: "brand", "{config.brand}" }

                div { class: "nav-links",
                    for item in config.nav.iter() {
                        NavLink {
                            key: "{item.anchor}",
                            item: item.clone(),
                            active: item.is_active(&props.active_anchor),
                            show_label: true,
                        }
                    }
                }

                div { class: "nav-controls",
                    for link in config.social.iter() {
                        a {
                            key: "{link.url}",
                            class: "icon-button",
                            href: "{link.url}",
                            target: LinkTarget::for_href(&link.url).target,
                            rel: LinkTarget::for_href(&link.url).rel,
                            title: "{link.name}",
                            if let Some(icon) = link.icon.clone() {
                                Icon { name: icon }
                            }
                        }
                    }
                    MusicButton {}
                    ThemeToggle {}
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct MobileNavProps {
    active_anchor: String,
    visible: bool,
}

// bottom bar for narrow viewports, slides away while scrolling down
#[component]
fn MobileNav(props: MobileNavProps) -> Element {
    let config = use_context::<Rc<NavConfig>>();

    rsx! {
        div { class: if props.visible { "mobile-nav" } else { "mobile-nav hidden" },
            div { class: "nav-pill",
                for item in config.nav.iter() {
                    NavLink {
                        key: "{item.anchor}",
                        item: item.clone(),
                        active: item.is_active(&props.active_anchor),
                        show_label: false,
                    }
                }
                ThemeToggle {}
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let config = use_context::<Rc<NavConfig>>();
    let scroll_state = use_signal(|| ScrollState::initial(&config.nav));

    // attached on mount, detached on unmount
    let subscription = use_hook(|| {
        let attached = match track_scroll(&config, scroll_state) {
            Ok(subscription) => Some(subscription),
            Err(err) => {
                error!(error = %err, "failed to track scroll position");
                None
            }
        };
        Rc::new(RefCell::new(attached))
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });

    let state = scroll_state.read();

    rsx! {
        DesktopNav { active_anchor: state.active_anchor.clone() }
        MobileNav {
            active_anchor: state.active_anchor.clone(),
            visible: state.navbar_visible,
        }
        Outlet::<Route> {}
    }
}
