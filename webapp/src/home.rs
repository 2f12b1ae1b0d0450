use std::rc::Rc;

use dioxus::prelude::*;

use portfolio_common::NavConfig;

// one full-height section per navigation entry, so every anchor has something to scroll to
#[component]
pub fn Portfolio() -> Element {
    let config = use_context::<Rc<NavConfig>>();

    rsx! {
        main { class: "portfolio",
            for item in config.nav.iter() {
                section {
                    key: "{item.anchor}",
                    id: item.section_id(),
                    class: "portfolio-section",
                    h2 { "{item.name}" }
                    p { "This is the {item.name} section of {config.brand}'s portfolio." }
                }
            }
        }
    }
}
