use std::{cell::RefCell, rc::Rc};

use anyhow::Result;
use dioxus::prelude::*;
use tracing::{error, warn};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use portfolio_common::{MusicPlayer, NavConfig, PlaybackAction, Unsubscribe, config::MusicConfig};

use super::icons::Icon;
use crate::common::dom::{js_error, listen};

// the looping <audio> element behind the music button
//
// dropping it pauses playback and detaches the readiness listener
struct BackgroundAudio {
    element: HtmlAudioElement,
    _ready: Unsubscribe,
}

impl BackgroundAudio {
    fn load(config: &MusicConfig, mut player: Signal<MusicPlayer>) -> Result<Self> {
        let element = HtmlAudioElement::new_with_src(&config.url).map_err(js_error)?;
        element.set_loop(config.looped);
        element.set_volume(config.volume);
        element.set_preload("auto");

        let ready = listen(&element, "canplaythrough", move || {
            player.write().mark_ready();
        })?;

        Ok(BackgroundAudio {
            element,
            _ready: ready,
        })
    }

    fn play(&self, mut player: Signal<MusicPlayer>) {
        // play() resolves later, a rejection (e.g. autoplay policy) only shows up there
        match self.element.play() {
            Ok(promise) => {
                spawn(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        player.write().playback_failed(&format!("{err:?}"));
                    }
                });
            }
            Err(err) => player.write().playback_failed(&format!("{err:?}")),
        }
    }

    fn pause(&self) {
        if let Err(err) = self.element.pause() {
            warn!(error = ?err, "failed to pause background music");
        }
    }
}

impl Drop for BackgroundAudio {
    fn drop(&mut self) {
        self.pause();
    }
}

#[component]
pub fn MusicButton() -> Element {
    let config = use_context::<Rc<NavConfig>>();
    let mut player = use_signal(MusicPlayer::new);

    let audio = use_hook(|| {
        let audio = match BackgroundAudio::load(&config.music, player) {
            Ok(audio) => Some(audio),
            Err(err) => {
                // the button just stays disabled
                error!(error = %err, "failed to load background music");
                None
            }
        };
        Rc::new(RefCell::new(audio))
    });

    use_drop({
        let audio = audio.clone();
        move || {
            audio.borrow_mut().take();
        }
    });

    let toggle_music = move |_| {
        let action = player.write().toggle();

        if let (Some(action), Some(audio)) = (action, audio.borrow().as_ref()) {
            match action {
                PlaybackAction::Play => audio.play(player),
                PlaybackAction::Pause => audio.pause(),
            }
        }
    };

    let ready = player.read().is_ready();
    let title = player.read().title();
    let icon = if player.read().is_playing() { "volume-on" } else { "volume-off" };

    rsx! {
        button {
            class: "icon-button music-button",
            disabled: !ready,
            title: "{title}",
            onclick: toggle_music,
            Icon { name: icon.to_owned() }
        }
    }
}
