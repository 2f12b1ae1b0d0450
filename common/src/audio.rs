use tracing::{debug, error};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackAction {
    Play,
    Pause,
}

// background music toggle
//
// the player only tracks state and tells the caller what to do with the audio element.  it is
// not ready until the element reports it can play through, and toggling before that is a no-op
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MusicPlayer {
    ready: bool,
    playing: bool,
}

impl MusicPlayer {
    pub fn new() -> Self {
        MusicPlayer::default()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn mark_ready(&mut self) {
        if !self.ready {
            debug!("background music ready");
        }
        self.ready = true;
    }

    pub fn toggle(&mut self) -> Option<PlaybackAction> {
        if !self.ready {
            return None;
        }

        self.playing = !self.playing;

        Some(if self.playing {
            PlaybackAction::Play
        } else {
            PlaybackAction::Pause
        })
    }

    // the browser refused to start playback (autoplay policy, decode error, ...)
    pub fn playback_failed(&mut self, reason: &str) {
        error!(reason, "background music playback failed");
        self.playing = false;
    }

    pub fn title(&self) -> &'static str {
        match (self.ready, self.playing) {
            (false, _) => "Loading music...",
            (true, true) => "Pause music",
            (true, false) => "Play music",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_before_ready_is_noop() {
        let mut player = MusicPlayer::new();

        assert_eq!(player.toggle(), None);
        assert!(!player.is_playing());
        assert_eq!(player.title(), "Loading music...");
    }

    #[test]
    fn toggle_alternates() {
        let mut player = MusicPlayer::new();
        player.mark_ready();

        assert_eq!(player.title(), "Play music");
        assert_eq!(player.toggle(), Some(PlaybackAction::Play));
        assert!(player.is_playing());
        assert_eq!(player.title(), "Pause music");

        assert_eq!(player.toggle(), Some(PlaybackAction::Pause));
        assert!(!player.is_playing());
    }

    #[test]
    fn rejected_playback_returns_to_paused() {
        let mut player = MusicPlayer::new();
        player.mark_ready();

        player.toggle();
        player.playback_failed("NotAllowedError");

        assert!(!player.is_playing());
        assert!(player.is_ready());
        assert_eq!(player.toggle(), Some(PlaybackAction::Play));
    }
}
