// browser-independent state for the portfolio navigation bar
//
// everything in here is plain data plus small state machines, so the web app only has to wire
// them up to the DOM.  the capability traits (LayoutQuery, Viewport, ThemeStore) are the seams
// where the browser implementations plug in, and where the tests plug in fakes instead
pub mod audio;
pub mod config;
pub mod nav;
pub mod scroll;
pub mod subscription;
pub mod theme;

pub use audio::{MusicPlayer, PlaybackAction};
pub use config::NavConfig;
pub use nav::{LinkTarget, NavItem, SocialLink};
pub use scroll::{LayoutQuery, ScrollState, ScrollTracker, SectionGeometry, Viewport};
pub use subscription::Unsubscribe;
pub use theme::{Theme, ThemeController, ThemeStore};
