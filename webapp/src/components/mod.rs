pub mod icons;
pub mod music;
pub mod navigation;
pub mod theme_toggle;
