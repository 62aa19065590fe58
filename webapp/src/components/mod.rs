pub mod cabin_card;
pub mod icons;
pub mod navigation;
pub mod search;
pub mod theme_toggle;
