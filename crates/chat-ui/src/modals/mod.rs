//! Modal overlays

pub mod about;

pub use about::AboutModal;
