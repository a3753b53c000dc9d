//! Pages, modals and widgets of the chat desktop client
//! 
//! Everything here is built on the navigation contracts of `chat-core`
//! and drawn with egui.

pub mod components;
pub mod modals;
pub mod pages;
pub mod theme;

/// Re-export commonly used types
pub use components::{NavDrawer, NavItem};
pub use modals::AboutModal;
pub use pages::{LabelPage, MainPage};
pub use theme::{Theme, apply_theme};
