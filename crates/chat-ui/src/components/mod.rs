//! Reusable widgets

mod nav_drawer;

pub use nav_drawer::{NavDrawer, NavItem};
