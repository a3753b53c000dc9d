//! Core navigation for the chat desktop client
//! 
//! This crate provides the page and modal contracts together with the
//! stacks and navigators that attach, stack, displace and tear them down.

pub mod events;
pub mod navigation;

// Re-export commonly used types
pub use events::{EventBus, Event, EventHandler, NavigationChanged, ModalShown, ModalDismissed};
pub use navigation::{
    Closable, GenericPageModal, KeyEventHandler, MasterPage, Modal, ModalRef, ModalStack,
    Navigable, Page, PageHost, PageNavigator, PageRef, PageStack, ReloadSignal,
    SimpleWindowNavigator, WindowNavigator,
};
