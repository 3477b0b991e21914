//! Terminal rendition of the status-bar menu and entry popover

mod form;
mod menu;

pub(crate) use form::EntryForm;
pub(crate) use menu::StatusMenu;
