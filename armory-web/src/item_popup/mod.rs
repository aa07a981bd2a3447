//! The single item popup: visibility stream, container, and its
//! presentational pieces.

pub mod body;
pub mod container;
pub mod header;
pub mod stream;
pub mod tag_hotkeys;

pub use body::{ItemPopupBody, ItemPopupTab};
pub use container::ItemPopupContainer;
pub use header::ItemPopupHeader;
pub use stream::{
    PopupRequest, current_item_popup, hide_item_popup, show_item_popup, use_item_popup,
};
pub use tag_hotkeys::ItemTagHotkeys;
