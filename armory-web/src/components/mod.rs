pub mod click_outside;
pub mod sheet;

pub use click_outside::ClickOutside;
pub use sheet::Sheet;
