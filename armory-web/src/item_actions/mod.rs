//! Action controls rendered inside the item popup.

pub mod accessory_buttons;
pub mod desktop_actions;
pub mod move_locations;

pub use accessory_buttons::ItemAccessoryButtons;
pub use desktop_actions::DesktopItemActions;
pub use move_locations::ItemMoveLocations;

/// Organizer tags a user can put on an instanced item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemTag {
    Favorite,
    Keep,
    Junk,
    Archive,
}

impl ItemTag {
    pub const ALL: [Self; 4] = [Self::Favorite, Self::Keep, Self::Junk, Self::Archive];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Favorite => "Favorite",
            Self::Keep => "Keep",
            Self::Junk => "Junk",
            Self::Archive => "Archive",
        }
    }

    /// The single-key hotkey bound while an item popup is open.
    #[must_use]
    pub const fn hotkey(self) -> &'static str {
        match self {
            Self::Favorite => "f",
            Self::Keep => "k",
            Self::Junk => "j",
            Self::Archive => "a",
        }
    }
}

/// Map a pressed key to a tag, if any tag claims it.
#[must_use]
pub fn tag_for_key(key: &str) -> Option<ItemTag> {
    ItemTag::ALL
        .into_iter()
        .find(|tag| tag.hotkey().eq_ignore_ascii_case(key))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn every_tag_key_maps_back_to_its_tag() {
        for tag in ItemTag::ALL {
            assert_eq!(tag_for_key(tag.hotkey()), Some(tag));
            assert_eq!(tag_for_key(&tag.hotkey().to_uppercase()), Some(tag));
        }
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(tag_for_key("x"), None);
        assert_eq!(tag_for_key("Escape"), None);
    }

    #[test]
    fn tag_hotkeys_are_distinct() {
        let mut keys: Vec<&str> = ItemTag::ALL.iter().map(|t| t.hotkey()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ItemTag::ALL.len());
    }
}
