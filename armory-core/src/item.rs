use serde::{Deserialize, Serialize};

/// Instance id shared by all non-instanced items (stackables, currencies).
/// Items carrying this id are compared by value, never looked up by identity.
pub const NON_INSTANCED_ID: &str = "0";

/// Rarity classification. Drives styling only; the popup logic never
/// branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Tier {
    Exotic,
    Legendary,
    Rare,
    Uncommon,
    Common,
    Currency,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Tier {
    /// CSS class hook for tier coloring. Unknown and Currency render
    /// unstyled.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Exotic => "tier-exotic",
            Self::Legendary => "tier-legendary",
            Self::Rare => "tier-rare",
            Self::Uncommon => "tier-uncommon",
            Self::Common => "tier-common",
            Self::Unknown | Self::Currency => "",
        }
    }
}

/// A tracked objective on an item (quest steps, bounty progress).
/// Progress mutates upstream when the inventory refreshes, which is why the
/// popup re-resolves its displayed item against the live stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub description: String,
    #[serde(default)]
    pub progress: u32,
    #[serde(default = "default_completion_value")]
    pub completion_value: u32,
}

fn default_completion_value() -> u32 {
    1
}

impl Objective {
    #[must_use]
    pub const fn complete(&self) -> bool {
        self.progress >= self.completion_value
    }
}

/// A displayable inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Instance id. `"0"` for non-instanced items.
    pub id: String,
    /// Unique render key per item instance; stable across refreshes of the
    /// same instance, distinct between instances that share an id of `"0"`.
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub item_type: String,
    #[serde(default)]
    pub tier: Tier,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub equipped: bool,
    #[serde(default)]
    pub notransfer: bool,
    #[serde(default = "default_max_stack_size")]
    pub max_stack_size: u32,
    #[serde(default)]
    pub objectives: Vec<Objective>,
}

fn default_max_stack_size() -> u32 {
    1
}

impl Item {
    /// Whether this item is tracked by instance id across inventory
    /// refreshes. Non-instanced items are not.
    #[must_use]
    pub fn is_instanced(&self) -> bool {
        self.id != NON_INSTANCED_ID
    }
}
