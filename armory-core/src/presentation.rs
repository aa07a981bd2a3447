//! Classification of the popup's presentation state.

/// How the popup renders. One render arm per variant; the choice is made by
/// [`classify`] alone so every call site agrees on the same branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    /// Nothing to show; render no DOM at all.
    Hidden,
    /// Full-width slide-up panel, not anchored to the trigger.
    MobileSheet,
    /// Floating panel anchored to the trigger element.
    DesktopPopover,
}

impl PresentationMode {
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Derive the presentation mode from the popup's inputs.
///
/// Total over all input combinations: a popup request with a resolvable item
/// and a usable actions model shows as sheet or popover depending on the
/// device class; anything missing collapses to `Hidden`. No partial popup is
/// ever shown.
#[must_use]
pub const fn classify(
    has_request: bool,
    has_item: bool,
    has_actions: bool,
    phone_portrait: bool,
) -> PresentationMode {
    if !has_request || !has_item || !has_actions {
        return PresentationMode::Hidden;
    }
    if phone_portrait {
        PresentationMode::MobileSheet
    } else {
        PresentationMode::DesktopPopover
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_input_combination_yields_one_mode() {
        for has_request in [false, true] {
            for has_item in [false, true] {
                for has_actions in [false, true] {
                    for phone in [false, true] {
                        let mode = classify(has_request, has_item, has_actions, phone);
                        let expected = if has_request && has_item && has_actions {
                            if phone {
                                PresentationMode::MobileSheet
                            } else {
                                PresentationMode::DesktopPopover
                            }
                        } else {
                            PresentationMode::Hidden
                        };
                        assert_eq!(mode, expected);
                    }
                }
            }
        }
    }

    #[test]
    fn missing_actions_model_hides_even_on_desktop() {
        assert!(classify(true, true, false, false).is_hidden());
    }
}
