//! Anchored positioning for the desktop popover.
//!
//! Placement prefers the right side of the anchor and flips left when the
//! popup would clip the right edge of its bound. The bound is the viewport,
//! optionally tightened by a boundary element looked up by CSS selector.
//! The math lives in [`compute_placement`] so it can be tested without a
//! DOM.

use crate::dom;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

const ANCHOR_GAP: f64 = 8.0;
const EDGE_MARGIN: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    fn from_dom_rect(rect: &web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    fn intersect(self, other: Self) -> Self {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Self {
            left,
            top,
            width: (right - left).max(0.0),
            height: (bottom - top).max(0.0),
        }
    }
}

/// Which side of the anchor the popup landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Right,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    /// Arrow offset from the popup's top edge, aimed at the anchor center.
    pub arrow_top: f64,
    pub side: Side,
}

/// Place a popup of `popup_size` next to `anchor`, kept inside `bound`.
#[must_use]
pub fn compute_placement(anchor: Rect, popup_size: (f64, f64), bound: Rect) -> Placement {
    let (width, height) = popup_size;

    let right_side = anchor.right() + ANCHOR_GAP;
    let (left, side) = if right_side + width <= bound.right() - EDGE_MARGIN {
        (right_side, Side::Right)
    } else {
        let left_side = anchor.left - ANCHOR_GAP - width;
        if left_side >= bound.left + EDGE_MARGIN {
            (left_side, Side::Left)
        } else {
            // Neither side fits; keep the preferred side, clamped.
            let clamped = (bound.right() - EDGE_MARGIN - width).max(bound.left + EDGE_MARGIN);
            (clamped, Side::Right)
        }
    };

    let top_min = bound.top + EDGE_MARGIN;
    let top_max = (bound.bottom() - EDGE_MARGIN - height).max(top_min);
    let top = (anchor.center_y() - height / 2.0).clamp(top_min, top_max);

    let arrow_top = (anchor.center_y() - top).clamp(EDGE_MARGIN, (height - EDGE_MARGIN).max(EDGE_MARGIN));

    Placement {
        left,
        top,
        arrow_top,
        side,
    }
}

fn viewport_rect() -> Rect {
    let window = dom::window();
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Rect {
        left: 0.0,
        top: 0.0,
        width,
        height,
    }
}

fn boundary_rect(selector: &str) -> Option<Rect> {
    let element = dom::document().query_selector(selector).ok().flatten()?;
    Some(Rect::from_dom_rect(&element.get_bounding_client_rect()))
}

fn apply_placement(contents: &Element, anchor: &Element, boundary_selector: Option<&str>) {
    let anchor_rect = Rect::from_dom_rect(&anchor.get_bounding_client_rect());
    let popup_rect = Rect::from_dom_rect(&contents.get_bounding_client_rect());

    let mut bound = viewport_rect();
    if let Some(boundary) = boundary_selector.and_then(boundary_rect) {
        bound = bound.intersect(boundary);
    }

    let placement = compute_placement(anchor_rect, (popup_rect.width, popup_rect.height), bound);

    let Some(html) = contents.dyn_ref::<web_sys::HtmlElement>() else {
        return;
    };
    let style = html.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("left", &format!("{}px", placement.left));
    let _ = style.set_property("top", &format!("{}px", placement.top));
    let _ = style.set_property("--arrow-top", &format!("{}px", placement.arrow_top));
    let side_class = match placement.side {
        Side::Right => ("placed-right", "placed-left"),
        Side::Left => ("placed-left", "placed-right"),
    };
    let _ = html.class_list().add_1(side_class.0);
    let _ = html.class_list().remove_1(side_class.1);
}

/// Position the element behind `contents` relative to `reference`. Runs
/// after render whenever the anchor identity or boundary selector changes;
/// with no anchor it does nothing.
#[hook]
pub fn use_popper(
    contents: NodeRef,
    reference: Option<Element>,
    boundary_selector: Option<AttrValue>,
) {
    use_effect_with(
        (contents, reference, boundary_selector),
        |(contents, reference, boundary_selector)| {
            if let (Some(popup), Some(anchor)) = (contents.cast::<Element>(), reference.as_ref()) {
                apply_placement(&popup, anchor, boundary_selector.as_deref());
            }
            || {}
        },
    );
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect {
        left: 0.0,
        top: 0.0,
        width: 1280.0,
        height: 800.0,
    };

    fn anchor_at(left: f64, top: f64) -> Rect {
        Rect {
            left,
            top,
            width: 60.0,
            height: 60.0,
        }
    }

    #[test]
    fn prefers_right_of_anchor() {
        let placement = compute_placement(anchor_at(100.0, 300.0), (320.0, 400.0), VIEWPORT);
        assert_eq!(placement.side, Side::Right);
        assert!((placement.left - 168.0).abs() < f64::EPSILON);
        // Vertically centered on the anchor.
        assert!((placement.top - 130.0).abs() < f64::EPSILON);
    }

    #[test]
    fn flips_left_when_right_edge_clips() {
        let placement = compute_placement(anchor_at(1100.0, 300.0), (320.0, 400.0), VIEWPORT);
        assert_eq!(placement.side, Side::Left);
        assert!(placement.left + 320.0 <= 1100.0);
    }

    #[test]
    fn clamps_when_neither_side_fits() {
        let narrow = Rect {
            left: 0.0,
            top: 0.0,
            width: 400.0,
            height: 800.0,
        };
        let placement = compute_placement(anchor_at(100.0, 300.0), (380.0, 200.0), narrow);
        assert!(placement.left >= narrow.left);
        assert!(placement.left + 380.0 <= narrow.right() + EDGE_MARGIN);
    }

    #[test]
    fn top_stays_inside_bound() {
        let placement = compute_placement(anchor_at(100.0, 10.0), (320.0, 400.0), VIEWPORT);
        assert!(placement.top >= VIEWPORT.top);
        let low = compute_placement(anchor_at(100.0, 760.0), (320.0, 400.0), VIEWPORT);
        assert!(low.top + 400.0 <= VIEWPORT.bottom());
    }

    #[test]
    fn arrow_points_at_anchor_center() {
        let anchor = anchor_at(100.0, 300.0);
        let placement = compute_placement(anchor, (320.0, 400.0), VIEWPORT);
        assert!((placement.top + placement.arrow_top - 330.0).abs() < f64::EPSILON);
    }

    #[test]
    fn boundary_intersection_tightens_the_bound() {
        let boundary = Rect {
            left: 200.0,
            top: 100.0,
            width: 600.0,
            height: 500.0,
        };
        let bound = VIEWPORT.intersect(boundary);
        assert_eq!(bound.left, 200.0);
        assert_eq!(bound.right(), 800.0);
        let placement = compute_placement(anchor_at(700.0, 300.0), (320.0, 300.0), bound);
        assert!(placement.left + 320.0 <= bound.right() + EDGE_MARGIN);
    }
}
