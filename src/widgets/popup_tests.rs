//! Tests for widgets/popup

use super::*;

#[test]
fn test_popup_above_anchor_basic() {
    let anchor = Rect::new(0, 20, 60, 3);

    let popup = popup_above_anchor(anchor, 40, 6, 2);

    assert_eq!(popup.x, 2);
    assert_eq!(popup.y, 14);
    assert_eq!(popup.width, 40);
    assert_eq!(popup.height, 6);
}

#[test]
fn test_popup_above_anchor_clamped_to_top() {
    let anchor = Rect::new(0, 3, 60, 3);

    let popup = popup_above_anchor(anchor, 40, 10, 0);

    assert_eq!(popup.y, 0);
    assert_eq!(popup.height, 3);
}

#[test]
fn test_popup_below_anchor_basic() {
    let bounds = Rect::new(0, 0, 80, 30);
    let anchor = Rect::new(4, 2, 50, 3);

    let popup = popup_below_anchor(anchor, 50, 8, bounds);

    assert_eq!(popup, Rect::new(4, 5, 50, 8));
}

#[test]
fn test_popup_below_anchor_clipped_to_bounds() {
    let bounds = Rect::new(0, 0, 80, 10);
    let anchor = Rect::new(0, 4, 50, 3);

    let popup = popup_below_anchor(anchor, 80, 8, bounds);

    assert_eq!(popup.y, 7);
    assert_eq!(popup.height, 3);
    assert_eq!(popup.width, 50);
}

#[test]
fn test_popup_near_anchor_prefers_below() {
    let bounds = Rect::new(0, 0, 80, 30);
    let anchor = Rect::new(0, 10, 50, 3);

    let popup = popup_near_anchor(anchor, 50, 6, bounds);

    assert_eq!(popup.y, 13);
}

#[test]
fn test_popup_near_anchor_flips_above_when_bottom_is_cramped() {
    let bounds = Rect::new(0, 0, 80, 24);
    let anchor = Rect::new(0, 19, 50, 3);

    let popup = popup_near_anchor(anchor, 50, 8, bounds);

    assert_eq!(popup.y, 11);
    assert_eq!(popup.height, 8);
}
