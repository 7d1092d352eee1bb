//! Integration tests for scroll-to-section navigation.

mod common;

use common::*;
use portfolio::core::content::page_layout;

#[test]
fn test_every_nav_item_has_a_target() {
    let layout = page_layout();
    let mut last = -1.0;
    for section in Section::ALL {
        let target = layout
            .target(section.anchor())
            .unwrap_or_else(|| panic!("no block for {:?}", section));
        assert!(target.relative_y > last, "sections must be in page order");
        assert!((0.0..=1.0).contains(&target.relative_y));
        last = target.relative_y;
    }
}

#[test]
fn test_missing_target_closes_menu() {
    let layout = page_layout();
    let mut nav = NavState::default();
    nav.toggle_menu();
    assert!(nav.mobile_menu_open);

    assert!(nav.scroll_to_section("portfolio", &layout).is_none());
    assert!(!nav.mobile_menu_open);
}

#[test]
fn test_found_target_closes_menu() {
    let layout = page_layout();
    let mut nav = NavState {
        mobile_menu_open: true,
    };
    let target = nav.scroll_to_section("contact", &layout).unwrap();
    assert_eq!(target.anchor, "contact");
    assert!(!nav.mobile_menu_open);
}

#[test]
fn test_anchor_match_is_case_sensitive() {
    let layout = page_layout();
    let mut nav = NavState::default();
    assert!(nav.scroll_to_section("About", &layout).is_none());
    assert!(nav.scroll_to_section("about", &layout).is_some());
}

#[test]
fn test_closed_menu_stays_closed() {
    let mut nav = NavState::default();
    nav.scroll_to_section("skills", &PageLayout::new());
    assert!(!nav.mobile_menu_open);
}

#[test]
fn test_pixel_offset_lands_on_section_start() {
    let layout = page_layout();
    let mut nav = NavState::default();
    let target = nav.scroll_to_section("contact", &layout).unwrap();

    let (content, viewport) = (6000.0, 820.0);
    let y = target.absolute_y(content, viewport);
    assert_eq!(y, (target.relative_y * content).min(content - viewport));
    // Earlier sections scroll less far.
    let about = layout.target("about").unwrap();
    assert!(about.absolute_y(content, viewport) < y);
}
