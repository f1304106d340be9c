use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::attach::{PositionAttacher, Trigger};
use crate::scroll::Overflow;
use crate::test_utils::{BODY, FakeEvents, FakeTree, ManualScheduler};

fn fixed(dropup: bool) -> DropdownFlags {
    DropdownFlags { dropup, fixed: true }
}

// =============================================================
// Click handling
// =============================================================

#[test]
fn aria_expanded_mirrors_open_state() {
    assert_eq!(DropdownState::new(DropdownFlags::default(), true).aria_expanded(), "true");
    assert_eq!(DropdownState::new(DropdownFlags::default(), false).aria_expanded(), "false");
}

#[test]
fn click_toggles_and_blurs_on_close() {
    let mut state = DropdownState::default();

    let opened = state.click(30.0);
    assert!(opened.open);
    assert_eq!(opened.aria_expanded, "true");
    assert!(!opened.blur);

    let closed = state.click(30.0);
    assert!(!closed.open);
    assert_eq!(closed.aria_expanded, "false");
    assert!(closed.blur);
}

#[test]
fn plain_dropup_gets_static_transform() {
    let mut state = DropdownState::new(DropdownFlags { dropup: true, ..DropdownFlags::default() }, false);
    let effects = state.click(30.0);
    assert_eq!(effects.transform.as_deref(), Some("translateY(calc(-100% - 30px))"));
    assert!(!effects.request_position);
}

#[test]
fn fixed_menu_requests_position_instead_of_static_transform() {
    let mut state = DropdownState::new(fixed(true), false);
    let effects = state.click(30.0);
    assert_eq!(effects.transform, None);
    assert!(effects.request_position);

    // Closing still requests a position update.
    assert!(state.click(30.0).request_position);
}

#[test]
fn regular_menu_has_no_transform() {
    let mut state = DropdownState::default();
    assert_eq!(state.click(30.0).transform, None);
}

#[test]
fn close_clears_open() {
    let mut state = DropdownState::new(DropdownFlags::default(), true);
    state.close();
    assert!(!state.open);
    assert_eq!(state.aria_expanded(), "false");
}

// =============================================================
// Fixed transforms
// =============================================================

#[test]
fn fixed_transform_below_trigger() {
    assert_eq!(fixed_transform(false, 30.0, Offset::new(0.0, 50.0)), "translate(0px, -50px)");
}

#[test]
fn negative_scroll_translates_forward() {
    assert_eq!(fixed_transform(false, 30.0, Offset::new(-10.0, -5.0)), "translate(10px, 5px)");
    assert_eq!(fixed_transform(true, 30.0, Offset::new(-10.0, -5.0)), "translate(10px, calc(-100% - 25px))");
}

#[test]
fn dropup_overscrolled_past_its_trigger_stays_valid() {
    assert_eq!(fixed_offset_y(true, 30.0, -50.0), "calc(-100% + 20px)");
}

#[test]
fn unscrolled_menu_is_not_shifted() {
    assert_eq!(fixed_transform(false, 30.0, Offset::new(-0.0, 0.0)), "translate(0px, 0px)");
}

#[test]
fn fixed_transform_above_trigger() {
    assert_eq!(fixed_offset_y(true, 30.0, 20.0), "calc(-100% - 50px)");
    assert_eq!(fixed_transform(true, 30.0, Offset::new(10.0, 20.0)), "translate(-10px, calc(-100% - 50px))");
}

#[test]
fn fractional_offsets_are_kept() {
    assert_eq!(fixed_offset_y(false, 0.0, 12.5), "-12.5px");
}

// =============================================================
// End to end with the attacher
// =============================================================

fn attached_menu(
    dropup: bool,
    trigger_height: f64,
) -> (Rc<FakeTree>, ManualScheduler, FakeEvents, usize, Rc<RefCell<Vec<(Offset, String)>>>) {
    let tree = Rc::new(FakeTree::new());
    let scroller = tree.add(BODY);
    tree.set_overflow(scroller, Overflow::Auto, Overflow::Auto);
    let menu = tree.add(scroller);
    let scheduler = ManualScheduler::new();
    let events = FakeEvents::new();
    let state = DropdownState::new(fixed(dropup), true);

    let applied = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&applied);
    PositionAttacher::new(Rc::clone(&tree), scheduler.clone(), 15).attach(menu, &events, move |offset| {
        sink.borrow_mut().push((offset, state.fixed_transform(trigger_height, offset)));
    });
    applied.borrow_mut().clear();
    (tree, scheduler, events, scroller, applied)
}

#[test]
fn scrolled_container_translates_menu_up() {
    let (tree, scheduler, events, scroller, applied) = attached_menu(false, 30.0);

    tree.set_scroll(scroller, 0.0, 50.0);
    events.fire(&Trigger::AncestorScroll(scroller));
    scheduler.advance(15);

    assert_eq!(
        *applied.borrow(),
        vec![(Offset::new(0.0, 50.0), "translate(0px, -50px)".to_owned())]
    );
}

#[test]
fn scrolled_container_keeps_dropup_above_trigger() {
    let (tree, scheduler, events, scroller, applied) = attached_menu(true, 30.0);

    tree.set_scroll(scroller, 10.0, 20.0);
    events.fire(&Trigger::AncestorScroll(scroller));
    scheduler.advance(15);

    assert_eq!(
        *applied.borrow(),
        vec![(Offset::new(10.0, 20.0), "translate(-10px, calc(-100% - 50px))".to_owned())]
    );
}
