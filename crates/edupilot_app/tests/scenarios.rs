//! End-to-end behaviour of the primitives as the site uses them

use edupilot_animation::{RevealState, TickOutcome, TypedTextAnimator};
use edupilot_app::content;
use edupilot_app::{App, AppConfig, View};
use edupilot_core::{CyclerError, ItemCollection};
use edupilot_widgets::{ExclusiveToggleSet, PageMove, PageWindow, Route};

#[test]
fn test_course_grid_scenario() {
    let mut grid = PageWindow::new(content::course_catalog(), 6).unwrap();
    assert_eq!(grid.page_count(), 2);

    let ids: Vec<u32> = grid.visible_items().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

    assert_eq!(grid.advance(), PageMove::Moved { from: 0, to: 1 });
    let ids: Vec<u32> = grid.visible_items().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![7, 8, 9, 10, 11, 12]);

    grid.advance();
    assert_eq!(grid.current_page(), 0);

    grid.retreat();
    assert_eq!(grid.current_page(), 1);
}

#[test]
fn test_faq_scenario() {
    let mut faq = ExclusiveToggleSet::new(content::faqs());
    assert_eq!(faq.open_index(), None);

    faq.toggle(2).unwrap();
    assert_eq!(faq.open_index(), Some(2));
    faq.toggle(5).unwrap();
    assert_eq!(faq.open_index(), Some(5));
    faq.toggle(5).unwrap();
    assert_eq!(faq.open_index(), None);

    assert_eq!(
        faq.toggle(8),
        Err(CyclerError::OutOfRange { index: 8, len: 8 })
    );
    assert_eq!(faq.open_index(), None);
}

#[test]
fn test_typing_scenario() {
    let mut typing = TypedTextAnimator::new("Hi! I am Rishika!", 100).unwrap();
    typing.activate();
    assert_eq!(typing.visible_text(), "");

    typing.tick();
    assert_eq!(typing.visible_text(), "H");
    typing.tick();
    typing.tick();
    assert_eq!(typing.visible_text(), "Hi!");

    for _ in 3..16 {
        typing.tick();
    }
    assert_eq!(typing.tick(), TickOutcome::Completed);
    assert_eq!(typing.state(), RevealState::Complete);
    assert_eq!(typing.visible_text(), "Hi! I am Rishika!");
    assert_eq!(typing.tick(), TickOutcome::Ignored);

    typing.deactivate();
    typing.activate();
    assert_eq!(typing.visible_text(), "");
}

#[test]
fn test_page_sizes_cover_collection() {
    for n in [0usize, 1, 5, 6, 7, 12, 13] {
        let collection: ItemCollection<usize> = (0..n).collect();
        let mut window = PageWindow::new(collection, 6).unwrap();
        let mut seen = 0;
        for _ in 0..window.page_count() {
            assert!(window.visible_items().len() <= 6);
            seen += window.visible_items().len();
            window.advance();
        }
        assert_eq!(seen, n);
        assert_eq!(window.current_page(), 0);
    }
}

#[test]
fn test_unmount_cancels_all_timers() {
    let mut app = App::new(AppConfig::default()).unwrap();
    app.frame(250).unwrap();
    assert!(app.has_pending_work());

    app.login().unwrap();
    assert!(app.home_mut().unwrap().has_pending_work());

    app.navigate(Route::Contact).unwrap();
    assert!(!app.has_pending_work());
    app.frame(10_000).unwrap();

    app.navigate(Route::About).unwrap();
    let about = app.about_mut().unwrap();
    assert_eq!(about.typed_text(), "");
    assert!(about.has_pending_work());
}

#[test]
fn test_snapshot_serializes() {
    let mut app = App::new(AppConfig::default()).unwrap();
    app.login().unwrap();
    app.navigate(Route::Courses).unwrap();
    app.on_scroll(120.0);

    let json = serde_json::to_value(app.snapshot()).unwrap();
    assert_eq!(json["session"], "member");
    assert_eq!(json["route"], "courses");
    assert_eq!(json["nav"]["scrolled"], true);
    assert_eq!(json["view"]["view"], "courses");
    assert_eq!(json["view"]["courses"].as_array().unwrap().len(), 6);
    assert_eq!(json["view"]["buttons"][0]["kind"], "page");
}
