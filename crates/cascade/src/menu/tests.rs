use std::sync::Arc;
use std::time::Duration;

use cascade_core::{Object, ObjectBase, ObjectId, global_registry, init_global_registry};
use cascade_render::{FixedAdvanceMeasure, Point, Size};
use parking_lot::Mutex;

use super::*;
use crate::widget::Widget;

struct Host {
    base: ObjectBase,
}

impl Host {
    fn new() -> Self {
        let host = Self {
            base: ObjectBase::new::<Self>(),
        };
        host.base.set_name("host");
        host
    }
}

impl Object for Host {
    fn object_id(&self) -> ObjectId {
        self.base.id()
    }
}

const STRIP_ORIGIN: Point = Point::new(0.0, 80.0);
const STRIP_HEIGHT: f32 = 44.0;
const HOST: Size = Size::new(320.0, 640.0);

fn menu_with(model: &Arc<dyn MenuModel>) -> (Host, DropDownMenu) {
    init_global_registry();
    let host = Host::new();
    let menu = DropDownMenu::new(STRIP_ORIGIN, STRIP_HEIGHT, HOST)
        .with_measure(Arc::new(FixedAdvanceMeasure::default()))
        .with_model(model);
    menu.widget_base()
        .set_parent(Some(host.object_id()))
        .unwrap();
    (host, menu)
}

fn two_column_model() -> Arc<dyn MenuModel> {
    Arc::new(
        StaticMenuModel::new()
            .with_column("Sort", ["A", "B", "C"])
            .with_column("Filter", ["All", "Open", "Done"]),
    )
}

fn tall_model(rows: usize) -> Arc<dyn MenuModel> {
    let titles: Vec<String> = (0..rows).map(|i| format!("Row {i}")).collect();
    Arc::new(StaticMenuModel::new().with_column("Pick", titles))
}

/// Run the in-flight transition to completion.
fn settle(menu: &mut DropDownMenu) {
    let mut guard = 0;
    while menu.is_animating() {
        menu.advance(Duration::from_millis(100));
        guard += 1;
        assert!(guard < 100, "transition failed to settle");
    }
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn configure_builds_one_visual_triple_per_column() {
    for count in 1..=4 {
        let titles: Vec<String> = (0..count).map(|i| format!("C{i}")).collect();
        let mut builder = StaticMenuModel::new();
        for title in &titles {
            builder.add_column(title.clone(), Vec::<String>::new());
        }
        let model: Arc<dyn MenuModel> = Arc::new(builder);
        let (_host, menu) = menu_with(&model);

        assert_eq!(menu.column_count(), count);
        for i in 0..count {
            let visual = menu.column(i).unwrap();
            assert_eq!(visual.title(), titles[i]);
            if i + 1 < count {
                let gap = menu.column(i + 1).unwrap().plate().left() - visual.plate().right();
                assert!(gap.abs() < 0.001, "adjacent plates must not overlap");
            }
        }
    }
}

#[test]
fn reconfigure_discards_previous_visuals() {
    let model = two_column_model();
    let (_host, mut menu) = menu_with(&model);
    assert_eq!(menu.column_count(), 2);

    let replacement: Arc<dyn MenuModel> =
        Arc::new(StaticMenuModel::new().with_column("Only", ["x"]));
    menu.set_model(&replacement);

    assert_eq!(menu.column_count(), 1);
    assert_eq!(menu.column(0).unwrap().title(), "Only");
    assert_eq!(menu.current_column(), None);
}

#[test]
fn set_model_while_open_closes_without_animation() {
    let model = two_column_model();
    let (_host, mut menu) = menu_with(&model);
    menu.show_column(0);
    settle(&mut menu);
    assert!(menu.is_open());

    menu.set_model(&model);
    assert!(!menu.is_open());
    assert!(!menu.is_animating());
    assert!(!menu.backdrop().is_attached());
    assert!(!menu.row_list().is_attached());
}

// =============================================================================
// State machine
// =============================================================================

#[test]
fn show_column_twice_returns_to_closed() {
    let model = two_column_model();
    let (_host, mut menu) = menu_with(&model);

    menu.show_column(0);
    settle(&mut menu);
    assert!(menu.is_open());
    assert!(menu.column(0).unwrap().is_highlighted());

    menu.show_column(0);
    settle(&mut menu);
    assert!(!menu.is_open());
    assert!(!menu.column(0).unwrap().is_highlighted());
    assert!(!menu.column(1).unwrap().is_highlighted());
    assert_eq!(menu.column(0).unwrap().rotation(), 0.0);
}

#[test]
fn switching_columns_is_mutually_exclusive() {
    let model = two_column_model();
    let (_host, mut menu) = menu_with(&model);

    menu.show_column(0);
    settle(&mut menu);
    menu.show_column(1);
    settle(&mut menu);

    assert!(menu.is_open());
    assert_eq!(menu.current_column(), Some(1));
    assert!(!menu.column(0).unwrap().is_highlighted());
    assert!(menu.column(1).unwrap().is_highlighted());
    assert_eq!(menu.column(0).unwrap().rotation(), 0.0);
    assert_eq!(
        menu.column(1).unwrap().rotation(),
        column::INDICATOR_OPEN_ROTATION
    );
}

#[test]
fn switching_resets_old_column_state_synchronously() {
    let model = two_column_model();
    let (_host, mut menu) = menu_with(&model);

    menu.show_column(0);
    // Re-tap a different column mid-animation.
    menu.advance(Duration::from_millis(50));
    menu.show_column(1);

    // Old column state is reset immediately, not at animation end.
    assert!(!menu.column(0).unwrap().is_highlighted());
    assert_eq!(menu.column(0).unwrap().rotation(), 0.0);
    assert_eq!(menu.current_column(), Some(1));
    assert!(menu.is_open());
}

#[test]
fn dismiss_closes_open_column() {
    let model = two_column_model();
    let (_host, mut menu) = menu_with(&model);

    menu.show_column(1);
    settle(&mut menu);
    menu.dismiss();
    settle(&mut menu);

    assert!(!menu.is_open());
    assert!(!menu.backdrop().is_attached());
    assert!(!menu.row_list().is_attached());

    // Dismiss on a closed menu is a no-op.
    menu.dismiss();
    assert!(!menu.is_animating());
}

// =============================================================================
// Row commit
// =============================================================================

#[test]
fn row_commit_updates_title_and_closes() {
    let model = two_column_model();
    let (_host, mut menu) = menu_with(&model);

    let received = Arc::new(Mutex::new(Vec::<IndexPath>::new()));
    let sink = received.clone();
    menu.row_selected.connect(move |&path| {
        sink.lock().push(path);
    });

    menu.show_column(0);
    settle(&mut menu);
    let before = menu.column(0).unwrap().indicator_center().x;

    // Tap the second row ("B") of the open list.
    let list_top = STRIP_ORIGIN.y + STRIP_HEIGHT;
    assert!(menu.tap_at(Point::new(10.0, list_top + 1.5 * DEFAULT_ROW_HEIGHT)));
    settle(&mut menu);

    assert_eq!(menu.column(0).unwrap().title(), "B");
    assert!(!menu.is_open());
    assert_eq!(received.lock().as_slice(), &[IndexPath::new(0, 1)]);

    // "B" is narrower than "Sort", so the indicator moved left with it.
    let after = menu.column(0).unwrap().indicator_center().x;
    assert!(after < before);
}

#[test]
fn select_row_commits_without_opening() {
    let model = two_column_model();
    let (_host, mut menu) = menu_with(&model);

    let received = Arc::new(Mutex::new(Vec::<IndexPath>::new()));
    let sink = received.clone();
    menu.row_selected.connect(move |&path| {
        sink.lock().push(path);
    });

    menu.select_row(2, 1);

    assert!(!menu.is_open());
    assert_eq!(menu.current_column(), Some(1));
    assert_eq!(menu.column(1).unwrap().title(), "Done");
    assert_eq!(received.lock().as_slice(), &[IndexPath::new(1, 2)]);
}

#[test]
fn committed_row_is_highlighted_on_reopen() {
    let model = two_column_model();
    let (_host, mut menu) = menu_with(&model);

    menu.select_row(1, 0);
    menu.show_column(0);
    settle(&mut menu);

    // The surface matches rows against the committed title.
    assert_eq!(menu.row_list().selected_title(), "B");
    assert_eq!(menu.row_list().row_title(1), "B");
    assert_eq!(menu.column(0).unwrap().title(), "B");
}

// =============================================================================
// Height policy
// =============================================================================

#[test]
fn list_height_caps_at_five_rows() {
    let model = tall_model(12);
    let (_host, mut menu) = menu_with(&model);

    menu.show_column(0);
    settle(&mut menu);

    assert_eq!(
        menu.row_list().widget_base().height(),
        5.0 * DEFAULT_ROW_HEIGHT
    );
}

#[test]
fn list_height_matches_row_count_below_cap() {
    let model = two_column_model();
    let (_host, mut menu) = menu_with(&model);

    menu.show_column(0);
    settle(&mut menu);
    assert_eq!(
        menu.row_list().widget_base().height(),
        3.0 * DEFAULT_ROW_HEIGHT
    );
}

struct FixedPanel(f32);

impl CustomPanel for FixedPanel {
    fn height(&self) -> f32 {
        self.0
    }
    fn paint(&self, _ctx: &mut crate::widget::PaintContext<'_>) {}
}

#[test]
fn custom_panel_overrides_list_height() {
    let model: Arc<dyn MenuModel> = Arc::new(
        StaticMenuModel::new().with_panel_column("Range", Arc::new(FixedPanel(400.0))),
    );
    let (_host, mut menu) = menu_with(&model);

    menu.show_column(0);
    settle(&mut menu);

    assert_eq!(menu.row_list().widget_base().height(), 400.0);
    assert!(!menu.row_list().is_scroll_enabled());
}

// =============================================================================
// Missing model / guards
// =============================================================================

#[test]
fn no_model_degrades_to_empty_single_column() {
    init_global_registry();
    let mut menu = DropDownMenu::new(STRIP_ORIGIN, STRIP_HEIGHT, HOST)
        .with_measure(Arc::new(FixedAdvanceMeasure::default()));

    assert_eq!(menu.column_count(), 1);
    assert_eq!(menu.column(0).unwrap().title(), "");
    assert_eq!(menu.row_title(IndexPath::new(0, 0)), "");

    menu.show_column(0);
    settle(&mut menu);
    assert!(menu.is_open());
    assert_eq!(menu.row_list().widget_base().height(), 0.0);
}

#[test]
fn dropped_model_degrades_to_defaults() {
    let model = two_column_model();
    let (_host, mut menu) = menu_with(&model);
    drop(model);

    menu.show_column(0);
    settle(&mut menu);
    assert!(menu.is_open());
    assert_eq!(menu.row_list().row_count(), 0);
    assert_eq!(menu.row_title(IndexPath::new(0, 1)), "");
}

#[test]
fn out_of_range_calls_are_no_ops() {
    let model = two_column_model();
    let (_host, mut menu) = menu_with(&model);

    menu.show_column(9);
    assert!(!menu.is_open());
    assert!(!menu.is_animating());

    menu.select_row(0, 9);
    assert_eq!(menu.current_column(), None);

    menu.set_column_title("X", 9);
    assert_eq!(menu.column(0).unwrap().title(), "Sort");
    assert_eq!(menu.column(1).unwrap().title(), "Filter");
}

#[test]
fn set_column_title_overwrites_in_range() {
    let model = two_column_model();
    let (_host, mut menu) = menu_with(&model);

    let indicator_before = menu.column(1).unwrap().indicator_center();
    menu.set_column_title("Status", 1);
    assert_eq!(menu.column(1).unwrap().title(), "Status");
    // Unlike a row commit, a direct title write leaves the indicator put.
    assert_eq!(menu.column(1).unwrap().indicator_center(), indicator_before);
}

// =============================================================================
// Tap routing
// =============================================================================

#[test]
fn strip_taps_map_to_columns() {
    let model = two_column_model();
    let (_host, mut menu) = menu_with(&model);

    assert!(menu.tap_at(Point::new(10.0, 100.0)));
    assert_eq!(menu.current_column(), Some(0));
    settle(&mut menu);

    assert!(menu.tap_at(Point::new(310.0, 100.0)));
    assert_eq!(menu.current_column(), Some(1));
}

#[test]
fn taps_outside_everything_are_ignored_when_closed() {
    let model = two_column_model();
    let (_host, mut menu) = menu_with(&model);

    assert!(!menu.tap_at(Point::new(10.0, 400.0)));
    assert!(!menu.is_open());
}

#[test]
fn backdrop_tap_dismisses_without_commit() {
    let model = two_column_model();
    let (_host, mut menu) = menu_with(&model);

    let received = Arc::new(Mutex::new(Vec::<IndexPath>::new()));
    let sink = received.clone();
    menu.row_selected.connect(move |&path| {
        sink.lock().push(path);
    });

    menu.show_column(0);
    settle(&mut menu);
    let title_before = menu.column(0).unwrap().title().to_string();

    // Below the 3-row list, on the dimmed area.
    assert!(menu.tap_at(Point::new(10.0, 500.0)));
    settle(&mut menu);

    assert!(!menu.is_open());
    assert!(received.lock().is_empty());
    assert_eq!(menu.column(0).unwrap().title(), title_before);
    assert!(!menu.backdrop().is_attached());
}

// =============================================================================
// Animation sequencing
// =============================================================================

#[test]
fn open_sequence_runs_indicator_then_backdrop_then_list() {
    let model = two_column_model();
    let (_host, mut menu) = menu_with(&model);

    menu.show_column(0);
    assert!(menu.is_animating());
    // State settles synchronously; only visuals lag.
    assert!(menu.is_open());
    assert!(menu.backdrop().is_attached());
    assert_eq!(menu.backdrop().opacity(), 0.0);

    // Mid-indicator: rotation moving, backdrop and list untouched.
    menu.advance(Duration::from_millis(125));
    let rotation = menu.displayed_indicator_rotation(0);
    assert!(rotation > 0.0 && rotation < column::INDICATOR_OPEN_ROTATION);
    assert_eq!(menu.backdrop().opacity(), 0.0);
    assert_eq!(menu.row_list().widget_base().height(), 0.0);

    // Indicator done (and the instantaneous title stage with it).
    menu.advance(Duration::from_millis(125));
    assert_eq!(
        menu.displayed_indicator_rotation(0),
        column::INDICATOR_OPEN_ROTATION
    );
    assert_eq!(menu.backdrop().opacity(), 0.0);

    // Mid-backdrop fade.
    menu.advance(Duration::from_millis(100));
    let opacity = menu.backdrop().opacity();
    assert!(opacity > 0.0 && opacity < 1.0);
    assert_eq!(menu.row_list().widget_base().height(), 0.0);

    // Backdrop done; list still collapsed.
    menu.advance(Duration::from_millis(100));
    assert_eq!(menu.backdrop().opacity(), 1.0);
    assert_eq!(menu.row_list().widget_base().height(), 0.0);

    // List grows to its content height and the transition ends.
    menu.advance(Duration::from_millis(200));
    assert!(!menu.is_animating());
    assert_eq!(
        menu.row_list().widget_base().height(),
        3.0 * DEFAULT_ROW_HEIGHT
    );
}

#[test]
fn close_detaches_surfaces_only_at_end() {
    let model = two_column_model();
    let (_host, mut menu) = menu_with(&model);

    menu.show_column(0);
    settle(&mut menu);
    menu.show_column(0);

    // Closing: state flips immediately, surfaces stay while animating.
    assert!(!menu.is_open());
    assert!(menu.backdrop().is_attached());
    assert!(menu.row_list().is_attached());

    settle(&mut menu);
    assert!(!menu.backdrop().is_attached());
    assert!(!menu.row_list().is_attached());
    assert_eq!(menu.row_list().widget_base().height(), 0.0);
}

#[test]
fn backdrop_does_not_flash_when_switching_columns() {
    let model = two_column_model();
    let (_host, mut menu) = menu_with(&model);

    menu.show_column(0);
    settle(&mut menu);
    assert_eq!(menu.backdrop().opacity(), 1.0);

    menu.show_column(1);
    // Already-shown backdrop keeps its opacity through the switch.
    menu.advance(Duration::from_millis(50));
    assert_eq!(menu.backdrop().opacity(), 1.0);
    settle(&mut menu);
    assert_eq!(menu.backdrop().opacity(), 1.0);
    assert!(menu.is_open());
}

// =============================================================================
// View tree
// =============================================================================

#[test]
fn open_stacks_strip_above_overlays() {
    let model = two_column_model();
    let (host, mut menu) = menu_with(&model);

    menu.show_column(0);
    let children = global_registry().unwrap().children(host.object_id()).unwrap();
    assert_eq!(children.len(), 3);
    // Back-to-front: backdrop, list, strip.
    assert_eq!(children[0], menu.backdrop().object_id());
    assert_eq!(children[1], menu.row_list().object_id());
    assert_eq!(children[2], menu.object_id());

    settle(&mut menu);
    menu.show_column(0);
    settle(&mut menu);
    let children = global_registry().unwrap().children(host.object_id()).unwrap();
    assert_eq!(children, vec![menu.object_id()]);
}
