#![allow(clippy::float_cmp)]

use super::*;
use crate::config::FieldFormat;

// =============================================================
// Helpers
// =============================================================

fn ready_editor(native_width: f64, rendered_width: f64) -> EditorCore {
    ready_editor_with(WidgetConfig::default(), native_width, rendered_width)
}

fn ready_editor_with(config: WidgetConfig, native_width: f64, rendered_width: f64) -> EditorCore {
    let mut editor = EditorCore::new(config);
    let attr = format!("0 0 {native_width} 600");
    match editor.start(Some(&attr), rendered_width) {
        Ok(Resolution::Ready(_)) => editor,
        other => panic!("expected ready editor, got {other:?}"),
    }
}

fn click(editor: &mut EditorCore, x: f64, y: f64) -> Render {
    editor.click(Point::new(x, y), Offset::default()).1
}

fn pairs(points_attr: &str) -> Vec<&str> {
    points_attr.split_whitespace().collect()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_editor_is_uninitialized_and_empty() {
    let editor = EditorCore::new(WidgetConfig::default());
    assert_eq!(editor.state(), ResolveState::Uninitialized);
    assert!(editor.points().is_empty());
    assert_eq!(editor.mode(), DisplayMode::Tag);
}

#[test]
fn initial_mode_comes_from_config() {
    let config = WidgetConfig { initial_mode: DisplayMode::Points, ..Default::default() };
    let editor = EditorCore::new(config);
    assert_eq!(editor.render().mode, DisplayMode::Points);
}

#[test]
fn fresh_render_is_empty() {
    let render = EditorCore::new(WidgetConfig::default()).render();
    assert_eq!(render.points_attr, "");
    assert_eq!(render.field_value, "");
}

// =============================================================
// Synchronous viewbox path
// =============================================================

#[test]
fn start_with_known_viewbox_is_ready() {
    let mut editor = EditorCore::new(WidgetConfig::default());
    let res = editor.start(Some("0 0 1000 500"), 500.0);
    assert!(matches!(res, Ok(Resolution::Ready(s)) if s.value() == 2.0));
    assert!(editor.is_ready());
}

#[test]
fn comma_separated_viewbox_resolves_without_fetch() {
    let config = WidgetConfig { fetch_viewbox: false, ..Default::default() };
    let mut editor = EditorCore::new(config);
    let res = editor.start(Some("0,0,800,600"), 400.0);
    assert!(matches!(res, Ok(Resolution::Ready(s)) if s.value() == 2.0));
    assert!(editor.is_ready());
}

#[test]
fn sync_path_maps_click_by_viewbox_over_rendered_width() {
    let (w, b) = (1920.0, 640.0);
    let mut editor = ready_editor(w, b);
    let (outcome, _) = editor.click(Point::new(100.0, 33.3), Offset::default());
    let expected = Point::new(round(100.0 * w / b), round(33.3 * w / b));
    assert_eq!(outcome, ClickOutcome::Added(expected));
}

fn round(v: f64) -> f64 {
    (v * 1000.0 + 0.5).floor() / 1000.0
}

#[test]
fn start_with_zero_rendered_width_fails() {
    let mut editor = EditorCore::new(WidgetConfig::default());
    let res = editor.start(Some("0 0 800 600"), 0.0);
    assert!(matches!(res, Err(WidgetError::NoScale(_))));
    assert_eq!(editor.state(), ResolveState::Failed);
}

#[test]
fn start_with_malformed_viewbox_fails() {
    let mut editor = EditorCore::new(WidgetConfig::default());
    assert!(matches!(editor.start(Some("0 0 wide tall"), 400.0), Err(WidgetError::ViewBox(_))));
    assert_eq!(editor.state(), ResolveState::Failed);
}

// =============================================================
// Asynchronous viewbox path
// =============================================================

#[test]
fn placeholder_requests_fetch() {
    let mut editor = EditorCore::new(WidgetConfig::default());
    let res = editor.start(Some("0 0 None None"), 400.0);
    assert!(matches!(res, Ok(Resolution::NeedsFetch)));
    assert_eq!(editor.state(), ResolveState::Resolving);
}

#[test]
fn placeholder_with_fetch_disabled_fails() {
    let config = WidgetConfig { fetch_viewbox: false, ..Default::default() };
    let mut editor = EditorCore::new(config);
    let res = editor.start(Some("0 0 None None"), 400.0);
    assert!(matches!(res, Err(WidgetError::FetchUnavailable(_))));
    assert_eq!(editor.state(), ResolveState::Failed);
}

#[test]
fn async_path_uses_fetched_viewbox_after_resolution() {
    let mut editor = EditorCore::new(WidgetConfig::default());
    let rendered = 400.0;
    assert!(matches!(editor.start(Some("0 0 None None"), rendered), Ok(Resolution::NeedsFetch)));

    // Stub response body's root viewBox.
    let fetched: ViewBox = match "0 0 800 600".parse() {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    };
    let scale = editor.resolve_with(fetched).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(scale.value(), 800.0 / rendered);

    let (outcome, _) = editor.click(Point::new(10.0, 20.0), Offset::default());
    assert_eq!(outcome, ClickOutcome::Added(Point::new(20.0, 40.0)));
}

#[test]
fn click_before_resolution_does_not_error() {
    let mut editor = EditorCore::new(WidgetConfig::default());
    assert!(matches!(editor.start(Some("0 0 None None"), 400.0), Ok(Resolution::NeedsFetch)));
    let (outcome, render) = editor.click(Point::new(10.0, 20.0), Offset::default());
    assert_eq!(outcome, ClickOutcome::NotReady);
    assert_eq!(render.field_value, "");
    assert!(editor.points().is_empty());
}

#[test]
fn click_while_uninitialized_is_dropped() {
    let mut editor = EditorCore::new(WidgetConfig::default());
    let (outcome, _) = editor.click(Point::new(1.0, 1.0), Offset::default());
    assert_eq!(outcome, ClickOutcome::NotReady);
}

#[test]
fn failed_resolution_drops_clicks() {
    let mut editor = EditorCore::new(WidgetConfig::default());
    assert!(matches!(editor.start(None, 400.0), Ok(Resolution::NeedsFetch)));
    editor.fail_resolution(&WidgetError::Fetch("404".to_owned()));
    assert_eq!(editor.state(), ResolveState::Failed);
    let (outcome, _) = editor.click(Point::new(1.0, 1.0), Offset::default());
    assert_eq!(outcome, ClickOutcome::NotReady);
}

// =============================================================
// Clicks and serialization
// =============================================================

#[test]
fn clicks_serialize_in_order_with_offset_and_scale() {
    let mut editor = ready_editor(1200.0, 400.0);
    let offset = Offset { left: 20.0, top: 100.0 };
    let clicks = [(21.0, 101.0), (120.5, 150.25), (60.0, 300.0), (20.0, 100.0)];
    let mut render = editor.render();
    for (x, y) in clicks {
        render = editor.click(Point::new(x, y), offset).1;
    }

    let expected: Vec<String> = clicks
        .iter()
        .map(|&(x, y)| format!("{},{}", round((x - 20.0) * 3.0), round((y - 100.0) * 3.0)))
        .collect();
    assert_eq!(pairs(&render.points_attr), expected);
    assert_eq!(render.field_value, format!(r#"<polygon points="{}"></polygon>"#, render.points_attr));
}

#[test]
fn points_attr_trailing_delimiter_matches_point_count() {
    let mut editor = ready_editor(100.0, 100.0);
    click(&mut editor, 1.0, 2.0);
    let render = click(&mut editor, 3.0, 4.0);
    assert_eq!(render.points_attr, "1,2 3,4 ");
}

#[test]
fn add_point_appends_native_point() {
    let mut editor = ready_editor(100.0, 100.0);
    let render = editor.add_point(Point::new(5.5, 6.0));
    assert_eq!(render.points_attr, "5.5,6 ");
}

// =============================================================
// Undo / clear
// =============================================================

#[test]
fn undo_on_empty_is_noop() {
    let mut editor = ready_editor(100.0, 100.0);
    let render = editor.undo();
    assert_eq!(render.field_value, "");
    assert_eq!(render.points_attr, "");
}

#[test]
fn undo_removes_last_click_only() {
    let mut editor = ready_editor(100.0, 100.0);
    click(&mut editor, 1.0, 1.0);
    click(&mut editor, 2.0, 2.0);
    let render = editor.undo();
    assert_eq!(render.points_attr, "1,1 ");
}

#[test]
fn undo_last_point_empties_field() {
    let mut editor = ready_editor(100.0, 100.0);
    click(&mut editor, 1.0, 1.0);
    assert_eq!(editor.undo().field_value, "");
}

#[test]
fn clear_matches_fresh_state() {
    let mut editor = ready_editor(100.0, 100.0);
    let fresh = editor.render();
    for i in 0..5 {
        click(&mut editor, f64::from(i), f64::from(i));
    }
    assert_eq!(editor.clear(), fresh);
}

// =============================================================
// Display mode
// =============================================================

#[test]
fn mode_toggle_keeps_points() {
    let mut editor = ready_editor(100.0, 100.0);
    for i in 0..3 {
        click(&mut editor, f64::from(i), 1.0);
    }
    let before = editor.render();
    assert_eq!(editor.set_mode(DisplayMode::Points).mode, DisplayMode::Points);
    assert_eq!(editor.points().len(), 3);
    let after = editor.set_mode(DisplayMode::Tag);
    assert_eq!(after, before);
}

#[test]
fn default_format_writes_tag_in_points_mode() {
    let mut editor = ready_editor(100.0, 100.0);
    click(&mut editor, 1.0, 2.0);
    let render = editor.set_mode(DisplayMode::Points);
    assert_eq!(render.field_value, r#"<polygon points="1,2 "></polygon>"#);
}

#[test]
fn follow_mode_format_writes_bare_list_in_points_mode() {
    let config = WidgetConfig { field_format: FieldFormat::FollowMode, ..Default::default() };
    let mut editor = ready_editor_with(config, 100.0, 100.0);
    click(&mut editor, 1.0, 2.0);
    assert_eq!(editor.set_mode(DisplayMode::Points).field_value, "1,2 ");
    assert_eq!(editor.set_mode(DisplayMode::Tag).field_value, r#"<polygon points="1,2 "></polygon>"#);
}

// =============================================================
// Hydration
// =============================================================

#[test]
fn hydrate_is_ignored_by_default() {
    let mut editor = EditorCore::new(WidgetConfig::default());
    assert_eq!(editor.hydrate(r#"<polygon points="1,2 "></polygon>"#), Ok(()));
    assert!(editor.points().is_empty());
}

#[test]
fn hydrate_seeds_points_when_enabled() {
    let config = WidgetConfig { hydrate_initial: true, ..Default::default() };
    let mut editor = EditorCore::new(config);
    assert_eq!(editor.hydrate(r#"<polygon points="1,2 3,4 "></polygon>"#), Ok(()));
    assert_eq!(editor.render().points_attr, "1,2 3,4 ");
}

#[test]
fn hydrate_malformed_leaves_list_empty() {
    let config = WidgetConfig { hydrate_initial: true, ..Default::default() };
    let mut editor = EditorCore::new(config);
    assert!(editor.hydrate("garbage").is_err());
    assert!(editor.points().is_empty());
}

#[test]
fn hydrated_points_survive_undo_of_new_click() {
    let config = WidgetConfig { hydrate_initial: true, ..Default::default() };
    let mut editor = EditorCore::new(config);
    assert_eq!(editor.hydrate("1,2"), Ok(()));
    assert!(matches!(editor.start(Some("0 0 100 100"), 100.0), Ok(Resolution::Ready(_))));
    click(&mut editor, 5.0, 5.0);
    assert_eq!(editor.undo().points_attr, "1,2 ");
}
