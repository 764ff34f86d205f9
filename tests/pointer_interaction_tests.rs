use std::cell::RefCell;
use std::rc::Rc;

use scatter_zoom::core::{Extent, ManualClock, Viewport, ZoomTransform};
use scatter_zoom::extensions::{Annotation, PlotHost};
use scatter_zoom::interaction::{GestureConfig, GestureKind};
use scatter_zoom::render::{NullRenderer, PointRenderer, RendererRole, ViewFrame};
use scatter_zoom::{ZoomController, ZoomControllerConfig, ZoomError};

/// Answers hit-tests from a shared slot so tests can move points under the cursor.
struct ScriptedRenderer {
    under_cursor: Rc<RefCell<Option<u32>>>,
}

impl PointRenderer<u32> for ScriptedRenderer {
    fn render(&mut self, _frame: &ViewFrame) -> scatter_zoom::ZoomResult<()> {
        Ok(())
    }

    fn pick(&mut self, _x: f64, _y: f64) -> Option<u32> {
        *self.under_cursor.borrow()
    }
}

#[derive(Default)]
struct HostLog {
    clicks: Vec<u32>,
    annotations: Vec<Vec<Annotation<u32>>>,
}

struct RecordingHost {
    log: Rc<RefCell<HostLog>>,
}

impl PlotHost<u32> for RecordingHost {
    fn on_point_click(&mut self, datum: &u32) {
        self.log.borrow_mut().clicks.push(*datum);
    }

    fn show_annotations(&mut self, annotations: &[Annotation<u32>]) {
        self.log.borrow_mut().annotations.push(annotations.to_vec());
    }
}

struct Fixture {
    controller: ZoomController<u32>,
    clock: ManualClock,
    under_cursor: Rc<RefCell<Option<u32>>>,
    log: Rc<RefCell<HostLog>>,
}

fn fixture_with(config: ZoomControllerConfig) -> Fixture {
    let clock = ManualClock::starting_at(1_000.0);
    let under_cursor = Rc::new(RefCell::new(None));
    let log = Rc::new(RefCell::new(HostLog::default()));

    let mut controller =
        ZoomController::with_clock(config, clock.clone()).expect("controller init");
    controller
        .attach_renderer(
            RendererRole::Primary,
            ScriptedRenderer {
                under_cursor: Rc::clone(&under_cursor),
            },
        )
        .expect("attach primary");
    controller.attach_extent_provider(Extent::new((0.0, 100.0), (0.0, 100.0)).expect("extent"));
    controller.attach_host(RecordingHost {
        log: Rc::clone(&log),
    });
    assert!(controller.initialize().expect("initialize"));

    Fixture {
        controller,
        clock,
        under_cursor,
        log,
    }
}

fn fixture() -> Fixture {
    fixture_with(ZoomControllerConfig::new(Viewport::new(100, 100)))
}

#[test]
fn short_press_on_point_reports_one_click() {
    let mut f = fixture();
    *f.under_cursor.borrow_mut() = Some(7);

    let pressed = f.controller.pointer_down(10.0, 10.0).expect("down");
    assert_eq!(pressed, Some(7));
    assert!(f.controller.gesture_state().is_dragging());

    f.clock.advance(80.0);
    let kind = f.controller.pointer_up(12.0, 13.0).expect("up");

    assert_eq!(kind, Some(GestureKind::Click));
    assert_eq!(f.log.borrow().clicks, vec![7]);
    assert!(!f.controller.gesture_state().is_dragging());
}

#[test]
fn distant_release_is_a_drag_without_click() {
    let mut f = fixture();
    *f.under_cursor.borrow_mut() = Some(3);

    f.controller.pointer_down(0.0, 0.0).expect("down");
    let kind = f.controller.pointer_up(60.0, 0.0).expect("up");

    assert_eq!(kind, Some(GestureKind::Drag));
    assert!(f.log.borrow().clicks.is_empty());
    assert!(!f.controller.gesture_state().is_dragging());
}

#[test]
fn long_press_stays_a_click_by_default() {
    let mut f = fixture();
    *f.under_cursor.borrow_mut() = Some(1);

    f.controller.pointer_down(5.0, 5.0).expect("down");
    f.clock.advance(5_000.0);
    let kind = f.controller.pointer_up(5.0, 5.0).expect("up");

    assert_eq!(kind, Some(GestureKind::Click));
    assert_eq!(f.log.borrow().clicks, vec![1]);
}

#[test]
fn long_press_counts_as_drag_when_enabled() {
    let config = ZoomControllerConfig::new(Viewport::new(100, 100)).with_gesture_config(
        GestureConfig {
            long_press_is_drag: true,
            ..GestureConfig::default()
        },
    );
    let mut f = fixture_with(config);
    *f.under_cursor.borrow_mut() = Some(1);

    f.controller.pointer_down(5.0, 5.0).expect("down");
    f.clock.advance(300.0);
    let kind = f.controller.pointer_up(5.0, 5.0).expect("up");

    assert_eq!(kind, Some(GestureKind::Drag));
    assert!(f.log.borrow().clicks.is_empty());
}

#[test]
fn press_on_empty_space_starts_nothing() {
    let mut f = fixture();

    let pressed = f.controller.pointer_down(40.0, 40.0).expect("down");
    assert_eq!(pressed, None);
    assert!(!f.controller.gesture_state().is_dragging());

    let kind = f.controller.pointer_up(40.0, 40.0).expect("up");
    assert_eq!(kind, None);
    assert!(f.log.borrow().clicks.is_empty());
}

#[test]
fn second_press_replaces_stale_gesture() {
    let mut f = fixture();
    *f.under_cursor.borrow_mut() = Some(1);
    f.controller.pointer_down(0.0, 0.0).expect("first down");

    *f.under_cursor.borrow_mut() = Some(2);
    f.controller.pointer_down(1.0, 1.0).expect("second down");

    assert_eq!(f.controller.gesture_state().target(), Some(&2));
    f.controller.pointer_up(1.0, 1.0).expect("up");
    assert_eq!(f.log.borrow().clicks, vec![2]);
}

#[test]
fn press_on_empty_space_discards_stale_gesture() {
    let mut f = fixture();
    *f.under_cursor.borrow_mut() = Some(1);
    f.controller.pointer_down(0.0, 0.0).expect("first down");

    *f.under_cursor.borrow_mut() = None;
    let pressed = f.controller.pointer_down(40.0, 40.0).expect("second down");

    assert_eq!(pressed, None);
    assert!(!f.controller.gesture_state().is_dragging());
    assert_eq!(f.controller.pointer_up(40.0, 40.0).expect("up"), None);
    assert!(f.log.borrow().clicks.is_empty());
}

#[test]
fn hovering_another_point_during_gesture_ends_it_without_click() {
    let mut f = fixture();
    *f.under_cursor.borrow_mut() = Some(4);
    f.controller.pointer_move(10.0, 10.0).expect("hover first");
    f.controller.pointer_down(10.0, 10.0).expect("down");

    *f.under_cursor.borrow_mut() = Some(5);
    f.clock.advance(100.0);
    f.controller.pointer_move(12.0, 10.0).expect("hover second");

    assert!(!f.controller.gesture_state().is_dragging());
    assert_eq!(f.controller.hovered(), Some(&5));
    assert_eq!(f.controller.pointer_up(12.0, 10.0).expect("up"), None);
    assert!(f.log.borrow().clicks.is_empty());
}

#[test]
fn hovering_same_point_keeps_gesture_alive() {
    let mut f = fixture();
    *f.under_cursor.borrow_mut() = Some(4);
    f.controller.pointer_move(10.0, 10.0).expect("hover");
    f.controller.pointer_down(10.0, 10.0).expect("down");

    f.clock.advance(100.0);
    f.controller.pointer_move(11.0, 10.0).expect("hover again");

    assert!(f.controller.gesture_state().is_dragging());
    assert_eq!(
        f.controller.pointer_up(11.0, 10.0).expect("up"),
        Some(GestureKind::Click)
    );
    assert_eq!(f.log.borrow().clicks, vec![4]);
}

#[test]
fn hover_emits_offset_annotation() {
    let mut f = fixture();
    *f.under_cursor.borrow_mut() = Some(9);

    assert!(f.controller.pointer_move(20.0, 25.0).expect("move"));

    let log = f.log.borrow();
    let last = log.annotations.last().expect("annotation batch");
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].data, 9);
    assert_eq!((last[0].x, last[0].y), (20.0, 25.0));
    assert_eq!((last[0].dx, last[0].dy), (0.0, 30.0));
    drop(log);
    assert_eq!(f.controller.hovered(), Some(&9));
}

#[test]
fn hover_over_empty_space_clears_annotations() {
    let mut f = fixture();

    assert!(f.controller.pointer_move(20.0, 25.0).expect("move"));

    let log = f.log.borrow();
    assert!(log.annotations.last().expect("batch").is_empty());
    drop(log);
    assert_eq!(f.controller.hovered(), None);
}

#[test]
fn pointer_moves_are_rate_limited() {
    let mut f = fixture();

    assert!(f.controller.pointer_move(1.0, 1.0).expect("first"));
    f.clock.advance(10.0);
    assert!(!f.controller.pointer_move(2.0, 2.0).expect("throttled"));
    f.clock.advance(50.0);
    assert!(f.controller.pointer_move(3.0, 3.0).expect("admitted"));

    assert_eq!(f.log.borrow().annotations.len(), 2);
    let cursor = f.controller.interaction_state().cursor().expect("cursor");
    assert_eq!((cursor.x, cursor.y), (3.0, 3.0));
}

#[test]
fn leaving_hovered_point_during_gesture_ends_it_without_click() {
    let mut f = fixture();
    *f.under_cursor.borrow_mut() = Some(4);

    f.controller.pointer_move(10.0, 10.0).expect("hover");
    f.controller.pointer_down(10.0, 10.0).expect("down");

    *f.under_cursor.borrow_mut() = None;
    f.clock.advance(100.0);
    f.controller.pointer_move(11.0, 10.0).expect("exit");

    assert!(!f.controller.gesture_state().is_dragging());
    assert_eq!(f.controller.pointer_up(11.0, 10.0).expect("up"), None);
    assert!(f.log.borrow().clicks.is_empty());
}

#[test]
fn pointer_leave_clears_hover_and_annotations() {
    let mut f = fixture();
    *f.under_cursor.borrow_mut() = Some(5);
    f.controller.pointer_move(10.0, 10.0).expect("hover");

    f.controller.pointer_leave();

    assert_eq!(f.controller.hovered(), None);
    assert!(f.controller.interaction_state().cursor().is_none());
    assert!(f.log.borrow().annotations.last().expect("batch").is_empty());
}

#[test]
fn second_initialize_is_a_warning_not_an_error() {
    let mut f = fixture();
    f.controller
        .zoom_to(2.0, 50.0, 50.0, Some(0.0))
        .expect("zoom");

    assert!(!f.controller.initialize().expect("second init"));
    assert_eq!(f.controller.transform().k, 2.0);
}

#[test]
fn initialize_requires_primary_renderer() {
    let config = ZoomControllerConfig::new(Viewport::new(100, 100));
    let mut controller: ZoomController<u32> = ZoomController::new(config).expect("controller");
    controller
        .attach_renderer(RendererRole::Overlay, NullRenderer::default())
        .expect("attach overlay");

    let err = controller.initialize().expect_err("missing primary");
    assert!(matches!(
        err,
        ZoomError::RendererNotAttached(RendererRole::Primary)
    ));
    assert!(!controller.is_initialized());
}

#[test]
fn pointer_events_before_initialize_fail() {
    let config = ZoomControllerConfig::new(Viewport::new(100, 100));
    let mut controller: ZoomController<u32> = ZoomController::new(config).expect("controller");

    let err = controller.pointer_down(1.0, 1.0).expect_err("not initialized");
    assert!(matches!(err, ZoomError::PreconditionViolation(_)));
    assert_eq!(controller.transform(), ZoomTransform::IDENTITY);
}

#[test]
fn click_without_host_is_a_precondition_violation() {
    let clock = ManualClock::starting_at(0.0);
    let under_cursor = Rc::new(RefCell::new(Some(8)));
    let mut controller = ZoomController::with_clock(
        ZoomControllerConfig::new(Viewport::new(100, 100)),
        clock,
    )
    .expect("controller");
    controller
        .attach_renderer(
            RendererRole::Primary,
            ScriptedRenderer {
                under_cursor: Rc::clone(&under_cursor),
            },
        )
        .expect("attach");
    controller.initialize().expect("init");

    controller.pointer_down(1.0, 1.0).expect("down");
    let err = controller.pointer_up(1.0, 1.0).expect_err("no host");
    assert!(matches!(err, ZoomError::PreconditionViolation(_)));

    let err = controller.pointer_move(2.0, 2.0).expect_err("no host");
    assert!(matches!(err, ZoomError::PreconditionViolation(_)));
}
