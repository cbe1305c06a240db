use std::cell::RefCell;
use std::rc::Rc;

use geoclock_rs::api::{ChartEngineConfig, ChartSession};
use geoclock_rs::core::Viewport;
use geoclock_rs::error::ClockResult;
use geoclock_rs::interaction::SessionState;
use geoclock_rs::render::{NullRenderer, RenderFrame, Renderer};

/// Renderer double that tracks how many instances are alive.
struct TrackedRenderer {
    live: Rc<RefCell<usize>>,
}

impl TrackedRenderer {
    fn new(live: Rc<RefCell<usize>>) -> Self {
        *live.borrow_mut() += 1;
        Self { live }
    }
}

impl Drop for TrackedRenderer {
    fn drop(&mut self) {
        *self.live.borrow_mut() -= 1;
    }
}

impl Renderer for TrackedRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ClockResult<()> {
        frame.validate()
    }
}

#[test]
fn session_starts_idle() {
    let session: ChartSession<NullRenderer> = ChartSession::new();
    assert_eq!(session.state(), SessionState::Idle);
    assert!(!session.is_mounted());
    assert!(session.engine().is_none());
}

#[test]
fn mount_transitions_to_mounted() {
    let mut session = ChartSession::new();
    let replaced = session
        .mount(
            NullRenderer::default(),
            ChartEngineConfig::new(Viewport::new(640, 480)),
        )
        .expect("mount");

    assert!(!replaced);
    assert_eq!(session.state(), SessionState::Mounted);
    assert!(session.engine().is_some());
}

#[test]
fn remounting_never_leaks_engines() {
    let live = Rc::new(RefCell::new(0usize));
    let config = ChartEngineConfig::new(Viewport::new(640, 480));
    let mut session = ChartSession::new();

    for round in 0..5 {
        let replaced = session
            .mount(TrackedRenderer::new(Rc::clone(&live)), config)
            .expect("mount");
        assert_eq!(replaced, round > 0);
        // Exactly one engine (and renderer) is ever alive.
        assert_eq!(*live.borrow(), 1);
    }

    assert!(session.unmount());
    assert_eq!(*live.borrow(), 0);
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn failed_mount_leaves_session_idle_and_disposed() {
    let live = Rc::new(RefCell::new(0usize));
    let mut session = ChartSession::new();

    session
        .mount(
            TrackedRenderer::new(Rc::clone(&live)),
            ChartEngineConfig::new(Viewport::new(640, 480)),
        )
        .expect("first mount");
    assert_eq!(*live.borrow(), 1);

    // Invalid viewport: the new engine is never created, and the previous
    // one is already gone. No half-mounted state survives.
    let err = session.mount(
        TrackedRenderer::new(Rc::clone(&live)),
        ChartEngineConfig::new(Viewport::new(0, 0)),
    );
    assert!(err.is_err());
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(*live.borrow(), 0);
}

#[test]
fn unmount_is_idempotent() {
    let mut session = ChartSession::new();
    session
        .mount(
            NullRenderer::default(),
            ChartEngineConfig::new(Viewport::new(640, 480)),
        )
        .expect("mount");

    assert!(session.unmount());
    assert!(!session.unmount());
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn mounted_engine_renders_through_session() {
    let mut session = ChartSession::new();
    session
        .mount(
            NullRenderer::default(),
            ChartEngineConfig::new(Viewport::new(800, 800)),
        )
        .expect("mount");

    let engine = session.engine_mut().expect("engine present");
    engine.render().expect("render");
    assert_eq!(engine.renderer().frames_rendered, 1);
}
