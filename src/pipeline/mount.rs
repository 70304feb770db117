//! Mount API - Feature grid lifecycle.
//!
//! Mounting a grid registers a one-shot visibility observer on its
//! container. The first "visible" report fires the reveal latch and
//! disengages the observer. The handle samples card poses on demand.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use bento_landing::pipeline::mount_grid;
//! use bento_landing::state::{ManualClock, TargetRect, Viewport};
//!
//! let viewport = Viewport::new(800.0);
//! let clock = Rc::new(ManualClock::new());
//! let handle = mount_grid(grid, Some(TargetRect::new(1400.0, 600.0)), &viewport, clock.clone(), config);
//!
//! viewport.scroll_to(900.0);     // container scrolls in, latch fires
//! let frame = handle.frame();    // sample every card at clock.now()
//!
//! handle.unmount();
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::config::RevealConfig;
use crate::content::FeatureGrid;
use crate::primitives::Cleanup;
use crate::state::{
    Clock, Pose, RevealLatch, RevealState, TargetRect, Transition, VisibilityCallback,
    VisibilitySource, stagger_delay, transition_for,
};

use super::frame::GridFrame;

type ObserverSlot = RefCell<Option<Cleanup>>;

// =============================================================================
// Grid Handle
// =============================================================================

/// Handle returned by [`mount_grid`].
///
/// Owns:
/// - The reveal latch (shared weakly with the observer callback)
/// - The observer cleanup, until the latch fires or the grid unmounts
/// - The clock used to sample poses
pub struct GridHandle {
    grid: FeatureGrid,
    config: RevealConfig,
    clock: Rc<dyn Clock>,
    latch: Rc<RevealLatch>,
    observer: Rc<ObserverSlot>,
}

impl GridHandle {
    pub fn grid(&self) -> &FeatureGrid {
        &self.grid
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn state(&self) -> RevealState {
        self.latch.state()
    }

    /// When the latch fired, on the grid's clock.
    pub fn shown_at(&self) -> Option<Duration> {
        self.latch.shown_at()
    }

    /// Whether the visibility observer is still registered.
    pub fn is_observing(&self) -> bool {
        self.observer.borrow().is_some()
    }

    /// Absolute start time of card `index`'s entrance.
    pub fn card_start(&self, index: usize) -> Option<Duration> {
        self.shown_at()
            .map(|at| at + stagger_delay(index, self.config.stagger()))
    }

    /// Current transition of card `index`.
    pub fn transition(&self, index: usize) -> Transition {
        transition_for(self.state(), index, &self.config)
    }

    /// Pose of card `index` at `now`.
    pub fn pose_at(&self, index: usize, now: Duration) -> Pose {
        match self.shown_at() {
            None => Pose::hidden(&self.config),
            Some(at) => self.transition(index).sample(now.saturating_sub(at)),
        }
    }

    /// Pose of card `index` at the clock's current time.
    pub fn pose(&self, index: usize) -> Pose {
        self.pose_at(index, self.clock.now())
    }

    /// Snapshot of every card at `now`.
    pub fn frame_at(&self, now: Duration) -> GridFrame {
        let poses = (0..self.grid.len()).map(|i| self.pose_at(i, now)).collect();
        GridFrame::new(self.state(), poses)
    }

    /// Snapshot of every card at the clock's current time.
    pub fn frame(&self) -> GridFrame {
        self.frame_at(self.clock.now())
    }

    /// Whether every card has finished its entrance at `now`.
    pub fn is_settled_at(&self, now: Duration) -> bool {
        let Some(at) = self.shown_at() else {
            return false;
        };
        let elapsed = now.saturating_sub(at);
        (0..self.grid.len()).all(|i| self.transition(i).is_finished(elapsed))
    }

    pub fn is_settled(&self) -> bool {
        self.is_settled_at(self.clock.now())
    }

    /// Release the observer. In-flight entrances are abandoned.
    pub fn unmount(mut self) {
        self.release();
        debug!(state = self.state().as_str(), "feature grid unmounted");
    }

    fn release(&mut self) {
        disengage(&self.observer);
    }
}

impl Drop for GridHandle {
    fn drop(&mut self) {
        self.release();
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount `grid` and start watching its container.
///
/// `container` is the grid's position in the document. When it is `None`
/// there is nothing to observe and the grid reveals immediately.
pub fn mount_grid(
    grid: FeatureGrid,
    container: Option<TargetRect>,
    source: &dyn VisibilitySource,
    clock: Rc<dyn Clock>,
    config: RevealConfig,
) -> GridHandle {
    let latch = Rc::new(RevealLatch::new());
    let observer: Rc<ObserverSlot> = Rc::new(RefCell::new(None));

    debug!(
        cards = grid.len(),
        root_margin = config.root_margin,
        observed = container.is_some(),
        "mounting feature grid"
    );

    match container {
        None => {
            warn!("feature grid has no container to observe, revealing immediately");
            fire(&latch, clock.now());
        }
        Some(target) => {
            let on_change = reveal_callback(Rc::downgrade(&latch), Rc::downgrade(&observer), clock.clone());
            let cleanup = source.observe(target, config.root_margin, on_change);

            // A source may report synchronously from inside `observe`.
            if latch.is_shown() {
                cleanup();
                trace!("visibility observer disengaged");
            } else {
                *observer.borrow_mut() = Some(cleanup);
            }
        }
    }

    GridHandle {
        grid,
        config,
        clock,
        latch,
        observer,
    }
}

fn reveal_callback(latch: Weak<RevealLatch>, observer: Weak<ObserverSlot>, clock: Rc<dyn Clock>) -> VisibilityCallback {
    Rc::new(move |visible| {
        if !visible {
            return;
        }
        let Some(latch) = latch.upgrade() else {
            return;
        };
        fire(&latch, clock.now());

        if let Some(slot) = observer.upgrade() {
            disengage(&slot);
        }
    })
}

fn fire(latch: &RevealLatch, now: Duration) {
    if latch.fire(now) {
        debug!(shown_at = ?now, "reveal latch fired");
    }
}

fn disengage(slot: &ObserverSlot) {
    let cleanup = slot.borrow_mut().take();
    if let Some(cleanup) = cleanup {
        cleanup();
        trace!("visibility observer disengaged");
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::content::feature_grid;
    use crate::state::{ManualClock, SyntheticVisibility, Viewport};

    /// Source that reports "visible" from inside `observe`.
    #[derive(Default)]
    struct EagerVisibility {
        live: Rc<Cell<usize>>,
    }

    impl VisibilitySource for EagerVisibility {
        fn observe(&self, _target: TargetRect, _root_margin: f32, on_change: VisibilityCallback) -> Cleanup {
            self.live.set(self.live.get() + 1);
            on_change(true);

            let live = self.live.clone();
            Box::new(move || live.set(live.get() - 1))
        }
    }

    fn setup() -> (FeatureGrid, Rc<ManualClock>, RevealConfig) {
        (feature_grid().unwrap(), Rc::new(ManualClock::new()), RevealConfig::default())
    }

    const CONTAINER: TargetRect = TargetRect::new(1000.0, 600.0);

    #[test]
    fn test_mount_starts_hidden_and_observing() {
        let (grid, clock, config) = setup();
        let source = SyntheticVisibility::new();
        let handle = mount_grid(grid, Some(CONTAINER), &source, clock, config);

        assert_eq!(handle.state(), RevealState::Hidden);
        assert!(handle.is_observing());
        assert_eq!(source.active_observers(), 1);
        assert_eq!(source.last_root_margin(), Some(-80.0));
        assert_eq!(handle.shown_at(), None);
        assert_eq!(handle.card_start(0), None);
    }

    #[test]
    fn test_hidden_cards_hold_hidden_pose() {
        let (grid, clock, config) = setup();
        let source = SyntheticVisibility::new();
        let handle = mount_grid(grid, Some(CONTAINER), &source, clock.clone(), config.clone());

        clock.advance(Duration::from_secs(10));
        for i in 0..grid.len() {
            assert_eq!(handle.pose(i), Pose::hidden(&config));
        }
        assert!(!handle.is_settled());
    }

    #[test]
    fn test_not_visible_does_not_fire() {
        let (grid, clock, config) = setup();
        let source = SyntheticVisibility::new();
        let handle = mount_grid(grid, Some(CONTAINER), &source, clock, config);

        source.emit(false);
        assert_eq!(handle.state(), RevealState::Hidden);
        assert!(handle.is_observing());
    }

    #[test]
    fn test_visible_fires_once_and_disengages() {
        let (grid, clock, config) = setup();
        let source = SyntheticVisibility::new();
        let handle = mount_grid(grid, Some(CONTAINER), &source, clock.clone(), config);

        clock.set(Duration::from_millis(1200));
        assert_eq!(source.emit(true), 1);

        assert_eq!(handle.state(), RevealState::Shown);
        assert_eq!(handle.shown_at(), Some(Duration::from_millis(1200)));
        assert!(!handle.is_observing());
        assert_eq!(source.active_observers(), 0);

        // Later events reach nobody
        clock.set(Duration::from_millis(5000));
        assert_eq!(source.emit(false), 0);
        assert_eq!(source.emit(true), 0);
        assert_eq!(handle.shown_at(), Some(Duration::from_millis(1200)));
    }

    #[test]
    fn test_card_starts_are_staggered() {
        let (grid, clock, config) = setup();
        let source = SyntheticVisibility::new();
        let handle = mount_grid(grid, Some(CONTAINER), &source, clock.clone(), config);

        clock.set(Duration::from_millis(100));
        source.emit(true);

        for i in 0..grid.len() {
            let expected = Duration::from_millis(100 + 80 * i as u64);
            assert_eq!(handle.card_start(i), Some(expected));
        }
    }

    #[test]
    fn test_pose_progression() {
        let (grid, clock, config) = setup();
        let source = SyntheticVisibility::new();
        let handle = mount_grid(grid, Some(CONTAINER), &source, clock.clone(), config.clone());
        source.emit(true);

        // Card 1 has not started at 40ms, card 0 is moving
        let t = Duration::from_millis(40);
        assert_eq!(handle.pose_at(1, t), Pose::hidden(&config));
        let moving = handle.pose_at(0, t);
        assert!(moving.opacity > 0.0 && moving.opacity < 1.0);

        // Last card: starts at 6 * 80 = 480ms, ends at 980ms
        let last = grid.len() - 1;
        assert!(!handle.is_settled_at(Duration::from_millis(979)));
        assert!(handle.is_settled_at(Duration::from_millis(980)));
        assert_eq!(handle.pose_at(last, Duration::from_millis(980)), Pose::SHOWN);
    }

    #[test]
    fn test_missing_container_reveals_at_mount() {
        let (grid, clock, config) = setup();
        clock.set(Duration::from_millis(300));
        let source = SyntheticVisibility::new();
        let handle = mount_grid(grid, None, &source, clock, config);

        assert_eq!(handle.state(), RevealState::Shown);
        assert_eq!(handle.shown_at(), Some(Duration::from_millis(300)));
        assert!(!handle.is_observing());
        assert_eq!(source.active_observers(), 0);
    }

    #[test]
    fn test_unmount_before_trigger() {
        let (grid, clock, config) = setup();
        let source = SyntheticVisibility::new();
        let handle = mount_grid(grid, Some(CONTAINER), &source, clock, config);

        handle.unmount();
        assert_eq!(source.active_observers(), 0);
        assert_eq!(source.emit(true), 0);
        assert_eq!(source.delivered(), 0);
    }

    #[test]
    fn test_drop_releases_observer() {
        let (grid, clock, config) = setup();
        let source = SyntheticVisibility::new();
        {
            let _handle = mount_grid(grid, Some(CONTAINER), &source, clock, config);
            assert_eq!(source.active_observers(), 1);
        }
        assert_eq!(source.active_observers(), 0);
    }

    #[test]
    fn test_unmount_after_trigger_is_noop() {
        let (grid, clock, config) = setup();
        let source = SyntheticVisibility::new();
        let handle = mount_grid(grid, Some(CONTAINER), &source, clock, config);

        source.emit(true);
        handle.unmount();
        assert_eq!(source.active_observers(), 0);
    }

    #[test]
    fn test_synchronous_report_during_observe() {
        let (grid, clock, config) = setup();
        clock.set(Duration::from_millis(42));
        let source = EagerVisibility::default();
        let handle = mount_grid(grid, Some(CONTAINER), &source, clock, config);

        assert_eq!(handle.state(), RevealState::Shown);
        assert_eq!(handle.shown_at(), Some(Duration::from_millis(42)));
        assert!(!handle.is_observing());
        assert_eq!(source.live.get(), 0);

        drop(handle);
        assert_eq!(source.live.get(), 0);
    }

    #[test]
    fn test_already_visible_in_viewport() {
        let (grid, clock, config) = setup();
        let viewport = Viewport::new(800.0);
        let handle = mount_grid(grid, Some(TargetRect::new(200.0, 600.0)), &viewport, clock, config);

        // Registration is silent until the first dispatch
        assert_eq!(handle.state(), RevealState::Hidden);
        assert_eq!(viewport.flush(), 1);

        assert_eq!(handle.state(), RevealState::Shown);
        assert_eq!(viewport.observer_count(), 0);
    }

    #[test]
    fn test_root_margin_delays_trigger() {
        let (grid, clock, config) = setup();
        let viewport = Viewport::new(800.0);
        let handle = mount_grid(grid, Some(TargetRect::new(1000.0, 600.0)), &viewport, clock, config);

        // Container top is 50px into the viewport: inside the 80px inset
        viewport.scroll_to(250.0);
        assert_eq!(handle.state(), RevealState::Hidden);

        // 100px in: past the inset
        viewport.scroll_to(300.0);
        assert_eq!(handle.state(), RevealState::Shown);
    }

    #[test]
    fn test_frame_matches_poses() {
        let (grid, clock, config) = setup();
        let source = SyntheticVisibility::new();
        let handle = mount_grid(grid, Some(CONTAINER), &source, clock.clone(), config);
        source.emit(true);

        clock.set(Duration::from_millis(200));
        let frame = handle.frame();
        assert_eq!(frame.state(), RevealState::Shown);
        for i in 0..grid.len() {
            assert_eq!(frame.pose(i), Some(handle.pose(i)));
        }
    }
}
