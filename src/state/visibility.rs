//! Visibility System - Intersection detection for reveal triggers
//!
//! Components ask a [`VisibilitySource`] to watch a target rectangle and get
//! called back whenever the target moves into or out of view. The returned
//! [`Cleanup`] disengages the observation; after it runs the callback is
//! never invoked again.
//!
//! Two sources ship with the crate:
//!
//! - [`Viewport`] - a scrollable viewport that re-tests every target on
//!   scroll, resize and explicit flush
//! - [`SyntheticVisibility`] - pushes hand-written visible/hidden events,
//!   for tests and for hosts that detect visibility elsewhere
//!
//! # Root margin
//!
//! Every edge of the viewport is moved outward by `root_margin` pixels before
//! testing. A negative margin shrinks the viewport, so a target must travel
//! that far inside before it counts as visible.
//!
//! # Example
//!
//! ```ignore
//! use bento_landing::state::{Viewport, VisibilitySource, TargetRect};
//!
//! let viewport = Viewport::new(800.0);
//! let stop = viewport.observe(TargetRect::new(1800.0, 600.0), -80.0, Rc::new(|visible| {
//!     println!("visible: {visible}");
//! }));
//!
//! viewport.scroll_to(1200.0); // prints "visible: true"
//! stop();
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::primitives::Cleanup;

// =============================================================================
// TYPES
// =============================================================================

/// Visibility change callback (Rc so sources can snapshot it before calling).
pub type VisibilityCallback = Rc<dyn Fn(bool)>;

/// Vertical extent of an observed element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetRect {
    pub top: f32,
    pub height: f32,
}

impl TargetRect {
    pub const fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Capability to watch an element's visibility.
pub trait VisibilitySource {
    /// Start observing `target`.
    ///
    /// `on_change` receives `true` when the target enters the (margin
    /// adjusted) viewport and `false` when it leaves. Calling the returned
    /// cleanup stops observation.
    fn observe(&self, target: TargetRect, root_margin: f32, on_change: VisibilityCallback) -> Cleanup;
}

/// Intersection test of `target` against a viewport scrolled to `scroll_y`.
///
/// Edge contact counts as intersecting so zero-height targets can still
/// become visible.
pub fn intersects(target: TargetRect, scroll_y: f32, viewport_height: f32, root_margin: f32) -> bool {
    let root_top = scroll_y - root_margin;
    let root_bottom = scroll_y + viewport_height + root_margin;

    if root_bottom < root_top {
        return false;
    }
    target.top <= root_bottom && target.bottom() >= root_top
}

// =============================================================================
// VIEWPORT
// =============================================================================

struct Observation {
    id: u64,
    target: TargetRect,
    root_margin: f32,
    /// Last reported state (None until the first flush).
    last: Option<bool>,
    on_change: VisibilityCallback,
}

struct ViewportInner {
    height: f32,
    scroll_y: f32,
    next_id: u64,
    observations: Vec<Observation>,
}

/// Scrollable viewport that dispatches intersection changes.
///
/// Registration does not call back immediately. The first [`flush`]
/// (or scroll/resize) after registration always reports the target's
/// current state, later ones only report changes.
///
/// [`flush`]: Viewport::flush
#[derive(Clone)]
pub struct Viewport {
    inner: Rc<RefCell<ViewportInner>>,
}

impl Viewport {
    /// Viewport of `height` pixels scrolled to the top of the document.
    pub fn new(height: f32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ViewportInner {
                height,
                scroll_y: 0.0,
                next_id: 0,
                observations: Vec::new(),
            })),
        }
    }

    pub fn height(&self) -> f32 {
        self.inner.borrow().height
    }

    pub fn scroll_y(&self) -> f32 {
        self.inner.borrow().scroll_y
    }

    /// Number of live observations.
    pub fn observer_count(&self) -> usize {
        self.inner.borrow().observations.len()
    }

    /// Scroll to `y` (clamped at 0) and dispatch changes.
    ///
    /// Returns the number of callbacks invoked.
    pub fn scroll_to(&self, y: f32) -> usize {
        self.inner.borrow_mut().scroll_y = y.max(0.0);
        self.flush()
    }

    /// Scroll by `delta` pixels and dispatch changes.
    pub fn scroll_by(&self, delta: f32) -> usize {
        let y = self.scroll_y() + delta;
        self.scroll_to(y)
    }

    /// Change the viewport height and dispatch changes.
    pub fn resize(&self, height: f32) -> usize {
        self.inner.borrow_mut().height = height.max(0.0);
        self.flush()
    }

    /// Re-test every observation and invoke callbacks for changed ones.
    ///
    /// Callbacks run after the viewport borrow is released, so they may
    /// disengage observations (their own or others). A callback whose
    /// observation was disengaged earlier in the same batch is skipped.
    pub fn flush(&self) -> usize {
        let pending: Vec<(u64, VisibilityCallback, bool)> = {
            let mut inner = self.inner.borrow_mut();
            let (scroll_y, height) = (inner.scroll_y, inner.height);

            inner
                .observations
                .iter_mut()
                .filter_map(|obs| {
                    let visible = intersects(obs.target, scroll_y, height, obs.root_margin);
                    if obs.last == Some(visible) {
                        return None;
                    }
                    obs.last = Some(visible);
                    Some((obs.id, obs.on_change.clone(), visible))
                })
                .collect()
        };

        let mut delivered = 0;
        for (id, on_change, visible) in pending {
            if !self.is_observing(id) {
                continue;
            }
            trace!(observation = id, visible, "viewport visibility change");
            on_change(visible);
            delivered += 1;
        }
        delivered
    }

    fn is_observing(&self, id: u64) -> bool {
        self.inner.borrow().observations.iter().any(|o| o.id == id)
    }
}

impl VisibilitySource for Viewport {
    fn observe(&self, target: TargetRect, root_margin: f32, on_change: VisibilityCallback) -> Cleanup {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.observations.push(Observation {
                id,
                target,
                root_margin,
                last: None,
                on_change,
            });
            id
        };

        let weak: Weak<RefCell<ViewportInner>> = Rc::downgrade(&self.inner);
        Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().observations.retain(|o| o.id != id);
            }
        })
    }
}

// =============================================================================
// SYNTHETIC SOURCE
// =============================================================================

#[derive(Default)]
struct SyntheticInner {
    next_id: u64,
    observers: Vec<(u64, VisibilityCallback)>,
    delivered: usize,
    last_root_margin: Option<f32>,
}

/// Visibility source driven by explicit [`emit`](Self::emit) calls.
#[derive(Clone, Default)]
pub struct SyntheticVisibility {
    inner: Rc<RefCell<SyntheticInner>>,
}

impl SyntheticVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `visible` to every live observer. Returns how many were called.
    pub fn emit(&self, visible: bool) -> usize {
        let snapshot: Vec<(u64, VisibilityCallback)> = self.inner.borrow().observers.clone();

        let mut delivered = 0;
        for (id, on_change) in snapshot {
            let live = self.inner.borrow().observers.iter().any(|(o, _)| *o == id);
            if !live {
                continue;
            }
            on_change(visible);
            delivered += 1;
        }

        self.inner.borrow_mut().delivered += delivered;
        delivered
    }

    /// Number of live observers.
    pub fn active_observers(&self) -> usize {
        self.inner.borrow().observers.len()
    }

    /// Total callbacks delivered since creation.
    pub fn delivered(&self) -> usize {
        self.inner.borrow().delivered
    }

    /// Root margin passed by the most recent `observe` call.
    pub fn last_root_margin(&self) -> Option<f32> {
        self.inner.borrow().last_root_margin
    }
}

impl VisibilitySource for SyntheticVisibility {
    fn observe(&self, _target: TargetRect, root_margin: f32, on_change: VisibilityCallback) -> Cleanup {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.observers.push((id, on_change));
            inner.last_root_margin = Some(root_margin);
            id
        };

        let weak = Rc::downgrade(&self.inner);
        Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().observers.retain(|(o, _)| *o != id);
            }
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
