//! Reveal Pipeline
//!
//! This module connects a mounted feature grid to the markup renderer.
//!
//! # Pipeline Architecture
//!
//! ```text
//! VisibilitySource → reveal latch → GridHandle::frame(clock) → GridFrame → renderer
//! ```
//!
//! ## Data Flow
//!
//! 1. **mount** - Registers the one-shot observer, owns the latch
//! 2. **frame** - Samples every card's transition at one instant
//! 3. **renderer** - Turns the frame into markup (see [`crate::renderer`])
//!
//! ## Key Design Principles
//!
//! - **One-way latch**: nothing flips a shown grid back to hidden
//! - **Pull sampling**: poses are computed when a frame is requested, never pushed
//! - **Scoped observer**: released on first fire, unmount or drop, whichever comes first

pub mod frame;
pub mod mount;

// Re-exports
pub use frame::GridFrame;
pub use mount::{GridHandle, mount_grid};
