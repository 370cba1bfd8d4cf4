//! Pointer input handling for the selection canvas.
//!
//! ## Architecture
//!
//! One explicit state machine (`InputState`) tracks the current session:
//! drawing a new selection, or resizing/moving a stored one. The handlers are
//! `impl SelectionEngine` blocks split by event, and each takes the event
//! by value; there is no global state.
//!
//! ## Modules
//!
//! - `state` - Session enum and query helpers
//! - `event` - Pointer events and targets from the view layer
//! - `coords` - Host seam and client/canvas conversion
//! - `mouse_down` - Session start (create, resize or move)
//! - `drag` - Pointer move (draw, resize, move ticks)
//! - `mouse_up` - Session end (commit, revert), pointer leave

pub mod coords;
mod drag;
mod event;
mod mouse_down;
mod mouse_up;
mod state;

pub use coords::{CanvasHost, CoordinateConverter};
pub use event::{PointerEvent, PointerTarget};
pub use state::InputState;
