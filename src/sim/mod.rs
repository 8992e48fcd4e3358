//! Simulation module
//!
//! All physics and input-mapping logic lives here, free of rendering and
//! platform dependencies: the frame loop hands in a `TickInput` and a time
//! step, and everything else is arithmetic over already-validated data.

pub mod collision;
pub mod dot;
pub mod input;
pub mod tick;

pub use collision::{circle_overlaps_rect, touches_wall, Circle};
pub use dot::Dot;
pub use input::DragLauncher;
pub use tick::{tick, TickInput};
