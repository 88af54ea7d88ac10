//! Platform-independent engine for the palette bubbles visualizer.
//!
//! Everything here runs on the host as well as on wasm: the web frontend
//! feeds pointer/keyboard/resize intents in and performs the side effects
//! (clipboard writes) the tick reports back.

pub mod bubble;
pub mod color;
pub mod constants;
pub mod interaction;
pub mod physics;
pub mod sim;

pub use bubble::{seed_bubbles, Bubble, BubbleId};
pub use color::{canonicalize, luminance, ColorError, PaletteEntry};
pub use interaction::{CopyRegion, PointerState, Rect};
pub use physics::Surface;
pub use sim::{Effect, InputIntent, Simulation};
