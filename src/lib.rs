//! Support layer for a Spotify web-playback embed widget.
//!
//! Everything the widget needs around the externally loaded player script:
//! URI parsing and validation, locale label resolution, volume/rounding
//! helpers, the shared status/event vocabulary, and an idempotent loader
//! that injects the player script into the page exactly once.

mod loader;
mod locale;
mod status;
mod uri;
mod utils;

pub use loader::*;
pub use locale::*;
pub use status::*;
pub use uri::*;
pub use utils::*;
