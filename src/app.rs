//! Application module: the model the TUI renders and the intents that drive it.
//!
//! The `App` model lives in `app::model` and holds the library, the playback
//! controller and the view state. `app::intent` lists every user action.

mod dropped;
mod intent;
mod model;

pub use dropped::parse_dropped_paths;
pub use intent::{Flow, Intent, PromptKind};
pub use model::*;
