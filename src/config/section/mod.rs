//! Settings file sections.
//!
//! | Section    | Struct            | Reload   |
//! |------------|-------------------|----------|
//! | `[optout]` | `OptOutSettings`  | restart  |
//! | `[zmisc]`  | `TestingSettings` | restart  |
//! | `[tweaks]` | `TweakSettings`   | live     |

mod misc;
mod optout;
mod tweaks;

pub use misc::TestingSettings;
pub use optout::OptOutSettings;
pub use tweaks::TweakSettings;
