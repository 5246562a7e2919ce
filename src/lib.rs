//! Settings and feature opt-outs for the Engineer's Decor block set.
//!
//! | Module    | Purpose                                              |
//! |-----------|------------------------------------------------------|
//! | `config`  | `engineersdecor.toml` sections, schema, load/save    |
//! | `block`   | Block descriptors handed over by the host            |
//! | `optout`  | Opt-out rules and registration decisions             |
//! | `recipe`  | Furnace recipe override seam                         |
//! | `store`   | Published settings snapshot, reload and apply        |
//! | `watch`   | Settings file watcher                                |
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use decor_settings::block::{BlockDescriptor, BlockKind};
//! use decor_settings::recipe::OverrideRegistry;
//! use decor_settings::store::{HostEvent, SettingsStore};
//!
//! let store = SettingsStore::new("config/engineersdecor.toml", Arc::new(OverrideRegistry::new()));
//! store.load();
//! store.handle(&HostEvent::PostInit);
//!
//! let ladder = BlockDescriptor::new("engineersdecor:metal_rung_ladder").with_kind(BlockKind::Ladder);
//! if !store.is_opted_out(Some(&ladder)) {
//!     // register it
//! }
//! ```

pub mod block;
pub mod config;
pub mod logger;
pub mod optout;
pub mod recipe;
pub mod store;
mod utils;
pub mod watch;
