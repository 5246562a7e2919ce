//! `[optout]` section configuration.
//!
//! Each flag removes a family of blocks. All of them are evaluated once
//! while blocks are registered, so a change needs a restart.
//!
//! # Example
//!
//! ```toml
//! [optout]
//! without_walls = true
//! without_ladders = true
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

/// Allows disabling specific features.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "optout", label = "Feature opt-outs")]
pub struct OptOutSettings {
    /// Disable clinker bricks and derived blocks.
    #[config(label = "Without clinker bricks", restart)]
    pub without_clinker_bricks: bool,

    /// Disable slag bricks and derived blocks.
    #[config(label = "Without slag bricks", restart)]
    pub without_slag_bricks: bool,

    /// Disable rebar concrete and derived blocks.
    #[config(label = "Without rebar concrete", restart)]
    pub without_rebar_concrete: bool,

    /// Disable all mod wall blocks.
    #[config(label = "Without walls", restart)]
    pub without_walls: bool,

    /// Disable all mod stairs blocks.
    #[config(label = "Without stairs", restart)]
    pub without_stairs: bool,

    /// Disable IE concrete wall.
    #[config(label = "Without concrete wall", restart)]
    pub without_ie_concrete_wall: bool,

    /// Disable panzer glass and derived blocks.
    #[config(label = "Without panzer glass", restart)]
    pub without_panzer_glass: bool,

    /// Disable treated wood crafting table.
    #[config(label = "Without crafting table", restart)]
    pub without_crafting_table: bool,

    /// Disable small lab furnace.
    #[config(label = "Without lab furnace", restart)]
    pub without_lab_furnace: bool,

    /// Disable treated wood table, stool, windowsill, pole, etc.
    #[config(label = "Without tr. wood furniture", restart)]
    pub without_treated_wood_furniture: bool,

    /// Disable treated wood window, etc.
    #[config(label = "Without windows", restart)]
    pub without_windows: bool,

    /// Disable light sources
    #[config(label = "Without lights", restart)]
    pub without_light_sources: bool,

    /// Disable ladders
    #[config(label = "Without ladders", restart)]
    pub without_ladders: bool,
}
