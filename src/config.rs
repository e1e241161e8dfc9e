// SPDX-FileCopyrightText: The scratchbind authors
// SPDX-License-Identifier: MPL-2.0

//! Load-time configuration of a [`crate::ControllerBinding`].

use crate::{DeckNumber, Group};

pub const DEFAULT_DECK_GROUP: Group = Group::borrowed("[Channel1]");

pub const DEFAULT_DECK_NUMBER: DeckNumber = 1;

pub const DEFAULT_SAMPLER_GROUP: Group = Group::borrowed("[Sampler1]");

/// 128 ticks per revolution at 33 1/3 RPM with ramping enabled.
pub const DEFAULT_SCRATCH_CONFIG: ScratchConfig = ScratchConfig {
    intervals_per_rev: 128,
    rpm: 33.333,
    alpha: 1.0 / 8.0,
    beta: 1.0 / 8.0 / 32.0,
    ramp: true,
};

/// Physical and filter parameters of the scratch emulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScratchConfig {
    /// Encoder resolution, i.e. ticks per full revolution of the wheel
    pub intervals_per_rev: u32,

    /// Rotation speed of the emulated platter
    pub rpm: f64,

    /// Smoothing filter coefficient
    pub alpha: f64,

    /// Smoothing filter coefficient
    pub beta: f64,

    /// Ease in/out when enabling/disabling scratch mode
    pub ramp: bool,
}

impl Default for ScratchConfig {
    fn default() -> Self {
        DEFAULT_SCRATCH_CONFIG
    }
}

/// Immutable configuration of a binding.
///
/// The values are not validated. Invalid groups or deck numbers
/// are handled by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingConfig {
    /// Target deck for jog and volume
    pub deck_group: Group,

    /// Target deck for the scratch functions
    pub deck_number: DeckNumber,

    /// Sampler slot that is triggered by the play pad
    pub sampler_group: Group,

    pub scratch: ScratchConfig,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            deck_group: DEFAULT_DECK_GROUP,
            deck_number: DEFAULT_DECK_NUMBER,
            sampler_group: DEFAULT_SAMPLER_GROUP,
            scratch: DEFAULT_SCRATCH_CONFIG,
        }
    }
}
