// SPDX-FileCopyrightText: The scratchbind authors
// SPDX-License-Identifier: MPL-2.0

//! Host mixing engine API.

use std::borrow::Cow;

use derive_more::{Deref, Display, From};

#[cfg(test)]
pub(crate) mod recording;

/// Deck number as used by the scratch functions of the engine.
///
/// Numbering starts at 1.
pub type DeckNumber = u32;

/// Jog parameter of a deck group for nudging the playback speed.
pub const JOG_PARAMETER: &str = "jog";

/// Trigger parameter of a sampler group.
pub const START_PLAY_PARAMETER: &str = "start_play";

/// Level parameter of a deck group in the interval [0, 1].
pub const VOLUME_PARAMETER: &str = "volume";

/// Identifier of a deck, sampler, or other unit of the engine,
/// e.g. `[Channel1]` or `[Sampler1]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Deref)]
#[deref(forward)]
pub struct Group(Cow<'static, str>);

impl Group {
    #[must_use]
    pub const fn borrowed(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Group {
    fn from(from: &'static str) -> Self {
        Self::borrowed(from)
    }
}

impl From<String> for Group {
    fn from(from: String) -> Self {
        Self(Cow::Owned(from))
    }
}

/// Operations provided by the host engine.
///
/// All operations are fire-and-forget. Failures are the responsibility
/// of the host and are not observable by the caller.
pub trait Engine {
    /// Enable scratch mode for a deck.
    ///
    /// `intervals_per_rev` is the resolution of the jog wheel encoder,
    /// `rpm` the speed of the emulated platter, `alpha` and `beta` the
    /// coefficients of the smoothing filter. If `ramp` is `true` the
    /// playback speed eases into scratching.
    fn scratch_enable(
        &mut self,
        deck: DeckNumber,
        intervals_per_rev: u32,
        rpm: f64,
        alpha: f64,
        beta: f64,
        ramp: bool,
    );

    /// Disable scratch mode for a deck.
    fn scratch_disable(&mut self, deck: DeckNumber, ramp: bool);

    /// Move the emulated platter of a deck while scratching.
    fn scratch_tick(&mut self, deck: DeckNumber, delta: i32);

    /// Set a named parameter of a group.
    fn set_value(&mut self, group: &str, parameter: &str, value: f64);
}

impl<D> Engine for D
where
    D: std::ops::DerefMut,
    <D as std::ops::Deref>::Target: Engine,
{
    fn scratch_enable(
        &mut self,
        deck: DeckNumber,
        intervals_per_rev: u32,
        rpm: f64,
        alpha: f64,
        beta: f64,
        ramp: bool,
    ) {
        (**self).scratch_enable(deck, intervals_per_rev, rpm, alpha, beta, ramp);
    }

    fn scratch_disable(&mut self, deck: DeckNumber, ramp: bool) {
        (**self).scratch_disable(deck, ramp);
    }

    fn scratch_tick(&mut self, deck: DeckNumber, delta: i32) {
        (**self).scratch_tick(deck, delta);
    }

    fn set_value(&mut self, group: &str, parameter: &str, value: f64) {
        (**self).set_value(group, parameter, value);
    }
}
