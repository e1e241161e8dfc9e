// SPDX-FileCopyrightText: The scratchbind authors
// SPDX-License-Identifier: MPL-2.0

use crate::{BindingConfig, Engine, JOG_PARAMETER, START_PLAY_PARAMETER, VOLUME_PARAMETER};


/// Value of the jog wheel at rest.
///
/// The wheel encodes relative motion as an offset from this value.
pub const JOG_CENTER_VALUE: u8 = 0x40;

/// Scales jog deltas into nudge amounts when not scratching.
const JOG_NUDGE_DIVISOR: f64 = 256.0;

const VOLUME_MAX_VALUE: f64 = 127.0;

/// A control event as received from the host.
///
/// Only `value` affects the behavior of the handlers. The other
/// fields identify the physical control and are passed through
/// for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlEvent<'a> {
    pub channel: u8,
    pub control: u8,
    /// Usually a 7-bit MIDI value in the range 0..=127. Not range-checked.
    pub value: i32,
    pub status: u8,
    pub group: &'a str,
}

impl ControlEvent<'static> {
    /// Event that only carries a value.
    #[must_use]
    pub const fn with_value(value: i32) -> Self {
        Self {
            channel: 0,
            control: 0,
            value,
            status: 0,
            group: "",
        }
    }
}

/// Callbacks of the host's dispatch loop, one per kind of event.
///
/// The engine is injected by the caller on each invocation.
pub trait ControlHandler<E: Engine + ?Sized> {
    fn scratch_hold(&mut self, engine: &mut E, event: ControlEvent<'_>);

    fn jog_tick(&mut self, engine: &mut E, event: ControlEvent<'_>);

    fn play_sample(&mut self, engine: &mut E, event: ControlEvent<'_>);

    fn volume(&mut self, engine: &mut E, event: ControlEvent<'_>);
}

/// Scratch mode of the bound deck as last requested from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScratchMode {
    #[default]
    Disabled,
    Enabled,
}

impl ScratchMode {
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Binds the controls of a single deck.
///
/// Owns both the configuration and the scratch mode state. Independent
/// instances could be used for binding multiple decks.
///
/// The scratch mode state is never modified out-of-band, i.e. it must
/// always reflect the state of the engine.
#[derive(Debug, Clone, Default)]
pub struct ControllerBinding {
    config: BindingConfig,
    scratch_mode: ScratchMode,
}

impl ControllerBinding {
    #[must_use]
    pub const fn new(config: BindingConfig) -> Self {
        Self {
            config,
            scratch_mode: ScratchMode::Disabled,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &BindingConfig {
        &self.config
    }

    #[must_use]
    pub const fn scratch_mode(&self) -> ScratchMode {
        self.scratch_mode
    }

    /// Enable scratch mode while held and disable it on release.
    ///
    /// Redundant presses and releases are ignored.
    pub fn handle_scratch_hold<E>(&mut self, engine: &mut E, value: i32)
    where
        E: Engine + ?Sized,
    {
        let BindingConfig {
            deck_number,
            scratch,
            ..
        } = &self.config;
        match self.scratch_mode {
            ScratchMode::Disabled if value > 0 => {
                log::debug!("Enabling scratch mode of deck {deck_number}");
                engine.scratch_enable(
                    *deck_number,
                    scratch.intervals_per_rev,
                    scratch.rpm,
                    scratch.alpha,
                    scratch.beta,
                    scratch.ramp,
                );
                self.scratch_mode = ScratchMode::Enabled;
            }
            ScratchMode::Enabled if value == 0 => {
                log::debug!("Disabling scratch mode of deck {deck_number}");
                engine.scratch_disable(*deck_number, scratch.ramp);
                self.scratch_mode = ScratchMode::Disabled;
            }
            scratch_mode => {
                log::trace!("Ignoring scratch hold value {value} in mode {scratch_mode:?}");
            }
        }
    }

    /// Scratch while in scratch mode or nudge the playback speed otherwise.
    pub fn handle_jog_tick<E>(&mut self, engine: &mut E, value: i32)
    where
        E: Engine + ?Sized,
    {
        let delta = value.saturating_sub(JOG_CENTER_VALUE.into());
        if delta == 0 {
            return;
        }
        if self.scratch_mode.is_enabled() {
            engine.scratch_tick(self.config.deck_number, delta);
        } else {
            let amount = f64::from(delta) / JOG_NUDGE_DIVISOR;
            engine.set_value(self.config.deck_group.as_str(), JOG_PARAMETER, amount);
        }
    }

    /// Start the sampler on press. Releases are ignored.
    ///
    /// Repeated presses retrigger the sample.
    pub fn handle_play_sample<E>(&mut self, engine: &mut E, value: i32)
    where
        E: Engine + ?Sized,
    {
        if value <= 0 {
            return;
        }
        log::debug!("Triggering sample {group}", group = self.config.sampler_group);
        engine.set_value(self.config.sampler_group.as_str(), START_PLAY_PARAMETER, 1.0);
    }

    /// Map the fader position linearly onto the deck volume.
    pub fn handle_volume<E>(&mut self, engine: &mut E, value: i32)
    where
        E: Engine + ?Sized,
    {
        let level = f64::from(value) / VOLUME_MAX_VALUE;
        engine.set_value(self.config.deck_group.as_str(), VOLUME_PARAMETER, level);
    }
}

impl<E> ControlHandler<E> for ControllerBinding
where
    E: Engine + ?Sized,
{
    fn scratch_hold(&mut self, engine: &mut E, event: ControlEvent<'_>) {
        self.handle_scratch_hold(engine, event.value);
    }

    fn jog_tick(&mut self, engine: &mut E, event: ControlEvent<'_>) {
        self.handle_jog_tick(engine, event.value);
    }

    fn play_sample(&mut self, engine: &mut E, event: ControlEvent<'_>) {
        self.handle_play_sample(engine, event.value);
    }

    fn volume(&mut self, engine: &mut E, event: ControlEvent<'_>) {
        self.handle_volume(engine, event.value);
    }
}
