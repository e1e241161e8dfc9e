// SPDX-FileCopyrightText: The scratchbind authors
// SPDX-License-Identifier: MPL-2.0

//! Sending side of the controller, e.g. for emulating the
//! device in software.

use std::time::Duration;

use super::{
    MIDI_BUTTON_VALUE_PRESSED, MIDI_BUTTON_VALUE_RELEASED, MIDI_JOG_WHEEL, MIDI_PLAY_SAMPLE_BUTTON,
    MIDI_SCRATCH_HOLD_BUTTON, MIDI_STATUS_BUTTON_PRESS, MIDI_STATUS_BUTTON_RELEASE,
    MIDI_STATUS_CONTROL, MIDI_VOLUME_FADER,
};
use crate::{
    midi::MIDI_DATA_MAX, MidiOutputConnection, MidiOutputGateway, OutputError, OutputResult,
    JOG_CENTER_VALUE,
};

/// Offset from the center value per jog tick.
pub const JOG_TICK_STEP: u8 = 6;

/// Interval between subsequent jog ticks while the wheel keeps moving.
pub const JOG_TICK_INTERVAL: Duration = Duration::from_millis(50);

pub const VOLUME_DEFAULT: u8 = 80;

pub const VOLUME_STEP: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JogDirection {
    /// Clockwise
    Forward,
    /// Counter-clockwise
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeStep {
    Up,
    Down,
}

/// Value of a single jog tick, clamped to the range 1..=127.
#[must_use]
pub const fn jog_tick_value(direction: JogDirection) -> u8 {
    match direction {
        JogDirection::Forward => {
            let value = JOG_CENTER_VALUE.saturating_add(JOG_TICK_STEP);
            if value > MIDI_DATA_MAX {
                MIDI_DATA_MAX
            } else {
                value
            }
        }
        JogDirection::Backward => {
            let value = JOG_CENTER_VALUE.saturating_sub(JOG_TICK_STEP);
            if value < 1 {
                1
            } else {
                value
            }
        }
    }
}

#[allow(missing_debug_implementations)]
pub struct OutputGateway<C> {
    midi_output_connection: Option<C>,
    volume: u8,
    jog_direction: Option<JogDirection>,
}

impl<C> Default for OutputGateway<C> {
    fn default() -> Self {
        Self {
            midi_output_connection: None,
            volume: VOLUME_DEFAULT,
            jog_direction: None,
        }
    }
}

impl<C> OutputGateway<C> {
    /// Last volume that has been sent.
    #[must_use]
    pub const fn volume(&self) -> u8 {
        self.volume
    }

    /// Direction of the current jog stroke.
    ///
    /// `None` while the wheel is at rest.
    #[must_use]
    pub const fn jog_direction(&self) -> Option<JogDirection> {
        self.jog_direction
    }
}

impl<C: MidiOutputConnection> OutputGateway<C> {
    fn send_midi_output(&mut self, output: &[u8]) -> OutputResult<()> {
        let Some(midi_output_connection) = &mut self.midi_output_connection else {
            return Err(OutputError::Disconnected);
        };
        midi_output_connection.send_midi_output(output)
    }

    pub fn press_scratch_hold(&mut self) -> OutputResult<()> {
        self.send_midi_output(&[
            MIDI_STATUS_BUTTON_PRESS,
            MIDI_SCRATCH_HOLD_BUTTON,
            MIDI_BUTTON_VALUE_PRESSED,
        ])
    }

    pub fn release_scratch_hold(&mut self) -> OutputResult<()> {
        self.send_midi_output(&[
            MIDI_STATUS_BUTTON_RELEASE,
            MIDI_SCRATCH_HOLD_BUTTON,
            MIDI_BUTTON_VALUE_RELEASED,
        ])
    }

    pub fn send_jog_tick(&mut self, direction: JogDirection) -> OutputResult<()> {
        self.send_midi_output(&[
            MIDI_STATUS_CONTROL,
            MIDI_JOG_WHEEL,
            jog_tick_value(direction),
        ])
    }

    /// Start or redirect a jog stroke and send the first tick.
    ///
    /// Scratch hold is only pressed when the wheel starts moving,
    /// not when the direction changes during a stroke.
    pub fn start_jog(&mut self, direction: JogDirection) -> OutputResult<()> {
        let already_moving = self.jog_direction.replace(direction).is_some();
        if !already_moving {
            self.press_scratch_hold()?;
        }
        self.send_jog_tick(direction)
    }

    /// Send the next tick of the current jog stroke.
    ///
    /// Supposed to be invoked every [`JOG_TICK_INTERVAL`]. Returns
    /// `false` without sending anything while the wheel is at rest.
    pub fn tick_jog(&mut self) -> OutputResult<bool> {
        let Some(direction) = self.jog_direction else {
            return Ok(false);
        };
        self.send_jog_tick(direction)?;
        Ok(true)
    }

    /// Finish the current jog stroke and release scratch hold.
    ///
    /// Does nothing while the wheel is at rest.
    pub fn stop_jog(&mut self) -> OutputResult<()> {
        if self.jog_direction.take().is_none() {
            return Ok(());
        }
        self.release_scratch_hold()
    }

    /// Tap the sample pad.
    ///
    /// The release is sent as a Note On with velocity 0.
    pub fn trigger_sample(&mut self) -> OutputResult<()> {
        self.send_midi_output(&[
            MIDI_STATUS_BUTTON_PRESS,
            MIDI_PLAY_SAMPLE_BUTTON,
            MIDI_BUTTON_VALUE_PRESSED,
        ])?;
        self.send_midi_output(&[
            MIDI_STATUS_BUTTON_PRESS,
            MIDI_PLAY_SAMPLE_BUTTON,
            MIDI_BUTTON_VALUE_RELEASED,
        ])
    }

    /// Move the volume fader by [`VOLUME_STEP`] and send the new value.
    ///
    /// The volume is updated even if sending fails.
    pub fn step_volume(&mut self, step: VolumeStep) -> OutputResult<u8> {
        self.volume = match step {
            VolumeStep::Up => self.volume.saturating_add(VOLUME_STEP).min(MIDI_DATA_MAX),
            VolumeStep::Down => self.volume.saturating_sub(VOLUME_STEP),
        };
        let volume = self.volume;
        self.send_midi_output(&[MIDI_STATUS_CONTROL, MIDI_VOLUME_FADER, volume])?;
        Ok(volume)
    }
}

impl<C> MidiOutputGateway<C> for OutputGateway<C> {
    fn attach_midi_output_connection(
        &mut self,
        midi_output_connection: &mut Option<C>,
    ) -> OutputResult<()> {
        assert!(self.midi_output_connection.is_none());
        assert!(midi_output_connection.is_some());
        self.midi_output_connection = midi_output_connection.take();
        Ok(())
    }

    fn detach_midi_output_connection(&mut self) -> Option<C> {
        self.midi_output_connection.take()
    }
}
