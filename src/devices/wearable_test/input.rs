// SPDX-FileCopyrightText: The scratchbind authors
// SPDX-License-Identifier: MPL-2.0

use strum::{EnumIter, FromRepr};

use super::{
    MIDI_BUTTON_VALUE_RELEASED, MIDI_JOG_WHEEL, MIDI_PLAY_SAMPLE_BUTTON, MIDI_SCRATCH_HOLD_BUTTON,
    MIDI_STATUS_BUTTON_PRESS, MIDI_STATUS_BUTTON_RELEASE, MIDI_STATUS_CONTROL, MIDI_VOLUME_FADER,
};
use crate::{
    midi::{status_channel, MIDI_DATA_MAX},
    ControlEvent, ControlHandler, ControllerBinding, Engine, Group, MidiInputDecodeError,
    MidiInputHandler, TimeStamp,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, EnumIter)]
#[repr(u8)]
pub enum Sensor {
    ScratchHoldButton,
    PlaySampleButton,
    JogWheel,
    VolumeFader,
}

impl Sensor {
    /// Note or controller number
    #[must_use]
    pub const fn midi_control(self) -> u8 {
        match self {
            Self::ScratchHoldButton => MIDI_SCRATCH_HOLD_BUTTON,
            Self::PlaySampleButton => MIDI_PLAY_SAMPLE_BUTTON,
            Self::JogWheel => MIDI_JOG_WHEEL,
            Self::VolumeFader => MIDI_VOLUME_FADER,
        }
    }

    /// Controls that affect the deck, i.e. all but the sample pad.
    #[must_use]
    pub const fn is_deck_control(self) -> bool {
        !matches!(self, Self::PlaySampleButton)
    }
}

/// A decoded message of a known sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorInput {
    pub sensor: Sensor,
    pub status: u8,
    pub control: u8,
    /// 7-bit value
    ///
    /// Always 0 for Note Off messages, independent of the release velocity.
    pub value: u8,
}

/// Decode a raw MIDI message.
///
/// Messages on other channels and unknown controls are
/// silently ignored, i.e. decoded as `None`.
pub fn try_decode_midi_input(input: &[u8]) -> Result<Option<SensorInput>, MidiInputDecodeError> {
    let [status, data1, data2] = *input else {
        return Err(MidiInputDecodeError);
    };
    if data1 > MIDI_DATA_MAX || data2 > MIDI_DATA_MAX {
        return Err(MidiInputDecodeError);
    }
    let (sensor, value) = match (status, data1) {
        (MIDI_STATUS_BUTTON_PRESS, MIDI_SCRATCH_HOLD_BUTTON) => (Sensor::ScratchHoldButton, data2),
        (MIDI_STATUS_BUTTON_RELEASE, MIDI_SCRATCH_HOLD_BUTTON) => {
            (Sensor::ScratchHoldButton, MIDI_BUTTON_VALUE_RELEASED)
        }
        (MIDI_STATUS_BUTTON_PRESS, MIDI_PLAY_SAMPLE_BUTTON) => (Sensor::PlaySampleButton, data2),
        (MIDI_STATUS_BUTTON_RELEASE, MIDI_PLAY_SAMPLE_BUTTON) => {
            (Sensor::PlaySampleButton, MIDI_BUTTON_VALUE_RELEASED)
        }
        (MIDI_STATUS_CONTROL, MIDI_JOG_WHEEL) => (Sensor::JogWheel, data2),
        (MIDI_STATUS_CONTROL, MIDI_VOLUME_FADER) => (Sensor::VolumeFader, data2),
        _ => {
            return Ok(None);
        }
    };
    Ok(Some(SensorInput {
        sensor,
        status,
        control: data1,
        value,
    }))
}

/// Decodes MIDI input and dispatches it to a [`ControlHandler`].
///
/// Owns both the handler and the engine, e.g. for moving them onto
/// the thread of the MIDI backend.
#[allow(missing_debug_implementations)]
pub struct InputGateway<H, E> {
    handler: H,
    engine: E,
    deck_group: Group,
    sampler_group: Group,
}

impl<E> InputGateway<ControllerBinding, E> {
    /// Dispatch to a binding, using the groups of its configuration.
    #[must_use]
    pub fn new(binding: ControllerBinding, engine: E) -> Self {
        let deck_group = binding.config().deck_group.clone();
        let sampler_group = binding.config().sampler_group.clone();
        Self::with_groups(binding, engine, deck_group, sampler_group)
    }
}

impl<H, E> InputGateway<H, E> {
    #[must_use]
    pub const fn with_groups(
        handler: H,
        engine: E,
        deck_group: Group,
        sampler_group: Group,
    ) -> Self {
        Self {
            handler,
            engine,
            deck_group,
            sampler_group,
        }
    }

    #[must_use]
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    #[must_use]
    pub const fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    #[must_use]
    pub fn into_inner(self) -> (H, E) {
        let Self {
            handler, engine, ..
        } = self;
        (handler, engine)
    }
}

impl<H, E> InputGateway<H, E>
where
    H: ControlHandler<E>,
    E: Engine,
{
    pub fn handle_sensor_input(&mut self, input: SensorInput) {
        let SensorInput {
            sensor,
            status,
            control,
            value,
        } = input;
        let group = if sensor.is_deck_control() {
            &self.deck_group
        } else {
            &self.sampler_group
        };
        log::debug!("{sensor:?}@{group}: {value}");
        let event = ControlEvent {
            channel: status_channel(status),
            control,
            value: value.into(),
            status,
            group: group.as_str(),
        };
        match sensor {
            Sensor::ScratchHoldButton => self.handler.scratch_hold(&mut self.engine, event),
            Sensor::PlaySampleButton => self.handler.play_sample(&mut self.engine, event),
            Sensor::JogWheel => self.handler.jog_tick(&mut self.engine, event),
            Sensor::VolumeFader => self.handler.volume(&mut self.engine, event),
        }
    }
}

impl<H, E> MidiInputHandler for InputGateway<H, E>
where
    H: ControlHandler<E> + Send,
    E: Engine + Send,
{
    fn handle_midi_input(&mut self, ts: TimeStamp, input: &[u8]) -> bool {
        match try_decode_midi_input(input) {
            Ok(Some(sensor_input)) => {
                self.handle_sensor_input(sensor_input);
                true
            }
            Ok(None) => {
                log::debug!("Ignoring MIDI input: {ts} {input:x?}");
                true
            }
            Err(MidiInputDecodeError) => {
                log::warn!("Failed to decode MIDI input: {ts} {input:x?}");
                false
            }
        }
    }
}
