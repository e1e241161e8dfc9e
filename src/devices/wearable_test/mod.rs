// SPDX-FileCopyrightText: The scratchbind authors
// SPDX-License-Identifier: MPL-2.0

//! # WearableTest
//!
//! Glove-style controller with a single jog wheel, a scratch hold
//! button, a sample pad, and a volume fader. All controls send on
//! MIDI channel 1.

use crate::{
    midi::{channel_status, MIDI_STATUS_CC, MIDI_STATUS_NOTE_OFF, MIDI_STATUS_NOTE_ON},
    MidiDeviceDescriptor,
};

mod input;
pub use self::input::{try_decode_midi_input, InputGateway, Sensor, SensorInput};

mod output;
pub use self::output::{
    jog_tick_value, JogDirection, OutputGateway, VolumeStep, JOG_TICK_INTERVAL, JOG_TICK_STEP,
    VOLUME_DEFAULT, VOLUME_STEP,
};

#[cfg(test)]
mod tests;

pub const MIDI_DEVICE_DESCRIPTOR: &MidiDeviceDescriptor = &MidiDeviceDescriptor {
    vendor_name: "DIY",
    model_name: "WearableTest",
    port_name_prefix: "WearableTest",
};

pub const MIDI_CHANNEL: u8 = 0;

const MIDI_STATUS_BUTTON_PRESS: u8 = channel_status(MIDI_STATUS_NOTE_ON, MIDI_CHANNEL);
const MIDI_STATUS_BUTTON_RELEASE: u8 = channel_status(MIDI_STATUS_NOTE_OFF, MIDI_CHANNEL);
const MIDI_STATUS_CONTROL: u8 = channel_status(MIDI_STATUS_CC, MIDI_CHANNEL);

// Notes
const MIDI_SCRATCH_HOLD_BUTTON: u8 = 60;
const MIDI_PLAY_SAMPLE_BUTTON: u8 = 65;

// Controllers
const MIDI_VOLUME_FADER: u8 = 7;
const MIDI_JOG_WHEEL: u8 = 16;

const MIDI_BUTTON_VALUE_PRESSED: u8 = 0x7f;
const MIDI_BUTTON_VALUE_RELEASED: u8 = 0x00;
