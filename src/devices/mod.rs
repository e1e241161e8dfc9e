// SPDX-FileCopyrightText: The scratchbind authors
// SPDX-License-Identifier: MPL-2.0

pub mod wearable_test;

// Descriptors of supported MIDI controllers for auto-detection.
pub const MIDI_CONTROLLER_DESCRIPTORS: &[&crate::MidiDeviceDescriptor] =
    &[crate::devices::wearable_test::MIDI_DEVICE_DESCRIPTOR];
