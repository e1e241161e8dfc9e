// SPDX-FileCopyrightText: The scratchbind authors
// SPDX-License-Identifier: MPL-2.0

//! MIDI plumbing independent of the transport.

use std::ops::{Deref, DerefMut};

use derive_more::Display;
use thiserror::Error;

use crate::OutputResult;

#[cfg(feature = "midir")]
mod midir;
#[cfg(feature = "midir")]
pub use self::midir::{connect_output, MidiPortError, MidirInput};

pub const MIDI_STATUS_NOTE_OFF: u8 = 0x80;

pub const MIDI_STATUS_NOTE_ON: u8 = 0x90;

pub const MIDI_STATUS_CC: u8 = 0xb0;

pub const MIDI_DATA_MAX: u8 = 0x7f;

/// Status byte of a channel message.
///
/// `channel` is zero-based, i.e. 0 addresses MIDI channel 1.
#[must_use]
pub const fn channel_status(message: u8, channel: u8) -> u8 {
    (message & 0xf0) | (channel & 0x0f)
}

/// Zero-based channel of a channel message.
#[must_use]
pub const fn status_channel(status: u8) -> u8 {
    status & 0x0f
}

/// Time stamp of received MIDI messages with microsecond precision.
///
/// The origin is transport specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{_0}us")]
pub struct TimeStamp(u64);

impl TimeStamp {
    #[must_use]
    pub const fn from_micros(micros: u64) -> Self {
        Self(micros)
    }

    #[must_use]
    pub const fn to_micros(self) -> u64 {
        self.0
    }
}

/// Static properties of a MIDI device for detecting its ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidiDeviceDescriptor {
    pub vendor_name: &'static str,
    pub model_name: &'static str,
    pub port_name_prefix: &'static str,
}

#[derive(Debug, Error)]
#[error("invalid MIDI input")]
pub struct MidiInputDecodeError;

/// Passive callback for sinking MIDI input messages
pub trait MidiInputHandler: Send {
    /// Invoked for each incoming message.
    ///
    /// Returns `true` if the message has been accepted and handled
    /// or `false` otherwise.
    #[must_use]
    fn handle_midi_input(&mut self, ts: TimeStamp, input: &[u8]) -> bool;
}

impl<D> MidiInputHandler for D
where
    D: DerefMut + Send,
    <D as Deref>::Target: MidiInputHandler,
{
    fn handle_midi_input(&mut self, ts: TimeStamp, input: &[u8]) -> bool {
        self.deref_mut().handle_midi_input(ts, input)
    }
}

pub trait MidiOutputConnection {
    fn send_midi_output(&mut self, output: &[u8]) -> OutputResult<()>;
}

pub trait MidiOutputGateway<C> {
    fn attach_midi_output_connection(
        &mut self,
        midi_output_connection: &mut Option<C>,
    ) -> OutputResult<()>;

    fn detach_midi_output_connection(&mut self) -> Option<C>;
}
