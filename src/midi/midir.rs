// SPDX-FileCopyrightText: The scratchbind authors
// SPDX-License-Identifier: MPL-2.0

use midir::{
    ConnectError, Ignore, InitError, MidiInput, MidiInputConnection, MidiOutput, PortInfoError,
    SendError,
};
use thiserror::Error;

use super::{MidiInputHandler, MidiOutputConnection, TimeStamp};
use crate::{OutputError, OutputResult};

#[derive(Debug, Error)]
pub enum MidiPortError {
    #[error("no MIDI port with name prefix \"{prefix}\"")]
    NotFound { prefix: String },
    #[error(transparent)]
    Init(#[from] InitError),
    #[error(transparent)]
    PortInfo(#[from] PortInfoError),
    #[error(transparent)]
    ConnectInput(#[from] ConnectError<MidiInput>),
    #[error(transparent)]
    ConnectOutput(#[from] ConnectError<MidiOutput>),
}

impl From<SendError> for OutputError {
    fn from(err: SendError) -> Self {
        OutputError::Send {
            msg: err.to_string().into(),
        }
    }
}

impl MidiOutputConnection for midir::MidiOutputConnection {
    fn send_midi_output(&mut self, output: &[u8]) -> OutputResult<()> {
        log::trace!("Sending MIDI output: {output:0x?}");
        self.send(output).map_err(Into::into)
    }
}

// Adapter for the midir callback closure
fn handle_input<I>(micros: u64, input: &[u8], input_handler: &mut I)
where
    I: MidiInputHandler,
{
    let ts = TimeStamp::from_micros(micros);
    log::trace!("Received MIDI input: {ts} {input:0x?}");
    if !input_handler.handle_midi_input(ts, input) {
        log::warn!("Unhandled MIDI input {ts} {input:x?}");
    }
}

/// Find the first port whose name starts with `port_name_prefix`.
///
/// Fails if the name of any port preceding the match could not be queried.
fn find_port_by_name_prefix<P, E>(
    ports: impl IntoIterator<Item = P>,
    port_name: impl Fn(&P) -> Result<String, E>,
    port_name_prefix: &str,
) -> Result<Option<(P, String)>, E> {
    for port in ports {
        let name = port_name(&port)?;
        if name.starts_with(port_name_prefix) {
            return Ok(Some((port, name)));
        }
    }
    Ok(None)
}

/// Input port connected through [`midir`].
///
/// Incoming messages are passed to the handler on the thread of
/// the MIDI backend.
#[allow(missing_debug_implementations)]
pub struct MidirInput<I>
where
    I: MidiInputHandler + 'static,
{
    port_name: String,
    connection: MidiInputConnection<I>,
}

impl<I> MidirInput<I>
where
    I: MidiInputHandler + 'static,
{
    /// Connect the first input port whose name starts with `port_name_prefix`.
    pub fn connect(
        client_name: &str,
        port_name_prefix: &str,
        input_handler: I,
    ) -> Result<Self, MidiPortError> {
        let mut input = MidiInput::new(client_name)?;
        input.ignore(Ignore::None);
        let Some((port, port_name)) = find_port_by_name_prefix(
            input.ports(),
            |port| input.port_name(port),
            port_name_prefix,
        )?
        else {
            return Err(MidiPortError::NotFound {
                prefix: port_name_prefix.to_owned(),
            });
        };
        log::info!("Connecting MIDI input port \"{port_name}\"");
        let connection = input.connect(&port, &port_name, handle_input::<I>, input_handler)?;
        Ok(Self {
            port_name,
            connection,
        })
    }

    #[must_use]
    pub fn port_name(&self) -> &str {
        &self.port_name
    }

    /// Disconnect and recover the handler.
    #[must_use]
    pub fn close(self) -> I {
        let Self {
            port_name,
            connection,
        } = self;
        log::info!("Disconnecting MIDI input port \"{port_name}\"");
        let (_input, input_handler) = connection.close();
        input_handler
    }
}

/// Connect the first output port whose name starts with `port_name_prefix`.
///
/// Returns the full port name together with the connection.
pub fn connect_output(
    client_name: &str,
    port_name_prefix: &str,
) -> Result<(String, midir::MidiOutputConnection), MidiPortError> {
    let output = MidiOutput::new(client_name)?;
    let Some((port, port_name)) = find_port_by_name_prefix(
        output.ports(),
        |port| output.port_name(port),
        port_name_prefix,
    )?
    else {
        return Err(MidiPortError::NotFound {
            prefix: port_name_prefix.to_owned(),
        });
    };
    log::info!("Connecting MIDI output port \"{port_name}\"");
    let connection = output.connect(&port, &port_name)?;
    Ok((port_name, connection))
}
