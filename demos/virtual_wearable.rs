// SPDX-FileCopyrightText: The scratchbind authors
// SPDX-License-Identifier: MPL-2.0

//! Plays back a short scratch routine on the WearableTest port,
//! e.g. for testing a mapping without the hardware.

use std::thread::sleep;

use scratchbind::{
    devices::wearable_test::{
        JogDirection, OutputGateway, VolumeStep, JOG_TICK_INTERVAL, MIDI_DEVICE_DESCRIPTOR,
    },
    midi::connect_output,
    MidiOutputGateway as _,
};

const TICKS_PER_STROKE: usize = 8;

fn main() {
    pretty_env_logger::init();

    match run() {
        Ok(()) => (),
        Err(err) => log::error!("{err}"),
    }
}

fn run() -> anyhow::Result<()> {
    // The connect error of some backends is not `Sync` and cannot
    // be converted into `anyhow::Error` directly.
    let (port_name, connection) =
        connect_output("scratchbind", MIDI_DEVICE_DESCRIPTOR.port_name_prefix)
            .map_err(|err| anyhow::anyhow!("{err}"))?;
    println!("{port_name}: Connected");

    let mut gateway = OutputGateway::default();
    gateway.attach_midi_output_connection(&mut Some(connection))?;

    for step in [VolumeStep::Up, VolumeStep::Up, VolumeStep::Down] {
        let volume = gateway.step_volume(step)?;
        println!("Volume: {volume}");
    }

    for direction in [
        JogDirection::Forward,
        JogDirection::Backward,
        JogDirection::Forward,
    ] {
        println!("Scratching {direction:?}");
        gateway.start_jog(direction)?;
        sleep(JOG_TICK_INTERVAL);
        for _ in 1..TICKS_PER_STROKE {
            gateway.tick_jog()?;
            sleep(JOG_TICK_INTERVAL);
        }
    }
    gateway.stop_jog()?;

    println!("Nudging forward");
    for _ in 0..TICKS_PER_STROKE {
        gateway.send_jog_tick(JogDirection::Forward)?;
        sleep(JOG_TICK_INTERVAL);
    }

    println!("Triggering sample");
    gateway.trigger_sample()?;

    drop(gateway.detach_midi_output_connection());
    Ok(())
}
