// SPDX-FileCopyrightText: The scratchbind authors
// SPDX-License-Identifier: MPL-2.0

use std::io::stdin;

use scratchbind::{
    devices::wearable_test::{InputGateway, MIDI_DEVICE_DESCRIPTOR},
    midi::MidirInput,
    ControllerBinding, DeckNumber, Engine,
};

/// Logs all invocations instead of controlling a real engine.
#[derive(Debug, Default)]
struct LogEngine;

impl Engine for LogEngine {
    fn scratch_enable(
        &mut self,
        deck: DeckNumber,
        intervals_per_rev: u32,
        rpm: f64,
        alpha: f64,
        beta: f64,
        ramp: bool,
    ) {
        log::info!(
            "scratch_enable: deck = {deck}, intervals_per_rev = {intervals_per_rev}, rpm = \
             {rpm}, alpha = {alpha}, beta = {beta}, ramp = {ramp}"
        );
    }

    fn scratch_disable(&mut self, deck: DeckNumber, ramp: bool) {
        log::info!("scratch_disable: deck = {deck}, ramp = {ramp}");
    }

    fn scratch_tick(&mut self, deck: DeckNumber, delta: i32) {
        log::info!("scratch_tick: deck = {deck}, delta = {delta}");
    }

    fn set_value(&mut self, group: &str, parameter: &str, value: f64) {
        log::info!("set_value: {group} {parameter} = {value}");
    }
}

fn main() {
    pretty_env_logger::init();

    match run() {
        Ok(()) => (),
        Err(err) => log::error!("{err}"),
    }
}

fn run() -> anyhow::Result<()> {
    let gateway = InputGateway::new(ControllerBinding::default(), LogEngine);
    // The connect error of some backends is not `Sync` and cannot
    // be converted into `anyhow::Error` directly.
    let input = MidirInput::connect(
        "scratchbind",
        MIDI_DEVICE_DESCRIPTOR.port_name_prefix,
        gateway,
    )
    .map_err(|err| anyhow::anyhow!("{err}"))?;
    println!(
        "{port_name}: Connected, press RETURN to exit...",
        port_name = input.port_name()
    );
    stdin().read_line(&mut String::new())?;

    let (binding, LogEngine) = input.close().into_inner();
    println!(
        "Exiting with scratch mode {scratch_mode:?}",
        scratch_mode = binding.scratch_mode()
    );
    Ok(())
}
