// SPDX-FileCopyrightText: The scratchbind authors
// SPDX-License-Identifier: MPL-2.0

use strum::IntoEnumIterator as _;

use super::*;
use crate::{
    engine::recording::{EngineCall, RecordingEngine},
    BindingConfig, ControllerBinding, Group, MidiInputHandler, MidiOutputConnection,
    MidiOutputGateway, OutputError, OutputResult, ScratchMode, TimeStamp, JOG_CENTER_VALUE,
    JOG_PARAMETER, START_PLAY_PARAMETER, VOLUME_PARAMETER,
};

const TS: TimeStamp = TimeStamp::from_micros(0);

fn new_input_gateway() -> InputGateway<ControllerBinding, RecordingEngine> {
    InputGateway::new(ControllerBinding::default(), RecordingEngine::default())
}

#[derive(Debug, Default)]
struct RecordingConnection {
    sent: Vec<Vec<u8>>,
}

impl MidiOutputConnection for RecordingConnection {
    fn send_midi_output(&mut self, output: &[u8]) -> OutputResult<()> {
        self.sent.push(output.to_vec());
        Ok(())
    }
}

fn connected_output_gateway() -> OutputGateway<RecordingConnection> {
    let mut gateway = OutputGateway::default();
    gateway
        .attach_midi_output_connection(&mut Some(RecordingConnection::default()))
        .unwrap();
    gateway
}

fn take_sent(gateway: &mut OutputGateway<RecordingConnection>) -> Vec<Vec<u8>> {
    let mut connection = gateway.detach_midi_output_connection().unwrap();
    let sent = std::mem::take(&mut connection.sent);
    gateway
        .attach_midi_output_connection(&mut Some(connection))
        .unwrap();
    sent
}

#[test]
fn decode_scratch_hold() {
    let pressed = try_decode_midi_input(&[0x90, 60, 127]).unwrap().unwrap();
    assert_eq!(Sensor::ScratchHoldButton, pressed.sensor);
    assert_eq!(127, pressed.value);

    let released = try_decode_midi_input(&[0x80, 60, 64]).unwrap().unwrap();
    assert_eq!(Sensor::ScratchHoldButton, released.sensor);
    assert_eq!(0, released.value);

    let released = try_decode_midi_input(&[0x90, 60, 0]).unwrap().unwrap();
    assert_eq!(Sensor::ScratchHoldButton, released.sensor);
    assert_eq!(0, released.value);
}

#[test]
fn decode_controls() {
    assert_eq!(
        Some(SensorInput {
            sensor: Sensor::JogWheel,
            status: 0xb0,
            control: 16,
            value: 70,
        }),
        try_decode_midi_input(&[0xb0, 16, 70]).unwrap()
    );
    assert_eq!(
        Sensor::VolumeFader,
        try_decode_midi_input(&[0xb0, 7, 80])
            .unwrap()
            .unwrap()
            .sensor
    );
    assert_eq!(
        Sensor::PlaySampleButton,
        try_decode_midi_input(&[0x90, 65, 127])
            .unwrap()
            .unwrap()
            .sensor
    );
}

#[test]
fn decode_each_sensor_by_its_midi_control() {
    for sensor in Sensor::iter() {
        let status = match sensor {
            Sensor::ScratchHoldButton | Sensor::PlaySampleButton => 0x90,
            Sensor::JogWheel | Sensor::VolumeFader => 0xb0,
        };
        let decoded = try_decode_midi_input(&[status, sensor.midi_control(), 1])
            .unwrap()
            .unwrap();
        assert_eq!(sensor, decoded.sensor);
        assert_eq!(Some(sensor), Sensor::from_repr(sensor as u8));
    }
}

#[test]
fn ignore_unmapped_input() {
    // Other channel
    assert!(try_decode_midi_input(&[0x91, 60, 127]).unwrap().is_none());
    assert!(try_decode_midi_input(&[0xb1, 16, 70]).unwrap().is_none());
    // Other controls
    assert!(try_decode_midi_input(&[0x90, 61, 127]).unwrap().is_none());
    assert!(try_decode_midi_input(&[0xb0, 60, 127]).unwrap().is_none());
    // Jog wheel as note
    assert!(try_decode_midi_input(&[0x90, 16, 127]).unwrap().is_none());
    // Other message types
    assert!(try_decode_midi_input(&[0xe0, 0, 64]).unwrap().is_none());
}

#[test]
fn reject_malformed_input() {
    assert!(try_decode_midi_input(&[]).is_err());
    assert!(try_decode_midi_input(&[0x90, 60]).is_err());
    assert!(try_decode_midi_input(&[0x90, 60, 127, 0]).is_err());
    assert!(try_decode_midi_input(&[0x90, 60, 0x80]).is_err());
}

#[test]
fn dispatch_scratch_gesture() {
    let mut gateway = new_input_gateway();
    assert!(gateway.handle_midi_input(TS, &[0x90, 60, 127]));
    assert!(gateway.handle_midi_input(TS, &[0xb0, 16, 70]));
    assert!(gateway.handle_midi_input(TS, &[0xb0, 16, 58]));
    assert!(gateway.handle_midi_input(TS, &[0x80, 60, 0]));
    assert!(gateway.handle_midi_input(TS, &[0xb0, 16, 70]));
    assert_eq!(ScratchMode::Disabled, gateway.handler().scratch_mode());

    let (binding, mut engine) = gateway.into_inner();
    let scratch = binding.config().scratch;
    assert_eq!(
        vec![
            EngineCall::ScratchEnable {
                deck: 1,
                intervals_per_rev: scratch.intervals_per_rev,
                rpm: scratch.rpm,
                alpha: scratch.alpha,
                beta: scratch.beta,
                ramp: scratch.ramp,
            },
            EngineCall::ScratchTick { deck: 1, delta: 6 },
            EngineCall::ScratchTick { deck: 1, delta: -6 },
            EngineCall::ScratchDisable {
                deck: 1,
                ramp: true
            },
            EngineCall::set_value("[Channel1]", JOG_PARAMETER, 6.0 / 256.0),
        ],
        engine.take_calls()
    );
}

#[test]
fn dispatch_sample_and_volume() {
    let mut gateway = new_input_gateway();
    assert!(gateway.handle_midi_input(TS, &[0x90, 65, 127]));
    assert!(gateway.handle_midi_input(TS, &[0x90, 65, 0]));
    assert!(gateway.handle_midi_input(TS, &[0x80, 65, 0]));
    assert!(gateway.handle_midi_input(TS, &[0xb0, 7, 127]));
    assert_eq!(
        vec![
            EngineCall::set_value("[Sampler1]", START_PLAY_PARAMETER, 1.0),
            EngineCall::set_value("[Channel1]", VOLUME_PARAMETER, 1.0),
        ],
        gateway.engine_mut().take_calls()
    );
}

#[test]
fn dispatch_to_configured_groups() {
    let binding = ControllerBinding::new(BindingConfig {
        deck_group: Group::borrowed("[Channel2]"),
        deck_number: 2,
        sampler_group: Group::borrowed("[Sampler4]"),
        ..Default::default()
    });
    let mut gateway = InputGateway::new(binding, RecordingEngine::default());
    assert!(gateway.handle_midi_input(TS, &[0xb0, 16, 63]));
    assert!(gateway.handle_midi_input(TS, &[0x90, 65, 100]));
    assert_eq!(
        vec![
            EngineCall::set_value("[Channel2]", JOG_PARAMETER, -1.0 / 256.0),
            EngineCall::set_value("[Sampler4]", START_PLAY_PARAMETER, 1.0),
        ],
        gateway.engine_mut().take_calls()
    );
}

#[test]
fn ignored_and_malformed_input_do_not_reach_the_engine() {
    let mut gateway = new_input_gateway();
    assert!(gateway.handle_midi_input(TS, &[0x91, 60, 127]));
    assert!(!gateway.handle_midi_input(TS, &[0x90, 60]));
    assert!(gateway.engine().calls().is_empty());
    assert_eq!(ScratchMode::Disabled, gateway.handler().scratch_mode());
}

#[test]
fn boxed_gateway_is_an_input_handler() {
    let mut handler: Box<dyn MidiInputHandler> = Box::new(new_input_gateway());
    assert!(handler.handle_midi_input(TS, &[0x90, 60, 127]));
}

#[test]
fn jog_tick_values() {
    assert_eq!(70, jog_tick_value(JogDirection::Forward));
    assert_eq!(58, jog_tick_value(JogDirection::Backward));
    assert_eq!(
        JOG_CENTER_VALUE + JOG_TICK_STEP,
        jog_tick_value(JogDirection::Forward)
    );
    assert_eq!(
        JOG_CENTER_VALUE - JOG_TICK_STEP,
        jog_tick_value(JogDirection::Backward)
    );
}

#[test]
fn jog_wheel_at_rest_does_not_reach_the_engine() {
    let mut gateway = new_input_gateway();
    assert!(gateway.handle_midi_input(TS, &[0x90, 60, 127]));
    gateway.engine_mut().take_calls();

    assert!(gateway.handle_midi_input(TS, &[0xb0, 16, JOG_CENTER_VALUE]));
    assert!(gateway.engine().calls().is_empty());
}

#[test]
fn send_without_connection() {
    let mut gateway = OutputGateway::<RecordingConnection>::default();
    assert!(matches!(
        gateway.press_scratch_hold(),
        Err(OutputError::Disconnected)
    ));
}

#[test]
fn send_scratch_gesture() {
    let mut gateway = connected_output_gateway();
    gateway.press_scratch_hold().unwrap();
    gateway.send_jog_tick(JogDirection::Forward).unwrap();
    gateway.send_jog_tick(JogDirection::Backward).unwrap();
    gateway.release_scratch_hold().unwrap();
    assert_eq!(
        vec![
            vec![0x90, 60, 127],
            vec![0xb0, 16, 70],
            vec![0xb0, 16, 58],
            vec![0x80, 60, 0],
        ],
        take_sent(&mut gateway)
    );
}

#[test]
fn jog_stroke_holds_scratch_across_direction_changes() {
    let mut gateway = connected_output_gateway();
    assert_eq!(None, gateway.jog_direction());

    gateway.start_jog(JogDirection::Forward).unwrap();
    gateway.start_jog(JogDirection::Backward).unwrap();
    assert_eq!(Some(JogDirection::Backward), gateway.jog_direction());
    gateway.stop_jog().unwrap();
    assert_eq!(None, gateway.jog_direction());

    let sent = take_sent(&mut gateway);
    assert_eq!(
        vec![
            vec![0x90, 60, 127],
            vec![0xb0, 16, 70],
            vec![0xb0, 16, 58],
            vec![0x80, 60, 0],
        ],
        sent
    );
    assert_eq!(
        1,
        sent.iter()
            .filter(|message| message[..2] == [0x90, 60])
            .count()
    );
    assert_eq!(
        1,
        sent.iter()
            .filter(|message| message[..2] == [0x80, 60])
            .count()
    );
}

#[test]
fn jog_ticks_follow_the_current_direction() {
    let mut gateway = connected_output_gateway();
    assert!(!gateway.tick_jog().unwrap());

    gateway.start_jog(JogDirection::Backward).unwrap();
    assert!(gateway.tick_jog().unwrap());
    gateway.start_jog(JogDirection::Forward).unwrap();
    assert!(gateway.tick_jog().unwrap());
    gateway.stop_jog().unwrap();
    assert!(!gateway.tick_jog().unwrap());

    assert_eq!(
        vec![
            vec![0x90, 60, 127],
            vec![0xb0, 16, 58],
            vec![0xb0, 16, 58],
            vec![0xb0, 16, 70],
            vec![0xb0, 16, 70],
            vec![0x80, 60, 0],
        ],
        take_sent(&mut gateway)
    );
}

#[test]
fn stop_jog_at_rest_sends_nothing() {
    let mut gateway = connected_output_gateway();
    gateway.stop_jog().unwrap();
    assert!(take_sent(&mut gateway).is_empty());
}

#[test]
fn send_sample_trigger() {
    let mut gateway = connected_output_gateway();
    gateway.trigger_sample().unwrap();
    assert_eq!(
        vec![vec![0x90, 65, 127], vec![0x90, 65, 0]],
        take_sent(&mut gateway)
    );
}

#[test]
fn step_volume_within_range() {
    let mut gateway = connected_output_gateway();
    assert_eq!(VOLUME_DEFAULT, gateway.volume());
    assert_eq!(83, gateway.step_volume(VolumeStep::Up).unwrap());
    assert_eq!(80, gateway.step_volume(VolumeStep::Down).unwrap());
    assert_eq!(
        vec![vec![0xb0, 7, 83], vec![0xb0, 7, 80]],
        take_sent(&mut gateway)
    );

    for _ in 0..100 {
        gateway.step_volume(VolumeStep::Up).unwrap();
    }
    assert_eq!(127, gateway.volume());
    for _ in 0..100 {
        gateway.step_volume(VolumeStep::Down).unwrap();
    }
    assert_eq!(0, gateway.volume());
    assert!(take_sent(&mut gateway)
        .iter()
        .all(|sent| sent[2] <= 127));
}

#[test]
fn emulated_device_drives_binding() {
    let mut output = connected_output_gateway();
    output.start_jog(JogDirection::Backward).unwrap();
    output.stop_jog().unwrap();
    output.trigger_sample().unwrap();

    let mut input = new_input_gateway();
    for message in take_sent(&mut output) {
        assert!(input.handle_midi_input(TS, &message));
    }
    let calls = input.engine_mut().take_calls();
    assert_eq!(4, calls.len());
    assert!(matches!(calls[0], EngineCall::ScratchEnable { deck: 1, .. }));
    assert_eq!(EngineCall::ScratchTick { deck: 1, delta: -6 }, calls[1]);
    assert_eq!(
        EngineCall::ScratchDisable {
            deck: 1,
            ramp: true
        },
        calls[2]
    );
    assert_eq!(
        EngineCall::set_value("[Sampler1]", START_PLAY_PARAMETER, 1.0),
        calls[3]
    );
}

#[test]
fn controller_descriptors() {
    assert!(crate::devices::MIDI_CONTROLLER_DESCRIPTORS
        .iter()
        .any(|descriptor| descriptor.port_name_prefix == "WearableTest"));
}
