// SPDX-FileCopyrightText: The scratchbind authors
// SPDX-License-Identifier: MPL-2.0

use super::{DeckNumber, Engine};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum EngineCall {
    ScratchEnable {
        deck: DeckNumber,
        intervals_per_rev: u32,
        rpm: f64,
        alpha: f64,
        beta: f64,
        ramp: bool,
    },
    ScratchDisable {
        deck: DeckNumber,
        ramp: bool,
    },
    ScratchTick {
        deck: DeckNumber,
        delta: i32,
    },
    SetValue {
        group: String,
        parameter: String,
        value: f64,
    },
}

impl EngineCall {
    pub(crate) fn set_value(group: &str, parameter: &str, value: f64) -> Self {
        Self::SetValue {
            group: group.to_owned(),
            parameter: parameter.to_owned(),
            value,
        }
    }
}

/// Records all invocations in order.
#[derive(Debug, Default)]
pub(crate) struct RecordingEngine {
    calls: Vec<EngineCall>,
}

impl RecordingEngine {
    pub(crate) fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    pub(crate) fn take_calls(&mut self) -> Vec<EngineCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Engine for RecordingEngine {
    fn scratch_enable(
        &mut self,
        deck: DeckNumber,
        intervals_per_rev: u32,
        rpm: f64,
        alpha: f64,
        beta: f64,
        ramp: bool,
    ) {
        self.calls.push(EngineCall::ScratchEnable {
            deck,
            intervals_per_rev,
            rpm,
            alpha,
            beta,
            ramp,
        });
    }

    fn scratch_disable(&mut self, deck: DeckNumber, ramp: bool) {
        self.calls.push(EngineCall::ScratchDisable { deck, ramp });
    }

    fn scratch_tick(&mut self, deck: DeckNumber, delta: i32) {
        self.calls.push(EngineCall::ScratchTick { deck, delta });
    }

    fn set_value(&mut self, group: &str, parameter: &str, value: f64) {
        self.calls.push(EngineCall::set_value(group, parameter, value));
    }
}
