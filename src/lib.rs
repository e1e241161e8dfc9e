// SPDX-FileCopyrightText: The scratchbind authors
// SPDX-License-Identifier: MPL-2.0

#![allow(rustdoc::invalid_rust_codeblocks)]
#![doc = include_str!("../README.md")]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(unreachable_pub)]
#![warn(unsafe_code)]
#![warn(clippy::pedantic)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(rustdoc::broken_intra_doc_links)]
// Repetitions of module/type names occur frequently when using many
// modules for keeping the size of the source files handy. Often
// types have the same name as their parent module.
#![allow(clippy::module_name_repetitions)]
// Repeating the type name in `..Default::default()` expressions
// is not needed since the context is obvious.
#![allow(clippy::default_trait_access)]

mod binding;
pub use self::binding::{
    ControlEvent, ControlHandler, ControllerBinding, ScratchMode, JOG_CENTER_VALUE,
};

mod config;
pub use self::config::{
    BindingConfig, ScratchConfig, DEFAULT_DECK_GROUP, DEFAULT_DECK_NUMBER, DEFAULT_SAMPLER_GROUP,
    DEFAULT_SCRATCH_CONFIG,
};

mod engine;
pub use self::engine::{
    DeckNumber, Engine, Group, JOG_PARAMETER, START_PLAY_PARAMETER, VOLUME_PARAMETER,
};

pub mod midi;
pub use self::midi::{
    MidiDeviceDescriptor, MidiInputDecodeError, MidiInputHandler, MidiOutputConnection,
    MidiOutputGateway, TimeStamp,
};

mod output;
pub use self::output::{Error as OutputError, Result as OutputResult};

pub mod devices;
