// SPDX-FileCopyrightText: The scratchbind authors
// SPDX-License-Identifier: MPL-2.0

use std::borrow::Cow;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("disconnected")]
    Disconnected,
    #[error("Send: {msg}")]
    Send { msg: Cow<'static, str> },
}

pub type Result<T> = std::result::Result<T, Error>;
