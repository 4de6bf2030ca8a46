// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Errors of the reporting layer. The solar model itself cannot fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The report could not be written to its sink.
    #[error("failed to write subsolar report: {0}")]
    Io(#[from] std::io::Error),

    /// A global logger was already installed.
    #[error("failed to initialise logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
