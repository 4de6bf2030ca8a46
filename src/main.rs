// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use subsolar::{Error, ReportConfig, Reporter, SystemClock};

const LOG_LEVEL: LevelFilter = LevelFilter::Info;

fn main() -> Result<(), Error> {
    // Logs go to stderr so stdout carries only the report.
    TermLogger::init(
        LOG_LEVEL,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let reporter = Reporter::new(SystemClock, ReportConfig::default());
    let stdout = std::io::stdout();
    reporter.run(&mut stdout.lock())
}
