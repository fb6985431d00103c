/*  Copyright (C) 2012-2023 by László Nagy
    This file is part of Bear.

    Bear is a tool to generate compilation database for clang tooling.

    Bear is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    Bear is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <http://www.gnu.org/licenses/>.
 */

use anyhow::{Context, Result};
use clap::{arg, ArgAction, ArgMatches, command, Command};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use crate::converter::Converter;
use crate::directory::Process;

mod action;
mod compilation;
mod converter;
mod directory;
#[cfg(test)]
mod fixtures;

// Run this as a build extra action on a C++ compile action.
//
// It writes a single compilation database entry. Merging the entries into a
// compilation database is left to the caller.
fn main() -> Result<()> {
    let arguments = Arguments::parse();
    let application = Application::configure(arguments)?;
    application.run()?;

    Ok(())
}

#[derive(Debug, PartialEq)]
struct Arguments {
    input: String,
    output: String,
    verbose: u8,
}

impl Arguments {
    fn parse() -> Self {
        Self::from_matches(Self::command().get_matches())
    }

    fn command() -> Command {
        command!()
            .args(&[
                arg!(<INPUT> "Path of the extra action file"),
                arg!(<OUTPUT> "Path of the compilation database entry file"),
                arg!(-v --verbose ... "Sets the level of verbosity")
                    .action(ArgAction::Count),
            ])
    }

    fn from_matches(matches: ArgMatches) -> Self {
        Arguments {
            input: matches.get_one::<String>("INPUT")
                .expect("input is required")
                .clone(),
            output: matches.get_one::<String>("OUTPUT")
                .expect("output is required")
                .clone(),
            verbose: matches.get_count("verbose"),
        }
    }

    fn prepare_logging(&self) -> Result<()> {
        let level = match &self.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        let mut logger = SimpleLogger::new()
            .with_level(level);
        if level <= LevelFilter::Debug {
            logger = logger.with_local_timestamps()
        }
        logger.init()?;

        Ok(())
    }
}

#[derive(Debug, PartialEq)]
struct Application {
    arguments: Arguments,
}

impl Application {
    fn configure(arguments: Arguments) -> Result<Self> {
        arguments.prepare_logging()?;

        Ok(Application { arguments })
    }

    fn run(self) -> Result<()> {
        let converter = Converter::new(Process);
        converter.convert(&self.arguments.input, &self.arguments.output)
            .with_context(|| format!(
                "Failed to convert '{}' into '{}'.",
                self.arguments.input,
                self.arguments.output
            ))?;

        Ok(())
    }
}
