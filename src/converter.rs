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

use std::path::Path;

use thiserror::Error;

use crate::action::{self, Action, ActionKind};
use crate::compilation::{self, Entry};
use crate::directory::{self, WorkingDirectory};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read extra action from: {0}")]
    Read(String, #[source] action::io::Error),
    #[error("Action has no compile info: {kind} action (id: {id:?})")]
    MissingCompileInfo { kind: ActionKind, id: String },
    #[error("Failed to get the working directory")]
    Directory(#[from] directory::Error),
    #[error("Failed to write compilation database entry to: {0}")]
    Write(String, #[source] compilation::io::Error),
}

/// Converts a single extra action record into a compilation database entry.
pub struct Converter<D: WorkingDirectory> {
    directory: D,
}

impl<D: WorkingDirectory> Converter<D> {
    pub fn new(directory: D) -> Self {
        Converter { directory }
    }

    /// Read the record from the input, and write the entry into the output.
    ///
    /// The `-` or the standard stream device names are referring to the
    /// standard input and output. Nothing is written when any of the
    /// earlier steps fails.
    pub fn convert(&self, input: &str, output: &str) -> Result<(), Error> {
        let action = match input {
            "-" | "/dev/stdin" =>
                action::io::from_stdin(),
            file =>
                action::io::from_file(Path::new(file)),
        }.map_err(|error| Error::Read(input.to_string(), error))?;

        let entry = self.entry(action)?;
        log::debug!("{:?}", entry);

        let written = match output {
            "-" | "/dev/stdout" =>
                compilation::io::to_stdout(&entry),
            file =>
                compilation::io::to_file(Path::new(file), &entry),
        };
        written.map_err(|error| Error::Write(output.to_string(), error))?;

        log::debug!("Entry for {} written to {}", entry.file, output);
        Ok(())
    }

    /// The working directory is queried after the record was read, every time.
    pub fn entry(&self, action: Action) -> Result<Entry, Error> {
        match action {
            Action::Compile(info) => {
                let directory = self.directory.current()?;
                Ok(Entry::new(info, directory))
            }
            Action::Other { kind, id } =>
                Err(Error::MissingCompileInfo { kind, id }),
        }
    }
}
