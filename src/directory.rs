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

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to query the current working directory")]
    IoError(#[from] std::io::Error),
    #[error("Current working directory is not valid unicode: {0:?}")]
    Encoding(PathBuf),
}

/// This abstraction is representing the source of the working directory.
///
/// The entry records the directory where the compilation was executed, which
/// is the directory this process runs in. Tests can replace it with a fixed
/// value.
pub trait WorkingDirectory {
    fn current(&self) -> Result<String, Error>;
}

/// Asks the operating system on every call.
pub struct Process;

impl WorkingDirectory for Process {
    fn current(&self) -> Result<String, Error> {
        let path = std::env::current_dir()?;
        into_string(path)
    }
}

/// Returns the same value on every call.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct Fixed(pub String);

#[cfg(test)]
impl WorkingDirectory for Fixed {
    fn current(&self) -> Result<String, Error> {
        Ok(self.0.clone())
    }
}

fn into_string(path: PathBuf) -> Result<String, Error> {
    path.into_os_string()
        .into_string()
        .map_err(|value| Error::Encoding(PathBuf::from(value)))
}
