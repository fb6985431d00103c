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

use std::fmt;

/// Represents the semantic of the action that the build system executed.
///
/// The build system describes every action with the same generic record,
/// and attach the details as an extension. This tool only cares about the
/// compile actions, everything else is kept only to report what it was.
#[derive(Debug, PartialEq)]
pub enum Action {
    Compile(CompileInfo),
    Other {
        kind: ActionKind,
        id: String,
    },
}

/// Represents a single compilation as the build system executed it.
#[derive(Debug, PartialEq)]
pub struct CompileInfo {
    pub source_file: String,
    pub output_file: String,
    pub compiler_option: Vec<String>,
}

#[derive(Debug, PartialEq)]
pub enum ActionKind {
    JavaCompile,
    CppLink,
    Spawn,
    Python,
    Unknown(String),
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::JavaCompile => write!(f, "java compile"),
            ActionKind::CppLink => write!(f, "c++ link"),
            ActionKind::Spawn => write!(f, "spawn"),
            ActionKind::Python => write!(f, "python"),
            ActionKind::Unknown(mnemonic) if mnemonic.is_empty() => write!(f, "unknown"),
            ActionKind::Unknown(mnemonic) => write!(f, "{}", mnemonic),
        }
    }
}

impl From<ExtraActionInfo> for Action {
    fn from(value: ExtraActionInfo) -> Self {
        let id = value.id.unwrap_or_default();
        if let Some(info) = value.cpp_compile_info {
            return Action::Compile(info.into());
        }

        let kind = if value.java_compile_info.is_some() {
            ActionKind::JavaCompile
        } else if value.cpp_link_info.is_some() {
            ActionKind::CppLink
        } else if value.spawn_info.is_some() {
            ActionKind::Spawn
        } else if value.python_info.is_some() {
            ActionKind::Python
        } else {
            ActionKind::Unknown(value.mnemonic.unwrap_or_default())
        };
        Action::Other { kind, id }
    }
}

impl From<CppCompileInfo> for CompileInfo {
    fn from(value: CppCompileInfo) -> Self {
        CompileInfo {
            source_file: value.source_file.unwrap_or_default(),
            output_file: value.output_file.unwrap_or_default(),
            compiler_option: value.compiler_option,
        }
    }
}

// The wire representation of the extra action record.
//
// Extensions are encoded the same way as optional message fields, so they are
// declared as such with their extension numbers. Fields which are not listed
// here are skipped by the decoder.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ExtraActionInfo {
    #[prost(string, optional, tag = "1")]
    pub owner: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub id: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub mnemonic: Option<String>,
    #[prost(string, optional, tag = "6")]
    pub aspect_name: Option<String>,
    #[prost(message, optional, tag = "1000")]
    pub java_compile_info: Option<OpaqueInfo>,
    #[prost(message, optional, tag = "1001")]
    pub cpp_compile_info: Option<CppCompileInfo>,
    #[prost(message, optional, tag = "1002")]
    pub cpp_link_info: Option<OpaqueInfo>,
    #[prost(message, optional, tag = "1003")]
    pub spawn_info: Option<OpaqueInfo>,
    #[prost(message, optional, tag = "1005")]
    pub python_info: Option<OpaqueInfo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CppCompileInfo {
    #[prost(string, optional, tag = "1")]
    pub tool: Option<String>,
    #[prost(string, repeated, tag = "2")]
    pub compiler_option: Vec<String>,
    #[prost(string, optional, tag = "3")]
    pub source_file: Option<String>,
    #[prost(string, optional, tag = "4")]
    pub output_file: Option<String>,
    #[prost(string, repeated, tag = "5")]
    pub sources_and_headers: Vec<String>,
}

// Extension payloads this tool does not need. Only the presence is used.
#[derive(Clone, PartialEq, prost::Message)]
pub struct OpaqueInfo {}

pub mod io {
    use std::io::Read;

    use prost::Message;
    use thiserror::Error;

    use super::*;

    /// This error type encompasses any error that can be returned by this module.
    #[derive(Error, Debug)]
    pub enum Error {
        #[error("IO error")]
        IoError(#[from] std::io::Error),
        #[error("Not a valid extra action record")]
        DecodeError(#[from] prost::DecodeError),
    }

    /// Load the content of the given file and parse it as Action.
    pub fn from_file(file: &std::path::Path) -> Result<Action, Error> {
        let reader = std::fs::OpenOptions::new().read(true).open(file)?;
        from_reader(reader)
    }

    pub fn from_stdin() -> Result<Action, Error> {
        from_reader(std::io::stdin().lock())
    }

    /// Load the content of the given stream and parse it as Action.
    ///
    /// The record is not length delimited, the whole stream is the message.
    pub fn from_reader(mut reader: impl Read) -> Result<Action, Error> {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;

        let record = ExtraActionInfo::decode(buffer.as_slice())?;
        log::debug!(
            "extra action read: owner {:?}, mnemonic {:?}, aspect {:?}",
            record.owner,
            record.mnemonic,
            record.aspect_name
        );
        if let Some(info) = &record.cpp_compile_info {
            log::trace!(
                "compile action tool {:?} with {} sources and headers",
                info.tool,
                info.sources_and_headers.len()
            );
        }
        Ok(record.into())
    }

}
