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

use serde::{Deserialize, Serialize};

use crate::action::CompileInfo;

/// Represents an entry of the compilation database.
///
/// The field order is the order of the keys in the JSON output.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub file: String,
    pub output: String,
    pub directory: String,
    pub arguments: Vec<String>,
}

impl Entry {
    /// Paths and arguments are taken as they are. The source file path is
    /// relative to the directory, which is not valid after the action run.
    pub fn new(info: CompileInfo, directory: String) -> Self {
        Entry {
            file: info.source_file,
            output: info.output_file,
            directory,
            arguments: info.compiler_option,
        }
    }
}

pub mod io {
    use std::io::{stdout, BufWriter, Write};

    use thiserror::Error;

    use super::*;

    /// This error type encompasses any error that can be returned by this module.
    #[derive(Error, Debug)]
    pub enum Error {
        #[error("IO error")]
        IoError(#[from] std::io::Error),
        #[error("Serialization error")]
        SyntaxError(#[from] serde_json::Error),
    }

    /// Write the entry into the given file. Existing content is truncated.
    pub fn to_file(file: &std::path::Path, entry: &Entry) -> Result<(), Error> {
        let file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(file)?;
        to_writer(BufWriter::new(file), entry)
    }

    pub fn to_stdout(entry: &Entry) -> Result<(), Error> {
        to_writer(stdout().lock(), entry)
    }

    /// Write the entry as a single JSON object into the given stream.
    pub fn to_writer(mut writer: impl Write, entry: &Entry) -> Result<(), Error> {
        serde_json::to_writer(&mut writer, entry)?;
        writer.flush()?;

        Ok(())
    }

    #[cfg(test)]
    mod test {
        use super::*;

        #[test]
        fn test_field_order() {
            let entry = Entry {
                file: String::from("foo.cc"),
                output: String::from("foo.o"),
                directory: String::from("/build/sandbox123"),
                arguments: vec!["-I.", "-std=c++17", "-c", "foo.cc"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            };

            let mut buffer: Vec<u8> = vec![];
            to_writer(&mut buffer, &entry).unwrap();

            let expected = r#"{"file":"foo.cc","output":"foo.o","directory":"/build/sandbox123","arguments":["-I.","-std=c++17","-c","foo.cc"]}"#;
            assert_eq!(expected, String::from_utf8(buffer).unwrap());
        }

        #[test]
        fn test_empty_arguments() {
            let entry = Entry {
                file: String::from("foo.cc"),
                output: String::from("foo.o"),
                directory: String::from("/tmp"),
                arguments: vec![],
            };

            let mut buffer: Vec<u8> = vec![];
            to_writer(&mut buffer, &entry).unwrap();

            let expected = r#"{"file":"foo.cc","output":"foo.o","directory":"/tmp","arguments":[]}"#;
            assert_eq!(expected, String::from_utf8(buffer).unwrap());
        }

        #[test]
        fn test_escaping() {
            let entry = Entry {
                file: String::from("dir with space/quote\".cc"),
                output: String::from("back\\slash.o"),
                directory: String::from("/tmp"),
                arguments: vec![String::from("-DMSG=\"hello\tworld\"")],
            };

            let mut buffer: Vec<u8> = vec![];
            to_writer(&mut buffer, &entry).unwrap();

            let expected = r#"{"file":"dir with space/quote\".cc","output":"back\\slash.o","directory":"/tmp","arguments":["-DMSG=\"hello\tworld\""]}"#;
            assert_eq!(expected, String::from_utf8(buffer).unwrap());

            let parsed: Entry = serde_json::from_str(expected).unwrap();
            assert_eq!(entry, parsed);
        }
    }
}
