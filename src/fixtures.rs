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

use std::path::{Path, PathBuf};

use prost::Message;
use tempfile::TempDir;

use crate::action::{CppCompileInfo, ExtraActionInfo, OpaqueInfo};

/// Encoded extra action of a C++ compilation.
pub fn compile_record(source: &str, output: &str, options: &[&str]) -> Vec<u8> {
    let record = ExtraActionInfo {
        owner: Some(String::from("//pkg:target")),
        id: Some(String::from("compile-1")),
        mnemonic: Some(String::from("CppCompile")),
        cpp_compile_info: Some(
            CppCompileInfo {
                tool: Some(String::from("/usr/bin/clang")),
                compiler_option: options.iter().map(|s| s.to_string()).collect(),
                source_file: Some(source.to_string()),
                output_file: Some(output.to_string()),
                sources_and_headers: vec![source.to_string()],
            }
        ),
        ..Default::default()
    };
    record.encode_to_vec()
}

/// Encoded extra action of a C++ link.
pub fn link_record(id: &str) -> Vec<u8> {
    let record = ExtraActionInfo {
        id: Some(id.to_string()),
        mnemonic: Some(String::from("CppLink")),
        cpp_link_info: Some(OpaqueInfo::default()),
        ..Default::default()
    };
    record.encode_to_vec()
}

pub fn write_record(dir: &TempDir, content: Vec<u8>) -> PathBuf {
    let path = dir.path().join("action.xa");
    std::fs::write(&path, content).unwrap();
    path
}

pub fn as_str(path: &Path) -> &str {
    path.to_str().unwrap()
}
