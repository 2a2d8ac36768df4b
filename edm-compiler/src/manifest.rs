// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Declaration manifest.
//!
//! This module defines the file format for declaration manifests.
//! A manifest is a TOML document with an optional `[config]` table,
//! an array of `[[declaration]]` tables and an array of
//! `[[type_definition]]` tables. Several manifests can be merged into
//! one bundle.

use crate::compiler::Config;
use crate::compiler::DeclarationBundle;
use crate::declaration::Declaration;
use crate::declaration::TypeDefinitionDeclaration;
use serde::Deserialize;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::fs::File;
use std::io::Error as IoError;
use std::io::Read as _;
use std::path::Path;
use toml::de::Error as TomlError;

/// Manifest with declarations to be compiled.
#[derive(Deserialize, Debug, Default)]
pub struct DeclarationManifest {
    #[serde(default)]
    pub config: Config,
    #[serde(default, rename = "declaration")]
    pub declarations: Vec<Declaration>,
    #[serde(default, rename = "type_definition")]
    pub type_definitions: Vec<TypeDefinitionDeclaration>,
}

impl DeclarationManifest {
    /// Read declaration manifest from toml file.
    ///
    /// # Errors
    ///
    /// - `Error::Io` if failed to read file
    /// - `Error::Toml` if failed to parse content as TOML / invalid manifest.
    pub fn read(fname: &Path) -> Result<Self, Error> {
        let mut file = File::open(fname).map_err(Error::Io)?;
        let mut content = String::new();
        file.read_to_string(&mut content).map_err(Error::Io)?;
        Self::parse(&content)
    }

    /// Parse declaration manifest from a string.
    ///
    /// # Errors
    ///
    /// `Error::Toml` if content is not a valid manifest.
    pub fn parse(content: &str) -> Result<Self, Error> {
        toml::from_str(content).map_err(Error::Toml)
    }

    /// Merge manifests. Declarations of `other` are appended after
    /// declarations of `self`, configurations are merged.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.declarations.extend(other.declarations);
        self.type_definitions.extend(other.type_definitions);
        Self {
            config: self.config.merge(other.config),
            declarations: self.declarations,
            type_definitions: self.type_definitions,
        }
    }

    /// Split manifest into declarations and compilation configuration.
    #[must_use]
    pub fn into_bundle(self) -> (DeclarationBundle, Config) {
        (
            DeclarationBundle {
                declarations: self.declarations,
                type_definitions: self.type_definitions,
            },
            self.config,
        )
    }
}

#[derive(Debug)]
pub enum Error {
    Io(IoError),
    Toml(TomlError),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Io(err) => write!(f, "input/output error: {err}"),
            Self::Toml(err) => write!(f, "manifest file format error: {err}"),
        }
    }
}

impl StdError for Error {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_manifest() -> Result<(), Error> {
        let manifest = DeclarationManifest::parse(
            r#"
            [config]
            strict_names = true
            aliases = { "Com.Example.Demo" = "Demo" }

            [[declaration]]
            host = "demo::Product"
            name = "Product"
            namespace = "Com.Example.Demo"
            entity = { key = ["Id"], entity_set = {} }

            [[declaration.field]]
            name = "Id"
            host_type = "i32"
            property = {}

            [[declaration.field]]
            name = "Name"
            host_type = "String"
            property = { max_length = 80, unicode = false }

            [[type_definition]]
            name = "Sku"
            namespace = "Com.Example.Demo"
            underlying_type = "Edm.String"
            max_length = "max"
            "#,
        )?;
        assert!(manifest.config.strict_names);
        assert_eq!(manifest.config.aliases["Com.Example.Demo"], "Demo");
        assert_eq!(manifest.declarations.len(), 1);
        assert_eq!(manifest.declarations[0].fields.len(), 2);
        assert!(manifest.declarations[0].markers.entity.is_some());
        assert_eq!(manifest.type_definitions.len(), 1);
        assert_eq!(manifest.type_definitions[0].name, "Sku");
        Ok(())
    }

    #[test]
    fn test_merge_manifests() -> Result<(), Error> {
        let first = DeclarationManifest::parse(
            r#"
            [config]
            base_container = "Base"
            aliases = { "A" = "X", "B" = "Y" }

            [[declaration]]
            host = "a::First"
            complex = {}
            "#,
        )?;
        let second = DeclarationManifest::parse(
            r#"
            [config]
            aliases = { "B" = "Z" }

            [[declaration]]
            host = "a::Second"
            complex = {}
            "#,
        )?;
        let (bundle, config) = first.merge(second).into_bundle();
        let hosts = bundle
            .declarations
            .iter()
            .map(|d| d.host.to_string())
            .collect::<Vec<_>>();
        assert_eq!(hosts, ["a::First", "a::Second"]);
        assert_eq!(config.aliases["A"], "X");
        assert_eq!(config.aliases["B"], "Z");
        assert_eq!(config.base_container.as_deref(), Some("Base"));
        assert!(!config.strict_names);
        Ok(())
    }

    #[test]
    fn test_invalid_manifest() {
        let err = DeclarationManifest::parse("[[declaration]]\nname = \"NoHost\"\n").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
        assert!(err.to_string().starts_with("manifest file format error:"));
    }
}
