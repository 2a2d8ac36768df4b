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

//! Immutable compilation context.

use crate::compiler::error::NameKind;
use crate::compiler::Error;
use crate::compiler::HostIndex;
use crate::edm::NamedMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::warn;

/// Compilation configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schema aliases: namespace to alias.
    pub aliases: BTreeMap<String, String>,
    /// Name of the base entity container.
    pub base_container: Option<String>,
    /// Treat duplicate names in one scope as errors. By default the
    /// last declaration wins and a warning is logged.
    pub strict_names: bool,
}

impl Config {
    /// Merge two configurations. Aliases are combined (`other` wins on
    /// conflicts), `other`'s base container replaces this one if set,
    /// strict mode is enabled if any of the two enables it.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.aliases.extend(other.aliases);
        Self {
            aliases: self.aliases,
            base_container: other.base_container.or(self.base_container),
            strict_names: self.strict_names || other.strict_names,
        }
    }
}

/// Compilation context.
///
/// Contains immutable data passed to all builders.
pub struct Context<'a> {
    /// Host types declared in this build.
    pub hosts: HostIndex<'a>,
    /// Duplicate names are errors.
    pub strict_names: bool,
}

impl Context<'_> {
    /// Insert named value applying the duplicate name policy.
    ///
    /// # Errors
    ///
    /// `DuplicateName` if the name is already present in strict mode.
    pub fn insert_named<'e, T>(
        &self,
        map: &mut NamedMap<T>,
        kind: NameKind,
        name: String,
        value: T,
    ) -> Result<(), Error<'e>> {
        insert_named(map, kind, name, value, self.strict_names)
    }
}

/// Insert named value. In strict mode a duplicate name is an error,
/// otherwise the new value replaces the old one with a warning.
///
/// # Errors
///
/// `DuplicateName` if the name is already present in strict mode.
pub fn insert_named<'e, T>(
    map: &mut NamedMap<T>,
    kind: NameKind,
    name: String,
    value: T,
    strict: bool,
) -> Result<(), Error<'e>> {
    if map.contains_key(&name) {
        if strict {
            return Err(Error::duplicate(kind, name));
        }
        warn!(%kind, %name, "duplicate name replaces earlier declaration");
    }
    map.insert(name, value);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_config_merge() {
        let first: Config = toml::from_str(
            r#"
            base_container = "Base"
            [aliases]
            "Com.Example.Demo" = "Demo"
            "Com.Example.Other" = "Other"
            "#,
        )
        .unwrap();
        let second: Config = toml::from_str(
            r#"
            strict_names = true
            [aliases]
            "Com.Example.Other" = "O"
            "#,
        )
        .unwrap();
        let merged = first.merge(second);
        assert_eq!(merged.base_container.as_deref(), Some("Base"));
        assert!(merged.strict_names);
        assert_eq!(merged.aliases["Com.Example.Demo"], "Demo");
        assert_eq!(merged.aliases["Com.Example.Other"], "O");
    }

    #[test]
    fn test_insert_named_policy() {
        let mut map = NamedMap::new();
        insert_named(&mut map, NameKind::Type, "A".into(), 1, false).unwrap();
        insert_named(&mut map, NameKind::Type, "B".into(), 5, false).unwrap();
        insert_named(&mut map, NameKind::Type, "A".into(), 2, false).unwrap();
        assert_eq!(map.get("A"), Some(&2));
        assert_eq!(map.keys().collect::<Vec<_>>(), ["A", "B"]);
        let err = insert_named(&mut map, NameKind::Type, "A".into(), 3, true).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateName {
                kind: NameKind::Type,
                ..
            }
        ));
        assert_eq!(map.get("A"), Some(&2));
    }
}
