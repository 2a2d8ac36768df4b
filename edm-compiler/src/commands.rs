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

//! Command-line entry points for the compiler
//!
//! `Compile` reads one or more declaration manifests, merges them in
//! command-line order, applies command-line overrides of the
//! configuration and builds the entity data model. Output is a short
//! summary of the model or, with `--dump`, its full debug rendering.

use crate::compiler::Config;
use crate::edm::EntityDataModel;
use crate::manifest::DeclarationManifest;
use crate::Error;
use clap::Subcommand;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Schema alias given on the command line as `NAMESPACE=ALIAS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasArg {
    pub namespace: String,
    pub alias: String,
}

impl FromStr for AliasArg {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((namespace, alias)) if !namespace.is_empty() && !alias.is_empty() => Ok(Self {
                namespace: namespace.into(),
                alias: alias.into(),
            }),
            _ => Err(Error::InvalidAlias(s.into())),
        }
    }
}

/// Compiler high-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile declaration manifests into an entity data model.
    Compile {
        /// Declaration manifests. Declarations are compiled in the
        /// order manifests are given.
        #[arg(required = true)]
        manifests: Vec<PathBuf>,
        /// Schema alias in form `NAMESPACE=ALIAS`. Overrides aliases
        /// from manifests.
        #[arg(short, long = "alias")]
        aliases: Vec<AliasArg>,
        /// Fail on duplicate names instead of replacing the previous
        /// declaration.
        #[arg(long)]
        strict: bool,
        /// Print the whole model instead of the summary.
        #[arg(long)]
        dump: bool,
    },
}

/// Process a compiler command.
///
/// # Errors
///
/// Returns an error if command processing fails.
pub fn process_command(command: &Commands) -> Result<Vec<String>, Error> {
    match command {
        Commands::Compile {
            manifests,
            aliases,
            strict,
            dump,
        } => {
            let manifest = read_manifests(manifests)?;
            let (bundle, config) = manifest.into_bundle();
            let config = config.merge(Config {
                aliases: aliases
                    .iter()
                    .map(|a| (a.namespace.clone(), a.alias.clone()))
                    .collect(),
                base_container: None,
                strict_names: *strict,
            });
            let model = bundle.compile(&config).map_err(Error::compile_error)?;
            if *dump {
                Ok(vec![format!("{model:#?}")])
            } else {
                Ok(summary(&model))
            }
        }
    }
}

fn read_manifests(fnames: &[PathBuf]) -> Result<DeclarationManifest, Error> {
    if fnames.is_empty() {
        return Err(Error::AtLeastOneManifestNeeded);
    }
    fnames
        .iter()
        .try_fold(DeclarationManifest::default(), |merged, fname| {
            debug!(manifest = %fname.display(), "reading manifest");
            DeclarationManifest::read(fname)
                .map(|m| merged.merge(m))
                .map_err(|e| Error::Manifest(fname.display().to_string(), e))
        })
}

/// Human readable summary of the model.
#[must_use]
pub fn summary(model: &EntityDataModel) -> Vec<String> {
    let container = model.container();
    let mut lines = vec![match container.base_container() {
        Some(base) => format!("container: {} (extends {base})", container.qualified_name()),
        None => format!("container: {}", container.qualified_name()),
    }];
    lines.extend(model.schemas().iter().map(|s| {
        let alias = s.alias().map(|a| format!(" as {a}")).unwrap_or_default();
        format!(
            "schema: {}{alias}: {} types, {} actions, {} functions",
            s.namespace(),
            s.types().len(),
            s.actions().len(),
            s.functions().len(),
        )
    }));
    for set in container.entity_sets().values() {
        lines.push(format!("entity set: {}: {}", set.name(), set.entity_type()));
        lines.extend(
            set.bindings()
                .iter()
                .map(|b| format!("  {} -> {}", b.path(), b.target())),
        );
    }
    for singleton in container.singletons().values() {
        lines.push(format!("singleton: {}: {}", singleton.name(), singleton.entity_type()));
        lines.extend(
            singleton
                .bindings()
                .iter()
                .map(|b| format!("  {} -> {}", b.path(), b.target())),
        );
    }
    lines.extend(container.action_imports().values().map(|i| {
        format!(
            "action import: {}: {}",
            i.name(),
            i.operation().operation().qualified_name()
        )
    }));
    lines.extend(container.function_imports().values().map(|i| {
        format!(
            "function import: {}: {}",
            i.name(),
            i.operation().operation().qualified_name()
        )
    }));
    lines
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_alias_arg() {
        let arg: AliasArg = "Com.Example.Demo=Demo".parse().unwrap();
        assert_eq!(arg.namespace, "Com.Example.Demo");
        assert_eq!(arg.alias, "Demo");
        assert!(matches!("Demo".parse::<AliasArg>(), Err(Error::InvalidAlias(_))));
        assert!(matches!("=Demo".parse::<AliasArg>(), Err(Error::InvalidAlias(_))));
        assert!(matches!("Demo=".parse::<AliasArg>(), Err(Error::InvalidAlias(_))));
    }

    #[test]
    fn test_no_manifests() {
        let command = Commands::Compile {
            manifests: vec![],
            aliases: vec![],
            strict: false,
            dump: false,
        };
        assert!(matches!(
            process_command(&command),
            Err(Error::AtLeastOneManifestNeeded)
        ));
    }
}
