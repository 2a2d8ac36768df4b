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

//! Per-namespace accumulators.
//!
//! Accumulators are created on first use and keep the order in which
//! namespaces were touched. This order defines the order of frozen
//! schemas and the namespace of the entity container.

use crate::compiler::context::insert_named;
use crate::compiler::error::NameKind;
use crate::compiler::Error;
use crate::edm::Action;
use crate::edm::Function;
use crate::edm::NamedMap;
use crate::edm::Schema;
use crate::edm::Type;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

/// Mutable schema under construction.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    pub namespace: String,
    pub alias: Option<String>,
    pub types: NamedMap<Type>,
    pub functions: NamedMap<Arc<Function>>,
    pub actions: NamedMap<Arc<Action>>,
}

impl SchemaBuilder {
    fn freeze(self) -> Schema {
        Schema {
            namespace: self.namespace,
            alias: self.alias,
            types: self.types,
            functions: self.functions,
            actions: self.actions,
        }
    }
}

/// All schema accumulators of a build.
#[derive(Debug)]
pub struct SchemaSet {
    schemas: NamedMap<SchemaBuilder>,
    strict_names: bool,
}

impl SchemaSet {
    #[must_use]
    pub fn new(strict_names: bool) -> Self {
        Self {
            schemas: NamedMap::new(),
            strict_names,
        }
    }

    fn schema_mut(&mut self, namespace: &str) -> &mut SchemaBuilder {
        self.schemas.entry(namespace.into()).or_insert_with(|| SchemaBuilder {
            namespace: namespace.into(),
            ..SchemaBuilder::default()
        })
    }

    /// Add type to its namespace.
    ///
    /// # Errors
    ///
    /// `DuplicateName` in strict mode if the type name is taken.
    pub fn insert_type<'a>(&mut self, t: Type) -> Result<(), Error<'a>> {
        let strict = self.strict_names;
        let name = t.name().to_string();
        let namespace = t.namespace().to_string();
        let schema = self.schema_mut(&namespace);
        insert_named(&mut schema.types, NameKind::Type, name, t, strict)
            .map_err(|e| Error::Schema(namespace, Box::new(e)))
    }

    /// Add function to its namespace.
    ///
    /// # Errors
    ///
    /// `DuplicateName` in strict mode if the function name is taken.
    pub fn insert_function<'a>(&mut self, f: Function) -> Result<(), Error<'a>> {
        let strict = self.strict_names;
        let name = f.operation().name().to_string();
        let namespace = f.operation().namespace().to_string();
        let schema = self.schema_mut(&namespace);
        insert_named(&mut schema.functions, NameKind::Function, name, Arc::new(f), strict)
            .map_err(|e| Error::Schema(namespace, Box::new(e)))
    }

    /// Add action to its namespace.
    ///
    /// # Errors
    ///
    /// `DuplicateName` in strict mode if the action name is taken.
    pub fn insert_action<'a>(&mut self, a: Action) -> Result<(), Error<'a>> {
        let strict = self.strict_names;
        let name = a.operation().name().to_string();
        let namespace = a.operation().namespace().to_string();
        let schema = self.schema_mut(&namespace);
        insert_named(&mut schema.actions, NameKind::Action, name, Arc::new(a), strict)
            .map_err(|e| Error::Schema(namespace, Box::new(e)))
    }

    /// Find accumulator by namespace or alias.
    #[must_use]
    pub fn get(&self, namespace_or_alias: &str) -> Option<&SchemaBuilder> {
        self.schemas.get(namespace_or_alias).or_else(|| {
            self.schemas
                .values()
                .find(|s| s.alias.as_deref() == Some(namespace_or_alias))
        })
    }

    /// Set aliases of existing accumulators. Aliases of namespaces that
    /// have no declarations are ignored.
    pub fn apply_aliases(&mut self, aliases: &BTreeMap<String, String>) {
        for (namespace, alias) in aliases {
            if let Some(schema) = self.schemas.get_mut(namespace) {
                schema.alias = Some(alias.clone());
            } else {
                warn!(%namespace, %alias, "alias of namespace without declarations is ignored");
            }
        }
    }

    /// Namespace of the first touched accumulator.
    #[must_use]
    pub fn first_namespace(&self) -> Option<&str> {
        self.schemas.first().map(|(namespace, _)| namespace.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaBuilder> {
        self.schemas.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Freeze all accumulators in first touch order.
    #[must_use]
    pub fn freeze(self) -> Vec<Schema> {
        self.schemas.into_values().map(SchemaBuilder::freeze).collect()
    }
}
