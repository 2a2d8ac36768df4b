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

//! Read-only view of a build in progress.

use crate::compiler::EntitySetFactory;
use crate::compiler::Error;
use crate::compiler::SchemaBuilder;
use crate::compiler::SchemaSet;
use crate::compiler::SingletonFactory;
use crate::edm::Action;
use crate::edm::EntitySet;
use crate::edm::Function;
use crate::edm::NamedMap;
use crate::edm::StructuredType;
use std::sync::Arc;

/// Lookup of types, operations and container members by name.
///
/// Namespace part of every qualified name may be replaced with the
/// schema alias.
pub struct Lookup<'s, 'a> {
    schemas: &'s SchemaSet,
    sets: &'s EntitySetFactory<'a>,
    singletons: &'s SingletonFactory<'a>,
}

impl<'s, 'a> Lookup<'s, 'a> {
    #[must_use]
    pub const fn new(
        schemas: &'s SchemaSet,
        sets: &'s EntitySetFactory<'a>,
        singletons: &'s SingletonFactory<'a>,
    ) -> Self {
        Self {
            schemas,
            sets,
            singletons,
        }
    }

    /// Entity or complex type by qualified name.
    #[must_use]
    pub fn structured_type(&self, qname: &str) -> Option<StructuredType<'s>> {
        let (namespace, name) = qname.rsplit_once('.')?;
        self.schemas
            .get(namespace)?
            .types
            .get(name)?
            .as_structured()
    }

    /// Qualified name with the schema namespace instead of alias.
    #[must_use]
    pub fn canonical(&self, qname: &str) -> Option<String> {
        let (namespace, name) = qname.rsplit_once('.')?;
        self.schemas
            .get(namespace)
            .map(|schema| format!("{}.{name}", schema.namespace))
    }

    /// Function by namespace and simple name.
    ///
    /// # Errors
    ///
    /// `UnresolvedReference` if namespace or function is not declared.
    pub fn function(&self, namespace: &'a str, name: &str) -> Result<Arc<Function>, Error<'a>> {
        Self::operation(self.schemas, namespace, name, |s| &s.functions)
    }

    /// Action by namespace and simple name.
    ///
    /// # Errors
    ///
    /// `UnresolvedReference` if namespace or action is not declared.
    pub fn action(&self, namespace: &'a str, name: &str) -> Result<Arc<Action>, Error<'a>> {
        Self::operation(self.schemas, namespace, name, |s| &s.actions)
    }

    fn operation<T, F>(
        schemas: &SchemaSet,
        namespace: &'a str,
        name: &str,
        members: F,
    ) -> Result<Arc<T>, Error<'a>>
    where
        F: Fn(&SchemaBuilder) -> &NamedMap<Arc<T>>,
    {
        schemas
            .get(namespace)
            .and_then(|schema| members(schema).get(name))
            .cloned()
            .ok_or_else(|| Error::UnresolvedReference {
                reference: format!("{namespace}.{name}"),
                namespace,
            })
    }

    /// Name of the entity set or singleton that holds entities of the
    /// given type. Entity sets take precedence.
    #[must_use]
    pub fn bound_target(&self, entity_type: &str) -> Option<String> {
        let entity_type = self.canonical(entity_type)?;
        self.sets
            .find_by_type(&entity_type)
            .or_else(|| self.singletons.find_by_type(&entity_type))
            .map(String::from)
    }

    /// Built entity set by name. Absence is not an error here: only
    /// imports of bound operations require an entity set.
    #[must_use]
    pub fn entity_set(&self, name: &str) -> Option<Arc<EntitySet>> {
        self.sets.get(name).cloned()
    }
}
