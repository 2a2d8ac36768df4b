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

//! Frozen entity data model.
//!
//! The model is immutable once built. All members are reachable only
//! through shared references, so a model can be shared across
//! threads (e.g. in an `Arc`) without locking.

use crate::declaration::HostTypeId;
use crate::declaration::Namespace;
use crate::edm::AbstractType;
use crate::edm::Action;
use crate::edm::ActionImport;
use crate::edm::ComplexType;
use crate::edm::EntityContainer;
use crate::edm::EntitySet;
use crate::edm::EntityType;
use crate::edm::EnumType;
use crate::edm::Function;
use crate::edm::FunctionImport;
use crate::edm::NamedMap;
use crate::edm::PrimitiveType;
use crate::edm::Schema;
use crate::edm::Singleton;
use crate::edm::StructuredType;
use crate::edm::Type;
use crate::edm::TypeDefinition;
use std::collections::HashMap;
use std::sync::Arc;

/// Entity data model: container, schemas and lookup indices.
#[derive(Debug)]
pub struct EntityDataModel {
    container: EntityContainer,
    schemas: Vec<Schema>,
    builtins: NamedMap<Type>,
    /// Namespace or alias to position in `schemas`.
    schema_index: HashMap<String, usize>,
    host_index: HashMap<HostTypeId, Type>,
}

impl EntityDataModel {
    pub(crate) fn new(container: EntityContainer, schemas: Vec<Schema>) -> Self {
        let builtins = PrimitiveType::all()
            .map(|p| (p.name().to_string(), Type::Primitive(p)))
            .chain(AbstractType::all().map(|a| (a.name().to_string(), Type::Abstract(a))))
            .collect();
        let schema_index = schemas
            .iter()
            .enumerate()
            .flat_map(|(no, s)| {
                std::iter::once((s.namespace.clone(), no))
                    .chain(s.alias.iter().map(move |alias| (alias.clone(), no)))
            })
            .collect();
        let host_index = schemas
            .iter()
            .flat_map(|s| s.types.values())
            .fold(HashMap::new(), |mut index, t| {
                if let Some(host) = t.host() {
                    index.entry(host.clone()).or_insert_with(|| t.clone());
                }
                index
            });
        Self {
            container,
            schemas,
            builtins,
            schema_index,
            host_index,
        }
    }

    #[must_use]
    pub const fn container(&self) -> &EntityContainer {
        &self.container
    }

    /// Schemas in the order their namespaces were first declared.
    #[must_use]
    pub fn schemas(&self) -> &[Schema] {
        &self.schemas
    }

    /// Built-in primitive and abstract types of the `Edm` namespace.
    #[must_use]
    pub const fn builtins(&self) -> &NamedMap<Type> {
        &self.builtins
    }

    /// Find schema by namespace or alias.
    #[must_use]
    pub fn schema(&self, namespace_or_alias: &str) -> Option<&Schema> {
        self.schema_index
            .get(namespace_or_alias)
            .map(|no| &self.schemas[*no])
    }

    /// Find a type by qualified name. Namespace may be replaced with
    /// the schema alias.
    #[must_use]
    pub fn find_type(&self, qname: &str) -> Option<&Type> {
        let (namespace, name) = qname.rsplit_once('.')?;
        if namespace == Namespace::EDM {
            self.builtins.get(name)
        } else {
            self.schema(namespace).and_then(|s| s.types.get(name))
        }
    }

    #[must_use]
    pub fn find_structured_type(&self, qname: &str) -> Option<StructuredType<'_>> {
        self.find_type(qname).and_then(Type::as_structured)
    }

    #[must_use]
    pub fn find_entity_type(&self, qname: &str) -> Option<&EntityType> {
        match self.find_type(qname)? {
            Type::Entity(v) => Some(v.as_ref()),
            _ => None,
        }
    }

    #[must_use]
    pub fn find_complex_type(&self, qname: &str) -> Option<&ComplexType> {
        match self.find_type(qname)? {
            Type::Complex(v) => Some(v.as_ref()),
            _ => None,
        }
    }

    #[must_use]
    pub fn find_enum_type(&self, qname: &str) -> Option<&EnumType> {
        match self.find_type(qname)? {
            Type::Enum(v) => Some(v.as_ref()),
            _ => None,
        }
    }

    #[must_use]
    pub fn find_type_definition(&self, qname: &str) -> Option<&TypeDefinition> {
        match self.find_type(qname)? {
            Type::TypeDefinition(v) => Some(v.as_ref()),
            _ => None,
        }
    }

    #[must_use]
    pub fn find_action(&self, qname: &str) -> Option<&Arc<Action>> {
        let (namespace, name) = qname.rsplit_once('.')?;
        self.schema(namespace).and_then(|s| s.actions.get(name))
    }

    #[must_use]
    pub fn find_function(&self, qname: &str) -> Option<&Arc<Function>> {
        let (namespace, name) = qname.rsplit_once('.')?;
        self.schema(namespace).and_then(|s| s.functions.get(name))
    }

    /// Find type declared by the host type. Built-in types are checked
    /// first, then schemas in order.
    #[must_use]
    pub fn type_for_host(&self, host: &HostTypeId) -> Option<&Type> {
        PrimitiveType::from_host(host)
            .map(PrimitiveType::name)
            .or_else(|| AbstractType::from_host(host).map(AbstractType::name))
            .and_then(|name| self.builtins.get(name))
            .or_else(|| self.host_index.get(host))
    }

    #[must_use]
    pub fn entity_set(&self, name: &str) -> Option<&Arc<EntitySet>> {
        self.container.entity_sets.get(name)
    }

    #[must_use]
    pub fn singleton(&self, name: &str) -> Option<&Arc<Singleton>> {
        self.container.singletons.get(name)
    }

    #[must_use]
    pub fn action_import(&self, name: &str) -> Option<&ActionImport> {
        self.container.action_imports.get(name)
    }

    #[must_use]
    pub fn function_import(&self, name: &str) -> Option<&FunctionImport> {
        self.container.function_imports.get(name)
    }

    /// Direct base type of a structured type. Absent if the type has no
    /// base or the base is not a structured type of the same kind.
    #[must_use]
    pub fn base_type_of(&self, structured: StructuredType<'_>) -> Option<StructuredType<'_>> {
        let base = self.find_structured_type(structured.structure().base_type()?)?;
        (base.is_entity() == structured.is_entity()).then_some(base)
    }
}
