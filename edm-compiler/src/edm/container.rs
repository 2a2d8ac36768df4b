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

//! Entity container and its members.

use crate::declaration::HostTypeId;
use crate::edm::Action;
use crate::edm::Function;
use crate::edm::NamedMap;
use std::sync::Arc;

/// Binding of a navigation property path to the entity set or
/// singleton that holds its targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationPropertyBinding {
    pub(crate) path: String,
    pub(crate) target: String,
}

impl NavigationPropertyBinding {
    /// Path to the navigation property. Properties of nested complex
    /// types are separated by `/`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Name of the entity set or singleton.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Entity set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySet {
    pub(crate) name: String,
    pub(crate) entity_type: String,
    pub(crate) include_in_service_document: bool,
    pub(crate) bindings: Vec<NavigationPropertyBinding>,
    pub(crate) host: HostTypeId,
}

impl EntitySet {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully qualified name of the entity type.
    #[must_use]
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    #[must_use]
    pub const fn include_in_service_document(&self) -> bool {
        self.include_in_service_document
    }

    #[must_use]
    pub fn bindings(&self) -> &[NavigationPropertyBinding] {
        &self.bindings
    }

    #[must_use]
    pub const fn host(&self) -> &HostTypeId {
        &self.host
    }
}

/// Singleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Singleton {
    pub(crate) name: String,
    pub(crate) entity_type: String,
    pub(crate) bindings: Vec<NavigationPropertyBinding>,
    pub(crate) host: HostTypeId,
}

impl Singleton {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    #[must_use]
    pub fn bindings(&self) -> &[NavigationPropertyBinding] {
        &self.bindings
    }

    #[must_use]
    pub const fn host(&self) -> &HostTypeId {
        &self.host
    }
}

/// Import of an operation into the container. `T` is either
/// [`Action`] or [`Function`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationImport<T> {
    pub(crate) name: String,
    pub(crate) operation: Arc<T>,
    pub(crate) entity_set: Option<Arc<EntitySet>>,
    pub(crate) include_in_service_document: bool,
    pub(crate) host: HostTypeId,
}

impl<T> OperationImport<T> {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Imported operation. Shared with the schema that defines it.
    #[must_use]
    pub const fn operation(&self) -> &Arc<T> {
        &self.operation
    }

    #[must_use]
    pub const fn entity_set(&self) -> Option<&Arc<EntitySet>> {
        self.entity_set.as_ref()
    }

    #[must_use]
    pub const fn include_in_service_document(&self) -> bool {
        self.include_in_service_document
    }

    #[must_use]
    pub const fn host(&self) -> &HostTypeId {
        &self.host
    }
}

pub type ActionImport = OperationImport<Action>;
pub type FunctionImport = OperationImport<Function>;

/// Entity container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityContainer {
    pub(crate) name: String,
    pub(crate) namespace: String,
    pub(crate) base_container: Option<String>,
    pub(crate) entity_sets: NamedMap<Arc<EntitySet>>,
    pub(crate) singletons: NamedMap<Arc<Singleton>>,
    pub(crate) action_imports: NamedMap<ActionImport>,
    pub(crate) function_imports: NamedMap<FunctionImport>,
}

impl EntityContainer {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    #[must_use]
    pub fn base_container(&self) -> Option<&str> {
        self.base_container.as_deref()
    }

    #[must_use]
    pub const fn entity_sets(&self) -> &NamedMap<Arc<EntitySet>> {
        &self.entity_sets
    }

    #[must_use]
    pub const fn singletons(&self) -> &NamedMap<Arc<Singleton>> {
        &self.singletons
    }

    #[must_use]
    pub const fn action_imports(&self) -> &NamedMap<ActionImport> {
        &self.action_imports
    }

    #[must_use]
    pub const fn function_imports(&self) -> &NamedMap<FunctionImport> {
        &self.function_imports
    }
}
