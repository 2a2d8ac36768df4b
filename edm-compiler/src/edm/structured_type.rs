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

//! Data shared by entity and complex types.

use crate::declaration::HostTypeId;
use crate::edm::ComplexType;
use crate::edm::EntityType;
use crate::edm::NamedMap;
use crate::edm::StructuralProperty;

/// Structure of an entity or complex type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    pub(crate) name: String,
    pub(crate) namespace: String,
    pub(crate) base_type: Option<String>,
    pub(crate) is_abstract: bool,
    pub(crate) is_open: bool,
    pub(crate) properties: NamedMap<StructuralProperty>,
    pub(crate) host: Option<HostTypeId>,
}

impl Structure {
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

    /// Fully qualified name of the direct base type. Only one level
    /// is recorded. Ancestors are found by repeated lookups in the
    /// model.
    #[must_use]
    pub fn base_type(&self) -> Option<&str> {
        self.base_type.as_deref()
    }

    #[must_use]
    pub const fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Declared properties in declaration order. Inherited properties
    /// are not included.
    #[must_use]
    pub const fn properties(&self) -> &NamedMap<StructuralProperty> {
        &self.properties
    }

    #[must_use]
    pub const fn host(&self) -> Option<&HostTypeId> {
        self.host.as_ref()
    }
}

/// Borrowed entity or complex type.
#[derive(Debug, Clone, Copy)]
pub enum StructuredType<'a> {
    Entity(&'a EntityType),
    Complex(&'a ComplexType),
}

impl<'a> StructuredType<'a> {
    #[must_use]
    pub const fn structure(&self) -> &'a Structure {
        match *self {
            Self::Entity(v) => v.structure(),
            Self::Complex(v) => v.structure(),
        }
    }

    #[must_use]
    pub const fn is_entity(&self) -> bool {
        matches!(self, Self::Entity(_))
    }
}
