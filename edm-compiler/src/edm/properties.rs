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

//! Structural properties of entity and complex types.

use crate::declaration::TypeName;
use crate::edm::Facets;
use crate::edm::IsNullable;
use serde::Deserialize;

/// Reference to a type by fully qualified name.
///
/// Collection-ness is kept as a flag. The `Collection(...)` form is
/// produced only by [`TypeRef::type_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub(crate) element: String,
    pub(crate) is_collection: bool,
}

impl TypeRef {
    /// Fully qualified name of the element type.
    #[must_use]
    pub fn element(&self) -> &str {
        &self.element
    }

    #[must_use]
    pub const fn is_collection(&self) -> bool {
        self.is_collection
    }

    /// Type name with `Collection(...)` wrapper if needed.
    #[must_use]
    pub fn type_name(&self) -> String {
        if self.is_collection {
            format!(
                "{}{}{}",
                TypeName::COLLECTION_PREFIX,
                self.element,
                TypeName::COLLECTION_SUFFIX
            )
        } else {
            self.element.clone()
        }
    }
}

impl From<&TypeName> for TypeRef {
    fn from(v: &TypeName) -> Self {
        Self {
            element: v.element().to_string(),
            is_collection: v.is_collection(),
        }
    }
}

/// Constraint between dependent and principal properties of a
/// navigation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReferentialConstraint {
    /// Property of the dependent (declaring) type.
    pub property: String,
    /// Property of the principal (target) type.
    pub referenced_property: String,
}

/// Action applied to related entities when the principal is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum OnDeleteAction {
    Cascade,
    None,
    SetNull,
    SetDefault,
}

/// Plain (non-navigation) property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub(crate) name: String,
    pub(crate) ptype: TypeRef,
    pub(crate) is_nullable: IsNullable,
    pub(crate) default_value: Option<String>,
    pub(crate) facets: Facets,
    pub(crate) host_field: Option<String>,
}

impl Property {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn ptype(&self) -> &TypeRef {
        &self.ptype
    }

    #[must_use]
    pub const fn is_nullable(&self) -> IsNullable {
        self.is_nullable
    }

    #[must_use]
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    #[must_use]
    pub const fn facets(&self) -> &Facets {
        &self.facets
    }

    /// Name of the host field this property was declared on.
    #[must_use]
    pub fn host_field(&self) -> Option<&str> {
        self.host_field.as_deref()
    }
}

/// Navigation property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationProperty {
    pub(crate) name: String,
    pub(crate) ptype: TypeRef,
    pub(crate) is_nullable: IsNullable,
    pub(crate) partner: Option<String>,
    pub(crate) contains_target: bool,
    pub(crate) referential_constraints: Vec<ReferentialConstraint>,
    pub(crate) on_delete: Vec<OnDeleteAction>,
    pub(crate) host_field: Option<String>,
}

impl NavigationProperty {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn ptype(&self) -> &TypeRef {
        &self.ptype
    }

    #[must_use]
    pub const fn is_nullable(&self) -> IsNullable {
        self.is_nullable
    }

    #[must_use]
    pub fn partner(&self) -> Option<&str> {
        self.partner.as_deref()
    }

    #[must_use]
    pub const fn contains_target(&self) -> bool {
        self.contains_target
    }

    #[must_use]
    pub fn referential_constraints(&self) -> &[ReferentialConstraint] {
        &self.referential_constraints
    }

    #[must_use]
    pub fn on_delete(&self) -> &[OnDeleteAction] {
        &self.on_delete
    }

    #[must_use]
    pub fn host_field(&self) -> Option<&str> {
        self.host_field.as_deref()
    }
}

/// Property of a structured type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralProperty {
    Property(Property),
    NavigationProperty(NavigationProperty),
}

impl StructuralProperty {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Property(v) => v.name(),
            Self::NavigationProperty(v) => v.name(),
        }
    }

    #[must_use]
    pub const fn ptype(&self) -> &TypeRef {
        match self {
            Self::Property(v) => v.ptype(),
            Self::NavigationProperty(v) => v.ptype(),
        }
    }

    /// Type name, `Collection(...)` for collections.
    #[must_use]
    pub fn type_name(&self) -> String {
        self.ptype().type_name()
    }

    #[must_use]
    pub const fn is_nullable(&self) -> IsNullable {
        match self {
            Self::Property(v) => v.is_nullable(),
            Self::NavigationProperty(v) => v.is_nullable(),
        }
    }

    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(self, Self::NavigationProperty(_))
    }
}
