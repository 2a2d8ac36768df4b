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

//! Entity data model produced by the compiler.
//!
//! All types here are owned, immutable after construction and
//! `Send + Sync`. Cross references between members are either fully
//! qualified names (resolved with [`EntityDataModel`] queries) or
//! shared `Arc`s.

/// Built-in primitive and abstract types
pub mod primitive;

/// Property facets
pub mod facets;

/// Structural properties
pub mod properties;

/// Common part of entity and complex types
pub mod structured_type;

/// Entity and complex types
pub mod entity_type;

/// Enumerations and type definitions
pub mod enum_type;

/// Actions and functions
pub mod operation;

/// Entity container
pub mod container;

/// Frozen schema
pub mod schema;

/// Entity data model
pub mod model;

use crate::declaration::HostTypeId;
use crate::declaration::Namespace;
use indexmap::IndexMap;
use std::sync::Arc;
use tagged_types::TaggedType;

/// Simple name to value. Iteration follows insertion order; replacing
/// a value keeps the position of the first insertion.
pub type NamedMap<T> = IndexMap<String, T>;
pub type PrimitiveType = primitive::PrimitiveType;
pub type AbstractType = primitive::AbstractType;
pub type Facets = facets::Facets;
pub type MaxLength = facets::MaxLength;
pub type Scale = facets::Scale;
pub type Srid = facets::Srid;
pub type TypeRef = properties::TypeRef;
pub type Property = properties::Property;
pub type NavigationProperty = properties::NavigationProperty;
pub type StructuralProperty = properties::StructuralProperty;
pub type ReferentialConstraint = properties::ReferentialConstraint;
pub type OnDeleteAction = properties::OnDeleteAction;
pub type Structure = structured_type::Structure;
pub type StructuredType<'a> = structured_type::StructuredType<'a>;
pub type EntityType = entity_type::EntityType;
pub type ComplexType = entity_type::ComplexType;
pub type PropertyRef = entity_type::PropertyRef;
pub type EnumType = enum_type::EnumType;
pub type EnumUnderlyingType = enum_type::EnumUnderlyingType;
pub type TypeDefinition = enum_type::TypeDefinition;
pub type Parameter = operation::Parameter;
pub type Parameters = operation::Parameters;
pub type ReturnType = operation::ReturnType;
pub type Operation = operation::Operation;
pub type Action = operation::Action;
pub type Function = operation::Function;
pub type NavigationPropertyBinding = container::NavigationPropertyBinding;
pub type EntitySet = container::EntitySet;
pub type Singleton = container::Singleton;
pub type ActionImport = container::ActionImport;
pub type FunctionImport = container::FunctionImport;
pub type EntityContainer = container::EntityContainer;
pub type Schema = schema::Schema;
pub type EntityDataModel = model::EntityDataModel;

pub type IsNullable = TaggedType<bool, IsNullableTag>;
#[derive(tagged_types::Tag)]
#[implement(Clone, Copy, PartialEq, Eq)]
#[transparent(Debug, Deserialize)]
#[capability(inner_access)]
pub enum IsNullableTag {}

pub type IsBound = TaggedType<bool, IsBoundTag>;
#[derive(tagged_types::Tag)]
#[implement(Clone, Copy, PartialEq, Eq)]
#[transparent(Debug, Deserialize)]
#[capability(inner_access)]
pub enum IsBoundTag {}

pub type IsComposable = TaggedType<bool, IsComposableTag>;
#[derive(tagged_types::Tag)]
#[implement(Clone, Copy, PartialEq, Eq)]
#[transparent(Debug, Deserialize)]
#[capability(inner_access)]
pub enum IsComposableTag {}

/// Any type of the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Primitive(PrimitiveType),
    Abstract(AbstractType),
    Entity(Arc<EntityType>),
    Complex(Arc<ComplexType>),
    Enum(Arc<EnumType>),
    TypeDefinition(Arc<TypeDefinition>),
}

impl Type {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Primitive(v) => v.name(),
            Self::Abstract(v) => v.name(),
            Self::Entity(v) => v.structure().name(),
            Self::Complex(v) => v.structure().name(),
            Self::Enum(v) => v.name(),
            Self::TypeDefinition(v) => v.name(),
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        match self {
            Self::Primitive(_) | Self::Abstract(_) => Namespace::EDM,
            Self::Entity(v) => v.structure().namespace(),
            Self::Complex(v) => v.structure().namespace(),
            Self::Enum(v) => v.namespace(),
            Self::TypeDefinition(v) => v.namespace(),
        }
    }

    /// Always `namespace.name`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace(), self.name())
    }

    /// Host type this type was declared by. Built-in types have no
    /// host link, see [`EntityDataModel::type_for_host`].
    #[must_use]
    pub fn host(&self) -> Option<&HostTypeId> {
        match self {
            Self::Primitive(_) | Self::Abstract(_) => None,
            Self::Entity(v) => v.structure().host(),
            Self::Complex(v) => v.structure().host(),
            Self::Enum(v) => v.host(),
            Self::TypeDefinition(v) => v.host(),
        }
    }

    #[must_use]
    pub fn as_structured(&self) -> Option<StructuredType<'_>> {
        match self {
            Self::Entity(v) => Some(StructuredType::Entity(v)),
            Self::Complex(v) => Some(StructuredType::Complex(v)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_model_is_shareable() {
        assert_send_sync::<EntityDataModel>();
        assert_send_sync::<Type>();
    }

    #[test]
    fn test_builtin_names() {
        let t = Type::Primitive(PrimitiveType::Int32);
        assert_eq!(t.qualified_name(), "Edm.Int32");
        assert_eq!(t.namespace(), Namespace::EDM);
        assert!(t.as_structured().is_none());
        assert!(t.host().is_none());
        assert_eq!(
            Type::Abstract(AbstractType::EntityType).qualified_name(),
            "Edm.EntityType"
        );
    }
}
