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

//! Markers attached to declarations and their fields.
//!
//! Empty strings mean "not specified": the compiler then falls back to
//! the declaration context (host name, namespace) or to inference.

use crate::edm::Facets;
use crate::edm::IsBound;
use crate::edm::IsComposable;
use crate::edm::OnDeleteAction;
use crate::edm::PropertyRef;
use crate::edm::ReferentialConstraint;
use serde::Deserialize;

/// Markers that carry an own name and namespace.
pub trait NamedMarker {
    /// Explicit name, empty if not specified.
    fn name(&self) -> &str;
    /// Explicit namespace, empty if not specified.
    fn namespace(&self) -> &str;
}

macro_rules! named_marker {
    ($($marker:ty),+) => {
        $(impl NamedMarker for $marker {
            fn name(&self) -> &str {
                &self.name
            }
            fn namespace(&self) -> &str {
                &self.namespace
            }
        })+
    };
}

named_marker!(
    EntityMarker,
    ComplexMarker,
    EnumMarker,
    ActionMarker,
    FunctionMarker,
    ActionImportMarker,
    FunctionImportMarker
);

/// Entity type role.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct EntityMarker {
    pub name: String,
    pub namespace: String,
    /// Key property paths.
    pub key: Vec<String>,
    /// Key property references with optional aliases.
    pub key_ref: Vec<PropertyRef>,
    /// Name of the entity container. The first non-empty value in the
    /// declaration batch names the container.
    pub container_name: String,
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    pub open_type: bool,
    pub has_stream: bool,
    pub read_only: bool,
    /// Expose the entity type as an entity set.
    pub entity_set: Option<EntitySetMarker>,
    /// Expose the entity type as a singleton.
    pub singleton: Option<SingletonMarker>,
}

/// Complex type role.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ComplexMarker {
    pub name: String,
    pub namespace: String,
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    pub open_type: bool,
}

/// Enumeration role.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct EnumMarker {
    pub name: String,
    pub namespace: String,
    /// `Edm.Byte`, `Edm.SByte`, `Edm.Int16`, `Edm.Int32` (default) or
    /// `Edm.Int64`.
    pub underlying_type: Option<String>,
    pub is_flags: bool,
}

/// Return type of an action or function.
#[derive(Debug, Clone, Deserialize)]
pub struct ReturnTypeMarker {
    #[serde(rename = "type")]
    pub rtype: String,
    #[serde(default)]
    pub nullable: Option<bool>,
}

/// Action role.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ActionMarker {
    pub name: String,
    pub namespace: String,
    pub is_bound: Option<IsBound>,
    pub entity_set_path: Option<String>,
    pub return_type: Option<ReturnTypeMarker>,
}

/// Function role.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct FunctionMarker {
    pub name: String,
    pub namespace: String,
    pub is_bound: Option<IsBound>,
    pub is_composable: Option<IsComposable>,
    pub entity_set_path: Option<String>,
    pub return_type: Option<ReturnTypeMarker>,
}

fn include_in_service_document() -> bool {
    true
}

/// Action import role.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionImportMarker {
    #[serde(default)]
    pub name: String,
    /// Namespace of the imported action. Also the namespace of the
    /// import declaration.
    #[serde(default)]
    pub namespace: String,
    /// Simple name of the imported action. Defaults to the import name.
    #[serde(default)]
    pub action: String,
    /// Entity set returned by the action.
    #[serde(default)]
    pub entity_set: String,
    #[serde(default = "include_in_service_document")]
    pub include_in_service_document: bool,
}

/// Function import role.
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionImportMarker {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    /// Simple name of the imported function. Defaults to the import
    /// name.
    #[serde(default)]
    pub function: String,
    #[serde(default)]
    pub entity_set: String,
    #[serde(default = "include_in_service_document")]
    pub include_in_service_document: bool,
}

/// Entity set exposure of an entity type.
#[derive(Debug, Clone, Deserialize)]
pub struct EntitySetMarker {
    #[serde(default)]
    pub name: String,
    /// Alternate way to specify the name.
    #[serde(default)]
    pub value: String,
    #[serde(default = "include_in_service_document")]
    pub include_in_service_document: bool,
}

/// Singleton exposure of an entity type.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SingletonMarker {
    pub name: String,
    /// Alternate way to specify the name.
    pub value: String,
}

/// Plain property on a field.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct PropertyMarker {
    pub name: String,
    /// Explicit type name, `Collection(...)` allowed.
    #[serde(rename = "type")]
    pub ptype: String,
    pub nullable: Option<bool>,
    pub default_value: Option<String>,
    #[serde(flatten)]
    pub facets: Facets,
}

/// Navigation property on a field.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct NavigationPropertyMarker {
    pub name: String,
    #[serde(rename = "type")]
    pub ptype: String,
    pub nullable: Option<bool>,
    pub partner: Option<String>,
    pub contains_target: bool,
    pub referential_constraints: Vec<ReferentialConstraint>,
    pub on_delete: Vec<OnDeleteAction>,
}

/// Operation parameter on a field.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ParameterMarker {
    pub name: String,
    #[serde(rename = "type")]
    pub ptype: String,
    pub nullable: Option<bool>,
    #[serde(flatten)]
    pub facets: Facets,
}
