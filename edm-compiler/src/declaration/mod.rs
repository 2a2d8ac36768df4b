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

//! Raw declarations consumed by the compiler.
//!
//! A declaration describes one host construct: its identity, its
//! name/namespace context, the role markers attached to it and its
//! fields. How declarations are discovered is outside of the
//! compiler. The only adapter shipped with this crate reads them from
//! TOML manifests (see [`crate::manifest`]).

/// Name grammar
pub mod attribute_values;

/// Host type references
pub mod host_type;

/// Role and field markers
pub mod markers;

use crate::edm::Facets;
use serde::Deserialize;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

pub type SimpleIdentifier = attribute_values::SimpleIdentifier;
pub type Namespace = attribute_values::Namespace;
pub type QualifiedName = attribute_values::QualifiedName;
pub type TypeName = attribute_values::TypeName;
pub type HostTypeId = host_type::HostTypeId;
pub type HostType = host_type::HostType;

pub use markers::NamedMarker;

/// Role of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Entity,
    Complex,
    Enum,
    Action,
    Function,
    ActionImport,
    FunctionImport,
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Entity => "entity",
            Self::Complex => "complex",
            Self::Enum => "enum",
            Self::Action => "action",
            Self::Function => "function",
            Self::ActionImport => "action import",
            Self::FunctionImport => "function import",
        }
        .fmt(f)
    }
}

/// Role markers of a declaration. Exactly one must be present.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub entity: Option<markers::EntityMarker>,
    pub complex: Option<markers::ComplexMarker>,
    #[serde(rename = "enum")]
    pub enumeration: Option<markers::EnumMarker>,
    pub action: Option<markers::ActionMarker>,
    pub function: Option<markers::FunctionMarker>,
    pub action_import: Option<markers::ActionImportMarker>,
    pub function_import: Option<markers::FunctionImportMarker>,
}

impl Markers {
    /// Roles of all present markers.
    #[must_use]
    pub fn roles(&self) -> Vec<Role> {
        [
            (self.entity.is_some(), Role::Entity),
            (self.complex.is_some(), Role::Complex),
            (self.enumeration.is_some(), Role::Enum),
            (self.action.is_some(), Role::Action),
            (self.function.is_some(), Role::Function),
            (self.action_import.is_some(), Role::ActionImport),
            (self.function_import.is_some(), Role::FunctionImport),
        ]
        .into_iter()
        .filter_map(|(present, role)| present.then_some(role))
        .collect()
    }
}

/// Declared host construct.
#[derive(Debug, Clone, Deserialize)]
pub struct Declaration {
    /// Identity of the host construct.
    pub host: HostTypeId,
    /// Simple name of the host construct.
    #[serde(default)]
    pub name: String,
    /// Namespace the construct is declared in.
    #[serde(default)]
    pub namespace: String,
    /// Direct parent of the host construct.
    #[serde(default)]
    pub parent: Option<HostTypeId>,
    /// Constants of the host construct. Present iff the construct is an
    /// enumeration.
    #[serde(default)]
    pub enum_members: Option<Vec<String>>,
    #[serde(flatten)]
    pub markers: Markers,
    #[serde(default, rename = "field")]
    pub fields: Vec<Field>,
}

/// Field of a declared host construct.
#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    pub name: String,
    pub host_type: HostType,
    /// Static fields never become properties or parameters.
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub property: Option<markers::PropertyMarker>,
    #[serde(default)]
    pub navigation_property: Option<markers::NavigationPropertyMarker>,
    #[serde(default)]
    pub parameter: Option<markers::ParameterMarker>,
}

/// Named primitive type with facets.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeDefinitionDeclaration {
    pub name: String,
    pub namespace: String,
    /// Qualified name of an `Edm` primitive type.
    pub underlying_type: String,
    #[serde(flatten)]
    pub facets: Facets,
    /// Host type that maps to this type definition.
    #[serde(default)]
    pub host: Option<HostTypeId>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_declaration_from_json() {
        let decl: Declaration = serde_json::from_str(
            r#"{
                "host": "demo::Product",
                "name": "Product",
                "namespace": "Com.Example.Demo",
                "entity": { "key": ["Id"], "entity_set": {} },
                "field": [
                    { "name": "id", "host_type": "i32", "property": { "name": "Id" } },
                    { "name": "tags", "host_type": "Vec<String>",
                      "property": { "max_length": 20 } },
                    { "name": "CACHE", "host_type": "i32", "is_static": true }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(decl.markers.roles(), [Role::Entity]);
        let entity = decl.markers.entity.as_ref().unwrap();
        assert_eq!(entity.key, ["Id"]);
        assert!(entity.entity_set.as_ref().unwrap().include_in_service_document);
        assert_eq!(decl.fields.len(), 3);
        assert!(decl.fields[1].host_type.collection_element().is_some());
        assert!(decl.fields[2].is_static);
    }

    #[test]
    fn test_multiple_roles_are_reported() {
        let decl: Declaration = serde_json::from_str(
            r#"{ "host": "demo::Both", "complex": {}, "enum": {} }"#,
        )
        .unwrap();
        assert_eq!(decl.markers.roles(), [Role::Complex, Role::Enum]);
        assert!(decl.fields.is_empty());
    }

    #[test]
    fn test_type_definition_from_json() {
        let td: TypeDefinitionDeclaration = serde_json::from_str(
            r#"{ "name": "Sku", "namespace": "Demo", "underlying_type": "Edm.String",
                 "max_length": 16, "unicode": false }"#,
        )
        .unwrap();
        assert_eq!(td.facets.unicode, Some(false));
        assert!(td.host.is_none());
    }
}
