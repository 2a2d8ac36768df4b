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

//! Declaration classification.
//!
//! Every declaration must carry exactly one role marker. Classified
//! declarations are appended to per-role worklists in input order.

use crate::compiler::Error;
use crate::compiler::QualifiedName;
use crate::declaration::markers::ActionImportMarker;
use crate::declaration::markers::ActionMarker;
use crate::declaration::markers::ComplexMarker;
use crate::declaration::markers::EntityMarker;
use crate::declaration::markers::EnumMarker;
use crate::declaration::markers::FunctionImportMarker;
use crate::declaration::markers::FunctionMarker;
use crate::declaration::Declaration;
use crate::declaration::NamedMarker;
use crate::declaration::Namespace;
use crate::declaration::SimpleIdentifier;

/// Declaration with its role marker and resolved name.
#[derive(Debug)]
pub struct Classified<'a, M> {
    pub decl: &'a Declaration,
    pub marker: &'a M,
    /// Name from the marker if given, otherwise from the declaration
    /// context.
    pub qname: QualifiedName<'a>,
}

fn non_empty(v: &str) -> Option<&str> {
    (!v.is_empty()).then_some(v)
}

impl<'a, M: NamedMarker> Classified<'a, M> {
    fn new(decl: &'a Declaration, marker: &'a M) -> Result<Self, Error<'a>> {
        let name = non_empty(marker.name()).unwrap_or(&decl.name);
        let namespace = non_empty(marker.namespace()).unwrap_or(&decl.namespace);
        name.parse::<SimpleIdentifier>()
            .map_err(|_| Error::InvalidName(name.into()))?;
        namespace
            .parse::<Namespace>()
            .map_err(|_| Error::InvalidName(namespace.into()))?;
        Ok(Self {
            decl,
            marker,
            qname: QualifiedName::new(namespace, name),
        })
    }
}

/// Ordered worklists, one per role.
#[derive(Default)]
pub struct Worklists<'a> {
    pub entities: Vec<Classified<'a, EntityMarker>>,
    pub complexes: Vec<Classified<'a, ComplexMarker>>,
    pub enums: Vec<Classified<'a, EnumMarker>>,
    pub actions: Vec<Classified<'a, ActionMarker>>,
    pub functions: Vec<Classified<'a, FunctionMarker>>,
    pub action_imports: Vec<Classified<'a, ActionImportMarker>>,
    pub function_imports: Vec<Classified<'a, FunctionImportMarker>>,
}

impl<'a> Worklists<'a> {
    /// Classify all declarations.
    ///
    /// # Errors
    ///
    /// - `InvalidDeclaration` if a declaration has zero or more than
    ///   one role marker
    /// - `NotAnEnumeration` if enum marker is attached to a host type
    ///   without enumeration constants
    /// - `InvalidName` if name or namespace is malformed
    pub fn classify(declarations: &'a [Declaration]) -> Result<Self, Error<'a>> {
        declarations
            .iter()
            .try_fold(Self::default(), |mut lists, decl| {
                lists
                    .push(decl)
                    .map_err(Box::new)
                    .map_err(|e| Error::Declaration(&decl.host, e))?;
                Ok(lists)
            })
    }

    fn push(&mut self, decl: &'a Declaration) -> Result<(), Error<'a>> {
        let roles = decl.markers.roles();
        if roles.len() != 1 {
            return Err(Error::InvalidDeclaration(roles));
        }
        let markers = &decl.markers;
        if let Some(m) = &markers.entity {
            self.entities.push(Classified::new(decl, m)?);
        } else if let Some(m) = &markers.complex {
            self.complexes.push(Classified::new(decl, m)?);
        } else if let Some(m) = &markers.enumeration {
            if decl.enum_members.is_none() {
                return Err(Error::NotAnEnumeration);
            }
            self.enums.push(Classified::new(decl, m)?);
        } else if let Some(m) = &markers.action {
            self.actions.push(Classified::new(decl, m)?);
        } else if let Some(m) = &markers.function {
            self.functions.push(Classified::new(decl, m)?);
        } else if let Some(m) = &markers.action_import {
            self.action_imports.push(Classified::new(decl, m)?);
        } else if let Some(m) = &markers.function_import {
            self.function_imports.push(Classified::new(decl, m)?);
        }
        Ok(())
    }

    /// Number of classified declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
            + self.complexes.len()
            + self.enums.len()
            + self.actions.len()
            + self.functions.len()
            + self.action_imports.len()
            + self.function_imports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::declaration::Role;

    fn parse_decls(json: &str) -> Vec<Declaration> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_classify_preserves_order() {
        let decls = parse_decls(
            r#"[
                { "host": "a::B", "name": "B", "namespace": "A", "complex": {} },
                { "host": "a::C", "name": "C", "namespace": "A", "complex": { "name": "Renamed" } },
                { "host": "a::Imp", "name": "Imp", "namespace": "A", "action_import": { "action": "Do" } }
            ]"#,
        );
        let lists = Worklists::classify(&decls).unwrap();
        assert_eq!(lists.len(), 3);
        let names = lists
            .complexes
            .iter()
            .map(|c| c.qname.to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, ["A.B", "A.Renamed"]);
        assert_eq!(lists.action_imports.len(), 1);
    }

    #[test]
    fn test_classify_rejects_role_count() {
        let decls = parse_decls(
            r#"[{ "host": "a::Nothing", "name": "Nothing", "namespace": "A" }]"#,
        );
        let err = Worklists::classify(&decls).err().unwrap();
        assert!(matches!(err.root_cause(), Error::InvalidDeclaration(r) if r.is_empty()));

        let decls = decls_two_roles();
        let err = Worklists::classify(&decls).err().unwrap();
        assert!(matches!(
            err.root_cause(),
            Error::InvalidDeclaration(r) if r == &[Role::Entity, Role::Function]
        ));
    }

    fn decls_two_roles() -> Vec<Declaration> {
        parse_decls(
            r#"[{ "host": "a::Two", "name": "Two", "namespace": "A",
                  "entity": { "key": ["Id"] }, "function": {} }]"#,
        )
    }

    #[test]
    fn test_enum_requires_enumeration() {
        let decls = parse_decls(
            r#"[{ "host": "a::Color", "name": "Color", "namespace": "A", "enum": {} }]"#,
        );
        let err = Worklists::classify(&decls).err().unwrap();
        assert!(matches!(err.root_cause(), Error::NotAnEnumeration));
    }

    #[test]
    fn test_invalid_names() {
        let decls = parse_decls(
            r#"[{ "host": "a::Bad", "name": "Bad-Name", "namespace": "A", "complex": {} }]"#,
        );
        let err = Worklists::classify(&decls).err().unwrap();
        assert!(matches!(err.root_cause(), Error::InvalidName(n) if n == "Bad-Name"));

        let decls = parse_decls(r#"[{ "host": "a::NoNs", "name": "NoNs", "complex": {} }]"#);
        let err = Worklists::classify(&decls).err().unwrap();
        assert!(matches!(err.root_cause(), Error::InvalidName(n) if n.is_empty()));
    }
}
