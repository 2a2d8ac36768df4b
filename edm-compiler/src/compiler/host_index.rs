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

use crate::compiler::QualifiedName;
use crate::compiler::Worklists;
use crate::declaration::HostTypeId;
use crate::declaration::TypeDefinitionDeclaration;
use std::collections::HashMap;

/// Kind of type a host type is declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    Entity,
    Complex,
    Enum,
    TypeDefinition,
}

/// Type declared by a host type.
#[derive(Debug, Clone, Copy)]
pub struct HostEntry<'a> {
    pub kind: HostKind,
    pub qname: QualifiedName<'a>,
}

/// Index from host types to types declared in the same build. Used
/// to infer types of fields and to find base types.
#[derive(Default)]
pub struct HostIndex<'a> {
    index: HashMap<&'a HostTypeId, HostEntry<'a>>,
}

impl<'a> HostIndex<'a> {
    /// Build an index. If one host type is declared more than once the
    /// first declaration is used.
    #[must_use]
    pub fn build(
        worklists: &Worklists<'a>,
        type_definitions: &'a [TypeDefinitionDeclaration],
    ) -> Self {
        let entities = worklists
            .entities
            .iter()
            .map(|c| (&c.decl.host, HostKind::Entity, c.qname));
        let complexes = worklists
            .complexes
            .iter()
            .map(|c| (&c.decl.host, HostKind::Complex, c.qname));
        let enums = worklists
            .enums
            .iter()
            .map(|c| (&c.decl.host, HostKind::Enum, c.qname));
        let type_definitions = type_definitions.iter().filter_map(|td| {
            td.host.as_ref().map(|host| {
                (
                    host,
                    HostKind::TypeDefinition,
                    QualifiedName::new(&td.namespace, &td.name),
                )
            })
        });
        Self {
            index: entities.chain(complexes).chain(enums).chain(type_definitions).fold(
                HashMap::new(),
                |mut index, (host, kind, qname)| {
                    index.entry(host).or_insert(HostEntry { kind, qname });
                    index
                },
            ),
        }
    }

    #[must_use]
    pub fn get(&self, host: &HostTypeId) -> Option<&HostEntry<'a>> {
        self.index.get(host)
    }

    /// Qualified name of the type declared by `host` if it is of the
    /// given kind.
    #[must_use]
    pub fn get_of_kind(&self, host: &HostTypeId, kind: HostKind) -> Option<QualifiedName<'a>> {
        self.get(host)
            .filter(|entry| entry.kind == kind)
            .map(|entry| entry.qname)
    }
}
