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

//! Final assembly of the entity data model.

use crate::compiler::Classified;
use crate::compiler::Error;
use crate::compiler::Lookup;
use crate::compiler::SchemaSet;
use crate::declaration::markers::EntityMarker;
use crate::edm::ActionImport;
use crate::edm::EntityContainer;
use crate::edm::EntityDataModel;
use crate::edm::EntitySet;
use crate::edm::FunctionImport;
use crate::edm::NamedMap;
use crate::edm::Singleton;
use crate::edm::StructuralProperty;
use crate::edm::StructuredType;
use std::collections::HashSet;
use std::sync::Arc;

/// Members of the entity container.
pub struct ContainerMembers {
    pub entity_sets: NamedMap<Arc<EntitySet>>,
    pub singletons: NamedMap<Arc<Singleton>>,
    pub action_imports: NamedMap<ActionImport>,
    pub function_imports: NamedMap<FunctionImport>,
}

/// Name of the entity container.
///
/// First non-empty container name of an entity declaration wins.
/// Otherwise the namespace is used as is if it has a single segment,
/// or its segments are concatenated (`Com.Example.Demo` becomes
/// `ComExampleDemo`).
#[must_use]
pub fn container_name(entities: &[Classified<'_, EntityMarker>], namespace: &str) -> String {
    entities
        .iter()
        .map(|c| c.marker.container_name.as_str())
        .find(|name| !name.is_empty())
        .map_or_else(|| namespace.split('.').collect(), String::from)
}

/// Validate the model before freezing.
///
/// # Errors
///
/// - `NavigationTargetNotStructured` if a navigation property doesn't
///   refer to an entity or complex type
/// - `InvalidPropertyReference` if a non-navigation property refers to
///   an entity type
/// - `DuplicateAlias` if an alias is used twice or shadows a namespace
pub fn validate<'a>(schemas: &SchemaSet, lookup: &Lookup<'_, 'a>) -> Result<(), Error<'a>> {
    let mut names = schemas
        .iter()
        .map(|s| s.namespace.as_str())
        .collect::<HashSet<_>>();
    for schema in schemas.iter() {
        match schema.alias.as_deref() {
            Some(alias) if alias != schema.namespace && !names.insert(alias) => {
                return Err(Error::DuplicateAlias(alias.into()));
            }
            _ => (),
        }
    }
    for schema in schemas.iter() {
        for st in schema.types.values().filter_map(|t| t.as_structured()) {
            validate_properties(st, lookup)
                .map_err(Box::new)
                .map_err(|e| Error::Schema(schema.namespace.clone(), e))?;
        }
    }
    Ok(())
}

fn validate_properties<'a>(
    st: StructuredType<'_>,
    lookup: &Lookup<'_, 'a>,
) -> Result<(), Error<'a>> {
    let structure = st.structure();
    for p in structure.properties().values() {
        let target = lookup.structured_type(p.ptype().element());
        match (p, target) {
            (StructuralProperty::NavigationProperty(np), None) => {
                return Err(Error::NavigationTargetNotStructured {
                    property: np.name().into(),
                    enclosing_type: structure.qualified_name(),
                    target: np.ptype().element().into(),
                });
            }
            (StructuralProperty::Property(prop), Some(StructuredType::Entity(_))) => {
                return Err(Error::InvalidPropertyReference {
                    property: prop.name().into(),
                    enclosing_type: structure.qualified_name(),
                    target: prop.ptype().element().into(),
                });
            }
            _ => (),
        }
    }
    Ok(())
}

/// Freeze schemas and build the model.
///
/// # Errors
///
/// `NoSchemas` if nothing was declared.
pub fn assemble<'a>(
    schemas: SchemaSet,
    members: ContainerMembers,
    entities: &[Classified<'_, EntityMarker>],
    base_container: Option<String>,
) -> Result<EntityDataModel, Error<'a>> {
    let namespace = schemas.first_namespace().ok_or(Error::NoSchemas)?.to_string();
    let container = EntityContainer {
        name: container_name(entities, &namespace),
        namespace,
        base_container,
        entity_sets: members.entity_sets,
        singletons: members.singletons,
        action_imports: members.action_imports,
        function_imports: members.function_imports,
    };
    Ok(EntityDataModel::new(container, schemas.freeze()))
}
