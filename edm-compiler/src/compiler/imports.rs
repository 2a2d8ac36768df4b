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

//! Action and function import factories.
//!
//! Imported operation is found by the namespace of the import and the
//! operation name of the import marker. The namespace declared by the
//! operation itself is not used.

use crate::compiler::context::insert_named;
use crate::compiler::error::NameKind;
use crate::compiler::Classified;
use crate::compiler::Error;
use crate::compiler::Lookup;
use crate::compiler::QualifiedName;
use crate::declaration::markers::ActionImportMarker;
use crate::declaration::markers::FunctionImportMarker;
use crate::edm::ActionImport;
use crate::edm::EntitySet;
use crate::edm::FunctionImport;
use crate::edm::IsBound;
use crate::edm::NamedMap;
use std::sync::Arc;
use tracing::warn;

/// Build action imports in declaration order.
///
/// # Errors
///
/// - `UnresolvedReference` if imported action is not declared
/// - `MissingEntitySet` if bound action has no entity set
pub fn action_imports<'a>(
    imports: &[Classified<'a, ActionImportMarker>],
    lookup: &Lookup<'_, 'a>,
    strict_names: bool,
) -> Result<NamedMap<ActionImport>, Error<'a>> {
    imports.iter().try_fold(NamedMap::new(), |mut built, c| {
        let import = action_import(c, lookup)
            .map_err(Box::new)
            .map_err(|e| Error::ActionImport(c.qname.to_string(), e))?;
        insert_named(&mut built, NameKind::ActionImport, import.name.clone(), import, strict_names)?;
        Ok(built)
    })
}

fn action_import<'a>(
    c: &Classified<'a, ActionImportMarker>,
    lookup: &Lookup<'_, 'a>,
) -> Result<ActionImport, Error<'a>> {
    let marker = c.marker;
    let name = operation_name(&marker.action, c.qname);
    let action = lookup.action(c.qname.namespace, name)?;
    let entity_set = entity_set(
        &marker.entity_set,
        action.operation().is_bound(),
        c.qname.namespace,
        name,
        lookup,
    )?;
    Ok(ActionImport {
        name: c.qname.name.into(),
        operation: action,
        entity_set,
        include_in_service_document: marker.include_in_service_document,
        host: c.decl.host.clone(),
    })
}

/// Build function imports in declaration order.
///
/// # Errors
///
/// - `UnresolvedReference` if imported function is not declared
/// - `MissingEntitySet` if bound function has no entity set
pub fn function_imports<'a>(
    imports: &[Classified<'a, FunctionImportMarker>],
    lookup: &Lookup<'_, 'a>,
    strict_names: bool,
) -> Result<NamedMap<FunctionImport>, Error<'a>> {
    imports.iter().try_fold(NamedMap::new(), |mut built, c| {
        let import = function_import(c, lookup)
            .map_err(Box::new)
            .map_err(|e| Error::FunctionImport(c.qname.to_string(), e))?;
        insert_named(&mut built, NameKind::FunctionImport, import.name.clone(), import, strict_names)?;
        Ok(built)
    })
}

fn function_import<'a>(
    c: &Classified<'a, FunctionImportMarker>,
    lookup: &Lookup<'_, 'a>,
) -> Result<FunctionImport, Error<'a>> {
    let marker = c.marker;
    let name = operation_name(&marker.function, c.qname);
    let function = lookup.function(c.qname.namespace, name)?;
    let entity_set = entity_set(
        &marker.entity_set,
        function.operation().is_bound(),
        c.qname.namespace,
        name,
        lookup,
    )?;
    Ok(FunctionImport {
        name: c.qname.name.into(),
        operation: function,
        entity_set,
        include_in_service_document: marker.include_in_service_document,
        host: c.decl.host.clone(),
    })
}

/// Operation name from the marker, import name if not given.
fn operation_name<'a>(explicit: &'a str, import: QualifiedName<'a>) -> &'a str {
    if explicit.is_empty() {
        import.name
    } else {
        explicit
    }
}

fn entity_set<'a>(
    name: &str,
    is_bound: IsBound,
    namespace: &str,
    operation: &str,
    lookup: &Lookup<'_, 'a>,
) -> Result<Option<Arc<EntitySet>>, Error<'a>> {
    let entity_set = (!name.is_empty())
        .then(|| lookup.entity_set(name))
        .flatten();
    if entity_set.is_none() {
        if *is_bound.inner() {
            return Err(Error::MissingEntitySet(format!("{namespace}.{operation}")));
        }
        if !name.is_empty() {
            warn!(entity_set = name, "entity set of unbound operation import is not declared");
        }
    }
    Ok(entity_set)
}
