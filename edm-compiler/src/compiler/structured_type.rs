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

//! Entity and complex type builders.

use crate::compiler::properties;
use crate::compiler::Classified;
use crate::compiler::Context;
use crate::compiler::Error;
use crate::compiler::HostKind;
use crate::declaration::markers::ComplexMarker;
use crate::declaration::markers::EntityMarker;
use crate::edm::ComplexType;
use crate::edm::EntityType;
use crate::edm::PropertyRef;
use crate::edm::Structure;

/// Build entity type.
///
/// # Errors
///
/// Returns error if a property fails to compile or the key is missing
/// or malformed.
pub fn build_entity<'a>(
    c: &Classified<'a, EntityMarker>,
    ctx: &Context<'a>,
) -> Result<EntityType, Error<'a>> {
    entity(c, ctx)
        .map_err(Box::new)
        .map_err(|e| Error::Type(c.qname, e))
}

fn entity<'a>(
    c: &Classified<'a, EntityMarker>,
    ctx: &Context<'a>,
) -> Result<EntityType, Error<'a>> {
    let marker = c.marker;
    Ok(EntityType {
        structure: structure(c, HostKind::Entity, marker.is_abstract, marker.open_type, ctx)?,
        key: key(marker)?,
        is_read_only: marker.read_only,
        has_stream: marker.has_stream,
    })
}

/// Build complex type.
///
/// # Errors
///
/// Returns error if a property fails to compile.
pub fn build_complex<'a>(
    c: &Classified<'a, ComplexMarker>,
    ctx: &Context<'a>,
) -> Result<ComplexType, Error<'a>> {
    structure(c, HostKind::Complex, c.marker.is_abstract, c.marker.open_type, ctx)
        .map(|structure| ComplexType { structure })
        .map_err(Box::new)
        .map_err(|e| Error::Type(c.qname, e))
}

fn structure<'a, M>(
    c: &Classified<'a, M>,
    kind: HostKind,
    is_abstract: bool,
    is_open: bool,
    ctx: &Context<'a>,
) -> Result<Structure, Error<'a>> {
    // Only the direct parent is checked. Parent of another kind (or
    // not declared at all) means no base type.
    let base_type = c
        .decl
        .parent
        .as_ref()
        .and_then(|parent| ctx.hosts.get_of_kind(parent, kind))
        .map(|qname| qname.to_string());
    Ok(Structure {
        name: c.qname.name.into(),
        namespace: c.qname.namespace.into(),
        base_type,
        is_abstract,
        is_open,
        properties: properties::extract(c.decl, ctx)?,
        host: Some(c.decl.host.clone()),
    })
}

fn key(marker: &EntityMarker) -> Result<Vec<PropertyRef>, Error<'_>> {
    let paths = marker.key.iter().map(|path| (path, None));
    let refs = marker
        .key_ref
        .iter()
        .map(|r| (&r.path, r.alias.as_ref()));
    let key = paths
        .chain(refs)
        .map(|(path, alias)| {
            match (path.contains('/'), alias) {
                (true, None) => return Err(Error::InvalidKeyAlias(path.as_str())),
                (false, Some(_)) => return Err(Error::UnexpectedKeyAlias(path.as_str())),
                _ => (),
            }
            Ok(PropertyRef {
                path: path.clone(),
                alias: alias.cloned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if key.is_empty() {
        Err(Error::MissingKey)
    } else {
        Ok(key)
    }
}
