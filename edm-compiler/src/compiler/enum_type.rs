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

//! Enumeration and type definition builders.
//!
//! Member values follow the declaration order of enumeration
//! constants: ordinal for plain enumerations, `2^ordinal` for flags.

use crate::compiler::error::NameKind;
use crate::compiler::Classified;
use crate::compiler::Context;
use crate::compiler::Error;
use crate::compiler::QualifiedName;
use crate::declaration::markers::EnumMarker;
use crate::declaration::Namespace;
use crate::declaration::SimpleIdentifier;
use crate::declaration::TypeDefinitionDeclaration;
use crate::edm::EnumType;
use crate::edm::EnumUnderlyingType;
use crate::edm::NamedMap;
use crate::edm::PrimitiveType;
use crate::edm::TypeDefinition;

/// Build enumeration type.
///
/// # Errors
///
/// - `BadEnumUnderlyingType` if underlying type is not an integer
///   primitive
/// - `EnumMemberOverflow` if a value doesn't fit the underlying type
/// - `InvalidName` if a member name is not an identifier
pub fn build_enum<'a>(
    c: &Classified<'a, EnumMarker>,
    ctx: &Context<'a>,
) -> Result<EnumType, Error<'a>> {
    enumeration(c, ctx)
        .map_err(Box::new)
        .map_err(|e| Error::Type(c.qname, e))
}

fn enumeration<'a>(
    c: &Classified<'a, EnumMarker>,
    ctx: &Context<'a>,
) -> Result<EnumType, Error<'a>> {
    let marker = c.marker;
    let underlying_type = marker
        .underlying_type
        .as_deref()
        .map_or(Ok(EnumUnderlyingType::default()), |name| {
            name.parse()
                .map_err(|_| Error::BadEnumUnderlyingType(name))
        })?;
    let members = c
        .decl
        .enum_members
        .iter()
        .flatten()
        .enumerate()
        .try_fold(NamedMap::new(), |mut members, (ordinal, member)| -> Result<_, Error<'a>> {
            member
                .parse::<SimpleIdentifier>()
                .map_err(|_| Error::InvalidName(member.clone()))?;
            let value = member_value(ordinal, marker.is_flags)
                .filter(|v| *v <= underlying_type.max_value())
                .ok_or(Error::EnumMemberOverflow {
                    member,
                    underlying_type,
                })?;
            ctx.insert_named(&mut members, NameKind::EnumMember, member.clone(), value)?;
            Ok(members)
        })?;
    Ok(EnumType {
        name: c.qname.name.into(),
        namespace: c.qname.namespace.into(),
        underlying_type,
        is_flags: marker.is_flags,
        members,
        host: Some(c.decl.host.clone()),
    })
}

fn member_value(ordinal: usize, is_flags: bool) -> Option<i64> {
    let ordinal = u32::try_from(ordinal).ok()?;
    if is_flags {
        2i64.checked_pow(ordinal)
    } else {
        Some(i64::from(ordinal))
    }
}

/// Build type definition.
///
/// # Errors
///
/// - `InvalidName` if name or namespace is malformed
/// - `TypeDefinitionOfNotPrimitiveType` if underlying type is not a
///   built-in primitive type
pub fn build_type_definition(td: &TypeDefinitionDeclaration) -> Result<TypeDefinition, Error<'_>> {
    let qname = QualifiedName::new(&td.namespace, &td.name);
    type_definition(td)
        .map_err(Box::new)
        .map_err(|e| Error::Type(qname, e))
}

fn type_definition(td: &TypeDefinitionDeclaration) -> Result<TypeDefinition, Error<'_>> {
    td.name
        .parse::<SimpleIdentifier>()
        .map_err(|_| Error::InvalidName(td.name.clone()))?;
    td.namespace
        .parse::<Namespace>()
        .map_err(|_| Error::InvalidName(td.namespace.clone()))?;
    let underlying_type = PrimitiveType::from_qualified_name(&td.underlying_type)
        .ok_or(Error::TypeDefinitionOfNotPrimitiveType(&td.underlying_type))?;
    Ok(TypeDefinition {
        name: td.name.clone(),
        namespace: td.namespace.clone(),
        underlying_type,
        facets: td.facets,
        host: td.host.clone(),
    })
}
