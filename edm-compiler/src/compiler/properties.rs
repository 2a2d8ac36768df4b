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

//! Structural property extraction.
//!
//! Walks the fields of an entity or complex declaration and turns
//! property and navigation property markers into
//! [`StructuralProperty`] values.
//!
//! Type of a property is either given explicitly on the marker or
//! inferred from the host type of the field:
//! 1. arrays and generic collections are collections of their element
//! 2. element host type is looked up in the primitive registry
//!    (optional wrappers are removed first)
//! 3. otherwise it must be a host type declared in the same build

use crate::compiler::error::NameKind;
use crate::compiler::Context;
use crate::compiler::Error;
use crate::declaration::markers::NavigationPropertyMarker;
use crate::declaration::markers::PropertyMarker;
use crate::declaration::Declaration;
use crate::declaration::Field;
use crate::declaration::HostType;
use crate::declaration::SimpleIdentifier;
use crate::declaration::TypeName;
use crate::edm::AbstractType;
use crate::edm::IsNullable;
use crate::edm::NamedMap;
use crate::edm::NavigationProperty;
use crate::edm::PrimitiveType;
use crate::edm::Property;
use crate::edm::StructuralProperty;
use crate::edm::TypeRef;

/// Extract structural properties of a declaration in field order.
///
/// # Errors
///
/// Returns error if any field fails to compile.
pub fn extract<'a>(
    decl: &'a Declaration,
    ctx: &Context<'a>,
) -> Result<NamedMap<StructuralProperty>, Error<'a>> {
    decl.fields
        .iter()
        .filter(|f| !f.is_static)
        .try_fold(NamedMap::new(), |mut properties, field| {
            if let Some(p) = compile_field(field, ctx)
                .map_err(Box::new)
                .map_err(|e| Error::Field(&field.name, e))?
            {
                ctx.insert_named(&mut properties, NameKind::Property, p.name().into(), p)?;
            }
            Ok(properties)
        })
}

fn compile_field<'a>(
    field: &'a Field,
    ctx: &Context<'a>,
) -> Result<Option<StructuralProperty>, Error<'a>> {
    match (&field.property, &field.navigation_property) {
        (Some(_), Some(_)) => Err(Error::ConflictingPropertyKind),
        (Some(marker), None) => compile_property(field, marker, ctx)
            .map(StructuralProperty::Property)
            .map(Some),
        (None, Some(marker)) => compile_navigation_property(field, marker, ctx)
            .map(StructuralProperty::NavigationProperty)
            .map(Some),
        (None, None) => Ok(None),
    }
}

fn compile_property<'a>(
    field: &'a Field,
    marker: &'a PropertyMarker,
    ctx: &Context<'a>,
) -> Result<Property, Error<'a>> {
    let ptype = resolve_type(&marker.ptype, &field.host_type, ctx)?;
    let is_nullable = marker
        .nullable
        .map_or_else(|| default_nullable(&field.host_type, &ptype), IsNullable::new);
    Ok(Property {
        name: member_name(&marker.name, &field.name)?,
        ptype,
        is_nullable,
        default_value: marker.default_value.clone(),
        facets: marker.facets,
        host_field: Some(field.name.clone()),
    })
}

fn compile_navigation_property<'a>(
    field: &'a Field,
    marker: &'a NavigationPropertyMarker,
    ctx: &Context<'a>,
) -> Result<NavigationProperty, Error<'a>> {
    Ok(NavigationProperty {
        name: member_name(&marker.name, &field.name)?,
        ptype: resolve_type(&marker.ptype, &field.host_type, ctx)?,
        is_nullable: IsNullable::new(marker.nullable.unwrap_or(true)),
        partner: marker.partner.clone(),
        contains_target: marker.contains_target,
        referential_constraints: marker.referential_constraints.clone(),
        on_delete: marker.on_delete.clone(),
        host_field: Some(field.name.clone()),
    })
}

/// Name of a property or parameter: explicit name if not empty,
/// otherwise the field name.
///
/// # Errors
///
/// `InvalidName` if the name is not a simple identifier.
pub fn member_name<'a>(explicit: &str, field_name: &str) -> Result<String, Error<'a>> {
    let name = if explicit.is_empty() {
        field_name
    } else {
        explicit
    };
    name.parse::<SimpleIdentifier>()
        .map(SimpleIdentifier::into_inner)
        .map_err(|_| Error::InvalidName(name.into()))
}

/// Resolve type of a property or parameter.
///
/// # Errors
///
/// - `InvalidTypeName` if explicit type name is malformed
/// - `UnresolvableType` if type cannot be inferred from host type
pub fn resolve_type<'a>(
    explicit: &'a str,
    host_type: &'a HostType,
    ctx: &Context<'a>,
) -> Result<TypeRef, Error<'a>> {
    if explicit.is_empty() {
        let (element, is_collection) = host_type
            .collection_element()
            .map_or((host_type, false), |element| (element, true));
        Ok(TypeRef {
            element: resolve_host_type(element, ctx)
                .ok_or(Error::UnresolvableType(host_type))?,
            is_collection,
        })
    } else {
        explicit
            .parse::<TypeName>()
            .map(|tn| TypeRef::from(&tn))
            .map_err(|_| Error::InvalidTypeName(explicit))
    }
}

fn resolve_host_type(host_type: &HostType, ctx: &Context<'_>) -> Option<String> {
    let id = host_type.named()?;
    PrimitiveType::from_host(id)
        .map(PrimitiveType::qualified_name)
        .or_else(|| AbstractType::from_host(id).map(AbstractType::qualified_name))
        .or_else(|| ctx.hosts.get(id).map(|entry| entry.qname.to_string()))
}

/// Nullable unless the field is a plain (not wrapped, not collection)
/// host value type such as an integer or a boolean.
pub fn default_nullable(host_type: &HostType, ptype: &TypeRef) -> IsNullable {
    let value_type = !ptype.is_collection()
        && match host_type {
            HostType::Named(id) => PrimitiveType::from_host(id).is_some_and(PrimitiveType::is_value_type),
            _ => false,
        };
    IsNullable::new(!value_type)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compiler::HostIndex;
    use crate::compiler::Worklists;

    fn extract_from(json: &str) -> Result<Vec<StructuralProperty>, String> {
        let decls: Vec<Declaration> = serde_json::from_str(json).unwrap();
        let worklists = Worklists::classify(&decls).unwrap();
        let ctx = Context {
            hosts: HostIndex::build(&worklists, &[]),
            strict_names: false,
        };
        let decl = decls.last().unwrap();
        extract(decl, &ctx)
            .map(|props| props.into_values().collect())
            .map_err(|e| e.root_cause().to_string())
    }

    #[test]
    fn test_explicit_and_inferred_types() {
        let props = extract_from(
            r#"[
              { "host": "demo::Address", "name": "Address", "namespace": "Demo", "complex": {} },
              { "host": "demo::Customer", "name": "Customer", "namespace": "Demo", "complex": {},
                "field": [
                  { "name": "Tags", "host_type": "Vec<String>", "property": {} },
                  { "name": "Names", "host_type": "Vec<String>",
                    "property": { "type": "Collection(Edm.String)" } },
                  { "name": "Age", "host_type": "i32", "property": {} },
                  { "name": "Score", "host_type": "Option<f64>", "property": {} },
                  { "name": "Home", "host_type": "demo::Address", "property": {} },
                  { "name": "Count", "host_type": "i64", "property": { "nullable": true } },
                  { "name": "ignored", "host_type": "i32" }
                ]
              }
            ]"#,
        )
        .unwrap();
        let names = props.iter().map(StructuralProperty::name).collect::<Vec<_>>();
        assert_eq!(names, ["Tags", "Names", "Age", "Score", "Home", "Count"]);
        assert_eq!(props[0].type_name(), "Collection(Edm.String)");
        assert_eq!(props[1].type_name(), "Collection(Edm.String)");
        assert_eq!(props[1].ptype().element(), "Edm.String");
        assert!(props[1].ptype().is_collection());
        assert_eq!(props[2].type_name(), "Edm.Int32");
        assert!(!*props[2].is_nullable().inner());
        assert_eq!(props[3].type_name(), "Edm.Double");
        assert!(*props[3].is_nullable().inner());
        assert_eq!(props[4].type_name(), "Demo.Address");
        assert!(*props[5].is_nullable().inner());
    }

    #[test]
    fn test_conflicting_property_kind() {
        let err = extract_from(
            r#"[{ "host": "demo::X", "name": "X", "namespace": "Demo", "complex": {},
                 "field": [{ "name": "y", "host_type": "i32",
                             "property": {}, "navigation_property": {} }] }]"#,
        )
        .unwrap_err();
        assert_eq!(err, Error::ConflictingPropertyKind.to_string());
    }

    #[test]
    fn test_unresolvable_host_type() {
        let err = extract_from(
            r#"[{ "host": "demo::X", "name": "X", "namespace": "Demo", "complex": {},
                 "field": [{ "name": "y", "host_type": "demo::Unknown", "property": {} }] }]"#,
        )
        .unwrap_err();
        assert!(err.starts_with("cannot resolve type of host type demo::Unknown"));
    }

    #[test]
    fn test_invalid_explicit_type_name() {
        let err = extract_from(
            r#"[{ "host": "demo::X", "name": "X", "namespace": "Demo", "complex": {},
                 "field": [{ "name": "y", "host_type": "String",
                             "property": { "type": "Collection(Edm.String" } }] }]"#,
        )
        .unwrap_err();
        assert_eq!(err, "invalid type name: Collection(Edm.String");
    }
}
