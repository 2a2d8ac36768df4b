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

//! Built-in types of the `Edm` namespace.
//!
//! Every built-in has a canonical name and a host type hint. Hints are
//! used to infer protocol types of host fields that don't carry an
//! explicit type name.

use crate::declaration::HostTypeId;
use crate::declaration::Namespace;

/// Primitive (scalar) types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Binary,
    Boolean,
    Byte,
    Date,
    DateTimeOffset,
    Decimal,
    Double,
    Duration,
    Guid,
    Int16,
    Int32,
    Int64,
    SByte,
    Single,
    Stream,
    String,
    TimeOfDay,
    Geography,
    GeographyPoint,
    GeographyLineString,
    GeographyPolygon,
    GeographyMultiPoint,
    GeographyMultiLineString,
    GeographyMultiPolygon,
    GeographyCollection,
    Geometry,
    GeometryPoint,
    GeometryLineString,
    GeometryPolygon,
    GeometryMultiPoint,
    GeometryMultiLineString,
    GeometryMultiPolygon,
    GeometryCollection,
}

// (type, simple name, host hint, value type)
const PRIMITIVES: [(PrimitiveType, &str, &str, bool); 33] = [
    (PrimitiveType::Binary, "Binary", "Bytes", false),
    (PrimitiveType::Boolean, "Boolean", "bool", true),
    (PrimitiveType::Byte, "Byte", "u8", true),
    (PrimitiveType::Date, "Date", "Date", false),
    (PrimitiveType::DateTimeOffset, "DateTimeOffset", "DateTimeOffset", false),
    (PrimitiveType::Decimal, "Decimal", "Decimal", false),
    (PrimitiveType::Double, "Double", "f64", true),
    (PrimitiveType::Duration, "Duration", "Duration", false),
    (PrimitiveType::Guid, "Guid", "Uuid", false),
    (PrimitiveType::Int16, "Int16", "i16", true),
    (PrimitiveType::Int32, "Int32", "i32", true),
    (PrimitiveType::Int64, "Int64", "i64", true),
    (PrimitiveType::SByte, "SByte", "i8", true),
    (PrimitiveType::Single, "Single", "f32", true),
    (PrimitiveType::Stream, "Stream", "Stream", false),
    (PrimitiveType::String, "String", "String", false),
    (PrimitiveType::TimeOfDay, "TimeOfDay", "TimeOfDay", false),
    (PrimitiveType::Geography, "Geography", "Geography", false),
    (PrimitiveType::GeographyPoint, "GeographyPoint", "GeographyPoint", false),
    (PrimitiveType::GeographyLineString, "GeographyLineString", "GeographyLineString", false),
    (PrimitiveType::GeographyPolygon, "GeographyPolygon", "GeographyPolygon", false),
    (PrimitiveType::GeographyMultiPoint, "GeographyMultiPoint", "GeographyMultiPoint", false),
    (PrimitiveType::GeographyMultiLineString, "GeographyMultiLineString", "GeographyMultiLineString", false),
    (PrimitiveType::GeographyMultiPolygon, "GeographyMultiPolygon", "GeographyMultiPolygon", false),
    (PrimitiveType::GeographyCollection, "GeographyCollection", "GeographyCollection", false),
    (PrimitiveType::Geometry, "Geometry", "Geometry", false),
    (PrimitiveType::GeometryPoint, "GeometryPoint", "GeometryPoint", false),
    (PrimitiveType::GeometryLineString, "GeometryLineString", "GeometryLineString", false),
    (PrimitiveType::GeometryPolygon, "GeometryPolygon", "GeometryPolygon", false),
    (PrimitiveType::GeometryMultiPoint, "GeometryMultiPoint", "GeometryMultiPoint", false),
    (PrimitiveType::GeometryMultiLineString, "GeometryMultiLineString", "GeometryMultiLineString", false),
    (PrimitiveType::GeometryMultiPolygon, "GeometryMultiPolygon", "GeometryMultiPolygon", false),
    (PrimitiveType::GeometryCollection, "GeometryCollection", "GeometryCollection", false),
];

impl PrimitiveType {
    /// All primitive types in registry order.
    pub fn all() -> impl Iterator<Item = Self> {
        PRIMITIVES.iter().map(|(t, _, _, _)| *t)
    }

    fn descriptor(self) -> &'static (Self, &'static str, &'static str, bool) {
        // Registry order matches enum declaration order.
        &PRIMITIVES[self as usize]
    }

    /// Simple name (without `Edm.`).
    #[must_use]
    pub fn name(self) -> &'static str {
        self.descriptor().1
    }

    /// Host type used to infer this primitive.
    #[must_use]
    pub fn host_hint(self) -> &'static str {
        self.descriptor().2
    }

    /// Host values of this type cannot be absent unless wrapped.
    #[must_use]
    pub fn is_value_type(self) -> bool {
        self.descriptor().3
    }

    #[must_use]
    pub fn qualified_name(self) -> String {
        format!("{}.{}", Namespace::EDM, self.name())
    }

    /// Find primitive by simple name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        PRIMITIVES
            .iter()
            .find(|(_, n, _, _)| *n == name)
            .map(|(t, _, _, _)| *t)
    }

    /// Find primitive by fully qualified name (`Edm.String`).
    #[must_use]
    pub fn from_qualified_name(qname: &str) -> Option<Self> {
        qname
            .strip_prefix(Namespace::EDM)
            .and_then(|v| v.strip_prefix('.'))
            .and_then(Self::from_name)
    }

    /// Find primitive by host type.
    #[must_use]
    pub fn from_host(host: &HostTypeId) -> Option<Self> {
        PRIMITIVES
            .iter()
            .find(|(_, _, hint, _)| *hint == host.inner().as_str())
            .map(|(t, _, _, _)| *t)
    }
}

/// Abstract built-in types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbstractType {
    PrimitiveType,
    ComplexType,
    EntityType,
}

const ABSTRACTS: [(AbstractType, &str, &str); 3] = [
    (AbstractType::PrimitiveType, "PrimitiveType", "PrimitiveValue"),
    (AbstractType::ComplexType, "ComplexType", "ComplexValue"),
    (AbstractType::EntityType, "EntityType", "EntityValue"),
];

impl AbstractType {
    pub fn all() -> impl Iterator<Item = Self> {
        ABSTRACTS.iter().map(|(t, _, _)| *t)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        ABSTRACTS[self as usize].1
    }

    #[must_use]
    pub fn host_hint(self) -> &'static str {
        ABSTRACTS[self as usize].2
    }

    #[must_use]
    pub fn qualified_name(self) -> String {
        format!("{}.{}", Namespace::EDM, self.name())
    }

    #[must_use]
    pub fn from_host(host: &HostTypeId) -> Option<Self> {
        ABSTRACTS
            .iter()
            .find(|(_, _, hint)| *hint == host.inner().as_str())
            .map(|(t, _, _)| *t)
    }
}
