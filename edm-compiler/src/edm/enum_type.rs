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

//! Enumeration and type definition types.

use crate::declaration::HostTypeId;
use crate::edm::Facets;
use crate::edm::NamedMap;
use crate::edm::PrimitiveType;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::str::FromStr;

/// Underlying type of an enumeration. Restricted to the integer
/// primitives.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EnumUnderlyingType {
    Byte,
    SByte,
    Int16,
    #[default]
    Int32,
    Int64,
}

impl EnumUnderlyingType {
    #[must_use]
    pub const fn primitive(self) -> PrimitiveType {
        match self {
            Self::Byte => PrimitiveType::Byte,
            Self::SByte => PrimitiveType::SByte,
            Self::Int16 => PrimitiveType::Int16,
            Self::Int32 => PrimitiveType::Int32,
            Self::Int64 => PrimitiveType::Int64,
        }
    }

    /// Largest member value representable by the type.
    #[must_use]
    pub const fn max_value(self) -> i64 {
        match self {
            Self::Byte => u8::MAX as i64,
            Self::SByte => i8::MAX as i64,
            Self::Int16 => i16::MAX as i64,
            Self::Int32 => i32::MAX as i64,
            Self::Int64 => i64::MAX,
        }
    }
}

impl Display for EnumUnderlyingType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.primitive().qualified_name().fmt(f)
    }
}

/// Bad enum underlying type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadUnderlyingType(pub String);

impl Display for BadUnderlyingType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "bad enum underlying type {}", self.0)
    }
}

impl FromStr for EnumUnderlyingType {
    type Err = BadUnderlyingType;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match PrimitiveType::from_qualified_name(s) {
            Some(PrimitiveType::Byte) => Ok(Self::Byte),
            Some(PrimitiveType::SByte) => Ok(Self::SByte),
            Some(PrimitiveType::Int16) => Ok(Self::Int16),
            Some(PrimitiveType::Int32) => Ok(Self::Int32),
            Some(PrimitiveType::Int64) => Ok(Self::Int64),
            _ => Err(BadUnderlyingType(s.into())),
        }
    }
}

/// Enumeration type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub(crate) name: String,
    pub(crate) namespace: String,
    pub(crate) underlying_type: EnumUnderlyingType,
    pub(crate) is_flags: bool,
    pub(crate) members: NamedMap<i64>,
    pub(crate) host: Option<HostTypeId>,
}

impl EnumType {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    #[must_use]
    pub const fn underlying_type(&self) -> EnumUnderlyingType {
        self.underlying_type
    }

    #[must_use]
    pub const fn is_flags(&self) -> bool {
        self.is_flags
    }

    /// Members with their values in declaration order.
    #[must_use]
    pub const fn members(&self) -> &NamedMap<i64> {
        &self.members
    }

    #[must_use]
    pub const fn host(&self) -> Option<&HostTypeId> {
        self.host.as_ref()
    }
}

/// Named primitive type with facets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
    pub(crate) name: String,
    pub(crate) namespace: String,
    pub(crate) underlying_type: PrimitiveType,
    pub(crate) facets: Facets,
    pub(crate) host: Option<HostTypeId>,
}

impl TypeDefinition {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    #[must_use]
    pub const fn underlying_type(&self) -> PrimitiveType {
        self.underlying_type
    }

    #[must_use]
    pub const fn facets(&self) -> &Facets {
        &self.facets
    }

    #[must_use]
    pub const fn host(&self) -> Option<&HostTypeId> {
        self.host.as_ref()
    }
}
