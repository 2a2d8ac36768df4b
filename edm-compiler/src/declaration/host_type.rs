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

//! Host-side type references.
//!
//! The compiler never inspects host constructs. It only compares host
//! identities and walks the small type grammar below to infer
//! collection-ness and element types of fields:
//!
//! - `Option<T>`: wrapper that allows absence; unwrapped during
//!   primitive lookup
//! - `[T]`: array of `T`
//! - `Vec<T>`, `VecDeque<T>`, `HashSet<T>`, `BTreeSet<T>`: generic
//!   collections of `T`
//! - anything else: a named host type (scalar or declared construct)

use serde::de::Error as DeError;
use serde::de::Visitor;
use serde::Deserialize;
use serde::Deserializer;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::str::FromStr;
use tagged_types::TaggedType;

/// Opaque identity of a host type (declared construct or scalar).
pub type HostTypeId = TaggedType<String, HostTypeIdTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[transparent(Debug, Display, Deserialize)]
#[capability(inner_access)]
pub enum HostTypeIdTag {}

const GENERIC_COLLECTIONS: [&str; 4] = ["Vec", "VecDeque", "HashSet", "BTreeSet"];
const OPTIONAL: &str = "Option";

/// Host type of a declared field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HostType {
    /// Named host type.
    Named(HostTypeId),
    /// Wrapper that makes the inner type nullable.
    Optional(Box<HostType>),
    /// Fixed array.
    Array(Box<HostType>),
    /// Generic collection with declared element type.
    Collection(Box<HostType>),
}

impl HostType {
    /// Element type of an array or generic collection. Optional
    /// wrappers around the collection itself are looked through.
    #[must_use]
    pub fn collection_element(&self) -> Option<&Self> {
        match self {
            Self::Array(v) | Self::Collection(v) => Some(v),
            Self::Optional(v) => v.collection_element(),
            Self::Named(_) => None,
        }
    }

    /// Type with all optional wrappers removed.
    #[must_use]
    pub fn unwrapped(&self) -> &Self {
        match self {
            Self::Optional(v) => v.unwrapped(),
            _ => self,
        }
    }

    /// Name of the host type after removing optional wrappers, if the
    /// unwrapped type is named.
    #[must_use]
    pub fn named(&self) -> Option<&HostTypeId> {
        match self.unwrapped() {
            Self::Named(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }
}

/// Host type grammar errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error(String);

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "invalid host type {}", self.0)
    }
}

fn strip_generic<'a>(s: &'a str, generic: &str) -> Option<&'a str> {
    s.strip_prefix(generic)
        .and_then(|v| v.strip_prefix('<'))
        .and_then(|v| v.strip_suffix('>'))
}

impl FromStr for HostType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || Error(s.into());
        if let Some(inner) = strip_generic(s, OPTIONAL) {
            return inner.parse().map(|v| Self::Optional(Box::new(v))).map_err(|_| err());
        }
        if let Some(inner) = s.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
            return inner.parse().map(|v| Self::Array(Box::new(v))).map_err(|_| err());
        }
        if let Some(inner) = GENERIC_COLLECTIONS
            .iter()
            .find_map(|generic| strip_generic(s, generic))
        {
            return inner.parse().map(|v| Self::Collection(Box::new(v))).map_err(|_| err());
        }
        if s.is_empty()
            || s.chars()
                .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '[' | ']'))
        {
            Err(err())
        } else {
            Ok(Self::Named(HostTypeId::new(s.into())))
        }
    }
}

impl Display for HostType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Named(v) => v.fmt(f),
            Self::Optional(v) => write!(f, "{OPTIONAL}<{v}>"),
            Self::Array(v) => write!(f, "[{v}]"),
            Self::Collection(v) => write!(f, "Vec<{v}>"),
        }
    }
}

impl<'de> Deserialize<'de> for HostType {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct HtVisitor {}
        impl Visitor<'_> for HtVisitor {
            type Value = HostType;

            fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
                formatter.write_str("host type string")
            }
            fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map_err(DeError::custom)
            }
        }

        de.deserialize_string(HtVisitor {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(v: &str) -> HostType {
        HostType::Named(HostTypeId::new(v.into()))
    }

    #[test]
    fn test_parse_wrappers() {
        assert_eq!("i32".parse::<HostType>().unwrap(), named("i32"));
        assert_eq!(
            "Option<i32>".parse::<HostType>().unwrap(),
            HostType::Optional(Box::new(named("i32")))
        );
        assert_eq!(
            "[demo::Tag]".parse::<HostType>().unwrap(),
            HostType::Array(Box::new(named("demo::Tag")))
        );
        assert_eq!(
            "Option<BTreeSet<String>>".parse::<HostType>().unwrap(),
            HostType::Optional(Box::new(HostType::Collection(Box::new(named("String")))))
        );
    }

    #[test]
    fn test_parse_invalid() {
        for invalid in ["", "Vec<>", "Option<i32", "[i32", "Vec <i32>", "Map<String>"] {
            assert!(invalid.parse::<HostType>().is_err(), "{invalid}");
        }
    }

    #[test]
    fn test_collection_element_looks_through_optional() {
        let ht: HostType = "Option<Vec<Option<i64>>>".parse().unwrap();
        let element = ht.collection_element().unwrap();
        assert!(element.is_optional());
        assert_eq!(element.named(), Some(&HostTypeId::new("i64".into())));
        assert!(named("String").collection_element().is_none());
    }

    #[test]
    fn test_display_round_trip() {
        for s in ["Option<i32>", "[u8]", "Vec<demo::Order>", "demo::Address"] {
            assert_eq!(s.parse::<HostType>().unwrap().to_string(), s);
        }
    }
}
