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

//! Property and parameter facets.
//!
//! `None` is the "unspecified" sentinel for every facet. `MaxLength`,
//! `Scale` and `Srid` additionally have the symbolic values `max` and
//! `variable`. In declarations these are given either as integers or
//! as the symbolic string.

use serde::de::Error as DeError;
use serde::de::Visitor;
use serde::Deserialize;
use serde::Deserializer;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// Facets of a property or parameter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Facets {
    pub max_length: Option<MaxLength>,
    pub precision: Option<u32>,
    pub scale: Option<Scale>,
    pub srid: Option<Srid>,
    pub unicode: Option<bool>,
}

impl Facets {
    /// No facet is specified.
    #[must_use]
    pub const fn is_unspecified(&self) -> bool {
        self.max_length.is_none()
            && self.precision.is_none()
            && self.scale.is_none()
            && self.srid.is_none()
            && self.unicode.is_none()
    }
}

/// `MaxLength` facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxLength {
    Max,
    Length(u32),
}

/// `Scale` facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Variable,
    Value(u32),
}

/// `SRID` facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Srid {
    Variable,
    Value(u32),
}

impl Display for MaxLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Max => "max".fmt(f),
            Self::Length(v) => v.fmt(f),
        }
    }
}

impl Display for Scale {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Variable => "variable".fmt(f),
            Self::Value(v) => v.fmt(f),
        }
    }
}

impl Display for Srid {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Variable => "variable".fmt(f),
            Self::Value(v) => v.fmt(f),
        }
    }
}

/// Visitor for facets that are either a number or one symbolic value.
struct FacetVisitor<T> {
    symbol: &'static str,
    symbolic: T,
    numeric: fn(u32) -> T,
}

impl<T> Visitor<'_> for FacetVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
        write!(formatter, "non-negative integer or \"{}\"", self.symbol)
    }

    fn visit_u64<E: DeError>(self, value: u64) -> Result<Self::Value, E> {
        u32::try_from(value)
            .map(self.numeric)
            .map_err(|_| DeError::custom(format!("facet value is out of range: {value}")))
    }

    fn visit_i64<E: DeError>(self, value: i64) -> Result<Self::Value, E> {
        u32::try_from(value)
            .map(self.numeric)
            .map_err(|_| DeError::custom(format!("facet value is out of range: {value}")))
    }

    fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
        if value == self.symbol {
            Ok(self.symbolic)
        } else {
            value
                .parse::<u32>()
                .map(self.numeric)
                .map_err(|_| DeError::custom(format!("invalid facet value: {value}")))
        }
    }
}

impl<'de> Deserialize<'de> for MaxLength {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        de.deserialize_any(FacetVisitor {
            symbol: "max",
            symbolic: Self::Max,
            numeric: Self::Length,
        })
    }
}

impl<'de> Deserialize<'de> for Scale {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        de.deserialize_any(FacetVisitor {
            symbol: "variable",
            symbolic: Self::Variable,
            numeric: Self::Value,
        })
    }
}

impl<'de> Deserialize<'de> for Srid {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        de.deserialize_any(FacetVisitor {
            symbol: "variable",
            symbolic: Self::Variable,
            numeric: Self::Value,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_facets_from_json() {
        let facets: Facets =
            serde_json::from_str(r#"{"max_length": "max", "scale": 3, "srid": "variable"}"#)
                .unwrap();
        assert_eq!(facets.max_length, Some(MaxLength::Max));
        assert_eq!(facets.scale, Some(Scale::Value(3)));
        assert_eq!(facets.srid, Some(Srid::Variable));
        assert_eq!(facets.precision, None);
        assert!(!facets.is_unspecified());
        assert!(Facets::default().is_unspecified());
    }

    #[test]
    fn test_facets_reject_bad_values() {
        assert!(serde_json::from_str::<Facets>(r#"{"max_length": "variable"}"#).is_err());
        assert!(serde_json::from_str::<Facets>(r#"{"scale": -1}"#).is_err());
        assert!(serde_json::from_str::<Facets>(r#"{"srid": "max"}"#).is_err());
    }

    #[test]
    fn test_facet_display() {
        assert_eq!(MaxLength::Length(40).to_string(), "40");
        assert_eq!(MaxLength::Max.to_string(), "max");
        assert_eq!(Scale::Variable.to_string(), "variable");
    }
}
