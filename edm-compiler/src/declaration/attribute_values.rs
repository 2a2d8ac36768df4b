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

//! Name grammar used by declarations.
//!
//! Declarations carry plain strings. The compiler validates them with
//! the parsers defined here before any name reaches the model:
//! - [`SimpleIdentifier`]: type, property, member and operation names
//! - [`Namespace`]: dot-separated simple identifiers
//! - [`QualifiedName`]: `Namespace.SimpleIdentifier`
//! - [`TypeName`]: qualified name optionally wrapped in `Collection(...)`

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::str::FromStr;

/// Name grammar violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidSimpleIdentifier(String),
    InvalidNamespace(String),
    InvalidQualifiedName(String),
    InvalidTypeName(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidSimpleIdentifier(id) => write!(f, "invalid simple identifier {id}"),
            Self::InvalidNamespace(ns) => write!(f, "invalid namespace {ns}"),
            Self::InvalidQualifiedName(qn) => write!(f, "invalid qualified name {qn}"),
            Self::InvalidTypeName(tn) => write!(f, "invalid type name {tn}"),
        }
    }
}

/// Starts with a letter or underscore, followed by letters,
/// underscores or digits. Max length is not checked.
#[derive(Clone, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct SimpleIdentifier(String);

impl SimpleIdentifier {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for SimpleIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

impl AsRef<str> for SimpleIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for SimpleIdentifier {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let valid_start = chars
            .next()
            .is_some_and(|first| first.is_alphabetic() || first == '_');
        if valid_start && chars.all(|c| c.is_alphanumeric() || c == '_') {
            Ok(Self(s.into()))
        } else {
            Err(Error::InvalidSimpleIdentifier(s.into()))
        }
    }
}

/// Dot-separated sequence of simple identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    /// Namespace of built-in types.
    pub const EDM: &'static str = "Edm";

    /// Identifiers that form the namespace.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Check if namespace is `Edm`.
    #[must_use]
    pub fn is_edm(&self) -> bool {
        self.0 == Self::EDM
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Namespace {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split('.')
            .try_for_each(|id| SimpleIdentifier::from_str(id).map(|_| ()))
            .map_err(|_| Error::InvalidNamespace(s.into()))?;
        Ok(Self(s.into()))
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

impl AsRef<str> for Namespace {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Namespace-qualified name. The namespace is everything before the
/// last dot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub namespace: Namespace,
    pub name: SimpleIdentifier,
}

impl FromStr for QualifiedName {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || Error::InvalidQualifiedName(s.into());
        let (namespace, name) = s.rsplit_once('.').ok_or_else(err)?;
        Ok(Self {
            namespace: namespace.parse().map_err(|_| err())?,
            name: name.parse().map_err(|_| err())?,
        })
    }
}

impl Display for QualifiedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

/// Type reference: either a single qualified type or
/// `Collection(QualifiedName)`. Parsing is case-sensitive and does
/// not tolerate whitespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeName {
    One(QualifiedName),
    CollectionOf(QualifiedName),
}

impl TypeName {
    pub const COLLECTION_PREFIX: &'static str = "Collection(";
    pub const COLLECTION_SUFFIX: &'static str = ")";

    /// Element type regardless of collection wrapper.
    #[must_use]
    pub const fn element(&self) -> &QualifiedName {
        match self {
            Self::One(v) | Self::CollectionOf(v) => v,
        }
    }

    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::CollectionOf(_))
    }
}

impl FromStr for TypeName {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |_| Error::InvalidTypeName(s.into());
        match s
            .strip_prefix(Self::COLLECTION_PREFIX)
            .and_then(|v| v.strip_suffix(Self::COLLECTION_SUFFIX))
        {
            Some(inner) => inner.parse().map(Self::CollectionOf).map_err(err),
            None => s.parse().map(Self::One).map_err(err),
        }
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::One(v) => v.fmt(f),
            Self::CollectionOf(v) => write!(
                f,
                "{}{v}{}",
                Self::COLLECTION_PREFIX,
                Self::COLLECTION_SUFFIX
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_identifier() {
        for valid in ["Name", "_name", "Name123", "a", "Größe"] {
            assert!(SimpleIdentifier::from_str(valid).is_ok(), "{valid}");
        }
        for invalid in ["", "123Name", "Name-x", "Name.x", "Name x", "$Name"] {
            assert_eq!(
                SimpleIdentifier::from_str(invalid),
                Err(Error::InvalidSimpleIdentifier(invalid.into())),
            );
        }
    }

    #[test]
    fn test_namespace() {
        let ns: Namespace = "Com.Example.Demo".parse().unwrap();
        assert_eq!(ns.segments().collect::<Vec<_>>(), ["Com", "Example", "Demo"]);
        assert!(!ns.is_edm());
        assert!("Edm".parse::<Namespace>().unwrap().is_edm());
        for invalid in ["", "Demo.", ".Demo", "Demo..Model", "Demo.1x"] {
            assert!(Namespace::from_str(invalid).is_err(), "{invalid}");
        }
    }

    #[test]
    fn test_qualified_name_splits_on_last_dot() {
        let qn: QualifiedName = "Com.Example.Demo.Product".parse().unwrap();
        assert_eq!(qn.namespace.as_str(), "Com.Example.Demo");
        assert_eq!(qn.name.as_str(), "Product");
        assert_eq!(qn.to_string(), "Com.Example.Demo.Product");
        for invalid in ["Product", "Demo.", ".Product", "Demo..Product"] {
            assert!(QualifiedName::from_str(invalid).is_err(), "{invalid}");
        }
    }

    #[test]
    fn test_type_name_collection_wrapper() {
        let tn: TypeName = "Collection(Edm.String)".parse().unwrap();
        assert!(tn.is_collection());
        assert_eq!(tn.element().to_string(), "Edm.String");
        assert_eq!(tn.to_string(), "Collection(Edm.String)");

        let tn: TypeName = "Demo.Address".parse().unwrap();
        assert!(!tn.is_collection());
        assert_eq!(tn.to_string(), "Demo.Address");
    }

    #[test]
    fn test_type_name_invalid() {
        for invalid in [
            "Collection()",
            "Collection(Edm.String",
            "CollectionEdm.String)",
            "Collection (Edm.String)",
            "collection(Edm.String)",
            "Collection( Edm.String)",
        ] {
            assert_eq!(
                TypeName::from_str(invalid),
                Err(Error::InvalidTypeName(invalid.into())),
            );
        }
    }
}
