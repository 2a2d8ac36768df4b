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

use crate::compiler::QualifiedName;
use crate::declaration::HostType;
use crate::declaration::HostTypeId;
use crate::declaration::Role;
use crate::edm::EnumUnderlyingType;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// Kind of a name that must be unique in its scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Type,
    Function,
    Action,
    Property,
    Parameter,
    EnumMember,
    EntitySet,
    Singleton,
    ActionImport,
    FunctionImport,
}

impl Display for NameKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Type => "type",
            Self::Function => "function",
            Self::Action => "action",
            Self::Property => "property",
            Self::Parameter => "parameter",
            Self::EnumMember => "enum member",
            Self::EntitySet => "entity set",
            Self::Singleton => "singleton",
            Self::ActionImport => "action import",
            Self::FunctionImport => "function import",
        }
        .fmt(f)
    }
}

/// Compilation error kinds.
#[derive(Debug)]
pub enum Error<'a> {
    /// Declaration must have exactly one role marker. Contains roles
    /// that were found.
    InvalidDeclaration(Vec<Role>),
    /// Enum role on a host construct that is not an enumeration.
    NotAnEnumeration,
    /// Field has both property and navigation property markers.
    ConflictingPropertyKind,
    /// Host type has no primitive or declared counterpart.
    UnresolvableType(&'a HostType),
    /// Name does not follow the identifier grammar.
    InvalidName(String),
    /// Type name does not follow the type name grammar.
    InvalidTypeName(&'a str),
    /// Entity type without key.
    MissingKey,
    /// Key path into a complex property must have an alias.
    InvalidKeyAlias(&'a str),
    /// Key path that is a single property must not have an alias.
    UnexpectedKeyAlias(&'a str),
    /// Function without return type.
    MissingReturnType,
    /// Referenced function or action was not found.
    UnresolvedReference {
        reference: String,
        namespace: &'a str,
    },
    /// Non-navigation property refers to an entity type.
    InvalidPropertyReference {
        property: String,
        enclosing_type: String,
        target: String,
    },
    /// Bound operation import without entity set.
    MissingEntitySet(String),
    /// Generated enum member value doesn't fit the underlying type.
    EnumMemberOverflow {
        member: &'a str,
        underlying_type: EnumUnderlyingType,
    },
    /// Enum underlying type is not an integer primitive.
    BadEnumUnderlyingType(&'a str),
    /// Type definition is not a primitive type.
    TypeDefinitionOfNotPrimitiveType(&'a str),
    /// Navigation property target is not an entity or complex type.
    NavigationTargetNotStructured {
        property: String,
        enclosing_type: String,
        target: String,
    },
    /// Complex type contains itself. Contains the chain of complex
    /// types ending with the repeated one.
    CyclicComplexType(Vec<String>),
    /// Name is declared twice in the same scope.
    DuplicateName { kind: NameKind, name: String },
    /// Alias is used by more than one schema or clashes with a
    /// namespace.
    DuplicateAlias(String),
    /// Nothing to build model from.
    NoSchemas,
    /// Error while compiling a declaration.
    Declaration(&'a HostTypeId, Box<Error<'a>>),
    /// Error while compiling a field.
    Field(&'a str, Box<Error<'a>>),
    /// Error while compiling a type.
    Type(QualifiedName<'a>, Box<Error<'a>>),
    /// Error while compiling an action or function.
    Operation(QualifiedName<'a>, Box<Error<'a>>),
    /// Error while compiling an entity set.
    EntitySet(String, Box<Error<'a>>),
    /// Error while compiling a singleton.
    Singleton(String, Box<Error<'a>>),
    /// Error while compiling an action import.
    ActionImport(String, Box<Error<'a>>),
    /// Error while compiling a function import.
    FunctionImport(String, Box<Error<'a>>),
    /// Error while compiling a schema.
    Schema(String, Box<Error<'a>>),
}

impl<'a> Error<'a> {
    /// Innermost error without compilation context.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Declaration(_, err)
            | Self::Field(_, err)
            | Self::Type(_, err)
            | Self::Operation(_, err)
            | Self::EntitySet(_, err)
            | Self::Singleton(_, err)
            | Self::ActionImport(_, err)
            | Self::FunctionImport(_, err)
            | Self::Schema(_, err) => err.root_cause(),
            _ => self,
        }
    }

    pub(crate) fn duplicate(kind: NameKind, name: impl Into<String>) -> Self {
        Self::DuplicateName {
            kind,
            name: name.into(),
        }
    }
}

impl Display for Error<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidDeclaration(roles) if roles.is_empty() => {
                write!(f, "declaration has no role marker")
            }
            Self::InvalidDeclaration(roles) => {
                write!(f, "declaration has more than one role marker:")?;
                roles.iter().try_for_each(|r| write!(f, " {r}"))
            }
            Self::NotAnEnumeration => write!(f, "enum marker on a host type that is not an enumeration"),
            Self::ConflictingPropertyKind => {
                write!(f, "field is marked both as property and navigation property")
            }
            Self::UnresolvableType(ht) => write!(f, "cannot resolve type of host type {ht}"),
            Self::InvalidName(name) => write!(f, "invalid name: {name}"),
            Self::InvalidTypeName(name) => write!(f, "invalid type name: {name}"),
            Self::MissingKey => write!(f, "entity type has no key"),
            Self::InvalidKeyAlias(path) => {
                write!(f, "key property path requires an alias: {path}")
            }
            Self::UnexpectedKeyAlias(path) => {
                write!(f, "key property without path must not have an alias: {path}")
            }
            Self::MissingReturnType => write!(f, "function has no return type"),
            Self::UnresolvedReference {
                reference,
                namespace,
            } => write!(f, "unresolved reference {reference} in namespace {namespace}"),
            Self::InvalidPropertyReference {
                property,
                enclosing_type,
                target,
            } => write!(
                f,
                "property {property} of {enclosing_type} refers to entity type {target}; use a navigation property"
            ),
            Self::MissingEntitySet(operation) => {
                write!(f, "bound operation {operation} is imported without entity set")
            }
            Self::EnumMemberOverflow {
                member,
                underlying_type,
            } => write!(f, "value of enum member {member} doesn't fit {underlying_type}"),
            Self::BadEnumUnderlyingType(name) => write!(f, "bad enum underlying type: {name}"),
            Self::TypeDefinitionOfNotPrimitiveType(name) => {
                write!(f, "type definition is not a primitive type: {name}")
            }
            Self::NavigationTargetNotStructured {
                property,
                enclosing_type,
                target,
            } => write!(
                f,
                "navigation property {property} of {enclosing_type} refers to {target} that is not a structured type"
            ),
            Self::CyclicComplexType(chain) => {
                write!(f, "cyclic complex type: {}", chain.join(" -> "))
            }
            Self::DuplicateName { kind, name } => write!(f, "duplicate {kind} name: {name}"),
            Self::DuplicateAlias(alias) => write!(f, "duplicate schema alias: {alias}"),
            Self::NoSchemas => write!(f, "no schemas declared"),
            Self::Declaration(host, err) => {
                write!(f, "while compiling declaration: {host}\n{err}")
            }
            Self::Field(name, err) => write!(f, "while compiling field: {name}\n{err}"),
            Self::Type(name, err) => write!(f, "while compiling type: {name}\n{err}"),
            Self::Operation(name, err) => {
                write!(f, "while compiling operation: {name}\n{err}")
            }
            Self::EntitySet(name, err) => {
                write!(f, "while compiling entity set: {name}\n{err}")
            }
            Self::Singleton(name, err) => write!(f, "while compiling singleton: {name}\n{err}"),
            Self::ActionImport(name, err) => {
                write!(f, "while compiling action import: {name}\n{err}")
            }
            Self::FunctionImport(name, err) => {
                write!(f, "while compiling function import: {name}\n{err}")
            }
            Self::Schema(name, err) => write!(f, "while compiling schema: {name}\n{err}"),
        }
    }
}
