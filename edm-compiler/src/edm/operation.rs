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

//! Actions and functions.

use crate::declaration::HostTypeId;
use crate::edm::Facets;
use crate::edm::IsBound;
use crate::edm::IsComposable;
use crate::edm::IsNullable;
use crate::edm::NamedMap;
use crate::edm::TypeRef;

/// Parameter of an action or function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub(crate) name: String,
    pub(crate) ptype: TypeRef,
    pub(crate) is_nullable: IsNullable,
    pub(crate) facets: Facets,
    pub(crate) host_field: Option<String>,
}

impl Parameter {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn ptype(&self) -> &TypeRef {
        &self.ptype
    }

    #[must_use]
    pub const fn is_nullable(&self) -> IsNullable {
        self.is_nullable
    }

    #[must_use]
    pub const fn facets(&self) -> &Facets {
        &self.facets
    }

    #[must_use]
    pub fn host_field(&self) -> Option<&str> {
        self.host_field.as_deref()
    }
}

/// Return type of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnType {
    pub(crate) rtype: TypeRef,
    pub(crate) is_nullable: IsNullable,
}

impl ReturnType {
    #[must_use]
    pub const fn rtype(&self) -> &TypeRef {
        &self.rtype
    }

    #[must_use]
    pub const fn is_nullable(&self) -> IsNullable {
        self.is_nullable
    }
}

/// Parameters are a set: names are unique and equality ignores order.
/// Iteration follows declaration order.
pub type Parameters = NamedMap<Parameter>;

/// Data shared by actions and functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub(crate) name: String,
    pub(crate) namespace: String,
    pub(crate) is_bound: IsBound,
    pub(crate) entity_set_path: Option<String>,
    pub(crate) parameters: Parameters,
    pub(crate) host: Option<HostTypeId>,
}

impl Operation {
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
    pub const fn is_bound(&self) -> IsBound {
        self.is_bound
    }

    #[must_use]
    pub fn entity_set_path(&self) -> Option<&str> {
        self.entity_set_path.as_deref()
    }

    #[must_use]
    pub const fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    #[must_use]
    pub const fn host(&self) -> Option<&HostTypeId> {
        self.host.as_ref()
    }
}

/// Action: operation that may have side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub(crate) operation: Operation,
    pub(crate) return_type: Option<ReturnType>,
}

impl Action {
    #[must_use]
    pub const fn operation(&self) -> &Operation {
        &self.operation
    }

    #[must_use]
    pub const fn return_type(&self) -> Option<&ReturnType> {
        self.return_type.as_ref()
    }
}

/// Function: side-effect free operation that always returns a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub(crate) operation: Operation,
    pub(crate) is_composable: IsComposable,
    pub(crate) return_type: ReturnType,
}

impl Function {
    #[must_use]
    pub const fn operation(&self) -> &Operation {
        &self.operation
    }

    #[must_use]
    pub const fn is_composable(&self) -> IsComposable {
        self.is_composable
    }

    #[must_use]
    pub const fn return_type(&self) -> &ReturnType {
        &self.return_type
    }
}
