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

use crate::edm::Action;
use crate::edm::Function;
use crate::edm::NamedMap;
use crate::edm::Type;
use std::sync::Arc;

/// Frozen schema: everything declared in one namespace.
///
/// Members are keyed by simple name. Overloads are not modeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub(crate) namespace: String,
    pub(crate) alias: Option<String>,
    pub(crate) types: NamedMap<Type>,
    pub(crate) functions: NamedMap<Arc<Function>>,
    pub(crate) actions: NamedMap<Arc<Action>>,
}

impl Schema {
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    #[must_use]
    pub const fn types(&self) -> &NamedMap<Type> {
        &self.types
    }

    #[must_use]
    pub const fn functions(&self) -> &NamedMap<Arc<Function>> {
        &self.functions
    }

    #[must_use]
    pub const fn actions(&self) -> &NamedMap<Arc<Action>> {
        &self.actions
    }
}
