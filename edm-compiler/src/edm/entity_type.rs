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

use crate::edm::Structure;
use serde::Deserialize;

/// Element of an entity key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PropertyRef {
    /// Path to the key property. Segments are separated by `/` when
    /// the key property is located in a complex property.
    pub path: String,
    /// Alias of the key. Required iff the path has more than one
    /// segment.
    #[serde(default)]
    pub alias: Option<String>,
}

/// Entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityType {
    pub(crate) structure: Structure,
    pub(crate) key: Vec<PropertyRef>,
    pub(crate) is_read_only: bool,
    pub(crate) has_stream: bool,
}

impl EntityType {
    #[must_use]
    pub const fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Key properties. Never empty.
    #[must_use]
    pub fn key(&self) -> &[PropertyRef] {
        &self.key
    }

    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.is_read_only
    }

    #[must_use]
    pub const fn has_stream(&self) -> bool {
        self.has_stream
    }
}

/// Complex type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexType {
    pub(crate) structure: Structure,
}

impl ComplexType {
    #[must_use]
    pub const fn structure(&self) -> &Structure {
        &self.structure
    }
}
