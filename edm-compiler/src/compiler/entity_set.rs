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

//! Entity set and singleton factories.
//!
//! Factories work in two steps. First, names of all entity sets and
//! singletons are collected so that navigation bindings can refer to
//! any of them. Then every exposure is completed with its bindings.

use crate::compiler::context::insert_named;
use crate::compiler::error::NameKind;
use crate::compiler::navigation;
use crate::compiler::Classified;
use crate::compiler::Error;
use crate::compiler::Lookup;
use crate::compiler::QualifiedName;
use crate::declaration::markers::EntityMarker;
use crate::declaration::HostTypeId;
use crate::declaration::SimpleIdentifier;
use crate::edm::EntitySet;
use crate::edm::NamedMap;
use crate::edm::NavigationPropertyBinding;
use crate::edm::Singleton;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Navigation property bindings by entity set or singleton name.
pub type Bindings = HashMap<String, Vec<NavigationPropertyBinding>>;

/// Entity set or singleton waiting for navigation bindings.
#[derive(Debug)]
pub struct Exposure<'a> {
    pub name: String,
    pub entity_type: QualifiedName<'a>,
    pub include_in_service_document: bool,
    pub host: &'a HostTypeId,
}

/// Container member created from an exposure.
pub trait FromExposure {
    /// Kind of name for duplicate reporting.
    const KIND: NameKind;

    /// Exposure of the entity type, if requested by the marker.
    fn exposure<'a>(c: &Classified<'a, EntityMarker>) -> Option<Result<Exposure<'a>, Error<'a>>>;

    fn from_exposure(e: &Exposure<'_>, bindings: Vec<NavigationPropertyBinding>) -> Self;

    /// Attach exposure name to an error.
    fn context(name: String, err: Box<Error<'_>>) -> Error<'_>;
}

impl FromExposure for EntitySet {
    const KIND: NameKind = NameKind::EntitySet;

    fn exposure<'a>(c: &Classified<'a, EntityMarker>) -> Option<Result<Exposure<'a>, Error<'a>>> {
        c.marker.entity_set.as_ref().map(|m| -> Result<Exposure<'a>, Error<'a>> {
            let name = exposure_name(&m.name, &m.value, || format!("{}s", c.qname.name))?;
            Ok(Exposure {
                name,
                entity_type: c.qname,
                include_in_service_document: m.include_in_service_document,
                host: &c.decl.host,
            })
        })
    }

    fn from_exposure(e: &Exposure<'_>, bindings: Vec<NavigationPropertyBinding>) -> Self {
        Self {
            name: e.name.clone(),
            entity_type: e.entity_type.to_string(),
            include_in_service_document: e.include_in_service_document,
            bindings,
            host: e.host.clone(),
        }
    }

    fn context(name: String, err: Box<Error<'_>>) -> Error<'_> {
        Error::EntitySet(name, err)
    }
}

impl FromExposure for Singleton {
    const KIND: NameKind = NameKind::Singleton;

    fn exposure<'a>(c: &Classified<'a, EntityMarker>) -> Option<Result<Exposure<'a>, Error<'a>>> {
        c.marker.singleton.as_ref().map(|m| -> Result<Exposure<'a>, Error<'a>> {
            let name = exposure_name(&m.name, &m.value, || c.qname.name.to_string())?;
            Ok(Exposure {
                name,
                entity_type: c.qname,
                include_in_service_document: true,
                host: &c.decl.host,
            })
        })
    }

    fn from_exposure(e: &Exposure<'_>, bindings: Vec<NavigationPropertyBinding>) -> Self {
        Self {
            name: e.name.clone(),
            entity_type: e.entity_type.to_string(),
            bindings,
            host: e.host.clone(),
        }
    }

    fn context(name: String, err: Box<Error<'_>>) -> Error<'_> {
        Error::Singleton(name, err)
    }
}

fn exposure_name<'a, F>(name: &str, value: &str, default: F) -> Result<String, Error<'a>>
where
    F: FnOnce() -> String,
{
    let name = [name, value]
        .into_iter()
        .find(|v| !v.is_empty())
        .map_or_else(default, String::from);
    name.parse::<SimpleIdentifier>()
        .map(SimpleIdentifier::into_inner)
        .map_err(|_| Error::InvalidName(name))
}

/// Factory of entity sets or singletons.
#[derive(Debug)]
pub struct Factory<'a, T> {
    pending: NamedMap<Exposure<'a>>,
    built: NamedMap<Arc<T>>,
}

pub type EntitySetFactory<'a> = Factory<'a, EntitySet>;
pub type SingletonFactory<'a> = Factory<'a, Singleton>;

impl<'a, T: FromExposure> Factory<'a, T> {
    /// Collect exposures of entity types in declaration order.
    ///
    /// # Errors
    ///
    /// - `InvalidName` if the exposure name is not an identifier
    /// - `DuplicateName` in strict mode
    pub fn collect(
        entities: &[Classified<'a, EntityMarker>],
        strict_names: bool,
    ) -> Result<Self, Error<'a>> {
        let pending = entities
            .iter()
            .filter_map(|c| {
                T::exposure(c).map(|e| e.map_err(Box::new).map_err(|e| Error::Type(c.qname, e)))
            })
            .try_fold(NamedMap::new(), |mut pending, e| -> Result<_, Error<'a>> {
                let e = e?;
                insert_named(&mut pending, T::KIND, e.name.clone(), e, strict_names)?;
                Ok(pending)
            })?;
        Ok(Self {
            pending,
            built: NamedMap::new(),
        })
    }

    /// Name of the first exposure of the entity type.
    #[must_use]
    pub fn find_by_type(&self, entity_type: &str) -> Option<&str> {
        self.pending
            .values()
            .find(|e| e.entity_type.to_string() == entity_type)
            .map(|e| e.name.as_str())
    }

    /// Navigation property bindings of every exposure by exposure
    /// name.
    ///
    /// # Errors
    ///
    /// Returns error of the first exposure whose bindings cannot be
    /// computed.
    pub fn bindings(&self, lookup: &Lookup<'_, 'a>) -> Result<Bindings, Error<'a>> {
        self.pending
            .iter()
            .map(|(name, e)| {
                navigation::bindings(&e.entity_type.to_string(), lookup)
                    .map(|bindings| (name.to_string(), bindings))
                    .map_err(Box::new)
                    .map_err(|err| T::context(name.into(), err))
            })
            .collect()
    }

    /// Build all exposures.
    pub fn complete(&mut self, mut bindings: Bindings) {
        self.built = self
            .pending
            .iter()
            .map(|(name, e)| {
                let bindings = bindings.remove(name).unwrap_or_default();
                (name.to_string(), Arc::new(T::from_exposure(e, bindings)))
            })
            .collect();
        let kind = T::KIND;
        debug!(%kind, count = self.built.len(), "container members completed");
    }

    /// Built member by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<T>> {
        self.built.get(name)
    }

    #[must_use]
    pub fn into_built(self) -> NamedMap<Arc<T>> {
        self.built
    }
}
