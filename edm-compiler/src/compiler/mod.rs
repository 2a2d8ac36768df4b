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

//! Compiler of declarations into an entity data model.
//!
//! Compilation is done in two passes. The collect pass classifies
//! declarations and builds all types and operations into per-namespace
//! accumulators. The resolve pass computes navigation bindings,
//! resolves operation imports and freezes the model. Either a complete
//! model is returned or an error: nothing partially built is exposed.

/// Error diagnostics
pub mod error;

/// Qualified name
pub mod qualified_name;

/// Compilation configuration and context
pub mod context;

/// Declaration classification
pub mod classifier;

/// Index of declared host types
pub mod host_index;

/// Structural properties of entity and complex types
pub mod properties;

/// Entity and complex type builders
pub mod structured_type;

/// Enumeration and type definition builders
pub mod enum_type;

/// Action and function builders
pub mod operation;

/// Schema accumulators
pub mod schema_builder;

/// Entity set and singleton factories
pub mod entity_set;

/// Lookup of a build in progress
pub mod lookup;

/// Navigation property bindings
pub mod navigation;

/// Operation import factories
pub mod imports;

/// Final assembly
pub mod assembler;

use crate::declaration::Declaration;
use crate::declaration::TypeDefinitionDeclaration;
use crate::edm::EntityDataModel;
use crate::edm::Type;
use assembler::ContainerMembers;
use std::sync::Arc;
use tracing::debug;

/// Reexport `Error` to the level of the compiler.
pub type Error<'a> = error::Error<'a>;
/// Reexport `QualifiedName` to the level of the compiler.
pub type QualifiedName<'a> = qualified_name::QualifiedName<'a>;
/// Reexport `Config` to the level of the compiler.
pub type Config = context::Config;
/// Reexport `Context` to the level of the compiler.
pub type Context<'a> = context::Context<'a>;
/// Reexport `Classified` to the level of the compiler.
pub type Classified<'a, M> = classifier::Classified<'a, M>;
/// Reexport `Worklists` to the level of the compiler.
pub type Worklists<'a> = classifier::Worklists<'a>;
/// Reexport `HostIndex` to the level of the compiler.
pub type HostIndex<'a> = host_index::HostIndex<'a>;
/// Reexport `HostKind` to the level of the compiler.
pub type HostKind = host_index::HostKind;
/// Reexport `SchemaSet` to the level of the compiler.
pub type SchemaSet = schema_builder::SchemaSet;
/// Reexport `SchemaBuilder` to the level of the compiler.
pub type SchemaBuilder = schema_builder::SchemaBuilder;
/// Reexport `EntitySetFactory` to the level of the compiler.
pub type EntitySetFactory<'a> = entity_set::EntitySetFactory<'a>;
/// Reexport `SingletonFactory` to the level of the compiler.
pub type SingletonFactory<'a> = entity_set::SingletonFactory<'a>;
/// Reexport `Lookup` to the level of the compiler.
pub type Lookup<'s, 'a> = lookup::Lookup<'s, 'a>;

/// Declarations that are compiled together into one model.
#[derive(Debug, Default, Clone)]
pub struct DeclarationBundle {
    /// Role declarations in discovery order.
    pub declarations: Vec<Declaration>,
    /// Type definitions.
    pub type_definitions: Vec<TypeDefinitionDeclaration>,
}

impl DeclarationBundle {
    /// Compile all declarations into an entity data model.
    ///
    /// # Errors
    ///
    /// Returns compile error if any declaration is invalid or any
    /// reference cannot be resolved.
    pub fn compile(&self, config: &Config) -> Result<EntityDataModel, Error<'_>> {
        let worklists = Worklists::classify(&self.declarations)?;
        debug!(
            entities = worklists.entities.len(),
            complexes = worklists.complexes.len(),
            enums = worklists.enums.len(),
            actions = worklists.actions.len(),
            functions = worklists.functions.len(),
            action_imports = worklists.action_imports.len(),
            function_imports = worklists.function_imports.len(),
            "declarations classified"
        );
        let ctx = Context {
            hosts: HostIndex::build(&worklists, &self.type_definitions),
            strict_names: config.strict_names,
        };

        let mut schemas = Self::collect(&worklists, &self.type_definitions, &ctx)?;
        schemas.apply_aliases(&config.aliases);
        debug!(schemas = schemas.len(), "schemas collected");

        let mut sets = EntitySetFactory::collect(&worklists.entities, ctx.strict_names)?;
        let mut singletons = SingletonFactory::collect(&worklists.entities, ctx.strict_names)?;
        let (set_bindings, singleton_bindings) = {
            let lookup = Lookup::new(&schemas, &sets, &singletons);
            assembler::validate(&schemas, &lookup)?;
            (sets.bindings(&lookup)?, singletons.bindings(&lookup)?)
        };
        sets.complete(set_bindings);
        singletons.complete(singleton_bindings);

        let lookup = Lookup::new(&schemas, &sets, &singletons);
        let action_imports =
            imports::action_imports(&worklists.action_imports, &lookup, ctx.strict_names)?;
        let function_imports =
            imports::function_imports(&worklists.function_imports, &lookup, ctx.strict_names)?;
        debug!(
            action_imports = action_imports.len(),
            function_imports = function_imports.len(),
            "imports resolved"
        );

        let members = ContainerMembers {
            entity_sets: sets.into_built(),
            singletons: singletons.into_built(),
            action_imports,
            function_imports,
        };
        assembler::assemble(
            schemas,
            members,
            &worklists.entities,
            config.base_container.clone(),
        )
    }

    fn collect<'a>(
        worklists: &Worklists<'a>,
        type_definitions: &'a [TypeDefinitionDeclaration],
        ctx: &Context<'a>,
    ) -> Result<SchemaSet, Error<'a>> {
        let mut schemas = SchemaSet::new(ctx.strict_names);
        for c in &worklists.entities {
            let t = structured_type::build_entity(c, ctx)?;
            schemas.insert_type(Type::Entity(Arc::new(t)))?;
        }
        for c in &worklists.complexes {
            let t = structured_type::build_complex(c, ctx)?;
            schemas.insert_type(Type::Complex(Arc::new(t)))?;
        }
        for c in &worklists.enums {
            let t = enum_type::build_enum(c, ctx)?;
            schemas.insert_type(Type::Enum(Arc::new(t)))?;
        }
        for td in type_definitions {
            let t = enum_type::build_type_definition(td)?;
            schemas.insert_type(Type::TypeDefinition(Arc::new(t)))?;
        }
        for c in &worklists.actions {
            schemas.insert_action(operation::build_action(c, ctx)?)?;
        }
        for c in &worklists.functions {
            schemas.insert_function(operation::build_function(c, ctx)?)?;
        }
        Ok(schemas)
    }
}
