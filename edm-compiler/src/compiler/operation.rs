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

//! Action and function builders.

use crate::compiler::error::NameKind;
use crate::compiler::properties::default_nullable;
use crate::compiler::properties::member_name;
use crate::compiler::properties::resolve_type;
use crate::compiler::Classified;
use crate::compiler::Context;
use crate::compiler::Error;
use crate::declaration::markers::ActionMarker;
use crate::declaration::markers::FunctionMarker;
use crate::declaration::markers::ReturnTypeMarker;
use crate::declaration::Declaration;
use crate::declaration::TypeName;
use crate::edm::Action;
use crate::edm::Function;
use crate::edm::IsBound;
use crate::edm::IsComposable;
use crate::edm::IsNullable;
use crate::edm::Operation;
use crate::edm::Parameter;
use crate::edm::Parameters;
use crate::edm::ReturnType;
use crate::edm::TypeRef;

/// Build action.
///
/// # Errors
///
/// Returns error if a parameter or the return type fails to compile.
pub fn build_action<'a>(
    c: &Classified<'a, ActionMarker>,
    ctx: &Context<'a>,
) -> Result<Action, Error<'a>> {
    let marker = c.marker;
    let build = |c: &Classified<'a, ActionMarker>| -> Result<Action, Error<'a>> {
        Ok(Action {
            operation: operation(c, marker.is_bound, &marker.entity_set_path, ctx)?,
            return_type: marker.return_type.as_ref().map(return_type).transpose()?,
        })
    };
    build(c)
        .map_err(Box::new)
        .map_err(|e| Error::Operation(c.qname, e))
}

/// Build function.
///
/// # Errors
///
/// - `MissingReturnType` if function has no return type
/// - any error of parameter compilation
pub fn build_function<'a>(
    c: &Classified<'a, FunctionMarker>,
    ctx: &Context<'a>,
) -> Result<Function, Error<'a>> {
    let marker = c.marker;
    let build = |c: &Classified<'a, FunctionMarker>| -> Result<Function, Error<'a>> {
        let return_type = marker
            .return_type
            .as_ref()
            .ok_or(Error::MissingReturnType)
            .and_then(return_type)?;
        Ok(Function {
            operation: operation(c, marker.is_bound, &marker.entity_set_path, ctx)?,
            is_composable: marker.is_composable.unwrap_or(IsComposable::new(false)),
            return_type,
        })
    };
    build(c)
        .map_err(Box::new)
        .map_err(|e| Error::Operation(c.qname, e))
}

fn operation<'a, M>(
    c: &Classified<'a, M>,
    is_bound: Option<IsBound>,
    entity_set_path: &Option<String>,
    ctx: &Context<'a>,
) -> Result<Operation, Error<'a>> {
    Ok(Operation {
        name: c.qname.name.into(),
        namespace: c.qname.namespace.into(),
        is_bound: is_bound.unwrap_or(IsBound::new(false)),
        entity_set_path: entity_set_path.clone(),
        parameters: parameters(c.decl, ctx)?,
        host: Some(c.decl.host.clone()),
    })
}

fn parameters<'a>(decl: &'a Declaration, ctx: &Context<'a>) -> Result<Parameters, Error<'a>> {
    decl.fields
        .iter()
        .filter(|f| !f.is_static)
        .filter_map(|f| f.parameter.as_ref().map(|m| (f, m)))
        .try_fold(Parameters::new(), |mut parameters, (field, marker)| {
            let compile = || -> Result<Parameter, Error<'a>> {
                let ptype = resolve_type(&marker.ptype, &field.host_type, ctx)?;
                let is_nullable = marker
                    .nullable
                    .map_or_else(|| default_nullable(&field.host_type, &ptype), IsNullable::new);
                Ok(Parameter {
                    name: member_name(&marker.name, &field.name)?,
                    ptype,
                    is_nullable,
                    facets: marker.facets,
                    host_field: Some(field.name.clone()),
                })
            };
            let parameter = compile()
                .map_err(Box::new)
                .map_err(|e| Error::Field(&field.name, e))?;
            ctx.insert_named(
                &mut parameters,
                NameKind::Parameter,
                parameter.name().into(),
                parameter,
            )?;
            Ok(parameters)
        })
}

fn return_type(marker: &ReturnTypeMarker) -> Result<ReturnType, Error<'_>> {
    let rtype = marker
        .rtype
        .parse::<TypeName>()
        .map_err(|_| Error::InvalidTypeName(&marker.rtype))?;
    Ok(ReturnType {
        rtype: TypeRef::from(&rtype),
        is_nullable: IsNullable::new(marker.nullable.unwrap_or(true)),
    })
}
