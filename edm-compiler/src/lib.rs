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

//! Entity data model construction and resolution for OData services.
//!
//! The crate turns host-neutral [`declaration::Declaration`] values
//! into a frozen [`edm::EntityDataModel`]. Compilation either yields a
//! complete model or an error; the resulting model is immutable and can
//! be shared between threads without locking.

/// Host-neutral declarations consumed by the compiler
pub mod declaration;

/// Frozen entity data model
pub mod edm;

/// Declarations compiler
pub mod compiler;

/// TOML declaration manifests
pub mod manifest;

/// Command-line commands
pub mod commands;

/// Command-line errors
pub mod error;

pub use error::Error;
