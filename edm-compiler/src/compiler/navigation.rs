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

//! Navigation property bindings.
//!
//! Bindings of an entity type are found by depth-first walk over its
//! declared properties:
//! - navigation property binds `prefix + name` to the entity set or
//!   singleton of its target type (if there is one);
//! - property of complex type continues the walk with prefix
//!   `prefix + name + "/"`;
//! - property of entity type is an error: entities must be referenced
//!   by navigation properties.
//!
//! Only properties declared by the type itself are walked.

use crate::compiler::Error;
use crate::compiler::Lookup;
use crate::edm::NavigationPropertyBinding;
use crate::edm::StructuralProperty;
use crate::edm::StructuredType;
use tracing::debug;

/// Compute navigation property bindings of a structured type.
///
/// # Errors
///
/// `CyclicComplexType` if a complex type contains itself.
pub fn bindings<'a>(
    qname: &str,
    lookup: &Lookup<'_, 'a>,
) -> Result<Vec<NavigationPropertyBinding>, Error<'a>> {
    let mut walk = Walk {
        lookup,
        chain: Vec::new(),
        bindings: Vec::new(),
    };
    if let Some(st) = lookup.structured_type(qname) {
        walk.visit(st, "")?;
    }
    Ok(walk.bindings)
}

struct Walk<'l, 's, 'a> {
    lookup: &'l Lookup<'s, 'a>,
    /// Complex types being expanded.
    chain: Vec<String>,
    bindings: Vec<NavigationPropertyBinding>,
}

impl<'a> Walk<'_, '_, 'a> {
    fn visit(&mut self, st: StructuredType<'_>, prefix: &str) -> Result<(), Error<'a>> {
        let structure = st.structure();
        for p in structure.properties().values() {
            let path = format!("{prefix}{}", p.name());
            match p {
                StructuralProperty::NavigationProperty(np) => {
                    let element = np.ptype().element();
                    if let Some(target) = self.lookup.bound_target(element) {
                        self.bindings.push(NavigationPropertyBinding { path, target });
                    } else {
                        debug!(%path, target = element, "no entity set or singleton for navigation target");
                    }
                }
                StructuralProperty::Property(prop) => {
                    // Plain properties of entity type are rejected by validation.
                    if let Some(nested @ StructuredType::Complex(ct)) =
                        self.lookup.structured_type(prop.ptype().element())
                    {
                        let qname = ct.structure().qualified_name();
                        let cyclic = self.chain.contains(&qname);
                        self.chain.push(qname);
                        if cyclic {
                            return Err(Error::CyclicComplexType(self.chain.clone()));
                        }
                        self.visit(nested, &format!("{path}/"))?;
                        self.chain.pop();
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compiler::DeclarationBundle;
    use crate::compiler::Config;
    use crate::declaration::Declaration;

    fn bundle(json: &str) -> DeclarationBundle {
        DeclarationBundle {
            declarations: serde_json::from_str::<Vec<Declaration>>(json).unwrap(),
            type_definitions: vec![],
        }
    }

    #[test]
    fn test_nested_bindings() {
        let bundle = bundle(
            r#"[
              { "host": "demo::Address", "name": "Address", "namespace": "Demo", "complex": {},
                "field": [{ "name": "Region", "host_type": "demo::Region",
                            "navigation_property": {} }] },
              { "host": "demo::Region", "name": "Region", "namespace": "Demo",
                "entity": { "key": ["Code"], "entity_set": {} } },
              { "host": "demo::Customer", "name": "Customer", "namespace": "Demo",
                "entity": { "key": ["Id"], "entity_set": {} },
                "field": [
                  { "name": "Home", "host_type": "demo::Address", "property": {} },
                  { "name": "Orders", "host_type": "Vec<demo::Order>",
                    "navigation_property": {} }
                ] },
              { "host": "demo::Order", "name": "Order", "namespace": "Demo",
                "entity": { "key": ["Id"] } }
            ]"#,
        );
        let model = bundle.compile(&Config::default()).unwrap();
        let customers = model.entity_set("Customers").unwrap();
        let bindings = customers
            .bindings()
            .iter()
            .map(|b| (b.path(), b.target()))
            .collect::<Vec<_>>();
        assert_eq!(bindings, [("Home/Region", "Regions")]);
    }

    #[test]
    fn test_cyclic_complex_type() {
        let bundle = bundle(
            r#"[
              { "host": "demo::A", "name": "A", "namespace": "Demo", "complex": {},
                "field": [{ "name": "b", "host_type": "Option<demo::B>", "property": {} }] },
              { "host": "demo::B", "name": "B", "namespace": "Demo", "complex": {},
                "field": [{ "name": "a", "host_type": "Option<demo::A>", "property": {} }] },
              { "host": "demo::E", "name": "E", "namespace": "Demo",
                "entity": { "key": ["Id"], "singleton": {} },
                "field": [{ "name": "a", "host_type": "demo::A", "property": {} }] }
            ]"#,
        );
        let err = bundle.compile(&Config::default()).unwrap_err();
        assert!(matches!(
            err.root_cause(),
            Error::CyclicComplexType(chain) if chain == &["Demo.A", "Demo.B", "Demo.A"]
        ));
    }
}
