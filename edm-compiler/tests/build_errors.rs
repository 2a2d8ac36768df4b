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

use nv_odata_edm_compiler::compiler::error::NameKind;
use nv_odata_edm_compiler::compiler::Error;
use nv_odata_edm_compiler::edm::EntityDataModel;
use nv_odata_edm_compiler::manifest::DeclarationManifest;

fn compile(manifest: &str) -> EntityDataModel {
    let (bundle, config) = DeclarationManifest::parse(manifest).unwrap().into_bundle();
    bundle.compile(&config).unwrap()
}

fn compile_error<F: FnOnce(&Error<'_>)>(manifest: &str, check: F) {
    let (bundle, config) = DeclarationManifest::parse(manifest).unwrap().into_bundle();
    let err = bundle.compile(&config).unwrap_err();
    check(&err);
}

#[test]
fn test_missing_key() {
    compile_error(
        r#"
        [[declaration]]
        host = "a::Thing"
        name = "Thing"
        namespace = "A"
        entity = { entity_set = {} }
        "#,
        |err| {
            assert!(matches!(err.root_cause(), Error::MissingKey));
            assert_eq!(err.to_string(), "while compiling type: A.Thing\nentity type has no key");
        },
    );
}

#[test]
fn test_key_with_complex_path() {
    let model = compile(
        r#"
        [[declaration]]
        host = "a::Address"
        name = "Address"
        namespace = "A"
        complex = {}

        [[declaration.field]]
        name = "Zip"
        host_type = "String"
        property = {}

        [[declaration]]
        host = "a::Site"
        name = "Site"
        namespace = "A"
        entity = { key = ["Code"], key_ref = [{ path = "Address/Zip", alias = "Zip" }] }

        [[declaration.field]]
        name = "Code"
        host_type = "String"
        property = {}

        [[declaration.field]]
        name = "Address"
        host_type = "a::Address"
        property = {}
        "#,
    );
    let site = model.find_entity_type("A.Site").unwrap();
    let key = site
        .key()
        .iter()
        .map(|k| (k.path.as_str(), k.alias.as_deref()))
        .collect::<Vec<_>>();
    assert_eq!(key, [("Code", None), ("Address/Zip", Some("Zip"))]);
}

#[test]
fn test_explicit_collection_type() {
    let model = compile(
        r#"
        [[declaration]]
        host = "a::Doc"
        name = "Doc"
        namespace = "A"
        complex = {}

        [[declaration.field]]
        name = "Lines"
        host_type = "a::Lines"
        property = { type = "Collection(Edm.String)" }
        "#,
    );
    let doc = model.find_complex_type("A.Doc").unwrap();
    let lines = doc.structure().properties().get("Lines").unwrap();
    assert!(lines.ptype().is_collection());
    assert_eq!(lines.ptype().element(), "Edm.String");
    assert_eq!(lines.type_name(), "Collection(Edm.String)");
}

#[test]
fn test_plain_property_of_entity_type() {
    compile_error(
        r#"
        [[declaration]]
        host = "a::Customer"
        name = "Customer"
        namespace = "A"
        entity = { key = ["Id"] }

        [[declaration]]
        host = "a::Details"
        name = "Details"
        namespace = "A"
        complex = {}

        [[declaration.field]]
        name = "Buyer"
        host_type = "a::Customer"
        property = {}

        [[declaration]]
        host = "a::Order"
        name = "Order"
        namespace = "A"
        entity = { key = ["Id"], entity_set = {} }

        [[declaration.field]]
        name = "Details"
        host_type = "a::Details"
        property = {}
        "#,
        |err| {
            assert!(matches!(err, Error::Schema(namespace, _) if namespace == "A"));
            assert!(matches!(
                err.root_cause(),
                Error::InvalidPropertyReference { property, enclosing_type, target }
                    if property == "Buyer" && enclosing_type == "A.Details" && target == "A.Customer"
            ));
        },
    );
}

#[test]
fn test_plain_property_of_entity_type_without_sets() {
    compile_error(
        r#"
        [[declaration]]
        host = "a::Customer"
        name = "Customer"
        namespace = "A"
        entity = { key = ["Id"] }

        [[declaration]]
        host = "a::Address"
        name = "Address"
        namespace = "A"
        complex = {}

        [[declaration.field]]
        name = "Owner"
        host_type = "a::Customer"
        property = {}

        [[declaration]]
        host = "a::Order"
        name = "Order"
        namespace = "A"
        entity = { key = ["Id"] }

        [[declaration.field]]
        name = "Buyer"
        host_type = "Option<a::Customer>"
        property = {}
        "#,
        |err| {
            assert!(matches!(
                err.root_cause(),
                Error::InvalidPropertyReference { property, enclosing_type, .. }
                    if property == "Owner" && enclosing_type == "A.Address"
            ));
        },
    );
}

#[test]
fn test_entity_set_name_defaults() {
    let model = compile(
        r#"
        [[declaration]]
        host = "shop::Product"
        name = "Product"
        namespace = "Shop"
        entity = { key = ["Id"], entity_set = {}, singleton = {} }

        [[declaration]]
        host = "shop::Stock"
        name = "Stock"
        namespace = "Shop"
        entity = { key = ["Id"], entity_set = { value = "Inventory", include_in_service_document = false } }
        "#,
    );
    assert_eq!(model.entity_set("Products").unwrap().entity_type(), "Shop.Product");
    assert_eq!(model.singleton("Product").unwrap().entity_type(), "Shop.Product");
    let inventory = model.entity_set("Inventory").unwrap();
    assert!(!inventory.include_in_service_document());
    assert_eq!(model.container().name(), "Shop");
}

const DISCOUNT: &str = r#"
    [[declaration]]
    host = "shop::Discount"
    name = "Discount"
    namespace = "Shop"
    function = { is_bound = IS_BOUND, return_type = { type = "Edm.Decimal" } }

    [[declaration.field]]
    name = "percent"
    host_type = "f32"
    parameter = {}

    [[declaration]]
    host = "shop::DiscountImport"
    name = "DiscountImport"
    namespace = "Shop"
    function_import = { function = "Discount", entity_set = "Nowhere" }
"#;

#[test]
fn test_unbound_import_without_entity_set() {
    let model = compile(&DISCOUNT.replace("IS_BOUND", "false"));
    let import = model.function_import("DiscountImport").unwrap();
    assert!(import.entity_set().is_none());
    let parameter = import.operation().operation().parameters().get("percent").unwrap();
    assert_eq!(parameter.ptype().type_name(), "Edm.Single");
    assert!(!*parameter.is_nullable().inner());
}

#[test]
fn test_bound_import_without_entity_set() {
    compile_error(&DISCOUNT.replace("IS_BOUND", "true"), |err| {
        assert!(matches!(
            err.root_cause(),
            Error::MissingEntitySet(operation) if operation == "Shop.Discount"
        ));
        assert!(err
            .to_string()
            .starts_with("while compiling function import: Shop.DiscountImport\n"));
    });
}

#[test]
fn test_unresolved_import() {
    compile_error(
        r#"
        [[declaration]]
        host = "shop::Import"
        name = "Import"
        namespace = "Shop"
        action_import = { action = "Missing" }

        [[declaration]]
        host = "shop::Product"
        name = "Product"
        namespace = "Shop"
        complex = {}
        "#,
        |err| {
            assert!(matches!(
                err.root_cause(),
                Error::UnresolvedReference { reference, namespace: "Shop" } if reference == "Shop.Missing"
            ));
        },
    );
}

#[test]
fn test_missing_return_type() {
    compile_error(
        r#"
        [[declaration]]
        host = "shop::Count"
        name = "Count"
        namespace = "Shop"
        function = {}
        "#,
        |err| {
            assert!(matches!(err, Error::Operation(..)));
            assert!(matches!(err.root_cause(), Error::MissingReturnType));
        },
    );
}

#[test]
fn test_unresolvable_type() {
    compile_error(
        r#"
        [[declaration]]
        host = "shop::Product"
        name = "Product"
        namespace = "Shop"
        complex = {}

        [[declaration.field]]
        name = "Owner"
        host_type = "Option<shop::Undeclared>"
        property = {}
        "#,
        |err| {
            assert!(matches!(err.root_cause(), Error::UnresolvableType(_)));
            assert_eq!(
                err.to_string(),
                "while compiling type: Shop.Product\n\
                 while compiling field: Owner\n\
                 cannot resolve type of host type Option<shop::Undeclared>"
            );
        },
    );
}

#[test]
fn test_navigation_target_not_structured() {
    compile_error(
        r#"
        [[declaration]]
        host = "shop::Product"
        name = "Product"
        namespace = "Shop"
        entity = { key = ["Id"] }

        [[declaration.field]]
        name = "Label"
        host_type = "String"
        navigation_property = { type = "Edm.String" }
        "#,
        |err| {
            assert!(matches!(err, Error::Schema(namespace, _) if namespace == "Shop"));
            assert!(matches!(
                err.root_cause(),
                Error::NavigationTargetNotStructured { target, .. } if target == "Edm.String"
            ));
        },
    );
}

const DUPLICATES: &str = r#"
    [config]
    strict_names = STRICT

    [[declaration]]
    host = "shop::v1::Product"
    name = "Product"
    namespace = "Shop"
    complex = {}

    [[declaration.field]]
    name = "Name"
    host_type = "String"
    property = {}

    [[declaration]]
    host = "shop::v2::Product"
    name = "Product"
    namespace = "Shop"
    complex = {}

    [[declaration.field]]
    name = "Title"
    host_type = "String"
    property = {}
"#;

#[test]
fn test_duplicate_type_replaces() {
    let model = compile(&DUPLICATES.replace("STRICT", "false"));
    let product = model.find_complex_type("Shop.Product").unwrap();
    assert!(product.structure().properties().get("Title").is_some());
    assert!(product.structure().properties().get("Name").is_none());
}

#[test]
fn test_duplicate_type_in_strict_mode() {
    compile_error(&DUPLICATES.replace("STRICT", "true"), |err| {
        assert!(matches!(
            err.root_cause(),
            Error::DuplicateName { kind: NameKind::Type, name } if name == "Product"
        ));
    });
}

#[test]
fn test_duplicate_alias() {
    compile_error(
        r#"
        [config]
        aliases = { "Shop.V1" = "Shop", "Shop.V2" = "Shop" }

        [[declaration]]
        host = "shop::v1::Product"
        name = "Product"
        namespace = "Shop.V1"
        complex = {}

        [[declaration]]
        host = "shop::v2::Product"
        name = "Product"
        namespace = "Shop.V2"
        complex = {}
        "#,
        |err| {
            assert!(matches!(err.root_cause(), Error::DuplicateAlias(alias) if alias == "Shop"));
        },
    );
}

#[test]
fn test_base_types_and_config() {
    let model = compile(
        r#"
        [config]
        base_container = "Shop.Base"

        [[declaration]]
        host = "shop::Resource"
        name = "Resource"
        namespace = "Shop"
        entity = { key = ["Id"], abstract = true }

        [[declaration]]
        host = "shop::Product"
        name = "Product"
        namespace = "Shop"
        parent = "shop::Resource"
        entity = { key = ["Id"], open_type = true, container_name = "Catalog" }

        [[declaration]]
        host = "shop::Address"
        name = "Address"
        namespace = "Shop"
        parent = "shop::Resource"
        complex = {}
        "#,
    );
    let product = model.find_structured_type("Shop.Product").unwrap();
    assert_eq!(product.structure().base_type(), Some("Shop.Resource"));
    assert!(product.structure().is_open());
    let base = model.base_type_of(product).unwrap();
    assert!(base.structure().is_abstract());
    assert_eq!(base.structure().qualified_name(), "Shop.Resource");

    let address = model.find_structured_type("Shop.Address").unwrap();
    assert_eq!(address.structure().base_type(), None);

    assert_eq!(model.container().name(), "Catalog");
    assert_eq!(model.container().base_container(), Some("Shop.Base"));
}

#[test]
fn test_schemas_in_declaration_order() {
    let model = compile(
        r#"
        [[declaration]]
        host = "b::Item"
        name = "Item"
        namespace = "B"
        complex = {}

        [[declaration]]
        host = "a::Item"
        name = "Item"
        namespace = "A"
        complex = {}
        "#,
    );
    let namespaces = model
        .schemas()
        .iter()
        .map(|s| s.namespace())
        .collect::<Vec<_>>();
    assert_eq!(namespaces, ["B", "A"]);
    assert_eq!(model.container().namespace(), "B");
    assert_eq!(model.container().name(), "B");
}
