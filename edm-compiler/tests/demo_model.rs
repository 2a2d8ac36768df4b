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

use nv_odata_edm_compiler::declaration::HostTypeId;
use nv_odata_edm_compiler::edm::EntityDataModel;
use nv_odata_edm_compiler::edm::EnumUnderlyingType;
use nv_odata_edm_compiler::edm::MaxLength;
use nv_odata_edm_compiler::edm::PrimitiveType;
use nv_odata_edm_compiler::edm::Scale;
use nv_odata_edm_compiler::edm::StructuralProperty;
use nv_odata_edm_compiler::edm::Type;
use nv_odata_edm_compiler::manifest::DeclarationManifest;
use std::path::Path;
use std::sync::Arc;

fn demo_model() -> EntityDataModel {
    let fname = Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data/demo.toml");
    let (bundle, config) = DeclarationManifest::read(&fname).unwrap().into_bundle();
    bundle.compile(&config).unwrap()
}

#[test]
fn test_qualified_names() {
    let model = demo_model();
    let schema = model.schema("Com.Example.Demo").unwrap();
    assert_eq!(schema.alias(), Some("Demo"));
    assert_eq!(
        schema.types().keys().collect::<Vec<_>>(),
        ["Product", "Category", "Supplier", "Dimensions", "Color", "Permissions", "Sku"]
    );
    for t in schema.types().values() {
        assert_eq!(
            format!("{}.{}", t.namespace(), t.name()),
            t.qualified_name()
        );
    }
    assert!(model.find_type("Com.Example.Demo.Product").is_some());
    assert!(model.find_type("Demo.Product").is_some());
    assert!(model.find_type("Demo.Missing").is_none());
    assert_eq!(model.builtins().len(), 36);
    assert!(model.find_type("Edm.Geography").is_some());
    assert!(matches!(
        model.find_type("Edm.Int32"),
        Some(Type::Primitive(PrimitiveType::Int32))
    ));
}

#[test]
fn test_entity_types() {
    let model = demo_model();
    let product = model.find_entity_type("Demo.Product").unwrap();
    assert_eq!(product.key().len(), 1);
    assert_eq!(product.key()[0].path, "Id");
    let properties = product.structure().properties();
    assert_eq!(
        properties.keys().collect::<Vec<_>>(),
        ["Id", "Name", "Tags", "Price", "Color", "Sku", "Dimensions", "Category"]
    );

    let StructuralProperty::Property(id) = properties.get("Id").unwrap() else {
        panic!("Id must be a property");
    };
    assert_eq!(id.ptype().type_name(), "Edm.Int32");
    assert!(!*id.is_nullable().inner());

    let StructuralProperty::Property(name) = properties.get("Name").unwrap() else {
        panic!("Name must be a property");
    };
    assert!(*name.is_nullable().inner());
    assert_eq!(name.facets().max_length, Some(MaxLength::Length(80)));
    assert_eq!(name.facets().unicode, Some(false));

    let tags = properties.get("Tags").unwrap();
    assert_eq!(tags.type_name(), "Collection(Edm.String)");
    assert!(tags.ptype().is_collection());

    let StructuralProperty::Property(price) = properties.get("Price").unwrap() else {
        panic!("Price must be a property");
    };
    assert_eq!(price.ptype().type_name(), "Edm.Decimal");
    assert!(!*price.is_nullable().inner());
    assert_eq!(price.facets().precision, Some(10));
    assert_eq!(price.facets().scale, Some(Scale::Value(2)));

    assert_eq!(properties.get("Color").unwrap().type_name(), "Com.Example.Demo.Color");
    assert!(*properties.get("Color").unwrap().is_nullable().inner());
    assert_eq!(properties.get("Sku").unwrap().type_name(), "Com.Example.Demo.Sku");

    let StructuralProperty::NavigationProperty(category) = properties.get("Category").unwrap()
    else {
        panic!("Category must be a navigation property");
    };
    assert_eq!(category.ptype().type_name(), "Com.Example.Demo.Category");
    assert_eq!(category.partner(), Some("Products"));
}

#[test]
fn test_enum_types() {
    let model = demo_model();
    let color = model.find_enum_type("Demo.Color").unwrap();
    assert!(!color.is_flags());
    assert_eq!(color.underlying_type(), EnumUnderlyingType::Int32);
    assert_eq!(
        color.members().iter().map(|(k, v)| (k.as_str(), *v)).collect::<Vec<_>>(),
        [("Red", 0), ("Green", 1), ("Blue", 2)]
    );
    let permissions = model.find_enum_type("Demo.Permissions").unwrap();
    assert!(permissions.is_flags());
    assert_eq!(permissions.underlying_type(), EnumUnderlyingType::Byte);
    assert_eq!(
        permissions
            .members()
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect::<Vec<_>>(),
        [("Read", 1), ("Write", 2), ("Execute", 4)]
    );
}

#[test]
fn test_type_definition() {
    let model = demo_model();
    let sku = model.find_type_definition("Demo.Sku").unwrap();
    assert_eq!(sku.underlying_type(), PrimitiveType::String);
    assert_eq!(sku.facets().max_length, Some(MaxLength::Length(20)));
}

#[test]
fn test_entity_sets_and_bindings() {
    let model = demo_model();
    let products = model.entity_set("Products").unwrap();
    assert_eq!(products.entity_type(), "Com.Example.Demo.Product");
    assert!(products.include_in_service_document());
    let bindings = products
        .bindings()
        .iter()
        .map(|b| (b.path(), b.target()))
        .collect::<Vec<_>>();
    assert_eq!(
        bindings,
        [("Dimensions/Supplier", "MainSupplier"), ("Category", "Categories")]
    );

    let categories = model.entity_set("Categories").unwrap();
    assert_eq!(categories.bindings().len(), 1);
    assert_eq!(categories.bindings()[0].target(), "Products");

    let supplier = model.singleton("MainSupplier").unwrap();
    assert_eq!(supplier.entity_type(), "Com.Example.Demo.Supplier");
    assert!(supplier.bindings().is_empty());
}

#[test]
fn test_container() {
    let model = demo_model();
    let container = model.container();
    assert_eq!(container.name(), "ComExampleDemo");
    assert_eq!(container.namespace(), "Com.Example.Demo");
    assert_eq!(container.qualified_name(), "Com.Example.Demo.ComExampleDemo");
    assert_eq!(container.base_container(), None);
    assert_eq!(
        container.entity_sets().keys().collect::<Vec<_>>(),
        ["Products", "Categories"]
    );
}

#[test]
fn test_forward_referenced_action_import() {
    let model = demo_model();
    let import = model.action_import("ResetAll").unwrap();
    let action = model.find_action("Demo.Reset").unwrap();
    assert!(Arc::ptr_eq(import.operation(), action));
    assert_eq!(
        import.operation().operation().qualified_name(),
        "Com.Example.Demo.Reset"
    );
    assert!(*action.operation().is_bound().inner());
    assert_eq!(import.entity_set().map(|s| s.name()), Some("Products"));
    assert!(Arc::ptr_eq(
        import.entity_set().unwrap(),
        model.entity_set("Products").unwrap()
    ));
    let parameter = action.operation().parameters().get("product").unwrap();
    assert_eq!(parameter.ptype().element(), "Com.Example.Demo.Product");
}

#[test]
fn test_unbound_function_import() {
    let model = demo_model();
    let import = model.function_import("Best").unwrap();
    assert!(import.entity_set().is_none());
    let function = import.operation();
    assert!(*function.is_composable().inner());
    assert!(!*function.operation().is_bound().inner());
    assert_eq!(
        function.return_type().rtype().type_name(),
        "Collection(Com.Example.Demo.Product)"
    );
    assert!(*function.return_type().is_nullable().inner());
}

#[test]
fn test_type_for_host() {
    let model = demo_model();
    let host = |id: &str| HostTypeId::new(id.into());
    assert!(matches!(
        model.type_for_host(&host("demo::Product")),
        Some(Type::Entity(e)) if e.structure().name() == "Product"
    ));
    assert!(matches!(
        model.type_for_host(&host("demo::Sku")),
        Some(Type::TypeDefinition(_))
    ));
    assert!(matches!(
        model.type_for_host(&host("i64")),
        Some(Type::Primitive(PrimitiveType::Int64))
    ));
    assert!(model.type_for_host(&host("demo::Unknown")).is_none());
}

#[test]
fn test_reads_are_independent() {
    let model = demo_model();
    let mut first = model.schemas().to_vec();
    first.clear();
    let second = model.schemas().to_vec();
    assert_eq!(second.len(), 1);
    assert_eq!(second, model.schemas());

    let mut types = model.schema("Demo").unwrap().types().clone();
    let color = types.get("Color").cloned().unwrap();
    types.insert("Renamed".into(), color);
    assert_eq!(model.schema("Demo").unwrap().types().len(), 7);
    assert!(model.find_type("Demo.Renamed").is_none());
}

#[test]
fn test_shared_between_threads() {
    let model = Arc::new(demo_model());
    std::thread::scope(|s| {
        for _ in 0..4 {
            let model = Arc::clone(&model);
            s.spawn(move || {
                assert!(model.find_entity_type("Demo.Product").is_some());
                assert!(model.entity_set("Products").is_some());
            });
        }
    });
}
