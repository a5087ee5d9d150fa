//! Integration tests
//!
//! Tests the full flow: YAML type definitions → AutoMapper → mapping document

use automap::cli::{Cli, Runner};
use automap::descriptor::{Document, FieldConfig, FieldDescriptor, TypeRegistry, ValueKind};
use automap::schema::KindTag;
use automap::{
    load_types_from_str, AutoMapper, Error, MappingDocument, MappingSettings, OverrideSpec,
    SchemaNode, TypeName, VisitorPipeline,
};
use clap::Parser;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

const COMPANY_TYPES: &str = r#"
types:
  - name: Company
    fields:
      - name: Name
        type: string
      - name: Employees
        type: list<Employee>
  - name: Employee
    fields:
      - name: FirstName
        type: string
      - name: LastName
        type: string
      - name: Salary
        type: i32
      - name: Birthday
        type: datetime
      - name: IsManager
        type: bool
      - name: Employees
        type: list<Employee>
"#;

const ANNOTATED_TYPES: &str = r#"
types:
  - name: Company
    fields:
      - name: Name
        type: string
        mapping:
          analyzer: keyword
          null_value: "null"
          similarity: BM25
      - name: Employees
        type: list<Employee>
        mapping:
          kind: nested
  - name: Employee
    fields:
      - name: FirstName
        type: string
      - name: Salary
        type: i32
        mapping:
          kind: number
          doc_values: false
          store: true
      - name: Employees
        type: list<Employee>
        mapping:
          name: empl
      - name: PropertyToIgnore
        type: string
        ignore: true
"#;

// ============================================================================
// Library Flow
// ============================================================================

#[test]
fn test_company_mapping_document() {
    let registry = load_types_from_str(COMPANY_TYPES).unwrap();
    let mapper = AutoMapper::new(&registry);

    let company = TypeName::new("Company");
    let node = mapper.automap(&company).unwrap();
    let document = MappingDocument::new()
        .with_mapping(mapper.mapping_name(&company).unwrap(), node)
        .unwrap();

    assert_eq!(
        document.to_json(),
        json!({
            "mappings": {
                "company": {
                    "properties": {
                        "name": {"type": "string"},
                        "employees": {
                            "type": "object",
                            "properties": {
                                "firstName": {"type": "string"},
                                "lastName": {"type": "string"},
                                "salary": {"type": "integer"},
                                "birthday": {"type": "date"},
                                "isManager": {"type": "boolean"},
                                "employees": {"type": "object", "properties": {}}
                            }
                        }
                    }
                }
            }
        })
    );
}

#[test]
fn test_declarative_configuration() {
    let registry = load_types_from_str(ANNOTATED_TYPES).unwrap();
    let node = AutoMapper::new(&registry).automap("Company").unwrap();

    assert_eq!(
        node.to_json(),
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "analyzer": "keyword",
                    "null_value": "null",
                    "similarity": "BM25"
                },
                "employees": {
                    "type": "nested",
                    "properties": {
                        "firstName": {"type": "string"},
                        "salary": {"type": "double", "doc_values": false, "store": true},
                        "empl": {"type": "object", "properties": {}}
                    }
                }
            }
        })
    );
}

#[test]
fn test_fluent_override_on_inferred_mapping() {
    let registry = load_types_from_str(COMPANY_TYPES).unwrap();

    let raw = SchemaNode::string()
        .with_field("raw", SchemaNode::string().with_setting("index", "not_analyzed"));
    let overrides = OverrideSpec::new()
        .field("Name", raw)
        .field("Employees", SchemaNode::new(automap::NodeKind::Nested));

    let node = AutoMapper::new(&registry)
        .automap_with("Company", Some(&overrides))
        .unwrap();

    assert_eq!(
        node.to_json(),
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "fields": {"raw": {"type": "string", "index": "not_analyzed"}}
                },
                "employees": {"type": "nested"}
            }
        })
    );
}

#[test]
fn test_settings_rules_and_visitor() {
    let registry = load_types_from_str(COMPANY_TYPES).unwrap();
    let settings = MappingSettings::from_yaml_str(
        r#"
naming: snake_case
max_repeat: 2
types:
  Employee:
    ignore: [Birthday]
    rename:
      IsManager: manager
"#,
    )
    .unwrap();
    let visitor = VisitorPipeline::new()
        .on_kind(KindTag::Number, |node, _| node.set("doc_values", false))
        .on_kind(KindTag::Boolean, |node, _| node.set("doc_values", false));

    let node = AutoMapper::new(&registry)
        .with_settings(settings)
        .with_visitor(visitor)
        .automap("Employee")
        .unwrap();

    assert_eq!(
        node.get_property("salary").unwrap().to_json(),
        json!({"type": "integer", "doc_values": false})
    );
    assert_eq!(
        node.get_property("manager").unwrap().to_json(),
        json!({"type": "boolean", "doc_values": false})
    );
    assert!(node.get_property("birthday").is_none());

    // Root Employee is not counted, two further levels expand
    let level2 = node
        .get_property("employees")
        .and_then(|n| n.get_property("employees"))
        .unwrap();
    assert!(level2.get_property("first_name").is_some());
    assert!(level2.get_property("employees").unwrap().is_opaque());
}

// ============================================================================
// Rust-native Descriptions
// ============================================================================

struct Address;

impl Document for Address {
    const TYPE_NAME: &'static str = "Address";

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::of::<String>("Street"),
            FieldDescriptor::of::<Option<u16>>("Zip"),
        ]
    }
}

struct Customer;

impl Document for Customer {
    const TYPE_NAME: &'static str = "Customer";

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::of::<String>("Name"),
            FieldDescriptor::of::<u64>("LifetimeValue"),
            FieldDescriptor::of::<chrono::NaiveDate>("Since"),
            FieldDescriptor::new("Addresses", ValueKind::list(Address::kind()))
                .with_config(FieldConfig::new().with_kind("nested")),
            FieldDescriptor::new("Referrer", Customer::kind()),
        ]
    }

    fn mapping_name() -> Option<String> {
        Some("customers".to_string())
    }
}

#[test]
fn test_rust_documents() {
    let mut registry = TypeRegistry::new();
    registry.register::<Customer>().register::<Address>();

    let mapper = AutoMapper::new(&registry);
    let customer = TypeName::new(Customer::TYPE_NAME);
    assert_eq!(mapper.mapping_name(&customer).unwrap(), "customers");

    let node = mapper.automap(&customer).unwrap();
    assert_eq!(
        node.to_json(),
        json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "lifetimeValue": {"type": "double"},
                "since": {"type": "date"},
                "addresses": {
                    "type": "nested",
                    "properties": {
                        "street": {"type": "string"},
                        "zip": {"type": "integer"}
                    }
                },
                "referrer": {
                    "type": "object",
                    "properties": {
                        "name": {"type": "string"},
                        "lifetimeValue": {"type": "double"},
                        "since": {"type": "date"},
                        "addresses": {
                            "type": "nested",
                            "properties": {
                                "street": {"type": "string"},
                                "zip": {"type": "integer"}
                            }
                        },
                        "referrer": {"type": "object", "properties": {}}
                    }
                }
            }
        })
    );
}

#[test]
fn test_mapping_errors_abort_the_call() {
    let yaml = r#"
types:
  - name: Company
    fields:
      - name: Logo
        type: bytes
"#;
    let registry = load_types_from_str(yaml).unwrap();
    let err = AutoMapper::new(&registry).automap("Company").unwrap_err();
    assert!(err.is_mapping_error());
    assert!(matches!(err, Error::UnsupportedKind { .. }));

    // A declared kind maps the otherwise-unsupported field
    let yaml = r#"
types:
  - name: Company
    fields:
      - name: Logo
        type: bytes
        mapping:
          kind: binary
"#;
    let registry = load_types_from_str(yaml).unwrap();
    let node = AutoMapper::new(&registry).automap("Company").unwrap();
    assert_eq!(
        node.get_property("logo").unwrap().to_json(),
        json!({"type": "binary"})
    );
}

// ============================================================================
// CLI Runner
// ============================================================================

fn write_file(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path.to_string_lossy().to_string()
}

fn run(args: &[&str]) -> automap::Result<serde_json::Value> {
    let mut argv = vec!["automap"];
    argv.extend_from_slice(args);
    Runner::new(Cli::try_parse_from(argv).unwrap()).execute()
}

#[test]
fn test_cli_map() {
    let dir = TempDir::new().unwrap();
    let types = write_file(dir.path(), "types.yaml", COMPANY_TYPES);

    let output = run(&["-t", types.as_str(), "map", "Company", "Employee", "--max-repeat", "2"]).unwrap();
    let mappings = output["mappings"].as_object().unwrap();
    assert_eq!(mappings.len(), 2);
    assert_eq!(
        output["mappings"]["employee"]["properties"]["employees"]["properties"]["employees"]
            ["properties"]["employees"],
        json!({"type": "object", "properties": {}})
    );
}

#[test]
fn test_cli_map_with_overrides_and_settings() {
    let dir = TempDir::new().unwrap();
    let types = write_file(dir.path(), "types.yaml", COMPANY_TYPES);
    let settings = write_file(
        dir.path(),
        "settings.yaml",
        "types:\n  Company:\n    mapping_name: companies\n",
    );
    let overrides = write_file(
        dir.path(),
        "overrides.yaml",
        "Company:\n  Employees:\n    type: nested\n",
    );

    let output = run(&[
        "-t", types.as_str(), "-s", settings.as_str(), "map", "Company", "--overrides", overrides.as_str(),
    ])
    .unwrap();

    assert_eq!(
        output["mappings"]["companies"]["properties"]["employees"],
        json!({"type": "nested"})
    );
}

#[test]
fn test_cli_overrides_for_unknown_type() {
    let dir = TempDir::new().unwrap();
    let types = write_file(dir.path(), "types.yaml", COMPANY_TYPES);
    let overrides = write_file(
        dir.path(),
        "overrides.yaml",
        "Ghost:\n  Name:\n    type: string\n",
    );

    let err = run(&["-t", types.as_str(), "map", "Company", "-o", overrides.as_str()]).unwrap_err();
    assert!(matches!(err, Error::UnknownType { .. }));
}

#[test]
fn test_cli_types_and_validate() {
    let dir = TempDir::new().unwrap();
    let types = write_file(dir.path(), "types.yaml", COMPANY_TYPES);

    let output = run(&["-t", types.as_str(), "types"]).unwrap();
    assert_eq!(
        output,
        json!({
            "types": [
                {"name": "Company", "mapping_name": null, "fields": 2},
                {"name": "Employee", "mapping_name": null, "fields": 6}
            ]
        })
    );

    let output = run(&["-t", types.as_str(), "validate"]).unwrap();
    assert_eq!(output["valid"], json!(true));
    assert_eq!(output["types"], json!(2));
}

#[test]
fn test_cli_rejects_invalid_settings_file() {
    let dir = TempDir::new().unwrap();
    let types = write_file(dir.path(), "types.yaml", COMPANY_TYPES);
    let settings = write_file(dir.path(), "settings.yaml", "max_repeat: 0\n");

    let err = run(&["-t", types.as_str(), "-s", settings.as_str(), "validate"]).unwrap_err();
    assert!(matches!(err, Error::RecursionConfig { max_repeat: 0 }));
}

#[test]
fn test_cli_requires_types() {
    let err = run(&["validate"]).unwrap_err();
    assert!(err.to_string().contains("-t"));
}

#[test]
fn test_cli_zero_repeat() {
    let dir = TempDir::new().unwrap();
    let types = write_file(dir.path(), "types.yaml", COMPANY_TYPES);

    let err = run(&["-t", types.as_str(), "map", "Company", "--max-repeat", "0"]).unwrap_err();
    assert!(matches!(err, Error::RecursionConfig { max_repeat: 0 }));
}
