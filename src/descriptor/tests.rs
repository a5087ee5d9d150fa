//! Descriptor tests

use super::*;
use crate::error::Error;
use crate::types::TypeName;

struct Employee;

impl Document for Employee {
    const TYPE_NAME: &'static str = "Employee";

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::of::<String>("FirstName"),
            FieldDescriptor::of::<i32>("Salary"),
            FieldDescriptor::of::<chrono::DateTime<chrono::Utc>>("Birthday"),
            FieldDescriptor::of::<bool>("IsManager"),
            FieldDescriptor::new("Employees", ValueKind::list(Employee::kind())),
        ]
    }
}

// ============================================================================
// Value Kind Parsing
// ============================================================================

#[test]
fn test_parse_primitive_keywords() {
    assert_eq!("i32".parse::<ValueKind>().unwrap(), ValueKind::I32);
    assert_eq!("int".parse::<ValueKind>().unwrap(), ValueKind::I32);
    assert_eq!("ulong".parse::<ValueKind>().unwrap(), ValueKind::U64);
    assert_eq!("string".parse::<ValueKind>().unwrap(), ValueKind::String);
    assert_eq!("guid".parse::<ValueKind>().unwrap(), ValueKind::Uuid);
    assert_eq!("datetime".parse::<ValueKind>().unwrap(), ValueKind::DateTime);
}

#[test]
fn test_parse_wrappers() {
    let kind: ValueKind = "list<object<Employee>>".parse().unwrap();
    assert_eq!(kind, ValueKind::list(ValueKind::complex("Employee")));

    let kind: ValueKind = "option< i64 >".parse().unwrap();
    assert_eq!(kind, ValueKind::nullable(ValueKind::I64));

    let kind: ValueKind = "list<list<string>>".parse().unwrap();
    assert_eq!(kind, ValueKind::list(ValueKind::list(ValueKind::String)));
}

#[test]
fn test_parse_unknown_and_malformed() {
    assert_eq!(
        "geo_point".parse::<ValueKind>().unwrap(),
        ValueKind::Unknown("geo_point".to_string())
    );
    assert!("".parse::<ValueKind>().is_err());
    assert!("list<string".parse::<ValueKind>().is_err());
    assert!("object<>".parse::<ValueKind>().is_err());
}

#[test]
fn test_display_parses_back() {
    let kind = ValueKind::list(ValueKind::nullable(ValueKind::complex("Employee")));
    assert_eq!(kind.to_string(), "list<option<object<Employee>>>");
    assert_eq!(kind.to_string().parse::<ValueKind>().unwrap(), kind);
}

#[test]
fn test_resolve_unknown_against_types() {
    let kind: ValueKind = "list<Employee>".parse().unwrap();
    let resolved = kind.resolve(&|name: &str| name == "Employee");
    assert_eq!(resolved, ValueKind::list(ValueKind::complex("Employee")));

    let kind: ValueKind = "Blob".parse().unwrap();
    let resolved = kind.resolve(&|name: &str| name == "Employee");
    assert_eq!(resolved, ValueKind::Unknown("Blob".to_string()));
}

// ============================================================================
// Field Descriptors
// ============================================================================

#[test]
fn test_nested_type_through_wrappers() {
    let field = FieldDescriptor::new(
        "Manager",
        ValueKind::nullable(ValueKind::complex("Employee")),
    );
    assert_eq!(field.nested_type(), Some(&TypeName::new("Employee")));

    let field = FieldDescriptor::of::<Vec<String>>("Tags");
    assert_eq!(field.nested_type(), None);
    assert_eq!(field.kind.element(), &ValueKind::String);
}

#[test]
fn test_field_kind_for_rust_types() {
    assert_eq!(FieldDescriptor::of::<u16>("a").kind, ValueKind::U16);
    assert_eq!(FieldDescriptor::of::<str>("a").kind, ValueKind::String);
    assert_eq!(
        FieldDescriptor::of::<Option<chrono::NaiveDate>>("a").kind,
        ValueKind::nullable(ValueKind::Date)
    );
    assert_eq!(
        FieldDescriptor::of::<Box<f32>>("a").kind,
        ValueKind::F32
    );
}

#[test]
fn test_field_config_builder() {
    let config = FieldConfig::new()
        .with_kind("nested")
        .with_name("empl")
        .with_setting("path", "employees");

    assert_eq!(config.kind.as_deref(), Some("nested"));
    assert_eq!(config.name.as_deref(), Some("empl"));
    assert_eq!(config.settings["path"], "employees");
}

#[test]
fn test_field_config_flattens_settings() {
    let yaml = r#"
kind: string
analyzer: keyword
null_value: "null"
"#;
    let config: FieldConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.kind.as_deref(), Some("string"));
    assert_eq!(config.name, None);
    assert_eq!(config.settings.len(), 2);
    assert_eq!(config.settings["analyzer"], "keyword");
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_register_document() {
    let mut registry = TypeRegistry::new();
    registry.register::<Employee>();

    assert!(registry.contains("Employee"));
    assert_eq!(registry.len(), 1);

    let fields = registry.fields(&TypeName::new("Employee")).unwrap();
    let ids: Vec<_> = fields.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["FirstName", "Salary", "Birthday", "IsManager", "Employees"]
    );
    assert_eq!(fields[2].kind, ValueKind::DateTime);
}

#[test]
fn test_registry_unknown_type() {
    let registry = TypeRegistry::new();
    let err = registry.describe(&TypeName::new("Missing")).unwrap_err();
    assert!(matches!(err, Error::UnknownType { type_name } if type_name == "Missing"));
}

#[test]
fn test_descriptor_builder() {
    let descriptor = TypeDescriptor::new("Company")
        .with_mapping_name("company")
        .field(FieldDescriptor::of::<String>("Name"))
        .field(FieldDescriptor::of::<String>("Secret").ignored());

    assert_eq!(descriptor.mapping_name.as_deref(), Some("company"));
    assert!(descriptor.get_field("Secret").unwrap().ignore);
    assert!(descriptor.get_field("Other").is_none());
}
