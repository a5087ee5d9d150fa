//! Rust type to value kind mapping

use super::types::{FieldDescriptor, TypeDescriptor, ValueKind};
use crate::types::TypeName;

/// Rust types that declare a value kind
pub trait FieldKind {
    /// The value kind a field of this type carries
    fn value_kind() -> ValueKind;
}

/// Rust types that describe their own fields
///
/// ```ignore
/// struct Company { name: String, employees: Vec<Employee> }
///
/// impl Document for Company {
///     const TYPE_NAME: &'static str = "Company";
///
///     fn fields() -> Vec<FieldDescriptor> {
///         vec![
///             FieldDescriptor::of::<String>("Name"),
///             FieldDescriptor::new("Employees", ValueKind::list(Employee::kind())),
///         ]
///     }
/// }
/// ```
pub trait Document {
    /// Type identity
    const TYPE_NAME: &'static str;

    /// Fields in declared order
    fn fields() -> Vec<FieldDescriptor>;

    /// Type-level wire name
    fn mapping_name() -> Option<String> {
        None
    }

    /// Complex value kind referring to this type
    fn kind() -> ValueKind {
        ValueKind::Complex(TypeName::new(Self::TYPE_NAME))
    }

    /// Full type descriptor
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor {
            name: TypeName::new(Self::TYPE_NAME),
            mapping_name: Self::mapping_name(),
            fields: Self::fields(),
        }
    }
}

macro_rules! impl_field_kind {
    ($($ty:ty => $kind:expr),* $(,)?) => {
        $(
            impl FieldKind for $ty {
                fn value_kind() -> ValueKind {
                    $kind
                }
            }
        )*
    };
}

impl_field_kind! {
    i8 => ValueKind::I8,
    i16 => ValueKind::I16,
    i32 => ValueKind::I32,
    i64 => ValueKind::I64,
    u8 => ValueKind::U8,
    u16 => ValueKind::U16,
    u32 => ValueKind::U32,
    u64 => ValueKind::U64,
    f32 => ValueKind::F32,
    f64 => ValueKind::F64,
    bool => ValueKind::Bool,
    char => ValueKind::Char,
    str => ValueKind::String,
    String => ValueKind::String,
    chrono::NaiveDate => ValueKind::Date,
    chrono::NaiveDateTime => ValueKind::DateTime,
    chrono::NaiveTime => ValueKind::Time,
}

impl<Tz: chrono::TimeZone> FieldKind for chrono::DateTime<Tz> {
    fn value_kind() -> ValueKind {
        ValueKind::DateTime
    }
}

impl<T: FieldKind> FieldKind for Vec<T> {
    fn value_kind() -> ValueKind {
        ValueKind::list(T::value_kind())
    }
}

impl<T: FieldKind> FieldKind for Option<T> {
    fn value_kind() -> ValueKind {
        ValueKind::nullable(T::value_kind())
    }
}

impl<T: FieldKind + ?Sized> FieldKind for Box<T> {
    fn value_kind() -> ValueKind {
        T::value_kind()
    }
}
