//! YAML Loader module
//!
//! Parse type definitions from YAML files into a [`TypeRegistry`](crate::descriptor::TypeRegistry).
//!
//! ```yaml
//! types:
//!   - name: Company
//!     fields:
//!       - name: Name
//!         type: string
//!       - name: Employees
//!         type: list<Employee>
//!         mapping:
//!           kind: nested
//!   - name: Employee
//!     fields:
//!       - name: FirstName
//!         type: string
//!       - name: Salary
//!         type: i32
//!         ignore: true
//! ```

mod parser;
mod types;

pub use parser::{load_types, load_types_from_str};
pub use types::{FieldDefinition, TypeDefinition, TypeDefinitionFile};
