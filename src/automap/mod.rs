//! AutoMap module
//!
//! Walks a type description and produces its schema tree.
//!
//! # Precedence
//!
//! For every field, from lowest to highest:
//!
//! 1. Kind inference from the declared value kind
//! 2. Declarative configuration attached to the field
//! 3. Explicit overrides supplied by the caller
//!
//! Fields ignored declaratively or by [`MappingSettings`](crate::config::MappingSettings)
//! are dropped before inference; an explicit override for such a field is
//! still applied.
//!
//! # Recursion
//!
//! Recursion into complex fields is bounded per type identity: each type may
//! occur at most `max_repeat` times on the active path below the mapped
//! type. A field that would exceed the limit becomes an object node with an
//! empty child mapping.
//!
//! ```ignore
//! let registry = load_types_from_str(yaml)?;
//! let mapper = AutoMapper::new(&registry).with_max_repeat(3);
//! let node = mapper.automap("Company")?;
//! ```

mod guard;
mod mapper;
mod overrides;

pub use guard::RecursionGuard;
pub use mapper::AutoMapper;
pub use overrides::{merge, OverrideSpec};
