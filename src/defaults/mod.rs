//! Component defaults registry.
//!
//! Every component resolves its optional parameters with the precedence
//! explicit value > registry default > hardcoded fallback. The registry holds
//! the middle tier: a table from component name to an option map, seeded
//! from a built-in snapshot and adjustable at bootstrap.
//!
//! # Architecture
//!
//! - [`OptionValue`]: a string, integer, float or boolean option value
//! - [`DefaultsRegistry`]: shared handle over the mutable table
//! - [`Resolver`]: per-component view applying the three-tier precedence
//!
//! # Example
//!
//! ```rust
//! use community_ui::defaults::{DefaultsRegistry, OptionValue};
//!
//! let defaults = DefaultsRegistry::empty();
//! defaults.set("Widget", [("size", "10px")]);
//! defaults.set("Widget", [("color", "red")]);
//!
//! let widget = defaults.get("Widget");
//! assert_eq!(widget["size"], OptionValue::from("10px"));
//! assert_eq!(widget.len(), 2);
//!
//! defaults.reset();
//! assert!(defaults.get("Widget").is_empty());
//! ```

mod registry;
mod resolve;
mod value;

pub use registry::{DefaultsRegistry, DefaultsTable, OptionMap, builtin_defaults};
pub use resolve::{FromOptionValue, Resolver};
pub use value::OptionValue;
