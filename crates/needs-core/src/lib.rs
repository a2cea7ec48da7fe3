//! # needs-core
//!
//! The minimum needs table used by disaster-response planning.
//!
//! This crate provides:
//! - [`Resource`] and [`NeedsTable`]: the record types, serialized with the
//!   human-readable keys used in needs files (`"Resource name"`, `"Default"`, ...)
//! - [`MinimumNeeds`]: the owning component with lookup, append, replace and
//!   JSON file persistence
//! - [`defaults`]: the built-in BNPB default table
//! - [`Translate`]: the injected localization seam used for display names
//! - [`NeedsError`]: the error taxonomy shared by every fallible operation
//!
//! # Usage
//!
//! ```no_run
//! use needs_core::{Identity, MinimumNeeds};
//!
//! let mut needs = MinimumNeeds::with_defaults(&Identity);
//! needs.set_weekly_need("Blankets", "2", "pieces").expect("resources present");
//! needs.write_to_file("minimum_needs.json").expect("written");
//!
//! for (name, amount) in needs.get_minimum_needs(&Identity).expect("resources present") {
//!     println!("{name}: {amount}");
//! }
//! ```

pub mod defaults;
pub mod error;
pub mod needs;
pub mod resource;
pub mod schema;
mod storage;
pub mod table;
pub mod translate;

pub use defaults::defaults;
pub use error::NeedsError;
pub use needs::{DEFAULT_FREQUENCY, MinimumNeeds};
pub use resource::{Amount, Resource};
pub use table::NeedsTable;
pub use translate::{Catalog, Identity, Translate};
