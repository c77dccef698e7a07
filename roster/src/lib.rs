//! In-memory employee roster editor core.
//!
//! Holds a mutable list of employee records, derives a searchable/sortable
//! view, and drives a create/edit/delete workflow with field-level
//! validation. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (validation, projection,
//!   invariants). No I/O, fully testable in isolation.
//! - **[`store`] / [`session`]**: Owned mutable state and the modal state
//!   machine orchestrating it. Synchronous and single-threaded; every intent
//!   runs to completion before the next is processed.
//!
//! Rendering is out of scope for the library. The `roster` binary consumes
//! the command/query surface of [`session::RosterSession`] and owns all
//! display concerns (tables, prompts, toast printing).

pub mod core;
pub mod logging;
pub mod record;
pub mod session;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
