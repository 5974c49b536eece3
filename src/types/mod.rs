//! # Type System for rowcast
//!
//! The vocabulary shared by probes, the null policy and the dispatcher.
//!
//! ## Module Structure
//!
//! - `storage_class`: the dynamic tag a cell carries (`StorageClass`)
//! - `value`: owned generic cell value (`Value`) and the null marker (`DbNull`)
//! - `kind`: requested-type discriminant (`ScalarKind`) and tagged result (`Scalar`)
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | `StorageClass` | What the cell holds right now |
//! | `ScalarKind` | What the caller asked for |
//! | `Scalar` | The decoded answer, tagged by kind |
//! | `Value` | Natural representation of a cell |
//! | `DbNull` | Explicit "no value" marker |

mod kind;
mod storage_class;
mod value;

pub use kind::{Scalar, ScalarKind};
pub use storage_class::StorageClass;
pub use value::{DbNull, Value};
