//! Symbolic-variable encoding for SMT-based verification of contract
//! programs.
//!
//! Program variables are mutable, solver variables are not. This crate
//! turns each typed program variable into an SSA family of uniquely named
//! logic variables, one per write, and keeps every "current value" lookup
//! pinned to exactly one logic object per generation.

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod smt;
pub mod span;
pub mod symbolic;
pub mod types;

pub use config::{EncodingOptions, IntegerEncoding};
pub use error::EncodingError;
pub use smt::{EncodingContext, Expr, Sort};
pub use symbolic::{new_symbolic_variable, SymbolicVariable, VariableKind};
pub use types::{Ty, TypeCategory};
