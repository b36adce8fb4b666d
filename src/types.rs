//! Program-level types as the verification pass receives them.
//!
//! These are the already type-checked semantic types of the contract
//! language. The encoding core only inspects their category and shape; it
//! never re-checks them.

use std::fmt;

/// Semantic type of a program variable or expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ty {
    Bool,
    /// `uintN` / `intN`.
    Integer { bits: u16, signed: bool },
    /// Compile-time rational number literal.
    Rational,
    Address,
    Contract(String),
    /// `bytesN`, width in bytes.
    FixedBytes(u8),
    /// Type of a string literal; carries the literal itself.
    StringLiteral(String),
    /// Dynamic `bytes`.
    Bytes,
    /// Dynamic `string`.
    String,
    /// `T[]` or `T[n]`.
    Array { base: Box<Ty>, length: Option<u64> },
    Mapping { key: Box<Ty>, value: Box<Ty> },
    Enum { name: String, members: Vec<String> },
    /// Components may be missing (e.g. `(, x)` destructuring).
    Tuple(Vec<Option<Ty>>),
    Function { params: Vec<Ty>, returns: Vec<Ty> },
    Struct(String),
}

/// Coarse classification used for construction-time validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Bool,
    Integer,
    Rational,
    Address,
    Contract,
    FixedBytes,
    StringLiteral,
    Array,
    Mapping,
    Enum,
    Tuple,
    Function,
    Struct,
}

impl Ty {
    pub fn uint(bits: u16) -> Ty {
        Ty::Integer { bits, signed: false }
    }

    pub fn int(bits: u16) -> Ty {
        Ty::Integer { bits, signed: true }
    }

    pub fn category(&self) -> TypeCategory {
        match self {
            Ty::Bool => TypeCategory::Bool,
            Ty::Integer { .. } => TypeCategory::Integer,
            Ty::Rational => TypeCategory::Rational,
            Ty::Address => TypeCategory::Address,
            Ty::Contract(_) => TypeCategory::Contract,
            Ty::FixedBytes(_) => TypeCategory::FixedBytes,
            Ty::StringLiteral(_) => TypeCategory::StringLiteral,
            Ty::Bytes | Ty::String | Ty::Array { .. } => TypeCategory::Array,
            Ty::Mapping { .. } => TypeCategory::Mapping,
            Ty::Enum { .. } => TypeCategory::Enum,
            Ty::Tuple(_) => TypeCategory::Tuple,
            Ty::Function { .. } => TypeCategory::Function,
            Ty::Struct(_) => TypeCategory::Struct,
        }
    }

    /// Bit width of an integer-like type, if it has a fixed one.
    pub fn bit_width(&self) -> Option<u32> {
        match self {
            Ty::Integer { bits, .. } => Some(u32::from(*bits)),
            Ty::Address | Ty::Contract(_) => Some(160),
            Ty::FixedBytes(n) => Some(u32::from(*n) * 8),
            _ => None,
        }
    }
}

impl TypeCategory {
    pub fn is_bool(self) -> bool {
        self == TypeCategory::Bool
    }

    pub fn is_number(self) -> bool {
        matches!(
            self,
            TypeCategory::Integer
                | TypeCategory::Rational
                | TypeCategory::Address
                | TypeCategory::Contract
                | TypeCategory::FixedBytes
        )
    }

    pub fn is_array(self) -> bool {
        matches!(self, TypeCategory::Array | TypeCategory::StringLiteral)
    }

    pub fn is_mapping(self) -> bool {
        self == TypeCategory::Mapping
    }

    pub fn is_enum(self) -> bool {
        self == TypeCategory::Enum
    }

    pub fn is_tuple(self) -> bool {
        self == TypeCategory::Tuple
    }

    pub fn is_function(self) -> bool {
        self == TypeCategory::Function
    }

    /// Categories the encoder can model at all.
    pub fn is_supported(self) -> bool {
        self != TypeCategory::Struct
    }
}

fn join(types: &[Ty]) -> String {
    types
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Bool => write!(f, "bool"),
            Ty::Integer { bits, signed } => {
                write!(f, "{}int{}", if *signed { "" } else { "u" }, bits)
            }
            Ty::Rational => write!(f, "rational_const"),
            Ty::Address => write!(f, "address"),
            Ty::Contract(name) => write!(f, "contract {}", name),
            Ty::FixedBytes(n) => write!(f, "bytes{}", n),
            Ty::StringLiteral(value) => write!(f, "literal_string \"{}\"", value),
            Ty::Bytes => write!(f, "bytes"),
            Ty::String => write!(f, "string"),
            Ty::Array { base, length } => match length {
                Some(n) => write!(f, "{}[{}]", base, n),
                None => write!(f, "{}[]", base),
            },
            Ty::Mapping { key, value } => write!(f, "mapping({} => {})", key, value),
            Ty::Enum { name, .. } => write!(f, "enum {}", name),
            Ty::Tuple(components) => {
                let parts: Vec<String> = components
                    .iter()
                    .map(|c| c.as_ref().map(|t| t.to_string()).unwrap_or_default())
                    .collect();
                write!(f, "tuple({})", parts.join(","))
            }
            Ty::Function { params, returns } => {
                write!(f, "function ({})", join(params))?;
                if !returns.is_empty() {
                    write!(f, " returns ({})", join(returns))?;
                }
                Ok(())
            }
            Ty::Struct(name) => write!(f, "struct {}", name),
        }
    }
}
