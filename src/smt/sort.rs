use std::fmt;

use crate::config::{EncodingOptions, IntegerEncoding};
use crate::error::EncodingError;
use crate::types::Ty;

use super::quote_symbol;

/// An SMT-LIB sort.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sort {
    Bool,
    Int,
    BitVec(u32),
    /// `(Array index element)`
    Array(Box<Sort>, Box<Sort>),
    /// Uninterpreted function symbol `domain -> codomain`.
    Function {
        domain: Vec<Sort>,
        codomain: Box<Sort>,
    },
    /// Single-constructor datatype named after the program tuple type.
    Tuple { name: String, components: Vec<Sort> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKind {
    Bool,
    Int,
    BitVec,
    Array,
    Function,
    Tuple,
}

impl Sort {
    pub fn kind(&self) -> SortKind {
        match self {
            Sort::Bool => SortKind::Bool,
            Sort::Int => SortKind::Int,
            Sort::BitVec(_) => SortKind::BitVec,
            Sort::Array(..) => SortKind::Array,
            Sort::Function { .. } => SortKind::Function,
            Sort::Tuple { .. } => SortKind::Tuple,
        }
    }

    /// Width of a bit-vector sort; `None` for every other sort.
    pub fn bit_width(&self) -> Option<u32> {
        match self {
            Sort::BitVec(w) => Some(*w),
            _ => None,
        }
    }

    /// Collect the tuple sorts reachable from this sort, innermost first.
    pub(crate) fn collect_tuples<'a>(&'a self, out: &mut Vec<&'a Sort>) {
        match self {
            Sort::Bool | Sort::Int | Sort::BitVec(_) => {}
            Sort::Array(index, element) => {
                index.collect_tuples(out);
                element.collect_tuples(out);
            }
            Sort::Function { domain, codomain } => {
                for s in domain {
                    s.collect_tuples(out);
                }
                codomain.collect_tuples(out);
            }
            Sort::Tuple { components, .. } => {
                for s in components {
                    s.collect_tuples(out);
                }
                if !out.contains(&self) {
                    out.push(self);
                }
            }
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sort::Bool => write!(f, "Bool"),
            Sort::Int => write!(f, "Int"),
            Sort::BitVec(w) => write!(f, "(_ BitVec {})", w),
            Sort::Array(index, element) => write!(f, "(Array {} {})", index, element),
            Sort::Function { domain, codomain } => {
                write!(f, "(->")?;
                for s in domain {
                    write!(f, " {}", s)?;
                }
                write!(f, " {})", codomain)
            }
            Sort::Tuple { name, .. } => write!(f, "{}", quote_symbol(name)),
        }
    }
}

// ─── Type → Sort ───────────────────────────────────────────────────

fn sized_int(options: &EncodingOptions, bits: u32) -> Sort {
    match options.integers {
        IntegerEncoding::Int => Sort::Int,
        IntegerEncoding::BitVec => Sort::BitVec(bits),
    }
}

/// The sort of `uint256`, used for indices and abstracted values.
pub fn uint256_sort(options: &EncodingOptions) -> Sort {
    sized_int(options, 256)
}

/// Map a program type to its logic sort.
///
/// Fails for types the encoding cannot model, including types that only
/// contain such a type (e.g. an array of structs).
pub fn smt_sort(ty: &Ty, options: &EncodingOptions) -> Result<Sort, EncodingError> {
    match ty {
        Ty::Bool => Ok(Sort::Bool),
        Ty::Integer { bits, .. } => Ok(sized_int(options, u32::from(*bits))),
        Ty::Rational => Ok(uint256_sort(options)),
        Ty::Address | Ty::Contract(_) => Ok(sized_int(options, 160)),
        Ty::FixedBytes(n) => Ok(sized_int(options, u32::from(*n) * 8)),
        Ty::Enum { .. } => Ok(Sort::Int),
        Ty::Function { params, returns } => {
            let domain = params
                .iter()
                .map(|p| smt_sort_abstract_function(p, options))
                .collect::<Result<Vec<_>, _>>()?;
            let codomain = match returns.as_slice() {
                // A function symbol needs some codomain; Bool is the smallest.
                [] => Sort::Bool,
                [single] => smt_sort_abstract_function(single, options)?,
                _ => uint256_sort(options),
            };
            Ok(Sort::Function {
                domain,
                codomain: Box::new(codomain),
            })
        }
        Ty::StringLiteral(_) | Ty::Bytes | Ty::String => Ok(Sort::Array(
            Box::new(uint256_sort(options)),
            Box::new(sized_int(options, 8)),
        )),
        Ty::Array { base, .. } => Ok(Sort::Array(
            Box::new(uint256_sort(options)),
            Box::new(smt_sort_abstract_function(base, options)?),
        )),
        Ty::Mapping { key, value } => Ok(Sort::Array(
            Box::new(smt_sort_abstract_function(key, options)?),
            Box::new(smt_sort_abstract_function(value, options)?),
        )),
        Ty::Tuple(components) => {
            let components = components
                .iter()
                .map(|c| match c {
                    Some(t) if t.category().is_supported() => {
                        smt_sort_abstract_function(t, options)
                    }
                    _ => Ok(uint256_sort(options)),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Sort::Tuple {
                name: ty.to_string(),
                components,
            })
        }
        Ty::Struct(_) => Err(EncodingError::UnsupportedType(ty.to_string())),
    }
}

/// Like [`smt_sort`], but function types nested inside another sort are
/// abstracted as `uint256`: a sort cannot contain a function symbol.
pub fn smt_sort_abstract_function(
    ty: &Ty,
    options: &EncodingOptions,
) -> Result<Sort, EncodingError> {
    if ty.category().is_function() {
        return Ok(uint256_sort(options));
    }
    smt_sort(ty, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bv() -> EncodingOptions {
        EncodingOptions {
            integers: IntegerEncoding::BitVec,
            ..EncodingOptions::default()
        }
    }

    #[test]
    fn test_scalars_int_encoding() {
        let options = EncodingOptions::default();
        assert_eq!(smt_sort(&Ty::Bool, &options).unwrap(), Sort::Bool);
        assert_eq!(smt_sort(&Ty::uint(8), &options).unwrap(), Sort::Int);
        assert_eq!(smt_sort(&Ty::Address, &options).unwrap(), Sort::Int);
        assert_eq!(smt_sort(&Ty::FixedBytes(4), &options).unwrap(), Sort::Int);
    }

    #[test]
    fn test_scalars_bitvec_encoding() {
        let options = bv();
        assert_eq!(smt_sort(&Ty::int(16), &options).unwrap(), Sort::BitVec(16));
        assert_eq!(smt_sort(&Ty::Address, &options).unwrap(), Sort::BitVec(160));
        assert_eq!(smt_sort(&Ty::FixedBytes(4), &options).unwrap(), Sort::BitVec(32));
        assert_eq!(smt_sort(&Ty::Rational, &options).unwrap(), Sort::BitVec(256));
    }

    #[test]
    fn test_function_sort() {
        let options = EncodingOptions::default();
        let callback = Ty::Function {
            params: vec![],
            returns: vec![],
        };
        let ty = Ty::Function {
            params: vec![Ty::uint(256), callback],
            returns: vec![Ty::Bool],
        };
        assert_eq!(
            smt_sort(&ty, &options).unwrap(),
            Sort::Function {
                domain: vec![Sort::Int, Sort::Int],
                codomain: Box::new(Sort::Bool),
            }
        );

        let no_returns = Ty::Function {
            params: vec![],
            returns: vec![],
        };
        let Sort::Function { codomain, .. } = smt_sort(&no_returns, &options).unwrap() else {
            panic!("expected a function sort");
        };
        assert_eq!(*codomain, Sort::Bool);

        let many = Ty::Function {
            params: vec![],
            returns: vec![Ty::Bool, Ty::Address],
        };
        let Sort::Function { codomain, .. } = smt_sort(&many, &options).unwrap() else {
            panic!("expected a function sort");
        };
        assert_eq!(*codomain, Sort::Int);
    }

    #[test]
    fn test_array_and_mapping_sorts() {
        let options = bv();
        let mapping = Ty::Mapping {
            key: Box::new(Ty::Address),
            value: Box::new(Ty::Bool),
        };
        assert_eq!(
            smt_sort(&mapping, &options).unwrap(),
            Sort::Array(Box::new(Sort::BitVec(160)), Box::new(Sort::Bool))
        );
        assert_eq!(
            smt_sort(&Ty::StringLiteral("hi".into()), &options).unwrap(),
            Sort::Array(Box::new(Sort::BitVec(256)), Box::new(Sort::BitVec(8)))
        );
    }

    #[test]
    fn test_nested_unsupported_type_propagates() {
        let options = EncodingOptions::default();
        let arr = Ty::Array {
            base: Box::new(Ty::Struct("S".into())),
            length: None,
        };
        assert_eq!(
            smt_sort(&arr, &options),
            Err(EncodingError::UnsupportedType("struct S".into()))
        );
    }

    #[test]
    fn test_tuple_sort_abstracts_absent_components() {
        let options = EncodingOptions::default();
        let ty = Ty::Tuple(vec![Some(Ty::Bool), None, Some(Ty::Struct("S".into()))]);
        let sort = smt_sort(&ty, &options).unwrap();
        assert_eq!(
            sort,
            Sort::Tuple {
                name: "tuple(bool,,struct S)".into(),
                components: vec![Sort::Bool, Sort::Int, Sort::Int],
            }
        );
        assert_eq!(sort.to_string(), "|tuple(bool,,struct S)|");
    }

    #[test]
    fn test_display() {
        let sort = Sort::Array(Box::new(Sort::BitVec(256)), Box::new(Sort::Bool));
        assert_eq!(sort.to_string(), "(Array (_ BitVec 256) Bool)");
        assert_eq!(sort.bit_width(), None);
        assert_eq!(Sort::BitVec(160).bit_width(), Some(160));
    }
}
