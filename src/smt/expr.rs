use std::fmt;

use num_bigint::BigUint;

use crate::error::EncodingError;

use super::quote_symbol;
use super::sort::Sort;

/// A solver-facing logic expression.
///
/// Only the shapes the encoding layer itself produces are represented:
/// session variables, numeric constants, and applications of function
/// symbols. Operator constraints are built elsewhere.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A variable registered with the encoding session.
    Var { name: String, sort: Sort },
    /// A numeric constant of an `Int` or `BitVec` sort.
    Const { value: BigUint, sort: Sort },
    /// Application of a function symbol to arguments.
    App {
        function: String,
        args: Vec<Expr>,
        sort: Sort,
    },
}

impl Expr {
    pub fn sort(&self) -> &Sort {
        match self {
            Expr::Var { sort, .. } | Expr::Const { sort, .. } | Expr::App { sort, .. } => sort,
        }
    }

    /// Symbol name of a variable, `None` for constants and applications.
    pub fn name(&self) -> Option<&str> {
        match self {
            Expr::Var { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Apply a function-sorted variable to `args`.
    pub fn apply(&self, args: Vec<Expr>) -> Result<Expr, EncodingError> {
        let (name, sort) = match self {
            Expr::Var { name, sort } => (name, sort),
            other => {
                return Err(EncodingError::NotAFunctionSort {
                    name: other.to_string(),
                    sort: other.sort().to_string(),
                })
            }
        };
        let Sort::Function { domain, codomain } = sort else {
            return Err(EncodingError::NotAFunctionSort {
                name: name.clone(),
                sort: sort.to_string(),
            });
        };
        if domain.len() != args.len() {
            return Err(EncodingError::ArityMismatch {
                name: name.clone(),
                expected: domain.len(),
                found: args.len(),
            });
        }
        Ok(Expr::App {
            function: name.clone(),
            args,
            sort: (**codomain).clone(),
        })
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var { name, .. } => write!(f, "{}", quote_symbol(name)),
            Expr::Const { value, sort } => match sort {
                Sort::BitVec(width) => write!(f, "(_ bv{} {})", value, width),
                _ => write!(f, "{}", value),
            },
            Expr::App { function, args, .. } => {
                if args.is_empty() {
                    return write!(f, "{}", quote_symbol(function));
                }
                write!(f, "({}", quote_symbol(function))?;
                for arg in args {
                    write!(f, " {}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str, sort: Sort) -> Expr {
        Expr::Var {
            name: name.to_string(),
            sort,
        }
    }

    fn f_sort() -> Sort {
        Sort::Function {
            domain: vec![Sort::Int, Sort::Bool],
            codomain: Box::new(Sort::Int),
        }
    }

    #[test]
    fn test_apply() {
        let f = var("f_0", f_sort());
        let app = f
            .apply(vec![
                Expr::Const {
                    value: BigUint::from(7u32),
                    sort: Sort::Int,
                },
                var("b_1", Sort::Bool),
            ])
            .unwrap();
        assert_eq!(app.sort(), &Sort::Int);
        assert_eq!(app.to_string(), "(f_0 7 b_1)");
    }

    #[test]
    fn test_apply_arity_mismatch() {
        let f = var("f_0", f_sort());
        assert_eq!(
            f.apply(vec![]),
            Err(EncodingError::ArityMismatch {
                name: "f_0".into(),
                expected: 2,
                found: 0,
            })
        );
    }

    #[test]
    fn test_apply_non_function() {
        let x = var("x_0", Sort::Int);
        assert!(matches!(
            x.apply(vec![]),
            Err(EncodingError::NotAFunctionSort { .. })
        ));
    }

    #[test]
    fn test_bitvec_constant_display() {
        let c = Expr::Const {
            value: BigUint::from(0x6869u32),
            sort: Sort::BitVec(16),
        };
        assert_eq!(c.to_string(), "(_ bv26729 16)");
        assert_eq!(c.name(), None);
    }
}
