//! Logic-level side of the encoding: sorts, expressions and the session
//! that issues solver variables.
//!
//! Everything here renders to SMT-LIB2 so that a driver can hand the
//! declarations to any solver; invoking one is not this crate's job.

mod context;
mod expr;
mod sort;

pub use context::EncodingContext;
pub use expr::Expr;
pub use sort::{smt_sort, smt_sort_abstract_function, uint256_sort, Sort, SortKind};

/// Render `name` as an SMT-LIB symbol, `|quoting|` it unless it is a
/// simple symbol.
pub fn quote_symbol(name: &str) -> String {
    const EXTRA: &str = "~!@$%^&*_-+=<>.?/";
    let simple = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || EXTRA.contains(c));
    if simple {
        name.to_string()
    } else {
        format!("|{}|", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_symbol() {
        assert_eq!(quote_symbol("x_0"), "x_0");
        assert_eq!(quote_symbol("balance_component_1_3"), "balance_component_1_3");
        assert_eq!(quote_symbol("0x"), "|0x|");
        assert_eq!(quote_symbol("tuple(uint8,bool)"), "|tuple(uint8,bool)|");
        assert_eq!(quote_symbol(""), "||");
    }
}
