use std::collections::{HashMap, HashSet};

use crate::config::EncodingOptions;
use crate::error::EncodingError;

use super::expr::Expr;
use super::quote_symbol;
use super::sort::Sort;

/// Session state marker, see [`EncodingContext::checkpoint`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct Checkpoint {
    owners: usize,
    declarations: usize,
}

/// The encoding session: the single authority that issues solver-facing
/// variables for one verification run.
///
/// Symbolic variables never hold on to the session; every operation that
/// may register a symbol borrows it mutably for the duration of the call.
#[derive(Debug, Default)]
pub struct EncodingContext {
    options: EncodingOptions,
    /// Base names claimed by symbolic variables.
    owners: HashSet<String>,
    /// `owners` in claim order, for rollback.
    owner_log: Vec<String>,
    /// Symbol name → position in `declarations`.
    symbols: HashMap<String, usize>,
    /// Registered symbols in registration order.
    declarations: Vec<(String, Sort)>,
}

impl EncodingContext {
    pub fn new(options: EncodingOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &EncodingOptions {
        &self.options
    }

    /// Claim `base_name` for a new symbolic variable.
    pub fn reserve(&mut self, base_name: &str) -> Result<(), EncodingError> {
        let fresh = self.owners.insert(base_name.to_string());
        if fresh {
            self.owner_log.push(base_name.to_string());
        } else if self.options.check_collisions {
            return Err(EncodingError::DuplicateName(base_name.to_string()));
        }
        Ok(())
    }

    /// Mark the current session state so a failed composite construction
    /// can be undone with [`EncodingContext::rollback`].
    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            owners: self.owner_log.len(),
            declarations: self.declarations.len(),
        }
    }

    /// Forget every base name and symbol registered since `checkpoint`.
    pub(crate) fn rollback(&mut self, checkpoint: Checkpoint) {
        for owner in self.owner_log.drain(checkpoint.owners..) {
            self.owners.remove(&owner);
        }
        for (name, _) in self.declarations.drain(checkpoint.declarations..) {
            self.symbols.remove(&name);
        }
    }

    pub fn is_reserved(&self, base_name: &str) -> bool {
        self.owners.contains(base_name)
    }

    /// Register (or look up) the logic variable `name` of sort `sort`.
    ///
    /// Asking again for the same name and sort yields an equal expression,
    /// so historical generations always resolve to the same object. Asking
    /// for a known name with a different sort is a naming collision.
    pub fn new_variable(&mut self, name: &str, sort: &Sort) -> Result<Expr, EncodingError> {
        match self.symbols.get(name) {
            Some(&idx) => {
                let existing = &self.declarations[idx].1;
                if existing != sort {
                    return Err(EncodingError::SortMismatch {
                        name: name.to_string(),
                        existing: existing.to_string(),
                        requested: sort.to_string(),
                    });
                }
            }
            None => {
                tracing::trace!(name, %sort, "registering symbol");
                self.symbols
                    .insert(name.to_string(), self.declarations.len());
                self.declarations.push((name.to_string(), sort.clone()));
            }
        }
        Ok(Expr::Var {
            name: name.to_string(),
            sort: sort.clone(),
        })
    }

    pub fn sort_of(&self, name: &str) -> Option<&Sort> {
        self.symbols.get(name).map(|&idx| &self.declarations[idx].1)
    }

    /// Registered symbols, in registration order.
    pub fn declarations(&self) -> impl Iterator<Item = (&str, &Sort)> {
        self.declarations.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// SMT-LIB2 declarations for every registered symbol, preceded by the
    /// datatype declarations of the tuple sorts they mention.
    pub fn to_smtlib(&self) -> String {
        let mut out = String::new();

        let mut tuples = Vec::new();
        for (_, sort) in &self.declarations {
            sort.collect_tuples(&mut tuples);
        }
        for tuple in tuples {
            if let Sort::Tuple { name, components } = tuple {
                let fields: Vec<String> = components
                    .iter()
                    .enumerate()
                    .map(|(i, s)| {
                        let accessor = format!("{}_accessor_{}", name, i);
                        format!("({} {})", quote_symbol(&accessor), s)
                    })
                    .collect();
                out.push_str(&format!(
                    "(declare-datatypes (({} 0)) ((({} {}))))\n",
                    quote_symbol(name),
                    quote_symbol(&format!("mk_{}", name)),
                    fields.join(" ")
                ));
            }
        }

        for (name, sort) in &self.declarations {
            let (domain, codomain) = match sort {
                Sort::Function { domain, codomain } => (
                    domain.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                    codomain.to_string(),
                ),
                other => (Vec::new(), other.to_string()),
            };
            out.push_str(&format!(
                "(declare-fun {} ({}) {})\n",
                quote_symbol(name),
                domain.join(" "),
                codomain
            ));
        }
        out
    }
}
