//! SSA-versioned symbolic variables.
//!
//! A program variable is mutable; a solver variable is not. Each
//! [`SymbolicVariable`] therefore stands for an unbounded family of logic
//! variables `name_0`, `name_1`, ..., one per generation, and the driver
//! moves it from one generation to the next as it walks the program:
//!
//! 1. `current_value` reads the logic variable of the current generation
//! 2. `advance` models a write: the next generation becomes current
//! 3. `reset` returns to generation 0 at scope and loop boundaries
//! 4. `value_at_index` reaches any earlier generation, e.g. the pre-state
//!
//! All variants share one record; what differs per variant lives in
//! [`VariableKind`].

use crate::error::EncodingError;
use crate::smt::{smt_sort, EncodingContext, Expr, Sort};
use crate::types::Ty;

mod array;
mod factory;
mod function;
mod ssa;
mod tuple;

pub use factory::new_symbolic_variable;
pub use function::FunctionFacets;
pub use ssa::SsaIndex;

/// Variant-specific part of a symbolic variable.
#[derive(Clone, Debug)]
pub enum VariableKind {
    /// Built from a sort alone; no program type.
    Abstract,
    Bool,
    Integer,
    /// Integer fixed to `uint160`.
    Address,
    /// Integer fixed to `uint(8 * n)`; the `bytesN` type is the original type.
    FixedBytes,
    Mapping,
    Array,
    Enum,
    Function(FunctionFacets),
    /// One slot per tuple component; `None` where the component has no
    /// resolvable or supported type.
    Tuple(Vec<Option<SymbolicVariable>>),
}

impl VariableKind {
    pub fn describe(&self) -> &'static str {
        match self {
            VariableKind::Abstract => "abstract",
            VariableKind::Bool => "bool",
            VariableKind::Integer => "integer",
            VariableKind::Address => "address",
            VariableKind::FixedBytes => "fixed bytes",
            VariableKind::Mapping => "mapping",
            VariableKind::Array => "array",
            VariableKind::Enum => "enum",
            VariableKind::Function(_) => "function",
            VariableKind::Tuple(_) => "tuple",
        }
    }
}

/// A program variable (or synthetic abstraction) and its generations.
#[derive(Clone, Debug)]
pub struct SymbolicVariable {
    sort: Sort,
    /// Representation type the sort was derived from.
    ty: Option<Ty>,
    /// Type results are projected back to; differs from `ty` for fixed bytes
    /// and string literals.
    original_ty: Option<Ty>,
    name: String,
    ssa: SsaIndex,
    kind: VariableKind,
}

fn check_category(
    ok: bool,
    variant: &'static str,
    name: &str,
    ty: &Ty,
) -> Result<(), EncodingError> {
    if ok {
        Ok(())
    } else {
        Err(EncodingError::CategoryMismatch {
            variant,
            name: name.to_string(),
            ty: ty.to_string(),
        })
    }
}

// ─── Construction ──────────────────────────────────────────────────

impl SymbolicVariable {
    /// Record for `ty`, sort derived and base name claimed. The caller has
    /// already validated the category.
    fn typed(
        ty: Ty,
        original_ty: Ty,
        name: String,
        kind: VariableKind,
        ctx: &mut EncodingContext,
    ) -> Result<Self, EncodingError> {
        let sort = smt_sort(&ty, ctx.options())?;
        ctx.reserve(&name)?;
        Ok(Self::unreserved(sort, Some(ty), Some(original_ty), name, kind).logged())
    }

    fn unreserved(
        sort: Sort,
        ty: Option<Ty>,
        original_ty: Option<Ty>,
        name: String,
        kind: VariableKind,
    ) -> Self {
        Self {
            sort,
            ty,
            original_ty,
            name,
            ssa: SsaIndex::new(),
            kind,
        }
    }

    fn logged(self) -> Self {
        tracing::debug!(
            name = %self.name,
            kind = self.kind.describe(),
            sort = %self.sort,
            "created symbolic variable"
        );
        self
    }

    /// A sort-only abstraction with no program-level counterpart.
    pub fn abstract_with_sort(
        sort: Sort,
        name: impl Into<String>,
        ctx: &mut EncodingContext,
    ) -> Result<Self, EncodingError> {
        let name = name.into();
        ctx.reserve(&name)?;
        Ok(Self::unreserved(sort, None, None, name, VariableKind::Abstract).logged())
    }

    pub fn boolean(
        ty: Ty,
        name: impl Into<String>,
        ctx: &mut EncodingContext,
    ) -> Result<Self, EncodingError> {
        let name = name.into();
        check_category(ty.category().is_bool(), "bool", &name, &ty)?;
        Self::typed(ty.clone(), ty, name, VariableKind::Bool, ctx)
    }

    /// Any number-like type: integers, rationals, addresses, contracts and
    /// fixed bytes, modeled by `ty` and projected back to `original_ty`.
    pub fn integer(
        ty: Ty,
        original_ty: Ty,
        name: impl Into<String>,
        ctx: &mut EncodingContext,
    ) -> Result<Self, EncodingError> {
        let name = name.into();
        check_category(ty.category().is_number(), "integer", &name, &ty)?;
        Self::typed(ty, original_ty, name, VariableKind::Integer, ctx)
    }

    /// An address, always represented as `uint160`.
    pub fn address(
        name: impl Into<String>,
        ctx: &mut EncodingContext,
    ) -> Result<Self, EncodingError> {
        Self::typed(
            Ty::uint(160),
            Ty::uint(160),
            name.into(),
            VariableKind::Address,
            ctx,
        )
    }

    /// A `bytesN` value, represented as `uint(8 * num_bytes)`.
    pub fn fixed_bytes(
        original_ty: Ty,
        num_bytes: u32,
        name: impl Into<String>,
        ctx: &mut EncodingContext,
    ) -> Result<Self, EncodingError> {
        let name = name.into();
        if !(1..=32).contains(&num_bytes) {
            return Err(EncodingError::InvalidByteWidth {
                name,
                bytes: num_bytes,
            });
        }
        // 1..=32 bytes is at most 256 bits.
        let bits = (num_bytes * 8) as u16;
        Self::typed(
            Ty::uint(bits),
            original_ty,
            name,
            VariableKind::FixedBytes,
            ctx,
        )
    }

    pub fn mapping(
        ty: Ty,
        name: impl Into<String>,
        ctx: &mut EncodingContext,
    ) -> Result<Self, EncodingError> {
        let name = name.into();
        check_category(ty.category().is_mapping(), "mapping", &name, &ty)?;
        Self::typed(ty.clone(), ty, name, VariableKind::Mapping, ctx)
    }

    pub fn enumeration(
        ty: Ty,
        name: impl Into<String>,
        ctx: &mut EncodingContext,
    ) -> Result<Self, EncodingError> {
        let name = name.into();
        check_category(ty.category().is_enum(), "enum", &name, &ty)?;
        Self::typed(ty.clone(), ty, name, VariableKind::Enum, ctx)
    }
}

// ─── Generations ───────────────────────────────────────────────────

impl SymbolicVariable {
    /// Logic expression for the current generation.
    ///
    /// `target` is the type the value is about to be used as; only arrays
    /// holding a string literal look at it.
    pub fn current_value(
        &self,
        ctx: &mut EncodingContext,
        target: Option<&Ty>,
    ) -> Result<Expr, EncodingError> {
        match &self.kind {
            VariableKind::Function(facets) => facets.value.current_value(ctx, target),
            VariableKind::Array => self.array_current_value(ctx, target),
            _ => self.own_value_at_index(ctx, self.ssa.index()),
        }
    }

    pub fn current_name(&self) -> String {
        self.unique_symbol(self.ssa.index())
    }

    /// Logic expression for generation `index`, which may be a past one.
    pub fn value_at_index(
        &self,
        ctx: &mut EncodingContext,
        index: u32,
    ) -> Result<Expr, EncodingError> {
        match &self.kind {
            VariableKind::Function(facets) => facets.value.value_at_index(ctx, index),
            _ => self.own_value_at_index(ctx, index),
        }
    }

    pub fn name_at_index(&self, index: u32) -> String {
        self.unique_symbol(index)
    }

    /// Go back to generation 0 and return the value there.
    pub fn reset(&mut self, ctx: &mut EncodingContext) -> Result<Expr, EncodingError> {
        let value = self.move_to(ctx, SsaIndex::new(), Self::reset)?;
        tracing::trace!(name = %self.name, "reset generation");
        Ok(value)
    }

    /// Model one write: move to the next generation and return its value.
    pub fn advance(&mut self, ctx: &mut EncodingContext) -> Result<Expr, EncodingError> {
        let mut next = self.ssa;
        next.advance();
        let value = self.move_to(ctx, next, Self::advance)?;
        tracing::trace!(name = %self.name, index = self.ssa.index(), "advanced generation");
        Ok(value)
    }

    /// Issue every symbol generation `next` needs, then make it current.
    /// On error the variable stays at its old generation.
    fn move_to(
        &mut self,
        ctx: &mut EncodingContext,
        next: SsaIndex,
        step_value_facet: fn(&mut Self, &mut EncodingContext) -> Result<Expr, EncodingError>,
    ) -> Result<Expr, EncodingError> {
        let symbol = self.unique_symbol(next.index());
        let value = match &mut self.kind {
            VariableKind::Function(facets) => {
                let declaration = ctx.new_variable(&symbol, &self.sort)?;
                let value = step_value_facet(&mut *facets.value, ctx)?;
                facets.declaration = declaration;
                value
            }
            _ => ctx.new_variable(&symbol, &self.sort)?,
        };
        self.ssa = next;
        Ok(value)
    }

    /// The base record's own variable at `index`, bypassing variant overrides.
    fn own_value_at_index(
        &self,
        ctx: &mut EncodingContext,
        index: u32,
    ) -> Result<Expr, EncodingError> {
        ctx.new_variable(&self.unique_symbol(index), &self.sort)
    }

    fn unique_symbol(&self, index: u32) -> String {
        format!("{}_{}", self.name, index)
    }
}

// ─── Accessors ─────────────────────────────────────────────────────

impl SymbolicVariable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sort(&self) -> &Sort {
        &self.sort
    }

    pub fn ty(&self) -> Option<&Ty> {
        self.ty.as_ref()
    }

    pub fn original_ty(&self) -> Option<&Ty> {
        self.original_ty.as_ref()
    }

    /// Current generation.
    pub fn index(&self) -> u32 {
        self.ssa.index()
    }

    pub fn kind(&self) -> &VariableKind {
        &self.kind
    }

    /// Integer, address and fixed-bytes variables are all integers.
    pub fn is_integer(&self) -> bool {
        matches!(
            self.kind,
            VariableKind::Integer | VariableKind::Address | VariableKind::FixedBytes
        )
    }

    /// Width of the integer representation type, independent of the
    /// integer encoding in use.
    pub fn bit_width(&self) -> Option<u32> {
        if !self.is_integer() {
            return None;
        }
        self.ty.as_ref().and_then(Ty::bit_width)
    }

    fn wrong_variant(&self, expected: &'static str) -> EncodingError {
        EncodingError::WrongVariant {
            name: self.name.clone(),
            expected,
            found: self.kind.describe(),
        }
    }
}
