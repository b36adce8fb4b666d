use super::*;
use crate::smt::SortKind;

/// The two independently versioned tracks of a function variable.
///
/// `declaration` follows the owning variable's own generation: it is the
/// applicable symbol `name_<gen>` and is re-issued whenever that generation
/// changes, so an application built after a write can never hit the symbol
/// from before it. `value` is the function seen as ordinary data (e.g. a
/// function-typed variable being reassigned) and keeps its own counter,
/// under the base name `name_abstract`.
#[derive(Clone, Debug)]
pub struct FunctionFacets {
    pub(super) declaration: Expr,
    pub(super) value: Box<SymbolicVariable>,
}

impl SymbolicVariable {
    pub fn function(
        ty: Ty,
        name: impl Into<String>,
        ctx: &mut EncodingContext,
    ) -> Result<Self, EncodingError> {
        let name = name.into();
        check_category(ty.category().is_function(), "function", &name, &ty)?;
        let sort = smt_sort(&ty, ctx.options())?;
        Self::new_function(sort, Some(ty), name, ctx)
    }

    /// A function abstraction built directly from a function sort.
    pub fn function_with_sort(
        sort: Sort,
        name: impl Into<String>,
        ctx: &mut EncodingContext,
    ) -> Result<Self, EncodingError> {
        let name = name.into();
        if sort.kind() != SortKind::Function {
            return Err(EncodingError::NotAFunctionSort {
                name,
                sort: sort.to_string(),
            });
        }
        Self::new_function(sort, None, name, ctx)
    }

    fn new_function(
        sort: Sort,
        ty: Option<Ty>,
        name: String,
        ctx: &mut EncodingContext,
    ) -> Result<Self, EncodingError> {
        let checkpoint = ctx.checkpoint();
        let built = Self::function_parts(sort, ty, name, ctx);
        if built.is_err() {
            ctx.rollback(checkpoint);
        }
        built
    }

    fn function_parts(
        sort: Sort,
        ty: Option<Ty>,
        name: String,
        ctx: &mut EncodingContext,
    ) -> Result<Self, EncodingError> {
        ctx.reserve(&name)?;
        let value = Self::abstract_with_sort(sort.clone(), format!("{}_abstract", name), ctx)?;
        let declaration = ctx.new_variable(&format!("{}_0", name), &sort)?;
        let facets = FunctionFacets {
            declaration,
            value: Box::new(value),
        };
        Ok(Self::unreserved(
            sort,
            ty.clone(),
            ty,
            name,
            VariableKind::Function(facets),
        )
        .logged())
    }

    fn facets(&self) -> Result<&FunctionFacets, EncodingError> {
        match &self.kind {
            VariableKind::Function(facets) => Ok(facets),
            _ => Err(self.wrong_variant("function")),
        }
    }

    /// The applicable declaration of the current generation.
    pub fn current_function_value(&self) -> Result<&Expr, EncodingError> {
        Ok(&self.facets()?.declaration)
    }

    /// The declaration issued for generation `index`.
    pub fn function_value_at_index(
        &self,
        ctx: &mut EncodingContext,
        index: u32,
    ) -> Result<Expr, EncodingError> {
        self.facets()?;
        self.own_value_at_index(ctx, index)
    }

    /// The value facet, i.e. the function treated as first-class data.
    pub fn value_facet(&self) -> Result<&SymbolicVariable, EncodingError> {
        Ok(&self.facets()?.value)
    }

    /// Apply the current declaration to `args`.
    pub fn apply(&self, args: Vec<Expr>) -> Result<Expr, EncodingError> {
        self.facets()?.declaration.apply(args)
    }
}
