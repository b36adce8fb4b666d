use num_bigint::BigUint;

use super::*;

impl SymbolicVariable {
    pub fn array(
        ty: Ty,
        original_ty: Ty,
        name: impl Into<String>,
        ctx: &mut EncodingContext,
    ) -> Result<Self, EncodingError> {
        let name = name.into();
        check_category(ty.category().is_array(), "array", &name, &ty)?;
        Self::typed(ty, original_ty, name, VariableKind::Array, ctx)
    }

    /// String literals are arrays in general, but compared with or assigned
    /// to `bytesN` they are the number spelled by their bytes. A literal has
    /// no generations: the value is the literal itself.
    pub(super) fn array_current_value(
        &self,
        ctx: &mut EncodingContext,
        target: Option<&Ty>,
    ) -> Result<Expr, EncodingError> {
        if let (Some(Ty::StringLiteral(literal)), Some(target @ Ty::FixedBytes(bytes))) =
            (&self.original_ty, target)
        {
            if literal.len() > usize::from(*bytes) {
                return Err(EncodingError::LiteralTooWide {
                    name: self.name.clone(),
                    len: literal.len(),
                    bytes: *bytes,
                });
            }
            return Ok(Expr::Const {
                value: BigUint::from_bytes_be(literal.as_bytes()),
                sort: smt_sort(target, ctx.options())?,
            });
        }
        self.own_value_at_index(ctx, self.ssa.index())
    }
}
