use super::*;
use crate::types::TypeCategory;

/// Build the symbolic variable variant that models `ty`.
///
/// String literals become arrays over `string` that remember the literal as
/// their original type. Types the encoder cannot model are rejected, never
/// replaced by a default encoding.
pub fn new_symbolic_variable(
    ty: &Ty,
    name: impl Into<String>,
    ctx: &mut EncodingContext,
) -> Result<SymbolicVariable, EncodingError> {
    let name = name.into();
    match ty.category() {
        TypeCategory::Bool => SymbolicVariable::boolean(ty.clone(), name, ctx),
        TypeCategory::Function => SymbolicVariable::function(ty.clone(), name, ctx),
        TypeCategory::Address => SymbolicVariable::address(name, ctx),
        TypeCategory::FixedBytes => {
            let bytes = ty.bit_width().map(|bits| bits / 8).unwrap_or(0);
            SymbolicVariable::fixed_bytes(ty.clone(), bytes, name, ctx)
        }
        TypeCategory::Integer | TypeCategory::Rational | TypeCategory::Contract => {
            SymbolicVariable::integer(ty.clone(), ty.clone(), name, ctx)
        }
        TypeCategory::Enum => SymbolicVariable::enumeration(ty.clone(), name, ctx),
        TypeCategory::Mapping => SymbolicVariable::mapping(ty.clone(), name, ctx),
        TypeCategory::StringLiteral => SymbolicVariable::array(Ty::String, ty.clone(), name, ctx),
        TypeCategory::Array => SymbolicVariable::array(ty.clone(), ty.clone(), name, ctx),
        TypeCategory::Tuple => SymbolicVariable::tuple(ty.clone(), name, ctx),
        TypeCategory::Struct => Err(EncodingError::UnsupportedType(ty.to_string())),
    }
}
