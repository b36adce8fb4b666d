use super::*;

impl SymbolicVariable {
    /// A tuple and one child variable per component, named
    /// `name_component_<i>`.
    ///
    /// Components without a type, or of a category the encoder cannot
    /// model, keep an empty slot so positions stay aligned with the type.
    /// Any other failure while building a component fails the whole tuple
    /// and leaves the session as it was.
    pub fn tuple(
        ty: Ty,
        name: impl Into<String>,
        ctx: &mut EncodingContext,
    ) -> Result<Self, EncodingError> {
        let name = name.into();
        check_category(ty.category().is_tuple(), "tuple", &name, &ty)?;
        let component_types = match &ty {
            Ty::Tuple(components) => components.clone(),
            _ => Vec::new(),
        };

        let checkpoint = ctx.checkpoint();
        let built = Self::tuple_parts(ty, &component_types, name, ctx);
        if built.is_err() {
            ctx.rollback(checkpoint);
        }
        built
    }

    fn tuple_parts(
        ty: Ty,
        component_types: &[Option<Ty>],
        name: String,
        ctx: &mut EncodingContext,
    ) -> Result<Self, EncodingError> {
        let mut tuple = Self::typed(ty.clone(), ty, name, VariableKind::Tuple(Vec::new()), ctx)?;

        let mut components = Vec::with_capacity(component_types.len());
        for (i, component) in component_types.iter().enumerate() {
            let slot = match component {
                Some(t) if t.category().is_supported() => {
                    let component_name = format!("{}_component_{}", tuple.name, i);
                    Some(new_symbolic_variable(t, component_name, ctx)?)
                }
                _ => None,
            };
            components.push(slot);
        }

        tuple.kind = VariableKind::Tuple(components);
        Ok(tuple)
    }

    pub fn components(&self) -> Result<&[Option<SymbolicVariable>], EncodingError> {
        match &self.kind {
            VariableKind::Tuple(components) => Ok(components),
            _ => Err(self.wrong_variant("tuple")),
        }
    }

    /// Component `i`; `None` for an empty slot or a position past the end.
    pub fn component(&self, i: usize) -> Result<Option<&SymbolicVariable>, EncodingError> {
        Ok(self.components()?.get(i).and_then(Option::as_ref))
    }

    pub fn component_mut(
        &mut self,
        i: usize,
    ) -> Result<Option<&mut SymbolicVariable>, EncodingError> {
        let found = self.kind.describe();
        match &mut self.kind {
            VariableKind::Tuple(components) => Ok(components.get_mut(i).and_then(Option::as_mut)),
            _ => Err(EncodingError::WrongVariant {
                name: self.name.clone(),
                expected: "tuple",
                found,
            }),
        }
    }
}
