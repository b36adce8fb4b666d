/// SSA generation counter of one symbolic variable.
///
/// Starts at 0, moves up by one per modeled write, and only goes back to 0
/// through an explicit reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SsaIndex(u32);

impl SsaIndex {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn index(&self) -> u32 {
        self.0
    }

    pub fn advance(&mut self) {
        self.0 += 1;
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(SsaIndex::new().index(), 0);
        assert_eq!(SsaIndex::default(), SsaIndex::new());
    }

    #[test]
    fn test_advance_and_reset() {
        let mut ssa = SsaIndex::new();
        ssa.advance();
        ssa.advance();
        ssa.advance();
        assert_eq!(ssa.index(), 3);
        ssa.reset();
        assert_eq!(ssa.index(), 0);
        ssa.advance();
        assert_eq!(ssa.index(), 1);
    }
}
