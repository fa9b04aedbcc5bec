use bitflags::bitflags;

bitflags! {
    /// Boolean properties of a function type.
    ///
    /// They all take part in value equality, unlike parameter names and the
    /// originating declaration.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct FunctionFlags: u8 {
        /// Accepts any number of arguments of any type (`abi.encode`, `keccak256`, ...).
        const ARBITRARY_PARAMETERS = 1;
        /// `.gas(...)` has already been applied.
        const GAS_SET = 1 << 1;
        /// `.value(...)` has already been applied.
        const VALUE_SET = 1 << 2;
        /// Bound to its first argument through `using ... for`.
        const BOUND = 1 << 3;
    }
}
