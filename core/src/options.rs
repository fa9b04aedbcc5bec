/// Configuration of a [`TypeProvider`](crate::TypeProvider).
///
/// These are sizing hints only; they never change which objects are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderOptions {
    /// Initial capacity of the string literal table.
    pub string_literal_capacity: usize,
    /// Initial capacity of each declaration-keyed store (contracts, enums,
    /// structs, mappings, `type(T)`).
    pub declaration_capacity: usize,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            string_literal_capacity: 64,
            declaration_capacity: 16,
        }
    }
}

impl ProviderOptions {
    pub fn override_with(&mut self, overrides: &ProviderOptionsOverride) {
        if let Some(capacity) = overrides.string_literal_capacity {
            self.string_literal_capacity = capacity;
        }
        if let Some(capacity) = overrides.declaration_capacity {
            self.declaration_capacity = capacity;
        }
    }
}

/// Partial [`ProviderOptions`]; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderOptionsOverride {
    pub string_literal_capacity: Option<usize>,
    pub declaration_capacity: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_with() {
        let mut options = ProviderOptions::default();
        options.override_with(&ProviderOptionsOverride {
            declaration_capacity: Some(4),
            ..Default::default()
        });
        assert_eq!(options.declaration_capacity, 4);
        assert_eq!(options.string_literal_capacity, 64);
    }
}
