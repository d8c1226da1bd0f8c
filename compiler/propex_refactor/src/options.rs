//! Tunables of the rewrites.

/// Naming and visibility used for synthesized syntax.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefactorOptions {
    /// Prefix of derived backing-field names.
    pub field_prefix: String,
    /// Visibility keyword of inserted fields and synthesized accessors.
    pub visibility: String,
}

impl Default for RefactorOptions {
    fn default() -> Self {
        RefactorOptions {
            field_prefix: "_".to_owned(),
            visibility: "private".to_owned(),
        }
    }
}

impl RefactorOptions {
    /// Backing-field name for a property under these options.
    pub fn field_name(&self, property: &str) -> String {
        crate::naming::derive_field_name(&self.field_prefix, property)
    }
}
