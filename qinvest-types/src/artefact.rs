use serde::{Deserialize, Serialize};

/// A source unit (class or package) addressed by its fully-qualified dotted name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artefact {
    /// Fully-qualified name, e.g. `org.project.service.Billing`.
    long_name: String,

    /// Short display name, e.g. `Billing`.
    #[serde(default)]
    short_name: String,
}

impl Artefact {
    pub fn new(long_name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            long_name: long_name.into(),
            short_name: short_name.into(),
        }
    }

    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Relative source path for this artefact.
    ///
    /// Dots become path separators and `extension` is appended, so `org.my.AbcDe` with `java`
    /// becomes `org/my/AbcDe.java`. An empty long name maps to an empty path.
    pub fn filename(&self, extension: &str) -> String {
        if self.long_name.is_empty() {
            return String::new();
        }
        let path = self.long_name.replace('.', "/");
        if extension.is_empty() {
            path
        } else {
            format!("{}.{}", path, extension)
        }
    }
}
