use qinvest_types::artefact::Artefact;

/// Returns true if `artefact` lies in the subtree named by `base_package`.
///
/// Matches the name itself or anything below it at a dot boundary, so `org.project` matches
/// `org.project` and `org.project.B` but never `org.projectX`.
pub fn include(base_package: &str, artefact: &Artefact) -> bool {
    if base_package.is_empty() {
        return true;
    }
    let name = artefact.long_name();
    match name.strip_prefix(base_package) {
        Some(rest) => rest.is_empty() || rest.starts_with('.'),
        None => false,
    }
}

/// A reusable subtree filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtefactFilter {
    base_package: String,
}

impl ArtefactFilter {
    pub fn new(base_package: impl Into<String>) -> Self {
        Self {
            base_package: base_package.into(),
        }
    }

    /// `None` means no filter.
    pub fn from_option(base_package: Option<&str>) -> Self {
        Self::new(base_package.unwrap_or_default())
    }

    pub fn base_package(&self) -> &str {
        &self.base_package
    }

    pub fn is_unfiltered(&self) -> bool {
        self.base_package.is_empty()
    }

    pub fn includes(&self, artefact: &Artefact) -> bool {
        include(&self.base_package, artefact)
    }
}
