//! Configuration for the function table.

/// Configuration shared by every call made through a [`FuncTable`].
///
/// [`FuncTable`]: crate::FuncTable
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuncsConfig {
    /// Seed for each [`Scope`]'s random generator; `None` draws from entropy.
    ///
    /// [`Scope`]: crate::Scope
    pub seed: Option<u64>,

    /// Site root used by `urls.AbsURL` and stripped by `urls.RelURL`.
    pub base_url: String,

    /// Suffix appended by `strings.Truncate` when no suffix is given.
    pub truncate_ellipsis: String,

    /// Extra `chrono` format strings tried by `time.AsTime` after RFC 3339.
    pub time_formats: Vec<String>,
}

impl Default for FuncsConfig {
    fn default() -> Self {
        Self {
            seed: None,
            base_url: "http://localhost".to_string(),
            truncate_ellipsis: "…".to_string(),
            time_formats: vec![
                "%Y-%m-%d %H:%M:%S%.f %z".to_string(),
                "%Y-%m-%dT%H:%M:%S%.f".to_string(),
                "%Y-%m-%d %H:%M:%S".to_string(),
                "%Y-%m-%d".to_string(),
            ],
        }
    }
}

impl FuncsConfig {
    /// Creates a configuration whose scopes are reproducible from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Builder method to set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method to set the site root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builder method to set the truncation suffix.
    #[must_use]
    pub fn with_truncate_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.truncate_ellipsis = ellipsis.into();
        self
    }

    /// Builder method to add a time format tried by `time.AsTime`.
    #[must_use]
    pub fn with_time_format(mut self, format: impl Into<String>) -> Self {
        self.time_formats.push(format.into());
        self
    }
}
