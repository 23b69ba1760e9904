/// Runtime options for [`DagShortestPath`](crate::algorithm::DagShortestPath).
///
/// The algorithm borrows its graph immutably for its whole lifetime, so a
/// topological order computed by one `compute` call stays valid for every
/// later call on the same instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct DagPathConfig {
    /// Keep the topological order (or the cycle failure) of the first
    /// `compute` call and reuse it for subsequent roots.
    ///
    /// When disabled, every call sorts the whole graph again.
    pub cache_topological_order: bool,
}

impl Default for DagPathConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DagPathConfig {
    /// Default options: the topological order is cached.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cache_topological_order: true,
        }
    }

    /// Enable or disable topological order caching.
    #[must_use]
    pub const fn with_cache_topological_order(mut self, enabled: bool) -> Self {
        self.cache_topological_order = enabled;
        self
    }
}
