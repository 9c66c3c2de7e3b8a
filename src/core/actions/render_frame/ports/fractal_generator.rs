use crate::core::data::view_range::ViewRange;

/// Capability supplied by each fractal variant.
///
/// Implementations are stateless with respect to session data: the viewing
/// rectangle is owned by the caller, and the recenter-and-zoom transform is
/// range-only arithmetic shared by all variants (see
/// [`ViewRange::recenter_and_zoom`]).
pub trait FractalGenerator {
    /// The plane rectangle that frames this fractal with some margin.
    fn default_range(&self) -> ViewRange;

    /// Escape-time query for the plane point `(x, y)`.
    ///
    /// `Some(n)` means the point escaped after `n` iterations; `None` means
    /// the iteration budget ran out and the point is presumed to belong to
    /// the set.
    fn num_iterations(&self, x: f64, y: f64) -> Option<u32>;

    /// Human-readable variant name, used only for labeling.
    fn display_name(&self) -> &str;
}
