use crate::projection::CategoryMap;

/// The narrow imperative API the engine drives a renderer through.
///
/// The engine owns no rendering internals; it only hands over the category
/// partition and, occasionally, a set of elements to bring into view.
pub trait PresentationSurface {
    /// Restyles every element according to the given partition.
    fn apply_categories(&mut self, categories: &CategoryMap);

    /// Brings the given elements into view.
    fn focus(&mut self, element_ids: &[String]);
}
