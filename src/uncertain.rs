use crate::computation::{ComputationNode, UnaryOperation};
use crate::distributions::Distribution;
use crate::support::Support;
use rand::Rng;
use std::sync::Arc;

/// A scalar quantity represented as a probability distribution, using
/// sampling-based computation.
///
/// `UncertainValue` pairs a lazily evaluated computation graph with the
/// interval of values the graph can produce. Arithmetic never collapses the
/// distribution: combining two values yields a new value whose samples are the
/// pointwise results of independent draws from the operands. A certain number
/// is the degenerate case and goes through exactly the same code path.
#[derive(Clone)]
pub struct UncertainValue {
    /// The computation graph node for lazy evaluation
    pub(crate) node: Arc<ComputationNode>,
    /// Bounds of every value `node` can evaluate to
    support: Support,
}

impl UncertainValue {
    pub(crate) fn leaf(distribution: Distribution) -> Self {
        let support = distribution.support();
        Self {
            node: Arc::new(ComputationNode::leaf(distribution)),
            support,
        }
    }

    /// Internal constructor with computation node for building computation graphs
    pub(crate) fn with_node(node: ComputationNode, support: Support) -> Self {
        Self {
            node: Arc::new(node),
            support,
        }
    }

    pub(crate) fn unary(&self, operation: UnaryOperation) -> Self {
        let support = operation.support(&self.support);
        Self::with_node(
            ComputationNode::UnaryOp {
                operand: self.node.clone(),
                operation,
            },
            support,
        )
    }

    /// Interval containing every possible sample.
    #[must_use]
    pub fn support(&self) -> Support {
        self.support
    }

    /// Whether the value carries no uncertainty at all.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.support.is_degenerate()
    }

    /// The exact value of a degenerate quantity.
    ///
    /// # Example
    /// ```rust
    /// use airfoil_lift::UncertainValue;
    ///
    /// let product = UncertainValue::point(5.0) * UncertainValue::point(3.0);
    /// assert_eq!(product.point_value(), Some(15.0));
    /// ```
    #[must_use]
    pub fn point_value(&self) -> Option<f64> {
        self.is_degenerate().then_some(self.support.lower)
    }

    /// The distribution this value was constructed from, if it is a leaf.
    ///
    /// Values produced by arithmetic return `None`.
    #[must_use]
    pub fn distribution(&self) -> Option<&Distribution> {
        match self.node.as_ref() {
            ComputationNode::Leaf { distribution, .. } => Some(distribution),
            _ => None,
        }
    }

    /// Generate a sample from this distribution using the thread-local RNG
    ///
    /// # Example
    /// ```rust
    /// use airfoil_lift::UncertainValue;
    ///
    /// let normal = UncertainValue::normal(0.0, 1.0).unwrap();
    /// let sample = normal.sample();
    /// println!("Sample: {}", sample);
    /// ```
    #[must_use]
    pub fn sample(&self) -> f64 {
        self.sample_with(&mut rand::rng())
    }

    /// Generate a sample from this distribution with the given RNG
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.node.evaluate_fresh(rng)
    }

    /// Generate an iterator of samples
    ///
    /// # Example
    /// ```rust
    /// use airfoil_lift::UncertainValue;
    ///
    /// let normal = UncertainValue::normal(0.0, 1.0).unwrap();
    /// let first_10: Vec<f64> = normal.samples().take(10).collect();
    /// ```
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        let mut rng = rand::rng();
        std::iter::repeat_with(move || self.sample_with(&mut rng))
    }

    /// Take a specific number of samples
    #[must_use]
    pub fn take_samples(&self, count: usize) -> Vec<f64> {
        self.samples().take(count).collect()
    }

    /// Take a specific number of samples with the given RNG
    pub fn take_samples_with<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<f64> {
        (0..count).map(|_| self.sample_with(rng)).collect()
    }

    /// Take samples in parallel, one thread-local RNG per worker
    #[cfg(feature = "parallel")]
    #[must_use]
    pub fn take_samples_par(&self, count: usize) -> Vec<f64> {
        use rayon::prelude::*;

        (0..count)
            .into_par_iter()
            .map_init(rand::rng, |rng, _| self.sample_with(rng))
            .collect()
    }

    /// Number of nodes in the underlying computation graph
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node.node_count()
    }

    /// Depth of the underlying computation graph
    #[must_use]
    pub fn depth(&self) -> usize {
        self.node.depth()
    }

    /// Number of independent random inputs this value depends on
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.node.leaf_count()
    }
}

impl std::fmt::Debug for UncertainValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UncertainValue")
            .field("support", &self.support)
            .field("nodes", &self.node_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let value = UncertainValue::normal(3.0, 1.5).unwrap() * UncertainValue::uniform(1.0, 2.0).unwrap();
        let a = value.take_samples_with(20, &mut StdRng::seed_from_u64(42));
        let b = value.take_samples_with(20, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_samples_stay_within_support() {
        let value = (UncertainValue::uniform(-2.0, 3.0).unwrap() * 4.0).abs();
        let support = value.support();
        assert!(value.take_samples(500).iter().all(|&x| support.contains(x)));
    }

    #[test]
    fn test_distribution_only_for_leaves() {
        let leaf = UncertainValue::uniform(0.0, 1.0).unwrap();
        assert!(matches!(
            leaf.distribution(),
            Some(Distribution::Uniform { .. })
        ));
        let derived = leaf + 1.0;
        assert!(derived.distribution().is_none());
    }

    #[test]
    fn test_debug_shows_support() {
        let debug = format!("{:?}", UncertainValue::point(2.0));
        assert!(debug.contains("UncertainValue"));
        assert!(debug.contains("support"));
    }
}
