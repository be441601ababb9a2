#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

use crate::distributions::Distribution;
use crate::operations::arithmetic::BinaryOperation;
use crate::support::Support;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Context for memoizing samples within a single evaluation to ensure
/// shared variables produce the same sample value throughout an evaluation
pub struct SampleContext {
    /// Memoized values indexed by node ID
    memoized_values: HashMap<uuid::Uuid, f64>,
}

impl SampleContext {
    /// Create a new empty sample context
    #[must_use]
    pub fn new() -> Self {
        Self {
            memoized_values: HashMap::new(),
        }
    }

    /// Get a memoized value for a given node ID
    #[must_use]
    pub fn get_value(&self, id: &uuid::Uuid) -> Option<f64> {
        self.memoized_values.get(id).copied()
    }

    /// Set a memoized value for a given node ID
    pub fn set_value(&mut self, id: uuid::Uuid, value: f64) {
        self.memoized_values.insert(id, value);
    }

    /// Clear all memoized values
    pub fn clear(&mut self) {
        self.memoized_values.clear();
    }

    /// Get the number of memoized values
    #[must_use]
    pub fn len(&self) -> usize {
        self.memoized_values.len()
    }

    /// Check if the context is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.memoized_values.is_empty()
    }
}

impl Default for SampleContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Computation graph node for lazy evaluation
///
/// Arithmetic on uncertain values builds expressions like
/// `density * area * (v_over^2 - v_under^2) / 2` as a graph that is only
/// evaluated when samples are needed. Leaves are memoized per evaluation so a
/// variable used in several places takes a single value within one draw.
#[derive(Debug, Clone)]
pub enum ComputationNode {
    /// Leaf node drawing directly from a distribution, with a unique ID
    Leaf {
        id: uuid::Uuid,
        distribution: Distribution,
    },

    /// Binary operation node for combining two uncertain values
    BinaryOp {
        left: Arc<ComputationNode>,
        right: Arc<ComputationNode>,
        operation: BinaryOperation,
    },

    /// Unary operation node for transforming a single uncertain value
    UnaryOp {
        operand: Arc<ComputationNode>,
        operation: UnaryOperation,
    },
}

/// Unary operation types for computation graph
#[derive(Debug, Clone, PartialEq)]
pub enum UnaryOperation {
    Neg,
    Abs,
    Sqrt,
    Exp,
    /// `x.powf(exponent)`
    Powf(f64),
    /// `base.powf(x)`
    BasePow(f64),
    /// Reads the table entry at the index given by the operand.
    Select(Arc<[f64]>),
}

impl UnaryOperation {
    #[must_use]
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            UnaryOperation::Neg => -x,
            UnaryOperation::Abs => x.abs(),
            UnaryOperation::Sqrt => x.sqrt(),
            UnaryOperation::Exp => x.exp(),
            UnaryOperation::Powf(exponent) => x.powf(*exponent),
            UnaryOperation::BasePow(base) => base.powf(x),
            UnaryOperation::Select(table) => {
                let index = (x.max(0.0) as usize).min(table.len().saturating_sub(1));
                table[index]
            }
        }
    }

    /// Image of `support` under this operation.
    ///
    /// Domain checks happen before a node is built, so the operand is assumed
    /// to lie inside the operation's domain.
    #[must_use]
    pub fn support(&self, operand: &Support) -> Support {
        match self {
            UnaryOperation::Neg => operand.neg(),
            UnaryOperation::Abs => operand.abs(),
            UnaryOperation::Powf(exponent) => operand.powf(*exponent),
            UnaryOperation::Select(table) => {
                if operand.is_degenerate() {
                    Support::point(self.apply(operand.lower))
                } else {
                    Support::spanning(table.iter().copied())
                        .unwrap_or_else(|| Support::point(f64::NAN))
                }
            }
            UnaryOperation::Sqrt | UnaryOperation::Exp | UnaryOperation::BasePow(_) => {
                operand.map_monotone(|x| self.apply(x))
            }
        }
    }
}

impl ComputationNode {
    /// Evaluates the computation graph node with memoization context
    ///
    /// This is the core evaluation method that respects memoization to ensure
    /// shared variables produce consistent samples within a single evaluation.
    pub fn evaluate<R: Rng + ?Sized>(&self, context: &mut SampleContext, rng: &mut R) -> f64 {
        match self {
            ComputationNode::Leaf { id, distribution } => {
                if let Some(cached) = context.get_value(id) {
                    cached
                } else {
                    let value = distribution.sample(rng);
                    context.set_value(*id, value);
                    value
                }
            }

            ComputationNode::BinaryOp {
                left,
                right,
                operation,
            } => {
                let left_val = left.evaluate(context, rng);
                let right_val = right.evaluate(context, rng);
                operation.apply(left_val, right_val)
            }

            ComputationNode::UnaryOp { operand, operation } => {
                operation.apply(operand.evaluate(context, rng))
            }
        }
    }

    /// Evaluates the computation graph node in a new context
    ///
    /// Every call draws fresh, independent leaf samples.
    pub fn evaluate_fresh<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let mut context = SampleContext::new();
        self.evaluate(&mut context, rng)
    }

    /// Creates a new leaf node
    #[must_use]
    pub fn leaf(distribution: Distribution) -> Self {
        ComputationNode::Leaf {
            id: uuid::Uuid::new_v4(),
            distribution,
        }
    }

    /// Counts the number of nodes in the computation graph
    ///
    /// Shared subgraphs are counted once per reference.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            ComputationNode::Leaf { .. } => 1,
            ComputationNode::BinaryOp { left, right, .. } => {
                1 + left.node_count() + right.node_count()
            }
            ComputationNode::UnaryOp { operand, .. } => 1 + operand.node_count(),
        }
    }

    /// Gets the depth of the computation graph
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            ComputationNode::Leaf { .. } => 1,
            ComputationNode::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
            ComputationNode::UnaryOp { operand, .. } => 1 + operand.depth(),
        }
    }

    /// Number of distinct leaves, i.e. independent random inputs
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        let mut seen = HashSet::new();
        self.collect_leaves(&mut seen);
        seen.len()
    }

    fn collect_leaves(&self, seen: &mut HashSet<uuid::Uuid>) {
        match self {
            ComputationNode::Leaf { id, .. } => {
                seen.insert(*id);
            }
            ComputationNode::BinaryOp { left, right, .. } => {
                left.collect_leaves(seen);
                right.collect_leaves(seen);
            }
            ComputationNode::UnaryOp { operand, .. } => operand.collect_leaves(seen),
        }
    }
}
