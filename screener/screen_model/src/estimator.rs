//! Fitted estimator parameters and their decision rules

use serde::{Deserialize, Serialize};

use crate::classifier::Label;
use crate::error::ArtifactError;

fn default_threshold() -> f64 {
    0.5
}

/// Node of an exported decision tree.
///
/// Nodes are stored in a flat array with the root at index 0. Children always
/// sit at a higher index than their parent, which rules out cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        label: Label,
    },
}

/// Parameters of a fitted binary estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Estimator {
    /// Positive when `coef · x + intercept > 0`.
    LinearSvm { coef: Vec<f64>, intercept: f64 },
    /// Positive when `sigmoid(coef · x + intercept) >= threshold`.
    LogisticRegression {
        coef: Vec<f64>,
        intercept: f64,
        #[serde(default = "default_threshold")]
        threshold: f64,
    },
    /// `x[feature] <= threshold` goes left.
    DecisionTree {
        n_features: usize,
        nodes: Vec<TreeNode>,
    },
}

impl Estimator {
    pub fn kind(&self) -> &'static str {
        match self {
            Estimator::LinearSvm { .. } => "linear_svm",
            Estimator::LogisticRegression { .. } => "logistic_regression",
            Estimator::DecisionTree { .. } => "decision_tree",
        }
    }

    pub fn n_features(&self) -> usize {
        match self {
            Estimator::LinearSvm { coef, .. } | Estimator::LogisticRegression { coef, .. } => {
                coef.len()
            }
            Estimator::DecisionTree { n_features, .. } => *n_features,
        }
    }

    pub fn validate(&self) -> Result<(), ArtifactError> {
        match self {
            Estimator::LinearSvm { coef, intercept } => check_linear(coef, *intercept),
            Estimator::LogisticRegression {
                coef,
                intercept,
                threshold,
            } => {
                check_linear(coef, *intercept)?;
                if !(*threshold > 0.0 && *threshold < 1.0) {
                    return Err(ArtifactError::Invalid(format!(
                        "logistic threshold {threshold} must lie strictly between 0 and 1"
                    )));
                }
                Ok(())
            }
            Estimator::DecisionTree { n_features, nodes } => check_tree(*n_features, nodes),
        }
    }

    /// Applies the decision rule. `x` must already be validated for length.
    pub fn decide(&self, x: &[f64]) -> Label {
        match self {
            Estimator::LinearSvm { coef, intercept } => Label::from(margin(coef, *intercept, x) > 0.0),
            Estimator::LogisticRegression {
                coef,
                intercept,
                threshold,
            } => {
                let p = sigmoid(margin(coef, *intercept, x));
                Label::from(p >= *threshold)
            }
            Estimator::DecisionTree { nodes, .. } => walk_tree(nodes, x),
        }
    }
}

fn margin(coef: &[f64], intercept: f64, x: &[f64]) -> f64 {
    coef.iter().zip(x).map(|(w, v)| w * v).sum::<f64>() + intercept
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

fn walk_tree(nodes: &[TreeNode], x: &[f64]) -> Label {
    let mut idx = 0;
    loop {
        match &nodes[idx] {
            TreeNode::Leaf { label } => return *label,
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                idx = if x[*feature] <= *threshold {
                    *left
                } else {
                    *right
                };
            }
        }
    }
}

fn check_linear(coef: &[f64], intercept: f64) -> Result<(), ArtifactError> {
    if coef.is_empty() {
        return Err(ArtifactError::Invalid("coefficient vector is empty".into()));
    }
    if let Some(i) = coef.iter().position(|w| !w.is_finite()) {
        return Err(ArtifactError::Invalid(format!(
            "coefficient {i} is not finite"
        )));
    }
    if !intercept.is_finite() {
        return Err(ArtifactError::Invalid("intercept is not finite".into()));
    }
    Ok(())
}

fn check_tree(n_features: usize, nodes: &[TreeNode]) -> Result<(), ArtifactError> {
    if n_features == 0 {
        return Err(ArtifactError::Invalid("tree declares zero features".into()));
    }
    if nodes.is_empty() {
        return Err(ArtifactError::Invalid("tree has no nodes".into()));
    }
    for (i, node) in nodes.iter().enumerate() {
        if let TreeNode::Split {
            feature,
            threshold,
            left,
            right,
        } = node
        {
            if *feature >= n_features {
                return Err(ArtifactError::Invalid(format!(
                    "node {i} splits on feature {feature} of {n_features}"
                )));
            }
            if !threshold.is_finite() {
                return Err(ArtifactError::Invalid(format!(
                    "node {i} has a non-finite threshold"
                )));
            }
            for child in [*left, *right] {
                if child <= i || child >= nodes.len() {
                    return Err(ArtifactError::Invalid(format!(
                        "node {i} points at invalid child {child}"
                    )));
                }
            }
        }
    }
    Ok(())
}
