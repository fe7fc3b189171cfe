use thiserror::Error;

/// Validation failures raised by the cost calculator before any arithmetic runs.
///
/// All variants are returned synchronously; a failed call never produces a
/// partial `CostBreakdown`. The calculator is pure, so retrying an identical
/// call reproduces the identical error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    /// A usage field is negative, non-finite, or breaks the caller contract
    /// (e.g. fewer than 2 members on family coverage).
    #[error("invalid usage input: {0}")]
    InvalidUsage(String),

    /// A plan record carries a negative or non-finite cost-sharing parameter,
    /// or a family limit below the individual limit for the same category.
    #[error("invalid plan data: {0}")]
    InvalidPlanData(String),

    /// The monthly premium or employer HSA contribution is negative or non-finite.
    #[error("invalid premium: {0}")]
    InvalidPremium(String),
}
