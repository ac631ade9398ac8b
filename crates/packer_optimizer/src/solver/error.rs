use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptimizeError {
    #[error("pack sizes cannot be empty")]
    EmptyPackSizes,

    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    #[error("pack sizes must be greater than zero")]
    NonPositivePackSize,

    #[error("amount is too large")]
    AmountTooLarge,

    #[error("no exact combination possible for the requested amount")]
    Infeasible,
}

impl OptimizeError {
    /// A well-formed request for which no exact combination exists.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, OptimizeError::Infeasible)
    }

    pub fn is_invalid_input(&self) -> bool {
        !self.is_infeasible()
    }
}
