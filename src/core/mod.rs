//! Value types shared by every engine component.

pub mod types;

pub use types::{
    BudgetResult, CalculationRequest, CustomTrend, PercentPair, IT_PERCENT_MAX,
    SECURITY_PERCENT_MAX,
};
