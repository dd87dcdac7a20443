// Domain Layer - Pure percentage arithmetic and input parsing

pub mod error;
pub mod number;
pub mod percentage;

// Re-exports
pub use error::{DomainError, UndefinedResult};
pub use number::{parse_decimal, parse_percent_list};
pub use percentage::{
    change_by_percent, compound_percents, compound_result, compound_steps, original_before_change,
    percent_change, percent_of, percent_of_total, total_from_part_and_pct, Direction, Outcome,
    PercentChangeKind, Step,
};
