// Percentage Formulas
//
// Pure, stateless arithmetic. Zero denominators/factors surface as
// `UndefinedResult`, never as NaN/inf or a panic.

use super::error::UndefinedResult;

/// Formula outcome: a number, or the reason there is none
pub type Outcome = std::result::Result<f64, UndefinedResult>;

/// Direction of a percentage change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    /// Direction implied by the sign of a percentage (zero counts as increase)
    pub fn from_sign(pct: f64) -> Self {
        if pct >= 0.0 {
            Direction::Increase
        } else {
            Direction::Decrease
        }
    }

    /// Multiplication factor `1 ± pct/100`
    pub fn factor(self, pct: f64) -> f64 {
        match self {
            Direction::Increase => 1.0 + pct / 100.0,
            Direction::Decrease => 1.0 - pct / 100.0,
        }
    }

    pub fn sign(self) -> char {
        match self {
            Direction::Increase => '+',
            Direction::Decrease => '-',
        }
    }
}

/// Classification of an old -> new comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentChangeKind {
    Increase,
    Decrease,
    NoChange,
}

impl PercentChangeKind {
    pub fn classify(old: f64, new: f64) -> Self {
        if new > old {
            PercentChangeKind::Increase
        } else if new < old {
            PercentChangeKind::Decrease
        } else {
            PercentChangeKind::NoChange
        }
    }
}

/// One applied percentage in a compound sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub percent: f64,
    pub before: f64,
    pub after: f64,
}

/// x% of y
pub fn percent_of(x: f64, y: f64) -> f64 {
    x / 100.0 * y
}

/// What percentage `a` is of `b`
pub fn percent_of_total(a: f64, b: f64) -> Outcome {
    if b == 0.0 {
        return Err(UndefinedResult::ZeroTotal);
    }
    Ok(a / b * 100.0)
}

/// Raise or lower `value` by `pct` percent
pub fn change_by_percent(value: f64, pct: f64, direction: Direction) -> f64 {
    value * direction.factor(pct)
}

/// Relative change from `old` to `new`, in percent
pub fn percent_change(old: f64, new: f64) -> Outcome {
    if old == 0.0 {
        return Err(UndefinedResult::ZeroOldValue);
    }
    Ok((new - old) / old * 100.0)
}

/// Whole from a part that is `pct` percent of it
pub fn total_from_part_and_pct(part: f64, pct: f64) -> Outcome {
    if pct == 0.0 {
        return Err(UndefinedResult::ZeroPercentage);
    }
    Ok(part * 100.0 / pct)
}

/// Value before it was changed by `pct` percent in `direction`
pub fn original_before_change(new_value: f64, pct: f64, direction: Direction) -> Outcome {
    let factor = direction.factor(pct);
    if factor == 0.0 {
        return Err(UndefinedResult::ZeroFactor);
    }
    Ok(new_value / factor)
}

/// Apply signed percentages one after another, recording every step
///
/// The sign of each percentage picks the direction; its magnitude is applied,
/// so `-20` lowers the running value by 20%.
pub fn compound_steps(value: f64, percents: &[f64]) -> Vec<Step> {
    let mut running = value;
    percents
        .iter()
        .map(|&pct| {
            let before = running;
            running = change_by_percent(before, pct.abs(), Direction::from_sign(pct));
            Step {
                percent: pct,
                before,
                after: running,
            }
        })
        .collect()
}

/// Value after the last step, or `start` when no step was applied
pub fn compound_result(start: f64, steps: &[Step]) -> f64 {
    steps.last().map_or(start, |step| step.after)
}

/// Final value after applying all percentages in order (input unchanged when empty)
pub fn compound_percents(value: f64, percents: &[f64]) -> f64 {
    compound_result(value, &compound_steps(value, percents))
}
