// Result rendering: arithmetic breakdown + answer lines

use crate::domain::{Direction, PercentChangeKind, Step};

/// Decimal exponents outside `[-4, 16)` switch to scientific notation
const MIN_PLAIN_EXPONENT: i32 = -4;
const MAX_PLAIN_EXPONENT: i32 = 16;

/// Render a number in shortest round-trip form
///
/// Integral values keep one decimal (`20.0`), so a result always reads as
/// a decimal number regardless of input. Very large or very small magnitudes
/// use an exponent with explicit sign and at least two digits (`1e+16`, `1.5e-07`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.5e-7"
    let scientific = format!("{:e}", value);
    if let Some((mantissa, exponent)) = scientific.split_once('e') {
        if let Ok(exponent) = exponent.parse::<i32>() {
            if value != 0.0 && !(MIN_PLAIN_EXPONENT..MAX_PLAIN_EXPONENT).contains(&exponent) {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs());
            }
        }
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

pub fn percent_of(x: f64, y: f64, result: f64) -> [String; 2] {
    let fraction = format_number(x / 100.0);
    let (x, y, result) = (format_number(x), format_number(y), format_number(result));
    [
        format!("Berekening: {x}% = {fraction} ; {fraction} * {y} = {result}"),
        format!("Antwoord: {x}% van {y} is {result}"),
    ]
}

pub fn percent_of_total(a: f64, b: f64, pct: f64) -> [String; 2] {
    let (a, b, pct) = (format_number(a), format_number(b), format_number(pct));
    [
        format!("Berekening: ( {a} / {b} ) * 100 = {pct}"),
        format!("Antwoord: {a} is {pct}% van {b}"),
    ]
}

pub fn total_from_part(part: f64, pct: f64, total: f64) -> [String; 2] {
    let (part, pct, total) = (format_number(part), format_number(pct), format_number(total));
    [
        format!("Berekening: totaal = deel * 100 / pct = {part} * 100 / {pct} = {total}"),
        format!("Antwoord: totaal = {total}"),
    ]
}

pub fn change_by_percent(value: f64, pct: f64, direction: Direction, new_value: f64) -> [String; 2] {
    let factor = format_number(direction.factor(pct));
    let verb = match direction {
        Direction::Increase => "verhoogd",
        Direction::Decrease => "verlaagd",
    };
    let sign = direction.sign();
    let (value, pct, new_value) = (
        format_number(value),
        format_number(pct),
        format_number(new_value),
    );
    [
        format!("Berekening: {value} {sign} {pct}% -> factor = {factor} ; resultaat = {new_value}"),
        format!("Antwoord: waarde {verb} met {pct}% = {new_value}"),
    ]
}

pub fn original_before_change(
    new_value: f64,
    pct: f64,
    direction: Direction,
    original: f64,
) -> [String; 2] {
    let factor = format_number(direction.factor(pct));
    let (new_value, original) = (format_number(new_value), format_number(original));
    [
        format!("Berekening: origineel = nieuw / factor = {new_value} / {factor} = {original}"),
        format!("Antwoord: oorspronkelijke waarde = {original}"),
    ]
}

pub fn percent_change(old: f64, new: f64, change: f64) -> [String; 2] {
    let kind = match PercentChangeKind::classify(old, new) {
        PercentChangeKind::Increase => "toename",
        PercentChangeKind::Decrease => "afname",
        PercentChangeKind::NoChange => "geen verandering",
    };
    let (old, new, change) = (format_number(old), format_number(new), format_number(change));
    [
        format!("Berekening: ( {new} - {old} ) / {old} * 100 = {change}%"),
        format!("Antwoord: procentuele {kind}: {change}%"),
    ]
}

pub fn compound_start(start: f64) -> String {
    format!("Startwaarde: {}", format_number(start))
}

pub fn compound_step(step: &Step) -> String {
    format!(
        "Toepassen {}%: {} -> {}",
        format_number(step.percent),
        format_number(step.before),
        format_number(step.after)
    )
}

pub fn compound_final(result: f64) -> String {
    format!(
        "Eindwaarde na samengestelde procenten: {}",
        format_number(result)
    )
}
