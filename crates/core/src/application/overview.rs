// Worked-example overview (menu option 0)
//
// Seven fixed questions, each answered with its shortest calculation.

use super::render::format_number as num;
use crate::domain::{
    change_by_percent, original_before_change, percent_change, percent_of, percent_of_total,
    Direction, Outcome,
};

const PERCENT_OF: (u32, u32) = (13, 365);
const PART_OF_TOTAL: (u32, u32) = (121, 412);
const CHANGE: (u32, u32) = (576, 17);
const GROWTH: (u32, u32) = (326, 413);
const SHRINK: (u32, u32) = (413, 326);
const REVERSE: (u32, u32) = (654, 17);

fn outcome(value: Outcome) -> String {
    value.map_or_else(|reason| reason.to_string(), num)
}

/// All overview lines, blank separators included
pub fn overview_lines() -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "Procenten in 1 overzicht:".to_string(),
        "(procent = per honderd = 1/100 = 0,01)".to_string(),
        String::new(),
    ];

    // x% van y
    let (x, y) = PERCENT_OF;
    let (xf, yf) = (f64::from(x), f64::from(y));
    lines.push(format!("Vraag: hoeveel is {x}% van {y}?"));
    lines.push(format!(
        "Antwoord: {} x {y} = {}",
        num(xf / 100.0),
        num(percent_of(xf, yf))
    ));
    lines.push(String::new());

    // a van b
    let (a, b) = PART_OF_TOTAL;
    let share = outcome(percent_of_total(f64::from(a), f64::from(b)));
    lines.push(format!("Vraag: hoeveel % is {a} van {b}?"));
    lines.push(format!("Antwoord: {a} : {b} = {share} (dus {share}% )"));
    lines.push(String::new());

    // toename / afname met vast percentage
    let (value, pct) = CHANGE;
    let (vf, pf) = (f64::from(value), f64::from(pct));
    for (direction, verb) in [(Direction::Increase, "toe"), (Direction::Decrease, "af")] {
        let factor = num(direction.factor(pf));
        let sign = direction.sign();
        lines.push(format!(
            "Vraag: {value} neemt {verb} met {pct}%; hoeveel heb je nu?"
        ));
        lines.push(format!(
            "Antwoord: 1 {sign} {} = {factor} ; {factor} x {value} = {}",
            num(pf / 100.0),
            num(change_by_percent(vf, pf, direction))
        ));
        lines.push(String::new());
    }

    // procentuele toename
    let (old, new) = GROWTH;
    let ratio = f64::from(new) / f64::from(old);
    lines.push(format!(
        "Vraag: {old} is toegenomen naar {new}; met hoeveel procent is het toegenomen?"
    ));
    lines.push(format!(
        "Antwoord: {new} : {old} = {} -> {} is {} meer dan 1, dus {}%",
        num(ratio),
        num(ratio),
        num(ratio - 1.0),
        outcome(percent_change(f64::from(old), f64::from(new)))
    ));
    lines.push(String::new());

    // procentuele afname
    let (old, new) = SHRINK;
    let ratio = f64::from(new) / f64::from(old);
    let decline = outcome(percent_change(f64::from(old), f64::from(new)).map(f64::abs));
    lines.push(format!(
        "Vraag: {old} is afgenomen naar {new}; met hoeveel procent is het afgenomen?"
    ));
    lines.push(format!(
        "Antwoord: {new} : {old} = {} -> {} minder dan 1, dus {decline}% afname",
        num(ratio),
        num(1.0 - ratio)
    ));
    lines.push(String::new());

    // terugrekenen
    let (now, pct) = REVERSE;
    let (nf, pf) = (f64::from(now), f64::from(pct));
    lines.push(format!(
        "Vraag: neemt toe met {pct}% en is nu {now}; wat was het eerst?"
    ));
    lines.push(format!(
        "Antwoord (toename): {now} : {} = {}",
        num(Direction::Increase.factor(pf)),
        outcome(original_before_change(nf, pf, Direction::Increase))
    ));
    lines.push(format!(
        "Vraag: neemt af met {pct}% en is nu {now}; wat was het eerst?"
    ));
    lines.push(format!(
        "Antwoord (afname): {now} : {} = {}",
        num(Direction::Decrease.factor(pf)),
        outcome(original_before_change(nf, pf, Direction::Decrease))
    ));
    lines.push(String::new());

    lines.push(
        "Dit overzicht toont de kortste rekenwijzen: gebruik 0,01 * waarde voor procenten \
         of vermenigvuldig met 1 ± pct/100 voor toename/afname."
            .to_string(),
    );

    lines
}
