//! Shipped XO/OX formula table.

use super::{FormulaKind, FormulaRecord};

/// Style name the XO/OX family is stored under.
pub const SLIDING_STYLE_NAME: &str = "xo_ox_window";

const NAILON: [(&str, &str); 18] = [
    ("frameWidth", "const frameWidth = mmToInch(widthMm + 3 * 2);"),
    ("frameHeight", "const frameHeight = mmToInch(heightMm + 3 * 2);"),
    ("sashWidth", "const sashWidth = mmToInch(widthMm / 2 - 14.5 - 15 + 1);"),
    ("sashHeight", "const sashHeight = mmToInch(heightMm - 46 - 15 * 2 - 2 - 1);"),
    ("screenw", "const screenw = round(widthMm / 2 - 75 - 15 - 2, 0);"),
    ("screenh", "const screenh = round(heightMm - 87 - 15 * 2 - 4, 0);"),
    ("mullion", "const mullion = round((heightMm - 36 - 15 * 2) / 25.4, 3);"),
    ("mullionA", "const mullionA = round((heightMm - 36 - 15 * 2) / 25.4 - 2, 1);"),
    ("handleA", "const handleA = round((heightMm - 46 - 15 * 2) / 25.4 / 2 + 4, 0);"),
    ("track", "const track = round((widthMm - 14 * 2 - 15 * 2 - 3 - 20) / 25.4, 1);"),
    ("sashglassw", "const sashglassw = round(widthMm / 2 - 77 - 15 + 3, 0);"),
    ("sashglassh", "const sashglassh = round(heightMm - 109 - 15 * 2 - 3 - 2, 0);"),
    ("fixedglassw", "const fixedglassw = round(widthMm / 2 - 44 - 15, 0);"),
    ("fixedglassh", "const fixedglassh = round(heightMm - 47 - 15 * 2 - 2, 0);"),
    ("sashgridw", "const sashgridw = round(sashglassw - 18 - 2, 0);"),
    ("sashgridh", "const sashgridh = round(sashglassh - 18 - 2, 0);"),
    ("fixedgridw", "const fixedgridw = round(fixedglassw - 18 - 2, 0);"),
    ("fixedgridh", "const fixedgridh = round(fixedglassh - 18 - 2, 0);"),
];

const OTHER: [(&str, &str); 18] = [
    ("frameWidth", "const frameWidth = mmToInch(widthMm + 3 * 2);"),
    ("frameHeight", "const frameHeight = mmToInch(heightMm + 3 * 2);"),
    ("sashWidth", "const sashWidth = mmToInch(widthMm / 2 - 14.5 + 1);"),
    ("sashHeight", "const sashHeight = mmToInch(heightMm - 46 - 2 - 1);"),
    ("screenw", "const screenw = round(widthMm / 2 - 75 - 2, 0);"),
    ("screenh", "const screenh = round(heightMm - 87 - 4, 0);"),
    ("mullion", "const mullion = round((heightMm - 36) / 25.4, 3);"),
    ("mullionA", "const mullionA = round((heightMm - 36) / 25.4 - 2, 1);"),
    ("handleA", "const handleA = round((heightMm - 46) / 25.4 / 2 + 4, 0);"),
    ("track", "const track = round((widthMm - 14 * 2 - 3 - 20) / 25.4, 1);"),
    ("sashglassw", "const sashglassw = widthMm / 2 - 77 + 3;"),
    ("sashglassh", "const sashglassh = heightMm - 109 - 3 - 2;"),
    ("fixedglassw", "const fixedglassw = widthMm / 2 - 44;"),
    ("fixedglassh", "const fixedglassh = heightMm - 47 - 2;"),
    ("sashgridw", "const sashgridw = round(sashglassw - 18 - 2, 0);"),
    ("sashgridh", "const sashgridh = round(sashglassh - 18 - 2, 0);"),
    ("fixedgridw", "const fixedgridw = round(fixedglassw - 18 - 2, 0);"),
    ("fixedgridh", "const fixedgridh = round(fixedglassh - 18 - 2, 0);"),
];

fn records<'a>(
    kind: FormulaKind,
    table: &'a [(&'a str, &'a str)],
) -> impl Iterator<Item = FormulaRecord> + 'a {
    table.iter().zip(1..).map(move |((step, formula), n)| {
        FormulaRecord::new(SLIDING_STYLE_NAME, kind, step, formula, n * 10)
    })
}

pub fn sliding_records() -> Vec<FormulaRecord> {
    records(FormulaKind::Nailon, &NAILON)
        .chain(records(FormulaKind::Other, &OTHER))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::parse_statement;
    use crate::styles::SlidingDims;

    #[test]
    fn test_tables_follow_variable_schema() {
        for table in [&NAILON, &OTHER] {
            let names: Vec<&str> = table.iter().map(|(name, _)| *name).collect();
            assert_eq!(names, SlidingDims::VARIABLES);
        }
    }

    #[test]
    fn test_records_are_sequenced_per_kind() {
        let records = sliding_records();
        assert_eq!(records.len(), NAILON.len() + OTHER.len());

        let nailon: Vec<i32> = records
            .iter()
            .filter(|r| r.formula_type == FormulaKind::Nailon)
            .map(|r| r.sequence)
            .collect();
        assert_eq!(nailon.first(), Some(&10));
        assert_eq!(nailon.last(), Some(&180));
        assert!(records.iter().all(|r| r.style_name == SLIDING_STYLE_NAME));
    }

    #[test]
    fn test_every_statement_parses_to_its_step() {
        for record in sliding_records() {
            let statement = parse_statement(&record.formula_string).unwrap();
            assert_eq!(statement.target.as_deref(), Some(record.step_name.as_str()));
        }
    }
}
