//! Style dispatch: one order line in, one cutting list out.

use tracing::{debug, info};

use crate::config::CalcOptions;
use crate::error::{BomError, Result};
use crate::formula::{
    evaluate_steps, seed_context, FormulaKind, FormulaRepository, SLIDING_STYLE_NAME,
};
use crate::glass::build_glass_list;
use crate::grid::calculate_grid;
use crate::layout::Layout;
use crate::model::{CalculationResult, LabelInfo, Metric, OrderLine, Style};
use crate::parser::{parse_order_line, ParsedOrder, RawOrderLine};
use crate::styles::{self, SlidingDims};
use crate::validation::validate_with_layout;

/// Compute the cutting list for one order line.
///
/// Never fails: defaulted codes and questionable dimensions are computed
/// anyway and reported in [`CalculationResult::warnings`].
pub fn compute_bom(order: &OrderLine) -> CalculationResult {
    let m = order.metric();
    let layout = styles::layout(order.style, &m, order.frame);
    debug!(
        "{} {} {}x{}: {} glazed section(s)",
        order.style,
        order.frame,
        order.width,
        order.height,
        layout.sections.len()
    );

    assemble(order, &m, layout)
}

/// Compute with options. In strict mode any validation error, validation
/// warning or omitted grid section is returned as
/// [`BomError::Validation`].
pub fn compute_bom_with(order: &OrderLine, options: &CalcOptions) -> Result<CalculationResult> {
    let result = compute_bom(order);
    if options.strict && !result.warnings.is_empty() {
        return Err(BomError::Validation {
            errors: result.warnings,
        });
    }
    Ok(result)
}

/// Parse a raw string-coded record, then compute it.
///
/// Parser defaults lead the warning list. In strict mode any warning
/// rejects the record.
pub fn compute_record(raw: &RawOrderLine, options: &CalcOptions) -> Result<CalculationResult> {
    finish_record(raw, options, |order| Ok(compute_bom(order)))
}

/// Like [`compute_record`], but XO/OX lines are computed from the steps
/// held by `repo`.
pub fn compute_record_from_formulas(
    raw: &RawOrderLine,
    options: &CalcOptions,
    repo: &dyn FormulaRepository,
) -> Result<CalculationResult> {
    finish_record(raw, options, |order| match order.style {
        Style::Xo | Style::Ox => compute_bom_from_formulas(order, repo),
        _ => Ok(compute_bom(order)),
    })
}

fn finish_record<F>(raw: &RawOrderLine, options: &CalcOptions, compute: F) -> Result<CalculationResult>
where
    F: FnOnce(&OrderLine) -> Result<CalculationResult>,
{
    let ParsedOrder { order, mut defects } = parse_order_line(raw);
    let mut result = compute(&order)?;

    defects.append(&mut result.warnings);
    if options.strict && !defects.is_empty() {
        return Err(BomError::Validation { errors: defects });
    }
    result.warnings = defects;
    Ok(result)
}

/// Compute every record of a batch. Fails on the first rejected record,
/// naming its position.
pub fn compute_batch(
    records: &[RawOrderLine],
    options: &CalcOptions,
) -> Result<Vec<CalculationResult>> {
    compute_batch_with(records, options, None)
}

/// Batch computation with an optional formula source for XO/OX lines.
pub fn compute_batch_with(
    records: &[RawOrderLine],
    options: &CalcOptions,
    repo: Option<&dyn FormulaRepository>,
) -> Result<Vec<CalculationResult>> {
    if records.is_empty() {
        return Err(BomError::NoOrderLines);
    }

    let results = records
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            let computed = match repo {
                Some(repo) => compute_record_from_formulas(raw, options, repo),
                None => compute_record(raw, options),
            };
            computed.map_err(|e| match e {
                BomError::Validation { errors } => BomError::Validation {
                    errors: errors
                        .into_iter()
                        .map(|msg| format!("Order line {}: {}", idx + 1, msg))
                        .collect(),
                },
                other => other,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    info!("Computed {} order line(s)", results.len());
    Ok(results)
}

/// Compute an XO/OX order line from runtime formula steps.
///
/// The steps for the order's formula kind are fetched once; fetch
/// failures and empty step lists are returned as errors, not retried.
pub fn compute_bom_from_formulas(
    order: &OrderLine,
    repo: &dyn FormulaRepository,
) -> Result<CalculationResult> {
    if !matches!(order.style, Style::Xo | Style::Ox) {
        return Err(BomError::FormulaUnsupported {
            style: order.style.to_string(),
        });
    }

    let kind = FormulaKind::for_profile(order.frame);
    let steps = repo
        .get_formula_steps(SLIDING_STYLE_NAME, kind)
        .map_err(|source| BomError::FormulaFetch {
            style: SLIDING_STYLE_NAME.to_string(),
            kind,
            source,
        })?;
    if steps.is_empty() {
        return Err(BomError::NoFormulaSteps {
            style: SLIDING_STYLE_NAME.to_string(),
            kind,
        });
    }
    debug!("Evaluating {} {} formula step(s)", steps.len(), kind);

    let m = order.metric();
    let values = evaluate_steps(
        &steps,
        seed_context(&m, order.quantity),
        &SlidingDims::VARIABLES,
    )?;
    let layout = SlidingDims::from_values(&values)?.assemble(&m, order.frame);

    Ok(assemble(order, &m, layout))
}

/// Run the shared glass and grid builders over a style layout.
///
/// Validation diagnostics lead the warning list, followed by omitted grid
/// sections.
fn assemble(order: &OrderLine, m: &Metric, layout: Layout) -> CalculationResult {
    let rules = styles::rules(order.style);
    let mut warnings: Vec<String> = validate_with_layout(order, &layout)
        .messages()
        .cloned()
        .collect();

    let glass_list = build_glass_list(
        &order.glass,
        &layout.sections,
        rules.glass,
        order.quantity,
        order.temper_secondary,
    );
    let grid = calculate_grid(
        &rules.grid,
        &layout.sections,
        order.grid,
        order.grid_size.as_deref(),
        order.quantity,
        m,
    );

    warnings.extend(grid.warnings);

    CalculationResult {
        style: order.style,
        frame_width: layout.frame_width,
        frame_height: layout.frame_height,
        frame_profile: order.frame.code().to_string(),
        frame: layout.frame,
        sash: layout.sash,
        screen: layout.screen,
        parts: layout.parts,
        glass_list,
        grid_list: grid.items,
        grid_summary: grid.summary,
        label: LabelInfo::from_order(order),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::formula::{FetchError, FormulaError, FormulaStep, InMemoryFormulaRepository};
    use crate::model::{FrameProfile, GridPattern};
    use pretty_assertions::assert_eq;

    const EPS: f64 = 0.001;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn xo(frame: FrameProfile) -> OrderLine {
        OrderLine::new(Style::Xo, frame, 36.0, 48.0)
    }

    fn raw(style: &str, frame: &str, glass: &str) -> RawOrderLine {
        RawOrderLine {
            style: style.into(),
            frame: frame.into(),
            glass: glass.into(),
            width: Some(36.0),
            height: Some(48.0),
            ..Default::default()
        }
    }

    struct Offline;

    impl FormulaRepository for Offline {
        fn get_formula_steps(
            &self,
            _style_name: &str,
            _kind: FormulaKind,
        ) -> std::result::Result<Vec<FormulaStep>, FetchError> {
            Err(FetchError::Timeout { seconds: 5 })
        }
    }

    // ==================== Compiled path ====================

    #[test]
    fn test_compute_bom_is_pure() {
        let order = xo(FrameProfile::Nailon).with_grid(GridPattern::Marginal, None);
        assert_eq!(compute_bom(&order), compute_bom(&order));
    }

    #[test]
    fn test_label_carries_order_details() {
        let mut order = xo(FrameProfile::Retrofit);
        order.po = Some("PO-7".into());
        let result = compute_bom(&order);
        assert_eq!(result.label.style, "XO");
        assert_eq!(result.label.frame, "Retrofit");
        assert_eq!(result.label.po.as_deref(), Some("PO-7"));
        assert_eq!(result.frame_profile, "Retrofit");
    }

    #[test]
    fn test_lenient_records_diagnostics() {
        let order = OrderLine::new(Style::XoP, FrameProfile::Nailon, 36.0, 60.0);
        let result = compute_bom(&order);
        assert_eq!(result.warnings[0], "XO-P needs a secondary height, using 0");
    }

    #[test]
    fn test_strict_rejects_warnings() {
        let order = xo(FrameProfile::Nailon).with_grid(GridPattern::Standard, None);
        assert!(compute_bom_with(&order, &CalcOptions::default()).is_ok());
        let err = compute_bom_with(&order, &CalcOptions::strict()).unwrap_err();
        assert_eq!(err.to_string(), "Order line rejected: Standard grid without size, using 3W x 3H");
    }

    #[test]
    fn test_strict_accepts_clean_order() {
        let result = compute_bom_with(&xo(FrameProfile::Nailon), &CalcOptions::strict()).unwrap();
        assert!(result.warnings.is_empty());
    }

    // ==================== Raw records ====================

    #[test]
    fn test_record_defects_become_warnings() {
        let result = compute_record(&raw("XO", "Vinyl", "Clear/Clear"), &CalcOptions::default()).unwrap();
        assert_eq!(result.warnings[0], "Unknown frame profile 'Vinyl', no frame bars emitted");
        assert!(result.frame.is_empty());
    }

    #[test]
    fn test_record_defects_rejected_in_strict_mode() {
        let err = compute_record(&raw("XO", "Nailon", "Clear/Smoked"), &CalcOptions::strict()).unwrap_err();
        match err {
            BomError::Validation { errors } => {
                assert_eq!(errors, vec!["Unknown glass type 'Clear/Smoked', using Clear/Clear"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_batch() {
        let records = vec![raw("XO", "Nailon", "Clear/Clear"), raw("Picture", "Block", "OBS/Clear")];
        let results = compute_batch(&records, &CalcOptions::default()).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].style, Style::Picture);

        assert!(matches!(
            compute_batch(&[], &CalcOptions::default()),
            Err(BomError::NoOrderLines)
        ));
    }

    #[test]
    fn test_batch_names_rejected_line() {
        let records = vec![raw("XO", "Nailon", "Clear/Clear"), raw("XO", "Nailon", "Clear/Smoked")];
        let err = compute_batch(&records, &CalcOptions::strict()).unwrap_err();
        assert!(err.to_string().contains("Order line 2: Unknown glass type"));
    }

    // ==================== Formula path ====================

    #[test]
    fn test_formulas_match_compiled_calculator() {
        let repo = InMemoryFormulaRepository::builtin();
        for frame in [FrameProfile::Nailon, FrameProfile::Retrofit, FrameProfile::BlockSlopeHalf] {
            for (w, h) in [(36.0, 48.0), (59.5, 35.25), (72.0, 60.0)] {
                let order = OrderLine::new(Style::Ox, frame, w, h)
                    .with_grid(GridPattern::Standard, Some("4W x 2H"));
                let compiled = compute_bom(&order);
                let formula = compute_bom_from_formulas(&order, &repo).unwrap();
                assert_eq!(formula, compiled, "{frame} {w}x{h}");
            }
        }
    }

    #[test]
    fn test_formula_values_match_compute() {
        let repo = InMemoryFormulaRepository::builtin();
        let m = xo(FrameProfile::Nailon).metric();
        let steps = repo
            .get_formula_steps(SLIDING_STYLE_NAME, FormulaKind::Nailon)
            .unwrap();
        let values = evaluate_steps(&steps, seed_context(&m, 1), &SlidingDims::VARIABLES).unwrap();
        let dims = SlidingDims::from_values(&values).unwrap();
        assert_eq!(dims, SlidingDims::compute(&m, FrameProfile::Nailon));
        assert!(approx_eq(dims.frame_width, 36.236));
    }

    #[test]
    fn test_formula_fetch_failure() {
        let err = compute_bom_from_formulas(&xo(FrameProfile::Nailon), &Offline).unwrap_err();
        assert!(matches!(
            err,
            BomError::FormulaFetch {
                kind: FormulaKind::Nailon,
                source: FetchError::Timeout { seconds: 5 },
                ..
            }
        ));
    }

    #[test]
    fn test_formula_empty_source() {
        let err = compute_bom_from_formulas(&xo(FrameProfile::Block), &InMemoryFormulaRepository::new())
            .unwrap_err();
        assert!(matches!(
            err,
            BomError::NoFormulaSteps {
                kind: FormulaKind::Other,
                ..
            }
        ));
    }

    #[test]
    fn test_formula_path_only_for_sliding() {
        let order = OrderLine::new(Style::Picture, FrameProfile::Block, 30.0, 40.0);
        let err = compute_bom_from_formulas(&order, &InMemoryFormulaRepository::builtin()).unwrap_err();
        assert!(matches!(err, BomError::FormulaUnsupported { .. }));
    }

    #[test]
    fn test_batch_with_formula_source() {
        let records = vec![raw("OX", "Block", "Clear/Clear"), raw("Picture", "Block", "OBS/Clear")];
        let repo = InMemoryFormulaRepository::builtin();
        let with_formulas = compute_batch_with(&records, &CalcOptions::strict(), Some(&repo)).unwrap();
        let compiled = compute_batch(&records, &CalcOptions::strict()).unwrap();
        assert_eq!(with_formulas, compiled);

        let err = compute_batch_with(&records, &CalcOptions::default(), Some(&Offline)).unwrap_err();
        assert_eq!(err.code_value(), 300);
    }

    #[test]
    fn test_incomplete_formula_set() {
        let mut repo = InMemoryFormulaRepository::new();
        repo.insert(crate::formula::FormulaRecord::new(
            SLIDING_STYLE_NAME,
            FormulaKind::Nailon,
            "frameWidth",
            "const frameWidth = mmToInch(widthMm + 6);",
            10,
        ));
        let err = compute_bom_from_formulas(&xo(FrameProfile::Nailon), &repo).unwrap_err();
        assert!(matches!(err, BomError::MissingFormulaValue { ref name } if name == "frameHeight"));
    }

    #[test]
    fn test_runaway_formula_is_an_error() {
        let mut repo = InMemoryFormulaRepository::new();
        repo.insert(crate::formula::FormulaRecord::new(
            SLIDING_STYLE_NAME,
            FormulaKind::Nailon,
            "frameWidth",
            &format!("const frameWidth = {}1;", "-".repeat(200_000)),
            10,
        ));
        let err = compute_bom_from_formulas(&xo(FrameProfile::Nailon), &repo).unwrap_err();
        assert!(matches!(
            err,
            BomError::Formula { ref step, source: FormulaError::TooDeep { .. } } if step == "frameWidth"
        ));
        assert_eq!(err.code(), ErrorCode::FormulaEval);
    }
}
