//! Normalizer and Scorer — full-sample z-scores and the composite score.
//!
//! Each winsorized factor is z-scored against its mean and sample stddev
//! computed once over the entire windowed series (full-sample, not
//! rolling — inherited look-ahead, kept for compatibility). A factor with
//! zero stddev is degenerate: its z-column is `None` for every row, a
//! warning is recorded, and the run continues.
//!
//! The composite score is the plain mean of the three z-scores, `None`
//! wherever any component is.

use crate::domain::{FactorKind, FactorRow, ScoredRow};
use crate::error::PipelineWarning;
use crate::stats::{mean, sample_stddev};

/// Z-score all three factors and attach the composite score.
pub fn normalize_and_score(
    rows: Vec<FactorRow>,
    warnings: &mut Vec<PipelineWarning>,
) -> Vec<ScoredRow> {
    if rows.is_empty() {
        return Vec::new();
    }

    let mut z_columns = vec![[None::<f64>; 3]; rows.len()];
    for (col, kind) in FactorKind::ALL.into_iter().enumerate() {
        let values: Vec<f64> = rows.iter().map(|r| r.factor(kind)).collect();
        let m = mean(&values);
        let s = sample_stddev(&values);
        if s == 0.0 {
            warnings.push(PipelineWarning::DegenerateFactor { factor: kind });
            continue;
        }
        for (i, v) in values.iter().enumerate() {
            z_columns[i][col] = Some((v - m) / s);
        }
    }

    rows.into_iter()
        .zip(z_columns)
        .map(|(row, [momentum_z, volatility_z, volume_factor_z])| {
            let score = match (momentum_z, volatility_z, volume_factor_z) {
                (Some(a), Some(b), Some(c)) => Some((a + b + c) / 3.0),
                _ => None,
            };
            ScoredRow {
                date: row.date,
                price: row.price,
                volume: row.volume,
                returns: row.returns,
                momentum: row.momentum,
                volatility: row.volatility,
                volume_factor: row.volume_factor,
                momentum_z,
                volatility_z,
                volume_factor_z,
                score,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_rows(momentum: &[f64], volatility: &[f64], volume_factor: &[f64]) -> Vec<FactorRow> {
        let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        momentum
            .iter()
            .zip(volatility)
            .zip(volume_factor)
            .enumerate()
            .map(|(i, ((&m, &v), &f))| FactorRow {
                date: base_date + chrono::Duration::days(i as i64),
                price: 100.0,
                volume: 1000.0,
                returns: 0.0,
                momentum: m,
                volatility: v,
                volume_factor: f,
            })
            .collect()
    }

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-10,
            "assert_approx failed: actual={actual}, expected={expected}"
        );
    }

    #[test]
    fn z_scores_have_zero_mean_unit_stddev() {
        let momentum = [0.1, 0.4, -0.2, 0.7, 0.0];
        let volatility = [10.0, 20.0, 30.0, 40.0, 50.0];
        let volume_factor = [1.0, -1.0, 2.0, -2.0, 0.5];
        let mut warnings = Vec::new();
        let scored = normalize_and_score(
            make_rows(&momentum, &volatility, &volume_factor),
            &mut warnings,
        );
        assert!(warnings.is_empty());

        let zs: Vec<f64> = scored.iter().map(|r| r.momentum_z.unwrap()).collect();
        assert_approx(mean(&zs), 0.0);
        assert_approx(sample_stddev(&zs), 1.0);

        let zs: Vec<f64> = scored.iter().map(|r| r.volatility_z.unwrap()).collect();
        assert_approx(mean(&zs), 0.0);
        assert_approx(sample_stddev(&zs), 1.0);
    }

    #[test]
    fn score_is_mean_of_three_z_scores() {
        let mut warnings = Vec::new();
        let scored = normalize_and_score(
            make_rows(&[1.0, 2.0, 3.0], &[30.0, 10.0, 20.0], &[0.5, 0.0, -0.5]),
            &mut warnings,
        );
        for row in &scored {
            let expected = (row.momentum_z.unwrap()
                + row.volatility_z.unwrap()
                + row.volume_factor_z.unwrap())
                / 3.0;
            assert_approx(row.score.unwrap(), expected);
        }
    }

    #[test]
    fn constant_factor_is_degenerate_not_fatal() {
        let mut warnings = Vec::new();
        let scored = normalize_and_score(
            make_rows(&[1.0, 2.0, 3.0], &[10.0, 20.0, 30.0], &[0.0, 0.0, 0.0]),
            &mut warnings,
        );
        assert_eq!(
            warnings,
            vec![PipelineWarning::DegenerateFactor {
                factor: FactorKind::VolumeFactor
            }]
        );
        for row in &scored {
            assert!(row.momentum_z.is_some());
            assert!(row.volatility_z.is_some());
            assert!(row.volume_factor_z.is_none());
            // Score is undefined when any component is.
            assert!(row.score.is_none());
        }
    }

    #[test]
    fn single_row_series_is_fully_degenerate() {
        let mut warnings = Vec::new();
        let scored = normalize_and_score(make_rows(&[1.0], &[2.0], &[3.0]), &mut warnings);
        assert_eq!(warnings.len(), 3);
        assert!(scored[0].score.is_none());
    }

    #[test]
    fn empty_series_produces_no_warnings() {
        let mut warnings = Vec::new();
        assert!(normalize_and_score(vec![], &mut warnings).is_empty());
        assert!(warnings.is_empty());
    }
}
