//! Parameter domain generation.
//!
//! A Hermite run is evaluated on an ordered list of `t` values coming from one of
//! three sources:
//!
//! - a single literal value
//! - an inclusive `start,end,step` range
//! - a list of textual entries (one per line), where unparsable entries are skipped
//!
//! Callers that collect these from optional flags build a `DomainSelection` and
//! resolve it into a `ParamDomain`; that is where "nothing selected" and
//! "several selected" are rejected.

use log::debug;

use crate::domain::ParamDomain;
use crate::error::{CurveError, Result};

/// Decimal digits kept when generating range terms.
const RANGE_DIGITS: i32 = 10;

/// Upper bound on range length.
const MAX_RANGE_LEN: usize = 10_000_000;

/// Optional per-mode inputs, as collected from a command line.
#[derive(Debug, Clone, Default)]
pub struct DomainSelection {
    pub single: Option<f64>,
    /// `"start,end,step"`.
    pub range: Option<String>,
    /// Raw entries, e.g. the lines of a file.
    pub list: Option<Vec<String>>,
}

impl DomainSelection {
    /// Turn the selection into exactly one domain mode.
    pub fn resolve(self) -> Result<ParamDomain> {
        let selected = [
            self.single.is_some(),
            self.range.is_some(),
            self.list.is_some(),
        ]
        .iter()
        .filter(|&&s| s)
        .count();

        match selected {
            0 => Err(CurveError::config(
                "no parameter domain selected: give a single t, a t range, or a t file",
            )),
            1 => {
                if let Some(t) = self.single {
                    Ok(ParamDomain::Single(t))
                } else if let Some(spec) = self.range {
                    ParamDomain::parse_range(&spec)
                } else if let Some(lines) = self.list {
                    Ok(ParamDomain::from_lines(lines))
                } else {
                    Err(CurveError::config("no parameter domain selected"))
                }
            }
            n => Err(CurveError::config(format!(
                "parameter domain modes are mutually exclusive ({n} selected)"
            ))),
        }
    }
}

impl ParamDomain {
    /// Parse `"start,end,step"` into a range domain.
    pub fn parse_range(spec: &str) -> Result<Self> {
        let fields: Vec<&str> = spec.split(',').map(str::trim).collect();
        let [start, end, step] = fields.as_slice() else {
            return Err(CurveError::config(format!(
                "invalid range '{spec}': expected start,end,step"
            )));
        };
        let parse = |name: &str, raw: &str| -> Result<f64> {
            raw.parse::<f64>().map_err(|_| {
                CurveError::config(format!("invalid range '{spec}': {name} '{raw}' is not a number"))
            })
        };
        Ok(ParamDomain::Range {
            start: parse("start", *start)?,
            end: parse("end", *end)?,
            step: parse("step", *step)?,
        })
    }

    /// Build a list domain from textual entries, skipping anything that is not a finite number.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skipped = 0usize;
        let values = lines
            .into_iter()
            .filter_map(|line| match line.as_ref().trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Some(v),
                _ => {
                    skipped += 1;
                    None
                }
            })
            .collect();
        if skipped > 0 {
            debug!("skipped {skipped} non-numeric parameter entries");
        }
        ParamDomain::List(values)
    }
}

/// Produce the ordered evaluation points for a domain.
///
/// The same domain always yields the same sequence.
pub fn generate_parameter_domain(domain: &ParamDomain) -> Result<Vec<f64>> {
    match domain {
        ParamDomain::Single(t) => Ok(vec![*t]),
        ParamDomain::Range { start, end, step } => range_values(*start, *end, *step),
        ParamDomain::List(values) => Ok(values.clone()),
    }
}

/// `count` evenly spaced points from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count as f64 - 1.0);
            (0..count)
                .map(|i| if i + 1 == count { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

fn range_values(start: f64, end: f64, step: f64) -> Result<Vec<f64>> {
    if !(start.is_finite() && end.is_finite() && step.is_finite()) {
        return Err(CurveError::config(format!(
            "range fields must be finite (start={start}, end={end}, step={step})"
        )));
    }
    if step == 0.0 {
        return Err(CurveError::config("range step must not be zero"));
    }
    if step < 0.0 {
        return Err(CurveError::config(format!(
            "range step must be positive, got {step}"
        )));
    }

    if start > end {
        return Ok(Vec::new());
    }
    let approx_len = ((end - start) / step).floor() + 1.0;
    if approx_len > MAX_RANGE_LEN as f64 {
        return Err(CurveError::config(format!(
            "range would produce more than {MAX_RANGE_LEN} points"
        )));
    }

    // Absorbs representation error in `start + step * i` landing just past `end`,
    // but never a whole step or a whole rounding unit.
    let slack = (step * 1e-9).min(0.5 * 10f64.powi(-RANGE_DIGITS));
    let limit = end + slack;

    let mut out = Vec::with_capacity(approx_len as usize + 1);
    for i in 0usize.. {
        // Terms are computed from the index rather than accumulated, so rounding
        // error does not drift along the range.
        let t = start + step * i as f64;
        if t > limit {
            break;
        }
        out.push(round_digits(t, RANGE_DIGITS));
    }
    Ok(out)
}

fn round_digits(v: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    let scaled = v * scale;
    if scaled.is_finite() {
        scaled.round() / scale
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "{actual:?} vs {expected:?}");
        }
    }

    fn range(start: f64, end: f64, step: f64) -> Result<Vec<f64>> {
        generate_parameter_domain(&ParamDomain::Range { start, end, step })
    }

    #[test]
    fn range_includes_end() {
        assert_close(&range(0.0, 1.0, 0.25).unwrap(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn range_non_dividing_step() {
        assert_close(&range(0.0, 1.0, 0.3).unwrap(), &[0.0, 0.3, 0.6, 0.9]);
    }

    #[test]
    fn range_tenth_steps_reach_end() {
        // 0.1 is not exactly representable; the last term must still be 1.0.
        let values = range(0.0, 1.0, 0.1).unwrap();
        assert_eq!(values.len(), 11);
        assert_eq!(values[3], 0.3);
        assert_eq!(*values.last().unwrap(), 1.0);
    }

    #[test]
    fn range_step_below_rounding_unit_stops_at_end() {
        let values = range(0.0, 1e-10, 1e-11).unwrap();
        // Terms round to 10 digits, but nothing past `end` is emitted.
        assert_eq!(values.len(), 11);
        assert!(values.iter().all(|&v| (0.0..=1e-10).contains(&v)), "{values:?}");
        assert_eq!(*values.last().unwrap(), 1e-10);
    }

    #[test]
    fn range_end_not_representable_is_kept() {
        // 3 * 0.1 is 0.30000000000000004 in binary.
        assert_close(&range(0.0, 0.3, 0.1).unwrap(), &[0.0, 0.1, 0.2, 0.3]);
    }

    #[test]
    fn range_start_after_end_is_empty() {
        assert!(range(2.0, 1.0, 0.5).unwrap().is_empty());
    }

    #[test]
    fn range_rejects_bad_step() {
        assert!(matches!(range(0.0, 1.0, 0.0), Err(CurveError::Configuration(_))));
        assert!(matches!(range(0.0, 1.0, -0.1), Err(CurveError::Configuration(_))));
        assert!(matches!(range(0.0, f64::NAN, 0.1), Err(CurveError::Configuration(_))));
        assert!(matches!(range(0.0, 1e9, 1e-3), Err(CurveError::Configuration(_))));
    }

    #[test]
    fn parse_range_fields() {
        let d = ParamDomain::parse_range(" 0, 1 ,0.25").unwrap();
        assert_eq!(d, ParamDomain::Range { start: 0.0, end: 1.0, step: 0.25 });

        for bad in ["0,1", "0,1,0.1,2", "a,1,0.1", "0,,0.1", ""] {
            assert!(
                matches!(ParamDomain::parse_range(bad), Err(CurveError::Configuration(_))),
                "expected error for '{bad}'"
            );
        }
    }

    #[test]
    fn list_skips_malformed_entries() {
        let d = ParamDomain::from_lines(["1.0", "abc", "2.5", ""]);
        assert_eq!(generate_parameter_domain(&d).unwrap(), vec![1.0, 2.5]);

        let d = ParamDomain::from_lines([" 0.5 ", "nan", "inf", "-3"]);
        assert_eq!(generate_parameter_domain(&d).unwrap(), vec![0.5, -3.0]);
    }

    #[test]
    fn single_value() {
        assert_eq!(generate_parameter_domain(&ParamDomain::Single(1.7)).unwrap(), vec![1.7]);
    }

    #[test]
    fn generation_is_restartable() {
        let d = ParamDomain::Range { start: -0.5, end: 1.5, step: 0.1 };
        assert_eq!(generate_parameter_domain(&d).unwrap(), generate_parameter_domain(&d).unwrap());
    }

    #[test]
    fn selection_requires_exactly_one_mode() {
        let err = DomainSelection::default().resolve().unwrap_err();
        assert!(matches!(err, CurveError::Configuration(_)));

        let both = DomainSelection {
            single: Some(0.5),
            range: Some("0,1,0.5".to_string()),
            list: None,
        };
        assert!(matches!(both.resolve(), Err(CurveError::Configuration(_))));

        let one = DomainSelection {
            range: Some("0,1,0.5".to_string()),
            ..Default::default()
        };
        assert_eq!(
            one.resolve().unwrap(),
            ParamDomain::Range { start: 0.0, end: 1.0, step: 0.5 }
        );

        let list = DomainSelection {
            list: Some(vec!["0.1".to_string(), "x".to_string()]),
            ..Default::default()
        };
        assert_eq!(list.resolve().unwrap(), ParamDomain::List(vec![0.1]));
    }

    #[test]
    fn selection_propagates_range_parse_errors() {
        let sel = DomainSelection {
            range: Some("0;1;0.1".to_string()),
            ..Default::default()
        };
        assert!(matches!(sel.resolve(), Err(CurveError::Configuration(_))));
    }

    #[test]
    fn linspace_endpoints() {
        let v = linspace(0.0, 1.0, 5);
        assert_close(&v, &[0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    }
}
