use crate::data::model::{AxisField, HealthDataset};

use super::layout::ChartLayout;

// ---------------------------------------------------------------------------
// LinearScale – data domain interval → pixel range interval
// ---------------------------------------------------------------------------

/// A linear mapping from a data interval to a pixel interval. Built fresh
/// from the dataset on every axis change, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a data value to a pixel position. NaN in, NaN out.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Round tick values inside the domain, at a 1/2/5-stepped interval
    /// sized so roughly `count` ticks fit (what a d3 bottom/left axis
    /// renders). Empty for degenerate or non-finite domains.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (a, b) = self.domain;
        if !a.is_finite() || !b.is_finite() || a >= b {
            return Vec::new();
        }
        let step = tick_step(a, b, count);
        let start = (a / step).ceil() * step;
        let mut ticks = Vec::new();
        let mut i = 0u32;
        loop {
            let v = start + f64::from(i) * step;
            if v > b + step * 1e-9 {
                break;
            }
            ticks.push(v);
            i += 1;
        }
        ticks
    }
}

/// d3's tick increment: power of ten scaled by 1, 2, 5, or 10.
fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let step0 = (stop - start) / count.max(1) as f64;
    let base = 10f64.powf(step0.log10().floor());
    let error = step0 / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    base * factor
}

// ---------------------------------------------------------------------------
// Scale builders
// ---------------------------------------------------------------------------

/// X-scale for the chosen field: domain `[min − 1, max]`, range
/// `[0, chart width]`. The −1 pads only the lower bound so the leftmost
/// circle is not flush against the y-axis; the upper bound is exact.
pub fn x_scale(dataset: &HealthDataset, field: AxisField, layout: &ChartLayout) -> LinearScale {
    let (min, max) = dataset.extent(field).unwrap_or((f64::NAN, f64::NAN));
    LinearScale::new((min - 1.0, max), (0.0, f64::from(layout.chart_width())))
}

/// Y-scale for the outcome measure: domain `[0, max healthcare]`, range
/// inverted because pixel y grows downward. Built once per dataset and
/// independent of the axis selection.
pub fn y_scale(dataset: &HealthDataset, layout: &ChartLayout) -> LinearScale {
    let max = dataset.max_healthcare().unwrap_or(f64::NAN);
    LinearScale::new((0.0, max), (f64::from(layout.chart_height()), 0.0))
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn record(poverty: f64, age: f64, income: f64, healthcare: f64) -> Record {
        Record {
            state: "Testland".to_owned(),
            abbr: "TL".to_owned(),
            poverty,
            age,
            income,
            healthcare,
        }
    }

    fn two_states() -> HealthDataset {
        HealthDataset::new(vec![
            record(10.0, 30.0, 40.0, 5.0),
            record(20.0, 40.0, 60.0, 15.0),
        ])
    }

    #[test]
    fn x_domain_pads_lower_bound_only() {
        let ds = two_states();
        let layout = ChartLayout::default();
        assert_eq!(x_scale(&ds, AxisField::Poverty, &layout).domain, (9.0, 20.0));
        assert_eq!(x_scale(&ds, AxisField::Age, &layout).domain, (29.0, 40.0));
        assert_eq!(x_scale(&ds, AxisField::Income, &layout).domain, (39.0, 60.0));
    }

    #[test]
    fn x_range_spans_chart_width() {
        let scale = x_scale(&two_states(), AxisField::Poverty, &ChartLayout::default());
        assert_eq!(scale.range, (0.0, 820.0));
    }

    #[test]
    fn y_domain_starts_at_zero_with_inverted_range() {
        let scale = y_scale(&two_states(), &ChartLayout::default());
        assert_eq!(scale.domain, (0.0, 15.0));
        assert_eq!(scale.range, (350.0, 0.0));
    }

    #[test]
    fn apply_maps_domain_endpoints_to_range_endpoints() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert_eq!(scale.apply(0.0), 0.0);
        assert_eq!(scale.apply(10.0), 100.0);
        assert_eq!(scale.apply(5.0), 50.0);
    }

    #[test]
    fn apply_respects_inverted_range() {
        let scale = LinearScale::new((0.0, 10.0), (350.0, 0.0));
        assert_eq!(scale.apply(0.0), 350.0);
        assert_eq!(scale.apply(10.0), 0.0);
    }

    #[test]
    fn nan_value_maps_to_nan_without_panicking() {
        let scale = x_scale(&two_states(), AxisField::Poverty, &ChartLayout::default());
        assert!(scale.apply(f64::NAN).is_nan());
    }

    #[test]
    fn nan_cell_does_not_poison_the_domain() {
        let mut ds = two_states();
        ds.records.push(record(f64::NAN, 35.0, 50.0, 10.0));
        let scale = x_scale(&ds, AxisField::Poverty, &ChartLayout::default());
        assert_eq!(scale.domain, (9.0, 20.0));
        // The bad cell still maps to a degenerate position for its own point.
        assert!(scale.apply(ds.records[2].poverty).is_nan());
    }

    #[test]
    fn empty_dataset_yields_nan_domain() {
        let scale = x_scale(
            &HealthDataset::default(),
            AxisField::Poverty,
            &ChartLayout::default(),
        );
        assert!(scale.domain.0.is_nan());
        assert!(scale.domain.1.is_nan());
        assert!(scale.ticks(10).is_empty());
    }

    #[test]
    fn ticks_are_round_values_inside_the_domain() {
        let scale = LinearScale::new((9.0, 20.0), (0.0, 820.0));
        let ticks = scale.ticks(10);
        assert_eq!(ticks.first(), Some(&9.0));
        assert_eq!(ticks.last(), Some(&20.0));
        for pair in ticks.windows(2) {
            assert_eq!(pair[1] - pair[0], 1.0);
        }
    }

    #[test]
    fn ticks_pick_coarser_steps_for_wide_domains() {
        let scale = LinearScale::new((39.0, 60.0), (0.0, 820.0));
        let ticks = scale.ticks(10);
        // span 21 over ~10 ticks → step 2
        assert_eq!(ticks.first(), Some(&40.0));
        assert_eq!(ticks.last(), Some(&60.0));
        assert_eq!(ticks.len(), 11);
    }
}
