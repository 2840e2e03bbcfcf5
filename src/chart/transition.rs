use crate::data::model::{AxisField, Record};

use super::scale::LinearScale;

// ---------------------------------------------------------------------------
// Axis transition – eased interpolation between two x-scales
// ---------------------------------------------------------------------------

/// How long an axis change animates, in the UI clock's seconds.
pub const AXIS_TRANSITION_SECS: f64 = 1.0;

/// Cubic in-out easing (the d3 transition default). Clamped outside [0, 1].
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// An in-flight animation of the x-axis. A pure function of the clock, so
/// the interpolation is testable without any rendering surface or timer:
/// `scale_at(now)` yields the scale the axis ticks should draw with, and
/// `position_at(record, now)` yields a circle's pixel position, tweened
/// from where the old field put it to where the new field puts it.
///
/// A click mid-flight simply replaces this with a new transition starting
/// from the currently displayed scale and field, overriding the old target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTransition {
    pub from: LinearScale,
    pub from_field: AxisField,
    pub to: LinearScale,
    pub to_field: AxisField,
    pub start: f64,
    pub duration: f64,
}

impl AxisTransition {
    pub fn new(
        from: LinearScale,
        from_field: AxisField,
        to: LinearScale,
        to_field: AxisField,
        start: f64,
    ) -> Self {
        Self {
            from,
            from_field,
            to,
            to_field,
            start,
            duration: AXIS_TRANSITION_SECS,
        }
    }

    pub fn finished(&self, now: f64) -> bool {
        now >= self.start + self.duration
    }

    fn progress(&self, now: f64) -> f64 {
        ease_cubic_in_out((now - self.start) / self.duration)
    }

    /// The interpolated scale at a point in time. Drives the axis ticks
    /// only; circles tween per point via [`AxisTransition::position_at`].
    pub fn scale_at(&self, now: f64) -> LinearScale {
        let t = self.progress(now);
        LinearScale::new(
            (
                lerp(self.from.domain.0, self.to.domain.0, t),
                lerp(self.from.domain.1, self.to.domain.1, t),
            ),
            (
                lerp(self.from.range.0, self.to.range.0, t),
                lerp(self.from.range.1, self.to.range.1, t),
            ),
        )
    }

    /// A record's x pixel at a point in time: the eased tween between its
    /// position under the old field/scale and under the new ones, the same
    /// way the source chart tweens each circle's `cx` attribute.
    pub fn position_at(&self, record: &Record, now: f64) -> f64 {
        let t = self.progress(now);
        lerp(
            self.from.apply(self.from_field.value(record)),
            self.to.apply(self.to_field.value(record)),
            t,
        )
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

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

    fn poverty_to_income() -> AxisTransition {
        AxisTransition::new(
            LinearScale::new((9.0, 20.0), (0.0, 820.0)),
            AxisField::Poverty,
            LinearScale::new((39.0, 60.0), (0.0, 820.0)),
            AxisField::Income,
            2.0,
        )
    }

    #[test]
    fn ease_hits_endpoints_and_midpoint() {
        assert_close(ease_cubic_in_out(0.0), 0.0);
        assert_close(ease_cubic_in_out(0.5), 0.5);
        assert_close(ease_cubic_in_out(1.0), 1.0);
        assert_close(ease_cubic_in_out(0.25), 0.0625);
    }

    #[test]
    fn ease_clamps_outside_unit_interval() {
        assert_close(ease_cubic_in_out(-0.5), 0.0);
        assert_close(ease_cubic_in_out(1.5), 1.0);
    }

    #[test]
    fn scale_at_start_is_the_old_scale() {
        let transition = poverty_to_income();
        assert_eq!(transition.scale_at(2.0), transition.from);
    }

    #[test]
    fn scale_at_end_is_the_new_scale() {
        let transition = poverty_to_income();
        let end = transition.scale_at(2.0 + AXIS_TRANSITION_SECS);
        assert_close(end.domain.0, transition.to.domain.0);
        assert_close(end.domain.1, transition.to.domain.1);
        assert!(transition.finished(2.0 + AXIS_TRANSITION_SECS));
    }

    #[test]
    fn eased_midpoint_is_halfway() {
        let transition = poverty_to_income();
        let mid = transition.scale_at(2.5);
        assert_close(mid.domain.0, 24.0);
        assert_close(mid.domain.1, 40.0);
    }

    #[test]
    fn position_tweens_pixels_from_old_field_to_new() {
        let transition = poverty_to_income();
        let r = record(10.0, 30.0, 40.0, 5.0);
        let start = transition.from.apply(10.0);
        let end = transition.to.apply(40.0);
        assert_close(transition.position_at(&r, 2.0), start);
        assert_close(transition.position_at(&r, 2.0 + AXIS_TRANSITION_SECS), end);
        assert_close(transition.position_at(&r, 2.5), (start + end) / 2.0);
    }

    #[test]
    fn position_at_start_is_on_the_chart_even_for_far_domains() {
        // Income values are far outside the poverty domain; the tween must
        // start from the old pixel position, not from old_scale(new_value).
        let transition = poverty_to_income();
        let r = record(20.0, 40.0, 60.0, 15.0);
        let start = transition.position_at(&r, 2.0);
        assert_close(start, 820.0);
        assert!(start >= 0.0 && start <= 820.0);
    }

    #[test]
    fn not_finished_before_duration_elapses() {
        let scale = LinearScale::new((0.0, 1.0), (0.0, 1.0));
        let transition =
            AxisTransition::new(scale, AxisField::Poverty, scale, AxisField::Age, 10.0);
        assert!(!transition.finished(10.0));
        assert!(!transition.finished(10.999));
        assert!(transition.finished(11.0));
    }
}
