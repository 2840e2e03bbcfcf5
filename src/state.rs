use crate::chart::layout::ChartLayout;
use crate::chart::scale::{self, LinearScale};
use crate::chart::transition::AxisTransition;
use crate::data::model::{AxisField, HealthDataset, Record};

// ---------------------------------------------------------------------------
// Chart state
// ---------------------------------------------------------------------------

/// What a valid axis-selection change requires the renderer to redo, in
/// order. Returned from [`ChartState::select_axis`] so the click-driven
/// update sequence can be asserted on without a live rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawEffect {
    RescaleX,
    AnimateAxis,
    AnimatePoints,
    RebindTooltips,
    HighlightLabel(AxisField),
}

/// The full chart state, independent of rendering.
pub struct ChartState {
    /// Loaded dataset (None until a CSV loads successfully).
    pub dataset: Option<HealthDataset>,

    /// The selected x-axis field. The only mutable piece of chart state;
    /// mutated exclusively through [`ChartState::select_axis`].
    pub chosen_axis: AxisField,

    /// Target x-scale for the current selection.
    pub x_scale: LinearScale,

    /// Fixed y-scale, rebuilt only when a new dataset loads.
    pub y_scale: LinearScale,

    /// In-flight axis animation, if any.
    pub transition: Option<AxisTransition>,

    /// Canvas and margin geometry.
    pub layout: ChartLayout,

    /// Reproduce the source chart's poverty-tooltip fall-through.
    pub legacy_poverty_label: bool,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl Default for ChartState {
    fn default() -> Self {
        let layout = ChartLayout::default();
        Self {
            dataset: None,
            chosen_axis: AxisField::Poverty,
            // Placeholder scales; real ones are built in set_dataset and the
            // renderer draws nothing until a dataset exists.
            x_scale: LinearScale::new((0.0, 1.0), (0.0, f64::from(layout.chart_width()))),
            y_scale: LinearScale::new((0.0, 1.0), (f64::from(layout.chart_height()), 0.0)),
            transition: None,
            layout,
            legacy_poverty_label: false,
            status_message: None,
        }
    }
}

impl ChartState {
    /// Ingest a newly loaded dataset and rebuild both scales.
    pub fn set_dataset(&mut self, dataset: HealthDataset) {
        self.x_scale = scale::x_scale(&dataset, self.chosen_axis, &self.layout);
        self.y_scale = scale::y_scale(&dataset, &self.layout);
        self.transition = None;
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// The axis-selection state transition: clicking the label for `field`
    /// at time `now`. Clicking the already-selected field is a no-op (no
    /// rescale, no animation, empty effect list). A valid change rebuilds
    /// the x-scale and starts an animation from whatever scale is currently
    /// on screen, retargeting any transition still in flight.
    pub fn select_axis(&mut self, field: AxisField, now: f64) -> Vec<RedrawEffect> {
        if field == self.chosen_axis {
            return Vec::new();
        }
        let from_field = self.chosen_axis;
        self.chosen_axis = field;

        let Some(dataset) = &self.dataset else {
            // Nothing loaded yet: remember the choice, nothing to redraw.
            return vec![RedrawEffect::HighlightLabel(field)];
        };

        let from = self.displayed_x_scale(now);
        let target = scale::x_scale(dataset, field, &self.layout);
        self.x_scale = target;
        self.transition = Some(AxisTransition::new(from, from_field, target, field, now));

        vec![
            RedrawEffect::RescaleX,
            RedrawEffect::AnimateAxis,
            RedrawEffect::AnimatePoints,
            RedrawEffect::RebindTooltips,
            RedrawEffect::HighlightLabel(field),
        ]
    }

    /// The x-scale the renderer should draw with right now: the eased
    /// interpolation while a transition is in flight, the target otherwise.
    pub fn displayed_x_scale(&self, now: f64) -> LinearScale {
        match &self.transition {
            Some(t) if !t.finished(now) => t.scale_at(now),
            _ => self.x_scale,
        }
    }

    /// A record's x pixel (relative to the chart area) right now. While a
    /// transition is in flight the point tweens from where the old field
    /// put it to where the new field puts it; afterwards it sits at the
    /// target scale's position.
    pub fn point_x(&self, record: &Record, now: f64) -> f64 {
        match &self.transition {
            Some(t) if !t.finished(now) => t.position_at(record, now),
            _ => self.x_scale.apply(self.chosen_axis.value(record)),
        }
    }

    /// Drop a transition that has run to completion.
    pub fn tick_transition(&mut self, now: f64) {
        if self.transition.is_some_and(|t| t.finished(now)) {
            self.transition = None;
        }
    }

    /// Whether the label for `field` is rendered "active". Derived from the
    /// selection, so exactly one label is active at any time.
    pub fn label_active(&self, field: AxisField) -> bool {
        self.chosen_axis == field
    }
}

// ---------------------------------------------------------------------------
