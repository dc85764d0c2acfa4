use crate::counter::StepCounter;
use crate::wave::IndicatorSet;

pub const DEFAULT_INDICATOR_COUNT: usize = 200;
pub const DEFAULT_INDICATOR_RADIUS: f32 = 1.;

/// Live animation parameters. Spacing and phase step re-derive the indicator
/// row immediately when set; rotation step only affects future ticks.
#[derive(Clone, Copy)]
pub struct Params {
    /// Distance between consecutive indicator centers.
    pub spacing: f32,
    /// Per-index phase offset in degrees.
    pub phase_step: f32,
    /// Degrees each indicator rotates per tick.
    pub rotation_step: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            spacing: 1.,
            phase_step: 0.1,
            rotation_step: 1.,
        }
    }
}

/// The animation: the indicator row, the step counter, the parameters and the
/// play/pause flag, driven by an external fixed-period tick.
pub struct Animation {
    indicators: IndicatorSet,
    counter: StepCounter,
    params: Params,
    playing: bool,
}

impl Animation {
    /// Starts paused, with all phases zero. The configured phase step is only
    /// applied on an explicit set or on reset.
    pub fn new(count: usize, params: Params) -> Self {
        Self {
            indicators: IndicatorSet::new(count, params.spacing, DEFAULT_INDICATOR_RADIUS),
            counter: StepCounter::new(),
            params,
            playing: false,
        }
    }

    /// One timer period. A no-op while paused.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        self.counter.count_up();
        self.indicators.tick(self.params.rotation_step);
    }

    /// Toggle play/pause. Touches nothing but the flag.
    pub fn switch(&mut self) {
        self.playing = !self.playing;
    }

    /// Pause, zero the counter, and restore the phase pattern of the
    /// currently configured phase step. Note this is the pattern of the last
    /// applied phase step, not the all-zero startup pattern.
    pub fn reset(&mut self) {
        self.playing = false;
        self.counter.reset();
        self.indicators.apply_phase_step(self.params.phase_step);
    }

    pub fn set_spacing(&mut self, spacing: f32) {
        self.params.spacing = spacing;
        self.indicators.apply_spacing(spacing);
    }

    pub fn set_phase_step(&mut self, phase_step: f32) {
        self.params.phase_step = phase_step;
        self.indicators.apply_phase_step(phase_step);
    }

    pub fn set_rotation_step(&mut self, rotation_step: f32) {
        self.params.rotation_step = rotation_step;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }

    pub fn counter(&self) -> &StepCounter {
        &self.counter
    }

    pub fn params(&self) -> &Params {
        &self.params
    }
}
