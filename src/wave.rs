use glam::Vec2;

use crate::indicator::PhaseIndicator;

/// An ordered, fixed-cardinality row of phase indicators along the x axis.
/// Every transformation is applied uniformly; the indicators never couple.
pub struct IndicatorSet {
    indicators: Vec<PhaseIndicator>,
}

impl IndicatorSet {
    /// Place `count` indicators at (i * spacing, 0), all with phase zero.
    pub fn new(count: usize, spacing: f32, radius: f32) -> Self {
        let indicators = (0..count)
            .map(|i| PhaseIndicator::new(Vec2::new(i as f32 * spacing, 0.), radius, 0.))
            .collect();
        Self { indicators }
    }

    /// Re-derive every center from a new spacing.
    pub fn apply_spacing(&mut self, spacing: f32) {
        for (i, indicator) in self.indicators.iter_mut().enumerate() {
            indicator.set_center(Vec2::new(i as f32 * spacing, 0.));
        }
    }

    /// Re-derive every phase from a per-index offset in degrees. The offset
    /// is taken mod 360, normalized to [0, 360) for negative steps.
    pub fn apply_phase_step(&mut self, phase_step_deg: f32) {
        for (i, indicator) in self.indicators.iter_mut().enumerate() {
            let deg = (i as f32 * phase_step_deg).rem_euclid(360.);
            indicator.set_phase(deg.to_radians());
        }
    }

    /// One animation step: rotate every indicator by the same angle, so the
    /// pairwise phase offsets are preserved.
    pub fn tick(&mut self, rotation_step_deg: f32) {
        for indicator in &mut self.indicators {
            indicator.rotate(rotation_step_deg);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhaseIndicator> {
        self.indicators.iter()
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_places_indicators_along_x() {
        let set = IndicatorSet::new(4, 2.5, 1.);
        for (i, indicator) in set.iter().enumerate() {
            assert_relative_eq!(indicator.center.x, i as f32 * 2.5, epsilon = 1e-6);
            assert_relative_eq!(indicator.center.y, 0., epsilon = 1e-6);
            assert_relative_eq!(indicator.phase, 0., epsilon = 1e-6);
        }
    }

    #[test]
    fn apply_spacing_rederives_centers() {
        let mut set = IndicatorSet::new(3, 1., 1.);
        set.apply_spacing(0.5);
        let xs: Vec<f32> = set.iter().map(|c| c.center.x).collect();
        assert_relative_eq!(xs[0], 0., epsilon = 1e-6);
        assert_relative_eq!(xs[1], 0.5, epsilon = 1e-6);
        assert_relative_eq!(xs[2], 1., epsilon = 1e-6);
    }

    #[test]
    fn apply_phase_step_wraps_mod_360() {
        let mut set = IndicatorSet::new(5, 1., 1.);
        set.apply_phase_step(100.);
        let phases: Vec<f32> = set.iter().map(|c| c.phase).collect();
        // 4 * 100 = 400 wraps to 40 degrees.
        assert_relative_eq!(phases[3], 300f32.to_radians(), epsilon = 1e-5);
        assert_relative_eq!(phases[4], 40f32.to_radians(), epsilon = 1e-5);
    }

    #[test]
    fn apply_phase_step_normalizes_negative_steps() {
        let mut set = IndicatorSet::new(3, 1., 1.);
        set.apply_phase_step(-90.);
        let phases: Vec<f32> = set.iter().map(|c| c.phase).collect();
        assert_relative_eq!(phases[0], 0., epsilon = 1e-5);
        assert_relative_eq!(phases[1], 270f32.to_radians(), epsilon = 1e-5);
        assert_relative_eq!(phases[2], 180f32.to_radians(), epsilon = 1e-5);
    }

    #[test]
    fn apply_phase_step_is_idempotent() {
        let mut once = IndicatorSet::new(8, 1., 1.);
        once.apply_phase_step(17.);
        let mut twice = IndicatorSet::new(8, 1., 1.);
        twice.apply_phase_step(17.);
        twice.apply_phase_step(17.);
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_relative_eq!(a.phase, b.phase, epsilon = 1e-6);
        }
    }

    #[test]
    fn tick_preserves_pairwise_phase_offsets() {
        let mut set = IndicatorSet::new(4, 1., 1.);
        set.apply_phase_step(45.);
        let before: Vec<f32> = set.iter().map(|c| c.phase).collect();
        set.tick(13.);
        set.tick(13.);
        let after: Vec<f32> = set.iter().map(|c| c.phase).collect();
        for i in 1..before.len() {
            assert_relative_eq!(
                after[i] - after[i - 1],
                before[i] - before[i - 1],
                epsilon = 1e-5
            );
        }
        assert_relative_eq!(after[0] - before[0], 26f32.to_radians(), epsilon = 1e-5);
    }
}
