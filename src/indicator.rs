use glam::Vec2;

/// A single rotating phase indicator: a circle whose phase angle selects a
/// point one unit out from its center.
pub struct PhaseIndicator {
    pub center: Vec2,
    pub phase: f32,
    pub radius: f32,
}

impl PhaseIndicator {
    pub fn new(center: Vec2, radius: f32, phase: f32) -> Self {
        Self {
            center,
            phase,
            radius,
        }
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    /// Set the phase directly, in radians.
    pub fn set_phase(&mut self, phase: f32) {
        self.phase = phase;
    }

    /// Advance the phase by an angle in degrees. The phase is left
    /// unnormalized; only its cosine and sine are ever consumed.
    pub fn rotate(&mut self, angle_deg: f32) {
        self.phase += angle_deg.to_radians();
    }

    /// The point the current phase selects, one unit from the center.
    pub fn phase_point(&self) -> Vec2 {
        self.center + Vec2::new(self.phase.cos(), self.phase.sin())
    }
}
