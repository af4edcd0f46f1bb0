use fastrand::Rng;

pub const PARTICLE_COUNT: usize = 15;

/// One drifting smoke blob. Values are drawn once per mount.
#[derive(Clone, PartialEq, Debug)]
pub struct Particle {
    /// Start offset from the left edge, percent of viewport width.
    pub left: f64,
    /// Start offset from the top edge, percent of viewport height.
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub duration_secs: f64,
    pub rotate_deg: f64,
    pub scale: f64,
    pub delay_secs: f64,
}

impl Particle {
    pub fn random(rng: &mut Rng) -> Self {
        Self {
            left: rng.f64() * 25.0 - 30.0,
            top: rng.f64() * 100.0,
            width: rng.f64() * 300.0 + 150.0,
            height: rng.f64() * 300.0 + 150.0,
            duration_secs: rng.f64() * 30.0 + 30.0,
            rotate_deg: rng.f64() * 180.0 - 90.0,
            scale: rng.f64() * 0.5 + 0.5,
            delay_secs: rng.f64() * 15.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {width:.1}px; height: {height:.1}px; left: {left:.2}%; top: {top:.2}%; \
             --drift-rotate: {rotate:.1}deg; --drift-scale: {scale:.3}; \
             animation-duration: {duration:.2}s; animation-delay: {delay:.2}s;",
            width = self.width,
            height = self.height,
            left = self.left,
            top = self.top,
            rotate = self.rotate_deg,
            scale = self.scale,
            duration = self.duration_secs,
            delay = self.delay_secs,
        )
    }
}

pub fn generate_particles(rng: &mut Rng, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}
