use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEFAULT_PARTICLE_COUNT: usize = 20;

/// Upper bound of the animation delay in seconds
pub const MAX_DELAY_SECONDS: f32 = 10.0;

/// Gradient of a particle, cycled by index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleGradient {
    PurpleToBlue,
    BlueToCyan,
    CyanToPurple,
}

pub const GRADIENTS: [ParticleGradient; 3] = [
    ParticleGradient::PurpleToBlue,
    ParticleGradient::BlueToCyan,
    ParticleGradient::CyanToPurple,
];

/// A decorative floating dot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position in percent of the container, [0, 100)
    pub left: f32,
    /// Vertical position in percent of the container, [0, 100)
    pub top: f32,
    /// Animation delay in seconds, [0, 10)
    pub delay: f32,
    pub gradient: ParticleGradient,
}

pub struct ParticleField {
    count: usize,
    seed: Option<u64>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            seed: None,
        }
    }

    pub fn with_config(count: usize, seed: Option<u64>) -> Self {
        Self { count, seed }
    }

    /// Generates the particles, reproducibly when a seed is set
    pub fn generate(&self) -> Vec<Particle> {
        match self.seed {
            Some(seed) => generate_with(&mut StdRng::seed_from_u64(seed), self.count),
            None => generate_with(&mut rand::thread_rng(), self.count),
        }
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates `count` particles from `rng`
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|i| Particle {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            delay: rng.gen_range(0.0..MAX_DELAY_SECONDS),
            gradient: GRADIENTS[i % GRADIENTS.len()],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_count_and_ranges() {
        let particles = ParticleField::new().generate();
        assert_eq!(particles.len(), 20);
        for p in &particles {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((0.0..MAX_DELAY_SECONDS).contains(&p.delay));
        }
    }

    #[test]
    fn test_gradients_cycle() {
        let particles = ParticleField::with_config(7, Some(1)).generate();
        let gradients: Vec<ParticleGradient> = particles.iter().map(|p| p.gradient).collect();
        assert_eq!(gradients[0], ParticleGradient::PurpleToBlue);
        assert_eq!(gradients[1], ParticleGradient::BlueToCyan);
        assert_eq!(gradients[2], ParticleGradient::CyanToPurple);
        assert_eq!(gradients[3], ParticleGradient::PurpleToBlue);
        assert_eq!(gradients[6], ParticleGradient::PurpleToBlue);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = ParticleField::with_config(20, Some(42)).generate();
        let b = ParticleField::with_config(20, Some(42)).generate();
        let c = ParticleField::with_config(20, Some(43)).generate();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_zero_count() {
        assert!(ParticleField::with_config(0, None).generate().is_empty());
    }
}
