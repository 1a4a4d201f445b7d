//! Floating particle decoration painted behind the page content.

use eframe::egui;
use egui::{Painter, Pos2, Rect};
use eduhack::theme::{gradient_colors, lerp_color, with_alpha, PARTICLE_ALPHA};
use eduhack::Particle;

const PARTICLE_RADIUS: f32 = 2.0;
/// Vertical drift amplitude in points
const FLOAT_AMPLITUDE: f32 = 12.0;
/// Seconds per float cycle
const FLOAT_PERIOD: f64 = 6.0;

/// Position and color of a particle at `time` seconds.
///
/// Each particle drifts up and down, phase-shifted by its delay; the
/// gradient color cycles on the same phase.
pub fn particle_appearance(particle: &Particle, area: Rect, time: f64) -> (Pos2, egui::Color32) {
    let phase = ((time + particle.delay as f64) / FLOAT_PERIOD).fract() as f32;
    let wave = (phase * std::f32::consts::TAU).sin();

    let x = area.left() + area.width() * particle.left / 100.0;
    let y = area.top() + area.height() * particle.top / 100.0 + wave * FLOAT_AMPLITUDE;

    let (from, to) = gradient_colors(particle.gradient);
    let color = lerp_color(from, to, (wave + 1.0) / 2.0);
    (Pos2::new(x, y), with_alpha(color, PARTICLE_ALPHA))
}

/// Paints all particles into `area` and keeps the animation running.
pub fn paint_particles(painter: &Painter, particles: &[Particle], area: Rect, time: f64) {
    for particle in particles {
        let (center, color) = particle_appearance(particle, area, time);
        painter.circle_filled(center, PARTICLE_RADIUS, color);
    }

    if !particles.is_empty() {
        painter.ctx().request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eduhack::ParticleGradient;

    #[test]
    fn test_particle_stays_near_its_anchor() {
        let area = Rect::from_min_size(Pos2::new(0.0, 0.0), egui::vec2(1000.0, 500.0));
        let particle = Particle {
            left: 50.0,
            top: 20.0,
            delay: 3.0,
            gradient: ParticleGradient::BlueToCyan,
        };

        for step in 0..60 {
            let (pos, color) = particle_appearance(&particle, area, step as f64 * 0.25);
            assert_eq!(pos.x, 500.0);
            assert!((pos.y - 100.0).abs() <= FLOAT_AMPLITUDE + 0.001);
            assert_eq!(color.a(), PARTICLE_ALPHA);
        }
    }
}
