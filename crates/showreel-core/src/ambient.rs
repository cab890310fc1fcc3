//! Atmosphere around the items: twinkling star shells, drifting dust and the
//! planet body. None of it is pickable.

use crate::constants::{
    DUST_CENTER_Y, DUST_COUNT, DUST_HALF_EXTENT, DUST_SPIN, DUST_WRAP_FACTOR, DUST_Y_RANGE,
    PLANET_CENTER, PLANET_RADIUS, SUN_POSITION,
};
use glam::{Quat, Vec3};
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarLayerConfig {
    pub count: usize,
    pub min_radius: f32,
    pub max_radius: f32,
    pub size: f32,
    pub color: Vec3,
    pub opacity: f32,
}

/// Three shells, near-bright to far-faint, for a parallax feel.
pub fn default_star_layers() -> Vec<StarLayerConfig> {
    vec![
        StarLayerConfig {
            count: 400,
            min_radius: 80.0,
            max_radius: 200.0,
            size: 0.4,
            color: Vec3::ONE,
            opacity: 0.9,
        },
        StarLayerConfig {
            count: 800,
            min_radius: 60.0,
            max_radius: 220.0,
            size: 0.2,
            color: Vec3::new(0xdd as f32, 0xee as f32, 0xff as f32) / 255.0,
            opacity: 0.5,
        },
        StarLayerConfig {
            count: 1500,
            min_radius: 50.0,
            max_radius: 250.0,
            size: 0.1,
            color: Vec3::new(0xaa as f32, 0xbb as f32, 0xdd as f32) / 255.0,
            opacity: 0.25,
        },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub phase: f32,
    pub speed: f32,
}

impl Star {
    /// Brightness multiplier in [0, 1].
    #[inline]
    pub fn twinkle(&self, elapsed: f32) -> f32 {
        0.5 + 0.5 * (elapsed * self.speed + self.phase).sin()
    }
}

#[derive(Clone, Debug)]
pub struct StarLayer {
    pub config: StarLayerConfig,
    pub stars: Vec<Star>,
}

impl StarLayer {
    pub fn generate(config: StarLayerConfig, rng: &mut StdRng) -> Self {
        let span = (config.max_radius - config.min_radius).max(0.0);
        let stars = (0..config.count)
            .map(|_| {
                let r = config.min_radius + rng.gen::<f32>() * span;
                let theta = rng.gen::<f32>() * TAU;
                let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
                Star {
                    position: Vec3::new(
                        r * phi.sin() * theta.cos(),
                        r * phi.sin() * theta.sin(),
                        r * phi.cos(),
                    ),
                    phase: rng.gen::<f32>() * TAU,
                    speed: 0.5 + rng.gen::<f32>() * 2.0,
                }
            })
            .collect();
        Self { config, stars }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DustConfig {
    pub count: usize,
    pub color: Vec3,
    pub size: f32,
    pub opacity: f32,
    /// Rotation of the whole cloud around +Y, rad/s.
    pub spin: f32,
}

impl Default for DustConfig {
    fn default() -> Self {
        Self {
            count: DUST_COUNT,
            color: Vec3::new(0xaa as f32, 0xbb as f32, 0xcc as f32) / 255.0,
            size: 0.03,
            opacity: 0.4,
            spin: DUST_SPIN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DustParticle {
    pub position: Vec3,
    /// Displacement per frame step.
    pub velocity: Vec3,
}

#[derive(Clone, Debug)]
pub struct DustField {
    pub config: DustConfig,
    pub particles: Vec<DustParticle>,
    pub rotation: Quat,
}

impl DustField {
    pub fn generate(config: DustConfig, rng: &mut StdRng) -> Self {
        let [hx, hy, hz] = DUST_HALF_EXTENT;
        let particles = (0..config.count)
            .map(|_| DustParticle {
                position: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * hx,
                    (rng.gen::<f32>() - 0.5) * 2.0 * hy + DUST_CENTER_Y,
                    (rng.gen::<f32>() - 0.5) * 2.0 * hz,
                ),
                velocity: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 0.005,
                    (rng.gen::<f32>() - 0.5) * 0.003,
                    (rng.gen::<f32>() - 0.5) * 0.005,
                ),
            })
            .collect();
        Self {
            config,
            particles,
            rotation: Quat::IDENTITY,
        }
    }

    /// One frame of drift. Particles leaving the box are folded back in.
    pub fn step(&mut self, elapsed: f32) {
        let [hx, _, hz] = DUST_HALF_EXTENT;
        for p in &mut self.particles {
            p.position += p.velocity;
            if p.position.x.abs() > hx {
                p.position.x *= DUST_WRAP_FACTOR;
            }
            if p.position.y > DUST_Y_RANGE[1] || p.position.y < DUST_Y_RANGE[0] {
                p.velocity.y = -p.velocity.y;
            }
            if p.position.z.abs() > hz {
                p.position.z *= DUST_WRAP_FACTOR;
            }
        }
        self.rotation = Quat::from_rotation_y(self.config.spin * elapsed);
    }
}

/// Inputs of the external planet surface shader.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlanetUniforms {
    pub camera_pos: Vec3,
    pub time: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Planet {
    pub center: Vec3,
    pub radius: f32,
    pub uniforms: PlanetUniforms,
}

impl Default for Planet {
    fn default() -> Self {
        Self {
            center: PLANET_CENTER,
            radius: PLANET_RADIUS,
            uniforms: PlanetUniforms::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AmbientConfig {
    pub star_layers: Vec<StarLayerConfig>,
    pub dust: Option<DustConfig>,
    pub planet: bool,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            star_layers: default_star_layers(),
            dust: Some(DustConfig::default()),
            planet: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Ambient {
    pub stars: Vec<StarLayer>,
    pub dust: Option<DustField>,
    pub planet: Option<Planet>,
    pub sun: Vec3,
    pub time: f32,
}

impl Ambient {
    pub fn build(config: &AmbientConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = config
            .star_layers
            .iter()
            .map(|layer| StarLayer::generate(*layer, &mut rng))
            .collect::<Vec<_>>();
        let dust = config.dust.map(|d| DustField::generate(d, &mut rng));
        Self {
            stars,
            dust,
            planet: config.planet.then(Planet::default),
            sun: SUN_POSITION,
            time: 0.0,
        }
    }

    pub fn star_count(&self) -> usize {
        self.stars.iter().map(|l| l.stars.len()).sum()
    }

    pub fn update(&mut self, elapsed: f32, camera_pos: Vec3) {
        self.time = elapsed;
        if let Some(dust) = &mut self.dust {
            dust.step(elapsed);
        }
        if let Some(planet) = &mut self.planet {
            planet.uniforms = PlanetUniforms {
                camera_pos,
                time: elapsed,
            };
        }
    }
}
