use instant::Instant;

/// Elapsed-time source for `Scene::tick`. Works on native and web targets.
#[derive(Clone, Copy, Debug)]
pub struct SceneClock {
    start: Instant,
}

impl Default for SceneClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds since the clock started.
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}
