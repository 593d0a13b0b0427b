use std::time::Instant;

/// Rolling footer line for the console: generation, live-cell count, and
/// tick rate. Recomposed at most every 500ms so the footer stays readable.
pub struct StatusLine {
    alive: usize,
    ticks_since_refresh: usize,
    last_refresh: Instant,
}

impl StatusLine {
    pub fn new(alive: usize) -> Self {
        Self {
            alive,
            ticks_since_refresh: 0,
            last_refresh: Instant::now(),
        }
    }

    pub fn record(&mut self, alive: usize) {
        self.ticks_since_refresh += 1;
        self.alive = alive;
    }

    pub fn refresh_due(&self) -> bool {
        self.last_refresh.elapsed().as_millis() >= 500
    }

    pub fn compose(&mut self, generation: u64) -> String {
        let rate = self.ticks_since_refresh as f64 / self.last_refresh.elapsed().as_secs_f64();
        self.last_refresh = Instant::now();
        self.ticks_since_refresh = 0;

        format!("gen:{} alive:{} {:.02}gen/s", generation, self.alive, rate)
    }
}
