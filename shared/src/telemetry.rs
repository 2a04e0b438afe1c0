use std::time::Instant;

/// Wall-clock timer for a single query run.
pub struct Telemetry {
    start: Instant,
}

impl Telemetry {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }

    /// Reports elapsed time on stderr; stdout stays reserved for query
    /// output.
    pub fn report(&self, label: &str) {
        eprintln!("{} took {:.2?}", label, self.elapsed());
    }
}
