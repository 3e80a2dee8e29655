use std::time::Duration;

/// Non-blocking artificial delay awaited by service calls. Zero means no sleep.
/// There is no cancellation path; callers always wait the full duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedLatency(Duration);

impl SimulatedLatency {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    pub async fn pause(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}
