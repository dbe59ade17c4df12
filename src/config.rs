use std::time::Duration;

/// Site-wide settings shared with every component through context.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub owner_name: String,
    pub contact_email: String,
    /// How long a success or error banner stays up, in milliseconds.
    pub status_dismiss_ms: u64,
    /// Latency of the simulated message send, in milliseconds.
    pub send_latency_ms: u64,
    /// Vertical offset past which the header switches to its scrolled style.
    pub scroll_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Arun Pandey Laudari".to_string(),
            contact_email: "hello@yourname.com".to_string(),
            status_dismiss_ms: 5_000,
            send_latency_ms: 1_500,
            scroll_threshold: 10.0,
        }
    }
}

impl SiteConfig {
    pub fn status_dismiss(&self) -> Duration {
        Duration::from_millis(self.status_dismiss_ms)
    }

    pub fn send_latency(&self) -> Duration {
        Duration::from_millis(self.send_latency_ms)
    }
}
