//! Download statistics
//!
//! Per-platform download counts taken from the analytics trend report.

/// Download counts per platform plus the overall total
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlatformStats {
    pub linux: f64,
    pub windows: f64,
    pub darwin: f64,
    pub total: f64,
}

impl PlatformStats {
    /// Platform names as they appear in the trend report, in display order
    pub const PLATFORMS: [&'static str; 3] = ["linux", "windows", "darwin"];

    /// The stats as the fixed-order list `[linux, windows, darwin, total]`
    pub fn as_array(&self) -> [f64; 4] {
        [self.linux, self.windows, self.darwin, self.total]
    }
}
