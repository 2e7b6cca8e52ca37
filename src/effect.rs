//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone)]
pub enum Effect {
    /// Reload the snapshot after the simulated latency
    ReloadSnapshot { delay_ms: u64 },
}
