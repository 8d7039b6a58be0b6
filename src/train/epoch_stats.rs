/// Per-epoch training statistics emitted by `train_loop`.
///
/// The loop hands one `EpochStats` to its progress callback at the end of
/// every completed epoch; the CLI turns it into an `Epoch i/N - loss: x` line.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean squared error over all samples in this epoch.
    pub train_loss: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
