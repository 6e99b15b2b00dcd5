/// Batch size for sending entries through the channel in parallel walks.
/// Larger batches reduce channel overhead but increase latency.
pub const BATCH_SIZE: usize = 64;
