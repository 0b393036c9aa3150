//! Runtime setup performed once before a command runs.

use tracing::debug;

/// Size the rayon global pool from `--jobs`. `0` means one thread per core.
pub fn configure_thread_pool(jobs: usize) {
    let threads = get_worker_count(jobs);
    match rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
    {
        Ok(()) => debug!("Scoring with {} worker threads", threads),
        Err(e) => debug!("Thread pool already configured: {}", e),
    }
}

/// Number of worker threads a `--jobs` value resolves to.
pub fn get_worker_count(jobs: usize) -> usize {
    if jobs > 0 {
        return jobs;
    }
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}
