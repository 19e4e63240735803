/// Random boundary lines carved by a worker pool
pub mod boundary;
/// Mutex-guarded start point queue and fill counter
pub mod claims;
/// Phase orchestration and timing
pub mod executor;
/// Concurrent flood fill with red-channel arbitration
pub mod flood;
/// Per-worker random generator seeding
pub mod seeding;
