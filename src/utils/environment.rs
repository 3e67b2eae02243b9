use crate::utils::{Float, Timer};
use std::sync::Arc;

/// Specifies a logging type.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Represents a computational quota for the search.
pub trait Quota: Send + Sync {
    /// Returns true when the quota is reached and the search should stop.
    fn is_reached(&self) -> bool;
}

/// A quota based on wall clock time.
pub struct TimeQuota {
    timer: Timer,
    limit_in_secs: Float,
}

impl TimeQuota {
    /// Creates a new instance of `TimeQuota` which starts counting from now.
    pub fn new(limit_in_secs: Float) -> Self {
        Self { timer: Timer::start(), limit_in_secs }
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        self.timer.elapsed_secs_as_float() > self.limit_in_secs
    }
}

/// Keeps track of environment specific parameters of the search.
#[derive(Clone)]
pub struct Environment {
    /// An optional deadline for the whole search, checked between iterations.
    pub quota: Option<Arc<dyn Quota>>,
    /// A logger used to print out some search information.
    pub logger: InfoLogger,
}

impl Default for Environment {
    fn default() -> Self {
        Self { quota: None, logger: Arc::new(|msg: &str| println!("{msg}")) }
    }
}

impl Environment {
    /// Creates an instance of `Environment` with the given time quota in seconds.
    pub fn new_with_time_quota(max_time: Float) -> Self {
        Self { quota: Some(Arc::new(TimeQuota::new(max_time))), ..Self::default() }
    }
}
