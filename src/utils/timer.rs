// ============================================================================
// TIMER - async sleep behind a trait (debounce, deferred dialog clear)
// ============================================================================

use std::time::Duration;

use async_trait::async_trait;

/// Suspends the current task for a while. Single-threaded, so `?Send`.
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Browser timer through `gloo-timers`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooSleeper;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Sleeper for GlooSleeper {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}
