//! Runtime-agnostic async sleep for UI tasks.
//!
//! The browser build has no tokio reactor, so wasm32 uses gloo's
//! `setTimeout` future and every native renderer uses tokio.

/// Suspend the current task for `ms` milliseconds.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Suspend the current task for `ms` milliseconds.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
