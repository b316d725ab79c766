//! Cache-first content source.
//!
//! Successful responses are kept for a fixed TTL; failures are never cached so
//! the next request goes back to the backend. A TTL of zero disables caching.

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use super::{ContentError, ContentSource, HomeData, ThemeData};

struct Entry<T> {
    value: T,
    fetched_at: Instant,
}

type Slot<T> = RwLock<Option<Entry<T>>>;

pub struct CachedContent<S> {
    inner: S,
    ttl: Duration,
    theme: Slot<ThemeData>,
    home: Slot<HomeData>,
}

impl<S: ContentSource> CachedContent<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            theme: RwLock::new(None),
            home: RwLock::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

async fn fresh<T: Clone>(slot: &Slot<T>, ttl: Duration) -> Option<T> {
    let entry = slot.read().await;
    entry
        .as_ref()
        .filter(|e| e.fetched_at.elapsed() < ttl)
        .map(|e| e.value.clone())
}

async fn cache_first<T, F, Fut>(
    slot: &Slot<T>,
    ttl: Duration,
    what: &'static str,
    fetch: F,
) -> Result<T, ContentError>
where
    T: Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ContentError>>,
{
    if let Some(value) = fresh(slot, ttl).await {
        tracing::trace!("{} served from cache", what);
        return Ok(value);
    }

    match fetch().await {
        Ok(value) => {
            *slot.write().await = Some(Entry {
                value: value.clone(),
                fetched_at: Instant::now(),
            });
            tracing::debug!("{} fetched from backend", what);
            Ok(value)
        }
        Err(e) => {
            tracing::warn!("Failed to fetch {}: {}", what, e);
            Err(e)
        }
    }
}

#[async_trait]
impl<S: ContentSource> ContentSource for CachedContent<S> {
    async fn theme(&self) -> Result<ThemeData, ContentError> {
        cache_first(&self.theme, self.ttl, "theme", || self.inner.theme()).await
    }

    async fn home(&self) -> Result<HomeData, ContentError> {
        cache_first(&self.home, self.ttl, "home", || self.inner.home()).await
    }

    async fn invalidate(&self) {
        *self.theme.write().await = None;
        *self.home.write().await = None;
        self.inner.invalidate().await;
        tracing::info!("Content cache invalidated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{HeaderMenu, Home, Theme};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct CountingSource {
        theme_calls: AtomicUsize,
        home_calls: AtomicUsize,
        failing: AtomicBool,
    }

    #[async_trait]
    impl ContentSource for CountingSource {
        async fn theme(&self) -> Result<ThemeData, ContentError> {
            self.theme_calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                return Err(ContentError::Status(503));
            }
            Ok(ThemeData {
                get_theme: Some(Theme {
                    header_menu: Some(HeaderMenu {
                        label: "Main".into(),
                        menu_entries: vec![],
                    }),
                }),
            })
        }

        async fn home(&self) -> Result<HomeData, ContentError> {
            self.home_calls.fetch_add(1, Ordering::SeqCst);
            Ok(HomeData {
                get_home: Some(Home {
                    overlay: "Welcome".into(),
                    ..Default::default()
                }),
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn serves_cached_value_within_ttl() {
        let source = Arc::new(CountingSource::default());
        let cached = CachedContent::new(source.clone(), Duration::from_secs(60));

        cached.theme().await.unwrap();
        cached.theme().await.unwrap();
        cached.home().await.unwrap();

        assert_eq!(source.theme_calls.load(Ordering::SeqCst), 1);
        assert_eq!(source.home_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn refetches_after_ttl_expires() {
        let source = Arc::new(CountingSource::default());
        let cached = CachedContent::new(source.clone(), Duration::from_secs(60));

        cached.theme().await.unwrap();
        tokio::time::advance(Duration::from_secs(61)).await;
        cached.theme().await.unwrap();

        assert_eq!(source.theme_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let source = Arc::new(CountingSource::default());
        source.failing.store(true, Ordering::SeqCst);
        let cached = CachedContent::new(source.clone(), Duration::from_secs(60));

        assert!(cached.theme().await.is_err());

        source.failing.store(false, Ordering::SeqCst);
        let theme = cached.theme().await.unwrap();

        assert_eq!(theme.header_menu().map(|m| m.label.as_str()), Some("Main"));
        assert_eq!(source.theme_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn zero_ttl_disables_caching() {
        let source = Arc::new(CountingSource::default());
        let cached = CachedContent::new(source.clone(), Duration::ZERO);

        cached.home().await.unwrap();
        cached.home().await.unwrap();

        assert_eq!(source.home_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let source = Arc::new(CountingSource::default());
        let cached = CachedContent::new(source.clone(), Duration::from_secs(60));

        cached.theme().await.unwrap();
        cached.invalidate().await;
        cached.theme().await.unwrap();

        assert_eq!(source.theme_calls.load(Ordering::SeqCst), 2);
    }
}
