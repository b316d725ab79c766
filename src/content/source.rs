//! The content fetch seam used by HTTP handlers and page rendering.

use async_trait::async_trait;
use std::sync::Arc;

use super::{ContentError, HomeData, ThemeData};

/// Anything that can produce site content.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn theme(&self) -> Result<ThemeData, ContentError>;

    async fn home(&self) -> Result<HomeData, ContentError>;

    /// Drop any cached content. Sources without a cache ignore this.
    async fn invalidate(&self) {}
}

#[async_trait]
impl<S: ContentSource + ?Sized> ContentSource for Arc<S> {
    async fn theme(&self) -> Result<ThemeData, ContentError> {
        (**self).theme().await
    }

    async fn home(&self) -> Result<HomeData, ContentError> {
        (**self).home().await
    }

    async fn invalidate(&self) {
        (**self).invalidate().await
    }
}
