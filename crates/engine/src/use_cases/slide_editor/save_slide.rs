//! Save slide use case.
//!
//! Parse, validate and build run against the editing state first; the store
//! is written exactly once, and only when all three succeed.

use std::sync::Arc;

use lessonbldr_domain::{EditingContext, Slide, SlideEditingState, SlideId};

use crate::infrastructure::ports::{ContentStore, MediaResolver};

use super::error::SaveSlideError;

pub struct SaveSlide {
    store: Arc<dyn ContentStore>,
    media: Arc<dyn MediaResolver>,
    ctx: EditingContext,
}

impl SaveSlide {
    pub fn new(
        store: Arc<dyn ContentStore>,
        media: Arc<dyn MediaResolver>,
        ctx: EditingContext,
    ) -> Self {
        Self { store, media, ctx }
    }

    /// Save `state` over the stored slide and return the stored row.
    ///
    /// No retry on persist failure; the caller decides whether to try again.
    pub async fn execute(
        &self,
        slide_id: SlideId,
        state: &SlideEditingState,
    ) -> Result<Slide, SaveSlideError> {
        let stored = self.store.get_slide(slide_id).await.map_err(|e| match e {
            e if e.is_not_found() => SaveSlideError::NotFound(slide_id),
            e => SaveSlideError::Repo(e),
        })?;

        let state_kind = state.kind();
        if state_kind != stored.kind() {
            return Err(SaveSlideError::ValidationFailed(format!(
                "Editing state is for a {} slide but the slide is {}",
                state_kind,
                stored.kind()
            )));
        }

        let bucket = self.ctx.media_bucket.as_str();
        let resolve_uri = |path: &str| self.media.resolve_public_uri(bucket, path);
        let built = state.prepare_save(&self.ctx, &resolve_uri).map_err(|e| {
            tracing::debug!(slide_id = %slide_id, error = %e, "Slide save rejected");
            SaveSlideError::from(e)
        })?;

        let saved = self
            .store
            .update_slide(slide_id, built.into_update())
            .await
            .map_err(|e| {
                tracing::error!(slide_id = %slide_id, error = %e, "Failed to persist slide");
                SaveSlideError::PersistFailed(e.store_message())
            })?;

        tracing::info!(
            slide_id = %slide_id,
            slide_type = %saved.slide_type,
            is_activity = saved.is_activity,
            "Saved slide"
        );

        Ok(saved)
    }
}
