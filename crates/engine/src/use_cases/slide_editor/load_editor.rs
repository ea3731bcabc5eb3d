//! Load slide editor use case.

use std::sync::Arc;

use lessonbldr_domain::{EditingContext, SlideEditingState, SlideId};

use crate::infrastructure::ports::ContentStore;

use super::error::SlideEditorError;

/// Fetches a slide and turns it into editing state.
pub struct LoadSlideEditor {
    store: Arc<dyn ContentStore>,
    ctx: EditingContext,
}

impl LoadSlideEditor {
    pub fn new(store: Arc<dyn ContentStore>, ctx: EditingContext) -> Self {
        Self { store, ctx }
    }

    pub async fn execute(&self, slide_id: SlideId) -> Result<SlideEditingState, SlideEditorError> {
        let slide = self.store.get_slide(slide_id).await.map_err(|e| match e {
            e if e.is_not_found() => SlideEditorError::NotFound(slide_id),
            e => SlideEditorError::Repo(e),
        })?;

        SlideEditingState::load(&slide, &self.ctx).map_err(|e| {
            tracing::warn!(
                slide_id = %slide_id,
                slide_type = %slide.slide_type,
                error = %e,
                "Stored slide payload does not decode"
            );
            SlideEditorError::MalformedInput(e.reason().to_string())
        })
    }
}
