use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{DocumentExtractor, ExtractionError};
use crate::domain::{ContentType, Extraction, UploadedFile};

/// Routes an upload to the extractor registered for its detected content type.
pub struct CompositeFileLoader {
    adapters: HashMap<ContentType, Arc<dyn DocumentExtractor>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(ContentType, Arc<dyn DocumentExtractor>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    pub fn supports(&self, content_type: ContentType) -> bool {
        self.adapters.contains_key(&content_type)
    }
}

#[async_trait]
impl DocumentExtractor for CompositeFileLoader {
    async fn extract(
        &self,
        file: &UploadedFile,
        page_range: Option<&str>,
    ) -> Result<Extraction, ExtractionError> {
        let adapter = file
            .content_type()
            .and_then(|content_type| self.adapters.get(&content_type));

        match adapter {
            Some(adapter) => adapter.extract(file, page_range).await,
            None => {
                tracing::debug!(filename = %file.filename, "No extractor for upload");
                Ok(Extraction::unsupported())
            }
        }
    }
}
