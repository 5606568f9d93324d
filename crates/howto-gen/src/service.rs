use std::sync::Arc;
use tracing::{info, warn};

use howto_core::TutorialContent;

use crate::backend::GenerationBackend;
use crate::estimator::{Estimator, UniformEstimator};
use crate::fallback;

/// Generates tutorials. One backend attempt per query, no retries; every
/// failure is absorbed into the built-in template, so `generate` always
/// settles with renderable content.
pub struct TutorialService {
    backend: Option<Arc<dyn GenerationBackend>>,
    estimator: Box<dyn Estimator>,
}

impl TutorialService {
    /// Service backed by a live generation backend.
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            backend: Some(backend),
            estimator: Box::new(UniformEstimator),
        }
    }

    /// Service with no backend: every query renders the template.
    pub fn offline() -> Self {
        Self {
            backend: None,
            estimator: Box::new(UniformEstimator),
        }
    }

    /// Replace the estimation strategy.
    pub fn with_estimator(mut self, estimator: Box<dyn Estimator>) -> Self {
        self.estimator = estimator;
        self
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    pub fn backend_name(&self) -> Option<&str> {
        self.backend.as_deref().map(|b| b.name())
    }

    /// Generate a tutorial for a query. Never fails: backend errors are
    /// logged and replaced by the fallback template.
    pub async fn generate(&self, query: &str) -> TutorialContent {
        let markup = match &self.backend {
            Some(backend) => match backend.generate_markup(query).await {
                Ok(markup) => markup,
                Err(e) => {
                    warn!(error = %e, query, "generation failed, using fallback template");
                    fallback::fallback_markup(query)
                }
            },
            None => {
                info!(query, "no generation backend configured, using fallback template");
                fallback::fallback_markup(query)
            }
        };

        let estimate = self.estimator.estimate(query);
        TutorialContent::new(markup, estimate.time, estimate.difficulty)
    }
}
