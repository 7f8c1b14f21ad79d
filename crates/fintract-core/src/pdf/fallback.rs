//! Ordered primary/fallback rendering policy.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use super::{LopdfRenderer, PdfExtractRenderer, Result, TextRenderer};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Which strategy produced the text, or the failures if none did.
#[derive(Debug)]
pub enum RenderOutcome {
    /// The primary strategy succeeded.
    Primary(String),
    /// The primary strategy failed and the fallback succeeded.
    Fallback(String),
    /// Every strategy failed. Errors are listed in the order tried.
    Failed(Vec<(&'static str, PdfError)>),
}

impl RenderOutcome {
    /// Rendered text, if any strategy succeeded.
    pub fn text(&self) -> Option<&str> {
        match self {
            RenderOutcome::Primary(text) | RenderOutcome::Fallback(text) => Some(text),
            RenderOutcome::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RenderOutcome::Failed(_))
    }
}

/// Tries the primary renderer, then the fallback only if the primary fails.
pub struct FallbackRenderer {
    primary: Box<dyn TextRenderer>,
    fallback: Option<Box<dyn TextRenderer>>,
    min_text_length: usize,
}

impl FallbackRenderer {
    /// pdf-extract first, lopdf second.
    pub fn new() -> Self {
        Self::with_strategies(
            Box::new(PdfExtractRenderer::new()),
            Some(Box::new(LopdfRenderer::new())),
        )
    }

    /// Build from explicit strategies.
    pub fn with_strategies(
        primary: Box<dyn TextRenderer>,
        fallback: Option<Box<dyn TextRenderer>>,
    ) -> Self {
        Self {
            primary,
            fallback,
            min_text_length: 1,
        }
    }

    /// Build the default chain shaped by configuration.
    pub fn from_config(config: &PdfConfig) -> Self {
        let mut renderer = Self::new();
        if !config.enable_fallback {
            renderer.fallback = None;
        }
        renderer.with_min_text_length(config.min_text_length)
    }

    /// Minimum non-whitespace characters for text to count as rendered.
    pub fn with_min_text_length(mut self, min: usize) -> Self {
        self.min_text_length = min;
        self
    }

    /// Remove the fallback strategy.
    pub fn without_fallback(mut self) -> Self {
        self.fallback = None;
        self
    }

    /// Read a file and render it. The file is closed before rendering starts.
    pub fn render_file(&self, path: &Path) -> RenderOutcome {
        let data = match fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return RenderOutcome::Failed(vec![("read", PdfError::Read(e))]);
            }
        };

        let outcome = self.render_bytes(&data);
        if let RenderOutcome::Failed(errors) = &outcome {
            let reasons: Vec<String> = errors
                .iter()
                .map(|(name, e)| format!("{}: {}", name, e))
                .collect();
            warn!(
                "Failed to extract text from {}: {}",
                path.display(),
                reasons.join("; ")
            );
        }
        outcome
    }

    /// Render in-memory PDF bytes.
    pub fn render_bytes(&self, data: &[u8]) -> RenderOutcome {
        let mut errors = Vec::new();

        match self.attempt(self.primary.as_ref(), data) {
            Ok(text) => return RenderOutcome::Primary(text),
            Err(e) => {
                info!("{} failed, trying fallback: {}", self.primary.name(), e);
                errors.push((self.primary.name(), e));
            }
        }

        if let Some(fallback) = &self.fallback {
            match self.attempt(fallback.as_ref(), data) {
                Ok(text) => return RenderOutcome::Fallback(text),
                Err(e) => errors.push((fallback.name(), e)),
            }
        }

        RenderOutcome::Failed(errors)
    }

    fn attempt(&self, renderer: &dyn TextRenderer, data: &[u8]) -> Result<String> {
        let text = renderer.render(data)?;
        let visible = text.chars().filter(|c| !c.is_whitespace()).count();
        if visible < self.min_text_length {
            return Err(PdfError::EmptyText(visible));
        }
        debug!("{} rendered {} chars", renderer.name(), text.len());
        Ok(text)
    }
}

impl Default for FallbackRenderer {
    fn default() -> Self {
        Self::new()
    }
}
