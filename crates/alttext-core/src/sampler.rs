//! Repeated sampling of captions for a single image.
//!
//! Each sample runs the captioner and extracts a caption. Samples run one
//! after another; the next process starts only after the previous one exits.

use crate::captioner::Captioner;
use crate::error::ExecutionError;
use crate::extract::extract_caption;
use crate::types::{AltTextResponse, CaptionRequest};
use std::sync::Arc;

/// Draws `count` captions from a [`Captioner`].
#[derive(Clone)]
pub struct Sampler {
    captioner: Arc<dyn Captioner>,
}

impl Sampler {
    pub fn new(captioner: Arc<dyn Captioner>) -> Self {
        Self { captioner }
    }

    /// Name of the underlying captioner.
    pub fn captioner_name(&self) -> &str {
        self.captioner.name()
    }

    /// Generate captions for `request`.
    ///
    /// Empty captions are dropped. The first failed invocation aborts the
    /// whole request and any captions collected so far are discarded.
    pub async fn generate(
        &self,
        request: &CaptionRequest,
    ) -> Result<AltTextResponse, ExecutionError> {
        self.generate_with_progress(request, |_, _| {}).await
    }

    /// Like [`generate`](Self::generate), calling `on_sample(done, total)`
    /// after each successful invocation.
    pub async fn generate_with_progress<F>(
        &self,
        request: &CaptionRequest,
        mut on_sample: F,
    ) -> Result<AltTextResponse, ExecutionError>
    where
        F: FnMut(usize, usize),
    {
        let mut alt_texts = Vec::with_capacity(request.count);

        for i in 0..request.count {
            let raw = self
                .captioner
                .run(&request.image_path, &request.model)
                .await
                .inspect_err(|e| {
                    tracing::warn!(
                        "Sample {}/{} for {} failed: {e}",
                        i + 1,
                        request.count,
                        request.image_path
                    );
                })?;

            let caption = extract_caption(&raw);
            if caption.is_empty() {
                tracing::debug!("Sample {}/{} produced no caption", i + 1, request.count);
            } else {
                alt_texts.push(caption);
            }
            on_sample(i + 1, request.count);
        }

        let response = AltTextResponse { alt_texts };
        tracing::info!(
            image = %request.image_path,
            model = %request.model,
            requested = request.count,
            generated = response.len(),
            "Alt-text generation complete"
        );

        Ok(response)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    /// A scripted captioner for testing sampler and server behavior.
    ///
    /// Each call to `run()` invokes the response factory with the current
    /// call index, so callers can return different output per sample.
    pub(crate) struct MockCaptioner {
        response_fn: Box<dyn Fn(u32) -> Result<String, ExecutionError> + Send + Sync>,
        pub(crate) call_count: Arc<AtomicU32>,
        pub(crate) calls: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl MockCaptioner {
        pub(crate) fn new<F>(f: F) -> Self
        where
            F: Fn(u32) -> Result<String, ExecutionError> + Send + Sync + 'static,
        {
            Self {
                response_fn: Box::new(f),
                call_count: Arc::new(AtomicU32::new(0)),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Always returns the same output.
        pub(crate) fn constant(output: &str) -> Self {
            let output = output.to_string();
            Self::new(move |_| Ok(output.clone()))
        }
    }

    pub(crate) fn exit_failure() -> ExecutionError {
        ExecutionError::Exited {
            program: "ollama".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "Error: model crashed".to_string(),
        }
    }

    #[async_trait]
    impl Captioner for MockCaptioner {
        fn name(&self) -> &str {
            "mock"
        }

        async fn run(&self, image_path: &str, model: &str) -> Result<String, ExecutionError> {
            let idx = self.call_count.fetch_add(1, Ordering::SeqCst);
            self.calls
                .lock()
                .unwrap()
                .push((image_path.to_string(), model.to_string()));
            (self.response_fn)(idx)
        }
    }

    #[tokio::test]
    async fn test_generates_count_captions() {
        let mock = Arc::new(MockCaptioner::constant("\"a cat on a mat\""));
        let sampler = Sampler::new(mock.clone());

        let response = sampler
            .generate(&CaptionRequest::new("/img.png", "llava", 2))
            .await
            .unwrap();

        assert_eq!(response.alt_texts, ["a cat on a mat", "a cat on a mat"]);
        assert_eq!(mock.call_count.load(Ordering::SeqCst), 2);
        let calls = mock.calls.lock().unwrap();
        assert!(calls
            .iter()
            .all(|(path, model)| path == "/img.png" && model == "llava"));
    }

    #[tokio::test]
    async fn test_preserves_invocation_order() {
        let mock = Arc::new(MockCaptioner::new(|i| Ok(format!("caption {i}"))));
        let sampler = Sampler::new(mock);

        let response = sampler
            .generate(&CaptionRequest::new("/img.png", "llava", 4))
            .await
            .unwrap();

        assert_eq!(
            response.alt_texts,
            ["caption 0", "caption 1", "caption 2", "caption 3"]
        );
    }

    #[tokio::test]
    async fn test_empty_captions_are_dropped() {
        let mock = Arc::new(MockCaptioner::new(|i| {
            Ok(if i % 2 == 0 { "  \n".to_string() } else { format!("\"kept {i}\"") })
        }));
        let sampler = Sampler::new(mock.clone());

        let response = sampler
            .generate(&CaptionRequest::new("/img.png", "llava", 4))
            .await
            .unwrap();

        assert_eq!(response.alt_texts, ["kept 1", "kept 3"]);
        assert_eq!(response.len(), 2);
        assert_eq!(mock.call_count.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_all_empty_is_not_an_error() {
        let mock = Arc::new(MockCaptioner::constant(""));
        let sampler = Sampler::new(mock);

        let response = sampler
            .generate(&CaptionRequest::new("/img.png", "llava", 3))
            .await
            .unwrap();

        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn test_zero_count_never_invokes() {
        let mock = Arc::new(MockCaptioner::constant("\"unused\""));
        let sampler = Sampler::new(mock.clone());

        let response = sampler
            .generate(&CaptionRequest::new("/img.png", "llava", 0))
            .await
            .unwrap();

        assert!(response.is_empty());
        assert_eq!(mock.call_count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failure_short_circuits() {
        let mock = Arc::new(MockCaptioner::new(|i| {
            if i == 1 {
                Err(exit_failure())
            } else {
                Ok("\"a cat\"".to_string())
            }
        }));
        let sampler = Sampler::new(mock.clone());

        let err = sampler
            .generate(&CaptionRequest::new("/img.png", "llava", 3))
            .await
            .unwrap_err();

        assert!(matches!(err, ExecutionError::Exited { .. }));
        // Third sample never runs
        assert_eq!(mock.call_count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_progress_reports_each_sample() {
        let mock = Arc::new(MockCaptioner::new(|i| {
            Ok(if i == 0 { String::new() } else { "a boat".to_string() })
        }));
        let sampler = Sampler::new(mock);
        let mut seen = Vec::new();

        sampler
            .generate_with_progress(&CaptionRequest::new("/img.png", "llava", 3), |done, total| {
                seen.push((done, total))
            })
            .await
            .unwrap();

        assert_eq!(seen, [(1, 3), (2, 3), (3, 3)]);
    }
}
