pub mod contact;
pub mod markup;
pub mod object;

pub use contact::{sanitize_email, sanitize_url};
pub use markup::sanitize_text;
pub use object::{sanitize_object, ObjectSanitizer};

/// A single sanitization layer.
pub trait Sanitizer: Send + Sync {
    /// Sanitize the input string, returning text that is safe to render.
    fn sanitize(&self, input: &str) -> String;

    /// Name of this sanitizer layer (for logging/debugging).
    fn name(&self) -> &str;
}

/// The text sanitization pipeline. Runs all layers in sequence.
pub struct SanitizePipeline {
    layers: Vec<Box<dyn Sanitizer>>,
}

impl Default for SanitizePipeline {
    fn default() -> Self {
        Self::default_pipeline()
    }
}

impl SanitizePipeline {
    /// Create the default pipeline: markup stripping only.
    pub fn default_pipeline() -> Self {
        Self {
            layers: vec![Box::new(markup::MarkupSanitizer::new())],
        }
    }

    /// Create a pipeline from custom layers.
    pub fn new(layers: Vec<Box<dyn Sanitizer>>) -> Self {
        Self { layers }
    }

    /// Names of the layers, in execution order.
    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name()).collect()
    }

    /// Run all sanitization layers in sequence.
    pub fn sanitize(&self, input: &str) -> String {
        let mut result = input.to_string();
        for layer in &self.layers {
            result = layer.sanitize(&result);
        }
        result
    }
}
