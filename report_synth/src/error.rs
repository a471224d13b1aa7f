use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthesisErrorKind {
    NoMetricsAvailable,
}

impl SynthesisErrorKind {
    pub(crate) fn from_code(code: &'static str) -> Self {
        match code {
            "E1001" => Self::NoMetricsAvailable,

            // Only one failure mode exists today.
            _ => Self::NoMetricsAvailable,
        }
    }
}

#[derive(Debug, Error, Clone)]
#[error("{code}: {message}")]
pub struct SynthesisError {
    pub code: &'static str,
    pub kind: SynthesisErrorKind,
    pub message: String,

    pub student: Option<String>,
    pub context: Option<String>,
}

impl SynthesisError {
    pub(crate) fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            kind: SynthesisErrorKind::from_code(code),
            message: message.into(),

            student: None,
            context: None,
        }
    }

    pub(crate) fn no_metrics() -> Self {
        Self::new(
            "E1001",
            "failed to generate report data - no metrics available",
        )
    }

    pub fn with_student(mut self, student: impl Into<String>) -> Self {
        self.student = Some(student.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// True when retrying with the same input cannot succeed.
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind, SynthesisErrorKind::NoMetricsAvailable)
    }
}
