use std::fmt;

/// Failures anywhere in the frame pipeline.
///
/// None of these are recoverable for the frame that raised them: the caller
/// drops the frame rather than display a partially drawn one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A canvas or grid with a zero (or unaddressable) dimension.
    InvalidDimension { width: u32, height: u32 },
    /// A pixel or blit coordinate outside the `width x height` target.
    OutOfBounds {
        x: u64,
        y: u64,
        width: u32,
        height: u32,
    },
    /// Encoding or writing the finished frame failed.
    ExportFailure(String),
}

impl RenderError {
    pub fn code(&self) -> &'static str {
        match self {
            RenderError::InvalidDimension { .. } => "invalid_dimension",
            RenderError::OutOfBounds { .. } => "out_of_bounds",
            RenderError::ExportFailure(_) => "export_failure",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RenderError::InvalidDimension { .. } => "canvas and grid dimensions must be positive",
            RenderError::OutOfBounds { .. } => "coordinate lies outside the target canvas",
            RenderError::ExportFailure(_) => "could not encode or write the frame",
        }
    }

    pub fn export(err: impl fmt::Display) -> Self {
        RenderError::ExportFailure(err.to_string())
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidDimension { width, height } => {
                write!(f, "{}: {}x{}", self.message(), width, height)
            }
            RenderError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(f, "{}: ({}, {}) in {}x{}", self.message(), x, y, width, height),
            RenderError::ExportFailure(reason) => write!(f, "{}: {}", self.message(), reason),
        }
    }
}

impl std::error::Error for RenderError {}
