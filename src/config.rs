//! Page-supplied options, read from `data-*` attributes on the canvas.
//!
//! Parsing is plain string handling so it can be exercised on the host;
//! the wasm entry only fetches attribute values and hands them over.

use crate::pattern::{PatternMode, DEFAULT_CELLS, DEFAULT_FRAME_MS};

/// Which drawing surface the page asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    /// `CanvasRenderingContext2d` fills, driven by a fixed-interval timer.
    Raster,
    /// WebGL2 triangle draws, driven by animation-frame timestamps.
    Vector,
}

impl Backend {
    /// The attribute value naming this backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Raster => "2d",
            Backend::Vector => "webgl",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Options {
    pub backend: Backend,
    pub cells: u32,
    pub frame_ms: f64,
    pub mode: PatternMode,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            backend: Backend::Vector,
            cells: DEFAULT_CELLS,
            frame_ms: DEFAULT_FRAME_MS,
            mode: PatternMode::Scan,
        }
    }
}

impl Options {
    /// Build options from raw attribute values. Anything missing or
    /// malformed falls back to its default.
    pub fn from_attrs(
        backend: Option<&str>,
        cells: Option<&str>,
        frame_ms: Option<&str>,
        mode: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend: match backend {
                Some("2d") => Backend::Raster,
                Some("webgl") => Backend::Vector,
                _ => defaults.backend,
            },
            cells: cells
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|&n| n > 0)
                .unwrap_or(defaults.cells),
            frame_ms: frame_ms
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|ms| ms.is_finite() && *ms > 0.0)
                .unwrap_or(defaults.frame_ms),
            mode: match mode {
                Some("scan") => PatternMode::Scan,
                Some("grid") => PatternMode::Grid,
                _ => defaults.mode,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_attributes_yield_defaults() {
        let opts = Options::from_attrs(None, None, None, None);
        assert_eq!(opts, Options::default());
        assert_eq!(opts.backend, Backend::Vector);
        assert_eq!(opts.cells, 64);
        assert_eq!(opts.frame_ms, 100.0);
        assert_eq!(opts.mode, PatternMode::Scan);
    }

    #[test]
    fn attributes_override_defaults() {
        let opts = Options::from_attrs(Some("2d"), Some("32"), Some("50"), Some("grid"));
        assert_eq!(opts.backend, Backend::Raster);
        assert_eq!(opts.cells, 32);
        assert_eq!(opts.frame_ms, 50.0);
        assert_eq!(opts.mode, PatternMode::Grid);
    }

    #[test]
    fn malformed_attributes_fall_back() {
        let opts = Options::from_attrs(Some("vulkan"), Some("zero"), Some("-5"), Some("spiral"));
        assert_eq!(opts, Options::default());
        // A zero-cell grid would divide by zero in the metrics; rejected.
        assert_eq!(Options::from_attrs(None, Some("0"), None, None).cells, 64);
    }
}
