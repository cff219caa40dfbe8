//! エラー型

/// 設定や表示状態の不変条件違反
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExplorerError {
    #[error("zoom factor must be positive and finite, got {0}")]
    InvalidZoom(f64),
    #[error("top-left corner must be finite, got ({x}, {y})")]
    InvalidOrigin { x: f64, y: f64 },
    #[error("canvas dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("max iterations must be at least 1")]
    InvalidIterations,
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
