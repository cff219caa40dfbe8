//! 描画設定

use super::colors::ColorPolicy;
use super::constants::{BINARY_MAX_ITER, CANVAS_HEIGHT, CANVAS_WIDTH, MAX_ITER};
use super::error::{ExplorerError, Result};
use super::plane::ViewState;
use super::render::check_dimensions;

/// 計算モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Sequential,
    /// 行単位で rayon に分配
    Parallel,
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Sequential => write!(f, "sequential"),
            RenderMode::Parallel => write!(f, "parallel"),
        }
    }
}

/// エクスプローラ全体の設定
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub width: usize,
    pub height: usize,
    pub max_iterations: u32,
    pub initial_view: ViewState,
    pub color_policy: ColorPolicy,
    pub render_mode: RenderMode,
}

impl ExplorerConfig {
    /// 500 反復 + 帯状カラー
    pub fn banded() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            max_iterations: MAX_ITER,
            initial_view: ViewState::default(),
            color_policy: ColorPolicy::Banded,
            render_mode: RenderMode::Sequential,
        }
    }

    /// 50 反復 + 二値カラー
    pub fn binary() -> Self {
        Self {
            max_iterations: BINARY_MAX_ITER,
            color_policy: ColorPolicy::Binary,
            ..Self::banded()
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.width, self.height)?;
        if self.max_iterations == 0 {
            return Err(ExplorerError::InvalidIterations);
        }
        Ok(())
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self::banded()
    }
}
