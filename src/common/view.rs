//! クリックによる移動・拡大縮小

use log::debug;

use super::constants::{ZOOM_FACTOR_IN, ZOOM_FACTOR_OUT};
use super::error::{ExplorerError, Result};
use super::plane::ViewState;

/// ズーム操作に使うマウスボタン
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickButton {
    Primary,
    Secondary,
    Other,
}

impl ClickButton {
    /// ボタンに対応するズーム倍率（対応しないボタンは `None`）
    pub fn zoom_multiplier(&self) -> Option<f64> {
        match self {
            ClickButton::Primary => Some(ZOOM_FACTOR_IN),
            ClickButton::Secondary => Some(ZOOM_FACTOR_OUT),
            ClickButton::Other => None,
        }
    }
}

impl ViewState {
    /// クリック位置を画面中心に移動し、ズーム倍率を `new_zoom` に変更した状態を返す
    ///
    /// 移動量は変更前の倍率、中心合わせは変更後の倍率で計算する。
    /// 画面の半分は整数で切り捨てる（幅 601 なら 300）。
    pub fn adjust_zoom(
        &self,
        click_x: f64,
        click_y: f64,
        new_zoom: f64,
        width: usize,
        height: usize,
    ) -> Result<ViewState> {
        if !(new_zoom.is_finite() && new_zoom > 0.0) {
            return Err(ExplorerError::InvalidZoom(new_zoom));
        }

        let old_zoom = self.zoom_factor();
        let mut top_left_x = self.top_left_x() + click_x / old_zoom;
        let mut top_left_y = self.top_left_y() - click_y / old_zoom;

        top_left_x -= (width / 2) as f64 / new_zoom;
        top_left_y += (height / 2) as f64 / new_zoom;

        if !top_left_x.is_finite() || !top_left_y.is_finite() {
            return Err(ExplorerError::InvalidOrigin {
                x: top_left_x,
                y: top_left_y,
            });
        }

        debug!(
            "zoom {} -> {} at ({}, {}): top-left ({}, {})",
            old_zoom, new_zoom, click_x, click_y, top_left_x, top_left_y
        );
        Ok(ViewState::with_fields(top_left_x, top_left_y, new_zoom))
    }

    /// ボタンの種類に応じたズーム（対応しないボタンは `Ok(None)`）
    pub fn click(
        &self,
        button: ClickButton,
        click_x: f64,
        click_y: f64,
        width: usize,
        height: usize,
    ) -> Result<Option<ViewState>> {
        match button.zoom_multiplier() {
            Some(multiplier) => self
                .adjust_zoom(
                    click_x,
                    click_y,
                    self.zoom_factor() * multiplier,
                    width,
                    height,
                )
                .map(Some),
            None => Ok(None),
        }
    }
}
