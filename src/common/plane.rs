//! ピクセル座標と複素平面の対応

use num_complex::Complex64;

use super::constants::{DEFAULT_TOP_LEFT_X, DEFAULT_TOP_LEFT_Y, DEFAULT_ZOOM};
use super::error::{ExplorerError, Result};

/// 表示範囲（左上座標とズーム倍率）
///
/// `zoom_factor` は常に正の有限値。値を変えられるのは
/// [`ViewState::adjust_zoom`](super::view) だけで、更新結果は新しい値として返る。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    top_left_x: f64,
    top_left_y: f64,
    zoom_factor: f64,
}

impl ViewState {
    pub fn new(top_left_x: f64, top_left_y: f64, zoom_factor: f64) -> Result<Self> {
        if !top_left_x.is_finite() || !top_left_y.is_finite() {
            return Err(ExplorerError::InvalidOrigin {
                x: top_left_x,
                y: top_left_y,
            });
        }
        if !(zoom_factor.is_finite() && zoom_factor > 0.0) {
            return Err(ExplorerError::InvalidZoom(zoom_factor));
        }
        Ok(Self {
            top_left_x,
            top_left_y,
            zoom_factor,
        })
    }

    pub fn top_left_x(&self) -> f64 {
        self.top_left_x
    }

    pub fn top_left_y(&self) -> f64 {
        self.top_left_y
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// 1 ピクセルあたりの複素平面上の幅
    pub fn pixel_span(&self) -> f64 {
        1.0 / self.zoom_factor
    }

    /// x ピクセル → 実部
    #[inline]
    pub fn real(&self, px: f64) -> f64 {
        px / self.zoom_factor + self.top_left_x
    }

    /// y ピクセル → 虚部
    ///
    /// 左上の y を「足す」のではなく「引く」。
    /// 初期値 (+3) では画面上端が -3i になり、下に行くほど虚部が大きくなる。
    #[inline]
    pub fn imag(&self, py: f64) -> f64 {
        py / self.zoom_factor - self.top_left_y
    }

    /// 画面上のピクセル座標を複素平面上の座標に変換
    #[inline]
    pub fn pixel_to_complex(&self, px: f64, py: f64) -> Complex64 {
        Complex64::new(self.real(px), self.imag(py))
    }

    /// ズーム倍率の範囲チェックを済ませた内部用コンストラクタ
    pub(crate) fn with_fields(top_left_x: f64, top_left_y: f64, zoom_factor: f64) -> Self {
        Self {
            top_left_x,
            top_left_y,
            zoom_factor,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_fields(DEFAULT_TOP_LEFT_X, DEFAULT_TOP_LEFT_Y, DEFAULT_ZOOM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view() {
        let view = ViewState::default();
        assert_eq!(view.top_left_x(), -3.0);
        assert_eq!(view.top_left_y(), 3.0);
        assert_eq!(view.zoom_factor(), 100.0);
    }

    #[test]
    fn test_origin_pixel_maps_to_top_left_x_and_negated_y() {
        let view = ViewState::default();
        let c = view.pixel_to_complex(0.0, 0.0);
        assert_eq!(c.re, -3.0);
        assert_eq!(c.im, -3.0);
    }

    #[test]
    fn test_center_pixel_maps_to_origin() {
        let view = ViewState::default();
        let c = view.pixel_to_complex(300.0, 300.0);
        assert_eq!(c, Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_imag_grows_downwards() {
        let view = ViewState::default();
        assert!(view.imag(599.0) > view.imag(0.0));
        assert_eq!(view.imag(500.0), 2.0);
    }

    #[test]
    fn test_rejects_bad_zoom() {
        assert_eq!(
            ViewState::new(0.0, 0.0, 0.0),
            Err(ExplorerError::InvalidZoom(0.0))
        );
        assert!(ViewState::new(0.0, 0.0, -1.0).is_err());
        assert!(ViewState::new(0.0, 0.0, f64::INFINITY).is_err());
        assert!(ViewState::new(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_rejects_non_finite_origin() {
        assert!(matches!(
            ViewState::new(f64::NAN, 0.0, 1.0),
            Err(ExplorerError::InvalidOrigin { .. })
        ));
    }
}
