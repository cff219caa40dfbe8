//! 表示状態と画素バッファを持つセッション

use std::time::Instant;

use log::{debug, info};
use num_complex::Complex64;

use super::config::ExplorerConfig;
use super::error::Result;
use super::plane::ViewState;
use super::render::{render_into, PixelBuffer};
use super::view::ClickButton;

/// エクスプローラの状態
///
/// 表示範囲とバッファはこの構造体だけが持つ。
/// ズームやリセットのたびに全体を描き直す。
#[derive(Debug)]
pub struct Explorer {
    config: ExplorerConfig,
    view: ViewState,
    buffer: PixelBuffer,
}

impl Explorer {
    /// 設定を検証して初期表示を描画する
    pub fn new(config: ExplorerConfig) -> Result<Self> {
        config.validate()?;
        let buffer = PixelBuffer::new(config.width, config.height)?;
        let mut explorer = Self {
            view: config.initial_view,
            config,
            buffer,
        };
        explorer.render();
        Ok(explorer)
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// 画面中心に対応する複素平面上の座標
    pub fn center(&self) -> Complex64 {
        self.view.pixel_to_complex(
            (self.config.width / 2) as f64,
            (self.config.height / 2) as f64,
        )
    }

    /// 現在の表示範囲でバッファを描き直す
    pub fn render(&mut self) -> &PixelBuffer {
        let start = Instant::now();
        render_into(
            &mut self.buffer,
            &self.view,
            self.config.max_iterations,
            self.config.color_policy,
            self.config.render_mode,
        );
        let center = self.center();
        debug!(
            "再描画: {:.2?} [{}] | 中心: ({:.6}, {:.6}i) | ズーム: x{:.2e}",
            start.elapsed(),
            self.config.render_mode,
            center.re,
            center.im,
            self.view.zoom_factor()
        );
        &self.buffer
    }

    /// クリックを処理する
    ///
    /// 表示範囲が変わったら描き直して `true` を返す。
    pub fn on_click(&mut self, button: ClickButton, x: f64, y: f64) -> Result<bool> {
        let next = self
            .view
            .click(button, x, y, self.config.width, self.config.height)?;
        match next {
            Some(view) => {
                self.view = view;
                self.render();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// 初期表示に戻す
    pub fn reset(&mut self) {
        info!("リセット");
        self.view = self.config.initial_view;
        self.render();
    }
}
