//! 画素バッファへの描画

use rayon::prelude::*;

use super::colors::ColorPolicy;
use super::config::RenderMode;
use super::error::{ExplorerError, Result};
use super::mandelbrot::mandelbrot_iter;
use super::plane::ViewState;

/// 幅×高さの RGB 画素バッファ（行優先、0xRRGGBB）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }
}

pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<usize> {
    match width.checked_mul(height) {
        Some(len) if len > 0 => Ok(len),
        _ => Err(ExplorerError::InvalidDimensions { width, height }),
    }
}

/// 1 ピクセル分の計算：座標変換 → 反復回数 → 色
#[inline]
fn shade(view: &ViewState, x: usize, y: usize, max_iter: u32, policy: ColorPolicy) -> u32 {
    let c = view.pixel_to_complex(x as f64, y as f64);
    let iter = mandelbrot_iter(c, max_iter);
    policy.color(iter, max_iter)
}

fn shade_row(
    row: &mut [u32],
    y: usize,
    view: &ViewState,
    max_iter: u32,
    policy: ColorPolicy,
) {
    for (x, pixel) in row.iter_mut().enumerate() {
        *pixel = shade(view, x, y, max_iter, policy);
    }
}

/// バッファ全体を描き直す
///
/// 各ピクセルは独立に計算するので、並列版でも出力は逐次版と一致する。
/// `&mut` で受け取るため、描画途中のバッファを他から読むことはできない。
pub fn render_into(
    buffer: &mut PixelBuffer,
    view: &ViewState,
    max_iter: u32,
    policy: ColorPolicy,
    mode: RenderMode,
) {
    let width = buffer.width;
    match mode {
        RenderMode::Sequential => {
            for (y, row) in buffer.pixels.chunks_mut(width).enumerate() {
                shade_row(row, y, view, max_iter, policy);
            }
        }
        RenderMode::Parallel => {
            buffer
                .pixels
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| shade_row(row, y, view, max_iter, policy));
        }
    }
}

/// 新しいバッファに描画して返す
pub fn render(
    view: &ViewState,
    width: usize,
    height: usize,
    max_iter: u32,
    policy: ColorPolicy,
    mode: RenderMode,
) -> Result<PixelBuffer> {
    let mut buffer = PixelBuffer::new(width, height)?;
    render_into(&mut buffer, view, max_iter, policy, mode);
    Ok(buffer)
}
