//! マンデルブロ集合計算関数

use num_complex::Complex64;

use super::constants::ESCAPE_RADIUS_SQR;

/// マンデルブロ集合の反復回数を計算
///
/// z = 0 から z ← z² + c を繰り返し、|z|² が 4 を超えた時点の回数を返す。
/// |z| = 2 ちょうどの点は発散扱いにせず反復を続ける。
/// `max_iter` 回以内に発散しなければ `max_iter` を返す。
pub fn mandelbrot_iter(c: Complex64, max_iter: u32) -> u32 {
    let (c_r, c_i) = (c.re, c.im);
    let mut z_r = 0.0_f64;
    let mut z_i = 0.0_f64;
    let mut count = 0;

    while count < max_iter && z_r * z_r + z_i * z_i <= ESCAPE_RADIUS_SQR {
        // 虚部の更新には更新前の z_r を使う
        let next_r = z_r * z_r - z_i * z_i + c_r;
        let next_i = 2.0 * z_i * z_r + c_i;
        z_r = next_r;
        z_i = next_i;
        count += 1;
    }
    count
}
