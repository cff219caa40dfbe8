//! 反復回数から色への変換

use super::constants::{
    BAND_BASE_COLOR, BAND_MASK, BAND_WIDTH, BINARY_ESCAPE_COLOR, INSIDE_COLOR,
};

/// 発散した点の塗り分け方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPolicy {
    /// 5 反復ごとにマスクを 1 ビットずつ左にずらして基本色に OR する
    #[default]
    Banded,
    /// 発散した点をすべて同じ色で塗る
    Binary,
}

impl ColorPolicy {
    pub fn all() -> &'static [ColorPolicy] {
        &[ColorPolicy::Banded, ColorPolicy::Binary]
    }

    pub fn cli_name(&self) -> &'static str {
        match self {
            ColorPolicy::Banded => "banded",
            ColorPolicy::Binary => "binary",
        }
    }

    pub fn from_cli_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|policy| policy.cli_name().eq_ignore_ascii_case(name))
    }

    /// 反復回数から色を計算（u32形式: 0xRRGGBB）
    pub fn color(&self, iter: u32, max_iter: u32) -> u32 {
        if iter == max_iter {
            return INSIDE_COLOR;
        }
        match self {
            ColorPolicy::Banded => banded_color(iter),
            ColorPolicy::Binary => BINARY_ESCAPE_COLOR,
        }
    }
}

/// 帯状カラー
///
/// シフト量は 32 ビット整数のシフトと同じく下位 5 ビットだけが効く。
/// 上位 8 ビットは RGB 画像では捨てられるので落としておく。
fn banded_color(iter: u32) -> u32 {
    let shift = iter / BAND_WIDTH;
    (BAND_BASE_COLOR | BAND_MASK.wrapping_shl(shift)) & 0x00FF_FFFF
}
