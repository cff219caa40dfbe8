//! 共通定数

/// 描画領域の幅
pub const CANVAS_WIDTH: usize = 600;
/// 描画領域の高さ
pub const CANVAS_HEIGHT: usize = 600;

/// 最大反復回数（帯状カラー版）
pub const MAX_ITER: u32 = 500;

/// 最大反復回数（二値カラー版）
pub const BINARY_MAX_ITER: u32 = 50;

/// 初期ズーム倍率（1 単位あたりのピクセル数）
pub const DEFAULT_ZOOM: f64 = 100.0;

/// 初期表示の左上座標
pub const DEFAULT_TOP_LEFT_X: f64 = -3.0;
pub const DEFAULT_TOP_LEFT_Y: f64 = 3.0;

/// 脱出判定に使う |z|² の上限
pub const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// 帯状カラーの基本色
pub const BAND_BASE_COLOR: u32 = 0b0111_1010_0000_1011_0110_1110;
/// 帯状カラーのマスク（反復回数に応じて左シフトする）
pub const BAND_MASK: u32 = 0b0000_0000_0000_0111_1111_1111;
/// 何反復ごとにマスクを 1 ビットずらすか
pub const BAND_WIDTH: u32 = 5;

/// 二値カラーで発散した点に塗る色
pub const BINARY_ESCAPE_COLOR: u32 = 0xFFFFFF;

/// 集合内部の色
pub const INSIDE_COLOR: u32 = 0x000000;

/// 左クリックのズーム倍率
pub const ZOOM_FACTOR_IN: f64 = 2.0;

/// 右クリックのズーム倍率
pub const ZOOM_FACTOR_OUT: f64 = 0.5;
