//! マンデルブロ集合エクスプローラ
//!
//! 描画・座標変換・ズーム処理はすべて `common` 以下にまとめ、
//! ウィンドウ表示 (minifb) はバイナリ側が担当する。

pub mod common;

pub use common::colors::ColorPolicy;
pub use common::config::{ExplorerConfig, RenderMode};
pub use common::error::{ExplorerError, Result};
pub use common::explorer::Explorer;
pub use common::plane::ViewState;
pub use common::render::PixelBuffer;
pub use common::view::ClickButton;
