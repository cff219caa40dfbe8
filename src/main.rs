//! マンデルブロ集合インタラクティブビューア
//!
//! 操作方法:
//!   - 左クリック: クリック位置を中心に 2 倍に拡大
//!   - 右クリック: クリック位置を中心に 1/2 に縮小
//!   - R キー: 初期表示にリセット
//!   - Q / Escape キー: 終了

use std::process;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use fractal_explorer::{ClickButton, ColorPolicy, Explorer, ExplorerConfig, RenderMode, ViewState};
use log::{error, info};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

const WINDOW_TITLE: &str = "Fractal Explorer";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    /// 500 反復 + 帯状カラー
    Banded,
    /// 50 反復 + 二値カラー
    Binary,
}

fn parse_palette(name: &str) -> Result<ColorPolicy, String> {
    ColorPolicy::from_cli_name(name).ok_or_else(|| {
        let names: Vec<&str> = ColorPolicy::all().iter().map(|p| p.cli_name()).collect();
        format!("unknown palette '{}' (expected one of: {})", name, names.join(", "))
    })
}

/// クリックで拡大・縮小できるマンデルブロ集合ビューア
///
/// 引数なしで起動すると 600x600、500 反復、帯状カラーで表示する。
#[derive(Parser, Debug)]
#[command(name = "fractal-explorer", version, about)]
struct Cli {
    /// 基本設定
    #[arg(long, value_enum, default_value_t = Preset::Banded)]
    preset: Preset,

    /// 描画領域の幅（ピクセル）
    #[arg(long)]
    width: Option<usize>,

    /// 描画領域の高さ（ピクセル）
    #[arg(long)]
    height: Option<usize>,

    /// 最大反復回数
    #[arg(long)]
    max_iterations: Option<u32>,

    /// 初期ズーム倍率
    #[arg(long)]
    zoom: Option<f64>,

    /// 初期表示の左上 x
    #[arg(long, allow_negative_numbers = true)]
    top_left_x: Option<f64>,

    /// 初期表示の左上 y
    #[arg(long, allow_negative_numbers = true)]
    top_left_y: Option<f64>,

    /// 配色（プリセットの配色を上書き）
    #[arg(long, value_parser = parse_palette)]
    palette: Option<ColorPolicy>,

    /// rayon で行単位に並列描画する
    #[arg(long)]
    parallel: bool,
}

impl Cli {
    fn into_config(self) -> fractal_explorer::Result<ExplorerConfig> {
        let mut config = match self.preset {
            Preset::Banded => ExplorerConfig::banded(),
            Preset::Binary => ExplorerConfig::binary(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(iters) = self.max_iterations {
            config.max_iterations = iters;
        }
        if let Some(palette) = self.palette {
            config.color_policy = palette;
        }
        if self.parallel {
            config.render_mode = RenderMode::Parallel;
        }

        let base = config.initial_view;
        config.initial_view = ViewState::new(
            self.top_left_x.unwrap_or(base.top_left_x()),
            self.top_left_y.unwrap_or(base.top_left_y()),
            self.zoom.unwrap_or(base.zoom_factor()),
        )?;

        config.validate()?;
        Ok(config)
    }
}

fn log_redraw(explorer: &Explorer, start: Instant) {
    let center = explorer.center();
    info!(
        "再描画: {:.2?} [{}] | 中心: ({:.6}, {:.6}i) | ズーム: x{:.2e}",
        start.elapsed(),
        explorer.config().render_mode,
        center.re,
        center.im,
        explorer.view().zoom_factor()
    );
}

fn window_title(explorer: &Explorer) -> String {
    format!("{} x{:.2e}", WINDOW_TITLE, explorer.view().zoom_factor())
}

/// 押した瞬間だけ true を返すボタン状態
#[derive(Default)]
struct EdgeTrigger {
    prev_down: bool,
}

impl EdgeTrigger {
    fn pressed(&mut self, down: bool) -> bool {
        let pressed = down && !self.prev_down;
        self.prev_down = down;
        pressed
    }
}

fn run(config: ExplorerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = (config.width, config.height);
    info!(
        "{}x{} | 最大反復 {} | 配色 {} | {}",
        width,
        height,
        config.max_iterations,
        config.color_policy.cli_name(),
        config.render_mode
    );

    let mut window = Window::new(
        WINDOW_TITLE,
        width,
        height,
        WindowOptions {
            resize: false,
            ..WindowOptions::default()
        },
    )?;
    window.set_target_fps(60);

    let start = Instant::now();
    let mut explorer = Explorer::new(config)?;
    info!("初期描画完了: {:.2?}", start.elapsed());
    window.set_title(&window_title(&explorer));

    let mut left = EdgeTrigger::default();
    let mut right = EdgeTrigger::default();

    while window.is_open() && !window.is_key_down(Key::Escape) && !window.is_key_down(Key::Q) {
        let mut changed = false;

        if window.is_key_pressed(Key::R, KeyRepeat::No) {
            let start = Instant::now();
            explorer.reset();
            log_redraw(&explorer, start);
            changed = true;
        }

        let left_pressed = left.pressed(window.get_mouse_down(MouseButton::Left));
        let right_pressed = right.pressed(window.get_mouse_down(MouseButton::Right));

        if let Some((mx, my)) = window.get_mouse_pos(MouseMode::Discard) {
            let (x, y) = (mx.floor() as f64, my.floor() as f64);
            for (pressed, button) in [
                (left_pressed, ClickButton::Primary),
                (right_pressed, ClickButton::Secondary),
            ] {
                if !pressed {
                    continue;
                }
                let start = Instant::now();
                match explorer.on_click(button, x, y) {
                    Ok(true) => {
                        log_redraw(&explorer, start);
                        changed = true;
                    }
                    Ok(false) => {}
                    Err(e) => error!("ズームできません: {}", e),
                }
            }
        }

        if changed {
            window.set_title(&window_title(&explorer));
        }

        window.update_with_buffer(explorer.buffer().pixels(), width, height)?;
    }

    info!("終了しました");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            error!("設定が不正です: {}", e);
            process::exit(2);
        }
    };

    if let Err(e) = run(config) {
        error!("{}", e);
        process::exit(1);
    }
}
