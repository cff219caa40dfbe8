use fractal_explorer::common::mandelbrot::mandelbrot_iter;
use fractal_explorer::common::render::render;
use fractal_explorer::{
    ClickButton, ColorPolicy, Explorer, ExplorerConfig, RenderMode, ViewState,
};
use num_complex::Complex64;

#[test]
fn test_reference_startup_frame() {
    let explorer = Explorer::new(ExplorerConfig::default()).unwrap();
    let buffer = explorer.buffer();

    assert_eq!(buffer.width(), 600);
    assert_eq!(buffer.height(), 600);
    assert_eq!(buffer.get(300, 300), Some(0x000000));

    // 左上隅は -3 - 3i で 1 回目の反復後に発散する
    let corner = ViewState::default().pixel_to_complex(0.0, 0.0);
    assert_eq!(mandelbrot_iter(corner, 500), 1);
    assert_eq!(buffer.get(0, 0), Some(ColorPolicy::Banded.color(1, 500)));
}

#[test]
fn test_session_buffer_matches_free_render() {
    let config = ExplorerConfig {
        width: 200,
        height: 150,
        ..ExplorerConfig::binary()
    };
    let mut explorer = Explorer::new(config.clone()).unwrap();
    explorer
        .on_click(ClickButton::Primary, 80.0, 40.0)
        .unwrap();

    let expected = render(
        explorer.view(),
        config.width,
        config.height,
        config.max_iterations,
        config.color_policy,
        RenderMode::Sequential,
    )
    .unwrap();
    assert_eq!(explorer.buffer(), &expected);
}

#[test]
fn test_zoom_in_then_out_at_center_returns_to_start() {
    let mut explorer = Explorer::new(ExplorerConfig {
        width: 100,
        height: 100,
        max_iterations: 64,
        ..ExplorerConfig::default()
    })
    .unwrap();
    let start = *explorer.view();

    explorer.on_click(ClickButton::Primary, 50.0, 50.0).unwrap();
    assert_eq!(explorer.view().zoom_factor(), 200.0);
    explorer.on_click(ClickButton::Secondary, 50.0, 50.0).unwrap();

    assert_eq!(explorer.view(), &start);
}

#[test]
fn test_parallel_session_matches_sequential_session() {
    let base = ExplorerConfig {
        width: 160,
        height: 120,
        max_iterations: 120,
        initial_view: ViewState::new(-2.2, 1.3, 60.0).unwrap(),
        ..ExplorerConfig::default()
    };
    let mut seq = Explorer::new(base.clone()).unwrap();
    let mut par = Explorer::new(ExplorerConfig {
        render_mode: RenderMode::Parallel,
        ..base
    })
    .unwrap();

    for (button, x, y) in [
        (ClickButton::Primary, 40.0, 70.0),
        (ClickButton::Primary, 100.0, 20.0),
        (ClickButton::Secondary, 0.0, 119.0),
    ] {
        seq.on_click(button, x, y).unwrap();
        par.on_click(button, x, y).unwrap();
        assert_eq!(seq.view(), par.view());
        assert_eq!(seq.buffer(), par.buffer());
    }
}

#[test]
fn test_origin_is_in_set_for_both_presets() {
    for config in [ExplorerConfig::banded(), ExplorerConfig::binary()] {
        let iter = mandelbrot_iter(Complex64::new(0.0, 0.0), config.max_iterations);
        assert_eq!(iter, config.max_iterations);
        assert_eq!(config.color_policy.color(iter, config.max_iterations), 0x000000);
    }
}
