use linechart_rs::api::{ChartStyle, ColorScheme, gradients, palette};
use linechart_rs::render::{Color, Gradient};

#[test]
fn lerp_blends_channels_linearly() {
    let mid = Color::BLACK.lerp(Color::WHITE, 0.5);

    assert!((mid.red - 0.5).abs() <= 1e-9);
    assert!((mid.green - 0.5).abs() <= 1e-9);
    assert!((mid.blue - 0.5).abs() <= 1e-9);
    assert!((mid.alpha - 1.0).abs() <= 1e-9);
}

#[test]
fn lerp_clamps_t_to_the_unit_interval() {
    let start = Color::rgb(0.25, 0.5, 0.75);
    let end = Color::rgb(0.75, 0.25, 0.5);

    assert_eq!(start.lerp(end, -1.0), start);
    assert_eq!(start.lerp(end, 2.0), end);
}

#[test]
fn with_alpha_replaces_only_the_alpha_channel() {
    let faded = palette::ORANGE_START.with_alpha(0.25);

    assert_eq!(faded.red, palette::ORANGE_START.red);
    assert_eq!(faded.green, palette::ORANGE_START.green);
    assert_eq!(faded.blue, palette::ORANGE_START.blue);
    assert_eq!(faded.alpha, 0.25);
}

#[test]
fn gradient_endpoints_match_its_stops() {
    let gradient = gradients::ORANGE;

    assert_eq!(gradient.color_at(0.0), palette::ORANGE_START);

    let end = gradient.color_at(1.0);
    assert!((end.red - palette::ORANGE_END.red).abs() <= 1e-12);
    assert!((end.green - palette::ORANGE_END.green).abs() <= 1e-12);
    assert!((end.blue - palette::ORANGE_END.blue).abs() <= 1e-12);
}

#[test]
fn gradient_midpoint_is_the_channel_average() {
    let gradient = Gradient::new(Color::rgb(0.0, 0.2, 1.0), Color::rgb(1.0, 0.6, 0.0));
    let mid = gradient.color_at(0.5);

    assert!((mid.red - 0.5).abs() <= 1e-9);
    assert!((mid.green - 0.4).abs() <= 1e-9);
    assert!((mid.blue - 0.5).abs() <= 1e-9);
}

#[test]
fn solid_gradients_never_vary() {
    let gradient = Gradient::solid(palette::PINK);

    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        assert_eq!(gradient.color_at(t), palette::PINK);
    }
}

#[test]
fn bundled_styles_validate() {
    ChartStyle::default().validate().expect("light style should be valid");
    ChartStyle::dark_default().validate().expect("dark style should be valid");
}

#[test]
fn bundled_gradients_validate() {
    for gradient in [
        gradients::ORANGE,
        gradients::BLUE,
        gradients::GREEN,
        gradients::SKY_BLUE,
        gradients::PURPLE,
        gradients::PURPLE_PINK,
        gradients::NEON_PURPLE,
        gradients::ORANGE_PINK,
    ] {
        gradient.validate().expect("bundled gradient should be valid");
    }
}

#[test]
fn light_and_dark_styles_disagree_on_background() {
    assert_eq!(ChartStyle::default().background_color, Color::WHITE);
    assert_eq!(ChartStyle::dark_default().background_color, Color::BLACK);
    assert_ne!(
        ChartStyle::default().grid_line_color,
        ChartStyle::dark_default().grid_line_color
    );
}

#[test]
fn style_validation_rejects_bad_channels() {
    let mut style = ChartStyle::default();
    style.grid_line_color = Color::rgb(0.5, -0.2, 0.5);
    assert!(style.validate().is_err());

    let mut style = ChartStyle::default();
    style.gradient = Gradient::new(Color::rgb(0.1, 0.1, 0.1), Color::rgb(2.0, 0.0, 0.0));
    assert!(style.validate().is_err());
}

#[test]
fn the_default_scheme_is_light() {
    assert_eq!(ColorScheme::default(), ColorScheme::Light);
}
