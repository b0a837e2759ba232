// src/screen/tests.rs

use super::*;
use crate::config::RngConfig;
use crate::surface::HeadlessSurface;
use std::sync::mpsc;
use test_log::test;

fn seeded_config() -> Config {
    Config {
        rng: RngConfig { seed: Some(42) },
        ..Config::default()
    }
}

fn screen(width: usize, height: usize) -> Screen {
    let (tx, _rx) = mpsc::channel();
    let mut screen = Screen::new(seeded_config(), tx);
    screen.configure_screen(width, height);
    screen
}

#[test]
fn accessors_fail_before_configuration() {
    let (tx, _rx) = mpsc::channel();
    let mut screen = Screen::new(Config::default(), tx);
    assert!(!screen.is_configured());
    assert_eq!(screen.screen_width(), 0);
    assert!(matches!(screen.get_cell_value(0, 0), Err(EngineError::ScreenNotConfigured)));
    assert!(matches!(screen.set_cell_value(0, 0, "X"), Err(EngineError::ScreenNotConfigured)));
}

#[test]
fn configure_clamps_and_fills_defaults() {
    let screen = screen(1, 1000);
    assert_eq!((screen.screen_width(), screen.screen_height()), (3, 100));
    assert_eq!(screen.cell_size(), Some(6));
    for y in 0..100 {
        for x in 0..3 {
            assert_eq!(screen.get_cell_value(x, y).unwrap(), "");
            assert_eq!(screen.get_cell_color(x, y).unwrap(), Color::White);
        }
    }
}

#[test]
fn reconfigure_discards_previous_cells() {
    let mut screen = screen(5, 5);
    screen.set_cell_value(4, 4, "keep?").unwrap();
    screen.configure_screen(5, 5);
    assert_eq!(screen.get_cell_value(4, 4).unwrap(), "");
}

#[test]
fn value_round_trip() {
    let mut screen = screen(4, 4);
    for value in ["", "X", "hello world", "ünïcödé", "  "] {
        screen.set_cell_value(3, 2, value).unwrap();
        assert_eq!(screen.get_cell_value(3, 2).unwrap(), value);
    }
}

#[test]
fn out_of_bounds_is_an_error() {
    let mut screen = screen(3, 3);
    assert!(matches!(
        screen.set_cell_value(3, 0, "X"),
        Err(EngineError::OutOfBounds { x: 3, y: 0, width: 3, height: 3 })
    ));
    assert!(screen.get_cell_color(0, 3).is_err());
    assert!(screen.set_cell_text_size(7, 7, 50).is_err());
}

#[test]
fn number_round_trip_and_parse_failure() {
    let mut screen = screen(3, 3);
    for n in [0, 7, -12, i32::MAX, i32::MIN] {
        screen.set_cell_number(1, 1, n).unwrap();
        assert_eq!(screen.get_cell_number(1, 1).unwrap(), n);
    }
    screen.set_cell_value(1, 1, "O").unwrap();
    assert_eq!(screen.get_cell_number(1, 1).unwrap(), 0);
    screen.set_cell_value(1, 1, "").unwrap();
    assert_eq!(screen.get_cell_number(1, 1).unwrap(), 0);
}

#[test]
fn value_auto_sizes_font() {
    let mut screen = screen(3, 3); // 200px cells
    screen.set_cell_value(0, 0, "X").unwrap();
    assert_eq!(screen.get_cell_text_size(0, 0).unwrap(), 40);
    screen.set_cell_value(0, 0, "1234567890").unwrap();
    assert_eq!(screen.get_cell_text_size(0, 0).unwrap(), 10);
}

#[test]
fn identical_value_keeps_explicit_text_size() {
    let mut screen = screen(3, 3);
    screen.set_cell_value(0, 0, "X").unwrap();
    screen.set_cell_text_size(0, 0, 90).unwrap();
    screen.set_cell_value(0, 0, "X").unwrap();
    assert_eq!(screen.get_cell_text_size(0, 0).unwrap(), 90);
}

#[test]
fn text_size_is_clamped_to_cell() {
    let mut screen = screen(3, 3);
    screen.set_cell_text_size(2, 2, 250).unwrap();
    assert_eq!(screen.get_cell_text_size(2, 2).unwrap(), 100);
}

#[test]
fn none_background_is_ignored() {
    let mut screen = screen(3, 3);
    screen.set_cell_color(0, 0, Color::Teal).unwrap();
    screen.set_cell_color(0, 0, Color::None).unwrap();
    assert_eq!(screen.get_cell_color(0, 0).unwrap(), Color::Teal);
}

#[test]
fn value_ex_applies_in_order() {
    let mut screen = screen(3, 3);
    screen
        .set_cell_value_ex(1, 1, Color::White, "O", Some(Color::Blue), None)
        .unwrap();
    assert_eq!(screen.get_cell_value(1, 1).unwrap(), "O");
    assert_eq!(screen.get_cell_text_color(1, 1).unwrap(), Color::Blue);
    assert_eq!(screen.get_cell_color(1, 1).unwrap(), Color::White);

    // Explicit size wins over the auto size chosen for the new value.
    screen
        .set_cell_value_ex(1, 1, Color::Gold, "XO", None, Some(75))
        .unwrap();
    assert_eq!(screen.get_cell_text_size(1, 1).unwrap(), 75);
    assert_eq!(screen.get_cell_color(1, 1).unwrap(), Color::Gold);
    assert_eq!(screen.get_cell_text_color(1, 1).unwrap(), Color::Blue);
}

#[test]
fn random_numbers_stay_in_range() {
    let mut screen = screen(3, 3);
    let mut seen = [false; 5];
    for _ in 0..10_000 {
        let n = screen.get_random_number(5).unwrap();
        assert!((0..5).contains(&n));
        seen[n as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
    for _ in 0..1_000 {
        let n = screen.get_random_number_in(-3, 4).unwrap();
        assert!((-3..4).contains(&n));
    }
}

#[test]
fn invalid_random_bounds_fail() {
    let mut screen = screen(3, 3);
    assert!(matches!(
        screen.get_random_number(0),
        Err(EngineError::InvalidRandomRange { min: 0, max: 0 })
    ));
    assert!(screen.get_random_number(-4).is_err());
    assert!(screen.get_random_number_in(5, 5).is_err());
    assert!(screen.get_random_number_in(6, 2).is_err());
}

#[test]
fn seeded_screens_are_reproducible() {
    let mut a = screen(3, 3);
    let mut b = screen(3, 3);
    let xs: Vec<i32> = (0..20).map(|_| a.get_random_number(1000).unwrap()).collect();
    let ys: Vec<i32> = (0..20).map(|_| b.get_random_number(1000).unwrap()).collect();
    assert_eq!(xs, ys);
}

#[test]
fn redraw_is_only_requested_with_a_surface() {
    let mut screen = screen(3, 3);
    screen.set_score(10);
    assert_eq!(screen.score(), 10);
    assert!(!screen.redraw_pending());

    let (surface, log) = HeadlessSurface::new();
    screen.attach_surface(Box::new(surface));
    screen.flush_redraw();
    assert_eq!(log.frame_count(), 1);

    screen.set_score(11);
    assert!(screen.redraw_pending());
    screen.flush_redraw();
    assert_eq!(log.last_frame().unwrap().score, 11);
}

#[test]
fn identical_value_does_not_request_redraw() {
    let mut screen = screen(3, 3);
    let (surface, log) = HeadlessSurface::new();
    screen.attach_surface(Box::new(surface));
    screen.set_cell_value(0, 0, "X").unwrap();
    screen.flush_redraw();
    assert_eq!(log.frame_count(), 1);
    screen.set_cell_value(0, 0, "X").unwrap();
    assert!(!screen.redraw_pending());
}

#[test]
fn reconfigure_resizes_surface() {
    let mut screen = screen(3, 3);
    let (surface, log) = HeadlessSurface::new();
    screen.attach_surface(Box::new(surface));
    screen.configure_screen(10, 5);
    let layouts = log.layouts();
    assert_eq!(layouts.len(), 1);
    assert_eq!(layouts[0].cell_size, 80);
}

#[test]
fn display_toggles() {
    let mut screen = screen(3, 3);
    assert!(screen.display_flags().contains(DisplayFlags::SHOW_GRID));
    screen.show_grid(false);
    screen.show_coordinates(true);
    assert_eq!(screen.display_flags(), DisplayFlags::SHOW_COORDINATES);
}

#[test]
fn dialog_show_and_hide() {
    let mut screen = screen(3, 3);
    screen.show_message_dialog(Color::None, "Game Over", Color::Red, 75);
    assert!(screen.is_dialog_shown());
    let shown = screen.dialog().message().unwrap();
    assert_eq!(shown.text_color, Color::Red);
    assert!(!shown.fills_background());
    screen.hide_message_dialog();
    assert!(!screen.is_dialog_shown());
}
