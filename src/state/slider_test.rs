use super::*;

#[test]
fn next_wraps_around() {
    let mut slider = SliderState::new(3);
    slider.next();
    slider.next();
    assert_eq!(slider.current, 2);
    slider.next();
    assert_eq!(slider.current, 0);
}

#[test]
fn empty_slider_never_moves() {
    let mut slider = SliderState::new(0);
    slider.next();
    slider.show(0);
    assert_eq!(slider.current, 0);
    assert!(!slider.is_active(0));
}

#[test]
fn show_selects_in_range_only() {
    let mut slider = SliderState::new(4);
    slider.show(3);
    assert!(slider.is_active(3));
    slider.show(9);
    assert_eq!(slider.current, 3);
}

#[test]
fn tick_respects_pause() {
    let mut slider = SliderState::new(2);
    slider.pause();
    slider.tick();
    assert_eq!(slider.current, 0);
    slider.resume();
    slider.tick();
    assert_eq!(slider.current, 1);
}
