use space_jumper::catalog::Effect;
use space_jumper::entities::*;

#[test]
fn difficulty_tables() {
    assert_eq!(Difficulty::Easy.platform_count(), 10);
    assert_eq!(Difficulty::Medium.platform_count(), 5);
    assert_eq!(Difficulty::Hard.platform_count(), 3);

    assert_eq!(Difficulty::Easy.platform_speed(), 2.0);
    assert_eq!(Difficulty::Medium.platform_speed(), 3.0);
    assert_eq!(Difficulty::Hard.platform_speed(), 5.0);

    assert_eq!(Difficulty::default(), Difficulty::Medium);
}

#[test]
fn rect_overlap_is_strict() {
    let a = Rect::new(0.0, 0.0, 50.0, 50.0);
    assert!(a.overlaps(&Rect::new(49.0, 49.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(50.0, 0.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(0.0, 50.0, 10.0, 10.0)));
    // Containment counts as overlap.
    assert!(a.overlaps(&Rect::new(10.0, 10.0, 5.0, 5.0)));
}

#[test]
fn rect_contains_is_half_open() {
    let r = Rect::new(300.0, 200.0, 200.0, 50.0);
    assert!(r.contains(300.0, 200.0));
    assert!(r.contains(499.9, 249.9));
    assert!(!r.contains(500.0, 220.0));
    assert!(!r.contains(400.0, 250.0));
}

#[test]
fn entity_boxes_use_fixed_sizes() {
    let player = Player { x: 10.0, y: 20.0, vy: 0.0 };
    assert_eq!(player.rect(), Rect::new(10.0, 20.0, 50.0, 50.0));

    let platform = Platform { x: 5.0, y: -20.0 };
    assert_eq!(platform.rect(), Rect::new(5.0, -20.0, 100.0, 20.0));

    let power_up = PowerUp { x: 1.0, y: 2.0, kind: PowerUpKind::Invincibility };
    assert_eq!(power_up.rect(), Rect::new(1.0, 2.0, 30.0, 30.0));
}

#[test]
fn catalog_maps_each_kind_to_its_effect() {
    assert_eq!(PowerUpKind::SlowPlatforms.spec().effect, Effect::PlatformSpeed(1.0));
    assert_eq!(PowerUpKind::HighJump.spec().effect, Effect::JumpStrength(-15.0));
    assert_eq!(PowerUpKind::Invincibility.spec().effect, Effect::Invincible);

    let labels: Vec<_> = PowerUpKind::ALL.iter().map(|k| k.label()).collect();
    assert_eq!(labels, ["slow_platforms", "high_jump", "invincibility"]);
}

#[test]
fn catalog_colours_are_distinct() {
    let a = PowerUpKind::SlowPlatforms.spec().color;
    let b = PowerUpKind::HighJump.spec().color;
    let c = PowerUpKind::Invincibility.spec().color;
    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
}
