use glam::Vec2;
use touchpull::{Behavior, DynamicBody, GravityField, Tunables, FRICTION, GRAVITY};

fn params(gravity: f32, friction: f32) -> Tunables {
    let mut t = Tunables::new();
    t.define(GRAVITY, gravity, 0.0, 10_000.0);
    t.define(FRICTION, friction, 0.0, 10_000.0);
    t
}

fn body_at(position: Vec2) -> DynamicBody {
    DynamicBody::new(position, Vec2::splat(10.0), 1.0).unwrap()
}

#[test]
fn pull_scales_linearly_with_distance() {
    let mut body = body_at(Vec2::ZERO);
    let mut field = GravityField::new("pull", Vec2::new(10.0, 0.0));

    field.step(&mut body, &params(2.0, 0.0));
    assert_eq!(body.force("pull"), Some(Vec2::new(20.0, 0.0)));
}

#[test]
fn friction_opposes_velocity() {
    let mut body = body_at(Vec2::new(5.0, 5.0));
    body.set_velocity(Vec2::new(2.0, -1.0));
    let mut field = GravityField::new("pull", body.position());

    field.step(&mut body, &params(0.0, 3.0));
    assert_eq!(body.force("pull"), Some(Vec2::new(-6.0, 3.0)));
}

#[test]
fn pull_and_friction_share_one_slot() {
    let mut body = body_at(Vec2::ZERO);
    body.set_velocity(Vec2::new(1.0, 0.0));
    let mut field = GravityField::new("pull", Vec2::new(10.0, 0.0));

    field.step(&mut body, &params(2.0, 3.0));
    // 2 * (10 - 0) - 3 * 1 on x, nothing on y.
    assert_eq!(body.force("pull"), Some(Vec2::new(17.0, 0.0)));
    assert_eq!(body.net_force(), Vec2::new(17.0, 0.0));
}

#[test]
fn inactive_field_clears_its_slot_on_next_evaluation() {
    let mut body = body_at(Vec2::ZERO);
    let mut field = GravityField::new("pull", Vec2::new(10.0, 0.0));
    let p = params(2.0, 0.0);

    field.step(&mut body, &p);
    assert!(body.force("pull").is_some());

    field.set_active(false);
    field.step(&mut body, &p);
    assert_eq!(body.force("pull"), None);
}

#[test]
fn deactivate_clears_the_slot_immediately() {
    let mut body = body_at(Vec2::ZERO);
    let mut field = GravityField::new("pull", Vec2::new(10.0, 0.0));

    field.step(&mut body, &params(2.0, 0.0));
    field.deactivate(&mut body);
    assert_eq!(body.force("pull"), None);
    assert!(!field.is_active());
}

#[test]
fn undefined_tunables_mean_no_pull() {
    let mut body = body_at(Vec2::ZERO);
    let mut field = GravityField::new("pull", Vec2::new(10.0, 0.0));

    field.step(&mut body, &Tunables::new());
    assert_eq!(body.force("pull"), Some(Vec2::ZERO));
}

#[test]
fn field_settles_the_body_onto_its_target() {
    let mut body = body_at(Vec2::ZERO);
    let mut field = GravityField::new("pull", Vec2::new(10.0, 0.0));
    let p = params(100.0, 10.0);

    for frame in 0..600 {
        field.step(&mut body, &p);
        body.tick(frame as f64 / 60.0);
    }

    assert!(body.position().distance(Vec2::new(10.0, 0.0)) < 1.0);
    assert!(body.velocity().length() < 1.0);
}

#[test]
fn retargeting_redirects_the_pull() {
    let mut body = body_at(Vec2::ZERO);
    let mut field = GravityField::new("pull", Vec2::new(10.0, 0.0));
    let p = params(1.0, 0.0);

    field.step(&mut body, &p);
    assert_eq!(body.force("pull"), Some(Vec2::new(10.0, 0.0)));

    field.set_target(Vec2::new(0.0, -4.0));
    field.step(&mut body, &p);
    assert_eq!(body.force("pull"), Some(Vec2::new(0.0, -4.0)));
}
