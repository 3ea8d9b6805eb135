use skerry_geom::{Mat4, Quat, Vec3};

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vapprox(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx(a.x, b.x, eps) && approx(a.y, b.y, eps) && approx(a.z, b.z, eps)
}

#[test]
fn identity_leaves_points_alone() {
    let p = Vec3::new(3.0, -2.0, 7.5);
    assert!(vapprox(Mat4::IDENTITY.transform_point(p), p, 1e-6));
}

#[test]
fn translation_and_scale() {
    let p = Vec3::new(1.0, 1.0, 1.0);
    let t = Mat4::translation(Vec3::new(10.0, 0.0, -5.0));
    assert!(vapprox(t.transform_point(p), Vec3::new(11.0, 1.0, -4.0), 1e-6));

    let s = Mat4::scale(Vec3::new(2.0, 3.0, 4.0));
    assert!(vapprox(s.transform_point(p), Vec3::new(2.0, 3.0, 4.0), 1e-6));
}

#[test]
fn rotation_y_quarter_turn() {
    let r = Mat4::rotation_y(90.0);
    let p = r.transform_point(Vec3::new(1.0, 0.0, 0.0));
    assert!(vapprox(p, Vec3::new(0.0, 0.0, -1.0), 1e-6));
}

#[test]
fn rotation_x_quarter_turn() {
    let r = Mat4::rotation_x(90.0);
    let p = r.transform_point(Vec3::new(0.0, 1.0, 0.0));
    assert!(vapprox(p, Vec3::new(0.0, 0.0, 1.0), 1e-6));
}

#[test]
fn compose_trs_matches_manual_chain() {
    let pos = Vec3::new(1.0, 2.0, 3.0);
    let rot = Vec3::new(10.0, 45.0, -30.0);
    let scale = Vec3::new(2.0, 0.5, 1.5);
    let composed = Mat4::compose_trs(pos, rot, scale);
    let manual = Mat4::translation(pos)
        .mul(&Mat4::rotation_x(rot.x))
        .mul(&Mat4::rotation_y(rot.y))
        .mul(&Mat4::rotation_z(rot.z))
        .mul(&Mat4::scale(scale));
    let p = Vec3::new(-1.0, 4.0, 0.5);
    assert!(vapprox(
        composed.transform_point(p),
        manual.transform_point(p),
        1e-4
    ));
}

#[test]
fn compose_trs_scale_rotate_translate_order() {
    // Unit X scaled by 2, yawed a quarter turn, then moved: the scale must
    // apply before the rotation and the translation last.
    let m = Mat4::compose_trs(
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(0.0, 90.0, 0.0),
        Vec3::splat(2.0),
    );
    let p = m.transform_point(Vec3::new(1.0, 0.0, 0.0));
    assert!(vapprox(p, Vec3::new(1.0, 2.0, 1.0), 1e-5));
}

#[test]
fn quat_axis_angle_euler_roundtrips() {
    let e = Quat::from_axis_angle(Vec3::UP, 30.0).to_euler_deg();
    assert!(vapprox(e, Vec3::new(0.0, 30.0, 0.0), 1e-3));

    let e = Quat::from_axis_angle(Vec3::new(1.0, 0.0, 0.0), 45.0).to_euler_deg();
    assert!(vapprox(e, Vec3::new(45.0, 0.0, 0.0), 1e-3));

    let e = Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), -60.0).to_euler_deg();
    assert!(vapprox(e, Vec3::new(0.0, 0.0, -60.0), 1e-3));
}

#[test]
fn quat_gimbal_pole_stays_finite() {
    let e = Quat::from_axis_angle(Vec3::UP, 90.0).to_euler_deg();
    assert!(vapprox(e, Vec3::new(0.0, 90.0, 0.0), 1e-2));
}

#[test]
fn slerp_endpoints_and_midpoint() {
    let a = Quat::IDENTITY;
    let b = Quat::from_axis_angle(Vec3::UP, 90.0);
    assert!(vapprox(a.slerp(b, 0.0).to_euler_deg(), Vec3::ZERO, 1e-3));
    assert!(vapprox(
        a.slerp(b, 1.0).to_euler_deg(),
        Vec3::new(0.0, 90.0, 0.0),
        1e-2
    ));
    assert!(vapprox(
        a.slerp(b, 0.5).to_euler_deg(),
        Vec3::new(0.0, 45.0, 0.0),
        1e-3
    ));
}

#[test]
fn slerp_takes_shortest_arc() {
    let a = Quat::from_axis_angle(Vec3::UP, 10.0);
    let b = Quat::from_axis_angle(Vec3::UP, 50.0);
    // Negated quaternion represents the same rotation; slerp must not
    // take the long way around.
    let b_neg = Quat::new(-b.x, -b.y, -b.z, -b.w);
    let mid = a.slerp(b, 0.5).to_euler_deg();
    let mid_neg = a.slerp(b_neg, 0.5).to_euler_deg();
    assert!(vapprox(mid, Vec3::new(0.0, 30.0, 0.0), 1e-3));
    assert!(vapprox(mid, mid_neg, 1e-3));
}

#[test]
fn slerp_nearly_parallel_falls_back_smoothly() {
    let a = Quat::from_axis_angle(Vec3::UP, 10.0);
    let b = Quat::from_axis_angle(Vec3::UP, 10.001);
    let mid = a.slerp(b, 0.5);
    assert!(approx(mid.length(), 1.0, 1e-4));
    assert!(vapprox(mid.to_euler_deg(), Vec3::new(0.0, 10.0005, 0.0), 1e-2));
}
