use skerry_geom::Vec3;

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn constants() {
    assert!(vec3_approx_eq(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0), 1e-6));
    assert!(vec3_approx_eq(Vec3::ONE, Vec3::new(1.0, 1.0, 1.0), 1e-6));
    assert!(vec3_approx_eq(Vec3::UP, Vec3::new(0.0, 1.0, 0.0), 1e-6));
    assert!(vec3_approx_eq(Vec3::splat(2.5), Vec3::new(2.5, 2.5, 2.5), 1e-6));
}

#[test]
fn add_sub_mul_div() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 5.0, -6.0);
    assert!(vec3_approx_eq(a + b, Vec3::new(-3.0, 7.0, -3.0), 1e-6));
    assert!(vec3_approx_eq((a + b) - a, b, 1e-6));
    assert!(vec3_approx_eq(a * 2.0, Vec3::new(2.0, 4.0, 6.0), 1e-6));
    assert!(vec3_approx_eq((a * 2.0) / 2.0, a, 1e-6));

    let mut v = Vec3::new(1.0, 1.0, 1.0);
    v += Vec3::new(2.0, 3.0, 4.0);
    v -= Vec3::new(1.0, 2.0, 3.0);
    assert!(vec3_approx_eq(v, Vec3::new(2.0, 2.0, 2.0), 1e-6));
}

#[test]
fn dot_length_normalized() {
    let v = Vec3::new(3.0, 4.0, 0.0);
    assert!(approx_eq(v.dot(v), 25.0, 1e-6));
    assert!(approx_eq(v.length(), 5.0, 1e-6));
    assert!(vec3_approx_eq(v.normalized(), Vec3::new(0.6, 0.8, 0.0), 1e-6));

    // Zero vector normalization stays zero, never NaN
    assert!(vec3_approx_eq(Vec3::ZERO.normalized(), Vec3::ZERO, 1e-6));
}

#[test]
fn cross_basis() {
    let i = Vec3::new(1.0, 0.0, 0.0);
    let j = Vec3::new(0.0, 1.0, 0.0);
    let k = Vec3::new(0.0, 0.0, 1.0);
    assert!(vec3_approx_eq(i.cross(j), k, 1e-6));
    assert!(vec3_approx_eq(j.cross(k), i, 1e-6));
    assert!(vec3_approx_eq(k.cross(i), j, 1e-6));
}

#[test]
fn lerp_endpoints_and_midpoint() {
    let a = Vec3::new(0.0, 10.0, -4.0);
    let b = Vec3::new(8.0, -10.0, 4.0);
    assert!(vec3_approx_eq(a.lerp(b, 0.0), a, 1e-6));
    assert!(vec3_approx_eq(a.lerp(b, 1.0), b, 1e-6));
    assert!(vec3_approx_eq(a.lerp(b, 0.5), Vec3::new(4.0, 0.0, 0.0), 1e-6));
}

#[test]
fn distance_is_symmetric() {
    let a = Vec3::new(1.0, 2.0, 2.0);
    let b = Vec3::new(1.0, 5.0, 6.0);
    assert!(approx_eq(a.distance(b), 5.0, 1e-6));
    assert!(approx_eq(b.distance(a), 5.0, 1e-6));
    assert!(approx_eq(a.distance(a), 0.0, 1e-6));
}
