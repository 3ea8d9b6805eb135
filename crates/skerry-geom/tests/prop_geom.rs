use proptest::num::f32::NORMAL;
use proptest::prelude::*;
use proptest::strategy::Strategy;
use skerry_geom::{Quat, Vec3};

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vapprox(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx(a.x, b.x, eps) && approx(a.y, b.y, eps) && approx(a.z, b.z, eps)
}

fn approx_abs_rel(a: f32, b: f32, atol: f32, rtol: f32) -> bool {
    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs());
    diff <= atol + rtol * scale
}

fn bounded_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e6)
}

fn bounded_nonzero_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded_nonzero", |v| {
        v.is_finite() && {
            let a = v.abs();
            (1e-3..=1e6).contains(&a)
        }
    })
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (bounded_f32(), bounded_f32(), bounded_f32()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn arb_axis() -> impl Strategy<Value = Vec3> {
    (
        bounded_nonzero_f32(),
        bounded_nonzero_f32(),
        bounded_nonzero_f32(),
    )
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    // a + b == b + a (element-wise)
    #[test]
    fn vec3_add_commutative(a in arb_vec3(), b in arb_vec3()) {
        prop_assert!(vapprox(a + b, b + a, 1e-5));
    }

    // (a + b)·c = a·c + b·c
    #[test]
    fn vec3_dot_distributive(a in arb_vec3(), b in arb_vec3(), c in arb_vec3()) {
        let left = (a + b).dot(c);
        let right = a.dot(c) + b.dot(c);
        prop_assert!(approx_abs_rel(left, right, 1e-6, 1e-5));
    }

    // a·(a×b) = 0 within scaled tolerance
    #[test]
    fn vec3_cross_orthogonal(a in arb_axis(), b in arb_axis()) {
        let c = a.cross(b);
        let scale = a.length() * c.length();
        prop_assert!(a.dot(c).abs() <= 1e-6 + 1e-5 * scale);
    }

    // lerp holds its endpoints for every pair
    #[test]
    fn vec3_lerp_endpoints(a in arb_vec3(), b in arb_vec3()) {
        prop_assert!(vapprox(a.lerp(b, 0.0), a, 1e-5));
        let end = a.lerp(b, 1.0);
        prop_assert!(approx_abs_rel(end.x, b.x, 1e-4, 1e-5));
        prop_assert!(approx_abs_rel(end.y, b.y, 1e-4, 1e-5));
        prop_assert!(approx_abs_rel(end.z, b.z, 1e-4, 1e-5));
    }

    // |a - b| == |b - a|
    #[test]
    fn vec3_distance_symmetric(a in arb_vec3(), b in arb_vec3()) {
        prop_assert!(approx_abs_rel(a.distance(b), b.distance(a), 1e-6, 1e-5));
    }

    // |normalize(v)| = 1 for non-degenerate v
    #[test]
    fn vec3_normalized_unit(v in arb_axis()) {
        prop_assert!(approx(v.normalized().length(), 1.0, 1e-3));
    }

    // slerp output stays a unit quaternion across the whole parameter range
    #[test]
    fn quat_slerp_stays_unit(
        axis in arb_axis(),
        angle in -720.0f32..720.0,
        t in 0.0f32..1.0,
    ) {
        let a = Quat::IDENTITY;
        let b = Quat::from_axis_angle(axis, angle);
        prop_assert!(approx(a.slerp(b, t).length(), 1.0, 1e-3));
    }

    // slerp endpoints reproduce the inputs up to quaternion sign
    #[test]
    fn quat_slerp_endpoints(axis in arb_axis(), angle in -179.0f32..179.0) {
        let a = Quat::from_axis_angle(axis, 5.0);
        let b = Quat::from_axis_angle(axis, angle);
        let s0 = a.slerp(b, 0.0);
        let s1 = a.slerp(b, 1.0);
        prop_assert!(approx(s0.dot(a).abs(), 1.0, 1e-3));
        prop_assert!(approx(s1.dot(b).abs(), 1.0, 1e-3));
    }
}
