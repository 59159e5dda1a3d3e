//! Behavioral properties of the vector kernels.
//!
//! Covers the normalization, interpolation, smoothing, angle and conversion
//! laws both kernels must satisfy, plus the concrete reference scenarios.

use approx::assert_abs_diff_eq;
use vecx_math::{Vector2, Vector3, vec2, vec3};

// ============================================================================
// Sample data
// ============================================================================

const SAMPLES_2D: &[[f64; 2]] = &[
    [1.0, 2.0],
    [-3.5, 0.25],
    [1e-3, -7.0],
    [123456.789, -0.000125],
    [0.1, 0.2],
];

const SAMPLES_3D: &[[f64; 3]] = &[
    [1.0, 2.0, 3.0],
    [-3.5, 0.25, 8.0],
    [1e-3, -7.0, 0.5],
    [98765.4321, -0.000125, 42.0],
    [0.1, 0.2, 0.3],
];

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn normalized_nonzero_vectors_have_unit_length() {
    for &a in SAMPLES_2D {
        let n = vec2::normalize(Vector2::from(a));
        assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
    }
    for &a in SAMPLES_3D {
        let n = vec3::normalize(Vector3::from(a));
        assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn normalizing_zero_gives_zero() {
    assert_eq!(vec2::normalize(Vector2::ZERO), Vector2::ZERO);
    assert_eq!(vec3::normalize(Vector3::ZERO), Vector3::ZERO);

    let mut v = Vector3::ZERO;
    v.normalize();
    assert_eq!(v, Vector3::ZERO);
}

// ============================================================================
// Interpolation
// ============================================================================

#[test]
fn lerp_endpoints_and_clamping() {
    let a = Vector2::new(1.0, 2.0);
    let b = Vector2::new(5.0, -6.0);
    assert_eq!(vec2::lerp(a, b, 0.0), a);
    assert_eq!(vec2::lerp(a, b, 1.0), b);
    assert_eq!(vec2::lerp(a, b, -3.0), a);
    assert_eq!(vec2::lerp(a, b, 7.0), b);
    assert_eq!(vec2::lerp_unclamped(a, b, 2.0), Vector2::new(9.0, -14.0));
    assert_eq!(vec2::lerp_unclamped(a, b, -1.0), Vector2::new(-3.0, 10.0));

    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(3.0, 2.0, 1.0);
    assert_eq!(vec3::lerp(a, b, 0.0), a);
    assert_eq!(vec3::lerp(a, b, 1.0), b);
    assert_eq!(vec3::lerp(a, b, 1.5), b);
    assert_eq!(vec3::lerp_unclamped(a, b, 1.5), Vector3::new(4.0, 2.0, 0.0));
}

#[test]
fn slerp_of_identical_directions_is_identity() {
    for a in [Vector3::UP, Vector3::RIGHT, Vector3::BACK] {
        for t in [0.0, 0.3, 0.5, 1.0] {
            assert_eq!(vec3::slerp(a, a, t), a);
        }
    }
}

#[test]
fn slerp_near_parallel_does_not_diverge() {
    let a = Vector3::FORWARD;
    let b = Vector3::new(1e-9, 0.0, 1.0);
    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let r = vec3::slerp(a, b, t);
        assert!(r.is_finite());
        assert_abs_diff_eq!(r.magnitude(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.z, 1.0, epsilon = 1e-12);
    }
}

// ============================================================================
// moveTowards / smoothDamp
// ============================================================================

#[test]
fn move_towards_same_point_returns_it() {
    let p = Vector2::new(3.0, -1.0);
    for d in [-5.0, 0.0, 0.5, 1e9] {
        assert_eq!(vec2::move_towards(p, p, d), p);
    }
    let p = Vector3::new(3.0, -1.0, 2.0);
    for d in [-5.0, 0.0, 0.5, 1e9] {
        assert_eq!(vec3::move_towards(p, p, d), p);
    }
}

#[test]
fn move_towards_large_delta_reaches_target_exactly() {
    let current = Vector2::new(0.1, 0.2);
    let target = Vector2::new(-7.3, 11.9);
    assert_eq!(vec2::move_towards(current, target, 1e6), target);
    assert_eq!(vec2::move_towards(current, target, f64::INFINITY), target);

    let current = Vector3::new(0.1, 0.2, 0.3);
    let target = Vector3::new(-7.3, 11.9, 4.4);
    assert_eq!(vec3::move_towards(current, target, 1e6), target);
}

#[test]
fn smooth_damp_converges_2d() {
    let target = Vector2::new(10.0, -5.0);
    let mut position = Vector2::ZERO;
    let mut velocity = Vector2::ZERO;
    let mut last_distance = vec2::distance(position, target);

    for _ in 0..600 {
        position = vec2::smooth_damp(position, target, &mut velocity, 0.3, 1.0 / 60.0);
        let d = vec2::distance(position, target);
        assert!(d <= last_distance + 1e-12);
        last_distance = d;
    }

    assert_abs_diff_eq!(position.x, target.x, epsilon = 1e-6);
    assert_abs_diff_eq!(position.y, target.y, epsilon = 1e-6);
    assert!(velocity.magnitude() < 1e-4);
}

#[test]
fn smooth_damp_converges_3d_with_speed_limit() {
    let target = Vector3::new(1.0, 2.0, 3.0);
    let mut position = Vector3::new(-4.0, 0.0, 10.0);
    let mut velocity = Vector3::ZERO;

    for _ in 0..2000 {
        position =
            vec3::smooth_damp_with_max_speed(position, target, &mut velocity, 0.5, 1.0 / 60.0, 5.0);
    }

    assert_abs_diff_eq!(vec3::distance(position, target), 0.0, epsilon = 1e-6);
    assert!(velocity.magnitude() < 1e-4);
}

#[test]
fn smooth_damp_clamps_tiny_smooth_time() {
    let mut velocity = Vector2::ZERO;
    let r = vec2::smooth_damp(Vector2::ZERO, Vector2::ONE, &mut velocity, 0.0, 0.01);
    assert!(r.is_finite());
    assert!(velocity.is_finite());
}

// ============================================================================
// Angles
// ============================================================================

#[test]
fn angle_of_vector_with_itself_is_zero() {
    for &a in SAMPLES_2D {
        let v = Vector2::from(a);
        assert_abs_diff_eq!(vec2::angle(v, v), 0.0, epsilon = 1e-4);
    }
    for &a in SAMPLES_3D {
        let v = Vector3::from(a);
        assert_abs_diff_eq!(vec3::angle(v, v), 0.0, epsilon = 1e-4);
    }
}

#[test]
fn angle_between_perpendicular_units_is_ninety() {
    assert_abs_diff_eq!(vec2::angle(Vector2::UP, Vector2::LEFT), 90.0, epsilon = 1e-4);
    assert_abs_diff_eq!(vec3::angle(Vector3::UP, Vector3::BACK), 90.0, epsilon = 1e-4);
}

#[test]
fn signed_angle_flips_with_operand_order() {
    let a = Vector2::new(1.0, 0.5);
    let b = Vector2::new(-0.25, 2.0);
    assert_abs_diff_eq!(vec2::signed_angle(a, b), -vec2::signed_angle(b, a), epsilon = 1e-12);
    assert!(vec2::signed_angle(a, b) > 0.0);

    let a = Vector3::new(1.0, 0.0, 0.5);
    let b = Vector3::new(0.0, 0.0, 2.0);
    let axis = Vector3::UP;
    assert_abs_diff_eq!(
        vec3::signed_angle(a, b, axis),
        -vec3::signed_angle(b, a, axis),
        epsilon = 1e-12
    );
}

// ============================================================================
// Conversions
// ============================================================================

#[test]
fn array_round_trip() {
    for &a in SAMPLES_2D {
        assert_eq!(Vector2::from_array(Vector2::from_array(a).to_array()), Vector2::from(a));
    }
    for &a in SAMPLES_3D {
        assert_eq!(Vector3::from_array(Vector3::from_array(a).to_array()), Vector3::from(a));
    }
}

#[test]
#[cfg(feature = "serde")]
fn record_round_trip() {
    let v = Vector2::new(1.5, -2.0);
    let json = serde_json::to_value(v).unwrap();
    assert_eq!(json, serde_json::json!({ "x": 1.5, "y": -2.0 }));
    assert_eq!(serde_json::from_value::<Vector2>(json).unwrap(), v);

    for &a in SAMPLES_3D {
        let v = Vector3::from(a);
        let text = serde_json::to_string(&v).unwrap();
        assert_eq!(serde_json::from_str::<Vector3>(&text).unwrap(), v);
    }
}

#[test]
fn string_round_trip() {
    for &a in SAMPLES_2D {
        let v = Vector2::from(a);
        assert_eq!(v.to_string().parse::<Vector2>().unwrap(), v);
        assert_eq!(Vector2::from_string_lossy(&v.to_string()), v);
    }
    for &a in SAMPLES_3D {
        let v = Vector3::from(a);
        assert_eq!(v.to_string().parse::<Vector3>().unwrap(), v);
        assert_eq!(Vector3::from_string_lossy(&v.to_string()), v);
    }
}

#[test]
fn malformed_strings() {
    let err = "(1, two)".parse::<Vector2>().unwrap_err();
    assert!(err.is_parse_error());

    let v = Vector2::from_string_lossy("(1, two)");
    assert_eq!(v.x, 1.0);
    assert!(v.y.is_nan());

    let v = Vector3::from_string_lossy("garbage");
    assert!(v.x.is_nan());
}

#[test]
fn iteration_matches_declaration_order() {
    let v = Vector3::new(7.0, 8.0, 9.0);
    let collected: Vec<f64> = (&v).into_iter().collect();
    assert_eq!(collected, vec![7.0, 8.0, 9.0]);
    assert_eq!(v.iter().sum::<f64>(), 24.0);
    // restartable
    assert_eq!(v.iter().count(), 3);
    assert_eq!(v.iter().count(), 3);
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn scenario_vector2_add_instance_vs_static() {
    let mut v = Vector2::new(1.0, 2.0);
    let r = vec2::add(v, 2.0);
    assert_eq!(r, Vector2::new(3.0, 4.0));
    assert_eq!(v, Vector2::new(1.0, 2.0));

    v.add(2.0);
    assert_eq!(v, Vector2::new(3.0, 4.0));
}

#[test]
fn scenario_cross_of_x_and_y() {
    let r = vec3::cross(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(r, Vector3::new(0.0, 0.0, 1.0));
}

#[test]
fn scenario_ortho_normalize() {
    let mut normal = Vector3::new(1.0, 0.0, 0.0);
    let mut tangent = Vector3::new(1.0, 1.0, 0.0);
    vec3::ortho_normalize(&mut normal, &mut tangent);
    assert_eq!(normal, Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(tangent, Vector3::new(0.0, 1.0, 0.0));
}

#[test]
fn constants_are_never_shared() {
    let mut a = Vector3::ZERO;
    let b = Vector3::ZERO;
    a.add(5.0);
    assert_eq!(b, Vector3::ZERO);
    assert_eq!(Vector3::ZERO, Vector3::new(0.0, 0.0, 0.0));
}
