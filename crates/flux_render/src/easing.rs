//! Easing curves used by the overlay animations.
//!
//! All functions take and return progress in [0, 1].

/// Decelerating quartic (`power3.out` in GSAP naming)
pub fn power3_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Decelerating cubic (`power2.out`)
pub fn power2_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// CSS `cubic-bezier(x1, y1, x2, y2)` timing function evaluated at `t`.
/// Solves x(s) = t by bisection, then returns y(s).
pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let bezier = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    let mut s = t;
    for _ in 0..32 {
        let x = bezier(x1, x2, s);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    bezier(y1, y2, s)
}

/// CSS `ease-in-out`
pub fn ease_in_out(t: f32) -> f32 {
    cubic_bezier(0.42, 0.0, 0.58, 1.0, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for f in [power3_out, power2_out, ease_in_out] {
            assert!(f(0.0).abs() < 1e-5);
            assert!((f(1.0) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_power_out_front_loaded() {
        assert!((power3_out(0.5) - 0.9375).abs() < 1e-6);
        assert!((power2_out(0.5) - 0.875).abs() < 1e-6);
        assert_eq!(power3_out(2.0), 1.0);
        assert_eq!(power3_out(-1.0), 0.0);
    }

    #[test]
    fn test_ease_in_out_symmetric() {
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-4);
        let a = ease_in_out(0.2);
        let b = ease_in_out(0.8);
        assert!((a + b - 1.0).abs() < 1e-4);
        assert!(a < 0.2, "slow start: {}", a);
    }

    #[test]
    fn test_linear_bezier() {
        for t in [0.1, 0.33, 0.75] {
            assert!((cubic_bezier(0.25, 0.25, 0.75, 0.75, t) - t).abs() < 1e-4);
        }
    }
}
