//! Easing curve for move slides

/// Hermite ease-in-ease-out between `from` and `to`.
///
/// `t` is clamped to `[0, 1]` and shaped by `3t² - 2t³`, so the curve has zero
/// slope at both ends.
pub fn smooth_step(from: f32, to: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let t = t * t * (3.0 - 2.0 * t);
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smooth_step_endpoints() {
        assert_eq!(smooth_step(0.0, 1.0, 0.0), 0.0);
        assert_eq!(smooth_step(0.0, 1.0, 1.0), 1.0);
        assert!((smooth_step(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_smooth_step_eases() {
        // Slower than linear near the ends
        assert!(smooth_step(0.0, 1.0, 0.1) < 0.1);
        assert!(smooth_step(0.0, 1.0, 0.9) > 0.9);
    }

    #[test]
    fn test_smooth_step_clamps() {
        assert_eq!(smooth_step(0.0, 1.0, 2.0), 1.0);
        assert_eq!(smooth_step(0.0, 1.0, -1.0), 0.0);
    }
}
