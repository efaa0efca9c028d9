//! Chebyshev series evaluation for SPK records.

/// Sum `c_0 T_0(s) + c_1 T_1(s) + ...` by the Clenshaw recurrence.
///
/// `s` is the normalised time inside the record, in [-1, 1].
pub fn clenshaw(coeffs: &[f64], s: f64) -> f64 {
    let Some((&c0, rest)) = coeffs.split_first() else {
        return 0.0;
    };
    let two_s = 2.0 * s;
    let (mut b1, mut b2) = (0.0_f64, 0.0_f64);
    for &c in rest.iter().rev() {
        let b = two_s * b1 - b2 + c;
        b2 = b1;
        b1 = b;
    }
    s * b1 - b2 + c0
}

/// Value and derivative (with respect to `s`) of a Chebyshev series.
///
/// Runs the forward recurrences
/// `T_k = 2s T_{k-1} - T_{k-2}` and `T_k' = 2 T_{k-1} + 2s T_{k-1}' - T_{k-2}'`
/// side by side.
pub fn value_and_derivative(coeffs: &[f64], s: f64) -> (f64, f64) {
    match coeffs.len() {
        0 => return (0.0, 0.0),
        1 => return (coeffs[0], 0.0),
        _ => {}
    }
    let two_s = 2.0 * s;
    let (mut t0, mut t1) = (1.0, s);
    let (mut d0, mut d1) = (0.0, 1.0);
    let mut value = coeffs[0] + coeffs[1] * s;
    let mut rate = coeffs[1];
    for &c in &coeffs[2..] {
        let t = two_s * t1 - t0;
        let d = 2.0 * t1 + two_s * d1 - d0;
        value += c * t;
        rate += c * d;
        t0 = t1;
        t1 = t;
        d0 = d1;
        d1 = d;
    }
    (value, rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-13;

    #[test]
    fn empty_and_constant() {
        assert_eq!(clenshaw(&[], 0.3), 0.0);
        assert_eq!(value_and_derivative(&[], 0.3), (0.0, 0.0));
        assert!((clenshaw(&[4.5], -0.9) - 4.5).abs() < EPS);
        assert_eq!(value_and_derivative(&[4.5], -0.9).1, 0.0);
    }

    #[test]
    fn cubic_matches_closed_form() {
        // 2 T0 - T1 + 0.5 T2 + 3 T3
        let c = [2.0, -1.0, 0.5, 3.0];
        let s = -0.35;
        let t2 = 2.0 * s * s - 1.0;
        let t3 = 4.0 * s * s * s - 3.0 * s;
        let expected = 2.0 - s + 0.5 * t2 + 3.0 * t3;
        let expected_d = -1.0 + 0.5 * 4.0 * s + 3.0 * (12.0 * s * s - 3.0);
        assert!((clenshaw(&c, s) - expected).abs() < EPS);
        let (v, d) = value_and_derivative(&c, s);
        assert!((v - expected).abs() < EPS);
        assert!((d - expected_d).abs() < EPS);
    }

    #[test]
    fn clenshaw_agrees_with_forward_recurrence() {
        let c = [0.1, 0.7, -0.2, 0.05, 0.01, -0.003, 0.0007];
        for i in 0..=20 {
            let s = -1.0 + i as f64 * 0.1;
            let a = clenshaw(&c, s);
            let (b, _) = value_and_derivative(&c, s);
            assert!((a - b).abs() < EPS, "s={s}: {a} vs {b}");
        }
    }

    #[test]
    fn endpoints() {
        // T_k(1) = 1, T_k(-1) = (-1)^k
        let c = [1.0, 2.0, 3.0, 4.0];
        assert!((clenshaw(&c, 1.0) - 10.0).abs() < EPS);
        assert!((clenshaw(&c, -1.0) - (1.0 - 2.0 + 3.0 - 4.0)).abs() < EPS);
    }
}
