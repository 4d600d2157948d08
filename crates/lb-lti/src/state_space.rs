//! Controllable canonical state-space realization.

use crate::error::{LtiError, LtiResult};
use crate::polynomial;
use crate::transfer::TransferFunction;

/// Dense state realization `x' = A*x + B*u`, `y = C*x + D*u`.
///
/// `A` is stored row-major in companion (controllable canonical) form, so
/// integration needs nothing beyond dense matrix-vector products. The
/// order-zero case (pure gain) has empty `A`, `B`, `C` and carries the whole
/// input-output map in `D`.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSpace {
    /// State matrix, `order x order`, row-major.
    pub a: Vec<Vec<f64>>,
    /// Input vector, length `order`.
    pub b: Vec<f64>,
    /// Output vector, length `order`.
    pub c: Vec<f64>,
    /// Direct feedthrough.
    pub d: f64,
}

impl StateSpace {
    /// Realize a proper transfer function in controllable canonical form.
    ///
    /// For the monic denominator `s^n + a1*s^(n-1) + ... + an` and the
    /// padded numerator `b0*s^n + ... + bn` (both normalized by the leading
    /// denominator coefficient):
    ///
    /// - `A` has ones on the superdiagonal and `-an .. -a1` in the last row
    /// - `B = [0, .., 0, 1]`
    /// - `C = [bn - an*b0, .., b1 - a1*b0]`
    /// - `D = b0`
    pub fn from_transfer_function(tf: &TransferFunction) -> LtiResult<Self> {
        let den = polynomial::strip_leading_zeros(tf.den());
        if den.is_empty() {
            return Err(LtiError::DegenerateSystem);
        }
        let num = polynomial::strip_leading_zeros(tf.num());
        if num.len() > den.len() {
            return Err(LtiError::InvalidCoefficients {
                what: "numerator degree exceeds denominator degree",
            });
        }

        let n = den.len() - 1;
        let lead = den[0];
        // a_monic[k] is the coefficient a_{k+1} of the monic denominator.
        let a_monic: Vec<f64> = den[1..].iter().map(|c| c / lead).collect();
        // Numerator padded to n + 1 terms, normalized by the same leading
        // coefficient. An all-zero numerator pads to all zeros.
        let mut b_monic = vec![0.0; den.len() - num.len()];
        b_monic.extend(num.iter().map(|c| c / lead));
        let d = b_monic[0];

        let mut a = vec![vec![0.0; n]; n];
        for (i, row) in a.iter_mut().enumerate().take(n.saturating_sub(1)) {
            row[i + 1] = 1.0;
        }
        if let Some(last_row) = a.last_mut() {
            for (j, cell) in last_row.iter_mut().enumerate() {
                *cell = -a_monic[n - 1 - j];
            }
        }

        let mut b = vec![0.0; n];
        if n > 0 {
            b[n - 1] = 1.0;
        }

        let c: Vec<f64> = (0..n)
            .map(|j| b_monic[n - j] - a_monic[n - j - 1] * d)
            .collect();

        Ok(Self { a, b, c, d })
    }

    /// Number of states.
    pub fn order(&self) -> usize {
        self.a.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tf(num: &[f64], den: &[f64]) -> TransferFunction {
        TransferFunction::new(num.to_vec(), den.to_vec()).unwrap()
    }

    #[test]
    fn first_order_lag() {
        // 1/(s+2)
        let ss = StateSpace::from_transfer_function(&tf(&[1.0], &[1.0, 2.0])).unwrap();
        assert_eq!(ss.order(), 1);
        assert_eq!(ss.a, vec![vec![-2.0]]);
        assert_eq!(ss.b, vec![1.0]);
        assert_eq!(ss.c, vec![1.0]);
        assert_eq!(ss.d, 0.0);
    }

    #[test]
    fn second_order_with_zero() {
        // (s+3)/(s^2+4s+5)
        let ss =
            StateSpace::from_transfer_function(&tf(&[1.0, 3.0], &[1.0, 4.0, 5.0])).unwrap();
        assert_eq!(ss.a, vec![vec![0.0, 1.0], vec![-5.0, -4.0]]);
        assert_eq!(ss.b, vec![0.0, 1.0]);
        assert_eq!(ss.c, vec![3.0, 1.0]);
        assert_eq!(ss.d, 0.0);
    }

    #[test]
    fn biproper_has_feedthrough() {
        // (2s+1)/(s+3) = 2 - 5/(s+3)
        let ss = StateSpace::from_transfer_function(&tf(&[2.0, 1.0], &[1.0, 3.0])).unwrap();
        assert_eq!(ss.d, 2.0);
        assert_eq!(ss.c, vec![-5.0]);
    }

    #[test]
    fn non_monic_denominator_is_normalized() {
        // 2/(2s+4) == 1/(s+2)
        let ss = StateSpace::from_transfer_function(&tf(&[2.0], &[2.0, 4.0])).unwrap();
        assert_relative_eq!(ss.a[0][0], -2.0);
        assert_relative_eq!(ss.c[0], 1.0);
    }

    #[test]
    fn order_zero_is_pure_gain() {
        let ss = StateSpace::from_transfer_function(&tf(&[3.0], &[2.0])).unwrap();
        assert_eq!(ss.order(), 0);
        assert!(ss.b.is_empty());
        assert_relative_eq!(ss.d, 1.5);
    }

    #[test]
    fn zero_numerator_realizes_to_zero_output() {
        let ss =
            StateSpace::from_transfer_function(&tf(&[0.0], &[1.0, 3.0, 2.0])).unwrap();
        assert_eq!(ss.c, vec![0.0, 0.0]);
        assert_eq!(ss.d, 0.0);
    }

    #[test]
    fn improper_is_rejected() {
        // Construction does not enforce properness; realization does.
        let g = tf(&[1.0, 0.0, 0.0], &[1.0, 0.0]);
        let err = StateSpace::from_transfer_function(&g).unwrap_err();
        assert!(matches!(err, LtiError::InvalidCoefficients { .. }));
    }
}
