//! Rational transfer functions in the Laplace variable s.

use lb_core::{Tolerances, nearly_equal};
use serde::{Deserialize, Serialize};

use crate::error::{LtiError, LtiResult};
use crate::polynomial;

/// A SISO continuous-time transfer function, stored as numerator and
/// denominator polynomial coefficients ordered highest degree first.
///
/// Values are immutable once built: composition returns fresh instances and
/// nothing here is shared between simulation requests.
///
/// Invariants established by [`TransferFunction::new`]:
/// - every coefficient is finite
/// - the denominator is not the all-zero sequence and its leading
///   coefficient is non-zero (leading exact zeros are stripped)
/// - an all-zero numerator collapses to `[0.0]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferFunction {
    num: Vec<f64>,
    den: Vec<f64>,
}

impl TransferFunction {
    /// Create a transfer function from coefficient sequences.
    ///
    /// # Arguments
    ///
    /// * `num` - Numerator coefficients, highest degree first
    /// * `den` - Denominator coefficients, highest degree first
    pub fn new(num: Vec<f64>, den: Vec<f64>) -> LtiResult<Self> {
        if num.iter().chain(den.iter()).any(|c| !c.is_finite()) {
            return Err(LtiError::InvalidCoefficients {
                what: "coefficients must be finite",
            });
        }
        let den = polynomial::strip_leading_zeros(&den).to_vec();
        if den.is_empty() {
            return Err(LtiError::InvalidCoefficients {
                what: "denominator must not be the zero polynomial",
            });
        }
        let num = normalize_num(&num);
        Ok(Self { num, den })
    }

    /// Numerator coefficients, highest degree first.
    pub fn num(&self) -> &[f64] {
        &self.num
    }

    /// Denominator coefficients, highest degree first.
    pub fn den(&self) -> &[f64] {
        &self.den
    }

    /// Denominator degree.
    pub fn order(&self) -> usize {
        self.den.len() - 1
    }

    /// Series (cascade) composition: numerators multiply, denominators
    /// multiply. Degrees add.
    pub fn series(&self, other: &TransferFunction) -> TransferFunction {
        TransferFunction {
            num: normalize_num(&polynomial::mul(&self.num, &other.num)),
            den: polynomial::mul(&self.den, &other.den),
        }
    }

    /// Close a unity-feedback loop around this forward path.
    ///
    /// For a forward path `N/D` the result is `N / (D - sign*N)`; negative
    /// feedback is `sign = -1.0`, giving `N / (D + N)`. The numerator is
    /// right-aligned onto the denominator for the addition.
    ///
    /// Fails with [`LtiError::DegenerateSystem`] if the new denominator
    /// strips to the zero polynomial, so an ill-posed loop surfaces here
    /// instead of producing NaNs during simulation.
    pub fn feedback(&self, sign: f64) -> LtiResult<TransferFunction> {
        let scaled: Vec<f64> = self.num.iter().map(|c| c * -sign).collect();
        let den = polynomial::add(&self.den, &scaled);
        let den = polynomial::strip_leading_zeros(&den).to_vec();
        if den.is_empty() {
            return Err(LtiError::DegenerateSystem);
        }
        Ok(TransferFunction {
            num: self.num.clone(),
            den,
        })
    }

    /// Evaluate at a real point `s`.
    ///
    /// Evaluation at a pole divides by zero and returns an infinity or NaN;
    /// callers probing arbitrary points must tolerate that.
    pub fn eval(&self, s: f64) -> f64 {
        polynomial::eval(&self.num, s) / polynomial::eval(&self.den, s)
    }

    /// Steady-state (DC) gain, `H(0)`.
    pub fn dc_gain(&self) -> f64 {
        self.eval(0.0)
    }

    /// Coefficient-wise comparison within tolerances. Literal: two
    /// representations of the same function that differ by a common scalar
    /// factor compare unequal.
    pub fn nearly_equal(&self, other: &TransferFunction, tol: Tolerances) -> bool {
        coeffs_nearly_equal(&self.num, &other.num, tol)
            && coeffs_nearly_equal(&self.den, &other.den, tol)
    }
}

fn normalize_num(coeffs: &[f64]) -> Vec<f64> {
    let stripped = polynomial::strip_leading_zeros(coeffs);
    if stripped.is_empty() {
        vec![0.0]
    } else {
        stripped.to_vec()
    }
}

fn coeffs_nearly_equal(a: &[f64], b: &[f64], tol: Tolerances) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b.iter())
            .all(|(&x, &y)| nearly_equal(x, y, tol))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coeff_vec(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(0.1_f64..10.0_f64, 1..=max_len)
    }

    proptest! {
        #[test]
        fn series_degrees_add(
            an in coeff_vec(3), ad in coeff_vec(4),
            bn in coeff_vec(3), bd in coeff_vec(4),
        ) {
            let a = TransferFunction::new(an, ad).unwrap();
            let b = TransferFunction::new(bn, bd).unwrap();
            let c = a.series(&b);
            prop_assert_eq!(c.num().len(), a.num().len() + b.num().len() - 1);
            prop_assert_eq!(c.den().len(), a.den().len() + b.den().len() - 1);
        }

        #[test]
        fn series_evaluates_to_product(
            an in coeff_vec(3), ad in coeff_vec(4),
            bn in coeff_vec(3), bd in coeff_vec(4),
        ) {
            let a = TransferFunction::new(an, ad).unwrap();
            let b = TransferFunction::new(bn, bd).unwrap();
            // Positive coefficients keep the probe point away from poles.
            let s = 1.3;
            let lhs = a.series(&b).eval(s);
            let rhs = a.eval(s) * b.eval(s);
            prop_assert!((lhs - rhs).abs() <= 1e-9 * rhs.abs().max(1.0));
        }

        #[test]
        fn feedback_matches_dc_identity(gn in coeff_vec(3), gd in coeff_vec(4)) {
            let g = TransferFunction::new(gn, gd).unwrap();
            let g0 = g.dc_gain();
            prop_assume!((1.0 + g0).abs() > 1e-6);
            let closed = g.feedback(-1.0).unwrap();
            let expected = g0 / (1.0 + g0);
            prop_assert!((closed.dc_gain() - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }
    }
}
