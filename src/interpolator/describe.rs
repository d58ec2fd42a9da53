//! Equation formatting for the quadratic model.

use nalgebra::Vector3;

/// Terms whose coefficient magnitude falls below this are omitted.
const SUPPRESS_EPS: f64 = 1e-10;

/// Render `(a, b, c)` as `y = ax^2 + bx + c`.
///
/// Negligible terms are dropped, signs fold into the separators (`" - "` with
/// the magnitude, never a stray `+ -`), and a model with no surviving terms
/// renders as `y = 0`. Coefficients are printed with `f64`'s shortest
/// round-trip formatting, so parsing them back recovers the values exactly.
pub(super) fn format_equation(coefficients: &Vector3<f64>) -> String {
    let terms = [
        (coefficients[0], "x^2"),
        (coefficients[1], "x"),
        (coefficients[2], ""),
    ];

    let mut out = String::from("y = ");
    let mut first = true;
    for (coef, suffix) in terms {
        if coef.abs() < SUPPRESS_EPS {
            continue;
        }
        if first {
            if coef < 0.0 {
                out.push('-');
            }
            first = false;
        } else {
            out.push_str(if coef < 0.0 { " - " } else { " + " });
        }
        out.push_str(&format!("{}{}", coef.abs(), suffix));
    }
    if first {
        out.push('0');
    }
    out
}
