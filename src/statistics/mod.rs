use crate::{float,Float};

// Abramowitz & Stegun 7.1.26, abs error <= 1.5e-7
const ERF_P: Float = 0.3275911;
const ERF_A1: Float = 0.254829592;
const ERF_A2: Float = -0.284496736;
const ERF_A3: Float = 1.421413741;
const ERF_A4: Float = -1.453152027;
const ERF_A5: Float = 1.061405429;

pub fn z_score(x: Float, mean: Float, std: Float) -> Float {
    assert!(std > 0.0);
    (x - mean)/std
}

pub fn pdf(x: Float, mean: Float, std: Float) -> Float {
    assert!(std > 0.0);
    let z = z_score(x, mean, std);
    (-0.5*z*z).exp()/(std*(2.0*float::consts::PI).sqrt())
}

pub fn cdf(x: Float, mean: Float, std: Float) -> Float {
    assert!(std > 0.0);
    let z = z_score(x, mean, std);
    0.5*(1.0 + erf(z/float::consts::SQRT_2))
}

pub fn erf(x: Float) -> Float {
    let sign = match x {
        x if x < 0.0 => -1.0,
        _ => 1.0
    };
    let x_abs = x.abs();
    let t = 1.0/(1.0 + ERF_P*x_abs);
    let poly = t*(ERF_A1 + t*(ERF_A2 + t*(ERF_A3 + t*(ERF_A4 + t*ERF_A5))));
    sign*(1.0 - poly*(-x_abs*x_abs).exp())
}

pub fn round(number: Float, dp: i32) -> Float {
    let n = (10.0 as Float).powi(dp);
    (number * n).round()/n
}
