//! Piecewise-linear mapping from an input range (usually a scroll offset) to
//! an output value. Inputs outside the breakpoints are clamped to the first
//! or last output, never extrapolated.

use crate::error::PortfolioError;

#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    inputs: Vec<f64>,
    outputs: Vec<f64>,
}

impl Ramp {
    /// Builds a ramp through `(inputs[i], outputs[i])`.
    ///
    /// Inputs must be strictly increasing and both slices must have the same
    /// length of at least two.
    pub fn new(inputs: &[f64], outputs: &[f64]) -> Result<Self, PortfolioError> {
        if inputs.len() != outputs.len() {
            return Err(PortfolioError::InvalidRamp("inputs and outputs differ in length"));
        }
        if inputs.len() < 2 {
            return Err(PortfolioError::InvalidRamp("at least two breakpoints are required"));
        }
        if inputs.iter().chain(outputs).any(|v| !v.is_finite()) {
            return Err(PortfolioError::InvalidRamp("breakpoints must be finite"));
        }
        if inputs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(PortfolioError::InvalidRamp("inputs must be strictly increasing"));
        }
        Ok(Self {
            inputs: inputs.to_vec(),
            outputs: outputs.to_vec(),
        })
    }

    /// Two-point ramp. Falls back to a constant `to.1` if the domain is empty
    /// or reversed.
    pub fn linear(from: (f64, f64), to: (f64, f64)) -> Self {
        Self::new(&[from.0, to.0], &[from.1, to.1]).unwrap_or_else(|_| Self {
            inputs: vec![0.0, 1.0],
            outputs: vec![to.1, to.1],
        })
    }

    pub fn sample(&self, x: f64) -> f64 {
        let last = self.inputs.len() - 1;
        if x.is_nan() || x <= self.inputs[0] {
            return self.outputs[0];
        }
        if x >= self.inputs[last] {
            return self.outputs[last];
        }
        // First breakpoint strictly greater than x; guaranteed in 1..=last here.
        let upper = self.inputs.partition_point(|&input| input <= x);
        let (x0, x1) = (self.inputs[upper - 1], self.inputs[upper]);
        let (y0, y1) = (self.outputs[upper - 1], self.outputs[upper]);
        y0 + (x - x0) / (x1 - x0) * (y1 - y0)
    }
}
