//! Indicator trait definitions.

/// Trait for technical indicators.
///
/// Indicators process price data and produce derived values useful for
/// trading decisions. The output vector is shorter than the input by the
/// indicator's warmup; outputs align with the tail of the input.
pub trait Indicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Calculate indicator values for the given data.
    fn calculate(&self, data: &[f64]) -> Vec<Self::Output>;

    /// Get the minimum data points required.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}

/// Multi-output indicator (e.g., Bollinger Bands, MACD).
pub trait MultiOutputIndicator: Send + Sync {
    /// The output type containing multiple values.
    type Outputs;

    /// Calculate indicator values for the given data.
    fn calculate(&self, data: &[f64]) -> Vec<Self::Outputs>;

    /// Get the minimum data points required.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct WindowSum {
        period: usize,
    }

    impl Indicator for WindowSum {
        type Output = f64;

        fn calculate(&self, data: &[f64]) -> Vec<f64> {
            if data.len() < self.period {
                return vec![];
            }
            data.windows(self.period).map(|w| w.iter().sum()).collect()
        }

        fn period(&self) -> usize {
            self.period
        }

        fn name(&self) -> &str {
            "sum"
        }
    }

    #[test]
    fn test_indicator_calculate() {
        let indicator = WindowSum { period: 3 };
        let result = indicator.calculate(&[1.0, 2.0, 3.0, 4.0, 5.0]);

        assert_eq!(result, vec![6.0, 9.0, 12.0]);
    }

    #[test]
    fn test_indicator_insufficient_data() {
        let indicator = WindowSum { period: 5 };
        assert!(indicator.calculate(&[1.0, 2.0]).is_empty());
    }
}
