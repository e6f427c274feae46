use thiserror::Error;

/// Sampling density for [`scan`](super::scan).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawScanConfig"))]
pub struct ScanConfig {
    samples: usize,
}

/// Errors that can occur when validating a scan config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScanConfigError {
    #[error("a scan needs at least 2 samples, got {0}")]
    TooFewSamples(usize),
}

impl Default for ScanConfig {
    /// 1000 evenly spaced samples.
    fn default() -> Self {
        Self { samples: 1000 }
    }
}

impl ScanConfig {
    /// Creates a config sampling `samples` points, endpoints included.
    ///
    /// # Errors
    ///
    /// Returns an error if `samples < 2`.
    pub fn new(samples: usize) -> Result<Self, ScanConfigError> {
        if samples < 2 {
            return Err(ScanConfigError::TooFewSamples(samples));
        }
        Ok(Self { samples })
    }

    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawScanConfig {
    samples: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawScanConfig> for ScanConfig {
    type Error = ScanConfigError;

    fn try_from(raw: RawScanConfig) -> Result<Self, Self::Error> {
        Self::new(raw.samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_thousand() {
        assert_eq!(ScanConfig::default().samples(), 1000);
    }

    #[test]
    fn rejects_fewer_than_two() {
        assert_eq!(ScanConfig::new(1), Err(ScanConfigError::TooFewSamples(1)));
        assert_eq!(ScanConfig::new(0), Err(ScanConfigError::TooFewSamples(0)));
        assert!(ScanConfig::new(2).is_ok());
    }
}
