use crate::AsciiError;

/// Percentage applied to both axes when no scale is configured.
pub const DEFAULT_SCALE_PERCENT: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetGeometry {
    pub columns: u32,
    pub rows: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalePolicy {
    /// Keep the decoded size.
    Original,
    /// Scale each axis by a percentage in `1..=100`.
    Percent { horizontal: u32, vertical: u32 },
}

impl ScalePolicy {
    pub fn percent(percent: u32) -> Self {
        ScalePolicy::Percent { horizontal: percent, vertical: percent }
    }

    pub fn derive(
        &self,
        source_width: u32,
        source_height: u32,
    ) -> Result<TargetGeometry, AsciiError> {
        if source_width == 0 || source_height == 0 {
            return Err(AsciiError::EmptyImage);
        }

        match *self {
            ScalePolicy::Original => {
                Ok(TargetGeometry { columns: source_width, rows: source_height })
            },
            ScalePolicy::Percent { horizontal, vertical } => {
                for percent in [horizontal, vertical] {
                    if !(1..=100).contains(&percent) {
                        return Err(AsciiError::InvalidScale(percent));
                    }
                }

                Ok(TargetGeometry {
                    columns: scale_axis(source_width, horizontal),
                    rows: scale_axis(source_height, vertical),
                })
            },
        }
    }
}

impl Default for ScalePolicy {
    fn default() -> Self {
        ScalePolicy::percent(DEFAULT_SCALE_PERCENT)
    }
}

fn scale_axis(length: u32, percent: u32) -> u32 {
    let scaled = (u64::from(length) * u64::from(percent) + 50) / 100;
    (scaled as u32).max(1)
}
