use serde::Serialize;

/// Steps in the season enrollment flow.
pub const STEP_COUNT: u8 = 2;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("step must be 1 or 2, got {0}")]
pub struct InvalidStep(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub step: u8,
    pub active: bool,
}

/// Visual state of the enrollment progress bar: equal-width segments,
/// each active once the flow has reached it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepIndicator {
    current_step: u8,
    segments: [Segment; STEP_COUNT as usize],
}

impl StepIndicator {
    pub fn new(current_step: i64) -> Result<Self, InvalidStep> {
        let step = u8::try_from(current_step)
            .ok()
            .filter(|s| (1..=STEP_COUNT).contains(s))
            .ok_or(InvalidStep(current_step))?;

        let segments = [1, 2].map(|i| Segment {
            step: i,
            active: step >= i,
        });
        Ok(Self {
            current_step: step,
            segments,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}
