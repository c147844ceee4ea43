use super::SubmitError;
use web_sys::Element;

/// Attribute holding the submission state on the form (or link) element.
pub const STATE_ATTR: &str = "data-submit-state";

/// Idle -> Submitting -> Idle. A second start while submitting is refused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

impl SubmitState {
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("submitting") => SubmitState::Submitting,
            _ => SubmitState::Idle,
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            SubmitState::Idle => "idle",
            SubmitState::Submitting => "submitting",
        }
    }

    pub fn begin(self) -> Result<Self, SubmitError> {
        match self {
            SubmitState::Idle => Ok(SubmitState::Submitting),
            SubmitState::Submitting => Err(SubmitError::InFlight),
        }
    }

    pub fn finish(self) -> Self {
        SubmitState::Idle
    }
}

/// Mark `el` as submitting, refusing when a request is already pending.
pub fn begin(el: &Element) -> Result<(), SubmitError> {
    let next = SubmitState::from_attr(el.get_attribute(STATE_ATTR).as_deref()).begin()?;
    let _ = el.set_attribute(STATE_ATTR, next.as_attr());
    Ok(())
}

pub fn finish(el: &Element) {
    let next = SubmitState::from_attr(el.get_attribute(STATE_ATTR).as_deref()).finish();
    let _ = el.set_attribute(STATE_ATTR, next.as_attr());
}
