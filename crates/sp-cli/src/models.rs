use sp_core::EndReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoundaryEvent {
    Choices,
    End,
}

#[derive(Debug, Clone)]
pub(crate) struct BoundaryResult {
    pub(crate) event: BoundaryEvent,
    pub(crate) texts: Vec<String>,
    pub(crate) choices: Vec<(usize, String)>,
    pub(crate) end_reason: Option<EndReason>,
}

pub(crate) const END_OF_SCENARIO_MESSAGE: &str = "End of scenario. Exiting application.";
