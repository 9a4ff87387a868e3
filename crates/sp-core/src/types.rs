use serde::{Deserialize, Serialize};

/// One labeled choice of a branch. `target` is taken from the source text as
/// is and is only checked against the branch count during traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchOption {
    pub label: String,
    pub target: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub description: String,
    pub options: Vec<BranchOption>,
}

impl Branch {
    pub fn is_terminal(&self) -> bool {
        self.options.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub title: String,
    pub branches: Vec<Branch>,
}

impl Scenario {
    /// Resolves a jump target. Negative and past-the-end indices yield `None`.
    pub fn branch(&self, index: i64) -> Option<&Branch> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.branches.get(index))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceItem {
    pub index: usize,
    pub label: String,
    pub target: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EndReason {
    /// The current branch has no options.
    TerminalBranch { index: usize },
    /// A jump landed outside the branch list.
    OutOfRange { index: i64 },
    NoBranches,
}

impl EndReason {
    pub fn code(&self) -> &'static str {
        match self {
            Self::TerminalBranch { .. } => "TERMINAL_BRANCH",
            Self::OutOfRange { .. } => "OUT_OF_RANGE",
            Self::NoBranches => "NO_BRANCHES",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EngineOutput {
    Text {
        text: String,
        branch_index: usize,
    },
    Choices {
        items: Vec<ChoiceItem>,
    },
    End {
        reason: EndReason,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manor() -> Scenario {
        Scenario {
            title: "The Haunted Manor".to_string(),
            branches: vec![
                Branch {
                    description: "You stand before a manor.".to_string(),
                    options: vec![
                        BranchOption {
                            label: "Enter".to_string(),
                            target: 1,
                        },
                        BranchOption {
                            label: "Leave".to_string(),
                            target: 2,
                        },
                    ],
                },
                Branch {
                    description: "You are inside.".to_string(),
                    options: Vec::new(),
                },
            ],
        }
    }

    #[test]
    fn branch_lookup_rejects_negative_and_past_end_indices() {
        let scenario = manor();
        assert!(scenario.branch(0).is_some());
        assert!(scenario.branch(1).is_some());
        assert!(scenario.branch(2).is_none());
        assert!(scenario.branch(-1).is_none());
        assert!(scenario.branch(i64::MAX).is_none());
    }

    #[test]
    fn terminal_branch_has_no_options() {
        let scenario = manor();
        assert!(!scenario.branches[0].is_terminal());
        assert!(scenario.branches[1].is_terminal());
    }

    #[test]
    fn end_reason_serializes_with_kind_tag() {
        let json = serde_json::to_value(EndReason::OutOfRange { index: -1 })
            .expect("end reason should serialize");
        assert_eq!(json["kind"], "outOfRange");
        assert_eq!(json["index"], -1);
        assert_eq!(EndReason::NoBranches.code(), "NO_BRANCHES");
    }
}
