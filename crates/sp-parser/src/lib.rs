mod scenario_text;

pub use scenario_text::{
    parse_branch_line, parse_options, parse_scenario, parse_scenario_text, split_source_lines,
    ParsedBranch, ParsedScenario, BRANCH_SEPARATOR, OPTION_SEPARATOR, TARGET_SEPARATOR,
};
