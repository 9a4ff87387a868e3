use sp_test_example::{demo_dir, demo_names, testcase_path};
use sp_tool::assert_case;

#[test]
fn every_demo_case_passes() {
    let names = demo_names();
    assert!(!names.is_empty(), "no demo cases found");

    let failures = names
        .iter()
        .filter_map(|name| {
            assert_case(&demo_dir(name), &testcase_path(name))
                .err()
                .map(|error| format!("{}: {}", name, error))
        })
        .collect::<Vec<_>>();
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
