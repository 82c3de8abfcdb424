#![allow(missing_docs, clippy::tests_outside_test_module)]

use assert_cmd::Command;

/// Run `hgrid` with the given arguments.
fn hgrid(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("hgrid").expect("binary exists");
    cmd.args(args);
    cmd
}

#[test]
fn missing_argument_is_a_usage_error() {
    hgrid(&[]).assert().failure();
}

#[test]
fn non_numeric_argument_is_rejected() {
    hgrid(&["four"]).assert().failure();
}

#[test]
fn oversized_order_is_rejected() {
    hgrid(&["16"]).assert().failure();
}

#[test]
fn order_0_renders_a_single_cell() {
    hgrid(&["0"])
        .assert()
        .success()
        .stdout("     \n  |  \n     \n");
}

#[test]
fn order_1_renders_the_2x2_walk() {
    let expected = concat!(
        "          \n",
        "  |    |  \n",
        "  |    |  \n",
        "  |    |  \n",
        "  +----+  \n",
        "          \n",
    );
    hgrid(&["1"]).assert().success().stdout(expected);
}

#[test]
fn order_3_output_geometry() {
    let output = hgrid(&["3"]).assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).expect("utf8 output");

    // 8x8 grid: three text lines per row, five columns per cell.
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3 * 8);
    for line in lines {
        assert_eq!(line.len(), 5 * 8);
    }
}
