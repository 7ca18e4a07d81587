mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn lists_working_set_in_first_appearance_order() {
    let fixture = TestFixture::new();
    let holdings = fixture.write_holdings(&[
        "10,Journal X,Beta,2005-01-01,2021-01-01,,,,No",
        "10,Journal X,Alpha,2010-01-01,2020-01-01,,,,No",
        "30,Journal Z,Beta,2000-01-01,2001-01-01,,,,No",
    ]);

    fixture
        .command()
        .arg("packages")
        .arg("--holdings")
        .arg(&holdings)
        .assert()
        .success()
        .stdout(predicate::str::contains("WORKING PACKAGE SET"))
        .stdout(predicate::str::contains("0  Beta"))
        .stdout(predicate::str::contains("1  Alpha"));
}

#[test]
fn denylisted_packages_are_not_listed() {
    let fixture = TestFixture::new();
    let holdings = fixture.write_holdings(&[
        "10,Journal X,Beta,2005-01-01,2021-01-01,,,,No",
        "10,Journal X,Alpha,2010-01-01,2020-01-01,,,,No",
    ]);
    let config = fixture.write_config("excluded_packages = [\"Beta\"]\n");

    fixture
        .command()
        .arg("packages")
        .arg("--holdings")
        .arg(&holdings)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("0  Alpha"))
        .stdout(predicate::str::contains("Beta").not());
}

#[test]
fn json_format_prints_index_entries() {
    let fixture = TestFixture::new();
    let holdings =
        fixture.write_holdings(&["10,Journal X,Alpha,2010-01-01,2020-01-01,,,,No"]);

    fixture
        .command()
        .arg("--format")
        .arg("json")
        .arg("packages")
        .arg("--holdings")
        .arg(&holdings)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"index\": 0"))
        .stdout(predicate::str::contains("\"package_name\": \"Alpha\""));
}
