//! End-to-end scans over hand-written mount tables.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{mount_table, no_cfg_localdf_command};

fn total_line(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout)
        .lines()
        .find(|line| line.starts_with("total: "))
        .unwrap()
        .to_string()
}

#[test]
fn test_missing_mount_table() {
    no_cfg_localdf_command()
        .arg("--mounts")
        .arg("./tests/this/mount/table/does/not/exist")
        .assert()
        .success()
        .stdout(predicate::str::diff("total: 0\nfree: 0\n"));
}

#[test]
fn test_only_ineligible_mounts() {
    let mounts = mount_table(indoc::indoc! {"
        garbage
        proc /proc proc rw,nosuid,nodev,noexec,relatime 0 0
        tmpfs /run tmpfs rw,nosuid,nodev 0 0
        /dev/sda1 / ext4 ro,relatime 0 0
        host:/export / nfs4 rw 0 0
        /dev/sdc1 / nfs rw 0 0
        //server/share / smbfs rw 0 0
    "});

    no_cfg_localdf_command()
        .arg("--mounts")
        .arg(mounts.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("total: 0\nfree: 0\n"));
}

#[test]
fn test_unreadable_mount_point() {
    let mounts = mount_table("/dev/sdz9 /this/mount/point/does/not/exist ext4 rw 0 0\n");

    no_cfg_localdf_command()
        .arg("--mounts")
        .arg(mounts.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("total: 0\nfree: 0\n"));
}

#[cfg(unix)]
#[test]
fn test_duplicate_device_counted_once() {
    let single = mount_table("/dev/localdf-test / ext4 rw 0 0\n");
    let doubled = mount_table(indoc::indoc! {"
        /dev/localdf-test / ext4 rw 0 0
        /dev/localdf-test / ext4 rw,relatime 0 0
    "});

    let single = no_cfg_localdf_command()
        .arg("--mounts")
        .arg(single.path())
        .output()
        .unwrap();
    let doubled = no_cfg_localdf_command()
        .arg("--mounts")
        .arg(doubled.path())
        .output()
        .unwrap();

    assert!(single.status.success());
    assert!(doubled.status.success());
    assert_eq!(total_line(&single.stdout), total_line(&doubled.stdout));
}

#[cfg(unix)]
#[test]
fn test_distinct_devices_are_summed() {
    let single = mount_table("/dev/localdf-a / ext4 rw 0 0\n");
    let two = mount_table(indoc::indoc! {"
        /dev/localdf-a / ext4 rw 0 0
        /dev/localdf-b / ext4 rw 0 0
    "});

    let parse_total = |stdout: &[u8]| -> u64 {
        total_line(stdout)
            .trim_start_matches("total: ")
            .parse()
            .unwrap()
    };

    let single = no_cfg_localdf_command()
        .arg("--mounts")
        .arg(single.path())
        .output()
        .unwrap();
    let two = no_cfg_localdf_command()
        .arg("--mounts")
        .arg(two.path())
        .output()
        .unwrap();

    let single = parse_total(&single.stdout);
    let two = parse_total(&two.stdout);

    // Rounding happens once, after summing.
    assert!(two == single * 2 || two == single * 2 + 1);
}

#[cfg(feature = "logging")]
#[test]
fn test_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("localdf.log");

    no_cfg_localdf_command()
        .arg("--mounts")
        .arg("./tests/this/mount/table/does/not/exist")
        .arg("--log-file")
        .arg(&log_file)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log_file).unwrap();
    assert!(contents.contains("Unable to open"));
}
