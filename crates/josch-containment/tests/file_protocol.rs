//! The containment exchange against `sh` scripts standing in for the tools.
#![cfg(unix)]

use std::fs;
use std::path::Path;
use std::process::Command;
use std::thread;

use josch_config::ContainmentConfig;
use josch_containment::{ContainmentChecker, ContainmentError};
use josch_core::{ContainmentRelation, ContainmentToolKind, is_error};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const STUDENTS: &str = r#"{
  "$schema": "http://json-schema.org/draft-04/schema#",
  "type": "object",
  "properties": { "year": { "type": "number" } }
}"#;

const STUDENTS_WITH_CLASS: &str = r#"{
  "$schema": "http://json-schema.org/draft-04/schema#",
  "type": "object",
  "properties": { "year": { "type": "number" }, "class": { "type": "string" } },
  "required": ["class"]
}"#;

/// Answers `equivalent` for byte-identical inputs, `subset` otherwise, then
/// prints the single-line verdict.
const COMPARING_TOOL: &str = r#"
if cmp -s "$1" "$2"; then r=equivalent; else r=subset; fi
printf '{"result": "%s"}' "$r" > "$3"
echo Success.
"#;

/// Same as [`COMPARING_TOOL`], but holds the schema files for a while before
/// looking at them.
const SLOW_COMPARING_TOOL: &str = r#"
sleep 1
if cmp -s "$1" "$2"; then r=equivalent; else r=subset; fi
printf '{"result": "%s"}' "$r" > "$3"
echo Success.
"#;

/// Set for the child run of `second_process_exchange`.
const CHILD_ROOT_ENV: &str = "JOSCH_CONTAINMENT_CHILD_ROOT";

fn checker(dir: &TempDir, tool: ContainmentToolKind, script: &str) -> ContainmentChecker {
    let tool_dir = dir.path().join("tool");
    fs::create_dir_all(&tool_dir).unwrap();
    fs::write(tool_dir.join("tool.sh"), script).unwrap();
    checker_in(dir.path(), tool)
}

/// A checker over `root`, whose `tool/tool.sh` is already written.
fn checker_in(root: &Path, tool: ContainmentToolKind) -> ContainmentChecker {
    let tool_dir = root.join("tool");
    let script_path = tool_dir.join("tool.sh");
    ContainmentChecker::new(ContainmentConfig {
        tool,
        workspace_dir: root.join("nested").join("containment"),
        jss_path: tool_dir.clone(),
        ijs_path: tool_dir,
        install_before_run: false,
        command: Some(vec!["sh".to_string(), script_path.to_string_lossy().into_owned()]),
        lock_timeout_secs: 30,
    })
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn identical_schemas_are_equivalent() {
    let dir = tempfile::tempdir().unwrap();
    let checker = checker(&dir, ContainmentToolKind::JsonSubSchema, COMPARING_TOOL);

    let relation = checker.contains(STUDENTS, STUDENTS).unwrap();
    assert_eq!(relation, ContainmentRelation::Equivalent);
    assert_eq!(checker.contains_message(STUDENTS, STUDENTS), "equivalent");
}

#[test]
fn schemas_land_in_the_well_known_files() {
    let dir = tempfile::tempdir().unwrap();
    let checker = checker(&dir, ContainmentToolKind::JsonSubSchema, COMPARING_TOOL);

    let relation = checker.contains(STUDENTS_WITH_CLASS, STUDENTS).unwrap();
    assert_eq!(relation, ContainmentRelation::Subset);

    let config = checker.config();
    assert_eq!(read(&config.current_schema_path()), STUDENTS_WITH_CLASS);
    assert_eq!(read(&config.legacy_schema_path()), STUDENTS);
    assert_eq!(read(&config.result_path()), r#"{"result": "subset"}"#);
}

#[test]
fn done_line_from_package_manager_completes() {
    let dir = tempfile::tempdir().unwrap();
    let script = r#"
echo "yarn run v1.22.19"
echo '$ node index.js'
printf '{"result": "superset"}' > "$3"
echo "Done in 0.42s."
"#;
    let checker = checker(&dir, ContainmentToolKind::IsJsonSchemaSubset, script);
    assert_eq!(
        checker.contains(STUDENTS, STUDENTS_WITH_CLASS).unwrap(),
        ContainmentRelation::Superset
    );
}

#[test]
fn unknown_result_value_falls_back_to_not_equal() {
    let dir = tempfile::tempdir().unwrap();
    let script = r#"printf '{"result": "sideways"}' > "$3"; echo Success."#;
    let checker = checker(&dir, ContainmentToolKind::JsonSubSchema, script);
    assert_eq!(
        checker.contains(STUDENTS, STUDENTS).unwrap(),
        ContainmentRelation::NotEqual
    );
}

#[test]
fn missing_result_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let checker = checker(&dir, ContainmentToolKind::JsonSubSchema, "echo Success.");
    let err = checker.contains(STUDENTS, STUDENTS).unwrap_err();
    assert!(matches!(err, ContainmentError::ReadResult { .. }));
    assert!(is_error(&checker.contains_message(STUDENTS, STUDENTS)));
}

#[test]
fn stale_result_is_not_reused() {
    let dir = tempfile::tempdir().unwrap();
    let first = checker(&dir, ContainmentToolKind::JsonSubSchema, COMPARING_TOOL);
    first.contains(STUDENTS, STUDENTS).unwrap();

    let second = checker(&dir, ContainmentToolKind::JsonSubSchema, "echo Success.");
    assert!(matches!(
        second.contains(STUDENTS, STUDENTS),
        Err(ContainmentError::ReadResult { .. })
    ));
}

#[test]
fn tool_failure_line_is_surfaced() {
    let dir = tempfile::tempdir().unwrap();
    let checker = checker(
        &dir,
        ContainmentToolKind::JsonSubSchema,
        "echo 'Traceback (most recent call last):'",
    );
    let err = checker.contains(STUDENTS, STUDENTS).unwrap_err();
    match err {
        ContainmentError::ToolFailed { tool, message } => {
            assert_eq!(tool, ContainmentToolKind::JsonSubSchema);
            assert_eq!(message, "Traceback (most recent call last):");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn silent_tool_is_incomplete() {
    let dir = tempfile::tempdir().unwrap();
    let checker = checker(&dir, ContainmentToolKind::IsJsonSchemaSubset, "echo working");
    assert_eq!(
        checker.contains_message(STUDENTS, STUDENTS),
        "Error! An error occurred in the tool is-json-schema-subset while comparing these schemas."
    );
}

#[test]
fn equals_is_local_and_order_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let checker = checker(&dir, ContainmentToolKind::JsonSubSchema, "exit 1");
    let reordered = r#"{
      "properties": { "year": { "type": "number" } },
      "type": "object",
      "$schema": "http://json-schema.org/draft-04/schema#"
    }"#;
    assert!(checker.equals(STUDENTS, reordered).unwrap().has_none());

    let difference = checker.equals(STUDENTS_WITH_CLASS, STUDENTS).unwrap();
    assert!(difference.has_left_differences());
    assert!(!difference.has_right_differences());
    assert!(!checker.config().current_schema_path().exists());
}

#[test]
fn concurrent_exchanges_keep_their_own_results() {
    let dir = tempfile::tempdir().unwrap();
    let checker = checker(&dir, ContainmentToolKind::JsonSubSchema, SLOW_COMPARING_TOOL);

    let (same, different) = thread::scope(|scope| {
        let same = scope.spawn(|| checker.contains(STUDENTS, STUDENTS));
        let different = scope.spawn(|| checker.contains(STUDENTS_WITH_CLASS, STUDENTS));
        (same.join().unwrap(), different.join().unwrap())
    });
    assert_eq!(same.unwrap(), ContainmentRelation::Equivalent);
    assert_eq!(different.unwrap(), ContainmentRelation::Subset);
}

/// Does nothing unless started by `exchanges_in_two_processes_do_not_interleave`.
#[test]
fn second_process_exchange() {
    let Ok(root) = std::env::var(CHILD_ROOT_ENV) else {
        return;
    };
    let root = Path::new(&root);
    let relation = checker_in(root, ContainmentToolKind::JsonSubSchema)
        .contains(STUDENTS_WITH_CLASS, STUDENTS)
        .unwrap();
    fs::write(root.join("child.out"), relation.to_string()).unwrap();
}

#[test]
fn exchanges_in_two_processes_do_not_interleave() {
    let dir = tempfile::tempdir().unwrap();
    let checker = checker(&dir, ContainmentToolKind::JsonSubSchema, SLOW_COMPARING_TOOL);

    let mut child = Command::new(std::env::current_exe().unwrap())
        .args(["second_process_exchange", "--exact", "--test-threads=1"])
        .env(CHILD_ROOT_ENV, dir.path())
        .spawn()
        .unwrap();
    let relation = checker.contains(STUDENTS, STUDENTS).unwrap();
    assert!(child.wait().unwrap().success());

    assert_eq!(relation, ContainmentRelation::Equivalent);
    assert_eq!(read(&dir.path().join("child.out")), "subset");
    assert!(!checker.config().lock_path().exists());
}

#[test]
fn workspace_locked_by_live_process_is_not_entered() {
    let dir = tempfile::tempdir().unwrap();
    let mut checker_config = checker(&dir, ContainmentToolKind::JsonSubSchema, COMPARING_TOOL)
        .config()
        .clone();
    checker_config.lock_timeout_secs = 1;
    let checker = ContainmentChecker::new(checker_config);

    let mut holder = Command::new("sleep").arg("30").spawn().unwrap();
    let lock_path = checker.config().lock_path();
    fs::create_dir_all(lock_path.parent().unwrap()).unwrap();
    fs::write(&lock_path, format!("{}\n", holder.id())).unwrap();

    let err = checker.contains(STUDENTS, STUDENTS).unwrap_err();
    match err {
        ContainmentError::WorkspaceLocked { path, holder: pid } => {
            assert_eq!(path, lock_path);
            assert_eq!(pid, i32::try_from(holder.id()).ok());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!checker.config().current_schema_path().exists());

    holder.kill().unwrap();
    holder.wait().unwrap();
    assert_eq!(
        checker.contains(STUDENTS, STUDENTS).unwrap(),
        ContainmentRelation::Equivalent
    );
}
