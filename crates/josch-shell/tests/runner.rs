//! Runner behaviour against real `sh` processes.
#![cfg(unix)]

use josch_shell::{Completion, ShellInvocation, ShellRunner, SingleLine, UntilDone};
use pretty_assertions::assert_eq;

fn sh(script: &str, dir: &std::path::Path) -> ShellInvocation {
    ShellInvocation::new(["sh", "-c", script], dir)
}

#[test]
fn until_done_skips_chatter() {
    let dir = tempfile::tempdir().unwrap();
    let completion = ShellRunner::new().run(
        &sh("echo 'yarn run v1'; echo '$ node index.js'; echo 'Done in 0.1s.'", dir.path()),
        &UntilDone,
    );
    assert_eq!(completion, Completion::Finished("Done in 0.1s.".to_string()));
}

#[test]
fn single_line_success() {
    let dir = tempfile::tempdir().unwrap();
    let completion =
        ShellRunner::new().run(&sh("echo Success.; echo trailing", dir.path()), &SingleLine);
    assert_eq!(completion, Completion::Success);
}

#[test]
fn runs_in_the_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("marker"), "x").unwrap();
    let completion = ShellRunner::new().run(
        &sh("test -f marker && echo Success. || echo missing", dir.path()),
        &SingleLine,
    );
    assert_eq!(completion, Completion::Success);
}

#[test]
fn positional_arguments_are_appended() {
    let dir = tempfile::tempdir().unwrap();
    let invocation = ShellInvocation::new(["sh", "-c", "echo \"$1 $2\"", "tool"], dir.path())
        .with_args(["a.json", "b.json"]);
    assert_eq!(invocation.display(), "sh -c echo \"$1 $2\" tool a.json b.json");
    let completion = ShellRunner::new().run(&invocation, &SingleLine);
    assert_eq!(completion, Completion::Failed("a.json b.json".to_string()));
}

#[test]
fn silent_process_is_unterminated() {
    let dir = tempfile::tempdir().unwrap();
    let completion = ShellRunner::new().run(&sh("exit 3", dir.path()), &UntilDone);
    assert_eq!(completion, Completion::Unterminated);
}

#[test]
fn missing_program_fails_with_prefixed_message() {
    let dir = tempfile::tempdir().unwrap();
    let invocation = ShellInvocation::new(["josch-no-such-program"], dir.path());
    let completion = ShellRunner::new().run(&invocation, &SingleLine);
    assert!(matches!(completion, Completion::Failed(_)));
    assert!(completion.message().starts_with("Error! failed to start 'josch-no-such-program'"));
}

#[test]
fn empty_command_fails() {
    let dir = tempfile::tempdir().unwrap();
    let invocation = ShellInvocation::new(Vec::<String>::new(), dir.path());
    assert_eq!(
        ShellRunner::new().run(&invocation, &SingleLine),
        Completion::Failed("empty command".to_string())
    );
}

#[test]
fn run_to_exit_reports_status() {
    let dir = tempfile::tempdir().unwrap();
    let runner = ShellRunner::new();
    assert!(runner.run_to_exit(&sh("echo installing; exit 0", dir.path())).unwrap());
    assert!(!runner.run_to_exit(&sh("exit 1", dir.path())).unwrap());
}

#[test]
fn non_utf8_chatter_does_not_hide_completion() {
    let dir = tempfile::tempdir().unwrap();
    let completion = ShellRunner::new().run(
        &sh(r"printf 'warning: caf\351\n'; echo Success.", dir.path()),
        &UntilDone,
    );
    assert_eq!(completion, Completion::Success);
}

#[test]
fn runner_waits_for_the_tool_after_its_verdict() {
    let dir = tempfile::tempdir().unwrap();
    let completion = ShellRunner::new().run(
        &sh("echo Success.; sleep 0.2; echo late > after", dir.path()),
        &SingleLine,
    );
    assert_eq!(completion, Completion::Success);
    assert!(dir.path().join("after").exists());
}
