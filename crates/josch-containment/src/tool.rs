//! How each containment tool is installed, started, and read.

use josch_config::ContainmentConfig;
use josch_core::ContainmentToolKind;
use josch_shell::{CompletionDetector, ShellInvocation, SingleLine, UntilDone};

/// Everything needed to run the configured tool once.
pub struct ToolCommand {
    pub kind: ContainmentToolKind,
    /// Dependency install, run before the check when enabled and the
    /// entrypoint is not overridden.
    pub install: Option<ShellInvocation>,
    pub run: ShellInvocation,
    pub detector: &'static dyn CompletionDetector,
}

impl ToolCommand {
    /// Resolve the command line for `config.tool`, with the protocol paths
    /// appended in order: current, legacy, result.
    #[must_use]
    pub fn resolve(config: &ContainmentConfig) -> Self {
        let kind = config.tool;
        let dir = config.tool_dir();

        let entrypoint = config
            .command
            .clone()
            .unwrap_or_else(|| default_entrypoint(kind));
        let run = ShellInvocation::new(entrypoint, dir).with_args(
            [
                config.current_schema_path(),
                config.legacy_schema_path(),
                config.result_path(),
            ]
            .iter()
            .map(|path| path.to_string_lossy().into_owned()),
        );

        // An overridden entrypoint is not the packaged tool; its dependencies
        // are the caller's.
        let install = (config.install_before_run && config.command.is_none())
            .then(|| ShellInvocation::new(install_command(kind), dir));

        Self {
            kind,
            install,
            run,
            detector: detector_for(kind),
        }
    }
}

const fn yarn() -> &'static str {
    if cfg!(windows) { "yarn.cmd" } else { "yarn" }
}

fn default_entrypoint(kind: ContainmentToolKind) -> Vec<String> {
    let parts: &[&str] = match kind {
        ContainmentToolKind::JsonSubSchema => &["pipenv", "run", "python", "i_jss.py"],
        ContainmentToolKind::IsJsonSchemaSubset => &[yarn(), "run", "start"],
    };
    parts.iter().map(ToString::to_string).collect()
}

fn install_command(kind: ContainmentToolKind) -> Vec<String> {
    let program = match kind {
        ContainmentToolKind::JsonSubSchema => "pipenv",
        ContainmentToolKind::IsJsonSchemaSubset => yarn(),
    };
    vec![program.to_string(), "install".to_string()]
}

/// JsonSubSchema prints one verdict line; the yarn-driven tool is done when
/// yarn says so.
fn detector_for(kind: ContainmentToolKind) -> &'static dyn CompletionDetector {
    match kind {
        ContainmentToolKind::JsonSubSchema => &SingleLine,
        ContainmentToolKind::IsJsonSchemaSubset => &UntilDone,
    }
}
