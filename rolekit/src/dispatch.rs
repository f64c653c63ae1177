//! Per-role scenario test dispatch.

use crate::changes::RoleSet;
use crate::config::ScenarioCommand;
use crate::runner::CommandRunner;
use crate::Result;

/// Run the scenario test for every role in `roles`, one after the other.
///
/// Stops at the first failing role; later roles are not run.
///
/// # Errors
///
/// Returns the runner's error for the first scenario that fails.
///
/// # Examples
///
/// ```
/// use rolekit::runner::RecordingRunner;
/// use rolekit::{run_molecule_tests, RoleSet, ScenarioCommand};
///
/// let runner = RecordingRunner::new();
/// let roles: RoleSet = ["web".to_string()].into_iter().collect();
/// run_molecule_tests(&runner, &roles, &ScenarioCommand::default()).unwrap();
///
/// let calls = runner.invocations();
/// assert_eq!(calls[0].program, "molecule");
/// assert_eq!(calls[0].args, vec!["test", "--scenario-name", "web"]);
/// ```
pub fn run_molecule_tests(
    runner: &dyn CommandRunner,
    roles: &RoleSet,
    scenario: &ScenarioCommand,
) -> Result<()> {
    if roles.is_empty() {
        log::info!("no changed roles, nothing to test");
        return Ok(());
    }

    for role in roles {
        log::info!("execute scenario / tests for roles {role}");
        runner.run(&scenario.program, &scenario.args_for(role), None)?;
    }
    Ok(())
}
