use crate::app::AppContext;
use crate::app::commands::compose;
use crate::domain::AppError;
use crate::ports::CommandRunner;

/// Execute the stop command. Configuration and artifacts are left untouched.
pub fn execute<R: CommandRunner>(ctx: &AppContext<R>) -> Result<(), AppError> {
    ctx.runner().run(&compose::down(ctx.layout()))
}
