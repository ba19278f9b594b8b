use crate::app::AppContext;
use crate::app::commands::{compose, rebuild};
use crate::domain::{AppError, XdebugMode};
use crate::ports::CommandRunner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XdebugOutcome {
    pub mode: XdebugMode,
    /// False when the flag already had the requested value.
    pub changed: bool,
}

/// Execute the xdebug toggle.
///
/// Persists the flag, then re-renders and rebuilds the PHP service. The rebuild
/// also runs when the flag is unchanged so a stale image is corrected.
pub fn execute<R: CommandRunner>(
    ctx: &AppContext<R>,
    mode: XdebugMode,
) -> Result<XdebugOutcome, AppError> {
    let mut config = ctx.load_config()?;
    let changed = config.xdebug.enabled != mode.enabled();
    config.xdebug.enabled = mode.enabled();
    ctx.save_config(&config)?;

    println!("Xdebug set to {mode}, rebuilding PHP container...");
    rebuild::execute(ctx, &[compose::PHP_SERVICE.to_string()])?;
    Ok(XdebugOutcome { mode, changed })
}
