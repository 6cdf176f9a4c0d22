//! Browse command - interactive search portal

use super::Context;
use crate::{
    CustfindError,
    form::FormController,
    page::PageController,
    ui::{
        output::ToastQueue,
        ratatui_adapter::{AppState, PortalApp},
    },
};
use std::sync::Arc;
use std::time::Duration;

type Result<T> = std::result::Result<T, CustfindError>;

/// Wire the controllers to a shared toast queue
///
/// # Errors
/// Returns an error if the search runtime cannot be started
pub fn build_state(ctx: &Context) -> Result<AppState> {
    let toasts = ToastQueue::with_ttl(Duration::from_secs(ctx.config.toast_ttl_secs));
    let form = FormController::new(Arc::clone(&ctx.schema), Arc::new(toasts.clone()));
    let page = PageController::new(Arc::clone(&ctx.source), Arc::new(toasts.clone()))?;
    Ok(AppState::new(form, page, ctx.registry.clone(), toasts))
}

/// Execute the browse command
///
/// # Errors
/// Returns an error if the terminal cannot be set up or driven
pub fn execute(ctx: &Context) -> Result<()> {
    PortalApp::new(build_state(ctx)?).run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SourceArgs;
    use crate::config::CustfindConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_state_uses_context() {
        let args = SourceArgs {
            data: Some(PathBuf::from("customers.json")),
            ..SourceArgs::default()
        };
        let ctx = Context::new(CustfindConfig::default(), &args, false).unwrap();
        let state = build_state(&ctx).unwrap();

        assert_eq!(state.page.source_description(), "customers.json");
        assert_eq!(state.schema().fields.len(), 3);
        assert!(state.toasts.active().is_empty());
    }
}
