use crate::reports;
use clap::Args;
use keyshift::config::BindingArgs;
use keyshift::{KsResult, LayoutRegistry};
use std::sync::Arc;
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub binding: BindingArgs,
}

pub fn run(args: ResolveArgs, registry: Arc<LayoutRegistry>) -> KsResult<()> {
    let keyboard = args.binding.build(Arc::clone(&registry))?;

    reports::print_binding(&keyboard);

    let mut rows = Vec::new();
    for id in registry.supported() {
        // Each layout is tried from the same starting binding.
        let mut probe = keyboard.clone();
        let outcome = probe.switch_layout(id).map(|_| probe.resolved_keys());
        if let Err(e) = &outcome {
            debug!("'{}' rejected: {}", id, e);
        }
        rows.push((id, outcome));
    }

    reports::print_resolution_report(&rows, keyboard.action_count());
    Ok(())
}
