use crate::reports;
use clap::Args;
use keyshift::{KsResult, LayoutRegistry};

#[derive(Args, Debug, Clone)]
pub struct LayoutsArgs {
    /// Only print this layout
    #[arg(short, long)]
    pub layout: Option<String>,
}

pub fn run(args: LayoutsArgs, registry: &LayoutRegistry) -> KsResult<()> {
    if let Some(name) = &args.layout {
        reports::print_layout_grid(registry.lookup_name(name)?);
        return Ok(());
    }

    for id in registry.supported() {
        reports::print_layout_grid(registry.lookup(id)?);
    }
    Ok(())
}
