use anyhow::Result;
use clap::Parser;
use sprig_cli::demo::demo_scene;
use sprig_cli::{Cli, Commands};
use sprig_core::{DisplayList, Drawable};
use sprig_desktop::Stage;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Run(args) => {
            let config = args.stage_config()?;
            let stage = Stage::new(demo_scene()?, config)?;
            stage.run()?;
        }
        Commands::Dump => {
            let mut list = DisplayList::new();
            demo_scene()?.draw(&mut list);
            for command in &list {
                println!("{:?}", command);
            }
            println!("{} draw commands", list.len());
        }
    }

    Ok(())
}
