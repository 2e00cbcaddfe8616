use clap::Parser;
use settings::{Args, Settings, Storage};

mod commands;
mod console;
mod error;
mod render;
mod settings;

fn main() -> error::Result<()> {
    let args = Args::parse();
    let settings = Settings::new(&args)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "finance={level},engine={level},storage={level}",
            level = settings.app.level
        ))
        .with_writer(std::io::stderr)
        .init();

    let engine = match &settings.storage {
        Storage::Memory => {
            tracing::info!("Using in-memory storage...");
            engine::Engine::builder().build()
        }
        Storage::Json(dir) => {
            let directory = storage::JsonDirectory::open(dir)?;
            tracing::info!(root = %directory.root().display(), "Using json storage...");
            engine::Engine::builder().directory(directory).build()
        }
    };

    let stdin = std::io::stdin();
    console::Console::new(&engine).run(stdin.lock(), std::io::stdout())?;
    Ok(())
}
