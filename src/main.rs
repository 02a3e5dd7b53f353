use std::io;

use anyhow::Context;
use clap::Parser;
use line_editor::{
    buffer,
    config::{Cli, Config},
    console::Console,
    editor::Editor,
    logging,
};

fn main() -> anyhow::Result<()> {
    let config = Config::from(Cli::parse());
    logging::init(config.log_file.as_deref(), config.err_color)?;

    let created = buffer::create_if_missing(&config.path)
        .with_context(|| format!("Error creating file: {}", config.path.display()))?;
    if created {
        let absolute = std::path::absolute(&config.path).unwrap_or_else(|_| config.path.clone());
        println!("Created new file: {}", absolute.display());
    }

    let mut editor = Editor::open(&config.path)?;
    let mut console = Console::stdio(config.color, config.err_color);

    editor.run(io::stdin().lock(), &mut console)?;

    Ok(())
}
