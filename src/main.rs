//! CLI entry point for backdrop.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr, eyre};

use backdrop::background::BackgroundConfig;
use backdrop::cli::Cli;
use backdrop::logging::init_logging;
use backdrop::scene::SceneFile;
use backdrop::session::Session;
use backdrop::store::JsonStore;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "backdrop", &mut std::io::stdout());
        return Ok(());
    }

    let _guard = init_logging(cli.log_file.as_deref(), &cli.log_level);

    let store_path = cli.store.clone().unwrap_or_else(default_store_path);
    let store = JsonStore::new(store_path);

    // Baseline configuration: scene file if given, documented defaults otherwise.
    let baseline = match cli.config {
        Some(ref path) => SceneFile::load(path)
            .wrap_err_with(|| format!("Failed to load scene from {}", path.display()))?
            .to_config()?,
        None => BackgroundConfig::default(),
    };

    let mut session = Session::with_config(store, baseline);
    if let Err(e) = session.refresh_presets() {
        // Not fatal: the gallery stays empty, composition still works.
        eprintln!("Warning: could not load presets: {e}");
    }

    if let Some(ref name) = cli.delete_preset {
        session.delete_preset(name)?;
        eprintln!("Deleted preset '{name}'");
        return Ok(());
    }

    if cli.list_presets {
        for preset in session.presets() {
            println!("{}\t{}", preset.name, preset.config.derive().css());
        }
        return Ok(());
    }

    // Start from a stored preset, then layer any composition flags on top.
    if let Some(ref name) = cli.preset {
        let preset = session
            .find_preset(name)
            .cloned()
            .ok_or_else(|| eyre!("No preset named '{}'", name))?;
        session.apply_preset(&preset);
    }

    for mutation in cli.mutations() {
        session.apply(mutation);
    }

    if let Some(ref name) = cli.save {
        session.save_preset(name)?;
        eprintln!("Saved preset '{name}'");
    }

    if let Some(ref path) = cli.save_config {
        SceneFile::from_config(session.config())
            .save(path)
            .wrap_err_with(|| format!("Failed to write scene to {}", path.display()))?;
        eprintln!("Wrote scene to {}", path.display());
    }

    let css = session.renderable().css();
    if let Some(ref path) = cli.output {
        std::fs::write(path, &css)
            .wrap_err_with(|| format!("Failed to write to {}", path.display()))?;
        eprintln!("Wrote background to {}", path.display());
    } else {
        println!("{css}");
    }

    Ok(())
}

/// Default preset store location under the user data directory.
fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("backdrop").join("presets.json"))
        .unwrap_or_else(|| PathBuf::from("presets.json"))
}
