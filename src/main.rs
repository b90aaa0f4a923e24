use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use levelup::prelude::*;
use web_time::Instant;

/// Headless progression session: kills enemies, picks upgrades, reports stats
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of enemies defeated
    #[arg(long, default_value = "20")]
    kills: u32,

    /// EXP awarded per enemy
    #[arg(long, default_value = "35")]
    exp_per_kill: u32,

    /// Upgrade picked on every level-up: health, damage, speed
    #[arg(long, default_value = "damage")]
    pick: String,

    /// Load tuning from this RON file instead of `progression.ron`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective configuration to this RON file and exit
    #[arg(long)]
    write_config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ProgressionConfig::load_from(path)?,
        None => ProgressionConfig::load()?,
    };

    if let Some(path) = &args.write_config {
        config.to_file(path)?;
        log::info!("Wrote configuration to {:?}", path);
        return Ok(());
    }

    let pick: UpgradeId = args
        .pick
        .parse()
        .with_context(|| format!("Invalid --pick value: {}", args.pick))?;

    let mut exp = ExpManager::new(&config);
    exp.set_dialog(LevelUpDialog::from_config(&config.dialog));
    let mut player = PlayerStats::default();

    log::info!("Starting session: {} kills x {} EXP", args.kills, args.exp_per_kill);

    let mut clock = Instant::now();
    for _ in 0..args.kills {
        exp.award_exp(args.exp_per_kill);

        // Gameplay is paused until the player answers the dialog
        if exp.is_awaiting_choice() {
            let Some(dialog) = exp.dialog_mut() else {
                continue;
            };
            let click = dialog.layout().region_for(pick).center();
            if let Some(choice) = dialog.handle_click_at(click, clock) {
                // Failures are logged by the manager
                exp.apply_upgrade(choice, Some(&mut player)).ok();
            }
        }

        // Let the dismiss delay pass between kills
        clock += dismiss_delay(&exp);
        if let Some(dialog) = exp.dialog_mut() {
            dialog.update_at(clock);
        }
    }

    let state = exp.state();
    println!(
        "Level {} ({}/{} EXP)",
        state.level(),
        state.current_exp(),
        state.exp_to_next_level()
    );
    println!("{player}");

    Ok(())
}

fn dismiss_delay(exp: &ExpManager) -> std::time::Duration {
    exp.dialog()
        .map(|dialog| dialog.dismiss_delay())
        .unwrap_or_default()
}
