#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{cli::prompt_difficulty, cli::Cli, init_logging, Coordinator};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, BufReader};
#[cfg(feature = "std")]
use std::time::Duration;

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            e.print()?;
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    let settings = match cli.settings() {
        Some(settings) => settings,
        None => match prompt_difficulty(io::stdin().lock(), io::stdout())? {
            Some(difficulty) => difficulty.settings(),
            None => {
                println!("Goodbye!");
                return Ok(());
            }
        },
    };
    log::debug!("settings: {:?}", settings);

    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let coordinator = Coordinator::from_settings(&settings, &mut rng)
        .map_err(|e| anyhow::anyhow!(e))?
        .with_tick_interval(Duration::from_millis(cli.tick_ms));
    let report = coordinator.run(BufReader::new(io::stdin()), io::stdout())?;

    if cli.stats_json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        print!("\n{}", report.stats);
    }
    Ok(())
}
