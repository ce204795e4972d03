use pendsim::{HeadlessHost, Scenario, ScenarioConfig};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "two_cycle.yaml")]
    file_name: String,

    /// Print one CSV row per frame
    #[arg(long)]
    csv: bool,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log_level: String,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level: LevelFilter = args
        .log_level
        .parse()
        .map_err(|_| anyhow!("unknown log level {:?}", args.log_level))?;
    SimpleLogger::new().with_level(level).init()?;

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let run = scenario_cfg.run.clone();

    let scenario = Scenario::build_scenario(scenario_cfg)?;
    let period = scenario.parameters.period();
    info!(
        "g = {}, l = {}, m = ({}, {}), T = {:.4}",
        scenario.parameters.g,
        scenario.parameters.length,
        scenario.system.body1.m,
        scenario.system.body2.m,
        period
    );

    // wall time needed to cover `periods` of simulated time
    let duration = run.periods * period / scenario.parameters.speed;

    let mut host = HeadlessHost::new(scenario, run.fps);
    let records = host.run_for(duration)?;
    host.detach();

    if args.csv {
        println!("t,theta1,theta2,omega1,omega2,share1,share2,flash");
        for r in &records {
            let s = r.snapshot;
            println!(
                "{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{}",
                s.t, s.theta1, s.theta2, s.omega1, s.omega2, r.shares.share1, r.shares.share2, r.flash as u8
            );
        }
    }

    let last = host.scenario.snapshot();
    info!(
        "{} frames, {} collisions, t = {:.4}, omega = ({:.5}, {:.5})",
        records.len(),
        host.scenario.collisions(),
        last.t,
        last.omega1,
        last.omega2
    );

    Ok(())
}
