use orbitlab::{ScenarioConfig, Scenario};
use orbitlab::run_2d;
use orbitlab::bench_advance;

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, long, default_value = "solar_system.yaml")]
    file_name: String,

    /// Window width override, logical pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height override, logical pixels
    #[arg(long)]
    height: Option<u32>,

    /// Time the physics sweep instead of opening the viewer
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_advance();
        return Ok(());
    }

    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if let Some(w) = args.width {
        scenario_cfg.window.width = w;
    }
    if let Some(h) = args.height {
        scenario_cfg.window.height = h;
    }

    let window = scenario_cfg.window;
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;
    run_2d(scenario, window);

    Ok(())
}
