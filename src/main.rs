//! Demand estimator entry point — CLI wiring around the engine.

use std::path::Path;
use std::process;

use ev_demand_sim::config::ScenarioConfig;
use ev_demand_sim::io::export::{export_hourly_csv, export_weekly_csv};
use ev_demand_sim::params::Field;
use ev_demand_sim::reporting::print_report;
use ev_demand_sim::sim::simulate;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    seed_override: Option<u64>,
    field_overrides: Vec<(Field, f64)>,
    hourly_out: Option<String>,
    weekly_out: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
    #[cfg(feature = "tui")]
    tui: bool,
}

fn print_help() {
    eprintln!("ev-demand-sim — EV charging-station demand estimator");
    eprintln!();
    eprintln!("Usage: ev-demand-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>          Load scenario from TOML config file");
    eprintln!("  --preset <name>            Use a built-in preset (baseline)");
    eprintln!("  --seed <u64>               Override random seed");
    eprintln!("  --charge-points <n>        Override number of charge points");
    eprintln!("  --arrival-multiplier <n>   Override arrival multiplier (%)");
    eprintln!("  --consumption <n>          Override consumption per visit (kWh)");
    eprintln!("  --charging-power <n>       Override per-bay power (kW)");
    eprintln!("  --hourly-out <path>        Export hourly series to CSV");
    eprintln!("  --weekly-out <path>        Export weekly series to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                    Start REST API server after simulation");
        eprintln!("  --port <u16>               API server port (default: 3000)");
    }
    #[cfg(feature = "tui")]
    eprintln!("  --tui                      Launch the interactive terminal UI");
    eprintln!("  --help                     Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
}

fn take_value(args: &[String], i: &mut usize, flag: &str) -> String {
    *i += 1;
    match args.get(*i) {
        Some(v) => v.clone(),
        None => {
            eprintln!("error: {flag} requires a value");
            process::exit(1);
        }
    }
}

fn take_number(args: &[String], i: &mut usize, flag: &str) -> f64 {
    let raw = take_value(args, i, flag);
    raw.parse().unwrap_or_else(|_| {
        eprintln!("error: {flag} expects a number, got \"{raw}\"");
        process::exit(1);
    })
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        seed_override: None,
        field_overrides: Vec::new(),
        hourly_out: None,
        weekly_out: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
        #[cfg(feature = "tui")]
        tui: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => cli.scenario_path = Some(take_value(&args, &mut i, "--scenario")),
            "--preset" => cli.preset = Some(take_value(&args, &mut i, "--preset")),
            "--seed" => {
                let raw = take_value(&args, &mut i, "--seed");
                match raw.parse() {
                    Ok(seed) => cli.seed_override = Some(seed),
                    Err(_) => {
                        eprintln!("error: --seed expects an unsigned integer, got \"{raw}\"");
                        process::exit(1);
                    }
                }
            }
            "--charge-points" => {
                let v = take_number(&args, &mut i, "--charge-points");
                cli.field_overrides.push((Field::ChargePoints, v));
            }
            "--arrival-multiplier" => {
                let v = take_number(&args, &mut i, "--arrival-multiplier");
                cli.field_overrides.push((Field::ArrivalMultiplier, v));
            }
            "--consumption" => {
                let v = take_number(&args, &mut i, "--consumption");
                cli.field_overrides.push((Field::ConsumptionPerVisit, v));
            }
            "--charging-power" => {
                let v = take_number(&args, &mut i, "--charging-power");
                cli.field_overrides.push((Field::ChargingPower, v));
            }
            "--hourly-out" => cli.hourly_out = Some(take_value(&args, &mut i, "--hourly-out")),
            "--weekly-out" => cli.weekly_out = Some(take_value(&args, &mut i, "--weekly-out")),
            #[cfg(feature = "api")]
            "--serve" => cli.serve = true,
            #[cfg(feature = "api")]
            "--port" => {
                let raw = take_value(&args, &mut i, "--port");
                match raw.parse() {
                    Ok(port) => cli.port = port,
                    Err(_) => {
                        eprintln!("error: --port expects a u16, got \"{raw}\"");
                        process::exit(1);
                    }
                }
            }
            #[cfg(feature = "tui")]
            "--tui" => cli.tui = true,
            other => {
                eprintln!("error: unknown argument: {other}");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    if cli.scenario_path.is_some() && cli.preset.is_some() {
        eprintln!("error: --scenario and --preset are mutually exclusive");
        process::exit(1);
    }

    cli
}

fn main() {
    let cli = parse_args();

    #[cfg(feature = "tui")]
    if cli.tui {
        ev_demand_sim::tui::run(cli.preset.as_deref().unwrap_or("baseline"));
        return;
    }

    // Load config: --scenario takes priority, then --preset, then baseline
    let mut scenario = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ScenarioConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ScenarioConfig::baseline()
    };

    if let Some(seed) = cli.seed_override {
        scenario.simulation.seed = seed;
    }
    for (field, value) in &cli.field_overrides {
        match field {
            Field::ChargePoints => scenario.station.charge_points = *value,
            Field::ArrivalMultiplier => scenario.station.arrival_multiplier_pct = *value,
            Field::ConsumptionPerVisit => scenario.station.consumption_kwh_per_visit = *value,
            Field::ChargingPower => scenario.station.charging_power_kw = *value,
        }
    }

    // Validate before the engine sees the parameters
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let params = scenario.params();
    let seed = scenario.simulation.seed;
    let result = match simulate(&params, seed) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    print_report(&params, &result);

    if let Some(ref path) = cli.hourly_out {
        if let Err(e) = export_hourly_csv(&result.hourly, Path::new(path)) {
            eprintln!("error: failed to write hourly CSV: {e}");
            process::exit(1);
        }
        eprintln!("Hourly series written to {path}");
    }
    if let Some(ref path) = cli.weekly_out {
        if let Err(e) = export_weekly_csv(&result.weekly, Path::new(path)) {
            eprintln!("error: failed to write weekly CSV: {e}");
            process::exit(1);
        }
        eprintln!("Weekly series written to {path}");
    }

    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(ev_demand_sim::api::AppState {
            params,
            seed,
            result,
        });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(ev_demand_sim::api::serve(state, addr));
    }
}
