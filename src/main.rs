use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{arg, ArgMatches, Command};
use spp_tabu::instance::InstanceLoader;
use spp_tabu::report::RunReport;
use spp_tabu::tabu::{TabuConfig, TabuRunner};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("spp-tabu")
        .about("Solves a Set Partitioning Problem instance with Tabu Search")
        .arg_required_else_help(true)
        .arg(
            arg!(<OUTPUT> "File the solution report is written to")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(<INPUT> "Instance file to solve")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(-t --tabu <TABU_LIST_SIZE> "Number of moves kept in the tabu list")
                .value_parser(clap::value_parser!(usize))
                .default_value("30"),
        )
        .arg(
            arg!(-i --iterations <ITERATION_LIMIT> "Moves without improvement before the solver stops")
                .value_parser(clap::value_parser!(usize))
                .default_value("200"),
        )
        .arg(
            arg!(-l --limit <MINUTES> "Maximum time the tabu search runs, in minutes")
                .value_parser(clap::value_parser!(u64))
                .default_value("15"),
        )
        .arg(
            arg!(-s --seed <SEED> "Seed for the randomized feasibility heuristic")
                .value_parser(clap::value_parser!(u64))
                .default_value("515151"),
        )
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

// Every option carries a clap default, so `get_one` always yields a value.
fn config_from(matches: &ArgMatches) -> TabuConfig {
    TabuConfig::default()
        .with_tabu_capacity(*matches.get_one::<usize>("tabu").unwrap())
        .with_iteration_limit(*matches.get_one::<usize>("iterations").unwrap())
        .with_time_limit_minutes(*matches.get_one::<u64>("limit").unwrap())
        .with_seed(*matches.get_one::<u64>("seed").unwrap())
}

fn main() -> ExitCode {
    enable_tracing();
    let matches = cli().get_matches();

    let output = matches.get_one::<PathBuf>("OUTPUT").unwrap();
    let input = matches.get_one::<PathBuf>("INPUT").unwrap();
    let config = config_from(&matches);

    // Fail on an unwritable output before spending any time on the search.
    let file = match File::create(output) {
        Ok(file) => file,
        Err(e) => {
            tracing::error!("could not create output file {}: {e}", output.display());
            return ExitCode::from(1);
        }
    };

    tracing::info!("reading instance {}", input.display());
    let instance = match InstanceLoader::new().from_path(input) {
        Ok(instance) => instance,
        Err(e) => {
            tracing::error!("could not read instance {}: {e}", input.display());
            return ExitCode::from(e.exit_code());
        }
    };

    tracing::info!(
        tabu = config.tabu_capacity,
        iterations = config.iteration_limit,
        time_limit_s = config.time_limit.as_secs(),
        seed = config.seed,
        "solving"
    );
    let result = match TabuRunner::run(&instance, &config) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("search aborted: {e}");
            return ExitCode::from(e.exit_code());
        }
    };
    tracing::info!("execution time: {:.3}s", result.elapsed.as_secs_f64());

    tracing::info!("writing results to {}", output.display());
    if let Err(e) = RunReport::new(&instance, &config, &result).write_to(BufWriter::new(file)) {
        tracing::error!("could not write output file {}: {e}", output.display());
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_cli_defaults_match_config_defaults() {
        let matches = cli()
            .try_get_matches_from(["spp-tabu", "out.txt", "in.txt"])
            .unwrap();
        assert_eq!(config_from(&matches), TabuConfig::default());
        assert_eq!(
            matches.get_one::<PathBuf>("OUTPUT").unwrap(),
            &PathBuf::from("out.txt")
        );
        assert_eq!(
            matches.get_one::<PathBuf>("INPUT").unwrap(),
            &PathBuf::from("in.txt")
        );
    }

    #[test]
    fn test_cli_overrides() {
        let matches = cli()
            .try_get_matches_from([
                "spp-tabu", "out.txt", "in.txt", "-t", "5", "--iterations", "40", "-l", "2",
                "-s", "9",
            ])
            .unwrap();
        let config = config_from(&matches);
        assert_eq!(config.tabu_capacity, 5);
        assert_eq!(config.iteration_limit, 40);
        assert_eq!(config.time_limit, Duration::from_secs(120));
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_cli_rejects_missing_input_and_bad_numbers() {
        assert!(cli().try_get_matches_from(["spp-tabu", "out.txt"]).is_err());
        assert!(cli()
            .try_get_matches_from(["spp-tabu", "out.txt", "in.txt", "-t", "-3"])
            .is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        cli().debug_assert();
    }
}
