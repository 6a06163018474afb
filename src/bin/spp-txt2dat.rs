//! Converts an SPP instance file into a GLPK MathProg data file.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{arg, Command};
use spp_tabu::instance::{dat, InstanceLoader};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("spp-txt2dat")
        .about("Converts an SPP instance into a GLPK .dat file")
        .arg_required_else_help(true)
        .arg(arg!(<INPUT> "Instance file").value_parser(clap::value_parser!(PathBuf)))
        .arg(arg!(<OUTPUT> "GLPK data file to write").value_parser(clap::value_parser!(PathBuf)))
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    enable_tracing();
    let matches = cli().get_matches();
    let input = matches.get_one::<PathBuf>("INPUT").unwrap();
    let output = matches.get_one::<PathBuf>("OUTPUT").unwrap();

    let instance = match InstanceLoader::new().from_path(input) {
        Ok(instance) => instance,
        Err(e) => {
            tracing::error!("could not read instance {}: {e}", input.display());
            return ExitCode::from(e.exit_code());
        }
    };

    let written = File::create(output)
        .and_then(|file| dat::write_glpk_dat(&instance, BufWriter::new(file)));
    if let Err(e) = written {
        tracing::error!("could not write {}: {e}", output.display());
        return ExitCode::from(1);
    }

    tracing::info!("wrote {}", output.display());
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_both_paths() {
        let matches = cli()
            .try_get_matches_from(["spp-txt2dat", "in.txt", "out.dat"])
            .unwrap();
        assert_eq!(
            matches.get_one::<PathBuf>("INPUT").unwrap(),
            &PathBuf::from("in.txt")
        );
        assert!(cli().try_get_matches_from(["spp-txt2dat", "in.txt"]).is_err());
        cli().debug_assert();
    }
}
