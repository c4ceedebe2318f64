use curand::Curand;
use curand::sys::{CurandApiVersion, CurandLibrary, LoaderConfig, Platform};
use pico_args::Arguments;
use std::{error::Error, io};
use tracing_subscriber::{fmt, EnvFilter};

const HELP: &str = "\
Usage: cargo xtask <command>

Commands:
  probe [--version V]   load cuRAND the way the library would and report what was found
  symbols               list every cuRAND symbol resolved at load time
  candidates [--version V] [--platform P]
                        list the library paths that would be tried, in order

Set RUST_LOG=debug to see every candidate as it is tried.";

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut args = Arguments::from_env();
    let sub = args.subcommand()?.unwrap_or_default();

    match sub.as_str() {
        "probe" => {
            let version = args.opt_value_from_str::<_, CurandApiVersion>("--version")?;
            args.finish();
            probe(version)
        }
        "symbols" => {
            args.finish();
            for symbol in CurandLibrary::SYMBOLS {
                println!("{symbol}");
            }
            Ok(())
        }
        "candidates" => {
            let version = args.opt_value_from_str::<_, CurandApiVersion>("--version")?;
            let platform = args
                .opt_value_from_fn("--platform", parse_platform)?
                .or_else(Platform::current)
                .ok_or("unsupported platform, pass --platform")?;
            args.finish();
            candidates(platform, version);
            Ok(())
        }
        "" | "help" => {
            println!("{HELP}");
            Ok(())
        }
        other => Err(format!(
            "unknown command `{other}`, available: `probe`, `symbols`, `candidates`"
        )
        .into()),
    }
}

fn probe(version: Option<CurandApiVersion>) -> Result<(), Box<dyn Error>> {
    let config = LoaderConfig::from_env();
    let loaded = curand::sys::load(version, &config)?;
    println!("path:        {}", loaded.path.display());
    println!("api version: {}", loaded.version);

    let curand = Curand::from_api(loaded.library);
    let (major, minor, patch) = curand.version()?;
    println!("native:      {major}.{minor}.{patch}");
    Ok(())
}

fn candidates(platform: Platform, version: Option<CurandApiVersion>) {
    let config = LoaderConfig::from_env();
    if let Some(path) = config.explicit_library_path() {
        println!("{}", path.display());
        return;
    }
    let versions = match version {
        Some(version) => vec![version],
        None => CurandApiVersion::ALL.to_vec(),
    };
    for version in versions {
        for path in config.candidate_paths(platform, version) {
            println!("{version}\t{}", path.display());
        }
    }
}

fn parse_platform(s: &str) -> Result<Platform, String> {
    Platform::ALL
        .into_iter()
        .find(|p| p.to_string() == s.to_ascii_lowercase())
        .ok_or_else(|| format!("unknown platform `{s}`, expected windows, linux or macos"))
}
