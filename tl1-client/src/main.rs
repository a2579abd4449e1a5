//! `tl1client` entry point

use clap::Parser;
use clap::error::ErrorKind;
use std::io::Write;
use tl1_client::config::Config;
use tl1_client::lifecycle::LifecycleLog;
use tl1_client::{APP_NAME, APP_VERSION, run};
use tl1_core::EXIT_FAILURE;

fn print_banner() {
    println!();
    println!("{} - Transaction Language 1 (TL1) Client", APP_NAME);
    println!("version {}", APP_VERSION);
    println!();
}

fn echo_options(config: &Config) {
    println!("main ::: config => option --host with value '{}' is set", config.host);
    println!("main ::: config => option --port with value '{}' is set", config.port);
    println!("main ::: config => option --user with value '{}' is set", config.user);
    println!("main ::: config => option --secret with value '{}' is set", config.secret);
    println!("main ::: config => option --cmdcode with value '{}' is set", config.cmdcode);
    println!("main ::: config => option --format with value '{}' is set", config.format);
    println!(
        "main ::: config => option --log with value '{}' is set",
        config.log.display()
    );
}

fn fatal(err: tl1_core::Tl1Error) -> ! {
    eprintln!("{}", err.diagnostic("main"));
    std::process::exit(err.exit_code());
}

fn write_response(response: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(b"Received: ")?;
    stdout.write_all(response)?;
    stdout.write_all(b"\n")?;
    stdout.flush()
}

#[tokio::main]
async fn main() {
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            std::process::exit(0);
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(EXIT_FAILURE);
        }
    };

    let level = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if config.verbose {
        print_banner();
        echo_options(&config);
    }

    let lifecycle = LifecycleLog::new(config.log.clone());
    if let Err(e) = lifecycle.service_started(APP_NAME, APP_VERSION) {
        fatal(e);
    }

    #[cfg(unix)]
    tl1_client::signal::spawn_watcher(lifecycle.clone(), APP_NAME, APP_VERSION);

    match run(&config).await {
        Ok(response) => {
            if let Err(e) = write_response(&response) {
                eprintln!("main ::: stdout => {}", e);
                std::process::exit(EXIT_FAILURE);
            }
            if let Err(e) = lifecycle.service_stopped(APP_NAME, APP_VERSION) {
                fatal(e);
            }
        }
        Err(e) => fatal(e),
    }
}
