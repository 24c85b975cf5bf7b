use std::env;
use std::process::ExitCode;

use micro_client::{ClientConfig, HttpClient};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Set to `1` or `true` to log every request and response in full.
const VERBOSE_ENV: &str = "MICRO_CLIENT_VERBOSE";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let verbose = env::var(VERBOSE_ENV).is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
    init_tracing(verbose);

    let (method, url) = match args.as_slice() {
        [] => {
            eprintln!("usage: micro-client [GET|POST] URL");
            return ExitCode::FAILURE;
        }
        [method, url] => (method.as_str(), url.as_str()),
        [url, ..] => ("GET", url.as_str()),
    };

    let client = HttpClient::with_config(ClientConfig::builder().verbose(verbose).build());
    println!("{}", client.command(url, method, None));

    ExitCode::SUCCESS
}

fn init_tracing(verbose: bool) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}
