use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = match huecli::cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => std::process::exit(huecli::cli::exit_code_for_parse_error(err)),
    };
    let exit_code = huecli::run(cli).await;
    std::process::exit(exit_code);
}
