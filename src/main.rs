use std::process::ExitCode;

use label_studio_taxonomy::{run, Config, StdinPrompt, DIALOGUE_TAXONOMY};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::build();
    if config.print_config {
        print!("{DIALOGUE_TAXONOMY}");
        return ExitCode::SUCCESS;
    }

    match run(&config, &mut StdinPrompt).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) if e.is_credential_failure() => {
            println!("Error: {e}");
            e.exit_code()
        }
        Err(e) => {
            eprintln!("Error: {}", e.chain());
            e.exit_code()
        }
    }
}
