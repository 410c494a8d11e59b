use clap::Parser;
use saturated_steam_tables::{app, config};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    env_logger::init();
    if let Err(err) = try_run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = app::Cli::parse();
    let cfg = config::load_or_default(&cli.config)?;
    app::run(&cli, &cfg)?;
    Ok(())
}
