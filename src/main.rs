use log::{error, info};
use verdant::EngineBuilder;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let engine = match EngineBuilder::new().build() {
        Ok(engine) => engine,
        Err(e) => {
            error!("Invalid game configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = engine.run() {
        error!("{}", e);
        std::process::exit(1);
    }

    info!("Goodbye");
}
