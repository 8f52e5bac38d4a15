use std::io;

use choose_my_college::console::Console;
use choose_my_college::db::establish_connection_pool;
use choose_my_college::models::config::AppConfig;
use choose_my_college::repository::DieselRepository;
use choose_my_college::seed::{apply_seed, load_seed};

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    if let Some(seed_file) = &config.seed_file {
        let seed = match load_seed(seed_file) {
            Ok(seed) => seed,
            Err(e) => {
                log::error!("Failed to load seed file {seed_file}: {e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = apply_seed(&repo, &seed) {
            log::error!("Failed to import seed file {seed_file}: {e}");
            std::process::exit(1);
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(repo, stdin.lock(), stdout.lock());
    if let Err(e) = console.run() {
        log::error!("Console I/O failed: {e}");
        std::process::exit(1);
    }
}
