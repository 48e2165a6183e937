use netflix_intel::PROJECT_PATHS;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = netflix_intel::run(&PROJECT_PATHS) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
