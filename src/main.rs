use explorer::{config::Config, errors::ExplorerError};

fn main() -> Result<(), ExplorerError> {
    explorer::run(Config::from_env())
}
