pub mod cli;
pub mod editor;
pub mod model;
pub mod protocol;
pub mod remote;
pub mod render;
pub mod runtime;
pub mod script;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
