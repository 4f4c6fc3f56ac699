fn main() {
    if let Err(error) = beadgrid::run_cli() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
