fn main() {
    if let Err(e) = jsonrepair::cli::run() {
        eprintln!("jr: {e}");
        std::process::exit(1);
    }
}
