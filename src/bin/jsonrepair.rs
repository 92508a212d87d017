fn main() {
    if let Err(e) = jsonrepair::cli::run() {
        eprintln!("jsonrepair: {e}");
        std::process::exit(1);
    }
}
