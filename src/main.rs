fn main() {
    if let Err(e) = log_rule::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
