mod cli;
mod logging;

fn main() {
    if let Err(err) = cli::run::entry() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
