use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tick",
    about = concat!("[>] ticklist v", env!("CARGO_PKG_VERSION"), " - a single-screen task list"),
    version
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = ticklist::tui::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
