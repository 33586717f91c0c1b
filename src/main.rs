use clap::Parser;

fn main() {
    let cli = wineasio_settings::cli::Cli::parse();

    if let Err(err) = wineasio_settings::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
