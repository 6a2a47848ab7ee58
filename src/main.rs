use menv::app::cli;

fn main() {
    cli::run();
}
