fn main() {
    wpdev::app::cli::run();
}
