// src/main.rs

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    qs_scrape::cli::run()
}
