fn main() {
    #[cfg(feature = "cli")]
    oxipuny::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("oxipuny: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
