use instdl_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the
    // state dir is unusable.
    if let Err(e) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable ({:#}), logging to stderr", e);
    }

    // Per-application failures never reach here; only setup errors do.
    if let Err(err) = cli::run_from_args() {
        eprintln!("instdl error: {:#}", err);
        std::process::exit(1);
    }
}
