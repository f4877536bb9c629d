use anyhow::Result;
use tracing::error;

/// Install a panic hook that records the panic in the log file before
/// reporting it on the terminal, then exits with `EXIT_FAILURE`.
pub fn init() -> Result<()> {
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info.location().map(|l| format!("{}:{}", l.file(), l.line()));
        let msg = strip_ansi_escapes::strip_str(format!("{}", panic_info));
        error!(location = location.as_deref().unwrap_or("unknown"), "Panic: {}", msg);

        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, metadata, print_msg};
            let metadata = metadata!();
            let file_path = handle_dump(&metadata, panic_info);
            if let Err(e) = print_msg(file_path, &metadata) {
                eprintln!("{}\nFailed to print panic report: {}", panic_info, e);
            }
            eprintln!("\nThis is a bug. Consider reporting it at {}", env!("CARGO_PKG_REPOSITORY"));
        }

        #[cfg(debug_assertions)]
        {
            better_panic::Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        std::process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}
