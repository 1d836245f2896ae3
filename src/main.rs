use clap::Parser;
use fleet::cli::output::Presentation;
use fleet::cli::{Cli, Commands};
use fleet::core::Config;
use miette::Result;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head` causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for scenario diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let config = Config::load();
    let presentation = Presentation::resolve(&cli.global, &config);

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => fleet::cli::commands::demo::run(&presentation),
        Commands::Run(args) => fleet::cli::commands::run::run(args, &presentation),
        Commands::Config(cmd) => fleet::cli::commands::config::run(cmd),
        Commands::Completions(args) => fleet::cli::commands::completions::run(args),
    }
}
