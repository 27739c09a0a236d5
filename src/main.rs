use clap::Parser;

use svg_to_xaml::cli::{Cli, Commands};
use svg_to_xaml::commands::{run_config, run_convert, run_init, run_modes};
use svg_to_xaml::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Convert(args) => run_convert(args, &cli),
        Commands::Modes => run_modes(),
        Commands::Init(args) => run_init(args, &cli),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
