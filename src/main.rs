use clap::{crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches, Command};
use colored::Colorize;
use std::path::PathBuf;

fn cli() -> Command {
    Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::new("path")
                .long("path")
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Base directory to create the project in (default: current directory)"),
        )
        .arg(
            Arg::new("preview")
                .long("preview")
                .help("Print the structure that would be created without writing anything")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = cli().get_matches();

    init_logger(matches.get_flag("verbose"));

    run(&matches)?;

    Ok(())
}

fn init_logger(is_verbose: bool) {
    let level = if is_verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new().filter_level(level).init();
}

fn run(args: &ArgMatches) -> Result<(), create_structure::StructureError> {
    let path = args.get_one::<PathBuf>("path").map(PathBuf::as_path);

    if args.get_flag("preview") {
        create_structure::preview_structure(path)?;

        return Ok(());
    }

    let base = create_structure::create_structure(path)?;

    println!(
        "{} {}",
        "Project structure created at:".bold(),
        create_structure::project_root(&base).display()
    );

    Ok(())
}
