use clap::Parser;
use nasr_reader::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    if let Err(error) = commands::run(command) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("NASR Reader - FAA airport and ILS extract queries");
    println!("=================================================");
    println!();
    println!("Reads one cycle of the FAA's NASR CSV distribution and joins every");
    println!("extract to its facility on the location identifier.");
    println!();
    println!("USAGE:");
    println!("    nasr-reader <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    airport       Print everything the extracts record about one facility");
    println!("    identifiers   List the location identifiers of the airport base extract");
    println!("    cycle         Print the AIRAC cycle containing a date");
    println!("    validate      Check every extract against its column mapping");
    println!("    help          Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Summarize Will Rogers World from the current cycle's extracts:");
    println!("    nasr-reader airport OKC --dir ./CSV_Data");
    println!();
    println!("    # Look a facility up by ICAO identifier, as JSON:");
    println!("    nasr-reader airport KOKC --icao --dir ./CSV_Data --format json");
    println!();
    println!("    # Print the current and next two AIRAC cycles:");
    println!("    nasr-reader cycle --count 3");
    println!();
    println!("For detailed help on any command, use:");
    println!("    nasr-reader <COMMAND> --help");
}
