//! Interactive query loop.

use std::io::{BufRead, Write};

use courier_core::{PackageId, Simulation, TimeOfDay};

use crate::{
    CliError,
    query::{OutputFormat, write_package, write_packages, write_trips},
};

const BANNER: &str = "\
Welcome to the Courier Routing Program
====================================
Main Menu:

(1) Retrieve Complete Trip Information
(2) Check a Package's Status at a Given Time
(3) Check the Status of All Packages at a Given Time
(4) Quit the Application
====================================";

/// Run the menu until the user quits or input ends.
pub(crate) fn run_menu(
    simulation: &Simulation,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    loop {
        writeln!(output, "\n{BANNER}")?;
        let Some(option) = prompt(input, output, "Please Select an Option: ")? else {
            return Ok(());
        };
        match option.as_str() {
            "1" => {
                writeln!(output)?;
                write_trips(
                    output,
                    &simulation.fleet_summary(),
                    simulation.routes(),
                    OutputFormat::Text,
                )?;
            }
            "2" => {
                let Some(id) = prompt(input, output, "Please enter a package ID: ")? else {
                    return Ok(());
                };
                let Some(at) = prompt(input, output, "Please enter a time in HH:MM:SS format: ")?
                else {
                    return Ok(());
                };
                show_package(simulation, output, &id, &at)?;
            }
            "3" => {
                let Some(at) = prompt(input, output, "Please enter a time in HH:MM:SS format: ")?
                else {
                    return Ok(());
                };
                match at.parse::<TimeOfDay>() {
                    Ok(at) => {
                        writeln!(output)?;
                        write_packages(output, at, &simulation.packages_at(at), OutputFormat::Text)?;
                    }
                    Err(_) => writeln!(output, "Invalid input. Please enter a time in HH:MM:SS format.")?,
                }
            }
            "4" => {
                writeln!(output, "The application is now terminating. Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid option. Please try again.")?,
        }
    }
}

fn show_package(
    simulation: &Simulation,
    output: &mut dyn Write,
    id: &str,
    at: &str,
) -> Result<(), CliError> {
    let (Ok(id), Ok(at)) = (id.parse::<u32>(), at.parse::<TimeOfDay>()) else {
        writeln!(
            output,
            "Invalid input. Please enter a valid package ID and a time in HH:MM:SS format."
        )?;
        return Ok(());
    };
    match simulation.package_at(PackageId::from(id), at) {
        Ok(snapshot) => {
            writeln!(output)?;
            write_package(output, &snapshot, OutputFormat::Text)
        }
        Err(err) => {
            writeln!(output, "{err}. Please try again.")?;
            Ok(())
        }
    }
}

/// Print `message` and read one trimmed line, or `None` at end of input.
fn prompt(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    message: &str,
) -> Result<Option<String>, CliError> {
    write!(output, "{message}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}
