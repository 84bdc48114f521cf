#[macro_use]
extern crate clap;

mod error;
mod terminal;

use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::{Arg, ArgGroup};

use error::{Error, IOErrorContext};
use ls8::{Cpu, StepOutcome};
use terminal::{TerminalReader, TerminalWriter};

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("PROGRAM")
                .help("Sets the pre-assembled binary image to run")
                .index(1),
        )
        .arg(
            Arg::with_name("assembly")
                .short("a")
                .long("assembly")
                .takes_value(true)
                .value_name("ASSEMBLY")
                .help("Sets the assembly source file to run"),
        )
        .arg(
            Arg::with_name("trace")
                .short("t")
                .long("trace")
                .help("Prints the instruction about to execute before every step"),
        )
        .arg(
            Arg::with_name("frequency")
                .short("f")
                .long("frequency")
                .takes_value(true)
                .value_name("CYCLES")
                .help("Sets how many cycles elapse between timer interrupts"),
        )
        .group(
            ArgGroup::with_name("input")
                .args(&["PROGRAM", "assembly"])
                .required(true),
        )
        .get_matches();

    let code = match matches.value_of("PROGRAM") {
        Some(path) => read_binary(path)?,
        None => read_assembly(matches.value_of("assembly").unwrap())?,
    };

    let frequency = match matches.value_of("frequency") {
        Some(value) => value_t!(matches.value_of("frequency"), u64).map_err(Error::Clap)?,
        None => ls8::DEFAULT_FREQUENCY,
    };
    let trace = matches.is_present("trace");

    let reader = TerminalReader::new()
        .map_err(|err| Error::Io(err, IOErrorContext::Terminal, PathBuf::new()))?;
    let mut cpu = Cpu::with_frequency(reader, TerminalWriter, frequency);
    cpu.load(&code).map_err(Error::Load)?;

    loop {
        if trace {
            eprintln!(
                "{:02X}: {}",
                cpu.program_counter(),
                ls8::disassemble(cpu.memory(), cpu.program_counter())
            );
        }

        match cpu.step().map_err(Error::Runtime)? {
            StepOutcome::Continue => {}
            StepOutcome::Halted => break,
        }
    }

    Ok(())
}

fn read_binary(path: &str) -> Result<Vec<u8>, Error> {
    let path = Path::new(path);
    let mut bytes = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut bytes))
        .map_err(|err| Error::Io(err, IOErrorContext::ReadInput, path.to_owned()))?;
    Ok(bytes)
}

fn read_assembly(path: &str) -> Result<Vec<u8>, Error> {
    let path = Path::new(path);
    let file = File::open(path)
        .map_err(|err| Error::Io(err, IOErrorContext::ReadInput, path.to_owned()))?;
    let mut source = String::new();
    BufReader::new(file)
        .read_to_string(&mut source)
        .map_err(|err| Error::Io(err, IOErrorContext::ReadInput, path.to_owned()))?;
    lasm::translate(&source).map_err(Error::Assembly)
}
