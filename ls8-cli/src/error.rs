use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum IOErrorContext {
    ReadInput,
    WriteOutput,
    Terminal,
}

#[derive(Debug)]
pub enum Error {
    Assembly(Vec<lasm::AssemblyError>),
    Runtime(ls8::RuntimeError),
    Load(ls8::ProgramTooLarge),
    Io(std::io::Error, IOErrorContext, PathBuf),
    Clap(clap::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err, context, path) => write!(
                f,
                "{} file \"{}\" failed: {}",
                match context {
                    IOErrorContext::ReadInput => "Reading input",
                    IOErrorContext::WriteOutput => "Writing output",
                    IOErrorContext::Terminal => "Setting up the terminal",
                },
                path.display(),
                err
            ),
            Error::Assembly(errors) => {
                writeln!(f, "Assembling input failed:")?;
                for error in errors {
                    writeln!(f, "{}", error)?;
                }
                Ok(())
            }
            Error::Runtime(err) => write!(f, "Program stopped: {}", err),
            Error::Load(err) => write!(f, "Couldn't load program: {}", err),
            Error::Clap(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}
