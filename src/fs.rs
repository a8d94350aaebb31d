use std::error::Error;
use std::fs::File;
use std::io::{self, prelude::*};
use std::path::Path;

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Reads the whole standard input, used when no puzzle file is given.
pub(crate) fn read_stdin() -> Result<String, Box<dyn Error>> {
    let mut contents = String::new();
    io::stdin().read_to_string(&mut contents)?;
    Ok(contents)
}
