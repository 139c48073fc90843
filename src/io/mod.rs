pub mod input;
pub mod output;
pub mod writers;

pub use input::{read_input_table, InputRow, InputTable};
pub use output::{create_writer, OutputFormat, OutputWriter};

use crate::errors::Result;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read a text file, or stdin when the path is `-`
pub fn read_text(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut contents = String::new();
        std::io::stdin().read_to_string(&mut contents)?;
        Ok(contents)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
