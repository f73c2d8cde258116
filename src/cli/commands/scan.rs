use crate::scan::{check_files, print_contents};
use anyhow::Result;
use std::io;

pub fn read(files: &[String]) -> Result<()> {
    let mut out = io::stdout().lock();
    print_contents(files, &mut out)
}

pub fn grep(files: &[String]) -> Result<()> {
    let mut out = io::stdout().lock();
    check_files(files, &mut out)
}
