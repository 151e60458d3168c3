use crate::libs::config::{self, Credentials};
use anyhow::Result;

/// Prints the value to put in `TIMESHEET` for the given `email:token;domain`.
pub fn cmd(plain: &str) -> Result<()> {
    Credentials::parse(plain)?;
    println!("{}", config::encode(plain));
    Ok(())
}
