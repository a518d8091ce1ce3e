use clap::Parser;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to read query: {0}")]
    Io(#[from] io::Error),
    #[error("no query provided")]
    NoQuery,
}

/// Fetch search results for a query through a search-proxy endpoint.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// Search query content. Prompted for on stdin when omitted.
    #[arg(long, short = 'q', allow_hyphen_values = true)]
    pub query: Option<String>,
}

impl Cli {
    /// The query from the flag, or one line read after showing `prompt`.
    pub fn resolve_query<R: BufRead, W: Write>(
        &self,
        prompt: &str,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<String, CliError> {
        match &self.query {
            Some(query) => Ok(query.clone()),
            None => read_query(prompt, reader, writer),
        }
    }
}

pub fn read_query<R: BufRead, W: Write>(
    prompt: &str,
    reader: &mut R,
    writer: &mut W,
) -> Result<String, CliError> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(CliError::NoQuery);
    }

    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}
