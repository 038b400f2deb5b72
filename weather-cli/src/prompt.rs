use inquire::{InquireError, Text};
use weather_core::{LocationError, ZipPrompt};

/// Asks for a zip code on the terminal.
pub struct TerminalZipPrompt;

impl ZipPrompt for TerminalZipPrompt {
    fn ask_zip(&self) -> Result<Option<String>, LocationError> {
        let answer = Text::new("Could not discover your location. What is your zip code?")
            .with_help_message("e.g. 10001 or 10001,us")
            .prompt();

        match answer {
            Ok(zip) => Ok(Some(zip)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(err) => Err(LocationError::Prompt(err.to_string())),
        }
    }
}
