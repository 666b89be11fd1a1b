use std::str::FromStr;

use rust_decimal::Decimal;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::error::CliError;

/// Line-oriented prompt over any async reader/writer pair.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }

    pub async fn say(&mut self, text: &str) -> Result<(), CliError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Print `label` without a newline and read one line, minus its terminator.
    pub async fn prompt(&mut self, label: &str) -> Result<String, CliError> {
        self.writer.write_all(label.as_bytes()).await?;
        self.writer.flush().await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(CliError::EndOfInput);
        }
        Ok(line.trim_end_matches(|c| c == '\n' || c == '\r').to_string())
    }

    pub async fn prompt_id(&mut self, label: &str) -> Result<u64, CliError> {
        let raw = self.prompt(label).await?;
        raw.trim().parse().map_err(|_| CliError::InvalidNumber(raw))
    }

    pub async fn prompt_amount(&mut self, label: &str) -> Result<Decimal, CliError> {
        let raw = self.prompt(label).await?;
        Decimal::from_str(raw.trim()).map_err(|_| CliError::InvalidAmount(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_prompt_reads_lines_and_echoes_labels() {
        let input: &[u8] = b"hello world\r\n42\n19.99\n";
        let mut console = Console::new(input, Vec::new());

        assert_eq!(console.prompt("Name: ").await.unwrap(), "hello world");
        assert_eq!(console.prompt_id("Id: ").await.unwrap(), 42);
        assert_eq!(console.prompt_amount("Price: ").await.unwrap(), Decimal::new(1999, 2));

        let written = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(written, "Name: Id: Price: ");
    }

    #[tokio::test]
    async fn test_malformed_numbers_are_recoverable() {
        let input: &[u8] = b"abc\nten\n";
        let mut console = Console::new(input, Vec::new());

        let err = console.prompt_id("Id: ").await.unwrap_err();
        assert!(matches!(err, CliError::InvalidNumber(ref raw) if raw == "abc"));
        assert!(err.is_recoverable());

        let err = console.prompt_amount("Amount: ").await.unwrap_err();
        assert!(matches!(err, CliError::InvalidAmount(_)));
    }

    #[tokio::test]
    async fn test_end_of_input_is_not_recoverable() {
        let input: &[u8] = b"";
        let mut console = Console::new(input, Vec::new());

        let err = console.prompt("Anything: ").await.unwrap_err();
        assert!(matches!(err, CliError::EndOfInput));
        assert!(!err.is_recoverable());
    }
}
