//! Line-based console prompting over any reader/writer pair.
//!
//! `None` from a prompt means the input reached end-of-file.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use stockroom_inventory::ItemDraft;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write `text` and flush, without a trailing newline.
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    pub fn writeln(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.write_all(b"\n")?;
        self.output.flush()
    }

    /// Read one line with its line terminator removed.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD, so garbage input reaches
    /// the parsers as an unparsable line instead of an IO error.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Show `label` and read the answer, trimmed of surrounding whitespace.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.write(label)?;
        Ok(self.read_line()?.map(|line| line.trim().to_string()))
    }

    /// Show `label` until the answer parses as `T`.
    pub fn prompt_number<T: FromStr>(&mut self, label: &str) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.prompt(label)? else {
                return Ok(None);
            };
            match answer.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    tracing::debug!(input = %answer, "rejected non-numeric input");
                    self.writeln("Please enter a valid number.")?;
                }
            }
        }
    }

    /// Ask for the fields of a new item.
    pub fn read_new_item(&mut self) -> io::Result<Option<ItemDraft>> {
        self.read_draft("\nEnter item name: ", "Enter quantity: ", "Enter price: ")
    }

    /// Ask for the replacement fields of an existing item.
    pub fn read_item_edit(&mut self) -> io::Result<Option<ItemDraft>> {
        self.read_draft(
            "\nEnter new item name: ",
            "Enter new quantity: ",
            "Enter new price: ",
        )
    }

    fn read_draft(
        &mut self,
        name_label: &str,
        quantity_label: &str,
        price_label: &str,
    ) -> io::Result<Option<ItemDraft>> {
        let Some(name) = self.prompt(name_label)? else {
            return Ok(None);
        };
        let Some(quantity) = self.prompt_number::<u32>(quantity_label)? else {
            return Ok(None);
        };
        let Some(price) = self.prompt_number::<f64>(price_label)? else {
            return Ok(None);
        };
        Ok(Some(ItemDraft {
            name,
            quantity,
            price,
        }))
    }
}
