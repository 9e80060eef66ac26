//! The interactive menu loop.
//!
//! Domain failures are reported on the console and control returns to the
//! menu. Only console IO failures end the session with an error.

use std::io::{BufRead, Write};

use stockroom_core::{Aggregate, DomainError};
use stockroom_events::Event;
use stockroom_inventory::{Inventory, InventoryEvent};

use crate::console::Console;
use crate::error::CliResult;
use crate::menu::{MENU, MenuChoice};

const NOT_FOUND: &str = "\nThis item is not in your Inventory";

/// Whether the menu loop keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Session<R, W> {
    inventory: Inventory,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(inventory: Inventory, input: R, output: W) -> Self {
        Self {
            inventory,
            console: Console::new(input, output),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_parts(self) -> (Inventory, W) {
        let (_, output) = self.console.into_parts();
        (self.inventory, output)
    }

    /// Run the menu until the user exits or input ends.
    pub fn run(&mut self) -> CliResult<()> {
        tracing::info!(duplicates = ?self.inventory.policy(), "session started");
        loop {
            self.console.write(MENU)?;
            let Some(line) = self.console.read_line()? else {
                tracing::info!("input closed; ending session");
                return Ok(());
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(err) => {
                    tracing::warn!(error = %err, "menu choice rejected");
                    self.console.writeln("\nInvalid choice entered")?;
                    continue;
                }
            };
            tracing::debug!(?choice, "menu choice");

            let flow = match choice {
                MenuChoice::Add => self.add_item()?,
                MenuChoice::Sell => self.sell_item()?,
                MenuChoice::Find => self.find_item()?,
                MenuChoice::Edit => self.edit_item()?,
                MenuChoice::List => self.list_items()?,
                MenuChoice::Exit => self.exit()?,
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn add_item(&mut self) -> CliResult<Flow> {
        let Some(draft) = self.console.read_new_item()? else {
            return Ok(Flow::Quit);
        };

        match self.inventory.add(draft.name, draft.quantity, draft.price) {
            Ok(added) => {
                if let Some(previous) = &added.replaced {
                    self.console.writeln(&format!(
                        "\nReplaced existing item {} ({} units discarded)",
                        previous.name(),
                        previous.quantity()
                    ))?;
                }
                self.console.writeln("\nItem added successfully")?;
                self.record(added.into());
            }
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn sell_item(&mut self) -> CliResult<Flow> {
        let Some(name) = self.console.prompt("\nEnter item name: ")? else {
            return Ok(Flow::Quit);
        };
        if !self.inventory.contains(&name) {
            self.report(&DomainError::not_found(name))?;
            return Ok(Flow::Continue);
        }

        let Some(amount) = self
            .console
            .prompt_number::<u32>("\nEnter number of items to sell: ")?
        else {
            return Ok(Flow::Quit);
        };

        match self.inventory.sell(&name, amount) {
            Ok(sold) => {
                self.console.writeln("\nItems sold successfully")?;
                self.console
                    .writeln(&format!("Money received: {:.2}", sold.earned))?;
                self.record(sold.into());
            }
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn find_item(&mut self) -> CliResult<Flow> {
        let Some(name) = self.console.prompt("\nEnter item name: ")? else {
            return Ok(Flow::Quit);
        };

        match self.inventory.find(&name) {
            Ok(item) => {
                let rendered = format!("\nItem found\n{item}");
                self.console.writeln(&rendered)?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn edit_item(&mut self) -> CliResult<Flow> {
        let Some(name) = self.console.prompt("\nEnter item name: ")? else {
            return Ok(Flow::Quit);
        };
        if !self.inventory.contains(&name) {
            self.report(&DomainError::not_found(name))?;
            return Ok(Flow::Continue);
        }
        self.console.writeln("\nItem found")?;

        let Some(draft) = self.console.read_item_edit()? else {
            return Ok(Flow::Quit);
        };

        let outcome = draft
            .into_item()
            .and_then(|replacement| self.inventory.edit(&name, replacement));
        match outcome {
            Ok(edited) => {
                if let Some(previous) = &edited.displaced {
                    self.console.writeln(&format!(
                        "\nReplaced existing item {} ({} units discarded)",
                        previous.name(),
                        previous.quantity()
                    ))?;
                }
                self.console.writeln("\nItem updated successfully")?;
                self.record(edited.into());
            }
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn list_items(&mut self) -> CliResult<Flow> {
        let items = self.inventory.list();
        if items.is_empty() {
            self.console.writeln("\nInventory empty.")?;
            return Ok(Flow::Continue);
        }

        let rendered: String = items.iter().map(|item| format!("\n{item}\n")).collect();
        self.console.write(&rendered)?;
        Ok(Flow::Continue)
    }

    fn exit(&mut self) -> CliResult<Flow> {
        self.console.writeln(&format!(
            "\nTotal money earned: {:.2}",
            self.inventory.total_money()
        ))?;
        tracing::info!(
            total_money = self.inventory.total_money(),
            items = self.inventory.len(),
            "session finished"
        );
        Ok(Flow::Quit)
    }

    fn report(&mut self, err: &DomainError) -> CliResult<()> {
        tracing::warn!(error = %err, "operation rejected");
        let message = match err {
            DomainError::ItemNotFound(_) => NOT_FOUND.to_string(),
            DomainError::InsufficientQuantity { available, .. } => format!(
                "\nCannot sell more items than you have (in stock: {available})."
            ),
            DomainError::Validation(msg) => format!("\nInvalid input: {msg}"),
            DomainError::Conflict(msg) => format!("\nCannot complete: {msg}"),
        };
        self.console.writeln(&message)?;
        Ok(())
    }

    fn record(&self, event: InventoryEvent) {
        match serde_json::to_string(&event) {
            Ok(payload) => tracing::info!(
                event_type = event.event_type(),
                schema_version = event.version(),
                occurred_at = %event.occurred_at(),
                inventory_version = self.inventory.version(),
                %payload,
                "event applied"
            ),
            Err(err) => tracing::warn!(
                event_type = event.event_type(),
                error = %err,
                "event could not be serialized"
            ),
        }
    }
}
