use std::io::Cursor;

use stockroom_cli::Session;
use stockroom_inventory::{DuplicatePolicy, Inventory};

/// Drive a whole session from scripted input and return the final state
/// together with everything written to the console.
fn run_script(inventory: Inventory, lines: &[&str]) -> (Inventory, String) {
    let mut script = lines.join("\n");
    script.push('\n');

    let mut session = Session::new(inventory, Cursor::new(script.into_bytes()), Vec::new());
    session.run().expect("session should end cleanly");

    let (inventory, output) = session.into_parts();
    (inventory, String::from_utf8(output).expect("console output is utf-8"))
}

#[test]
fn widget_scenario_adds_sells_and_refuses_oversell() {
    let (inventory, out) = run_script(
        Inventory::new(),
        &[
            "1", "Widget", "10", "2.5", // add
            "3", "Widget", // find
            "2", "Widget", "4", // sell 4
            "2", "Widget", "100", // oversell
            "6",
        ],
    );

    assert!(out.contains("Item added successfully"));
    assert!(out.contains("Item found\nItem name: Widget\nQuantity: 10\nPrice: 2.5"));
    assert!(out.contains("Items sold successfully\nMoney received: 10.00"));
    assert!(out.contains("Cannot sell more items than you have (in stock: 6)."));
    assert!(out.contains("Total money earned: 10.00"));

    assert_eq!(inventory.find("Widget").unwrap().quantity(), 6);
    assert_eq!(inventory.total_money(), 10.0);
}

#[test]
fn selling_out_removes_the_item_from_listing() {
    let (inventory, out) = run_script(
        Inventory::new(),
        &["1", "Bolt", "3", "0.5", "2", "Bolt", "3", "5", "6"],
    );

    assert!(out.contains("Money received: 1.50"));
    assert!(out.contains("Inventory empty."));
    assert!(out.ends_with("Total money earned: 1.50\n"));
    assert!(inventory.is_empty());
}

#[test]
fn unknown_names_report_not_found() {
    let (inventory, out) = run_script(
        Inventory::new(),
        &["2", "Ghost", "3", "Ghost", "4", "Ghost", "6"],
    );

    assert_eq!(out.matches("This item is not in your Inventory").count(), 3);
    // Sell and edit stop before asking for anything else.
    assert!(!out.contains("Enter number of items to sell"));
    assert!(!out.contains("Enter new item name"));
    assert!(inventory.is_empty());
}

#[test]
fn edit_rekeys_the_item() {
    let (inventory, out) = run_script(
        Inventory::new(),
        &[
            "1", "Widget", "10", "2.5", //
            "4", "Widget", "Sprocket", "7", "3", //
            "3", "Widget", //
            "3", "Sprocket", //
            "6",
        ],
    );

    assert!(out.contains("Item updated successfully"));
    assert!(out.contains("This item is not in your Inventory"));
    assert!(out.contains("Item name: Sprocket\nQuantity: 7\nPrice: 3"));
    assert!(inventory.find("Widget").is_err());
    assert_eq!(inventory.len(), 1);
}

#[test]
fn list_renders_every_item_in_name_order() {
    let (_, out) = run_script(
        Inventory::new(),
        &[
            "5", //
            "1", "Widget", "10", "2.5", //
            "1", "Anvil", "1", "99", //
            "5", "6",
        ],
    );

    assert!(out.contains("Inventory empty."));
    let anvil = out.find("Item name: Anvil").expect("Anvil listed");
    let widget = out.rfind("Item name: Widget").expect("Widget listed");
    assert!(anvil < widget);
}

#[test]
fn invalid_menu_choices_return_to_the_menu() {
    let (_, out) = run_script(Inventory::new(), &["9", "abc", "", "6"]);

    assert_eq!(out.matches("Invalid choice entered").count(), 3);
    assert_eq!(out.matches("Enter your choice: ").count(), 4);
}

#[test]
fn non_utf8_menu_input_is_an_invalid_choice() {
    let mut session = Session::new(
        Inventory::new(),
        Cursor::new(b"\xff\xfe\n6\n".to_vec()),
        Vec::new(),
    );
    session.run().expect("undecodable input is not fatal");

    let (_, output) = session.into_parts();
    let out = String::from_utf8(output).unwrap();
    assert_eq!(out.matches("Invalid choice entered").count(), 1);
    assert_eq!(out.matches("Enter your choice: ").count(), 2);
    assert!(out.contains("Total money earned: 0.00"));
}

#[test]
fn selling_zero_units_succeeds() {
    let (inventory, out) = run_script(
        Inventory::new(),
        &["1", "Widget", "10", "2.5", "2", "Widget", "0", "6"],
    );

    assert!(out.contains("Items sold successfully\nMoney received: 0.00"));
    assert_eq!(inventory.find("Widget").unwrap().quantity(), 10);
    assert_eq!(inventory.total_money(), 0.0);
}

#[test]
fn malformed_numbers_are_asked_again() {
    let (inventory, out) = run_script(
        Inventory::new(),
        &["1", "Widget", "lots", "10", "cheap", "2.5", "6"],
    );

    assert_eq!(out.matches("Please enter a valid number.").count(), 2);
    assert_eq!(inventory.find("Widget").unwrap().quantity(), 10);
}

#[test]
fn invalid_item_fields_are_reported() {
    let (inventory, out) = run_script(
        Inventory::new(),
        &["1", "Widget", "0", "2.5", "1", "Widget", "5", "-1", "6"],
    );

    assert!(out.contains("Invalid input: quantity must be greater than zero"));
    assert!(out.contains("Invalid input: price cannot be negative"));
    assert!(inventory.is_empty());
}

#[test]
fn duplicate_add_follows_the_configured_policy() {
    let script = ["1", "Widget", "10", "2.5", "1", "Widget", "3", "1", "6"];

    let (overwritten, out) = run_script(Inventory::new(), &script);
    assert!(out.contains("Replaced existing item Widget (10 units discarded)"));
    assert_eq!(overwritten.find("Widget").unwrap().quantity(), 3);

    let (kept, out) = run_script(Inventory::with_policy(DuplicatePolicy::Reject), &script);
    assert!(out.contains("Cannot complete: item Widget already exists"));
    assert_eq!(kept.find("Widget").unwrap().quantity(), 10);
}

#[test]
fn end_of_input_ends_the_session_cleanly() {
    let mut session = Session::new(
        Inventory::new(),
        Cursor::new(b"1\nWidget\n".to_vec()),
        Vec::new(),
    );
    session.run().expect("eof is not an error");
    assert!(session.inventory().is_empty());
}
