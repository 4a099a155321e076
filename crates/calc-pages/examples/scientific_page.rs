//! Example: Scientific calculator page
//!
//! Demonstrates: navigating modes, clearing state and reading the display
//! through page objects, against the scripted in-memory calculator.
//!
//! Run with: `cargo run --example scientific_page`
//!
//! Set `RUST_LOG=calc_pages=debug` to see every lookup and click.

use calc_pages::prelude::*;

fn main() -> PageResult<()> {
    let _ = init_tracing(&LoggingConfig::default())?;
    println!("=== Scientific Calculator Page Example ===\n");

    // 1. Attach a page to a session
    println!("1. Starting in Standard mode...");
    let session = MockSession::calculator(CalculatorMode::Standard);
    let page = ScientificCalculatorPage::new(&session);
    println!("   Current mode: {}", page.current_mode()?);

    // 2. Navigate
    println!("\n2. Navigating to Scientific mode...");
    page.navigate_to_mode(CalculatorMode::Scientific)?;
    println!("   Current mode: {}", page.current_mode()?);

    // 3. Put something on the display, as a user would
    println!("\n3. Entering a value...");
    session.update(|tree| {
        let _ = tree.set_text(CALCULATOR_RESULTS_ID, "Display is 1,234.5");
    });
    let raw = page.calculator_result()?.text()?;
    println!("   Accessible name: {raw:?}");
    println!("   Rendered text:   {:?}", page.result_text()?);

    // 4. Clear everything
    println!("\n4. Clearing display, memory and history...");
    page.clear_all()?;
    println!("   Rendered text:   {:?}", page.result_text()?);
    println!("   Clicks:          {:?}", session.clicks());

    // 5. Visit a converter and come back
    println!("\n5. Round trip through a converter...");
    page.navigate_to_mode(CalculatorMode::Length)?;
    println!(
        "   In {}: display present = {}",
        page.current_mode()?,
        page.is_loaded()?
    );
    page.navigate_to_mode(CalculatorMode::Scientific)?;
    println!(
        "   Back in {}: display present = {}",
        page.current_mode()?,
        page.is_loaded()?
    );

    // 6. What a failure looks like
    println!("\n6. Looking up a control that is not on screen...");
    match page.memory().memory_clear() {
        Ok(_) => println!("   found"),
        Err(e) => println!("   {e}"),
    }
    session.update(|tree| {
        let _ = tree.remove("ClearMemoryButton");
    });
    match page.memory().memory_clear() {
        Ok(_) => println!("   found"),
        Err(e) => println!("   {e}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
