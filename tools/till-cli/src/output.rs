//! Output formatting for the CLI.

use console::style;
use till_checkout::CheckoutPricing;

/// Output handler for CLI messages.
#[derive(Clone, Copy)]
pub struct Output {
    json: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!(r#"{{"error": "{}"}}"#, msg.replace('"', "\\\""));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print the per-line receipt breakdown.
    pub fn receipt(&self, pricing: &CheckoutPricing) {
        if self.json || self.quiet {
            return;
        }
        for line in &pricing.lines {
            print!(
                "{:<8} {:>3} x {:>6}  {:>8}",
                line.code, line.quantity, line.unit_price, line.net
            );
            match line.rule {
                Some(rule) if !line.discount.is_zero() => {
                    println!(
                        "  {}",
                        style(format!("(-{}, {})", line.discount, rule)).green()
                    );
                }
                _ => println!(),
            }
        }
        println!("{:<8} {:>21}", "Subtotal", pricing.subtotal.to_string());
        if pricing.has_discounts() {
            println!("{:<8} {:>21}", "Savings", format!("-{}", pricing.savings()));
        }
    }

    /// Print the final total line.
    pub fn total(&self, pricing: &CheckoutPricing) {
        if self.json {
            return;
        }
        if self.quiet {
            println!("{}", pricing.grand_total);
            return;
        }
        println!(
            "Total Price: {}€",
            style(pricing.grand_total.to_string()).bold()
        );
    }
}
