//! Showcase of the accounting-style money renderer.

use bigdecimal::BigDecimal;
use statement_core::{format_amount, MoneyFormat};

fn main() {
    let value: BigDecimal = "-1234567.8901".parse().unwrap();

    println!("plain          {}", format_amount(&value));
    println!("dollars        {}", MoneyFormat::new().curr("$").format(&value));
    println!(
        "accounting     {}",
        MoneyFormat::new()
            .curr("$")
            .neg("(")
            .trailneg(")")
            .format(&value)
    );
    println!(
        "no cents       {}",
        MoneyFormat::new()
            .places(0)
            .sep(".")
            .dp("")
            .neg("")
            .trailneg("-")
            .format(&value)
    );
    println!(
        "spaced groups  {}",
        MoneyFormat::new().sep(" ").format(&BigDecimal::from(123_456_789))
    );
}
