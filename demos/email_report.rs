//! Render a list of users as an HTML table for an email body.
//!
//! Run with: cargo run --example email_report

use serde::Serialize;
use serde_html_table::to_string;
use std::error::Error;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct User {
    name: String,
    email: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
        },
        User {
            name: "Jane Smith".to_string(),
            email: "jane.smith@example.com".to_string(),
        },
    ];

    let html = to_string(&users)?;
    println!("{}", html);

    Ok(())
}
