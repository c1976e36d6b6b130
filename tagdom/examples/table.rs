use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tagdom::html::{table, td, tr};
use tagdom::{render_pretty, validate};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("table.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let doc = table(|t| {
        t.set_attr("class", "demo");
        t.node("tr", |row| {
            row.node("th", |h| {
                h.set_text("lang");
            });
            row.node("th", |h| {
                h.set_text("style");
            });
        });
        t.push(tr(|row| {
            row.push(td(|c| {
                c.set_text("rust");
            }));
            row.push(td(|c| {
                c.set_text("closures");
            }));
        }));
    });

    if let Err(err) = validate(&doc) {
        eprintln!("invalid tree: {err}");
        return Ok(());
    }

    println!("{doc}");
    println!();
    println!("{}", render_pretty(&doc, 2));
    Ok(())
}
