//! Browse the bundled people dataset in a full-screen table.
//!
//! Run with `cargo run` from this directory. Set `RUST_LOG=people_table=debug`
//! and redirect stderr (`2>table.log`) to watch sort, filter and page events.

use bubbletea_rs::{Cmd, Model, Msg, Program};
use people_table::prelude::*;
use tracing_subscriber::EnvFilter;

struct App {
    table: Table<Person>,
    load_error: Option<String>,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let (people, load_error) = match people_table::dataset::bundled() {
            Ok(people) => (people, None),
            Err(err) => {
                tracing::error!(%err, "failed to load bundled dataset");
                (Vec::new(), Some(err.to_string()))
            }
        };
        tracing::info!(rows = people.len(), "dataset loaded");
        let table = Table::with_config(people, people_columns(), Config::default());
        (Self { table, load_error }, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.table.update(&msg)
    }

    fn view(&self) -> String {
        match &self.load_error {
            Some(err) => format!("{}\n\nDataset error: {err}", self.table.view()),
            None => self.table.view(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
