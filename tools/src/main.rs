//! finquery: headless runner for the people/transactions ledger.
//!
//! Usage:
//!   finquery --db user_transactions.db --seed 42
//!   finquery --config ledger.json --no-seed
//!   finquery --db :memory: --ipc-mode

use anyhow::Result;
use chrono::Duration;
use finquery_core::{
    config::LedgerConfig,
    queries::LedgerQueries,
    rng::{RngBank, StreamSlot},
    seeding::Seeder,
    store::LedgerStore,
};
use std::env;
use std::io::{self, BufRead, Write};

/// One operation per line on stdin.
#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    TransactionsByMonth {
        first_name: String,
        last_name: String,
        month: u32,
    },
    TransactionsByDay {
        first_name: String,
        last_name: String,
        date: String,
    },
    TotalAmount {
        first_name: String,
        last_name: String,
    },
    ListPeople,
    TransactionsByLocation {
        location: String,
    },
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let no_seed = args.iter().any(|a| a == "--no-seed");

    let mut config = match flag_value(&args, "--config") {
        Some(path) => LedgerConfig::load(path)?,
        None => LedgerConfig::default(),
    };
    if let Some(db) = flag_value(&args, "--db") {
        config.database.path = db.to_string();
    }
    config.seeding.seed = parse_arg(&args, "--seed", config.seeding.seed);
    config.validate()?;

    if !ipc_mode {
        println!("finquery: people & transactions ledger");
        println!("  db:    {}", config.database.path);
        println!("  seed:  {}", config.seeding.seed);
        println!();
    }

    let store = LedgerStore::from_config(&config.database)?;
    store.migrate()?;

    if !no_seed {
        let report = Seeder::new(&store, config.seeding.clone()).populate()?;
        if !ipc_mode {
            if report.skipped {
                println!("Store already contains data. Skipping population.");
            } else {
                println!(
                    "Seeded {} people and {} transactions ({} duplicates skipped).",
                    report.people_inserted, report.transactions_inserted, report.duplicates_skipped
                );
            }
        }
    }

    let ledger = LedgerQueries::new(store);
    if ipc_mode {
        run_ipc_loop(&ledger)
    } else {
        print_report(&ledger, &config)
    }
}

fn run_ipc_loop(ledger: &LedgerQueries) -> Result<()> {
    let stdin = io::stdin();
    serve(ledger, stdin.lock(), io::stdout())
}

/// Answer one JSON command per input line until EOF or `quit`.
fn serve(ledger: &LedgerQueries, mut input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = input.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                writeln!(output, "{}", serde_json::json!({ "error": e.to_string() }))?;
                output.flush()?;
                continue;
            }
        };
        if matches!(cmd, IpcCommand::Quit) {
            break;
        }

        let response = match handle_command(ledger, cmd) {
            Ok(result) => serde_json::json!({ "result": result }),
            Err(e) => {
                log::error!("Command failed: {e}");
                serde_json::json!({ "error": e.to_string() })
            }
        };
        writeln!(output, "{response}")?;
        output.flush()?;
    }
    Ok(())
}

fn handle_command(ledger: &LedgerQueries, cmd: IpcCommand) -> Result<serde_json::Value> {
    let value = match cmd {
        IpcCommand::TransactionsByMonth {
            first_name,
            last_name,
            month,
        } => serde_json::to_value(ledger.transactions_by_month(&first_name, &last_name, month)?)?,
        IpcCommand::TransactionsByDay {
            first_name,
            last_name,
            date,
        } => serde_json::to_value(ledger.transactions_by_day(&first_name, &last_name, &date)?)?,
        IpcCommand::TotalAmount {
            first_name,
            last_name,
        } => serde_json::to_value(ledger.total_amount(&first_name, &last_name)?)?,
        IpcCommand::ListPeople => serde_json::to_value(ledger.list_people()?)?,
        IpcCommand::TransactionsByLocation { location } => {
            serde_json::to_value(ledger.transactions_by_location(&location)?)?
        }
        IpcCommand::Quit => serde_json::Value::Null,
    };
    Ok(value)
}

fn print_report(ledger: &LedgerQueries, config: &LedgerConfig) -> Result<()> {
    let mut rng = RngBank::new(config.seeding.seed).for_slot(StreamSlot::Demo);

    println!();
    println!("=== PEOPLE (most frequent location) ===");
    let people = ledger.list_people()?;
    if people.is_empty() {
        println!("  No people found in the store.");
    }
    for p in people.iter().take(15) {
        println!(
            "  ID: {}, Name: {} {}, Email: {}, Location: {}",
            p.person_id,
            p.first_name,
            p.last_name,
            p.email.as_deref().unwrap_or("-"),
            p.most_frequent_location.as_deref().unwrap_or("N/A")
        );
    }

    if !people.is_empty() {
        let person = rng.pick(&people);
        let (first, last) = (person.first_name.as_str(), person.last_name.as_str());
        println!();
        println!("=== {first} {last} ===");

        let month = rng.range_inclusive(1, 12);
        println!();
        println!("  Transactions in month {month}:");
        let month_txns = ledger.transactions_by_month(first, last, month)?;
        if month_txns.is_empty() {
            println!("    No transactions found for this month.");
        }
        for t in &month_txns {
            println!(
                "    - {} | ${:.2} at {} ({})",
                t.transaction_date,
                t.amount,
                t.location.as_deref().unwrap_or("N/A"),
                t.description.as_deref().unwrap_or("")
            );
        }

        let day = match month_txns.first() {
            Some(t) => t.transaction_date.date(),
            None => {
                let back = rng.range_inclusive(10, 60);
                (chrono::Local::now().naive_local() - Duration::days(i64::from(back))).date()
            }
        };
        let day = day.format("%Y-%m-%d").to_string();
        println!();
        println!("  Transactions on {day}:");
        let day_txns = ledger.transactions_by_day(first, last, &day)?;
        if day_txns.is_empty() {
            println!("    No transactions found for this specific day.");
        }
        for t in &day_txns {
            println!(
                "    - {} | ${:.2} at {} ({})",
                t.transaction_date,
                t.amount,
                t.location.as_deref().unwrap_or("N/A"),
                t.description.as_deref().unwrap_or("")
            );
        }

        let total = ledger.total_amount(first, last)?;
        println!();
        println!("  Total transaction amount: ${total:.2}");
    }

    let location = rng.pick(&config.seeding.locations);
    println!();
    println!("=== TRANSACTIONS AT '{location}' ===");
    let at_location = ledger.transactions_by_location(location)?;
    if at_location.is_empty() {
        println!("  No transactions found for location '{location}'.");
    }
    for t in at_location.iter().take(5) {
        println!(
            "  - {} | {} {} | ${:.2} ({})",
            t.transaction_date,
            t.first_name,
            t.last_name,
            t.amount,
            t.description.as_deref().unwrap_or("")
        );
    }
    if at_location.len() > 5 {
        println!("  ... and {} more.", at_location.len() - 5);
    }

    println!();
    println!("=== REPORT COMPLETE ===");
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use finquery_core::records::{NewPerson, NewTransaction};
    use serde_json::Value;
    use std::io::Cursor;

    fn ada_ledger() -> LedgerQueries {
        let store = LedgerStore::in_memory().unwrap();
        store.migrate().unwrap();
        let ada = store
            .insert_person(&NewPerson {
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                email: Some("ada@example.com".into()),
                phone_number: None,
            })
            .unwrap();
        for (ts, amount, location) in [
            ("2024-03-05 09:15:00", 50.0, "London"),
            ("2024-03-19 14:30:00", 30.0, "London"),
            ("2024-04-01 18:00:00", 20.0, "Paris"),
        ] {
            store
                .insert_transaction(&NewTransaction {
                    person_id: ada,
                    transaction_date: NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S")
                        .unwrap(),
                    amount,
                    location: Some(location.into()),
                    description: None,
                })
                .unwrap();
        }
        LedgerQueries::new(store)
    }

    fn replies(ledger: &LedgerQueries, input: &str) -> Vec<Value> {
        let mut out = Vec::new();
        serve(ledger, Cursor::new(input.as_bytes()), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn tagged_commands_decode() {
        let cmd: IpcCommand = serde_json::from_str(
            r#"{"type":"transactions_by_month","first_name":"Ada","last_name":"Lovelace","month":3}"#,
        )
        .unwrap();
        assert!(matches!(
            cmd,
            IpcCommand::TransactionsByMonth { month: 3, ref first_name, .. } if first_name == "Ada"
        ));
        let cmd: IpcCommand = serde_json::from_str(r#"{"type":"list_people"}"#).unwrap();
        assert!(matches!(cmd, IpcCommand::ListPeople));
    }

    #[test]
    fn each_command_gets_a_result_line() {
        let ledger = ada_ledger();
        let out = replies(
            &ledger,
            concat!(
                r#"{"type":"total_amount","first_name":"Ada","last_name":"Lovelace"}"#, "\n",
                r#"{"type":"transactions_by_month","first_name":"Ada","last_name":"Lovelace","month":3}"#, "\n",
                r#"{"type":"transactions_by_day","first_name":"Ada","last_name":"Lovelace","date":"2024-13-40"}"#, "\n",
                r#"{"type":"list_people"}"#, "\n",
                r#"{"type":"transactions_by_location","location":"Paris"}"#, "\n",
            ),
        );

        assert_eq!(out.len(), 5);
        assert_eq!(out[0]["result"], 100.0);
        assert_eq!(out[1]["result"].as_array().unwrap().len(), 2);
        assert_eq!(out[2]["result"], Value::Array(Vec::new()));
        assert_eq!(out[3]["result"][0]["most_frequent_location"], "London");
        assert_eq!(out[4]["result"][0]["first_name"], "Ada");
    }

    #[test]
    fn malformed_line_reports_error_and_continues() {
        let ledger = ada_ledger();
        let out = replies(
            &ledger,
            concat!(
                "{ nope\n",
                r#"{"type":"no_such_command"}"#, "\n",
                "\n",
                r#"{"type":"total_amount","first_name":"Nobody","last_name":"Here"}"#, "\n",
            ),
        );

        assert_eq!(out.len(), 3);
        assert!(out[0]["error"].is_string());
        assert!(out[1]["error"].is_string());
        assert_eq!(out[2]["result"], 0.0);
    }

    #[test]
    fn quit_stops_the_loop() {
        let ledger = ada_ledger();
        let out = replies(
            &ledger,
            concat!(
                r#"{"type":"quit"}"#, "\n",
                r#"{"type":"list_people"}"#, "\n",
            ),
        );
        assert!(out.is_empty());
    }
}
