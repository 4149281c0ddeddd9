use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{watch, Mutex};

use vpet::format::PetFormatter;
use vpet::scheduler::DecayScheduler;
use vpet::{Action, ActivityRecord, Config, Notification, PetEngine, PetState};

pub use commands::{Args, Commands};

mod commands;

const HELP: &str = "Commands: feed | drink | play | clean | sleep | status | log | help | quit";

pub async fn handle_run(config: Config) -> Result<()> {
    let engine = Arc::new(Mutex::new(PetEngine::new(config.pet_name.clone(), Utc::now())));
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let scheduler = DecayScheduler::new(engine.clone(), config.tick_interval()).spawn(shutdown_rx);
    let ttl = config.notification_ttl();

    println!("{}", PetFormatter::format_status(engine.lock().await.state()));
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let input = line.trim().to_lowercase();
        match input.as_str() {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "help" | "?" => println!("{}", HELP),
            "status" => {
                let engine = engine.lock().await;
                println!("{}", PetFormatter::format_status(engine.state()));
                let notes = PetFormatter::format_notifications(engine.notifications(), Utc::now(), ttl);
                if !notes.is_empty() {
                    println!("{}", notes);
                }
            }
            "log" => {
                let engine = engine.lock().await;
                println!("{}", PetFormatter::format_activities(engine.activities()));
            }
            other => match other.parse::<Action>() {
                Ok(action) => {
                    let report = engine.lock().await.perform(action);
                    println!("{}", PetFormatter::format_report(&report));
                }
                Err(e) => println!("{}. {}", e, HELP),
            },
        }
    }

    shutdown_tx.send(true).ok();
    let ticks = scheduler.await.context("Decay scheduler panicked")?;
    tracing::debug!("Session ended after {} decay ticks", ticks);

    let engine = engine.lock().await;
    println!("👋 See you soon! {} reached level {}.", engine.state().name(), engine.state().level());
    Ok(())
}

#[derive(Serialize)]
struct SimulationSummary<'a> {
    minutes: u64,
    state: &'a PetState,
    notifications: Vec<&'a Notification>,
    activities: Vec<&'a ActivityRecord>,
}

pub fn handle_simulate(
    config: Config,
    minutes: u64,
    step: u64,
    actions: Vec<Action>,
    json: bool,
) -> Result<()> {
    anyhow::ensure!(step > 0, "--step must be at least 1 minute");

    let start = Utc::now();
    if minutes_after(start, minutes).is_none() {
        anyhow::bail!("--minutes {} is too far in the future to simulate", minutes);
    }
    let mut engine = PetEngine::new(config.pet_name, start);

    let mut reports = Vec::with_capacity(actions.len());
    for action in actions {
        reports.push(engine.perform_at(action, start));
    }

    let mut elapsed = step;
    while elapsed <= minutes {
        let now = minutes_after(start, elapsed)
            .with_context(|| format!("Simulated clock overflowed at minute {}", elapsed))?;
        engine.apply_decay(now);
        match elapsed.checked_add(step) {
            Some(next) => elapsed = next,
            None => break,
        }
    }

    if json {
        let summary = SimulationSummary {
            minutes,
            state: engine.state(),
            notifications: engine.notifications().iter().collect(),
            activities: engine.activities().iter().collect(),
        };
        let out = serde_json::to_string_pretty(&summary).context("Failed to serialize simulation")?;
        println!("{}", out);
        return Ok(());
    }

    for report in &reports {
        println!("{}", PetFormatter::format_report(report));
    }
    println!("⏱️  {} minutes later...", minutes);
    println!("{}", PetFormatter::format_status(engine.state()));
    println!("{}", PetFormatter::format_activities(engine.activities()));
    Ok(())
}

/// `start + minutes`, or `None` when the instant is out of chrono's range.
fn minutes_after(start: DateTime<Utc>, minutes: u64) -> Option<DateTime<Utc>> {
    i64::try_from(minutes)
        .ok()
        .and_then(Duration::try_minutes)
        .and_then(|offset| start.checked_add_signed(offset))
}

pub fn handle_status(config: Config, json: bool) -> Result<()> {
    let engine = PetEngine::new(config.pet_name, Utc::now());

    if json {
        let out = serde_json::to_string_pretty(engine.state()).context("Failed to serialize pet")?;
        println!("{}", out);
    } else {
        println!("{}", PetFormatter::format_status(engine.state()));
    }
    Ok(())
}
