// Exam Countdown
// Terminal countdown to the saved target exam date

use std::io::Write;
use std::path::PathBuf;
use std::thread;

use anyhow::Result;
use chrono::NaiveDate;
use directories::ProjectDirs;

use exam_countdown::services::countdown::{
    CountdownController, FileTargetDateStore, TICK_PERIOD,
};

fn resolve_storage_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "ExamCountdown", "ExamCountdown") {
        let dir = dirs.data_dir();
        std::fs::create_dir_all(dir).ok();
        dir.join("target_date.json")
    } else {
        log::warn!("Unable to resolve project directory; using current dir for target date");
        PathBuf::from("target_date.json")
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Exam Countdown");

    let store = FileTargetDateStore::open(resolve_storage_path())?;
    let mut controller = CountdownController::new(store);

    // Optional argument sets a new target date before counting down.
    if let Some(arg) = std::env::args().nth(1) {
        let date = NaiveDate::parse_from_str(&arg, "%Y-%m-%d")
            .map_err(|err| anyhow::anyhow!("invalid date {arg:?} (expected YYYY-MM-DD): {err}"))?;
        controller.save(Some(date))?;
        log::info!("Target exam date set to {date}");
    }

    let Some(target) = controller.target() else {
        eprintln!("No target exam date set. Run with a date: exam-countdown 2026-06-15");
        return Ok(());
    };

    controller.subscribe(|remaining| {
        print!("\r{remaining} until exam day ");
        let _ = std::io::stdout().flush();
    });

    println!("Counting down to {target} (Ctrl-C to quit)");
    controller.start();

    while !controller.remaining().is_zero() {
        thread::sleep(TICK_PERIOD);
    }
    controller.stop();

    println!("\nExam day has arrived. Good luck!");
    Ok(())
}
