use colored::Colorize;
use installment_core::display::{
    format_bdt, render_schedule, transition_frames, TRANSITION_DURATION_MS,
};
use installment_core::schedule::InstallmentSchedule;
use rust_decimal::Decimal;
use serde_json::Value;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use super::{schedule_from, table, warnings_of};

const FRAMES: usize = 25;
const AMOUNT_WIDTH: usize = 16;

/// Print a schedule the way the calculator window lays it out.
///
/// Non-schedule values fall back to the table formatter.
pub fn print_card(value: &Value, animate: bool) {
    let Some(schedule) = schedule_from(value) else {
        table::print_table(value);
        return;
    };

    let display = render_schedule(&schedule);

    println!("{}", "Installment Schedule".bold());
    println!("  {}", display.credit_line);
    println!("  {}", display.fee_line);
    println!("  {}", display.waiver_line);
    println!();
    for line in &display.installments {
        println!(
            "  {:<14} {:>4} {:>width$}",
            line.title,
            line.share,
            line.amount,
            width = AMOUNT_WIDTH
        );
    }

    if animate && atty::is(atty::Stream::Stdout) {
        count_up_total(&schedule);
    }
    println!(
        "  {:<19} {:>width$}",
        "Total:",
        display.total_line.bold(),
        width = AMOUNT_WIDTH
    );

    for w in warnings_of(value) {
        println!("  {} {}", "!".yellow().bold(), w);
    }
}

fn count_up_total(schedule: &InstallmentSchedule) {
    let pause = Duration::from_millis(TRANSITION_DURATION_MS / FRAMES as u64);
    let mut stdout = io::stdout();
    for amount in transition_frames(Decimal::ZERO, schedule.total, FRAMES) {
        let _ = write!(
            stdout,
            "\r  {:<19} {:>width$}",
            "Total:",
            format_bdt(amount),
            width = AMOUNT_WIDTH
        );
        let _ = stdout.flush();
        thread::sleep(pause);
    }
    let _ = write!(stdout, "\r");
}
