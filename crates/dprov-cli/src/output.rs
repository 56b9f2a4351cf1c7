use colored::Colorize;

use dprov_core::outcome::{EnsureOutcome, FieldOutcome, RunReport};

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

pub fn print_info(msg: &str) {
    println!("{} {}", "ℹ".cyan(), msg);
}

/// Per-step markers in execution order, then the endpoint summary.
/// Printed whenever authentication succeeded, even if some steps
/// recorded failures.
pub fn print_report(report: &RunReport, base_url: &str) {
    match &report.collection_outcome {
        EnsureOutcome::Created => {
            print_success(&format!("Collection \"{}\" created", report.collection));
        }
        EnsureOutcome::AlreadyPresent => {
            print_info(&format!("Collection \"{}\" already exists", report.collection));
        }
        EnsureOutcome::Failed(e) => {
            print_error(&format!("Collection \"{}\" creation failed: {e}", report.collection));
        }
    }

    for (name, outcome) in &report.fields {
        match outcome {
            FieldOutcome::Updated => print_success(&format!("Field \"{name}\" updated")),
            FieldOutcome::Created => print_success(&format!("Field \"{name}\" created")),
            FieldOutcome::Failed(e) => print_error(&format!("Field \"{name}\" failed: {e}")),
        }
    }

    match &report.permission_outcome {
        EnsureOutcome::Created => print_success("Public read permission created"),
        EnsureOutcome::AlreadyPresent => print_info("Public read permission already exists"),
        EnsureOutcome::Failed(e) => print_error(&format!("Permission setup failed: {e}")),
    }

    println!();
    let failures = report.failure_count();
    if failures == 0 {
        print_success("Provisioning completed");
    } else {
        print_info(&format!(
            "Provisioning completed with {failures} recorded failure(s); re-run after fixing the cause"
        ));
    }
    println!("{} {}/admin", "Admin panel:".cyan(), base_url);
    println!(
        "{} {}/items/{}",
        "Items API:".cyan(),
        base_url,
        report.collection
    );
}
