//! Run reporting and size formatting

use std::fmt::Write;

use super::MirrorReport;

/// Mirror run reporter
pub struct MirrorReporter;

impl MirrorReporter {
    /// Generate a summary report
    #[must_use]
    pub fn generate_summary(report: &MirrorReport) -> String {
        let mut output = String::new();

        if report.dry_run {
            output.push_str("\n=== Mirror Summary (dry run) ===\n");
        } else {
            output.push_str("\n=== Mirror Summary ===\n");
        }

        if report.directories_made > 0 || report.files_copied > 0 {
            let _ = writeln!(output, "Folders made:    {}", report.directories_made);
            let _ = writeln!(
                output,
                "Files copied:    {} ({} MB)",
                report.files_copied,
                bytes_to_mb(report.bytes_copied)
            );
        }
        if report.directories_removed > 0 || report.files_removed > 0 {
            let _ = writeln!(
                output,
                "Files removed:   {} ({} MB)",
                report.files_removed,
                bytes_to_mb(report.bytes_removed)
            );
            let _ = writeln!(output, "Folders removed: {}", report.directories_removed);
        }

        let _ = writeln!(output, "\nTotal operations: {}", report.total_operations());

        output
    }
}

/// Whole megabytes (10^6 bytes, rounded down) with grouped digits
#[must_use]
pub fn bytes_to_mb(bytes: u64) -> String {
    group_thousands(bytes / 1_000_000)
}

/// Decimal digits in groups of three separated by a space
///
/// `1234567` becomes `1 234 567`.
#[must_use]
pub fn group_thousands(mut value: u64) -> String {
    let mut reversed = Vec::with_capacity(26);
    let mut digits = 0;

    loop {
        if digits > 0 && digits % 3 == 0 {
            reversed.push(b' ');
        }
        // value % 10 is a single digit
        #[allow(clippy::cast_possible_truncation)]
        reversed.push(b'0' + (value % 10) as u8);
        digits += 1;
        value /= 10;
        if value == 0 {
            break;
        }
    }

    reversed.iter().rev().map(|&byte| char::from(byte)).collect()
}
