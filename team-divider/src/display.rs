use std::fmt::Write;
use crate::history::TeamRecord;
use crate::teams::{Team, TeamPair};

const COLUMN_WIDTH: usize = 24;

fn format_row(team: &Team, index: usize) -> String {
    team.get(index)
        .map(|p| format!("{:<8} {}", p.position.label(), p.name))
        .unwrap_or_default()
}

/// Formats two teams side by side: position label then name, one position per line
pub fn format_team_pair(teams: &TeamPair) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<width$} {}", "Team A", "Team B", width = COLUMN_WIDTH);
    let rows = teams.team_a.len().max(teams.team_b.len());
    for i in 0..rows {
        let _ = writeln!(
            out,
            "{:<width$} {}",
            format_row(&teams.team_a, i),
            format_row(&teams.team_b, i),
            width = COLUMN_WIDTH
        );
    }
    out
}

/// Formats a saved record with its date and id above the teams
pub fn format_record(record: &TeamRecord) -> String {
    format!(
        "** {} (id: {}) **\n{}",
        record.created_at,
        record.id,
        format_team_pair(&record.teams())
    )
}

/// Prints every saved record, newest first
pub fn print_history(records: &[TeamRecord]) {
    if records.is_empty() {
        println!("No team history yet.");
        return;
    }

    println!("=== Team History ({} records) ===", records.len());
    for record in records {
        println!("\n{}", format_record(record));
    }
}
