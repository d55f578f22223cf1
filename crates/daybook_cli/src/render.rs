//! Plain-text rendering of records and the briefing.

use chrono::NaiveDateTime;
use daybook_core::{
    derive_status, friendly_deadline, next_birthday, Briefing, Contact, Countdown, DerivedStatus,
    FamilyMember, GiftIdea, Note, Priority, QuickStats, Record, Temporal,
};

/// One-character marker for a record's derived state.
fn status_glyph(record: &Record, now: NaiveDateTime) -> &'static str {
    match derive_status(record, now) {
        DerivedStatus::Overdue => "!",
        DerivedStatus::DueToday => "*",
        DerivedStatus::Upcoming => " ",
        DerivedStatus::Completed => "x",
    }
}

fn priority_tag(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "high",
        Priority::Medium => "med",
        Priority::Low => "low",
    }
}

fn deadline_text(record: &Record, now: NaiveDateTime) -> String {
    match record.target_datetime {
        Some(target) => friendly_deadline(target, now),
        None => "no date".to_string(),
    }
}

/// Numbered listing of any record collection; positions match selection
/// prompts.
pub fn list_records<T: Temporal>(items: &[T], now: NaiveDateTime) {
    if items.is_empty() {
        println!("  (nothing here yet)");
        return;
    }
    for (position, item) in items.iter().enumerate() {
        let record = item.record();
        println!(
            "  {:>2}. [{}] {:<40} {:<8} {}",
            position + 1,
            status_glyph(record, now),
            record.title,
            priority_tag(record.priority),
            deadline_text(record, now),
        );
    }
}

pub fn list_notes(notes: &[Note]) {
    if notes.is_empty() {
        println!("  (no notes saved)");
        return;
    }
    for (position, note) in notes.iter().enumerate() {
        let tag = note.record.category.as_deref().unwrap_or("general");
        println!("  {:>2}. {} ({tag})", position + 1, note.record.title);
        println!("      {}", note.body);
    }
}

pub fn list_family(members: &[FamilyMember], today: chrono::NaiveDate) {
    if members.is_empty() {
        println!("  (no family members saved)");
        return;
    }
    for (position, member) in members.iter().enumerate() {
        let birthday_text = match member.birthday {
            Some(birthday) => {
                let (next, days) = next_birthday(birthday, today);
                match days {
                    0 => "birthday TODAY".to_string(),
                    1 => "birthday tomorrow".to_string(),
                    _ => format!("birthday {next} (in {days} days)"),
                }
            }
            None => "birthday unknown".to_string(),
        };
        println!(
            "  {:>2}. {} ({}) — {birthday_text}",
            position + 1,
            member.name,
            member.relation
        );
    }
}

pub fn list_contacts(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("  (no contacts saved)");
        return;
    }
    for (position, contact) in contacts.iter().enumerate() {
        let phone = contact.phone.as_deref().unwrap_or("-");
        let email = contact.email.as_deref().unwrap_or("-");
        println!(
            "  {:>2}. {:<24} {:<12} {:<16} {email}",
            position + 1,
            contact.name,
            contact.relation,
            phone
        );
        if let Some(notes) = &contact.notes {
            println!("      {notes}");
        }
    }
}

pub fn list_gifts(gifts: &[GiftIdea]) {
    if gifts.is_empty() {
        println!("  (no gift ideas saved)");
        return;
    }
    for (position, gift) in gifts.iter().enumerate() {
        let bought = if gift.purchased { "x" } else { " " };
        let budget = gift.budget.as_deref().unwrap_or("-");
        let occasion = gift.occasion.as_deref().unwrap_or("-");
        println!(
            "  {:>2}. [{bought}] {} for {} ({occasion}, {budget})",
            position + 1,
            gift.idea,
            gift.for_whom
        );
    }
}

pub fn show_briefing(briefing: &Briefing, now: NaiveDateTime) {
    println!("=== Daily briefing — {} ===", now.format("%A, %B %d %H:%M"));

    if !briefing.todays_plan.is_empty() {
        println!("Today's plan:");
        for entry in &briefing.todays_plan {
            let time = entry
                .record
                .target_datetime
                .map(|target| target.format("%H:%M").to_string())
                .unwrap_or_default();
            let done = if entry.record.is_pending() { " " } else { "x" };
            println!("  [{done}] {time}  {}", entry.record.title);
        }
    }

    if !briefing.urgent_assignments.is_empty() {
        println!("URGENT deadlines:");
        for assignment in &briefing.urgent_assignments {
            println!(
                "  ! {} ({}) — {}",
                assignment.record.title,
                assignment.course,
                deadline_text(&assignment.record, now)
            );
        }
    } else if !briefing.upcoming_assignments.is_empty() {
        println!("Upcoming assignments:");
        for assignment in &briefing.upcoming_assignments {
            println!(
                "  - {} ({}) — {}",
                assignment.record.title,
                assignment.course,
                deadline_text(&assignment.record, now)
            );
        }
    } else {
        println!("No pending assignments. All caught up.");
    }

    if !briefing.upcoming_exams.is_empty() {
        println!("Upcoming exams:");
        for outlook in &briefing.upcoming_exams {
            let countdown = match outlook.countdown {
                Countdown::Elapsed => "today".to_string(),
                remaining => remaining.to_string(),
            };
            println!(
                "  - {} ({}) — {countdown}",
                outlook.exam.record.title, outlook.exam.course
            );
        }
    }

    if !briefing.todays_reminders.is_empty() {
        println!("Today's reminders:");
        for reminder in &briefing.todays_reminders {
            println!("  - {}", reminder.record.title);
        }
    }

    if !briefing.high_priority_todos.is_empty() {
        println!("High priority tasks:");
        for todo in &briefing.high_priority_todos {
            println!("  - {}", todo.record.title);
        }
    }

    if !briefing.upcoming_family_events.is_empty() {
        println!("Family events:");
        for event in &briefing.upcoming_family_events {
            println!(
                "  - {} — {}",
                event.record.title,
                deadline_text(&event.record, now)
            );
        }
    }

    if briefing.pending_errands > 0 {
        println!("Errands to run: {}", briefing.pending_errands);
    }
}

pub fn show_stats(stats: &QuickStats) {
    println!("=== Quick stats ===");
    println!(
        "  Assignments: {} pending / {} done",
        stats.assignments_pending, stats.assignments_done
    );
    println!(
        "  To-dos:      {} pending / {} done",
        stats.todos_pending, stats.todos_done
    );
    println!("  Exams:       {} scheduled", stats.exams_scheduled);
    println!("  Reminders:   {} set", stats.reminders_set);
    println!("  Notes:       {} saved", stats.notes_saved);
    println!("  Errands:     {} pending", stats.errands_pending);
}
