//! Cross-collection daily briefing.
//!
//! # Responsibility
//! - Aggregate every domain collection into one morning-briefing view.
//!
//! # Invariants
//! - Ordering, status and countdowns come from the shared components; this
//!   module never reimplements them.
//! - Read-only: building a briefing persists nothing.

use crate::model::domains::{
    Assignment, Errand, Exam, FamilyEvent, Note, PlannerEntry, Reminder, Todo,
};
use crate::model::record::{Priority, Temporal};
use crate::service::{Collection, ServiceResult};
use crate::store::CollectionStore;
use crate::temporal::{days_until, derive_status, Countdown, DerivedStatus};
use chrono::NaiveDateTime;

/// Deadlines within this many days count as urgent.
const URGENT_WINDOW_DAYS: i64 = 3;
/// Family events this far out still make the briefing.
const FAMILY_WINDOW_DAYS: i64 = 14;
/// Per-section cap so the briefing stays one screen.
const SECTION_LIMIT: usize = 3;

/// An exam paired with its remaining time.
#[derive(Debug, Clone)]
pub struct ExamOutlook {
    pub exam: Exam,
    pub countdown: Countdown,
}

/// Combined view over all collections for one moment in time.
#[derive(Debug, Clone)]
pub struct Briefing {
    pub todays_plan: Vec<PlannerEntry>,
    pub urgent_assignments: Vec<Assignment>,
    pub upcoming_assignments: Vec<Assignment>,
    pub upcoming_exams: Vec<ExamOutlook>,
    pub todays_reminders: Vec<Reminder>,
    pub high_priority_todos: Vec<Todo>,
    pub upcoming_family_events: Vec<FamilyEvent>,
    pub pending_errands: usize,
}

/// Builds the briefing for the supplied clock.
pub fn build_briefing<S: CollectionStore>(store: &S, now: NaiveDateTime) -> ServiceResult<Briefing> {
    let assignments = Collection::<Assignment, _>::new(store).ordered(now)?;
    let exams = Collection::<Exam, _>::new(store).ordered(now)?;
    let reminders = Collection::<Reminder, _>::new(store).ordered(now)?;
    let planner = Collection::<PlannerEntry, _>::new(store).ordered(now)?;
    let events = Collection::<FamilyEvent, _>::new(store).ordered(now)?;
    let errands = Collection::<Errand, _>::new(store).list()?;
    let todos = Collection::<Todo, _>::new(store).ordered(now)?;

    let (urgent_assignments, upcoming_assignments): (Vec<_>, Vec<_>) = assignments
        .into_iter()
        .filter(|a| a.record.is_pending())
        .partition(|a| urgent(a, now));

    let upcoming_exams = exams
        .into_iter()
        .filter(|e| e.record.is_pending() && !past(e, now))
        .take(SECTION_LIMIT)
        .map(|exam| {
            let countdown = exam
                .record
                .target_datetime
                .map(|target| Countdown::until(target, now))
                .unwrap_or(Countdown::Elapsed);
            ExamOutlook { exam, countdown }
        })
        .collect();

    let todays_reminders = reminders
        .into_iter()
        .filter(|r| r.record.is_pending() && due_today(r, now))
        .collect();

    let todays_plan = planner
        .into_iter()
        .filter(|p| due_today(p, now))
        .collect();

    let high_priority_todos = todos
        .into_iter()
        .filter(|t| t.record.is_pending() && t.record.priority == Priority::High)
        .take(SECTION_LIMIT)
        .collect();

    let upcoming_family_events = events
        .into_iter()
        .filter(|e| e.record.is_pending() && within_days(e, now, FAMILY_WINDOW_DAYS) && !past(e, now))
        .collect();

    let pending_errands = errands.iter().filter(|e| e.record.is_pending()).count();

    Ok(Briefing {
        todays_plan,
        urgent_assignments,
        upcoming_assignments: upcoming_assignments
            .into_iter()
            .take(SECTION_LIMIT)
            .collect(),
        upcoming_exams,
        todays_reminders,
        high_priority_todos,
        upcoming_family_events,
        pending_errands,
    })
}

/// Pending/done tallies across all collections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickStats {
    pub assignments_pending: usize,
    pub assignments_done: usize,
    pub todos_pending: usize,
    pub todos_done: usize,
    pub exams_scheduled: usize,
    pub reminders_set: usize,
    pub notes_saved: usize,
    pub errands_pending: usize,
}

/// Counts records per collection for the stats panel.
pub fn quick_stats<S: CollectionStore>(store: &S) -> ServiceResult<QuickStats> {
    let assignments = Collection::<Assignment, _>::new(store).list()?;
    let todos = Collection::<Todo, _>::new(store).list()?;
    let exams = Collection::<Exam, _>::new(store).list()?;
    let reminders = Collection::<Reminder, _>::new(store).list()?;
    let notes = Collection::<Note, _>::new(store).list()?;
    let errands = Collection::<Errand, _>::new(store).list()?;

    Ok(QuickStats {
        assignments_pending: assignments.iter().filter(|a| a.record.is_pending()).count(),
        assignments_done: assignments.iter().filter(|a| !a.record.is_pending()).count(),
        todos_pending: todos.iter().filter(|t| t.record.is_pending()).count(),
        todos_done: todos.iter().filter(|t| !t.record.is_pending()).count(),
        exams_scheduled: exams.len(),
        reminders_set: reminders.len(),
        notes_saved: notes.len(),
        errands_pending: errands.iter().filter(|e| e.record.is_pending()).count(),
    })
}

/// Overdue, or due within the urgent window.
fn urgent<T: Temporal>(item: &T, now: NaiveDateTime) -> bool {
    if derive_status(item.record(), now) == DerivedStatus::Overdue {
        return true;
    }
    within_days(item, now, URGENT_WINDOW_DAYS)
}

fn within_days<T: Temporal>(item: &T, now: NaiveDateTime, window: i64) -> bool {
    item.record()
        .target_datetime
        .map(|target| days_until(target, now) <= window)
        .unwrap_or(false)
}

fn past<T: Temporal>(item: &T, now: NaiveDateTime) -> bool {
    item.record()
        .target_datetime
        .map(|target| days_until(target, now) < 0)
        .unwrap_or(false)
}

/// Calendar-day match; completion state is left to the caller so the daily
/// plan can keep showing finished slots.
fn due_today<T: Temporal>(item: &T, now: NaiveDateTime) -> bool {
    item.record()
        .target_datetime
        .map(|target| days_until(target, now) == 0)
        .unwrap_or(false)
}
