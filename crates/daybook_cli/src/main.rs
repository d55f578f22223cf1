//! Daybook menu binary.
//!
//! # Responsibility
//! - Drive the interactive menu loop and prompts.
//! - Render core views; every decision about data lives in `daybook_core`.
//!
//! Configuration comes from the environment (or a `.env` file):
//! `DAYBOOK_DATA_DIR`, `DAYBOOK_LOG_DIR`, `DAYBOOK_LOG_LEVEL`.

mod input;
mod render;

use chrono::{Local, NaiveDateTime};
use daybook_core::{
    build_briefing, default_log_level, init_logging, quick_stats, Assignment, Collection,
    CollectionStore, Contact, DomainRecord, Errand, Exam, FamilyEvent, FamilyMember, GiftIdea,
    JsonFileStore, Note, PlannerEntry, Record, Reminder, Todo,
};
use log::warn;
use std::env;
use std::path::PathBuf;

fn main() {
    dotenvy::dotenv().ok();

    let data_dir = env::var("DAYBOOK_DATA_DIR").unwrap_or_else(|_| "daybook-data".to_string());
    setup_logging();

    let store = JsonFileStore::new(&data_dir);
    println!(
        "Daybook {} (data in {})",
        daybook_core::core_version(),
        data_dir
    );

    main_menu(&store);
    println!("Bye.");
}

fn setup_logging() {
    let level = env::var("DAYBOOK_LOG_LEVEL").unwrap_or_else(|_| default_log_level().to_string());
    let log_dir = env::var("DAYBOOK_LOG_DIR")
        .ok()
        .map(PathBuf::from)
        .or_else(|| env::current_dir().ok().map(|dir| dir.join("daybook-logs")));

    match log_dir.as_deref().and_then(|dir| dir.to_str()) {
        Some(dir) => {
            if let Err(err) = init_logging(&level, dir) {
                eprintln!("logging disabled: {err}");
            }
        }
        None => eprintln!("logging disabled: no usable log directory"),
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn main_menu(store: &JsonFileStore) {
    loop {
        println!();
        println!("=== Daybook ===");
        println!("  1  Daily briefing");
        println!("  2  Quick stats");
        println!("  3  Assignments");
        println!("  4  Exams");
        println!("  5  To-dos");
        println!("  6  Daily planner");
        println!("  7  Notes");
        println!("  8  Reminders");
        println!("  9  Family");
        println!(" 10  Errands");
        println!(" 11  Contacts");
        println!("  0  Exit");

        match input::prompt_default("Choose", "0").as_str() {
            "1" => match build_briefing(store, now()) {
                Ok(briefing) => render::show_briefing(&briefing, now()),
                Err(err) => report(&err),
            },
            "2" => match quick_stats(store) {
                Ok(stats) => render::show_stats(&stats),
                Err(err) => report(&err),
            },
            "3" => manage(store, "Assignments", add_assignment),
            "4" => manage(store, "Exams", add_exam),
            "5" => manage(store, "To-dos", add_todo),
            "6" => manage(store, "Daily planner", add_planner_entry),
            "7" => notes_menu(store),
            "8" => manage(store, "Reminders", add_reminder),
            "9" => family_menu(store),
            "10" => manage(store, "Errands", add_errand),
            "11" => contacts_menu(store),
            "0" => return,
            other => println!("unknown choice `{other}`"),
        }
    }
}

/// Shared submenu for every dated collection: the CRUD surface is identical,
/// only the add prompts differ per domain.
fn manage<T: DomainRecord>(store: &JsonFileStore, label: &str, add: fn() -> Option<T>) {
    let collection = Collection::<T, _>::new(store);
    loop {
        println!();
        println!("=== {label} ===");
        println!("  1  View");
        println!("  2  Add");
        println!("  3  Complete");
        println!("  4  Reopen");
        println!("  5  Delete");
        println!("  0  Back");

        match input::prompt_default("Choose", "0").as_str() {
            "1" => match collection.ordered(now()) {
                Ok(items) => render::list_records(&items, now()),
                Err(err) => report(&err),
            },
            "2" => {
                if let Some(item) = add() {
                    match collection.add(item) {
                        Ok(_) => println!("added."),
                        Err(err) => report(&err),
                    }
                }
            }
            "3" => with_selected(&collection, "Complete which", |id| {
                collection.complete(id).map(|()| println!("done."))
            }),
            "4" => with_selected(&collection, "Reopen which", |id| {
                collection.reopen(id).map(|()| println!("reopened."))
            }),
            "5" => with_selected(&collection, "Delete which", |id| {
                collection.delete(id).map(|removed| {
                    println!("deleted `{}`.", removed.record().title);
                })
            }),
            "0" => return,
            other => println!("unknown choice `{other}`"),
        }
    }
}

/// Lists the collection, asks for a position, runs `action` on the chosen
/// record's id.
fn with_selected<T: DomainRecord, S: CollectionStore>(
    collection: &Collection<T, S>,
    label: &str,
    action: impl FnOnce(daybook_core::RecordId) -> daybook_core::ServiceResult<()>,
) {
    let items = match collection.ordered(now()) {
        Ok(items) => items,
        Err(err) => return report(&err),
    };
    if items.is_empty() {
        println!("  (nothing here yet)");
        return;
    }
    render::list_records(&items, now());
    let Some(position) = input::prompt_index(label, items.len()) else {
        return;
    };
    if let Err(err) = action(items[position].record().id) {
        report(&err);
    }
}

fn base_record(title: String) -> Record {
    let mut record = Record::new(title, now());
    record.target_datetime = input::prompt_date_optional("Due date");
    record.priority = input::prompt_priority();
    record
}

fn add_assignment() -> Option<Assignment> {
    let title = input::prompt("Assignment title")?;
    let course = input::prompt("Course")?;
    let mut record = Record::new(title, now());
    record.target_datetime = Some(input::prompt_date("Due date")?);
    record.priority = input::prompt_priority();
    Some(Assignment {
        record,
        course,
        notes: input::prompt_optional("Notes").unwrap_or_default(),
    })
}

fn add_exam() -> Option<Exam> {
    let title = input::prompt("Exam title (e.g. Midterm, Final)")?;
    let course = input::prompt("Course")?;
    let mut record = Record::new(title, now());
    record.target_datetime = Some(input::prompt_date("Exam date")?);
    Some(Exam {
        record,
        course,
        location: input::prompt_optional("Location"),
    })
}

fn add_todo() -> Option<Todo> {
    let mut record = base_record(input::prompt("What do you need to do?")?);
    record.category = input::prompt_optional("Category (e.g. School, Family)");
    Some(Todo { record })
}

fn add_planner_entry() -> Option<PlannerEntry> {
    let title = input::prompt("What's the plan?")?;
    let mut record = Record::new(title, now());
    record.target_datetime = Some(input::prompt_date("When")?);
    Some(PlannerEntry { record })
}

fn add_reminder() -> Option<Reminder> {
    let title = input::prompt("What should the reminder say?")?;
    let mut record = Record::new(title, now());
    record.target_datetime = Some(input::prompt_date("Remind on")?);
    Some(Reminder {
        record,
        repeat: input::prompt_repeat(),
    })
}

fn add_errand() -> Option<Errand> {
    let record = base_record(input::prompt("What errand needs running?")?);
    Some(Errand {
        record,
        for_whom: input::prompt_default("For whom", "Family"),
    })
}

fn add_family_event() -> Option<FamilyEvent> {
    let title = input::prompt("Event name")?;
    let mut record = Record::new(title, now());
    record.target_datetime = Some(input::prompt_date("Date")?);
    Some(FamilyEvent {
        record,
        person: input::prompt_optional("Who is it for"),
        location: input::prompt_optional("Location"),
    })
}

fn notes_menu(store: &JsonFileStore) {
    let notes = Collection::<Note, _>::new(store);
    loop {
        println!();
        println!("=== Notes ===");
        println!("  1  View");
        println!("  2  Add");
        println!("  3  Search");
        println!("  4  Delete");
        println!("  0  Back");

        match input::prompt_default("Choose", "0").as_str() {
            "1" => match notes.list() {
                Ok(items) => render::list_notes(&items),
                Err(err) => report(&err),
            },
            "2" => {
                let Some(title) = input::prompt("Title") else {
                    continue;
                };
                let Some(body) = input::prompt("Note content") else {
                    continue;
                };
                let mut record = Record::new(title, now());
                record.category = input::prompt_optional("Tag (e.g. Ideas, School)");
                match notes.add(Note { record, body }) {
                    Ok(_) => println!("note saved."),
                    Err(err) => report(&err),
                }
            }
            "3" => match notes.list() {
                Ok(items) => {
                    let Some(keyword) = input::prompt("Search keyword") else {
                        continue;
                    };
                    let hits: Vec<Note> = items
                        .into_iter()
                        .filter(|note| note.matches(&keyword))
                        .collect();
                    println!("found {} note(s):", hits.len());
                    render::list_notes(&hits);
                }
                Err(err) => report(&err),
            },
            "4" => match notes.list() {
                Ok(items) => {
                    if items.is_empty() {
                        println!("  (no notes saved)");
                        continue;
                    }
                    render::list_notes(&items);
                    if let Some(position) = input::prompt_index("Delete which", items.len()) {
                        if input::confirm("Are you sure? (y/n)") {
                            match notes.delete(items[position].record.id) {
                                Ok(removed) => println!("deleted `{}`.", removed.record.title),
                                Err(err) => report(&err),
                            }
                        }
                    }
                }
                Err(err) => report(&err),
            },
            "0" => return,
            other => println!("unknown choice `{other}`"),
        }
    }
}

fn family_menu(store: &JsonFileStore) {
    loop {
        println!();
        println!("=== Family ===");
        println!("  1  View members & birthdays");
        println!("  2  Add member");
        println!("  3  Family events");
        println!("  4  Gift ideas");
        println!("  0  Back");

        match input::prompt_default("Choose", "0").as_str() {
            "1" => match store.load::<FamilyMember>(FamilyMember::COLLECTION) {
                Ok(members) => render::list_family(&members, now().date()),
                Err(err) => report(&err),
            },
            "2" => add_family_member(store),
            "3" => manage(store, "Family events", add_family_event),
            "4" => gifts_menu(store),
            "0" => return,
            other => println!("unknown choice `{other}`"),
        }
    }
}

fn add_family_member(store: &JsonFileStore) {
    let Some(name) = input::prompt("Name") else {
        return;
    };
    let Some(relation) = input::prompt("Relation (e.g. Mom, Dad, Sister)") else {
        return;
    };
    let birthday = input::prompt_date_optional("Birthday").map(|dt| dt.date());
    let phone = input::prompt_optional("Phone");
    let notes = input::prompt_optional("Notes (favorites, allergies, ...)");

    let result = store
        .load::<FamilyMember>(FamilyMember::COLLECTION)
        .and_then(|mut members| {
            members.push(FamilyMember {
                name,
                relation,
                birthday,
                phone,
                notes,
            });
            store.save(FamilyMember::COLLECTION, &members)
        });

    match result {
        Ok(()) => println!("family member saved."),
        Err(err) => report(&err),
    }
}

fn contacts_menu(store: &JsonFileStore) {
    loop {
        println!();
        println!("=== Contacts ===");
        println!("  1  View");
        println!("  2  Add");
        println!("  0  Back");

        match input::prompt_default("Choose", "0").as_str() {
            "1" => match store.load::<Contact>(Contact::COLLECTION) {
                Ok(contacts) => render::list_contacts(&contacts),
                Err(err) => report(&err),
            },
            "2" => add_contact(store),
            "0" => return,
            other => println!("unknown choice `{other}`"),
        }
    }
}

fn add_contact(store: &JsonFileStore) {
    let Some(name) = input::prompt("Name") else {
        return;
    };
    let relation = input::prompt_default("Relation (e.g. Friend, Professor, Family)", "Other");
    let phone = input::prompt_optional("Phone");
    let email = input::prompt_optional("Email");
    let notes = input::prompt_optional("Notes");

    let result = store
        .load::<Contact>(Contact::COLLECTION)
        .and_then(|mut contacts| {
            contacts.push(Contact {
                name,
                relation,
                phone,
                email,
                notes,
            });
            store.save(Contact::COLLECTION, &contacts)
        });

    match result {
        Ok(()) => println!("contact saved."),
        Err(err) => report(&err),
    }
}

fn gifts_menu(store: &JsonFileStore) {
    loop {
        println!();
        println!("=== Gift ideas ===");
        println!("  1  View");
        println!("  2  Add");
        println!("  3  Mark purchased");
        println!("  0  Back");

        match input::prompt_default("Choose", "0").as_str() {
            "1" => match store.load::<GiftIdea>(GiftIdea::COLLECTION) {
                Ok(gifts) => render::list_gifts(&gifts),
                Err(err) => report(&err),
            },
            "2" => add_gift_idea(store),
            "3" => mark_gift_purchased(store),
            "0" => return,
            other => println!("unknown choice `{other}`"),
        }
    }
}

fn add_gift_idea(store: &JsonFileStore) {
    let Some(for_whom) = input::prompt("For whom?") else {
        return;
    };
    let Some(idea) = input::prompt("Gift idea") else {
        return;
    };
    let budget = input::prompt_optional("Budget range (e.g. $20-50)");
    let occasion = input::prompt_optional("Occasion (e.g. Birthday, Christmas)");

    let result = store
        .load::<GiftIdea>(GiftIdea::COLLECTION)
        .and_then(|mut gifts| {
            gifts.push(GiftIdea {
                for_whom,
                idea,
                budget,
                occasion,
                purchased: false,
            });
            store.save(GiftIdea::COLLECTION, &gifts)
        });

    match result {
        Ok(()) => println!("gift idea saved."),
        Err(err) => report(&err),
    }
}

fn mark_gift_purchased(store: &JsonFileStore) {
    let mut gifts = match store.load::<GiftIdea>(GiftIdea::COLLECTION) {
        Ok(gifts) => gifts,
        Err(err) => return report(&err),
    };
    if gifts.is_empty() {
        println!("  (no gift ideas saved)");
        return;
    }
    render::list_gifts(&gifts);
    let Some(position) = input::prompt_index("Mark which", gifts.len()) else {
        return;
    };
    gifts[position].purchased = true;
    match store.save(GiftIdea::COLLECTION, &gifts) {
        Ok(()) => println!("marked purchased."),
        Err(err) => report(&err),
    }
}

fn report(err: &dyn std::fmt::Display) {
    warn!("event=menu_action_failed detail={err}");
    println!("error: {err}");
}
